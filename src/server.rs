//! HTTP front end for public card pages.

use crate::core::contact::{build_vcard, vcard_filename, VCARD_CONTENT_TYPE};
use crate::core::fetcher::CardFetcher;
use crate::domain::ports::CardBackend;
use crate::render::{render_card_page, render_home_page, render_not_found_page};
use crate::utils::error::Result;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Routes:
/// - `GET /` landing page
/// - `GET /{card_id}` card page, 404 page when absent
/// - `GET /{card_id}/contact.vcf` vCard download
pub fn create_router<B: CardBackend + 'static>(fetcher: Arc<CardFetcher<B>>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
        .route("/{card_id}", get(card_page_handler::<B>))
        .route("/{card_id}/contact.vcf", get(contact_file_handler::<B>))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(fetcher)
}

pub async fn serve<B: CardBackend + 'static>(
    bind_address: &str,
    fetcher: Arc<CardFetcher<B>>,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    tracing::info!("🌐 Serving cards on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(fetcher))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn home_handler() -> Html<String> {
    Html(render_home_page())
}

async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, Html(render_not_found_page())).into_response()
}

async fn card_page_handler<B: CardBackend + 'static>(
    State(fetcher): State<Arc<CardFetcher<B>>>,
    Path(card_id): Path<String>,
) -> Response {
    match fetcher.fetch(&card_id).await {
        Some(bundle) => Html(render_card_page(&bundle)).into_response(),
        None => not_found_handler().await,
    }
}

async fn contact_file_handler<B: CardBackend + 'static>(
    State(fetcher): State<Arc<CardFetcher<B>>>,
    Path(card_id): Path<String>,
) -> Response {
    let Some(bundle) = fetcher.fetch(&card_id).await else {
        return not_found_handler().await;
    };

    let payload = build_vcard(&bundle.card, &bundle.links);
    let disposition = attachment_disposition(&vcard_filename(&bundle.card.full_name));

    (
        [
            (header::CONTENT_TYPE, VCARD_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        payload,
    )
        .into_response()
}

/// `attachment` disposition with an ASCII `filename` and, for names outside
/// printable ASCII, an RFC 6266 `filename*` carrying the UTF-8 form.
/// Control characters are dropped from both.
fn attachment_disposition(filename: &str) -> String {
    let visible: String = filename.chars().filter(|c| !c.is_control()).collect();

    let ascii: String = visible
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            ' '..='~' => c,
            _ => '_',
        })
        .collect();

    if visible.is_ascii() {
        format!("attachment; filename=\"{}\"", ascii)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            ascii,
            percent_encode_attr(&visible)
        )
    }
}

/// RFC 5987 `attr-char` encoding.
fn percent_encode_attr(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'a'..=b'z'
            | b'A'..=b'Z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_for_plain_name() {
        assert_eq!(
            attachment_disposition("ada-lovelace.vcf"),
            "attachment; filename=\"ada-lovelace.vcf\""
        );
        assert_eq!(
            attachment_disposition("grace-\"amazing\"-hopper.vcf"),
            "attachment; filename=\"grace-_amazing_-hopper.vcf\""
        );
    }

    #[test]
    fn test_disposition_drops_control_characters() {
        let value = attachment_disposition("ada\u{7}lovelace.vcf");
        assert_eq!(value, "attachment; filename=\"adalovelace.vcf\"");
        assert!(header::HeaderValue::from_str(&value).is_ok());
    }

    #[test]
    fn test_disposition_encodes_non_ascii_names() {
        let value = attachment_disposition("josé-müller.vcf");
        assert_eq!(
            value,
            "attachment; filename=\"jos_-m_ller.vcf\"; filename*=UTF-8''jos%C3%A9-m%C3%BCller.vcf"
        );
        assert!(header::HeaderValue::from_str(&value).is_ok());
    }
}
