//! Full HTML documents: card page, not-found page and landing page.

use crate::domain::model::{Card, CardBundle};
use crate::render::html::escape;
use crate::render::registry::{component_key, resolve, TemplateVariant};
use crate::render::templates::CardView;
use crate::utils::format::non_blank;

const BASE_STYLE: &str = r#"<style>
*,*::before,*::after{box-sizing:border-box}
body{margin:0;-webkit-font-smoothing:antialiased}
a{cursor:pointer}
</style>"#;

/// Head metadata for a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PageMetadata {
    pub fn for_card(card: &Card) -> Self {
        let title = match non_blank(card.title.as_deref()) {
            Some(job) => format!("{} - {}", card.full_name, job),
            None => card.full_name.clone(),
        };
        let description = non_blank(card.bio.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("View {}'s business card", card.full_name));

        Self {
            title,
            description: Some(description),
            image: non_blank(card.avatar_url.as_deref()).map(str::to_string),
        }
    }

    pub fn not_found() -> Self {
        Self {
            title: "Card Not Found".to_string(),
            description: None,
            image: None,
        }
    }

    fn head_tags(&self) -> String {
        let title = escape(&self.title);
        let mut tags = format!("<title>{}</title>", title);

        if let Some(description) = &self.description {
            let description = escape(description);
            tags.push_str(&format!(
                r#"<meta name="description" content="{description}" /><meta property="og:title" content="{title}" /><meta property="og:description" content="{description}" /><meta property="og:type" content="profile" /><meta name="twitter:card" content="summary" /><meta name="twitter:title" content="{title}" /><meta name="twitter:description" content="{description}" />"#
            ));
        }

        if let Some(image) = &self.image {
            let image = escape(image);
            tags.push_str(&format!(
                r#"<meta property="og:image" content="{image}" /><meta name="twitter:image" content="{image}" />"#
            ));
        }

        tags
    }
}

fn document(metadata: &PageMetadata, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8" /><meta name="viewport" content="width=device-width, initial-scale=1" />{}{}</head><body>{}</body></html>"#,
        metadata.head_tags(),
        BASE_STYLE,
        body
    )
}

/// Renders the bundle with whichever layout its template resolves to.
pub fn render_card_page(bundle: &CardBundle) -> String {
    let template = bundle.template.as_ref();
    let variant = resolve(template);
    let template_key =
        component_key(template).unwrap_or_else(|| TemplateVariant::DEFAULT.key().to_string());

    tracing::debug!(
        public_id = %bundle.card.public_id,
        variant = variant.key(),
        template_key = %template_key,
        "rendering card"
    );

    let view = CardView::from_bundle(bundle);
    let body = format!(
        r#"<div data-template-key="{}">{}</div>"#,
        escape(&template_key),
        (variant.renderer())(&view)
    );

    document(&PageMetadata::for_card(&bundle.card), &body)
}

pub fn render_not_found_page() -> String {
    let body = r#"<main style="min-height:100vh;display:flex;align-items:center;justify-content:center;font-family:system-ui,sans-serif;background:linear-gradient(135deg,#f9fafb,#f3f4f6);text-align:center;padding:1rem"><div><h1 style="font-size:3.75rem;margin:0;color:#111827">404</h1><h2 style="font-size:1.5rem;color:#374151">Card Not Found</h2><p style="color:#4b5563;max-width:28rem">This business card doesn&#39;t exist or hasn&#39;t been published yet.</p><a href="/" style="display:inline-block;margin-top:1rem;padding:.75rem 1.5rem;background:#2563eb;color:#fff;border-radius:.5rem;text-decoration:none">Go Home</a></div></main>"#;
    document(&PageMetadata::not_found(), body)
}

pub fn render_home_page() -> String {
    let metadata = PageMetadata {
        title: "Virtual Business Cards".to_string(),
        description: Some(
            "Share your digital business card with anyone, anywhere.".to_string(),
        ),
        image: None,
    };

    let features = [
        (
            "Multiple Templates",
            "Choose from Modern, Minimal, Classic or Premium designs.",
        ),
        (
            "Secure &amp; Private",
            "Only published cards are visible to the public.",
        ),
        (
            "Real-time Updates",
            "Changes made in the admin panel show up on your public card within a minute.",
        ),
    ];

    let mut body = String::from(
        r#"<main style="max-width:64rem;margin:0 auto;padding:4rem 1rem;font-family:system-ui,sans-serif;text-align:center"><h1 style="font-size:3rem">Share Your Digital Business Card</h1><p style="font-size:1.25rem;color:#4b5563">Modern, beautiful, and instant.</p><section style="display:flex;flex-wrap:wrap;gap:2rem;margin-top:4rem">"#,
    );
    for (title, text) in features {
        body.push_str(&format!(
            r#"<div style="flex:1 1 16rem;padding:1.5rem;border-radius:1rem;box-shadow:0 10px 15px -3px rgba(0,0,0,.1)"><h3>{}</h3><p style="color:#4b5563">{}</p></div>"#,
            title, text
        ));
    }
    body.push_str(
        r#"</section><h3 style="margin-top:5rem">Your Card URL Format</h3><code style="font-size:1.125rem;background:#f3f4f6;padding:1rem 1.5rem;border-radius:.5rem">yoursite.com/<span style="color:#9333ea">your-unique-id</span></code></main>"#,
    );

    document(&metadata, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CardTemplate;
    use serde_json::json;

    fn card() -> Card {
        Card {
            id: "c1".to_string(),
            public_id: "ada".to_string(),
            full_name: "Ada Lovelace".to_string(),
            is_published: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_metadata_without_title_or_bio() {
        let metadata = PageMetadata::for_card(&card());
        assert_eq!(metadata.title, "Ada Lovelace");
        assert_eq!(
            metadata.description.as_deref(),
            Some("View Ada Lovelace's business card")
        );
        assert_eq!(metadata.image, None);
    }

    #[test]
    fn test_metadata_with_title_bio_and_avatar() {
        let mut card = card();
        card.title = Some("Analyst".to_string());
        card.bio = Some("First programmer".to_string());
        card.avatar_url = Some("https://cdn.example.com/ada.png".to_string());

        let metadata = PageMetadata::for_card(&card);
        assert_eq!(metadata.title, "Ada Lovelace - Analyst");
        assert_eq!(metadata.description.as_deref(), Some("First programmer"));

        let head = metadata.head_tags();
        assert!(head.contains(r#"<meta property="og:type" content="profile" />"#));
        assert!(head.contains(r#"<meta property="og:image" content="https://cdn.example.com/ada.png" />"#));
        assert!(head.contains(r#"<meta name="twitter:card" content="summary" />"#));
    }

    #[test]
    fn test_card_page_defaults_to_modern() {
        let html = render_card_page(&CardBundle::new(card(), vec![], None));
        assert!(html.contains(r#"data-template-key="modern""#));
        assert!(html.contains(r#"class="modern""#));
        assert!(html.contains("<title>Ada Lovelace</title>"));
    }

    #[test]
    fn test_card_page_uses_resolved_template() {
        let template = CardTemplate {
            id: "t1".to_string(),
            name: "Anything".to_string(),
            config_json: json!({"componentKey": "Minimal Template"}),
            ..Default::default()
        };
        let html = render_card_page(&CardBundle::new(card(), vec![], Some(template)));
        assert!(html.contains(r#"data-template-key="minimal-template""#));
        assert!(html.contains(r#"class="minimal""#));
    }

    #[test]
    fn test_card_page_escapes_user_text() {
        let mut card = card();
        card.full_name = "<script>alert(1)</script>".to_string();
        let html = render_card_page(&CardBundle::new(card, vec![], None));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found_page();
        assert!(html.contains("<title>Card Not Found</title>"));
        assert!(html.contains("404"));
        assert!(html.contains(r#"href="/""#));
    }
}
