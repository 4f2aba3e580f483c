use crate::domain::model::{Card, CardBundle, CardLink, CardTemplate};
use crate::domain::ports::{CardBackend, ConfigProvider, PublicCardResponse};
use crate::utils::error::{CardError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const PUBLIC_CARD_FUNCTION: &str = "get-public-card";
const CARDS_TABLE: &str = "cards";
const LINKS_TABLE: &str = "card_links";
const TEMPLATES_TABLE: &str = "card_templates";

/// Supabase project reached with the anonymous key: the `get-public-card`
/// edge function plus read-only REST queries.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    base_url: Url,
    anon_key: String,
    client: Client,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CardError::ConfigError {
                message: format!("backend URL '{}' cannot carry a path", base_url),
            });
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            anon_key: anon_key.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::new(
            config.backend_url(),
            config.anon_key(),
            config.request_timeout(),
        )
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let url = self.endpoint(&["rest", "v1", table]);
        tracing::debug!("Querying {} with {:?}", url, query);

        let response = self
            .authorized(self.client.get(url.clone()))
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CardError::UpstreamError {
                status: response.status().as_u16(),
                endpoint: url.path().to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CardBackend for SupabaseClient {
    async fn fetch_public_card(&self, public_id: &str) -> Result<PublicCardResponse> {
        let url = self.endpoint(&["functions", "v1", PUBLIC_CARD_FUNCTION, public_id]);
        tracing::debug!("Calling edge function {}", url);

        let response = self.authorized(self.client.get(url.clone())).send().await?;
        let status = response.status();
        tracing::debug!("Edge function response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(PublicCardResponse::NotFound);
        }
        if !status.is_success() {
            return Err(CardError::UpstreamError {
                status: status.as_u16(),
                endpoint: url.path().to_string(),
            });
        }

        // Typed decoding doubles as schema validation; a payload that does
        // not decode counts as a soft failure.
        let body = response.bytes().await?;
        let bundle: CardBundle = serde_json::from_slice(&body)?;
        Ok(PublicCardResponse::Found(bundle))
    }

    async fn find_published_card(&self, public_id: &str) -> Result<Option<Card>> {
        let cards: Vec<Card> = self
            .select(
                CARDS_TABLE,
                &[
                    ("select", "*".to_string()),
                    ("public_id", format!("eq.{}", public_id)),
                    ("is_published", "eq.true".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;

        Ok(cards.into_iter().find(|card| card.is_published))
    }

    async fn list_card_links(&self, card_id: &str) -> Result<Vec<CardLink>> {
        self.select(
            LINKS_TABLE,
            &[
                ("select", "*".to_string()),
                ("card_id", format!("eq.{}", card_id)),
                ("order", "order_index.asc".to_string()),
            ],
        )
        .await
    }

    async fn find_template(&self, template_id: &str) -> Result<Option<CardTemplate>> {
        let templates: Vec<CardTemplate> = self
            .select(
                TEMPLATES_TABLE,
                &[
                    ("select", "*".to_string()),
                    ("id", format!("eq.{}", template_id)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;

        Ok(templates.into_iter().next())
    }
}
