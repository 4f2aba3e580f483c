use crate::domain::model::{Card, CardBundle, CardLink, CardTemplate};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn anon_key(&self) -> &str;
    fn bind_address(&self) -> &str;
    fn cache_ttl(&self) -> Duration;
    fn cache_max_entries(&self) -> u64;
    fn request_timeout(&self) -> Duration;
}

/// Outcome of the primary (edge function) lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicCardResponse {
    Found(CardBundle),
    /// Definitive absence; no fallback is attempted.
    NotFound,
}

/// Remote store holding cards, links and templates.
///
/// `fetch_public_card` is the primary tier; the remaining methods are the
/// direct queries used when the primary tier fails.
#[async_trait]
pub trait CardBackend: Send + Sync {
    async fn fetch_public_card(&self, public_id: &str) -> Result<PublicCardResponse>;

    /// Exactly zero or one published card with this public identifier.
    async fn find_published_card(&self, public_id: &str) -> Result<Option<Card>>;

    /// Links ordered by `order_index` ascending.
    async fn list_card_links(&self, card_id: &str) -> Result<Vec<CardLink>>;

    async fn find_template(&self, template_id: &str) -> Result<Option<CardTemplate>>;
}
