//! Two-tier card retrieval.
//!
//! The primary tier asks the backend for a ready-made bundle. A definitive
//! "not found" ends the lookup; any other failure falls through to direct
//! queries against the backing store. Failures never escape: callers get
//! either a bundle or `None`.

use crate::domain::model::CardBundle;
use crate::domain::ports::{CardBackend, PublicCardResponse};
use moka::future::Cache;
use std::time::Duration;

pub struct CardFetcher<B: CardBackend> {
    backend: B,
    cache: Option<Cache<String, CardBundle>>,
}

impl<B: CardBackend> CardFetcher<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: None,
        }
    }

    /// Keeps populated bundles for `ttl`. A zero TTL disables caching.
    pub fn with_cache(backend: B, ttl: Duration, max_entries: u64) -> Self {
        let cache = (!ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(max_entries)
                .time_to_live(ttl)
                .build()
        });

        Self { backend, cache }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub async fn fetch(&self, public_id: &str) -> Option<CardBundle> {
        let public_id = public_id.trim();
        if public_id.is_empty() {
            return None;
        }

        if let Some(cache) = &self.cache {
            if let Some(bundle) = cache.get(public_id).await {
                tracing::debug!(public_id, "card served from cache");
                return Some(bundle);
            }
        }

        let bundle = self.fetch_uncached(public_id).await?;

        if let Some(cache) = &self.cache {
            cache.insert(public_id.to_string(), bundle.clone()).await;
        }
        Some(bundle)
    }

    async fn fetch_uncached(&self, public_id: &str) -> Option<CardBundle> {
        match self.backend.fetch_public_card(public_id).await {
            Ok(PublicCardResponse::Found(mut bundle)) => {
                tracing::debug!(public_id, links = bundle.links.len(), "card found by edge function");
                bundle.sort_links();
                return Some(bundle);
            }
            Ok(PublicCardResponse::NotFound) => {
                tracing::debug!(public_id, "edge function reported card not found");
                return None;
            }
            Err(e) => {
                tracing::warn!(
                    public_id,
                    error = %e,
                    transient = e.is_transient(),
                    "edge function failed, querying store directly"
                );
            }
        }

        self.fetch_from_store(public_id).await
    }

    async fn fetch_from_store(&self, public_id: &str) -> Option<CardBundle> {
        let card = match self.backend.find_published_card(public_id).await {
            Ok(Some(card)) => card,
            Ok(None) => {
                tracing::debug!(public_id, "no published card in store");
                return None;
            }
            Err(e) => {
                tracing::error!(public_id, error = %e, "card query failed");
                return None;
            }
        };

        let links = match self.backend.list_card_links(&card.id).await {
            Ok(links) => links,
            Err(e) => {
                tracing::error!(public_id, card_id = %card.id, error = %e, "links query failed");
                return None;
            }
        };

        let template = match card.template_id.as_deref().filter(|id| !id.is_empty()) {
            Some(template_id) => match self.backend.find_template(template_id).await {
                Ok(template) => {
                    if template.is_none() {
                        tracing::debug!(public_id, template_id, "template reference is dangling");
                    }
                    template
                }
                Err(e) => {
                    tracing::warn!(public_id, template_id, error = %e, "template query failed");
                    None
                }
            },
            None => None,
        };

        tracing::debug!(public_id, links = links.len(), "card assembled from store queries");
        Some(CardBundle::new(card, links, template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Card, CardLink, CardTemplate};
    use crate::utils::error::{CardError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Copy)]
    enum Primary {
        Found,
        NotFound,
        Failing,
    }

    #[derive(Clone, Copy, PartialEq)]
    enum StoreQuery {
        Cards,
        Links,
        Template,
    }

    struct MockBackend {
        primary: Primary,
        card: Option<Card>,
        links: Vec<CardLink>,
        template: Option<CardTemplate>,
        failing_query: Option<StoreQuery>,
        primary_calls: AtomicUsize,
        store_calls: AtomicUsize,
        template_calls: AtomicUsize,
    }

    impl MockBackend {
        fn new(primary: Primary, card: Option<Card>) -> Self {
            Self {
                primary,
                card,
                links: Vec::new(),
                template: None,
                failing_query: None,
                primary_calls: AtomicUsize::new(0),
                store_calls: AtomicUsize::new(0),
                template_calls: AtomicUsize::new(0),
            }
        }

        fn check(&self, query: StoreQuery, table: &str) -> Result<()> {
            if self.failing_query == Some(query) {
                return Err(CardError::UpstreamError {
                    status: 500,
                    endpoint: format!("/rest/v1/{}", table),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl CardBackend for MockBackend {
        async fn fetch_public_card(&self, _public_id: &str) -> Result<PublicCardResponse> {
            self.primary_calls.fetch_add(1, Ordering::SeqCst);
            match self.primary {
                Primary::Found => Ok(PublicCardResponse::Found(CardBundle {
                    card: self.card.clone().unwrap_or_default(),
                    links: self.links.clone(),
                    template: self.template.clone(),
                })),
                Primary::NotFound => Ok(PublicCardResponse::NotFound),
                Primary::Failing => Err(CardError::UpstreamError {
                    status: 502,
                    endpoint: "get-public-card".to_string(),
                }),
            }
        }

        async fn find_published_card(&self, _public_id: &str) -> Result<Option<Card>> {
            self.store_calls.fetch_add(1, Ordering::SeqCst);
            self.check(StoreQuery::Cards, "cards")?;
            Ok(self.card.clone().filter(|c| c.is_published))
        }

        async fn list_card_links(&self, _card_id: &str) -> Result<Vec<CardLink>> {
            self.store_calls.fetch_add(1, Ordering::SeqCst);
            self.check(StoreQuery::Links, "card_links")?;
            Ok(self.links.clone())
        }

        async fn find_template(&self, template_id: &str) -> Result<Option<CardTemplate>> {
            self.template_calls.fetch_add(1, Ordering::SeqCst);
            self.check(StoreQuery::Template, "card_templates")?;
            Ok(self.template.clone().filter(|t| t.id == template_id))
        }
    }

    fn published_card() -> Card {
        Card {
            id: "card-1".to_string(),
            public_id: "ada".to_string(),
            full_name: "Ada Lovelace".to_string(),
            is_published: true,
            ..Default::default()
        }
    }

    fn link(id: &str, order_index: i32) -> CardLink {
        CardLink {
            id: id.to_string(),
            card_id: "card-1".to_string(),
            value: format!("https://example.com/{}", id),
            order_index,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_not_found_skips_fallback() {
        let fetcher = CardFetcher::new(MockBackend::new(Primary::NotFound, Some(published_card())));

        assert!(fetcher.fetch("ada").await.is_none());
        assert_eq!(fetcher.backend().primary_calls.load(Ordering::SeqCst), 1);
        assert_eq!(fetcher.backend().store_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_primary_success_is_authoritative() {
        let mut backend = MockBackend::new(Primary::Found, Some(published_card()));
        backend.links = vec![link("b", 1), link("a", 0)];
        let fetcher = CardFetcher::new(backend);

        let bundle = fetcher.fetch("ada").await.unwrap();
        assert_eq!(bundle.card.full_name, "Ada Lovelace");
        assert_eq!(bundle.links[0].id, "a");
        assert_eq!(fetcher.backend().store_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_store() {
        let mut card = published_card();
        card.template_id = Some("tpl-1".to_string());
        let mut backend = MockBackend::new(Primary::Failing, Some(card));
        backend.links = vec![link("second", 5), link("first", 1)];
        backend.template = Some(CardTemplate {
            id: "tpl-1".to_string(),
            name: "Minimal".to_string(),
            ..Default::default()
        });
        let fetcher = CardFetcher::new(backend);

        let bundle = fetcher.fetch("ada").await.unwrap();
        assert_eq!(bundle.links.iter().map(|l| l.id.as_str()).collect::<Vec<_>>(), ["first", "second"]);
        assert_eq!(bundle.template.unwrap().name, "Minimal");
        assert_eq!(fetcher.backend().store_calls.load(Ordering::SeqCst), 2);
        assert_eq!(fetcher.backend().template_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_without_stored_card_is_absence() {
        let fetcher = CardFetcher::new(MockBackend::new(Primary::Failing, None));

        assert!(fetcher.fetch("ghost").await.is_none());
        assert_eq!(fetcher.backend().store_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unpublished_card_is_hidden() {
        let mut card = published_card();
        card.is_published = false;
        let fetcher = CardFetcher::new(MockBackend::new(Primary::Failing, Some(card)));

        assert!(fetcher.fetch("ada").await.is_none());
    }

    #[tokio::test]
    async fn test_dangling_template_is_tolerated() {
        let mut card = published_card();
        card.template_id = Some("missing".to_string());
        let fetcher = CardFetcher::new(MockBackend::new(Primary::Failing, Some(card)));

        let bundle = fetcher.fetch("ada").await.unwrap();
        assert!(bundle.template.is_none());
        assert_eq!(fetcher.backend().template_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_card_query_error_is_absence() {
        let mut backend = MockBackend::new(Primary::Failing, Some(published_card()));
        backend.failing_query = Some(StoreQuery::Cards);
        let fetcher = CardFetcher::new(backend);

        assert!(fetcher.fetch("ada").await.is_none());
        assert_eq!(fetcher.backend().store_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_links_query_error_is_absence() {
        let mut card = published_card();
        card.template_id = Some("tpl-1".to_string());
        let mut backend = MockBackend::new(Primary::Failing, Some(card));
        backend.failing_query = Some(StoreQuery::Links);
        let fetcher = CardFetcher::new(backend);

        assert!(fetcher.fetch("ada").await.is_none());
        assert_eq!(fetcher.backend().store_calls.load(Ordering::SeqCst), 2);
        assert_eq!(fetcher.backend().template_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_template_query_error_leaves_template_absent() {
        let mut card = published_card();
        card.template_id = Some("tpl-1".to_string());
        let mut backend = MockBackend::new(Primary::Failing, Some(card));
        backend.links = vec![link("a", 0)];
        backend.template = Some(CardTemplate {
            id: "tpl-1".to_string(),
            name: "Classic".to_string(),
            ..Default::default()
        });
        backend.failing_query = Some(StoreQuery::Template);
        let fetcher = CardFetcher::new(backend);

        let bundle = fetcher.fetch("ada").await.unwrap();
        assert!(bundle.template.is_none());
        assert_eq!(bundle.links.len(), 1);
        assert_eq!(fetcher.backend().template_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_template_query_skipped_without_reference() {
        let fetcher = CardFetcher::new(MockBackend::new(Primary::Failing, Some(published_card())));

        assert!(fetcher.fetch("ada").await.is_some());
        assert_eq!(fetcher.backend().template_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_blank_public_id_makes_no_calls() {
        let fetcher = CardFetcher::new(MockBackend::new(Primary::Found, Some(published_card())));

        assert!(fetcher.fetch("  ").await.is_none());
        assert_eq!(fetcher.backend().primary_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cache_serves_repeat_fetches() {
        let fetcher = CardFetcher::with_cache(
            MockBackend::new(Primary::Found, Some(published_card())),
            Duration::from_secs(60),
            10,
        );

        assert!(fetcher.fetch("ada").await.is_some());
        assert!(fetcher.fetch("ada").await.is_some());
        assert_eq!(fetcher.backend().primary_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_absence_is_not_cached() {
        let fetcher = CardFetcher::with_cache(
            MockBackend::new(Primary::NotFound, None),
            Duration::from_secs(60),
            10,
        );

        assert!(fetcher.fetch("ada").await.is_none());
        assert!(fetcher.fetch("ada").await.is_none());
        assert_eq!(fetcher.backend().primary_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_disables_cache() {
        let fetcher = CardFetcher::with_cache(
            MockBackend::new(Primary::Found, Some(published_card())),
            Duration::ZERO,
            10,
        );

        fetcher.fetch("ada").await;
        fetcher.fetch("ada").await;
        assert_eq!(fetcher.backend().primary_calls.load(Ordering::SeqCst), 2);
    }
}
