// Label resolution with a bounded wait and a deterministic fallback
use crate::application::session_feed::{FeedError, SessionFeed};
use crate::domain::display::truncate_upper;
use crate::domain::telemetry::SessionScope;
use std::sync::Arc;
use std::time::Duration;

pub const FALLBACK_LABEL_PREFIX: &str = "#";

#[derive(Clone)]
pub struct LabelResolver {
    feed: Arc<dyn SessionFeed>,
    timeout: Duration,
}

impl LabelResolver {
    pub fn new(feed: Arc<dyn SessionFeed>, timeout: Duration) -> Self {
        Self { feed, timeout }
    }

    /// Never fails; any lookup problem yields `fallback_label(entity_id)`.
    pub async fn resolve(&self, entity_id: &str) -> String {
        match self.lookup(entity_id).await {
            Ok(Some(label)) => label,
            Ok(None) => {
                tracing::debug!("No driver identity for {}, using fallback label", entity_id);
                fallback_label(entity_id)
            }
            Err(e) => {
                tracing::warn!("Label lookup for {} failed: {}", entity_id, e);
                fallback_label(entity_id)
            }
        }
    }

    async fn lookup(&self, entity_id: &str) -> Result<Option<String>, FeedError> {
        let identity = tokio::time::timeout(
            self.timeout,
            self.feed.driver_identity(entity_id, SessionScope::Latest),
        )
        .await
        .map_err(|_| FeedError::Timeout(self.timeout.as_millis() as u64))??;

        Ok(identity
            .map(|d| {
                tracing::debug!("Entity {} is car {} ({})", entity_id, d.number, d.acronym);
                truncate_upper(d.acronym.trim())
            })
            .filter(|label| !label.is_empty()))
    }
}

pub fn fallback_label(entity_id: &str) -> String {
    truncate_upper(&format!("{}{}", FALLBACK_LABEL_PREFIX, entity_id))
}
