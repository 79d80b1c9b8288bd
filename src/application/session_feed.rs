// Repository trait for the upstream session/telemetry feed
use crate::domain::session::Session;
use crate::domain::telemetry::{DriverIdentity, PositionSample, SessionScope};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("feed returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode feed response: {0}")]
    Decode(String),

    #[error("feed call exceeded {0} ms")]
    Timeout(u64),
}

#[async_trait]
pub trait SessionFeed: Send + Sync {
    /// All sessions known to the feed
    async fn list_sessions(&self) -> Result<Vec<Session>, FeedError>;

    /// Position samples for an entity, in arrival order
    async fn positions(
        &self,
        entity_id: &str,
        scope: SessionScope,
    ) -> Result<Vec<PositionSample>, FeedError>;

    /// Identity record for an entity, if the feed knows it
    async fn driver_identity(
        &self,
        entity_id: &str,
        scope: SessionScope,
    ) -> Result<Option<DriverIdentity>, FeedError>;
}
