// Telemetry data domain models
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct PositionSample {
    pub entity_id: String,
    pub session_key: u64,
    pub position: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

impl PositionSample {
    pub fn new(
        entity_id: impl Into<String>,
        session_key: u64,
        position: Option<u32>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            session_key,
            position,
            timestamp,
        }
    }
}

/// Position of the freshest sample. Samples are taken in arrival order;
/// the feed does not promise chronological order, so this is "last
/// received", not "latest timestamp".
pub fn latest_position(samples: &[PositionSample]) -> Option<u32> {
    samples.last().and_then(|s| s.position)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverIdentity {
    pub number: u32,
    pub acronym: String,
}

/// Which session a feed query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionScope {
    Latest,
    Key(u64),
}

impl SessionScope {
    pub fn as_query_value(&self) -> String {
        match self {
            SessionScope::Latest => "latest".to_string(),
            SessionScope::Key(key) => key.to_string(),
        }
    }
}
