// In-memory feed used by the service and handler tests
use crate::application::session_feed::{FeedError, SessionFeed};
use crate::domain::session::Session;
use crate::domain::telemetry::{DriverIdentity, PositionSample, SessionScope};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct MockFeed {
    sessions: Vec<Session>,
    sessions_fail: bool,
    positions: Vec<PositionSample>,
    positions_fail: bool,
    identity: Option<DriverIdentity>,
    labels_fail: bool,
    label_delay: Option<Duration>,
    position_scopes: Mutex<Vec<SessionScope>>,
    session_calls: Mutex<usize>,
}

impl MockFeed {
    pub fn with_sessions(mut self, sessions: Vec<Session>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn failing_sessions(mut self) -> Self {
        self.sessions_fail = true;
        self
    }

    pub fn with_positions(mut self, positions: Vec<PositionSample>) -> Self {
        self.positions = positions;
        self
    }

    pub fn failing_positions(mut self) -> Self {
        self.positions_fail = true;
        self
    }

    pub fn with_identity(mut self, identity: DriverIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn failing_labels(mut self) -> Self {
        self.labels_fail = true;
        self
    }

    pub fn with_label_delay(mut self, delay: Duration) -> Self {
        self.label_delay = Some(delay);
        self
    }

    pub fn position_scopes(&self) -> Vec<SessionScope> {
        self.position_scopes.lock().unwrap().clone()
    }

    pub fn session_calls(&self) -> usize {
        *self.session_calls.lock().unwrap()
    }
}

fn unavailable() -> FeedError {
    FeedError::Status {
        status: 503,
        body: "unavailable".to_string(),
    }
}

#[async_trait]
impl SessionFeed for MockFeed {
    async fn list_sessions(&self) -> Result<Vec<Session>, FeedError> {
        *self.session_calls.lock().unwrap() += 1;
        if self.sessions_fail {
            return Err(unavailable());
        }
        Ok(self.sessions.clone())
    }

    async fn positions(
        &self,
        _entity_id: &str,
        scope: SessionScope,
    ) -> Result<Vec<PositionSample>, FeedError> {
        self.position_scopes.lock().unwrap().push(scope);
        if self.positions_fail {
            return Err(unavailable());
        }
        Ok(self.positions.clone())
    }

    async fn driver_identity(
        &self,
        _entity_id: &str,
        _scope: SessionScope,
    ) -> Result<Option<DriverIdentity>, FeedError> {
        if let Some(delay) = self.label_delay {
            tokio::time::sleep(delay).await;
        }
        if self.labels_fail {
            return Err(unavailable());
        }
        Ok(self.identity.clone())
    }
}
