// Dashboard service - Use case for resolving what a display shows
use crate::application::label_service::LabelResolver;
use crate::application::session_feed::{FeedError, SessionFeed};
use crate::domain::dashboard::{DashboardPayload, Mode};
use crate::domain::display::{
    abbreviate_session_name, countdown, final_position, live_position, truncate_upper, COLOR_NEXT,
};
use crate::domain::legacy::LegacyRegistry;
use crate::domain::session::Session;
use crate::domain::telemetry::{latest_position, SessionScope};
use crate::domain::timeline::{hours_between, Timeline};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

pub const RACE_POST_WINDOW_HOURS: f64 = 72.0;
pub const SESSION_POST_WINDOW_HOURS: f64 = 4.0;
pub const NEXT_WINDOW_HOURS: f64 = 24.0;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("session timeline unavailable: {0}")]
    TimelineUnavailable(#[source] FeedError),
}

/// Outcome of the mode rules, before any position lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Live(Session),
    Post(Session),
    Next { session: Session, hours_until: f64 },
    Idle,
}

impl Decision {
    /// First matching rule wins: live, then post-event window, then upcoming.
    pub fn decide(now: DateTime<Utc>, timeline: &Timeline) -> Self {
        if let Some(active) = &timeline.active {
            return Decision::Live(active.clone());
        }

        if let Some(last) = &timeline.last {
            let window = if last.is_race() {
                RACE_POST_WINDOW_HOURS
            } else {
                SESSION_POST_WINDOW_HOURS
            };
            if hours_between(last.end, now) <= window {
                return Decision::Post(last.clone());
            }
        }

        if let Some(next) = &timeline.next {
            let hours_until = hours_between(now, next.start);
            if hours_until <= NEXT_WINDOW_HOURS {
                return Decision::Next {
                    session: next.clone(),
                    hours_until,
                };
            }
        }

        Decision::Idle
    }

    pub fn mode(&self) -> Mode {
        match self {
            Decision::Live(_) => Mode::Live,
            Decision::Post(_) => Mode::Post,
            Decision::Next { .. } => Mode::Next,
            Decision::Idle => Mode::Idle,
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    feed: Arc<dyn SessionFeed>,
    registry: Arc<LegacyRegistry>,
    labels: LabelResolver,
}

impl DashboardService {
    pub fn new(
        feed: Arc<dyn SessionFeed>,
        registry: Arc<LegacyRegistry>,
        labels: LabelResolver,
    ) -> Self {
        Self {
            feed,
            registry,
            labels,
        }
    }

    pub async fn get_dashboard(
        &self,
        entity_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DashboardPayload, DashboardError> {
        if let Some(entry) = self.registry.lookup(entity_id) {
            return Ok(DashboardPayload::legacy(entry));
        }

        // The label has no dependency on the timeline, so both run together.
        let (label, payload) = tokio::join!(
            self.labels.resolve(entity_id),
            self.resolve_payload(entity_id, now)
        );

        // IDLE is a fixed placeholder and carries no driver.
        let payload = payload?;
        if payload.mode == Mode::Idle {
            return Ok(payload);
        }
        Ok(payload.with_driver(label))
    }

    async fn resolve_payload(
        &self,
        entity_id: &str,
        now: DateTime<Utc>,
    ) -> Result<DashboardPayload, DashboardError> {
        let sessions = self.feed.list_sessions().await.map_err(|e| {
            tracing::error!("Session list unavailable: {}", e);
            DashboardError::TimelineUnavailable(e)
        })?;

        let timeline = Timeline::resolve(now, &sessions);
        let decision = Decision::decide(now, &timeline);
        tracing::debug!("Entity {} resolved to {:?}", entity_id, decision.mode());

        let payload = match decision {
            Decision::Live(session) => {
                let position = self.fetch_position(entity_id, &session).await;
                let (val, color) = live_position(position);
                DashboardPayload::new(
                    Mode::Live,
                    truncate_upper(&session.location),
                    val,
                    abbreviate_session_name(&session.name),
                )
                .with_color(color)
            }
            Decision::Post(session) => {
                let position = self.fetch_position(entity_id, &session).await;
                let (val, color) = final_position(position);
                DashboardPayload::new(
                    Mode::Post,
                    truncate_upper(&session.location),
                    val,
                    post_message(&session),
                )
                .with_color(color)
            }
            Decision::Next {
                session,
                hours_until,
            } => DashboardPayload::new(
                Mode::Next,
                truncate_upper(&session.location),
                countdown(hours_until),
                abbreviate_session_name(&session.name),
            )
            .with_color(COLOR_NEXT),
            Decision::Idle => DashboardPayload::idle(),
        };

        Ok(payload)
    }

    /// `None` covers both a failed call and a feed with no usable sample.
    async fn fetch_position(&self, entity_id: &str, session: &Session) -> Option<u32> {
        match self
            .feed
            .positions(entity_id, SessionScope::Key(session.key))
            .await
        {
            Ok(samples) => {
                if let Some(last) = samples.last() {
                    tracing::debug!(
                        "Latest sample for {} in session {} received at {}",
                        last.entity_id,
                        last.session_key,
                        last.timestamp
                    );
                }
                let position = latest_position(&samples);
                if position.is_none() {
                    tracing::warn!(
                        "No position for {} in session {} ({} samples)",
                        entity_id,
                        session.key,
                        samples.len()
                    );
                }
                position
            }
            Err(e) => {
                tracing::warn!(
                    "Position lookup for {} in session {} failed: {}",
                    entity_id,
                    session.key,
                    e
                );
                None
            }
        }
    }
}

fn post_message(session: &Session) -> String {
    let abbreviation = abbreviate_session_name(&session.name);
    if session.is_race() || abbreviation.is_empty() {
        "FINAL".to_string()
    } else {
        abbreviation.to_string()
    }
}
