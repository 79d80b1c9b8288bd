// Classification of session windows relative to "now"
use super::session::Session;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    pub active: Option<Session>,
    pub last: Option<Session>,
    pub next: Option<Session>,
}

impl Timeline {
    /// Sessions may arrive in any order. With overlapping windows the first
    /// containing session in input order is reported as active.
    pub fn resolve(now: DateTime<Utc>, sessions: &[Session]) -> Self {
        let active = sessions.iter().find(|s| s.contains(now)).cloned();

        let last = sessions
            .iter()
            .filter(|s| s.end < now)
            .max_by_key(|s| s.end)
            .cloned();

        let next = sessions
            .iter()
            .filter(|s| s.start > now)
            .min_by_key(|s| s.start)
            .cloned();

        Self { active, last, next }
    }
}

/// Wall-clock difference `later - earlier` in fractional hours.
pub fn hours_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 3_600_000.0
}
