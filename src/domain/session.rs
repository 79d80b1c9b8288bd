// Session domain model
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub key: u64,
    pub location: String,
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Session {
    pub fn new(
        key: u64,
        location: impl Into<String>,
        name: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            key,
            location: location.into(),
            name: name.into(),
            start,
            end,
        }
    }

    /// Inclusive at both ends
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now <= self.end
    }

    pub fn kind(&self) -> Option<SessionKind> {
        SessionKind::classify(&self.name)
    }

    pub fn is_race(&self) -> bool {
        self.kind() == Some(SessionKind::Race)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Practice1,
    Practice2,
    Practice3,
    Qualifying,
    Sprint,
    Race,
}

/// Evaluated top to bottom; the first pattern contained in the name wins.
const SESSION_PATTERNS: &[(&str, SessionKind)] = &[
    ("Practice 1", SessionKind::Practice1),
    ("Practice 2", SessionKind::Practice2),
    ("Practice 3", SessionKind::Practice3),
    ("Sprint", SessionKind::Sprint),
    ("Qualifying", SessionKind::Qualifying),
    ("Race", SessionKind::Race),
];

impl SessionKind {
    pub fn classify(name: &str) -> Option<Self> {
        SESSION_PATTERNS
            .iter()
            .find(|(pattern, _)| name.contains(pattern))
            .map(|(_, kind)| *kind)
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            SessionKind::Practice1 => "FP1",
            SessionKind::Practice2 => "FP2",
            SessionKind::Practice3 => "FP3",
            SessionKind::Qualifying => "QUALY",
            SessionKind::Sprint => "SPRINT",
            SessionKind::Race => "RACE",
        }
    }
}
