// Dashboard domain model
use super::display::COLOR_ERROR;
use super::legacy::LegacyEntry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Legacy,
    Live,
    Post,
    Next,
    Idle,
    Error,
}

/// The single response entity. `gp` and `msg` are only ever absent on the
/// error payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPayload {
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gp: Option<String>,
    pub val: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

pub const IDLE_HEADLINE: &str = "DINTEL";

impl DashboardPayload {
    pub fn new(
        mode: Mode,
        gp: impl Into<String>,
        val: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            gp: Some(gp.into()),
            val: val.into(),
            msg: Some(msg.into()),
            driver: None,
            color: None,
        }
    }

    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn legacy(entry: &LegacyEntry) -> Self {
        Self::new(Mode::Legacy, &entry.label, &entry.stat, &entry.period).with_color(&entry.color)
    }

    pub fn idle() -> Self {
        Self::new(Mode::Idle, IDLE_HEADLINE, "", "")
    }

    pub fn error() -> Self {
        Self {
            mode: Mode::Error,
            gp: None,
            val: "!!".to_string(),
            msg: None,
            driver: Some("ERR".to_string()),
            color: Some(COLOR_ERROR.to_string()),
        }
    }
}
