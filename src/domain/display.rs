// Fixed-width display field rendering
use super::session::SessionKind;

pub const DISPLAY_WIDTH: usize = 8;

pub const COLOR_LIVE: &str = "#00FF00";
pub const COLOR_POST: &str = "#FFFFFF";
pub const COLOR_NEXT: &str = "#00BFFF";
pub const COLOR_FALLBACK: &str = "#FFA500";
pub const COLOR_ERROR: &str = "#FF0000";

pub const LIVE_FALLBACK_VALUE: &str = "--";
pub const POST_FALLBACK_VALUE: &str = "DNF";

/// Upper-cased, then cut to eight chars. Upper-casing can expand a char
/// (`ß` becomes `SS`), so the cut must come last.
pub fn truncate_upper(text: &str) -> String {
    text.to_uppercase().chars().take(DISPLAY_WIDTH).collect()
}

pub fn abbreviate_session_name(name: &str) -> &'static str {
    SessionKind::classify(name)
        .map(SessionKind::abbreviation)
        .unwrap_or("")
}

pub fn live_position(position: Option<u32>) -> (String, &'static str) {
    match position {
        Some(p) => (format!("P{}", p), COLOR_LIVE),
        None => (LIVE_FALLBACK_VALUE.to_string(), COLOR_FALLBACK),
    }
}

pub fn final_position(position: Option<u32>) -> (String, &'static str) {
    match position {
        Some(p) => (format!("P{}", p), COLOR_POST),
        None => (POST_FALLBACK_VALUE.to_string(), COLOR_FALLBACK),
    }
}

/// `{days}D {hours}H` with both parts floored.
pub fn countdown(hours_until: f64) -> String {
    let hours_until = hours_until.max(0.0);
    let days = (hours_until / 24.0).floor() as i64;
    let hours = (hours_until % 24.0).floor() as i64;
    format!("{}D {}H", days, hours)
}
