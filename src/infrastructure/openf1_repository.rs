// OpenF1 REST feed implementation
use crate::application::session_feed::{FeedError, SessionFeed};
use crate::domain::session::Session;
use crate::domain::telemetry::{DriverIdentity, PositionSample, SessionScope};
use crate::infrastructure::config::FeedSettings;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OpenF1Repository {
    client: reqwest::Client,
    base_url: String,
    sessions_timeout: Duration,
    position_timeout: Duration,
    label_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct OpenF1Session {
    session_key: u64,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    session_name: Option<String>,
    date_start: Option<DateTime<Utc>>,
    date_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct OpenF1Position {
    driver_number: u32,
    session_key: u64,
    #[serde(default)]
    position: Option<u32>,
    date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct OpenF1Driver {
    driver_number: u32,
    #[serde(default)]
    name_acronym: Option<String>,
}

impl OpenF1Repository {
    pub fn new(client: reqwest::Client, settings: &FeedSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            sessions_timeout: Duration::from_millis(settings.sessions_timeout_ms),
            position_timeout: Duration::from_millis(settings.position_timeout_ms),
            label_timeout: Duration::from_millis(settings.label_timeout_ms),
        }
    }

    fn build_entity_url(&self, endpoint: &str, entity_id: &str, scope: SessionScope) -> String {
        format!(
            "{}/{}?driver_number={}&session_key={}",
            self.base_url,
            endpoint,
            urlencoding::encode(entity_id),
            scope.as_query_value()
        )
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        timeout: Duration,
    ) -> Result<T, FeedError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .timeout(timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FeedError::Status { status, body });
        }

        let body = response.text().await?;
        decode(&body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, FeedError> {
    serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))
}

fn to_sessions(raw: Vec<OpenF1Session>) -> Vec<Session> {
    raw.into_iter()
        .filter_map(|s| match (s.date_start, s.date_end) {
            (Some(start), Some(end)) => Some(Session::new(
                s.session_key,
                s.location.unwrap_or_default(),
                s.session_name.unwrap_or_default(),
                start,
                end,
            )),
            _ => {
                tracing::debug!("Skipping session {} without a complete window", s.session_key);
                None
            }
        })
        .collect()
}

fn to_samples(raw: Vec<OpenF1Position>) -> Vec<PositionSample> {
    raw.into_iter()
        .map(|p| {
            PositionSample::new(p.driver_number.to_string(), p.session_key, p.position, p.date)
        })
        .collect()
}

fn to_identity(raw: Vec<OpenF1Driver>) -> Option<DriverIdentity> {
    raw.into_iter().find_map(|d| {
        d.name_acronym.map(|acronym| DriverIdentity {
            number: d.driver_number,
            acronym,
        })
    })
}

#[async_trait]
impl SessionFeed for OpenF1Repository {
    async fn list_sessions(&self) -> Result<Vec<Session>, FeedError> {
        let url = format!("{}/sessions", self.base_url);
        let raw: Vec<OpenF1Session> = self.fetch(&url, self.sessions_timeout).await?;
        Ok(to_sessions(raw))
    }

    async fn positions(
        &self,
        entity_id: &str,
        scope: SessionScope,
    ) -> Result<Vec<PositionSample>, FeedError> {
        let url = self.build_entity_url("position", entity_id, scope);
        let raw: Vec<OpenF1Position> = self.fetch(&url, self.position_timeout).await?;
        Ok(to_samples(raw))
    }

    async fn driver_identity(
        &self,
        entity_id: &str,
        scope: SessionScope,
    ) -> Result<Option<DriverIdentity>, FeedError> {
        let url = self.build_entity_url("drivers", entity_id, scope);
        let raw: Vec<OpenF1Driver> = self.fetch(&url, self.label_timeout).await?;
        Ok(to_identity(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn repository() -> OpenF1Repository {
        OpenF1Repository::new(
            reqwest::Client::new(),
            &FeedSettings {
                base_url: "https://api.openf1.org/v1/".to_string(),
                sessions_timeout_ms: 5000,
                position_timeout_ms: 3000,
                label_timeout_ms: 1500,
            },
        )
    }

    #[test]
    fn test_build_entity_url() {
        let repo = repository();
        assert_eq!(
            repo.build_entity_url("position", "44", SessionScope::Key(9158)),
            "https://api.openf1.org/v1/position?driver_number=44&session_key=9158"
        );
        assert_eq!(
            repo.build_entity_url("drivers", "a&b", SessionScope::Latest),
            "https://api.openf1.org/v1/drivers?driver_number=a%26b&session_key=latest"
        );
    }

    #[test]
    fn test_decode_sessions() {
        let body = r#"[
            {"session_key": 9140, "session_name": "Race", "location": "Sakhir",
             "date_start": "2023-03-05T15:00:00+00:00", "date_end": "2023-03-05T17:00:00+00:00",
             "circuit_short_name": "Sakhir", "year": 2023},
            {"session_key": 9141, "session_name": "Practice 1", "location": "Jeddah",
             "date_start": "2023-03-17T16:30:00+03:00", "date_end": null}
        ]"#;
        let sessions = to_sessions(decode(body).unwrap());

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].key, 9140);
        assert_eq!(sessions[0].location, "Sakhir");
        assert_eq!(sessions[0].start, Utc.with_ymd_and_hms(2023, 3, 5, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_decode_sessions_with_null_text_fields() {
        let body = r#"[
            {"session_key": 9158, "session_name": "Race", "location": "Monza",
             "date_start": "2023-09-03T13:00:00+00:00", "date_end": "2023-09-03T15:00:00+00:00"},
            {"session_key": 9159, "session_name": null, "location": null,
             "date_start": "2023-09-15T11:30:00+00:00", "date_end": "2023-09-15T12:30:00+00:00"}
        ]"#;
        let sessions = to_sessions(decode(body).unwrap());

        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].location, "Monza");
        assert_eq!(sessions[1].key, 9159);
        assert_eq!(sessions[1].location, "");
        assert_eq!(sessions[1].name, "");
    }

    #[test]
    fn test_decode_positions_with_offsets_and_nulls() {
        let body = r#"[
            {"driver_number": 40, "session_key": 9144, "position": 2,
             "date": "2023-08-26T09:30:47.199000+02:00", "meeting_key": 1217},
            {"driver_number": 40, "session_key": 9144, "position": null,
             "date": "2023-08-26T09:35:51.477000+02:00"}
        ]"#;
        let samples = to_samples(decode(body).unwrap());

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].entity_id, "40");
        assert_eq!(samples[0].position, Some(2));
        assert_eq!(samples[1].position, None);
        assert_eq!(samples[0].timestamp.timezone(), Utc);
    }

    #[test]
    fn test_decode_identity() {
        let body = r#"[
            {"driver_number": 1, "name_acronym": "VER", "broadcast_name": "M VERSTAPPEN"}
        ]"#;
        assert_eq!(
            to_identity(decode(body).unwrap()),
            Some(DriverIdentity {
                number: 1,
                acronym: "VER".to_string()
            })
        );
        assert_eq!(to_identity(decode("[]").unwrap()), None);
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let result: Result<Vec<OpenF1Session>, FeedError> = decode(r#"{"detail": "rate limited"}"#);
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }
}
