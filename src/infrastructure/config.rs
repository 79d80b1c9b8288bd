use crate::domain::legacy::LegacyEntry;
use config::{builder::DefaultState, ConfigBuilder, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub feed: FeedSettings,
    #[serde(default = "default_legacy")]
    pub legacy: Vec<LegacyEntryConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedSettings {
    pub base_url: String,
    pub sessions_timeout_ms: u64,
    pub position_timeout_ms: u64,
    pub label_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LegacyEntryConfig {
    pub id: String,
    pub label: String,
    pub stat: String,
    pub period: String,
    pub color: String,
}

impl From<LegacyEntryConfig> for LegacyEntry {
    fn from(c: LegacyEntryConfig) -> Self {
        LegacyEntry::new(c.id, c.label, c.stat, c.period, c.color)
    }
}

fn legacy_entry(id: &str, label: &str, stat: &str, period: &str, color: &str) -> LegacyEntryConfig {
    LegacyEntryConfig {
        id: id.to_string(),
        label: label.to_string(),
        stat: stat.to_string(),
        period: period.to_string(),
        color: color.to_string(),
    }
}

fn default_legacy() -> Vec<LegacyEntryConfig> {
    vec![
        legacy_entry(
            "senna-12",
            "AYRTON SENNA",
            "3 TITLES | 41 WINS",
            "1984 - 1994",
            "#FCD116",
        ),
        legacy_entry(
            "schumacher-5",
            "M. SCHUMACHER",
            "7 TITLES | 91 WINS",
            "1991 - 2012",
            "#FF0000",
        ),
        legacy_entry(
            "lauda-12",
            "NIKI LAUDA",
            "3 TITLES | 25 WINS",
            "1971 - 1985",
            "#E10600",
        ),
    ]
}

fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(config::Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("feed.base_url", "https://api.openf1.org/v1")?
        .set_default("feed.sessions_timeout_ms", 5000)?
        .set_default("feed.position_timeout_ms", 3000)?
        .set_default("feed.label_timeout_ms", 1500)?)
}

/// `PORT` wins over every other source for the listen port.
fn finish(builder: ConfigBuilder<DefaultState>, port: Option<String>) -> anyhow::Result<Settings> {
    let settings = builder.set_override_option("server.port", port)?.build()?;
    Ok(settings.try_deserialize()?)
}

/// Defaults, then `config/dintel.*`, then `DINTEL__*` variables, then `PORT`.
pub fn load_settings() -> anyhow::Result<Settings> {
    let builder = defaults()?
        .add_source(File::with_name("config/dintel").required(false))
        .add_source(
            Environment::with_prefix("DINTEL")
                .separator("__")
                .try_parsing(true),
        );

    finish(builder, std::env::var("PORT").ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults() {
        let settings = finish(defaults().unwrap(), None).unwrap();

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.feed.base_url, "https://api.openf1.org/v1");
        assert_eq!(settings.feed.label_timeout_ms, 1500);
        assert_eq!(settings.legacy.len(), 3);
        assert_eq!(settings.legacy[1].id, "schumacher-5");
    }

    #[test]
    fn test_port_override() {
        let settings = finish(defaults().unwrap(), Some("8080".to_string())).unwrap();
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn test_file_replaces_legacy_roster() {
        let toml = r##"
            [server]
            port = 9000

            [[legacy]]
            id = "hunt-11"
            label = "JAMES HUNT"
            stat = "1 TITLE | 10 WINS"
            period = "1973 - 1979"
            color = "#FFFFFF"
        "##;
        let builder = defaults().unwrap().add_source(File::from_str(toml, FileFormat::Toml));
        let settings = finish(builder, None).unwrap();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.legacy.len(), 1);

        let entry: LegacyEntry = settings.legacy[0].clone().into();
        assert_eq!(entry.label, "JAMES HUNT");
    }
}
