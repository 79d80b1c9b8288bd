// Historical entries that bypass live resolution
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyEntry {
    pub id: String,
    pub label: String,
    pub stat: String,
    pub period: String,
    pub color: String,
}

impl LegacyEntry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        stat: impl Into<String>,
        period: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            stat: stat.into(),
            period: period.into(),
            color: color.into(),
        }
    }
}

/// Immutable after construction; shared read-only across requests.
#[derive(Debug, Clone, Default)]
pub struct LegacyRegistry {
    entries: HashMap<String, LegacyEntry>,
}

impl LegacyRegistry {
    /// Builds the registry. On duplicate ids the first entry is kept.
    pub fn new(entries: impl IntoIterator<Item = LegacyEntry>) -> Self {
        let mut map = HashMap::new();
        for entry in entries {
            if map.contains_key(&entry.id) {
                tracing::warn!("Duplicate legacy entry {} ignored", entry.id);
                continue;
            }
            map.insert(entry.id.clone(), entry);
        }
        Self { entries: map }
    }

    pub fn lookup(&self, id: &str) -> Option<&LegacyEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
