use crate::ids::BuildId;
use crate::listing::ListingRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A saved-build container record.
///
/// Builds embed full copies of the listings they reference as a denormalized
/// convenience, so the same listing typically appears inside many builds. The
/// section map holds those embedded arrays keyed by catalog section field
/// (`laptops`, `monitors`, ...). Sections the build never touched are simply
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildRecord {
    #[serde(default)]
    pub id: BuildId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub sections: BTreeMap<String, Value>,
}

impl BuildRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: BuildId::new(),
            title: title.into(),
            created_at: Some(Utc::now()),
            sections: BTreeMap::new(),
        }
    }

    /// Attach an embedded listing array under a section field.
    pub fn with_section(mut self, field: impl Into<String>, listings: Vec<ListingRecord>) -> Self {
        let entries = listings
            .into_iter()
            .map(|l| serde_json::to_value(l).unwrap_or(Value::Null))
            .collect();
        self.sections.insert(field.into(), Value::Array(entries));
        self
    }

    /// Decode the embedded listings under one section field.
    ///
    /// An absent or non-array section reads as empty, and individual entries
    /// that fail to decode are dropped rather than failing the build — the
    /// blobs are written by older application versions and drift.
    pub fn embedded_listings(&self, field: &str) -> Vec<ListingRecord> {
        match self.sections.get(field) {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| ListingRecord::from_value(entry).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_sections_from_blob() {
        let build: BuildRecord = serde_json::from_value(json!({
            "title": "Budget gaming rig",
            "laptops": [
                {"name": "A", "brand": "Acer", "price": 30000},
                {"name": "B", "brand": "Dell", "price": 50000}
            ]
        }))
        .unwrap();

        let laptops = build.embedded_listings("laptops");
        assert_eq!(laptops.len(), 2);
        assert_eq!(laptops[0].name, "A");
    }

    #[test]
    fn absent_and_malformed_sections_read_empty() {
        let build: BuildRecord = serde_json::from_value(json!({
            "title": "Sparse",
            "monitors": "not an array"
        }))
        .unwrap();

        assert!(build.embedded_listings("monitors").is_empty());
        assert!(build.embedded_listings("laptops").is_empty());
    }

    #[test]
    fn undecodable_entries_are_dropped() {
        let build: BuildRecord = serde_json::from_value(json!({
            "title": "Drifted",
            "headsets": [
                {"name": "Cloud II", "brand": "HyperX"},
                42,
                {"brand": "nameless"}
            ]
        }))
        .unwrap();

        let headsets = build.embedded_listings("headsets");
        assert_eq!(headsets.len(), 1);
        assert_eq!(headsets[0].name, "Cloud II");
    }
}
