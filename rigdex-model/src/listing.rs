use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// One catalog entry (a laptop, monitor, headset, mini-PC, or part) as stored
/// inside a saved build's denormalized arrays.
///
/// Only `name`, `price`, and `specs` are structural; every other field of the
/// source blob (brand, processor, "16GB"-style capacities, ...) lands in
/// [`attrs`](Self::attrs) and is interpreted by the catalog profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    /// Display name; doubles as the deduplication identity key.
    pub name: String,
    /// Listed price. Feeds may leave placeholder rows at zero.
    #[serde(default)]
    pub price: f64,
    /// Opaque spec sheet, displayed as-is and never filtered on.
    #[serde(default)]
    pub specs: Map<String, Value>,
    /// Remaining free-form attribute fields of the blob.
    #[serde(flatten)]
    pub attrs: BTreeMap<String, Value>,
}

impl ListingRecord {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            specs: Map::new(),
            attrs: BTreeMap::new(),
        }
    }

    /// Attach an attribute field, consuming and returning self for chaining.
    pub fn with_attr(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(field.into(), Value::String(value.into()));
        self
    }

    /// Decode a single embedded blob entry.
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ModelError::InvalidListing(
                "embedded listing is not an object".into(),
            ));
        }
        Ok(serde_json::from_value(value.clone())?)
    }

    /// The deduplication key: the trimmed display name.
    pub fn identity_key(&self) -> &str {
        self.name.trim()
    }

    /// Coerce an attribute field to text for facet matching.
    ///
    /// Source blobs are inconsistent about quoting numbers, so bare numbers
    /// are stringified; anything else (objects, arrays, null, bools) is not a
    /// facet value and reads as absent.
    pub fn attr_text(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.attrs.get(field)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }
}
