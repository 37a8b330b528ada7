//! PLU code to item id index
//!
//! The POS export nests the mapping as a JSON *string* at
//! `data.RestaurantPosData.plus`; that string decodes to an object of
//! `"plu_<code>": <itemId>` pairs.

use crate::error::{DataError, Result};
use crate::helpers::as_whole_number;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Prefix applied to a PLU code to form its index key.
pub const PLU_KEY_PREFIX: &str = "plu_";

/// Immutable lookup from PLU key to internal item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluIndex {
    entries: HashMap<String, i64>,
}

impl PluIndex {
    /// Extracts and decodes the embedded mapping from a POS export document.
    pub fn from_document(document: &Value) -> Result<Self> {
        let embedded = document
            .pointer("/data/RestaurantPosData/plus")
            .and_then(Value::as_str)
            .ok_or_else(|| DataError::Shape {
                message: "expected a string at data.RestaurantPosData.plus".to_string(),
            })?;

        Self::from_embedded(embedded)
    }

    /// Decodes the embedded JSON object. Ids written as whole-valued floats
    /// (`14.0`) count as integers; any other entry is skipped.
    pub fn from_embedded(raw: &str) -> Result<Self> {
        let mapping: Map<String, Value> =
            serde_json::from_str(raw).map_err(DataError::EmbeddedPlu)?;

        let mut entries = HashMap::with_capacity(mapping.len());
        for (key, value) in mapping {
            match value
                .as_i64()
                .or_else(|| value.as_f64().and_then(as_whole_number))
            {
                Some(item_id) => {
                    entries.insert(key, item_id);
                }
                None => tracing::warn!("Skipping PLU entry {} with non-integer id {}", key, value),
            }
        }

        Ok(Self { entries })
    }

    /// Resolves a PLU code to its item id, `None` when the index has no entry.
    pub fn resolve(&self, plunum: &str) -> Option<i64> {
        self.entries
            .get(&format!("{}{}", PLU_KEY_PREFIX, plunum))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, i64)> for PluIndex {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
