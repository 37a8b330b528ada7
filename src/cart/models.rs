//! Shopping Cart Domain Models
//!
//! This module contains the cart as it arrives (line items keyed by vendor
//! PLU code) and the enriched cart returned to callers (line items keyed by
//! internal item id).

use crate::helpers::as_whole_number;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// Container slots
// =============================================================================

/// A container field that can be missing, explicitly `null`, or filled.
///
/// Keeping `Absent` and `Null` apart lets an enriched copy reproduce the
/// source shape exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Absent,
    Null,
    Filled(T),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Absent
    }
}

impl<T> Slot<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Slot::Absent)
    }

    pub fn filled(&self) -> Option<&T> {
        match self {
            Slot::Filled(value) => Some(value),
            _ => None,
        }
    }

    /// Transforms a filled value, keeping `Absent` and `Null` as they are.
    pub fn map_ref<U, F>(&self, f: F) -> Slot<U>
    where
        F: FnOnce(&T) -> U,
    {
        match self {
            Slot::Absent => Slot::Absent,
            Slot::Null => Slot::Null,
            Slot::Filled(value) => Slot::Filled(f(value)),
        }
    }
}

impl<T: Serialize> Serialize for Slot<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Filled(value) => value.serialize(serializer),
            Slot::Absent | Slot::Null => serializer.serialize_none(),
        }
    }
}

// Only called for keys that are present; missing keys fall back to `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Slot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Slot::Null, Slot::Filled))
    }
}

// =============================================================================
// Incoming Cart
// =============================================================================

/// Vendor product code. Carts normally carry it as a string or an integer;
/// any other JSON value is kept in `Other` and simply fails to resolve unless
/// its text form matches an index key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluCode {
    Text(String),
    Number(i64),
    Other(Value),
}

impl fmt::Display for PluCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluCode::Text(code) => f.write_str(code),
            PluCode::Number(code) => write!(f, "{}", code),
            PluCode::Other(Value::Number(number)) => {
                match number.as_f64().and_then(as_whole_number) {
                    Some(whole) => write!(f, "{}", whole),
                    None => write!(f, "{}", number),
                }
            }
            PluCode::Other(Value::String(code)) => f.write_str(code),
            PluCode::Other(other) => write!(f, "{}", other),
        }
    }
}

/// Top-level cart document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    #[serde(default, skip_serializing_if = "Slot::is_absent")]
    pub order: Slot<Order>,

    /// Any other top-level fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Slot::is_absent")]
    pub items: Slot<Vec<LineItem>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A product in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plunum: Option<PluCode>,

    #[serde(default, skip_serializing_if = "Slot::is_absent")]
    pub modifiers: Slot<Vec<Modifier>>,

    /// Captures any extra fields (e.g., quantity, price) dynamically
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A modifier attached to a line item (sauce, side swap, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Modifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plunum: Option<PluCode>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// =============================================================================
// Enriched Cart
// =============================================================================

/// Cart with every `plunum` replaced by `itemId`.
///
/// An `itemId` of `null` means the PLU code has no entry in the index.
/// `order`, `items` and `modifiers` keep their source shape: missing stays
/// missing and `null` stays `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedCart {
    #[serde(default, skip_serializing_if = "Slot::is_absent")]
    pub order: Slot<EnrichedOrder>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedOrder {
    #[serde(default, skip_serializing_if = "Slot::is_absent")]
    pub items: Slot<Vec<EnrichedLineItem>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedLineItem {
    #[serde(rename = "itemId")]
    pub item_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Slot::is_absent")]
    pub modifiers: Slot<Vec<EnrichedModifier>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedModifier {
    #[serde(rename = "itemId")]
    pub item_id: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
