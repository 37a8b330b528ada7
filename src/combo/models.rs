//! Combo Domain Models
//!
//! `ComboDocument` mirrors the JSON reference file; `Combo` is the flattened
//! shape the estimator works on.

use crate::helpers::as_whole_number;
use serde::{Deserialize, Serialize, Serializer};

// =============================================================================
// Reference document
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboDocument {
    #[serde(default)]
    pub combo_items: Option<Vec<ComboItemDocument>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboItemDocument {
    #[serde(default)]
    pub name: Option<LocalizedName>,

    #[serde(default)]
    pub amount_required_to_select: u32,

    #[serde(default)]
    pub combo_item_options: Vec<ComboItemOptionDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComboItemOptionDocument {
    #[serde(default)]
    pub min_amount: u32,

    pub max_amount: u32,

    pub option: OptionDocument,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OptionDocument {
    #[serde(default)]
    pub name: Option<LocalizedName>,

    pub nutrition: Nutrition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    #[serde(default)]
    pub en: Option<String>,
}

fn english_name(name: Option<LocalizedName>) -> String {
    name.and_then(|n| n.en).unwrap_or_default()
}

// =============================================================================
// Estimator input
// =============================================================================

/// One selectable choice within a group.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboItemOption {
    pub name: String,
    pub calories: f64,
    pub min_amount: u32,
    pub max_amount: u32,
}

/// A slot of the combo: exactly `amount_required_to_select` units are shared
/// among `options`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboGroup {
    pub name: String,
    pub amount_required_to_select: u32,
    pub options: Vec<ComboItemOption>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Combo {
    pub groups: Vec<ComboGroup>,
}

impl From<ComboDocument> for Combo {
    fn from(document: ComboDocument) -> Self {
        let groups = document
            .combo_items
            .unwrap_or_default()
            .into_iter()
            .map(|item| ComboGroup {
                name: english_name(item.name),
                amount_required_to_select: item.amount_required_to_select,
                options: item
                    .combo_item_options
                    .into_iter()
                    .map(|choice| ComboItemOption {
                        name: english_name(choice.option.name),
                        calories: choice.option.nutrition.calories,
                        min_amount: choice.min_amount,
                        max_amount: choice.max_amount,
                    })
                    .collect(),
            })
            .collect();

        Self { groups }
    }
}

// =============================================================================
// Response
// =============================================================================

/// Lowest and highest achievable calorie totals for a combo.
///
/// Whole totals serialise as JSON integers (`1060`, not `1060.0`).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalorieRange {
    #[serde(serialize_with = "serialize_calories")]
    pub min_calories: f64,
    #[serde(serialize_with = "serialize_calories")]
    pub max_calories: f64,
}

fn serialize_calories<S: Serializer>(calories: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    match as_whole_number(*calories) {
        Some(whole) => serializer.serialize_i64(whole),
        None => serializer.serialize_f64(*calories),
    }
}
