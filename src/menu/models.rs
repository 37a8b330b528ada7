//! Menu Domain Models

use serde_json::value::RawValue;

/// Holds the menu exactly as it was read from disk.
///
/// The document is kept as raw JSON text so the bytes served under `data`
/// are the bytes of the source file.
#[derive(Debug, Clone)]
pub struct MenuProvider {
    menu: Box<RawValue>,
}

impl MenuProvider {
    /// Validates `text` as JSON and keeps it verbatim.
    pub fn from_json(text: String) -> serde_json::Result<Self> {
        let menu = RawValue::from_string(text)?;
        Ok(Self { menu })
    }

    /// Returns the menu document. Every call yields the same document.
    pub fn get_menu(&self) -> &RawValue {
        &self.menu
    }
}

impl Default for MenuProvider {
    /// An empty JSON object, used when the menu file cannot be loaded.
    fn default() -> Self {
        let menu = RawValue::from_string("{}".to_owned()).expect("`{}` is valid JSON");
        Self { menu }
    }
}
