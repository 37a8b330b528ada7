//! Application State
//!
//! Reference documents are read once at startup and never change afterwards,
//! so the state is shared behind a plain `Arc` without locks.

use crate::cart::{Cart, PluIndex};
use crate::combo::{estimate_calories, CalorieRange, Combo, ComboDocument};
use crate::config::AppConfig;
use crate::error::{DataError, Result};
use crate::menu::MenuProvider;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const MENU_FILE: &str = "menu.json";
pub const CART_FILE: &str = "cart.json";
pub const PLU_FILE: &str = "plus.json";
pub const COMBO_FILE: &str = "4pc-chicken.json";

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Loaded reference data
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub menu: MenuProvider,

    /// Cart served by `GET /cart`
    pub cart: Cart,

    pub plu_index: PluIndex,

    /// Estimate for the bundled 4 piece chicken combo
    pub combo_calories: CalorieRange,
}

impl AppState {
    /// Builds the state from already-loaded parts.
    pub fn new(menu: MenuProvider, cart: Cart, plu_index: PluIndex, combo: &Combo) -> Self {
        Self {
            menu,
            cart,
            plu_index,
            combo_calories: estimate_calories(combo),
        }
    }

    /// Reads every reference document from `config.data_dir`.
    ///
    /// A document that fails to load is logged and replaced by its empty
    /// default, unless `config.strict_data` is set, in which case the error
    /// is returned.
    pub async fn load(config: &AppConfig) -> Result<Self> {
        let dir = config.data_dir.as_path();
        tracing::info!("Loading reference data from {:?}", dir);

        let menu = recover(config, MENU_FILE, load_menu(dir).await)?;
        let cart = recover(config, CART_FILE, read_json::<Cart>(&dir.join(CART_FILE)).await)?;
        let plu_index = recover(config, PLU_FILE, load_plu_index(dir).await)?;
        let combo = recover(config, COMBO_FILE, load_combo(dir).await)?;

        tracing::info!(
            "Loaded {} PLU mapping(s) and {} combo group(s)",
            plu_index.len(),
            combo.groups.len()
        );

        let state = Self::new(menu, cart, plu_index, &combo);
        tracing::info!(
            "4pc chicken combo: {} - {} calories",
            state.combo_calories.min_calories,
            state.combo_calories.max_calories
        );

        Ok(state)
    }
}

fn recover<T: Default>(config: &AppConfig, file: &str, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if config.strict_data => Err(e),
        Err(e) => {
            tracing::error!("Could not load {}: {}; continuing with empty data", file, e);
            Ok(T::default())
        }
    }
}

async fn read_text(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path).await?;
    serde_json::from_str(&text).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

async fn load_menu(dir: &Path) -> Result<MenuProvider> {
    let path: PathBuf = dir.join(MENU_FILE);
    let text = read_text(&path).await?;
    MenuProvider::from_json(text).map_err(|source| DataError::Json { path, source })
}

async fn load_plu_index(dir: &Path) -> Result<PluIndex> {
    let document: Value = read_json(&dir.join(PLU_FILE)).await?;
    PluIndex::from_document(&document)
}

async fn load_combo(dir: &Path) -> Result<Combo> {
    let document: ComboDocument = read_json(&dir.join(COMBO_FILE)).await?;
    Ok(Combo::from(document))
}
