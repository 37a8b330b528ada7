//! Menu Domain Module
//!
//! Serves the static menu document unchanged.

pub mod handlers;
pub mod models;

pub use handlers::{menu_handler, routes};
pub use models::MenuProvider;
