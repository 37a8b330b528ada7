//! Shopping Cart Domain Module
//!
//! This module contains the cart enrichment logic, including:
//! - Domain models (incoming and enriched carts)
//! - The PLU to item id index
//! - Business logic helpers (enrichment, formatting)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod plu;

// Re-export commonly used types for convenience
pub use handlers::{cart_handler, routes};
pub use helpers::enrich_cart;
pub use models::{Cart, EnrichedCart};
pub use plu::PluIndex;
