//! Fast-Food API Library
//!
//! Query handlers over static reference data for a fast-food ordering
//! domain: the menu, PLU-enriched carts, and combo calorie ranges.

// Domain modules
pub mod cart;
pub mod combo;
pub mod menu;

// Infrastructure
pub mod config;
pub mod envelope;
pub mod error;
pub mod helpers;
pub mod logger;
pub mod router;
pub mod state;
