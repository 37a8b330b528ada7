//! Combo Domain Module
//!
//! This module contains the combo calorie estimator, including:
//! - Reference document and estimator models
//! - The greedy min/max allocation
//! - REST API handlers

pub mod estimator;
pub mod handlers;
pub mod models;

pub use estimator::{estimate_calories, estimate_group, Allocation, GroupEstimate};
pub use handlers::{calorie_counter_handler, routes};
pub use models::{CalorieRange, Combo, ComboDocument, ComboGroup, ComboItemOption};
