//! Small pure helpers shared across the domain modules.

/// Largest integer an IEEE double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns the value as an integer when it has no fractional part and sits
/// in the exactly representable range.
pub fn as_whole_number(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Some(value as i64)
    } else {
        None
    }
}
