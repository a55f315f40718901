//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

use crate::constants::PCT_SCALE;

/// Round a f64 and clamp it to the u8 range, returning 0 for NaN values.
#[must_use]
pub fn round_f64_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let clamped = value.clamp(0.0, f64::from(u8::MAX)).round();
    cast::<f64, u8>(clamped).unwrap_or(0)
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    cast::<i64, f64>(value).unwrap_or(0.0)
}

/// Convert u64 to i64, saturating at `i64::MAX`.
#[must_use]
pub fn saturating_u64_to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Whole-number percentage of `part` in `total`, treating an empty total as 1.
#[must_use]
pub fn rounded_pct(part: usize, total: usize) -> u8 {
    let part = cast::<usize, f64>(part).unwrap_or(0.0);
    let total = cast::<usize, f64>(total.max(1)).unwrap_or(1.0);
    round_f64_to_u8(part / total * PCT_SCALE)
}

/// Signed percentage change of `delta` against `basis`, 0 when the basis is empty.
#[must_use]
pub fn change_pct(delta: i64, basis: u64) -> f64 {
    if basis == 0 {
        return 0.0;
    }
    i64_to_f64(delta) / u64_to_f64(basis) * PCT_SCALE
}
