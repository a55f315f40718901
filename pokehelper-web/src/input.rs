//! Lenient parsing of form field text.
//!
//! Numeric fields read the leading integer and ignore trailing junk, so
//! `"31abc"` is 31 and an empty box is 0.

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use pokehelper_core::constants::MAX_IV;
use regex::Regex;

static LEADING_INT: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").ok());

fn leading_int(text: &str) -> Option<i64> {
    let digits = LEADING_INT.as_ref()?.captures(text)?.get(1)?.as_str();
    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

fn clamp_to<T: TryFrom<i64>>(value: i64, min: i64, max: i64) -> T
where
    T: Default,
{
    T::try_from(value.clamp(min, max)).unwrap_or_default()
}

/// IV box contents, clamped to `0..=31`.
#[must_use]
pub fn parse_iv(text: &str) -> u8 {
    clamp_to(leading_int(text).unwrap_or(0), 0, i64::from(MAX_IV))
}

#[must_use]
pub fn parse_quantity(text: &str) -> u32 {
    clamp_to(leading_int(text).unwrap_or(0), 0, i64::from(u32::MAX))
}

/// Purchase price in Pokédollars; negatives read as zero.
#[must_use]
pub fn parse_price(text: &str) -> u64 {
    leading_int(text)
        .and_then(|value| u64::try_from(value).ok())
        .unwrap_or(0)
}

/// Current HP percentage. Out-of-range values are passed through the `u8`
/// clamp so the core can reject them with its own message.
#[must_use]
pub fn parse_hp_pct(text: &str) -> u8 {
    clamp_to(leading_int(text).unwrap_or(0), 0, i64::from(u8::MAX))
}

/// Value of a `datetime-local` input (`2024-05-01T08:30`).
///
/// The browser reports local wall-clock time, so on wasm the text goes
/// through `Date`, which applies the user's offset. Native builds have no
/// browser zone and read it as UTC. Blank or malformed input yields `None`,
/// meaning "now".
#[must_use]
pub fn parse_datetime_local(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let naive = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())?;
    local_to_utc(text, naive)
}

#[cfg(target_arch = "wasm32")]
fn local_to_utc(text: &str, _naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    let millis = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(text)).get_time();
    if !millis.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let millis = millis as i64;
    DateTime::<Utc>::from_timestamp_millis(millis)
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unnecessary_wraps)]
fn local_to_utc(_text: &str, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Some(naive.and_utc())
}
