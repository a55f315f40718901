//! Centralized constants for the helper's persistence, timing and placeholder math.
//!
//! Keeping them together means the timing of simulated work and the storage
//! layout can only change through reviewed code, not through user data.

// Persistence ---------------------------------------------------------------
/// `localStorage` key holding the serialized [`crate::AppData`] blob.
pub const STORAGE_KEY: &str = "pokemmo-helper-data";

// Timing --------------------------------------------------------------------
/// Delay before a pending item search resolves.
pub const SEARCH_DELAY_MS: u32 = 500;
/// Delay before a pending breeding calculation resolves.
pub const BREEDING_DELAY_MS: u32 = 1_000;
/// Period of the background auto-save flush.
pub const AUTO_SAVE_INTERVAL_MS: u32 = 30_000;

// Breeding ------------------------------------------------------------------
/// Highest value an individual value (IV) can take.
pub const MAX_IV: u8 = 31;
/// Placeholder cost charged per estimated breeding step, in Pokédollars.
pub const COST_PER_BREEDING_STEP: u64 = 50_000;
/// Prefix of generated breeding project identifiers.
pub const BREEDING_ID_PREFIX: &str = "breeding-";

// Tools ---------------------------------------------------------------------
/// Fixed probability reported by the placeholder catch model, in percent.
pub const PLACEHOLDER_CATCH_PROBABILITY_PCT: f64 = 85.3;
/// Number of equal growth bands a berry moves through before it can be harvested.
pub const BERRY_STAGE_COUNT: u32 = 5;

// Dashboard -----------------------------------------------------------------
pub(crate) const PCT_SCALE: f64 = 100.0;
