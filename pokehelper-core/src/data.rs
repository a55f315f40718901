//! The persisted application blob and the records it owns.
//!
//! Field names serialize in camelCase so blobs written by earlier versions of
//! the tool load unchanged.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{Berry, Item};
use crate::constants::BERRY_STAGE_COUNT;
use crate::error::ValidationError;
use crate::numbers::{change_pct, rounded_pct, saturating_u64_to_i64};
use crate::stats::IvSpread;
use crate::types::{BerryStage, BreedingStatus, Gender, Nature, Region};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// User preferences persisted alongside the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub theme: Theme,
    pub default_region: Region,
    pub auto_save: bool,
    pub notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            default_region: Region::Kanto,
            auto_save: true,
            notifications: true,
        }
    }
}

/// Root of everything the helper persists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppData {
    pub investments: Vec<Investment>,
    pub breeding_projects: Vec<BreedingProject>,
    pub berry_plots: Vec<BerryPlot>,
    pub pokedex_completion: BTreeMap<String, bool>,
    pub settings: AppSettings,
}

impl AppData {
    /// Share of tracked Pokédex entries marked complete, rounded to a whole percent.
    #[must_use]
    pub fn pokedex_completion_pct(&self) -> u8 {
        let completed = self.pokedex_completion.values().filter(|done| **done).count();
        rounded_pct(completed, self.pokedex_completion.len())
    }

    /// Flip the completion flag for `species` and return the new value.
    pub fn toggle_pokedex_entry(&mut self, species: &str) -> bool {
        let entry = self
            .pokedex_completion
            .entry(species.to_string())
            .or_insert(false);
        *entry = !*entry;
        *entry
    }

    #[must_use]
    pub fn is_caught(&self, species: &str) -> bool {
        self.pokedex_completion.get(species).copied().unwrap_or(false)
    }

    /// Whether any owned record already uses `id`.
    #[must_use]
    pub fn id_taken(&self, id: &str) -> bool {
        self.breeding_projects.iter().any(|project| project.id == id)
            || self.berry_plots.iter().any(|plot| plot.id == id)
    }
}

/// `"<prefix><unix millis>"`, with a `-<n>` suffix while `taken` reports a clash.
pub fn unique_id(prefix: &str, now: DateTime<Utc>, taken: impl Fn(&str) -> bool) -> String {
    let base = format!("{prefix}{}", now.timestamp_millis());
    if !taken(&base) {
        return base;
    }
    (1_u32..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}

/// A purchase the user is tracking against the market price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub item_id: u32,
    pub item_name: String,
    pub quantity: u32,
    pub purchase_price: u64,
    pub purchase_date: DateTime<Utc>,
    pub current_price: u64,
    pub profit_loss: i64,
    pub profit_loss_percentage: f64,
}

impl Investment {
    /// Record a purchase of `quantity` units at `purchase_price` each.
    ///
    /// `item` links the record to a catalog entry and supplies the current
    /// price; without one the purchase price is used as the current price.
    ///
    /// # Errors
    ///
    /// Rejects a blank item name or a zero quantity.
    pub fn new(
        item_name: &str,
        item: Option<&Item>,
        quantity: u32,
        purchase_price: u64,
        purchase_date: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let item_name = item_name.trim();
        if item_name.is_empty() {
            return Err(ValidationError::MissingItemName);
        }
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        let mut investment = Self {
            item_id: item.map_or(0, |item| item.id),
            item_name: item.map_or_else(|| item_name.to_string(), |item| item.name.clone()),
            quantity,
            purchase_price,
            purchase_date,
            current_price: item.map_or(purchase_price, |item| item.current_price),
            profit_loss: 0,
            profit_loss_percentage: 0.0,
        };
        investment.recompute();
        Ok(investment)
    }

    /// Update the market price and the derived profit figures.
    pub fn reprice(&mut self, current_price: u64) {
        self.current_price = current_price;
        self.recompute();
    }

    #[must_use]
    pub fn cost_basis(&self) -> u64 {
        self.purchase_price.saturating_mul(u64::from(self.quantity))
    }

    fn recompute(&mut self) {
        let per_unit = saturating_u64_to_i64(self.current_price)
            .saturating_sub(saturating_u64_to_i64(self.purchase_price));
        self.profit_loss = per_unit.saturating_mul(i64::from(self.quantity));
        self.profit_loss_percentage = change_pct(self.profit_loss, self.cost_basis());
    }
}

/// Where a parent in a breeding step comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentSource {
    Wild,
    Bred,
    Owned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedingParent {
    pub pokemon: String,
    pub ivs: IvSpread,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<Nature>,
    pub gender: Gender,
    pub source: ParentSource,
}

/// One pairing in a breeding plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingStep {
    pub step_number: u32,
    pub parent1: BreedingParent,
    pub parent2: BreedingParent,
    pub expected_result: IvSpread,
    /// Power items, Everstone and the like.
    pub items: Vec<String>,
    pub cost: u64,
}

/// A saved breeding plan. Created once by a calculation; never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedingProject {
    pub id: String,
    pub pokemon_name: String,
    #[serde(rename = "targetIVs")]
    pub target_ivs: IvSpread,
    pub target_nature: Option<Nature>,
    #[serde(default)]
    pub egg_moves: Vec<String>,
    #[serde(default)]
    pub status: BreedingStatus,
    #[serde(default)]
    pub steps: Vec<BreedingStep>,
    pub estimated_cost: u64,
    pub created_at: DateTime<Utc>,
}

impl BreedingProject {
    #[must_use]
    pub fn perfect_iv_count(&self) -> usize {
        self.target_ivs.perfect_count()
    }
}

/// A berry planted in the timer tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BerryPlot {
    pub id: String,
    pub berry: Berry,
    pub planted_at: DateTime<Utc>,
    pub harvest_at: DateTime<Utc>,
    #[serde(default)]
    pub stage: BerryStage,
    #[serde(default)]
    pub watered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_watered: Option<DateTime<Utc>>,
}

impl BerryPlot {
    #[must_use]
    pub fn plant(id: String, berry: Berry, planted_at: DateTime<Utc>) -> Self {
        let harvest_at = planted_at + Duration::minutes(i64::from(berry.growth_time));
        Self {
            id,
            berry,
            planted_at,
            harvest_at,
            stage: BerryStage::Planted,
            watered: false,
            last_watered: None,
        }
    }

    /// Growth stage at `now`: the growth time split into five equal bands.
    #[must_use]
    pub fn stage_at(&self, now: DateTime<Utc>) -> BerryStage {
        let total = (self.harvest_at - self.planted_at).num_seconds();
        if total <= 0 {
            return BerryStage::Fruiting;
        }
        let elapsed = (now - self.planted_at).num_seconds().clamp(0, total);
        let bands = i64::from(BERRY_STAGE_COUNT);
        let band = (elapsed * bands / total).min(bands - 1);
        usize::try_from(band)
            .ok()
            .and_then(|index| BerryStage::ALL.get(index).copied())
            .unwrap_or(BerryStage::Fruiting)
    }

    #[must_use]
    pub fn is_ready(&self, now: DateTime<Utc>) -> bool {
        now >= self.harvest_at
    }

    /// Time left until harvest, never negative.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.harvest_at - now).max(Duration::zero())
    }

    pub fn water(&mut self, now: DateTime<Utc>) {
        self.watered = true;
        self.last_watered = Some(now);
    }
}
