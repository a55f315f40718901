//! Catch-rate calculator input and the probability seam.

use serde::{Deserialize, Serialize};

use crate::constants::PLACEHOLDER_CATCH_PROBABILITY_PCT;
use crate::error::ValidationError;
use crate::types::{Pokeball, StatusCondition};

/// Form input of the catch-rate tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchRateInput {
    pub pokemon: String,
    /// Remaining HP as a percentage, `1..=100`.
    pub current_hp_pct: u8,
    pub status: StatusCondition,
    pub ball: Pokeball,
}

impl Default for CatchRateInput {
    fn default() -> Self {
        Self {
            pokemon: String::new(),
            current_hp_pct: 100,
            status: StatusCondition::None,
            ball: Pokeball::Pokeball,
        }
    }
}

impl CatchRateInput {
    /// # Errors
    ///
    /// [`ValidationError::MissingPokemon`] without a target and
    /// [`ValidationError::HpOutOfRange`] for HP outside `1..=100`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pokemon.trim().is_empty() {
            return Err(ValidationError::MissingPokemon);
        }
        if !(1..=100).contains(&self.current_hp_pct) {
            return Err(ValidationError::HpOutOfRange(self.current_hp_pct));
        }
        Ok(())
    }
}

/// Probability, in percent, of catching a Pokémon under the given conditions.
pub trait CatchProbability {
    fn probability(&self, input: &CatchRateInput) -> f64;
}

/// Stand-in model that reports the same probability for every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderCatchModel;

impl CatchProbability for PlaceholderCatchModel {
    fn probability(&self, _input: &CatchRateInput) -> f64 {
        PLACEHOLDER_CATCH_PROBABILITY_PCT
    }
}

/// A computed catch estimate shown in the tool modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchEstimate {
    pub input: CatchRateInput,
    pub probability: f64,
}

impl CatchEstimate {
    /// `"85.3%"`, one decimal place.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.probability)
    }
}

/// Validate `input` and ask `model` for a probability, clamped to `0..=100`.
///
/// # Errors
///
/// Returns the input's [`ValidationError`] without consulting the model.
pub fn estimate_catch(
    model: &dyn CatchProbability,
    input: CatchRateInput,
) -> Result<CatchEstimate, ValidationError> {
    input.validate()?;
    let probability = model.probability(&input).clamp(0.0, 100.0);
    Ok(CatchEstimate { input, probability })
}
