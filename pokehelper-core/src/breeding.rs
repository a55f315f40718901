//! Breeding planner: request validation and the solver seam.

use chrono::{DateTime, Utc};

use crate::constants::{BREEDING_ID_PREFIX, COST_PER_BREEDING_STEP};
use crate::data::{BreedingProject, BreedingStep, unique_id};
use crate::error::ValidationError;
use crate::stats::IvSpread;
use crate::types::{BreedingStatus, Nature};

/// What the user asked the planner for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedingRequest {
    pub pokemon_name: String,
    pub target_ivs: IvSpread,
    pub nature: Option<Nature>,
    pub egg_moves: Vec<String>,
}

impl BreedingRequest {
    #[must_use]
    pub fn new(pokemon_name: impl Into<String>, target_ivs: IvSpread, nature: Option<Nature>) -> Self {
        Self {
            pokemon_name: pokemon_name.into(),
            target_ivs,
            nature,
            egg_moves: Vec::new(),
        }
    }

    /// Check the request before any work is scheduled.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingPokemon`] for a blank species name, or
    /// [`ValidationError::IvOutOfRange`] for an IV above 31.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pokemon_name.trim().is_empty() {
            return Err(ValidationError::MissingPokemon);
        }
        self.target_ivs.validate()
    }
}

/// A solver's answer: the pairings and their estimated totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedingPlan {
    pub steps: Vec<BreedingStep>,
    pub estimated_steps: u32,
    pub estimated_cost: u64,
}

impl BreedingPlan {
    /// Turn the plan into a new project in the `Planning` state.
    #[must_use]
    pub fn into_project(
        self,
        request: &BreedingRequest,
        id: String,
        created_at: DateTime<Utc>,
    ) -> BreedingProject {
        BreedingProject {
            id,
            pokemon_name: request.pokemon_name.trim().to_string(),
            target_ivs: request.target_ivs,
            target_nature: request.nature,
            egg_moves: request.egg_moves.clone(),
            status: BreedingStatus::Planning,
            steps: self.steps,
            estimated_cost: self.estimated_cost,
            created_at,
        }
    }
}

/// Computes a breeding path for a validated request.
pub trait BreedingPathSolver {
    fn solve(&self, request: &BreedingRequest) -> BreedingPlan;
}

/// Placeholder solver. It emits no pairings and prices the plan from the number
/// of perfect IVs alone: `max(1, k - 1)` steps at a flat cost each.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatingSolver;

impl BreedingPathSolver for EstimatingSolver {
    fn solve(&self, request: &BreedingRequest) -> BreedingPlan {
        let perfect = u32::try_from(request.target_ivs.perfect_count()).unwrap_or(u32::MAX);
        let estimated_steps = perfect.saturating_sub(1).max(1);
        BreedingPlan {
            steps: Vec::new(),
            estimated_steps,
            estimated_cost: u64::from(estimated_steps) * COST_PER_BREEDING_STEP,
        }
    }
}

/// A computed plan awaiting the user's decision to save it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedingOutcome {
    pub project: BreedingProject,
    pub estimated_steps: u32,
}

/// Run `solver` for `request` and wrap the result as an unsaved project.
///
/// `taken` reports identifiers already in use so two plans created in the same
/// millisecond still get distinct ids.
///
/// # Errors
///
/// Returns the request's [`ValidationError`] without calling the solver.
pub fn plan_breeding(
    solver: &dyn BreedingPathSolver,
    request: &BreedingRequest,
    now: DateTime<Utc>,
    taken: impl Fn(&str) -> bool,
) -> Result<BreedingOutcome, ValidationError> {
    request.validate()?;
    let plan = solver.solve(request);
    let estimated_steps = plan.estimated_steps;
    let id = unique_id(BREEDING_ID_PREFIX, now, taken);
    Ok(BreedingOutcome {
        project: plan.into_project(request, id, now),
        estimated_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_700_000_000_123).unwrap()
    }

    fn spread_with_perfect(k: usize) -> IvSpread {
        let mut values = [20_u8; 6];
        for value in values.iter_mut().take(k) {
            *value = 31;
        }
        IvSpread::from_array(values)
    }

    #[test]
    fn cost_follows_perfect_iv_count() {
        let expected = [
            (0, 50_000),
            (1, 50_000),
            (2, 50_000),
            (3, 100_000),
            (4, 150_000),
            (5, 200_000),
            (6, 250_000),
        ];
        for (k, cost) in expected {
            let request = BreedingRequest::new("Charizard", spread_with_perfect(k), None);
            let plan = EstimatingSolver.solve(&request);
            assert_eq!(plan.estimated_cost, cost, "k = {k}");
            assert!(plan.steps.is_empty());
        }
    }

    #[test]
    fn blank_name_fails_validation() {
        let request = BreedingRequest::new("   ", IvSpread::uniform(31), None);
        assert_eq!(
            plan_breeding(&EstimatingSolver, &request, now(), |_| false),
            Err(ValidationError::MissingPokemon)
        );
    }

    #[test]
    fn out_of_range_iv_fails_validation() {
        let mut ivs = IvSpread::uniform(31);
        ivs.speed = 32;
        let request = BreedingRequest::new("Pikachu", ivs, None);
        assert!(matches!(
            request.validate(),
            Err(ValidationError::IvOutOfRange { value: 32, .. })
        ));
    }

    #[test]
    fn outcome_is_a_planning_project() {
        let request = BreedingRequest::new("Garchomp", spread_with_perfect(5), Some(Nature::Jolly));
        let outcome = plan_breeding(&EstimatingSolver, &request, now(), |_| false).unwrap();
        let project = outcome.project;
        assert_eq!(outcome.estimated_steps, 4);
        assert_eq!(project.id, "breeding-1700000000123");
        assert_eq!(project.status, BreedingStatus::Planning);
        assert_eq!(project.target_nature, Some(Nature::Jolly));
        assert_eq!(project.estimated_cost, 200_000);
        assert_eq!(project.created_at, now());
    }

    #[test]
    fn same_millisecond_plans_get_distinct_ids() {
        let request = BreedingRequest::new("Mewtwo", IvSpread::uniform(31), None);
        let first = plan_breeding(&EstimatingSolver, &request, now(), |_| false).unwrap();
        let second = plan_breeding(&EstimatingSolver, &request, now(), |id| {
            id == first.project.id
        })
        .unwrap();
        assert_ne!(first.project.id, second.project.id);
        assert_eq!(second.project.id, "breeding-1700000000123-1");
    }
}
