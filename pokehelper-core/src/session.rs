use chrono::{DateTime, Utc};
use std::rc::Rc;

use crate::breeding::{BreedingPathSolver, EstimatingSolver};
use crate::catalog::{CatalogSource, MockCatalog};
use crate::catch_rate::{CatchProbability, PlaceholderCatchModel};
use crate::persistence::{KeyValueStore, load_app_data, persist};
use crate::state::{AppModel, Tab};
use crate::update::{Action, Context, Effect, update};
use crate::view::{ViewTree, render};

/// External data sources and calculators the helper delegates to.
#[derive(Clone)]
pub struct Collaborators {
    pub catalog: Rc<dyn CatalogSource>,
    pub solver: Rc<dyn BreedingPathSolver>,
    pub catch_model: Rc<dyn CatchProbability>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            catalog: Rc::new(MockCatalog::new()),
            solver: Rc::new(EstimatingSolver),
            catch_model: Rc::new(PlaceholderCatchModel),
        }
    }
}

impl Collaborators {
    fn context(&self, now: DateTime<Utc>) -> Context<'_> {
        Context {
            catalog: self.catalog.as_ref(),
            solver: self.solver.as_ref(),
            catch_model: self.catch_model.as_ref(),
            now,
        }
    }
}

/// Result of dispatching one action through a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatched {
    pub changed: bool,
    /// Effects the session cannot run itself (timers, document theme).
    pub pending: Vec<Effect>,
    /// Persist effects that reached storage.
    pub writes: usize,
}

/// Owner of the model and the store; the single writer of persisted data.
pub struct HelperSession<S: KeyValueStore> {
    model: AppModel,
    store: S,
    collaborators: Collaborators,
}

impl<S: KeyValueStore> HelperSession<S> {
    /// Load saved data from `store` and show the dashboard.
    pub fn open(store: S, collaborators: Collaborators, now: DateTime<Utc>) -> Self {
        let data = load_app_data(&store);
        let mut session = Self {
            model: AppModel::new(data, now),
            store,
            collaborators,
        };
        session.dispatch(Action::ShowTab(Tab::Dashboard), now);
        session
    }

    /// Run `action` through the reducer, then execute its storage effects in order.
    pub fn dispatch(&mut self, action: Action, now: DateTime<Utc>) -> Dispatched {
        let ctx = self.collaborators.context(now);
        let result = update(&mut self.model, action, &ctx);
        let mut dispatched = Dispatched {
            changed: result.changed,
            ..Dispatched::default()
        };
        for effect in result.effects {
            match effect {
                Effect::Persist(reason) => {
                    log::debug!("persisting app data ({reason:?})");
                    if persist(&self.store, &self.model.data) {
                        dispatched.writes += 1;
                    }
                }
                other => dispatched.pending.push(other),
            }
        }
        dispatched
    }

    #[must_use]
    pub const fn model(&self) -> &AppModel {
        &self.model
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    #[must_use]
    pub fn view(&self) -> ViewTree {
        render(&self.model, self.collaborators.catalog.as_ref())
    }
}
