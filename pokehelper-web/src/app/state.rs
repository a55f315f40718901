use crate::dom;
use crate::storage::LocalStore;
use gloo::timers::callback::Timeout;
use pokehelper_core::{Action, AppModel, Effect, HelperSession, TaskKind, ViewTree};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

pub type WebSession = HelperSession<LocalStore>;

/// Shared handle to the session, the rendered view and pending timers.
#[derive(Clone)]
pub struct AppState {
    pub session: Rc<RefCell<WebSession>>,
    pub view: UseStateHandle<Rc<ViewTree>>,
    timers: Rc<RefCell<HashMap<TaskKind, Timeout>>>,
}

impl AppState {
    #[must_use]
    pub fn new(session: Rc<RefCell<WebSession>>, view: UseStateHandle<Rc<ViewTree>>) -> Self {
        Self {
            session,
            view,
            timers: Rc::default(),
        }
    }

    /// Run `action` through the session, execute the effects it hands back and
    /// re-render when the model changed.
    pub fn dispatch(&self, action: Action) {
        if let Action::Cancel(kind) = &action {
            // Dropping a gloo timeout clears it.
            self.timers.borrow_mut().remove(kind);
        }
        let result = self.session.borrow_mut().dispatch(action, dom::now());
        for effect in result.pending {
            self.run_effect(effect);
        }
        if result.changed {
            self.view.set(Rc::new(self.session.borrow().view()));
        }
    }

    /// Read the current model without dispatching.
    pub fn with_model<R>(&self, read: impl FnOnce(&AppModel) -> R) -> R {
        read(self.session.borrow().model())
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::Schedule { ticket, delay_ms } => {
                let state = self.clone();
                let timeout = Timeout::new(delay_ms, move || {
                    state.dispatch(Action::Complete(ticket));
                });
                if self
                    .timers
                    .borrow_mut()
                    .insert(ticket.kind, timeout)
                    .is_some()
                {
                    log::debug!("replaced pending {} timer with {ticket}", ticket.kind.label());
                }
            }
            Effect::ApplyTheme(theme) => dom::apply_theme(theme),
            Effect::Persist(reason) => {
                log::warn!("session returned an unexecuted persist effect ({reason:?})");
            }
        }
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    let session = use_mut_ref(|| {
        HelperSession::open(
            LocalStore,
            pokehelper_core::Collaborators::default(),
            dom::now(),
        )
    });
    let view = {
        let session = session.clone();
        use_state(move || Rc::new(session.borrow().view()))
    };
    AppState::new(session, view)
}
