use crate::app::routing::next_route_for_tab;
use crate::app::state::AppState;
use crate::router::Route;
use chrono::{DateTime, Utc};
use pokehelper_core::{Action, BreedingRequest, CatchRateInput, Tab, TaskKind, Theme};
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub show_tab: Callback<Tab>,
    pub search: Callback<String>,
    pub watch: Callback<u32>,
    pub plan_breeding: Callback<BreedingRequest>,
    pub save_breeding: Callback<()>,
    pub cancel_tasks: Callback<()>,
    pub open_tool: Callback<String>,
    pub open_pokemon: Callback<String>,
    pub toggle_caught: Callback<String>,
    pub open_settings: Callback<()>,
    pub open_save: Callback<()>,
    pub close_modal: Callback<()>,
    pub dismiss_notice: Callback<()>,
    pub calculate_catch: Callback<CatchRateInput>,
    pub find_egg_move: Callback<(String, String)>,
    pub plant_berry: Callback<(String, Option<DateTime<Utc>>)>,
    pub add_investment: Callback<(String, u32, u64)>,
    pub set_theme: Callback<Theme>,
    pub toggle_theme: Callback<()>,
    pub set_auto_save: Callback<bool>,
    pub import_data: Callback<String>,
    pub reset_data: Callback<()>,
}

/// Callback that forwards its payload as the action built by `build`.
fn forward<T: 'static>(state: &AppState, build: impl Fn(T) -> Action + 'static) -> Callback<T> {
    let state = state.clone();
    Callback::from(move |payload: T| state.dispatch(build(payload)))
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>, route: Option<&Route>) -> Self {
        Self {
            show_tab: build_show_tab(state, navigator, route.cloned()),
            search: forward(state, Action::Search),
            watch: forward(state, Action::AddToWatchlist),
            plan_breeding: forward(state, Action::PlanBreeding),
            save_breeding: build_save_breeding(state),
            cancel_tasks: build_cancel_tasks(state),
            open_tool: forward(state, Action::OpenTool),
            open_pokemon: forward(state, Action::OpenPokemon),
            toggle_caught: forward(state, Action::TogglePokedexEntry),
            open_settings: forward(state, |()| Action::OpenSettings),
            open_save: forward(state, |()| Action::OpenSaveData),
            close_modal: forward(state, |()| Action::CloseModal),
            dismiss_notice: forward(state, |()| Action::DismissNotice),
            calculate_catch: forward(state, Action::CalculateCatchRate),
            find_egg_move: forward(state, |(target, egg_move)| Action::FindEggMovePath {
                target,
                egg_move,
            }),
            plant_berry: forward(state, |(berry, planted_at)| Action::PlantBerry {
                berry,
                planted_at,
            }),
            add_investment: forward(state, |(item_name, quantity, purchase_price)| {
                Action::AddInvestment {
                    item_name,
                    quantity,
                    purchase_price,
                }
            }),
            set_theme: forward(state, Action::SetTheme),
            toggle_theme: build_toggle_theme(state),
            set_auto_save: forward(state, Action::SetAutoSave),
            import_data: forward(state, Action::ImportData),
            reset_data: forward(state, |()| Action::ResetData),
        }
    }
}

fn build_show_tab(state: &AppState, navigator: Option<Navigator>, route: Option<Route>) -> Callback<Tab> {
    let state = state.clone();
    Callback::from(move |tab: Tab| {
        match (navigator.as_ref(), next_route_for_tab(tab, route.as_ref())) {
            (Some(nav), Some(new_route)) => nav.push(&new_route),
            // Already on this route (or no router): reload the tab in place.
            _ => state.dispatch(Action::ShowTab(tab)),
        }
    })
}

fn build_save_breeding(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let project = state.with_model(|model| {
            model
                .breeding_result
                .as_ref()
                .map(|outcome| outcome.project.clone())
        });
        if let Some(project) = project {
            state.dispatch(Action::SaveBreedingProject(project));
        }
    })
}

fn build_cancel_tasks(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        for kind in [TaskKind::Search, TaskKind::Breeding] {
            state.dispatch(Action::Cancel(kind));
        }
    })
}

fn build_toggle_theme(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| {
        let next = state.with_model(|model| model.data.settings.theme.toggled());
        state.dispatch(Action::SetTheme(next));
    })
}
