#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use pokehelper_core::Action;
use pokehelper_core::Tab;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Route to push for a nav click on `tab`, `None` when already there.
#[must_use]
pub fn next_route_for_tab(tab: Tab, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_tab(tab);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_tab_for_route(current_tab: Tab, route: Option<&Route>) -> Option<Tab> {
    let new_tab = route.and_then(Route::to_tab)?;
    (new_tab != current_tab).then_some(new_tab)
}

/// The URL drives the active tab: nav clicks push a route and this hook
/// turns route changes (including back/forward) into `ShowTab`.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_tab_with_route(state: &AppState, route: Option<Route>) {
    let state = state.clone();
    use_effect_with(route, move |route| {
        let current = state.with_model(|model| model.ui.active_tab);
        if let Some(tab) = next_tab_for_route(current, route.as_ref()) {
            state.dispatch(Action::ShowTab(tab));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_route_for_tab_skips_when_unchanged() {
        assert!(next_route_for_tab(Tab::Items, Some(&Route::Items)).is_none());
        assert_eq!(next_route_for_tab(Tab::Items, None), Some(Route::Items));
        assert_eq!(
            next_route_for_tab(Tab::Dashboard, Some(&Route::Pokedex)),
            Some(Route::Dashboard)
        );
    }

    #[test]
    fn next_tab_for_route_ignores_unknown_and_current() {
        assert!(next_tab_for_route(Tab::Tools, Some(&Route::Tools)).is_none());
        assert!(next_tab_for_route(Tab::Tools, Some(&Route::NotFound)).is_none());
        assert!(next_tab_for_route(Tab::Tools, None).is_none());
        assert_eq!(
            next_tab_for_route(Tab::Tools, Some(&Route::Breeding)),
            Some(Tab::Breeding)
        );
    }
}
