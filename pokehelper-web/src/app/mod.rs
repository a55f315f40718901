#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use pokehelper_core::Action;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod handlers;
pub mod routing;
pub mod state;
pub mod view;

pub use handlers::AppHandlers;
pub use state::AppState;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::router::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    use_theme_on_mount(&app_state);
    use_auto_save(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>();
    routing::use_sync_tab_with_route(&app_state, route.clone());

    let handlers = AppHandlers::new(&app_state, navigator, route.as_ref());
    view::render_app(&app_state.view, &handlers)
}

#[cfg(target_arch = "wasm32")]
#[hook]
fn use_theme_on_mount(state: &AppState) {
    let state = state.clone();
    use_effect_with((), move |()| {
        let theme = state.with_model(|model| model.data.settings.theme);
        crate::dom::apply_theme(theme);
    });
}

/// Dispatch `AutoSave` on a fixed interval for the lifetime of the app.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_auto_save(state: &AppState) {
    let state = state.clone();
    use_effect_with((), move |()| {
        let interval = gloo::timers::callback::Interval::new(
            pokehelper_core::constants::AUTO_SAVE_INTERVAL_MS,
            move || state.dispatch(Action::AutoSave),
        );
        move || drop(interval)
    });
}
