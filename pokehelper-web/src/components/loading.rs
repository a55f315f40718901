use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: bool,
    pub on_cancel: Callback<()>,
}

#[function_component(LoadingOverlay)]
pub fn loading_overlay(p: &Props) -> Html {
    if !p.active {
        return Html::default();
    }
    let cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div id="loading" class="loading-overlay" role="status" aria-live="polite" aria-busy="true">
            <div class="spinner" aria-hidden="true"></div>
            <p>{ "Working..." }</p>
            <button type="button" class="retro-btn-secondary" onclick={cancel}>{ "Cancel" }</button>
        </div>
    }
}
