pub mod breeding;
pub mod dashboard;
pub mod dialogs;
pub mod header;
pub mod items;
pub mod loading;
pub mod modal;
pub mod notice;
pub mod pokedex;
pub mod tool_forms;
pub mod tools;

use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Current value of the form control an event fired on.
pub(crate) fn event_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// `Callback<Event>` storing the control's value into `handle`.
pub(crate) fn bind_value(handle: &UseStateHandle<String>) -> Callback<Event> {
    let handle = handle.clone();
    Callback::from(move |event: Event| handle.set(event_value(&event)))
}

/// Same as [`bind_value`] for `input` events, so typing updates immediately.
pub(crate) fn bind_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| handle.set(event_value(&event)))
}
