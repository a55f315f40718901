use chrono::{DateTime, Utc};
use pokehelper_core::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Access `window.localStorage`.
///
/// # Errors
/// Returns an error when there is no window, the browser denies access, or storage is disabled.
pub fn local_storage() -> Result<Storage, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    win.local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Current wall-clock time.
#[must_use]
pub fn now() -> DateTime<Utc> {
    #[cfg(target_arch = "wasm32")]
    {
        let millis = js_sys::Date::now();
        if millis.is_finite() {
            #[allow(clippy::cast_possible_truncation)]
            let millis = millis as i64;
            if let Some(at) = DateTime::<Utc>::from_timestamp_millis(millis) {
                return at;
            }
        }
        DateTime::<Utc>::UNIX_EPOCH
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DateTime::<Utc>::from(std::time::SystemTime::now())
    }
}

/// Reflect `theme` on the document root as `data-theme` plus a `theme-*` class.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document().and_then(|doc| doc.document_element()) else {
        return;
    };
    if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
        log::warn!("could not set theme attribute: {}", js_error_message(&err));
    }
    let classes = root.class_list();
    let stale = format!("theme-{}", theme.toggled().as_str());
    let fresh = format!("theme-{}", theme.as_str());
    if classes.remove_1(&stale).is_err() || classes.add_1(&fresh).is_err() {
        log::warn!("could not update theme class on document root");
    }
}

/// Move keyboard focus to the element with `id`, if present.
pub fn focus_element(id: &str) {
    if let Some(element) = document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}
