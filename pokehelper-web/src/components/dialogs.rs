use pokehelper_core::Theme;
use pokehelper_core::view::StatRow;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::bind_input;

#[derive(Properties, PartialEq, Clone)]
pub struct DetailsProps {
    pub name: AttrValue,
    pub types: String,
    pub egg_groups: String,
    pub stats: Vec<StatRow>,
    pub caught: bool,
    pub on_toggle_caught: Callback<String>,
}

#[function_component(PokemonDetails)]
pub fn pokemon_details(p: &DetailsProps) -> Html {
    let toggle = {
        let cb = p.on_toggle_caught.clone();
        let name = p.name.to_string();
        Callback::from(move |_| cb.emit(name.clone()))
    };
    let total: u32 = p.stats.iter().map(|row| u32::from(row.value)).sum();
    html! {
        <div class="pokemon-details">
            <p><strong>{ "Types: " }</strong>{ p.types.clone() }</p>
            <p><strong>{ "Egg Groups: " }</strong>{ p.egg_groups.clone() }</p>
            <table class="base-stats">
                <tbody>
                    { for p.stats.iter().map(|row| html! {
                        <tr>
                            <th scope="row">{ row.label }</th>
                            <td>{ row.value }</td>
                        </tr>
                    }) }
                    <tr class="total">
                        <th scope="row">{ "Total" }</th>
                        <td>{ total }</td>
                    </tr>
                </tbody>
            </table>
            <button type="button" class="toggle-caught" aria-pressed={p.caught.to_string()} onclick={toggle}>
                { if p.caught { "Caught" } else { "Mark caught" } }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsProps {
    pub theme: Theme,
    pub auto_save: bool,
    pub on_set_theme: Callback<Theme>,
    pub on_set_auto_save: Callback<bool>,
}

#[function_component(SettingsForm)]
pub fn settings_form(p: &SettingsProps) -> Html {
    let on_dark = {
        let cb = p.on_set_theme.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(if input.checked() { Theme::Dark } else { Theme::Light });
            }
        })
    };
    let on_auto_save = {
        let cb = p.on_set_auto_save.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.checked());
            }
        })
    };
    html! {
        <div class="settings-form">
            <label class="toggle">
                <input id="dark-mode" type="checkbox" checked={p.theme == Theme::Dark} onchange={on_dark} />
                { "Dark mode" }
            </label>
            <label class="toggle">
                <input id="auto-save" type="checkbox" checked={p.auto_save} onchange={on_auto_save} />
                { "Auto-save every 30 seconds" }
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SaveDataProps {
    pub export: String,
    pub on_import: Callback<String>,
    pub on_reset: Callback<()>,
}

#[function_component(SaveDataForm)]
pub fn save_data_form(p: &SaveDataProps) -> Html {
    let import_text = use_state(String::new);
    let confirming_reset = use_state(|| false);
    let import_btn = {
        let cb = p.on_import.clone();
        let text = import_text.clone();
        Callback::from(move |_| cb.emit((*text).clone()))
    };
    let reset_btn = {
        let cb = p.on_reset.clone();
        let confirming = confirming_reset.clone();
        Callback::from(move |_| {
            if *confirming {
                confirming.set(false);
                cb.emit(());
            } else {
                confirming.set(true);
            }
        })
    };

    html! {
        <div class="save-data">
            <div class="field">
                <label for="export-json"><strong>{ "Export" }</strong></label>
                <textarea id="export-json" readonly=true rows={8} cols={40} value={p.export.clone()}></textarea>
            </div>
            <div class="field">
                <label for="import-json"><strong>{ "Import" }</strong></label>
                <textarea id="import-json" rows={6} cols={40} value={(*import_text).clone()} oninput={bind_input(&import_text)}></textarea>
            </div>
            <div class="controls">
                <button id="import-btn" type="button" onclick={import_btn}>{ "Import" }</button>
                <button id="reset-btn" type="button" class="danger" onclick={reset_btn}>
                    { if *confirming_reset { "Click again to erase all data" } else { "Reset all data" } }
                </button>
            </div>
        </div>
    }
}
