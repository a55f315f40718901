use pokehelper_core::view::NavEntry;
use pokehelper_core::{Tab, Theme};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub nav: Vec<NavEntry>,
    pub theme: Theme,
    pub on_show_tab: Callback<Tab>,
    pub on_toggle_theme: Callback<()>,
    pub on_open_settings: Callback<()>,
    pub on_open_save: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle_theme = {
        let cb = p.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_settings = {
        let cb = p.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_save = {
        let cb = p.on_open_save.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let theme_label = match p.theme {
        Theme::Light => "Dark mode",
        Theme::Dark => "Light mode",
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <h1 class="header-left">{ "PokeMMO Helper" }</h1>
                <nav class="nav-tabs" aria-label="Sections">
                    { for p.nav.iter().map(|entry| {
                        let tab = entry.tab;
                        let cb = p.on_show_tab.clone();
                        let onclick = Callback::from(move |_| cb.emit(tab));
                        let class = classes!("nav-tab", entry.active.then_some("active"));
                        html! {
                            <button
                                type="button"
                                {class}
                                data-tab={tab.slug()}
                                aria-current={entry.active.then_some("page")}
                                {onclick}
                            >
                                { entry.label }
                            </button>
                        }
                    }) }
                </nav>
                <div class="header-right">
                    <button id="theme-toggle" type="button" onclick={toggle_theme}>{ theme_label }</button>
                    <button id="settings-open-btn" type="button" onclick={open_settings}>{ "Settings" }</button>
                    <button id="save-open-btn" type="button" onclick={open_save}>{ "Save Data" }</button>
                </div>
            </div>
        </header>
    }
}
