#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use chrono::{Duration, TimeZone, Utc};

use pokehelper_core::constants::STORAGE_KEY;
use pokehelper_core::{AppData, KeyValueStore, Theme, load_app_data, save_app_data};
use pokehelper_web::app::App;
use pokehelper_web::dom;
use pokehelper_web::input::parse_datetime_local;
use pokehelper_web::storage::LocalStore;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    let _ = LocalStore.remove_item(STORAGE_KEY);
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn skip_link_points_to_main_landmark() {
    render_app();
    let doc = dom::document().expect("document");
    let skip = doc
        .query_selector("a[href='#main']")
        .expect("query skip link")
        .expect("skip link exists");
    let main = doc.get_element_by_id("main").expect("main landmark exists");
    assert_eq!(main.tag_name(), "MAIN");
    assert_eq!(skip.get_attribute("href").unwrap_or_default(), "#main");
}

#[wasm_bindgen_test]
fn theme_toggle_sets_document_theme() {
    render_app();
    let doc = dom::document().expect("document");
    let root = doc.document_element().expect("document element");
    let btn: HtmlElement = doc
        .get_element_by_id("theme-toggle")
        .expect("toggle exists")
        .dyn_into()
        .expect("cast to element");
    btn.click();
    assert_eq!(root.get_attribute("data-theme"), Some("dark".into()));
    assert!(root.class_list().contains("theme-dark"));
    assert_eq!(load_app_data(&LocalStore).settings.theme, Theme::Dark);
}

#[wasm_bindgen_test]
fn local_store_round_trips_app_data() {
    let mut data = AppData::default();
    data.pokedex_completion.insert("Pikachu".into(), true);
    save_app_data(&LocalStore, &data).expect("save to localStorage");
    assert_eq!(load_app_data(&LocalStore), data);
    LocalStore.remove_item(STORAGE_KEY).expect("remove");
    assert_eq!(load_app_data(&LocalStore), AppData::default());
}

#[wasm_bindgen_test]
fn datetime_local_input_is_read_in_the_browser_zone() {
    let local = js_sys::Date::new_with_year_month_day_hr_min(2024, 4, 1, 8, 30);
    #[allow(clippy::cast_possible_truncation)]
    let offset_minutes = local.get_timezone_offset() as i64;
    let expected = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap()
        + Duration::minutes(offset_minutes);

    assert_eq!(parse_datetime_local("2024-05-01T08:30"), Some(expected));
    assert_eq!(parse_datetime_local("2024-05-01T08:30:00"), Some(expected));
    assert_eq!(parse_datetime_local("yesterday"), None);
}
