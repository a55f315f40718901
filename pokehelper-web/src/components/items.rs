use pokehelper_core::view::ItemCard;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cards: Vec<ItemCard>,
    pub on_search: Callback<String>,
    pub on_watch: Callback<u32>,
}

#[function_component(ItemsPanel)]
pub fn items_panel(p: &Props) -> Html {
    let query = use_state(String::new);
    let on_input = super::bind_input(&query);
    let search = {
        let cb = p.on_search.clone();
        let query = query.clone();
        Callback::from(move |_| cb.emit((*query).clone()))
    };
    let on_keypress = {
        let cb = p.on_search.clone();
        let query = query.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                cb.emit((*query).clone());
            }
        })
    };

    html! {
        <>
            <div class="search-bar">
                <label for="item-search" class="sr-only">{ "Search items" }</label>
                <input
                    id="item-search"
                    type="search"
                    placeholder="Search items..."
                    value={(*query).clone()}
                    oninput={on_input}
                    onkeypress={on_keypress}
                />
                <button id="item-search-btn" type="button" onclick={search}>{ "Search" }</button>
            </div>
            <div id="items-grid" class="items-grid">
                if p.cards.is_empty() {
                    <p class="empty">{ "No items found." }</p>
                }
                { for p.cards.iter().map(|card| item_card(card, &p.on_watch)) }
            </div>
        </>
    }
}

fn item_card(card: &ItemCard, on_watch: &Callback<u32>) -> Html {
    let id = card.id;
    let watch = {
        let cb = on_watch.clone();
        Callback::from(move |_| cb.emit(id))
    };
    html! {
        <div class="item-card" data-item-id={id.to_string()}>
            <h3>{ card.name.clone() }</h3>
            <p class="item-category">{ card.category }</p>
            <p class="item-price">{ card.price.clone() }</p>
            <p class="item-description">{ card.description.clone() }</p>
            <button type="button" class="add-to-watchlist" onclick={watch}>{ "Add to Watchlist" }</button>
        </div>
    }
}
