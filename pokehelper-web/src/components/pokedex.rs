use pokehelper_core::view::PokemonCard;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cards: Vec<PokemonCard>,
    pub on_open: Callback<String>,
    pub on_toggle_caught: Callback<String>,
}

#[function_component(PokedexPanel)]
pub fn pokedex_panel(p: &Props) -> Html {
    html! {
        <div id="pokemon-grid" class="pokemon-grid">
            { for p.cards.iter().map(|card| {
                let open = {
                    let cb = p.on_open.clone();
                    let name = card.name.clone();
                    Callback::from(move |_| cb.emit(name.clone()))
                };
                let toggle = {
                    let cb = p.on_toggle_caught.clone();
                    let name = card.name.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        cb.emit(name.clone());
                    })
                };
                let class = classes!("pokemon-card", card.caught.then_some("caught"));
                html! {
                    <div {class} onclick={open}>
                        <h3>{ card.name.clone() }</h3>
                        <p class="pokemon-types">{ card.types.clone() }</p>
                        <ul class="pokemon-stats">
                            <li>{ format!("HP: {}", card.hp) }</li>
                            <li>{ format!("Attack: {}", card.attack) }</li>
                            <li>{ format!("Defense: {}", card.defense) }</li>
                        </ul>
                        <button type="button" class="toggle-caught" aria-pressed={card.caught.to_string()} onclick={toggle}>
                            { if card.caught { "Caught" } else { "Mark caught" } }
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
