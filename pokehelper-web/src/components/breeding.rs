use crate::input::parse_iv;
use pokehelper_core::view::{BreedingResultView, SavedProjectRow};
use pokehelper_core::{BreedingRequest, IvSpread, Nature, Stat};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub species: Vec<String>,
    pub natures: Vec<Nature>,
    pub result: Option<BreedingResultView>,
    pub saved: Vec<SavedProjectRow>,
    pub on_plan: Callback<BreedingRequest>,
    pub on_save: Callback<()>,
}

fn request_from(pokemon: &str, nature: &str, iv_texts: &[String; 6]) -> BreedingRequest {
    let mut ivs = IvSpread::default();
    for (stat, text) in Stat::ALL.into_iter().zip(iv_texts) {
        ivs.set(stat, parse_iv(text));
    }
    BreedingRequest::new(pokemon, ivs, nature.parse::<Nature>().ok())
}

#[function_component(BreedingPanel)]
pub fn breeding_panel(p: &Props) -> Html {
    let pokemon = use_state(String::new);
    let nature = use_state(String::new);
    let iv_texts = use_state(|| std::array::from_fn::<String, 6, _>(|_| "31".to_string()));

    let plan = {
        let cb = p.on_plan.clone();
        let pokemon = pokemon.clone();
        let nature = nature.clone();
        let iv_texts = iv_texts.clone();
        Callback::from(move |_| cb.emit(request_from(&pokemon, &nature, &iv_texts)))
    };
    let save = {
        let cb = p.on_save.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let iv_inputs = Stat::ALL.into_iter().enumerate().map(|(idx, stat)| {
        let id = format!("{}-iv", stat.slug());
        let oninput = {
            let iv_texts = iv_texts.clone();
            Callback::from(move |e: InputEvent| {
                let mut next = (*iv_texts).clone();
                next[idx] = super::event_value(&e);
                iv_texts.set(next);
            })
        };
        html! {
            <div class="iv-input">
                <label for={id.clone()}>{ stat.label() }</label>
                <input id={id} type="number" min="0" max="31" value={iv_texts[idx].clone()} {oninput} />
            </div>
        }
    });

    html! {
        <div class="breeding-layout">
            <div class="breeding-form">
                <label for="pokemon-select">{ "Pokémon" }</label>
                <select id="pokemon-select" onchange={super::bind_value(&pokemon)}>
                    <option value="" selected={pokemon.is_empty()}>{ "Select Pokémon..." }</option>
                    { for p.species.iter().map(|name| html! {
                        <option value={name.clone()} selected={*name == *pokemon}>{ name.clone() }</option>
                    }) }
                </select>
                <label for="nature-select">{ "Nature" }</label>
                <select id="nature-select" onchange={super::bind_value(&nature)}>
                    <option value="" selected={nature.is_empty()}>{ "Any nature" }</option>
                    { for p.natures.iter().map(|n| html! {
                        <option value={n.label()} selected={n.label() == nature.as_str()}>{ n.label() }</option>
                    }) }
                </select>
                <fieldset class="iv-grid">
                    <legend>{ "Target IVs" }</legend>
                    { for iv_inputs }
                </fieldset>
                <button id="calculate-breeding" type="button" onclick={plan}>{ "Calculate Breeding Path" }</button>
            </div>
            <div id="breeding-results" class="breeding-results">
                { p.result.as_ref().map(|result| breeding_result(result, save)).unwrap_or_default() }
            </div>
            if !p.saved.is_empty() {
                <div class="saved-projects">
                    <h3>{ "Saved Projects" }</h3>
                    <ul>
                        { for p.saved.iter().map(|row| html! {
                            <li key={row.id.clone()}>
                                <span class="project-name">{ row.pokemon.clone() }</span>
                                <span class="project-status">{ row.status }</span>
                                <span class="project-cost">{ row.cost.clone() }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            }
        </div>
    }
}

fn breeding_result(result: &BreedingResultView, save: Callback<MouseEvent>) -> Html {
    html! {
        <>
            <h3>{ result.heading.clone() }</h3>
            <div class="breeding-summary">
                <p><strong>{ "Target: " }</strong>{ result.target.clone() }</p>
                if let Some(nature) = result.nature {
                    <p><strong>{ "Nature: " }</strong>{ nature }</p>
                }
                <p><strong>{ "Estimated Cost: " }</strong>{ result.cost.clone() }</p>
                <p><strong>{ "Estimated Steps: " }</strong>{ result.steps }</p>
            </div>
            <div class="breeding-actions">
                <button id="save-breeding-project" type="button" disabled={result.saved} onclick={save}>
                    { if result.saved { "Saved" } else { "Save Project" } }
                </button>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_text_becomes_a_clamped_request() {
        let texts = ["31", "31", "abc", "40", "", "7"].map(String::from);
        let request = request_from("Gible", "Jolly", &texts);
        assert_eq!(request.pokemon_name, "Gible");
        assert_eq!(request.nature, Some(Nature::Jolly));
        assert_eq!(request.target_ivs, IvSpread::from_array([31, 31, 0, 31, 0, 7]));
        assert_eq!(request_from("Gible", "", &texts).nature, None);
    }
}
