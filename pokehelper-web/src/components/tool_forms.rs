//! Forms rendered inside the tool modal.

use crate::input::{parse_datetime_local, parse_hp_pct, parse_price, parse_quantity};
use chrono::{DateTime, Utc};
use pokehelper_core::view::{BerryTimerRow, InvestmentRow};
use pokehelper_core::{CatchRateInput, Pokeball, StatusCondition};
use yew::prelude::*;

use super::{bind_input, bind_value};

fn catch_input(pokemon: &str, hp: &str, status: &str, ball: &str) -> CatchRateInput {
    CatchRateInput {
        pokemon: pokemon.to_string(),
        current_hp_pct: parse_hp_pct(hp),
        status: status.parse().unwrap_or_default(),
        ball: ball.parse().unwrap_or_default(),
    }
}

fn result_line(id: &'static str, text: Option<&String>) -> Html {
    text.map(|text| html! { <div id={id} class="tool-result">{ text.clone() }</div> })
        .unwrap_or_default()
}

#[derive(Properties, PartialEq, Clone)]
pub struct CatchRateProps {
    pub pokemon: Vec<String>,
    pub statuses: &'static [StatusCondition],
    pub balls: &'static [Pokeball],
    pub result: Option<String>,
    pub on_calculate: Callback<CatchRateInput>,
}

#[function_component(CatchRateForm)]
pub fn catch_rate_form(p: &CatchRateProps) -> Html {
    let pokemon = use_state(String::new);
    let hp = use_state(|| "100".to_string());
    let status = use_state(|| StatusCondition::None.label().to_string());
    let ball = use_state(|| Pokeball::Pokeball.label().to_string());

    let calculate = {
        let cb = p.on_calculate.clone();
        let (pokemon, hp, status, ball) = (pokemon.clone(), hp.clone(), status.clone(), ball.clone());
        Callback::from(move |_| cb.emit(catch_input(&pokemon, &hp, &status, &ball)))
    };

    html! {
        <div class="catch-calculator">
            <label for="catch-pokemon">{ "Pokémon" }</label>
            <select id="catch-pokemon" onchange={bind_value(&pokemon)}>
                <option value="" selected={pokemon.is_empty()}>{ "Select Pokémon..." }</option>
                { for p.pokemon.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == *pokemon}>{ name.clone() }</option>
                }) }
            </select>
            <label for="current-hp">{ "Current HP %" }</label>
            <input id="current-hp" type="number" min="1" max="100" value={(*hp).clone()} oninput={bind_input(&hp)} />
            <label for="status-condition">{ "Status" }</label>
            <select id="status-condition" onchange={bind_value(&status)}>
                { for p.statuses.iter().map(|s| html! {
                    <option value={s.label()} selected={s.label() == status.as_str()}>{ s.label() }</option>
                }) }
            </select>
            <label for="pokeball-type">{ "Ball" }</label>
            <select id="pokeball-type" onchange={bind_value(&ball)}>
                { for p.balls.iter().map(|b| html! {
                    <option value={b.label()} selected={b.label() == ball.as_str()}>{ b.label() }</option>
                }) }
            </select>
            <button id="calculate-catch" type="button" onclick={calculate}>{ "Calculate" }</button>
            { result_line("catch-result", p.result.as_ref()) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EggMoveProps {
    pub targets: Vec<String>,
    pub moves: Vec<String>,
    pub result: Option<String>,
    /// `(target, egg move)`
    pub on_find: Callback<(String, String)>,
}

#[function_component(EggMoveForm)]
pub fn egg_move_form(p: &EggMoveProps) -> Html {
    let target = use_state(String::new);
    let egg_move = use_state(String::new);
    let find = {
        let cb = p.on_find.clone();
        let (target, egg_move) = (target.clone(), egg_move.clone());
        Callback::from(move |_| cb.emit(((*target).clone(), (*egg_move).clone())))
    };

    html! {
        <div class="egg-move-helper">
            <label for="target-pokemon">{ "Target Pokémon" }</label>
            <select id="target-pokemon" onchange={bind_value(&target)}>
                <option value="" selected={target.is_empty()}>{ "Select Pokémon..." }</option>
                { for p.targets.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == *target}>{ name.clone() }</option>
                }) }
            </select>
            <label for="egg-move">{ "Egg Move" }</label>
            <select id="egg-move" onchange={bind_value(&egg_move)}>
                <option value="" selected={egg_move.is_empty()}>{ "Select Move..." }</option>
                { for p.moves.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == *egg_move}>{ name.clone() }</option>
                }) }
            </select>
            <button id="find-egg-move-path" type="button" onclick={find}>{ "Find Path" }</button>
            { result_line("egg-move-result", p.result.as_ref()) }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct BerryTimerProps {
    pub berries: Vec<String>,
    pub timers: Vec<BerryTimerRow>,
    pub message: Option<String>,
    /// `(berry, planted at)`; `None` means now.
    pub on_plant: Callback<(String, Option<DateTime<Utc>>)>,
}

#[function_component(BerryTimerForm)]
pub fn berry_timer_form(p: &BerryTimerProps) -> Html {
    let first = p.berries.first().cloned().unwrap_or_default();
    let berry = use_state(move || first);
    let planted = use_state(String::new);
    let plant = {
        let cb = p.on_plant.clone();
        let (berry, planted) = (berry.clone(), planted.clone());
        Callback::from(move |_| cb.emit(((*berry).clone(), parse_datetime_local(&planted))))
    };

    html! {
        <div class="berry-timer">
            <label for="berry-type">{ "Berry" }</label>
            <select id="berry-type" onchange={bind_value(&berry)}>
                { for p.berries.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == *berry}>{ format!("{name} Berry") }</option>
                }) }
            </select>
            <label for="plant-time">{ "Planted at" }</label>
            <input id="plant-time" type="datetime-local" value={(*planted).clone()} oninput={bind_input(&planted)} />
            <button id="plant-berry" type="button" onclick={plant}>{ "Plant" }</button>
            { result_line("berry-message", p.message.as_ref()) }
            <ul id="berry-timers" class="berry-timers">
                { for p.timers.iter().map(|row| html! {
                    <li key={row.id.clone()} class={classes!("berry-timer-row", row.ready.then_some("ready"))}>
                        <span class="berry-name">{ row.berry.clone() }</span>
                        <span class="berry-stage">{ row.stage }</span>
                        <span class="berry-remaining">{ row.remaining.clone() }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct InvestmentProps {
    pub rows: Vec<InvestmentRow>,
    pub message: Option<String>,
    /// `(item name, quantity, purchase price)`
    pub on_add: Callback<(String, u32, u64)>,
}

#[function_component(InvestmentForm)]
pub fn investment_form(p: &InvestmentProps) -> Html {
    let item = use_state(String::new);
    let quantity = use_state(|| "1".to_string());
    let price = use_state(String::new);
    let add = {
        let cb = p.on_add.clone();
        let (item, quantity, price) = (item.clone(), quantity.clone(), price.clone());
        Callback::from(move |_| {
            cb.emit((
                item.trim().to_string(),
                parse_quantity(&quantity),
                parse_price(&price),
            ));
        })
    };

    html! {
        <div class="investment-tracker">
            <label for="investment-item">{ "Item" }</label>
            <input id="investment-item" type="text" value={(*item).clone()} oninput={bind_input(&item)} />
            <label for="investment-quantity">{ "Quantity" }</label>
            <input id="investment-quantity" type="number" min="1" value={(*quantity).clone()} oninput={bind_input(&quantity)} />
            <label for="investment-price">{ "Purchase price" }</label>
            <input id="investment-price" type="number" min="0" value={(*price).clone()} oninput={bind_input(&price)} />
            <button id="add-investment" type="button" onclick={add}>{ "Add Investment" }</button>
            { result_line("investment-message", p.message.as_ref()) }
            <table class="investments">
                <thead>
                    <tr>
                        <th>{ "Item" }</th>
                        <th>{ "Qty" }</th>
                        <th>{ "Bought" }</th>
                        <th>{ "Now" }</th>
                        <th>{ "Profit/Loss" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for p.rows.iter().map(|row| html! {
                        <tr class={if row.in_profit { "profit" } else { "loss" }}>
                            <td>{ row.item.clone() }</td>
                            <td>{ row.quantity }</td>
                            <td>{ row.purchase_price.clone() }</td>
                            <td>{ row.current_price.clone() }</td>
                            <td>{ format!("{} ({})", row.profit_loss, row.profit_loss_pct) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
