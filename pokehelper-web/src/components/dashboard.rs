use pokehelper_core::DashboardStats;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub stats: DashboardStats,
}

#[function_component(DashboardPanel)]
pub fn dashboard_panel(p: &Props) -> Html {
    let cards = [
        ("total-investments", "Investments", p.stats.investments.to_string()),
        (
            "active-breeding",
            "Breeding Projects",
            p.stats.breeding_projects.to_string(),
        ),
        (
            "pokedex-completion",
            "Pokédex Completion",
            format!("{}%", p.stats.pokedex_completion_pct),
        ),
    ];
    html! {
        <div class="dashboard-grid">
            { for cards.into_iter().map(|(id, label, value)| html! {
                <div class="stat-card">
                    <h3>{ label }</h3>
                    <p id={id} class="stat-value">{ value }</p>
                </div>
            }) }
        </div>
    }
}
