//! Declarative projection of [`AppModel`] into what the interface shows.
//!
//! [`render`] is pure: the same model always yields the same tree. Front-ends
//! only translate the tree into markup and wire events back to actions.

use chrono::Duration;

use crate::breeding::BreedingOutcome;
use crate::catalog::{CatalogSource, Item, Pokemon};
use crate::data::{BerryPlot, Investment, Theme};
use crate::state::{AppModel, DashboardStats, ModalContent, NoticeLevel, Tab, ToolId};
use crate::stats::Stat;
use crate::types::{Nature, Pokeball, StatusCondition};

/// `1200` → `"₽1,200"`.
#[must_use]
pub fn format_pokedollars(amount: u64) -> String {
    format!("₽{}", group_thousands(amount))
}

/// Signed variant used for profit and loss.
#[must_use]
pub fn format_signed_pokedollars(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "+" };
    format!("{sign}₽{}", group_thousands(amount.unsigned_abs()))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// `"2 hours 30 minutes"`; whole minutes, rounded down.
#[must_use]
pub fn format_remaining(remaining: Duration) -> String {
    let minutes = remaining.num_minutes().max(0);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    let unit = |value: i64, singular: &str| {
        if value == 1 {
            format!("1 {singular}")
        } else {
            format!("{value} {singular}s")
        }
    };
    match (hours, minutes) {
        (0, minutes) => unit(minutes, "minute"),
        (hours, 0) => unit(hours, "hour"),
        (hours, minutes) => format!("{} {}", unit(hours, "hour"), unit(minutes, "minute")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub tab: Tab,
    pub label: &'static str,
    pub active: bool,
}

/// One tab panel; exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    pub tab: Tab,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: u32,
    pub name: String,
    pub category: &'static str,
    pub price: String,
    pub description: String,
}

impl From<&Item> for ItemCard {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.label(),
            price: format_pokedollars(item.current_price),
            description: item.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonCard {
    pub name: String,
    pub types: String,
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub caught: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedingResultView {
    pub heading: String,
    pub target: String,
    pub nature: Option<&'static str>,
    pub cost: String,
    pub steps: u32,
    pub saved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedProjectRow {
    pub id: String,
    pub pokemon: String,
    pub status: &'static str,
    pub cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolButton {
    pub id: ToolId,
    pub slug: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Content of the active tab panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabBody {
    Dashboard(DashboardStats),
    Items(Vec<ItemCard>),
    Breeding {
        species: Vec<String>,
        natures: Vec<Nature>,
        result: Option<BreedingResultView>,
        saved: Vec<SavedProjectRow>,
    },
    Pokedex(Vec<PokemonCard>),
    Tools(Vec<ToolButton>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub label: &'static str,
    pub value: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BerryTimerRow {
    pub id: String,
    pub berry: String,
    pub stage: &'static str,
    pub remaining: String,
    pub ready: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentRow {
    pub item: String,
    pub quantity: u32,
    pub purchase_price: String,
    pub current_price: String,
    pub profit_loss: String,
    pub profit_loss_pct: String,
    pub in_profit: bool,
}

impl From<&Investment> for InvestmentRow {
    fn from(investment: &Investment) -> Self {
        Self {
            item: investment.item_name.clone(),
            quantity: investment.quantity,
            purchase_price: format_pokedollars(investment.purchase_price),
            current_price: format_pokedollars(investment.current_price),
            profit_loss: format_signed_pokedollars(investment.profit_loss),
            profit_loss_pct: format!("{:+.1}%", investment.profit_loss_percentage),
            in_profit: investment.profit_loss >= 0,
        }
    }
}

/// Body of the shared modal region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalBody {
    CatchRate {
        pokemon: Vec<String>,
        statuses: &'static [StatusCondition],
        balls: &'static [Pokeball],
        result: Option<String>,
    },
    EggMoves {
        targets: Vec<String>,
        moves: Vec<String>,
        result: Option<String>,
    },
    BerryTimer {
        berries: Vec<String>,
        timers: Vec<BerryTimerRow>,
        message: Option<String>,
    },
    Investments {
        rows: Vec<InvestmentRow>,
        message: Option<String>,
    },
    PokemonDetails {
        types: String,
        egg_groups: String,
        stats: Vec<StatRow>,
        caught: bool,
    },
    Settings {
        theme: Theme,
        auto_save: bool,
    },
    SaveData {
        export: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub body: ModalBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeView {
    pub error: bool,
    pub heading: &'static str,
    pub message: String,
}

/// The full interface for one model snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTree {
    pub theme: Theme,
    pub nav: Vec<NavEntry>,
    pub panels: Vec<PanelView>,
    pub body: TabBody,
    pub modal: Option<ModalView>,
    pub loading: bool,
    pub notice: Option<NoticeView>,
}

impl ViewTree {
    #[must_use]
    pub fn active_panels(&self) -> Vec<Tab> {
        self.panels
            .iter()
            .filter(|panel| panel.active)
            .map(|panel| panel.tab)
            .collect()
    }
}

#[must_use]
pub fn render(model: &AppModel, catalog: &dyn CatalogSource) -> ViewTree {
    let active = model.ui.active_tab;
    ViewTree {
        theme: model.data.settings.theme,
        nav: Tab::ALL
            .into_iter()
            .map(|tab| NavEntry {
                tab,
                label: tab.label(),
                active: tab == active,
            })
            .collect(),
        panels: Tab::ALL
            .into_iter()
            .map(|tab| PanelView {
                tab,
                active: tab == active,
            })
            .collect(),
        body: render_body(model),
        modal: model
            .ui
            .modal
            .as_ref()
            .and_then(|content| render_modal(model, content, catalog)),
        loading: model.ui.loading,
        notice: model.ui.notice.as_ref().map(|notice| {
            let error = notice.level == NoticeLevel::Error;
            NoticeView {
                error,
                heading: if error { "Error" } else { "Success" },
                message: notice.message.clone(),
            }
        }),
    }
}

fn render_body(model: &AppModel) -> TabBody {
    match model.ui.active_tab {
        Tab::Dashboard => TabBody::Dashboard(model.dashboard),
        Tab::Items => TabBody::Items(model.items.iter().map(ItemCard::from).collect()),
        Tab::Breeding => TabBody::Breeding {
            species: model.breeding_form.species.clone(),
            natures: model.breeding_form.natures.clone(),
            result: model
                .breeding_result
                .as_ref()
                .map(|outcome| breeding_result(model, outcome)),
            saved: model
                .data
                .breeding_projects
                .iter()
                .map(|project| SavedProjectRow {
                    id: project.id.clone(),
                    pokemon: project.pokemon_name.clone(),
                    status: project.status.label(),
                    cost: format_pokedollars(project.estimated_cost),
                })
                .collect(),
        },
        Tab::Pokedex => TabBody::Pokedex(
            model
                .pokedex
                .iter()
                .map(|pokemon| PokemonCard {
                    name: pokemon.name.clone(),
                    types: pokemon.type_line(" / "),
                    hp: pokemon.base_stats.hp,
                    attack: pokemon.base_stats.attack,
                    defense: pokemon.base_stats.defense,
                    caught: model.data.is_caught(&pokemon.name),
                })
                .collect(),
        ),
        Tab::Tools => TabBody::Tools(
            ToolId::ALL
                .into_iter()
                .map(|tool| ToolButton {
                    id: tool,
                    slug: tool.slug(),
                    title: tool.title(),
                    blurb: tool.blurb(),
                })
                .collect(),
        ),
    }
}

fn breeding_result(model: &AppModel, outcome: &BreedingOutcome) -> BreedingResultView {
    let project = &outcome.project;
    BreedingResultView {
        heading: format!("Breeding Plan for {}", project.pokemon_name),
        target: format!("{}x31 IVs", project.perfect_iv_count()),
        nature: project.target_nature.map(Nature::label),
        cost: format_pokedollars(project.estimated_cost),
        steps: outcome.estimated_steps,
        saved: model
            .data
            .breeding_projects
            .iter()
            .any(|saved| saved.id == project.id),
    }
}

fn render_modal(
    model: &AppModel,
    content: &ModalContent,
    catalog: &dyn CatalogSource,
) -> Option<ModalView> {
    let (title, body) = match content {
        ModalContent::Tool(tool) => (tool.title().to_string(), tool_body(model, *tool, catalog)),
        ModalContent::PokemonDetails(name) => {
            let pokemon = catalog.find_pokemon(name)?;
            (pokemon.name.clone(), pokemon_details(model, pokemon))
        }
        ModalContent::Settings => (
            "Settings".to_string(),
            ModalBody::Settings {
                theme: model.data.settings.theme,
                auto_save: model.data.settings.auto_save,
            },
        ),
        ModalContent::SaveData => (
            "Save Data".to_string(),
            ModalBody::SaveData {
                export: model.export_text.clone().unwrap_or_default(),
            },
        ),
    };
    Some(ModalView { title, body })
}

fn tool_body(model: &AppModel, tool: ToolId, catalog: &dyn CatalogSource) -> ModalBody {
    match tool {
        ToolId::CatchRate => ModalBody::CatchRate {
            pokemon: catalog.breeding_species().to_vec(),
            statuses: StatusCondition::ALL,
            balls: Pokeball::ALL,
            result: model
                .tools
                .catch_estimate
                .as_ref()
                .map(|estimate| estimate.percent_label()),
        },
        ToolId::EggMoves => ModalBody::EggMoves {
            targets: catalog.pokemon().iter().map(|p| p.name.clone()).collect(),
            moves: catalog.egg_moves().to_vec(),
            result: model.tools.egg_move_path.clone(),
        },
        ToolId::BerryTimer => ModalBody::BerryTimer {
            berries: catalog.berries().iter().map(|b| b.name.clone()).collect(),
            timers: model
                .data
                .berry_plots
                .iter()
                .map(|plot| berry_row(model, plot))
                .collect(),
            message: model.tools.berry_message.clone(),
        },
        ToolId::Investments => ModalBody::Investments {
            rows: model.data.investments.iter().map(InvestmentRow::from).collect(),
            message: model.tools.investment_message.clone(),
        },
    }
}

fn berry_row(model: &AppModel, plot: &BerryPlot) -> BerryTimerRow {
    let now = model.as_of;
    let ready = plot.is_ready(now);
    BerryTimerRow {
        id: plot.id.clone(),
        berry: format!("{} Berry", plot.berry.name),
        stage: plot.stage_at(now).label(),
        remaining: if ready {
            "Ready to harvest".to_string()
        } else {
            format_remaining(plot.remaining(now))
        },
        ready,
    }
}

fn pokemon_details(model: &AppModel, pokemon: &Pokemon) -> ModalBody {
    ModalBody::PokemonDetails {
        types: pokemon.type_line(", "),
        egg_groups: pokemon.egg_group_line(),
        stats: Stat::ALL
            .into_iter()
            .map(|stat| StatRow {
                label: stat.label(),
                value: pokemon.base_stats.get(stat),
            })
            .collect(),
        caught: model.data.is_caught(&pokemon.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokedollars_group_thousands() {
        assert_eq!(format_pokedollars(0), "₽0");
        assert_eq!(format_pokedollars(999), "₽999");
        assert_eq!(format_pokedollars(1_200), "₽1,200");
        assert_eq!(format_pokedollars(250_000), "₽250,000");
        assert_eq!(format_pokedollars(1_234_567), "₽1,234,567");
        assert_eq!(format_signed_pokedollars(-6_000), "-₽6,000");
        assert_eq!(format_signed_pokedollars(0), "+₽0");
    }

    #[test]
    fn remaining_time_reads_naturally() {
        assert_eq!(format_remaining(Duration::minutes(150)), "2 hours 30 minutes");
        assert_eq!(format_remaining(Duration::minutes(61)), "1 hour 1 minute");
        assert_eq!(format_remaining(Duration::minutes(240)), "4 hours");
        assert_eq!(format_remaining(Duration::seconds(59)), "0 minutes");
        assert_eq!(format_remaining(Duration::minutes(-5)), "0 minutes");
    }
}
