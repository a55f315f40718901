//! The reducer: every state change of the helper goes through [`update`].
//!
//! `update` mutates the model and describes side effects; it never touches
//! storage, timers or the document. The session executes the effects.

use chrono::{DateTime, Utc};

use crate::breeding::{BreedingPathSolver, BreedingRequest, plan_breeding};
use crate::catalog::{CatalogSource, egg_move_path};
use crate::catch_rate::{CatchProbability, CatchRateInput, estimate_catch};
use crate::constants::{BREEDING_DELAY_MS, SEARCH_DELAY_MS};
use crate::data::{AppData, BerryPlot, BreedingProject, Investment, Theme, unique_id};
use crate::error::ValidationError;
use crate::persistence::{export_app_data, import_app_data};
use crate::state::{AppModel, BreedingForm, ModalContent, Notice, Tab, ToolId};
use crate::tasks::{TaskKind, Ticket};

/// Everything a user or timer can ask the helper to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShowTab(Tab),
    Search(String),
    PlanBreeding(BreedingRequest),
    /// A scheduled task's delay elapsed.
    Complete(Ticket),
    Cancel(TaskKind),
    SaveBreedingProject(BreedingProject),
    AddToWatchlist(u32),
    /// Open a tool by its slug; unknown slugs are ignored.
    OpenTool(String),
    OpenPokemon(String),
    OpenSettings,
    OpenSaveData,
    CloseModal,
    DismissNotice,
    TogglePokedexEntry(String),
    CalculateCatchRate(CatchRateInput),
    FindEggMovePath {
        target: String,
        egg_move: String,
    },
    PlantBerry {
        berry: String,
        planted_at: Option<DateTime<Utc>>,
    },
    AddInvestment {
        item_name: String,
        quantity: u32,
        purchase_price: u64,
    },
    SetTheme(Theme),
    SetAutoSave(bool),
    ImportData(String),
    ResetData,
    /// Periodic background flush.
    AutoSave,
}

/// Why a write was requested; only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistReason {
    BreedingProjectSaved,
    PokedexToggled,
    BerryPlanted,
    InvestmentAdded,
    SettingsChanged,
    Imported,
    Reset,
    AutoSave,
}

/// Side effects requested by [`update`], executed in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write the whole blob to storage.
    Persist(PersistReason),
    /// Dispatch [`Action::Complete`] with `ticket` after `delay_ms`.
    Schedule { ticket: Ticket, delay_ms: u32 },
    /// Reflect the theme on the document.
    ApplyTheme(Theme),
}

/// Outcome of one reducer step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    pub changed: bool,
    pub effects: Vec<Effect>,
}

impl Update {
    #[must_use]
    pub const fn unchanged() -> Self {
        Self {
            changed: false,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub const fn changed() -> Self {
        Self {
            changed: true,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn changed_with(effect: Effect) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    #[must_use]
    pub fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Read-only collaborators and the current instant.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub catalog: &'a dyn CatalogSource,
    pub solver: &'a dyn BreedingPathSolver,
    pub catch_model: &'a dyn CatchProbability,
    pub now: DateTime<Utc>,
}

pub fn update(model: &mut AppModel, action: Action, ctx: &Context<'_>) -> Update {
    model.as_of = ctx.now;
    match action {
        Action::ShowTab(tab) => show_tab(model, tab, ctx),
        Action::Search(query) => start_search(model, query),
        Action::PlanBreeding(request) => start_breeding(model, request),
        Action::Complete(ticket) => complete(model, ticket, ctx),
        Action::Cancel(kind) => {
            if model.tasks.cancel(kind).is_none() {
                return Update::unchanged();
            }
            model.sync_loading();
            Update::changed()
        }
        Action::SaveBreedingProject(project) => save_breeding_project(model, project),
        Action::AddToWatchlist(item_id) => add_to_watchlist(model, item_id, ctx),
        Action::OpenTool(slug) => match ToolId::from_slug(&slug) {
            Some(tool) => open_modal(model, ModalContent::Tool(tool)),
            None => {
                log::debug!("ignoring unknown tool '{slug}'");
                Update::unchanged()
            }
        },
        Action::OpenPokemon(name) => match ctx.catalog.find_pokemon(&name) {
            Some(pokemon) => open_modal(model, ModalContent::PokemonDetails(pokemon.name.clone())),
            None => Update::unchanged(),
        },
        Action::OpenSettings => open_modal(model, ModalContent::Settings),
        Action::OpenSaveData => {
            model.export_text = match export_app_data(&model.data) {
                Ok(text) => Some(text),
                Err(err) => {
                    log::error!("failed to export data: {err}");
                    None
                }
            };
            open_modal(model, ModalContent::SaveData)
        }
        Action::CloseModal => {
            if model.ui.modal.take().is_none() {
                return Update::unchanged();
            }
            model.export_text = None;
            Update::changed()
        }
        Action::DismissNotice => {
            if model.ui.notice.take().is_none() {
                return Update::unchanged();
            }
            Update::changed()
        }
        Action::TogglePokedexEntry(species) => {
            model.data.toggle_pokedex_entry(&species);
            model.refresh_dashboard();
            Update::changed_with(Effect::Persist(PersistReason::PokedexToggled))
        }
        Action::CalculateCatchRate(input) => {
            match estimate_catch(ctx.catch_model, input) {
                Ok(estimate) => model.tools.catch_estimate = Some(estimate),
                Err(err) => return reject(model, &err),
            }
            Update::changed()
        }
        Action::FindEggMovePath { target, egg_move } => {
            match egg_move_path(&target, &egg_move) {
                Ok(path) => model.tools.egg_move_path = Some(path),
                Err(err) => return reject(model, &err),
            }
            Update::changed()
        }
        Action::PlantBerry { berry, planted_at } => plant_berry(model, &berry, planted_at, ctx),
        Action::AddInvestment {
            item_name,
            quantity,
            purchase_price,
        } => add_investment(model, &item_name, quantity, purchase_price, ctx),
        Action::SetTheme(theme) => {
            if model.data.settings.theme == theme {
                return Update::unchanged();
            }
            model.data.settings.theme = theme;
            Update::changed_with(Effect::Persist(PersistReason::SettingsChanged))
                .with(Effect::ApplyTheme(theme))
        }
        Action::SetAutoSave(enabled) => {
            if model.data.settings.auto_save == enabled {
                return Update::unchanged();
            }
            model.data.settings.auto_save = enabled;
            Update::changed_with(Effect::Persist(PersistReason::SettingsChanged))
        }
        Action::ImportData(json) => import_data(model, &json),
        Action::ResetData => {
            model.data = AppData::default();
            model.refresh_dashboard();
            model.export_text = None;
            notify_success(model, "Saved data cleared.");
            Update::changed_with(Effect::Persist(PersistReason::Reset))
                .with(Effect::ApplyTheme(model.data.settings.theme))
        }
        Action::AutoSave => {
            // The tick also advances berry countdowns, which need a fresh render.
            let changed = !model.data.berry_plots.is_empty();
            let effects = if model.data.settings.auto_save {
                vec![Effect::Persist(PersistReason::AutoSave)]
            } else {
                Vec::new()
            };
            Update { changed, effects }
        }
    }
}

fn show_tab(model: &mut AppModel, tab: Tab, ctx: &Context<'_>) -> Update {
    model.ui.active_tab = tab;
    match tab {
        Tab::Dashboard => model.refresh_dashboard(),
        Tab::Items => model.items = ctx.catalog.search_items(""),
        Tab::Breeding => {
            if !model.breeding_form.is_populated() {
                model.breeding_form = BreedingForm {
                    species: ctx.catalog.breeding_species().to_vec(),
                    natures: ctx.catalog.breeding_natures().to_vec(),
                };
            }
        }
        Tab::Pokedex => model.pokedex = ctx.catalog.pokemon().to_vec(),
        Tab::Tools => {}
    }
    Update::changed()
}

fn start_search(model: &mut AppModel, query: String) -> Update {
    let ticket = model.tasks.issue(TaskKind::Search);
    if let Some(superseded) = model.tasks.search.start(ticket, query) {
        log::debug!("search {superseded} superseded by {ticket}");
    }
    model.sync_loading();
    Update::changed_with(Effect::Schedule {
        ticket,
        delay_ms: SEARCH_DELAY_MS,
    })
}

fn start_breeding(model: &mut AppModel, request: BreedingRequest) -> Update {
    if let Err(err) = request.validate() {
        return reject(model, &err);
    }
    let ticket = model.tasks.issue(TaskKind::Breeding);
    if let Some(superseded) = model.tasks.breeding.start(ticket, request) {
        log::debug!("breeding {superseded} superseded by {ticket}");
    }
    model.sync_loading();
    Update::changed_with(Effect::Schedule {
        ticket,
        delay_ms: BREEDING_DELAY_MS,
    })
}

fn complete(model: &mut AppModel, ticket: Ticket, ctx: &Context<'_>) -> Update {
    match ticket.kind {
        TaskKind::Search => {
            let Some(query) = model.tasks.search.take_if(ticket) else {
                log::debug!("discarding stale completion {ticket}");
                return Update::unchanged();
            };
            model.items = ctx.catalog.search_items(&query);
        }
        TaskKind::Breeding => {
            let Some(request) = model.tasks.breeding.take_if(ticket) else {
                log::debug!("discarding stale completion {ticket}");
                return Update::unchanged();
            };
            let planned = plan_breeding(ctx.solver, &request, ctx.now, |id| model.id_taken(id));
            match planned {
                Ok(outcome) => model.breeding_result = Some(outcome),
                Err(err) => {
                    model.sync_loading();
                    return reject(model, &err);
                }
            }
        }
    }
    model.sync_loading();
    Update::changed()
}

fn save_breeding_project(model: &mut AppModel, project: BreedingProject) -> Update {
    if model.data.breeding_projects.iter().any(|saved| saved.id == project.id) {
        log::debug!("breeding project {} already saved", project.id);
        return Update::unchanged();
    }
    model.data.breeding_projects.push(project);
    notify_success(model, "Breeding project saved successfully!");
    model.refresh_dashboard();
    Update::changed_with(Effect::Persist(PersistReason::BreedingProjectSaved))
}

fn add_to_watchlist(model: &mut AppModel, item_id: u32, ctx: &Context<'_>) -> Update {
    let Some(item) = ctx.catalog.items().iter().find(|item| item.id == item_id) else {
        return Update::unchanged();
    };
    log::info!("added to watchlist: {}", item.name);
    let message = format!("{} added to watchlist!", item.name);
    notify_success(model, message);
    Update::changed()
}

fn open_modal(model: &mut AppModel, content: ModalContent) -> Update {
    model.ui.modal = Some(content);
    Update::changed()
}

fn plant_berry(
    model: &mut AppModel,
    berry: &str,
    planted_at: Option<DateTime<Utc>>,
    ctx: &Context<'_>,
) -> Update {
    let berry = match ctx.catalog.find_berry(berry) {
        Ok(berry) => berry.clone(),
        Err(err) => return reject(model, &err),
    };
    let planted_at = planted_at.unwrap_or(ctx.now);
    let id = unique_id("berry-", ctx.now, |id| model.data.id_taken(id));
    let plot = BerryPlot::plant(id, berry, planted_at);
    model.tools.berry_message = Some(format!(
        "{} Berry planted! Harvest in {}.",
        plot.berry.name,
        crate::view::format_remaining(plot.remaining(ctx.now))
    ));
    model.data.berry_plots.push(plot);
    Update::changed_with(Effect::Persist(PersistReason::BerryPlanted))
}

fn add_investment(
    model: &mut AppModel,
    item_name: &str,
    quantity: u32,
    purchase_price: u64,
    ctx: &Context<'_>,
) -> Update {
    let item = ctx.catalog.find_item(item_name);
    let investment = match Investment::new(item_name, item, quantity, purchase_price, ctx.now) {
        Ok(investment) => investment,
        Err(err) => return reject(model, &err),
    };
    model.tools.investment_message = Some(format!(
        "Tracking {} × {}.",
        investment.quantity, investment.item_name
    ));
    model.data.investments.push(investment);
    model.refresh_dashboard();
    Update::changed_with(Effect::Persist(PersistReason::InvestmentAdded))
}

fn import_data(model: &mut AppModel, json: &str) -> Update {
    match import_app_data(json) {
        Ok(data) => {
            model.data = data;
            model.refresh_dashboard();
            model.export_text = export_app_data(&model.data).ok();
            notify_success(model, "Save data imported.");
            Update::changed_with(Effect::Persist(PersistReason::Imported))
                .with(Effect::ApplyTheme(model.data.settings.theme))
        }
        Err(err) => {
            log::warn!("rejected import: {err}");
            model.ui.notice = Some(Notice::error(format!("Could not import save data: {err}")));
            Update::changed()
        }
    }
}

/// Surface a validation failure without touching anything else.
fn reject(model: &mut AppModel, err: &ValidationError) -> Update {
    model.ui.notice = Some(Notice::error(err.to_string()));
    Update::changed()
}

/// Success notices respect the user's notification preference.
fn notify_success(model: &mut AppModel, message: impl Into<String>) {
    if model.data.settings.notifications {
        model.ui.notice = Some(Notice::success(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::EstimatingSolver;
    use crate::catalog::MockCatalog;
    use crate::catch_rate::PlaceholderCatchModel;
    use crate::stats::IvSpread;
    use crate::types::Nature;
    use chrono::TimeZone;

    struct Fixture {
        catalog: MockCatalog,
        now: DateTime<Utc>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: MockCatalog::new(),
                now: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            }
        }

        fn ctx(&self) -> Context<'_> {
            Context {
                catalog: &self.catalog,
                solver: &EstimatingSolver,
                catch_model: &PlaceholderCatchModel,
                now: self.now,
            }
        }
    }

    fn model() -> AppModel {
        AppModel::new(AppData::default(), Utc.timestamp_opt(0, 0).unwrap())
    }

    fn scheduled(update: &Update) -> Ticket {
        match update.effects.as_slice() {
            [Effect::Schedule { ticket, .. }] => *ticket,
            other => panic!("expected one schedule effect, got {other:?}"),
        }
    }

    #[test]
    fn show_tab_loads_tab_content() {
        let fx = Fixture::new();
        let mut model = model();
        update(&mut model, Action::ShowTab(Tab::Items), &fx.ctx());
        assert_eq!(model.ui.active_tab, Tab::Items);
        assert_eq!(model.items.len(), 3);

        update(&mut model, Action::ShowTab(Tab::Breeding), &fx.ctx());
        assert_eq!(model.breeding_form.species.len(), 10);
        assert_eq!(model.breeding_form.natures.len(), 12);

        update(&mut model, Action::ShowTab(Tab::Pokedex), &fx.ctx());
        assert_eq!(model.pokedex.len(), 2);
    }

    #[test]
    fn search_completes_only_for_latest_ticket() {
        let fx = Fixture::new();
        let mut model = model();
        let first = scheduled(&update(&mut model, Action::Search("ultra".into()), &fx.ctx()));
        assert!(model.ui.loading);
        let second = scheduled(&update(&mut model, Action::Search("rare".into()), &fx.ctx()));

        let stale = update(&mut model, Action::Complete(first), &fx.ctx());
        assert!(!stale.changed);
        assert!(model.ui.loading);

        update(&mut model, Action::Complete(second), &fx.ctx());
        assert!(!model.ui.loading);
        assert_eq!(model.items.len(), 1);
        assert_eq!(model.items[0].name, "Rare Candy");
    }

    #[test]
    fn cancel_clears_loading_and_discards_completion() {
        let fx = Fixture::new();
        let mut model = model();
        let request = BreedingRequest::new("Charizard", IvSpread::uniform(31), None);
        let ticket = scheduled(&update(&mut model, Action::PlanBreeding(request), &fx.ctx()));
        assert!(model.ui.loading);
        assert!(update(&mut model, Action::Cancel(TaskKind::Breeding), &fx.ctx()).changed);
        assert!(!model.ui.loading);
        update(&mut model, Action::Complete(ticket), &fx.ctx());
        assert!(model.breeding_result.is_none());
    }

    #[test]
    fn plan_breeding_without_pokemon_surfaces_error() {
        let fx = Fixture::new();
        let mut model = model();
        let request = BreedingRequest::new("", IvSpread::uniform(31), None);
        let result = update(&mut model, Action::PlanBreeding(request), &fx.ctx());
        assert!(result.effects.is_empty());
        assert!(!model.ui.loading);
        assert!(model.breeding_result.is_none());
        assert!(model.data.breeding_projects.is_empty());
        assert_eq!(model.ui.error(), Some("Please select a Pokémon first"));
    }

    #[test]
    fn save_project_appends_persists_and_refreshes_counters() {
        let fx = Fixture::new();
        let mut model = model();
        let request = BreedingRequest::new("Dragonite", IvSpread::uniform(31), Some(Nature::Adamant));
        let ticket = scheduled(&update(&mut model, Action::PlanBreeding(request), &fx.ctx()));
        update(&mut model, Action::Complete(ticket), &fx.ctx());
        let project = model.breeding_result.clone().unwrap().project;
        assert_eq!(project.estimated_cost, 250_000);

        let saved = update(&mut model, Action::SaveBreedingProject(project.clone()), &fx.ctx());
        assert_eq!(
            saved.effects,
            vec![Effect::Persist(PersistReason::BreedingProjectSaved)]
        );
        assert_eq!(model.dashboard.breeding_projects, 1);
        assert!(model.ui.notice.is_some());

        let again = update(&mut model, Action::SaveBreedingProject(project), &fx.ctx());
        assert!(!again.changed);
        assert_eq!(model.data.breeding_projects.len(), 1);
    }

    #[test]
    fn unknown_tool_is_ignored_and_modal_replaces_content() {
        let fx = Fixture::new();
        let mut model = model();
        assert!(!update(&mut model, Action::OpenTool("teleporter".into()), &fx.ctx()).changed);
        assert!(model.ui.modal.is_none());

        update(&mut model, Action::OpenTool("berry-timer".into()), &fx.ctx());
        update(&mut model, Action::OpenPokemon("Blastoise".into()), &fx.ctx());
        assert_eq!(
            model.ui.modal,
            Some(ModalContent::PokemonDetails("Blastoise".into()))
        );
        update(&mut model, Action::CloseModal, &fx.ctx());
        assert!(model.ui.modal.is_none());
    }

    #[test]
    fn auto_save_respects_setting() {
        let fx = Fixture::new();
        let mut model = model();
        let on = update(&mut model, Action::AutoSave, &fx.ctx());
        assert_eq!(on.effects, vec![Effect::Persist(PersistReason::AutoSave)]);
        update(&mut model, Action::SetAutoSave(false), &fx.ctx());
        let off = update(&mut model, Action::AutoSave, &fx.ctx());
        assert!(off.effects.is_empty());
        assert!(!off.changed);
    }

    #[test]
    fn tools_record_results_and_reject_bad_input() {
        let fx = Fixture::new();
        let mut model = model();
        update(
            &mut model,
            Action::PlantBerry {
                berry: "Oran".into(),
                planted_at: None,
            },
            &fx.ctx(),
        );
        assert_eq!(model.data.berry_plots.len(), 1);
        assert_eq!(
            model.tools.berry_message.as_deref(),
            Some("Oran Berry planted! Harvest in 2 hours 30 minutes.")
        );

        update(
            &mut model,
            Action::AddInvestment {
                item_name: "leftovers".into(),
                quantity: 2,
                purchase_price: 12_000,
            },
            &fx.ctx(),
        );
        let investment = &model.data.investments[0];
        assert_eq!(investment.item_id, 3);
        assert_eq!(investment.profit_loss, 6_000);
        assert_eq!(model.dashboard.investments, 1);

        let rejected = update(
            &mut model,
            Action::AddInvestment {
                item_name: "Leftovers".into(),
                quantity: 0,
                purchase_price: 1,
            },
            &fx.ctx(),
        );
        assert!(rejected.effects.is_empty());
        assert_eq!(model.data.investments.len(), 1);
        assert_eq!(model.ui.error(), Some("Quantity must be at least 1"));
    }

    #[test]
    fn failed_import_leaves_data_untouched() {
        let fx = Fixture::new();
        let mut model = model();
        model.data.pokedex_completion.insert("Charizard".into(), true);
        let before = model.data.clone();
        let result = update(&mut model, Action::ImportData("{oops".into()), &fx.ctx());
        assert!(result.effects.is_empty());
        assert_eq!(model.data, before);
        assert!(model.ui.error().is_some());
    }

    #[test]
    fn theme_change_persists_and_applies() {
        let fx = Fixture::new();
        let mut model = model();
        let result = update(&mut model, Action::SetTheme(Theme::Dark), &fx.ctx());
        assert_eq!(
            result.effects,
            vec![
                Effect::Persist(PersistReason::SettingsChanged),
                Effect::ApplyTheme(Theme::Dark)
            ]
        );
        assert!(!update(&mut model, Action::SetTheme(Theme::Dark), &fx.ctx()).changed);
    }
}
