use chrono::{DateTime, Duration, TimeZone, Utc};
use pokehelper_core::constants::STORAGE_KEY;
use pokehelper_core::view::{ModalBody, TabBody};
use pokehelper_core::{
    Action, AppData, BreedingPathSolver, BreedingPlan, BreedingRequest, CatchRateInput,
    Collaborators, Effect, HelperSession, IvSpread, MemoryStore, Nature, Pokeball,
    StatusCondition, Tab, TaskKind, Theme, Ticket, load_app_data, save_app_data,
};
use std::rc::Rc;

fn t0() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn open(store: &MemoryStore) -> HelperSession<MemoryStore> {
    HelperSession::open(store.clone(), Collaborators::default(), t0())
}

fn scheduled(pending: &[Effect]) -> Ticket {
    pending
        .iter()
        .find_map(|effect| match effect {
            Effect::Schedule { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("a scheduled task")
}

fn spread(k: usize) -> IvSpread {
    let mut values = [0_u8; 6];
    for value in values.iter_mut().take(k) {
        *value = 31;
    }
    IvSpread::from_array(values)
}

#[test]
fn every_tab_shows_exactly_one_panel() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    for tab in [Tab::Tools, Tab::Items, Tab::Dashboard, Tab::Pokedex, Tab::Breeding, Tab::Items] {
        session.dispatch(Action::ShowTab(tab), t0());
        let view = session.view();
        assert_eq!(view.active_panels(), vec![tab]);
        let active_nav: Vec<Tab> = view.nav.iter().filter(|n| n.active).map(|n| n.tab).collect();
        assert_eq!(active_nav, vec![tab]);
    }
}

#[test]
fn search_replaces_the_item_grid() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    session.dispatch(Action::ShowTab(Tab::Items), t0());

    let started = session.dispatch(Action::Search("ultra".into()), t0());
    assert!(session.view().loading);
    let ticket = scheduled(&started.pending);
    session.dispatch(Action::Complete(ticket), t0());

    let view = session.view();
    assert!(!view.loading);
    let TabBody::Items(cards) = view.body else {
        panic!("items tab should be rendered");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Ultra Ball");
    assert_eq!(cards[0].price, "₽1,200");

    let started = session.dispatch(Action::Search(String::new()), t0());
    session.dispatch(Action::Complete(scheduled(&started.pending)), t0());
    let TabBody::Items(cards) = session.view().body else {
        panic!("items tab should be rendered");
    };
    assert_eq!(cards.len(), 3);
}

#[test]
fn out_of_order_completions_keep_latest_search() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    session.dispatch(Action::ShowTab(Tab::Items), t0());
    let first = scheduled(&session.dispatch(Action::Search("leftovers".into()), t0()).pending);
    let second = scheduled(&session.dispatch(Action::Search("candy".into()), t0()).pending);

    session.dispatch(Action::Complete(second), t0());
    let late = session.dispatch(Action::Complete(first), t0());
    assert!(!late.changed);
    assert_eq!(session.model().items.len(), 1);
    assert_eq!(session.model().items[0].name, "Rare Candy");
}

#[test]
fn breeding_cost_is_steps_times_fifty_thousand() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    for k in 0..=6 {
        let request = BreedingRequest::new("Tyranitar", spread(k), None);
        let ticket = scheduled(&session.dispatch(Action::PlanBreeding(request), t0()).pending);
        session.dispatch(Action::Complete(ticket), t0());
        let outcome = session.model().breeding_result.clone().unwrap();
        let expected_steps = u64::try_from(k.saturating_sub(1).max(1)).unwrap();
        assert_eq!(outcome.project.estimated_cost, expected_steps * 50_000, "k = {k}");
    }
}

#[test]
fn validation_gate_blocks_empty_selection() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    let request = BreedingRequest::new("", IvSpread::uniform(31), None);
    let result = session.dispatch(Action::PlanBreeding(request), t0());
    assert!(result.pending.is_empty());
    assert!(session.model().breeding_result.is_none());
    assert!(session.model().data.breeding_projects.is_empty());
    let notice = session.view().notice.expect("error notice");
    assert!(notice.error);
    assert_eq!(notice.message, "Please select a Pokémon first");

    session.dispatch(Action::DismissNotice, t0());
    assert!(session.view().notice.is_none());
}

#[test]
fn saved_project_survives_reload() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    let request = BreedingRequest::new("Metagross", spread(4), Some(Nature::Adamant));
    let ticket = scheduled(&session.dispatch(Action::PlanBreeding(request), t0()).pending);
    session.dispatch(Action::Complete(ticket), t0());
    let project = session.model().breeding_result.clone().unwrap().project;
    let saved = session.dispatch(Action::SaveBreedingProject(project.clone()), t0());
    assert_eq!(saved.writes, 1);
    assert_eq!(session.model().dashboard.breeding_projects, 1);

    let reopened = open(&store);
    assert_eq!(reopened.model().data.breeding_projects, vec![project]);
    assert_eq!(reopened.model().dashboard.breeding_projects, 1);
}

#[test]
fn round_trip_preserves_every_collection() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    session.dispatch(
        Action::AddInvestment {
            item_name: "Rare Candy".into(),
            quantity: 7,
            purchase_price: 4_321,
        },
        t0(),
    );
    session.dispatch(
        Action::PlantBerry {
            berry: "Sitrus Berry".into(),
            planted_at: Some(t0() - Duration::minutes(30)),
        },
        t0(),
    );
    session.dispatch(Action::TogglePokedexEntry("Blastoise".into()), t0());
    session.dispatch(Action::SetTheme(Theme::Dark), t0());

    let data = session.model().data.clone();
    save_app_data(&store, &data).unwrap();
    assert_eq!(load_app_data(&store), data);
    assert_eq!(data.investments.len(), 1);
    assert_eq!(data.berry_plots.len(), 1);
}

#[test]
fn auto_save_writes_only_when_enabled() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    assert_eq!(session.dispatch(Action::AutoSave, t0()).writes, 1);

    session.dispatch(Action::SetAutoSave(false), t0());
    let writes = store.write_count();
    let flushed = session.dispatch(Action::AutoSave, t0());
    assert_eq!(flushed.writes, 0);
    assert_eq!(store.write_count(), writes);
}

#[test]
fn cancel_clears_loading_overlay() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    let ticket = scheduled(&session.dispatch(Action::Search("ball".into()), t0()).pending);
    assert!(session.view().loading);
    session.dispatch(Action::Cancel(TaskKind::Search), t0());
    assert!(!session.view().loading);
    assert!(!session.dispatch(Action::Complete(ticket), t0()).changed);
}

#[test]
fn modal_content_is_replaced_and_cleared() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    session.dispatch(Action::OpenTool("catch-rate".into()), t0());
    session.dispatch(
        Action::CalculateCatchRate(CatchRateInput {
            pokemon: "Pikachu".into(),
            current_hp_pct: 25,
            status: StatusCondition::Paralysis,
            ball: Pokeball::GreatBall,
        }),
        t0(),
    );
    let modal = session.view().modal.expect("open modal");
    assert_eq!(modal.title, "Catch Rate Calculator");
    let ModalBody::CatchRate { result, .. } = modal.body else {
        panic!("catch-rate body expected");
    };
    assert_eq!(result.as_deref(), Some("85.3%"));

    session.dispatch(Action::OpenPokemon("Charizard".into()), t0());
    let modal = session.view().modal.expect("open modal");
    let ModalBody::PokemonDetails { types, stats, .. } = modal.body else {
        panic!("details body expected");
    };
    assert_eq!(types, "Fire, Flying");
    assert_eq!(stats.len(), 6);

    session.dispatch(Action::CloseModal, t0());
    assert!(session.view().modal.is_none());
}

#[test]
fn berry_timer_reports_stage_and_time_left() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    session.dispatch(
        Action::PlantBerry {
            berry: "Oran".into(),
            planted_at: None,
        },
        t0(),
    );
    session.dispatch(Action::OpenTool("berry-timer".into()), t0() + Duration::minutes(90));
    let ModalBody::BerryTimer { timers, .. } = session.view().modal.unwrap().body else {
        panic!("berry timer body expected");
    };
    assert_eq!(timers[0].berry, "Oran Berry");
    assert_eq!(timers[0].stage, "Flowering");
    assert_eq!(timers[0].remaining, "1 hour");
    assert!(!timers[0].ready);
}

#[test]
fn auto_save_tick_refreshes_berry_countdown() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    assert!(!session.dispatch(Action::AutoSave, t0()).changed);

    session.dispatch(
        Action::PlantBerry {
            berry: "Oran".into(),
            planted_at: None,
        },
        t0(),
    );
    session.dispatch(Action::OpenTool("berry-timer".into()), t0());
    session.dispatch(Action::SetAutoSave(false), t0());

    let tick = session.dispatch(Action::AutoSave, t0() + Duration::minutes(90));
    assert!(tick.changed);
    assert_eq!(tick.writes, 0);
    let ModalBody::BerryTimer { timers, .. } = session.view().modal.unwrap().body else {
        panic!("berry timer body expected");
    };
    assert_eq!(timers[0].remaining, "1 hour");
}

#[test]
fn import_replaces_data_and_export_matches() {
    let store = MemoryStore::new();
    let mut session = open(&store);
    let mut incoming = AppData::default();
    incoming.pokedex_completion.insert("Pikachu".into(), true);
    incoming.settings.theme = Theme::Dark;
    let json = serde_json::to_string(&incoming).unwrap();

    let result = session.dispatch(Action::ImportData(json), t0());
    assert_eq!(result.writes, 1);
    assert_eq!(result.pending, vec![Effect::ApplyTheme(Theme::Dark)]);
    assert_eq!(session.model().data, incoming);
    assert_eq!(session.model().dashboard.pokedex_completion_pct, 100);
    assert_eq!(load_app_data(&store), incoming);

    session.dispatch(Action::OpenSaveData, t0());
    let ModalBody::SaveData { export } = session.view().modal.unwrap().body else {
        panic!("save data body expected");
    };
    assert!(export.contains("\"Pikachu\": true"));
}

#[test]
fn unavailable_storage_never_surfaces() {
    let store = MemoryStore::unavailable();
    let mut session = HelperSession::open(store, Collaborators::default(), t0());
    let result = session.dispatch(Action::TogglePokedexEntry("Charizard".into()), t0());
    assert_eq!(result.writes, 0);
    assert!(session.view().notice.is_none());
    assert!(session.model().data.is_caught("Charizard"));
}

struct CountingSolver;

impl BreedingPathSolver for CountingSolver {
    fn solve(&self, request: &BreedingRequest) -> BreedingPlan {
        let steps = u32::try_from(request.target_ivs.perfect_count()).unwrap();
        BreedingPlan {
            steps: Vec::new(),
            estimated_steps: steps,
            estimated_cost: u64::from(steps) * 1_000,
        }
    }
}

#[test]
fn solver_collaborator_is_swappable() {
    let store = MemoryStore::new();
    let collaborators = Collaborators {
        solver: Rc::new(CountingSolver),
        ..Collaborators::default()
    };
    let mut session = HelperSession::open(store, collaborators, t0());
    let request = BreedingRequest::new("Salamence", spread(2), None);
    let ticket = scheduled(&session.dispatch(Action::PlanBreeding(request), t0()).pending);
    session.dispatch(Action::Complete(ticket), t0());
    let TabBody::Dashboard(_) = session.view().body else {
        panic!("dashboard stays active while planning");
    };
    assert_eq!(
        session.model().breeding_result.as_ref().unwrap().project.estimated_cost,
        2_000
    );
}

#[test]
fn legacy_storage_key_is_stable() {
    assert_eq!(STORAGE_KEY, "pokemmo-helper-data");
}
