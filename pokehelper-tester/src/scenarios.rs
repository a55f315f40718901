//! End-to-end flows driven through a [`HelperSession`] over in-memory storage.

use anyhow::{Context, Result, bail, ensure};
use chrono::{DateTime, Duration, Utc};
use pokehelper_core::constants::{COST_PER_BREEDING_STEP, STORAGE_KEY};
use pokehelper_core::view::{ModalBody, TabBody};
use pokehelper_core::{
    Action, AppData, BreedingRequest, CatchRateInput, Collaborators, Dispatched, Effect,
    HelperSession, IvSpread, MemoryStore, Nature, Pokeball, StatusCondition, Tab, TaskKind, Theme,
    Ticket, load_app_data,
};

/// Per-iteration inputs handed to a scenario.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioCtx {
    pub iteration: usize,
    pub now: DateTime<Utc>,
    pub verbose: bool,
}

impl ScenarioCtx {
    #[must_use]
    pub fn new(iteration: usize, verbose: bool) -> Self {
        let offset = i64::try_from(iteration).unwrap_or(i64::MAX);
        let base = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default();
        Self {
            iteration,
            now: base + Duration::minutes(offset),
            verbose,
        }
    }

    fn open(&self, store: &MemoryStore) -> HelperSession<MemoryStore> {
        HelperSession::open(store.clone(), Collaborators::default(), self.now)
    }

    fn note(&self, message: &str) {
        if self.verbose {
            println!("     · {message}");
        }
    }
}

pub type ScenarioFn = fn(&ScenarioCtx) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub run: ScenarioFn,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "smoke",
        description: "Open a session and visit every tab",
        run: smoke,
    },
    Scenario {
        key: "persistence",
        description: "Data written by one session is loaded by the next",
        run: persistence,
    },
    Scenario {
        key: "breeding",
        description: "Plan, validate and save breeding projects",
        run: breeding,
    },
    Scenario {
        key: "search",
        description: "Latest search wins and cancel clears loading",
        run: search,
    },
    Scenario {
        key: "tools",
        description: "Catch rate, egg moves, berry timer and investments",
        run: tools,
    },
    Scenario {
        key: "import-export",
        description: "Exported data imports into a fresh session",
        run: import_export,
    },
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<Scenario> {
    SCENARIOS.iter().copied().find(|s| s.key == key)
}

#[must_use]
pub fn all_scenario_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

fn scheduled(result: &Dispatched) -> Result<Ticket> {
    result
        .pending
        .iter()
        .find_map(|effect| match effect {
            Effect::Schedule { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .context("expected a scheduled task")
}

fn spread_with_perfect(k: usize) -> IvSpread {
    let mut values = [15_u8; 6];
    for value in values.iter_mut().take(k) {
        *value = 31;
    }
    IvSpread::from_array(values)
}

fn smoke(ctx: &ScenarioCtx) -> Result<()> {
    let store = MemoryStore::new();
    let mut session = ctx.open(&store);
    ensure!(
        session.view().active_panels() == vec![Tab::Dashboard],
        "session should open on the dashboard"
    );
    for tab in Tab::ALL.into_iter().rev() {
        session.dispatch(Action::ShowTab(tab), ctx.now);
        let view = session.view();
        ensure!(
            view.active_panels() == vec![tab],
            "{tab} should be the only visible panel"
        );
        ensure!(
            view.nav.iter().filter(|entry| entry.active).count() == 1,
            "exactly one nav entry should be active on {tab}"
        );
        ctx.note(&format!("visited {tab}"));
    }
    Ok(())
}

fn persistence(ctx: &ScenarioCtx) -> Result<()> {
    let store = MemoryStore::new();
    let mut session = ctx.open(&store);
    session.dispatch(Action::TogglePokedexEntry("Pikachu".into()), ctx.now);
    session.dispatch(
        Action::AddInvestment {
            item_name: "Leftovers".into(),
            quantity: 2,
            purchase_price: 9_000,
        },
        ctx.now,
    );
    session.dispatch(Action::SetTheme(Theme::Dark), ctx.now);
    let expected = session.model().data.clone();

    let reopened = ctx.open(&store);
    ensure!(reopened.model().data == expected, "reloaded data differs");
    ensure!(reopened.view().theme == Theme::Dark, "theme not restored");
    ctx.note("reload restored pokedex, investment and theme");

    store.seed(STORAGE_KEY, "{not json");
    let recovered = ctx.open(&store);
    ensure!(
        recovered.model().data == AppData::default(),
        "corrupt storage should fall back to defaults"
    );

    let mut offline = HelperSession::open(MemoryStore::unavailable(), Collaborators::default(), ctx.now);
    let result = offline.dispatch(Action::TogglePokedexEntry("Eevee".into()), ctx.now);
    ensure!(result.writes == 0, "unavailable storage cannot accept writes");
    ensure!(
        offline.view().notice.is_none(),
        "storage failures must not surface to the user"
    );
    Ok(())
}

fn breeding(ctx: &ScenarioCtx) -> Result<()> {
    let store = MemoryStore::new();
    let mut session = ctx.open(&store);
    session.dispatch(Action::ShowTab(Tab::Breeding), ctx.now);

    let rejected = session.dispatch(
        Action::PlanBreeding(BreedingRequest::new("", IvSpread::uniform(31), None)),
        ctx.now,
    );
    ensure!(rejected.pending.is_empty(), "empty selection must not schedule");
    ensure!(session.view().notice.is_some_and(|n| n.error), "expected an error notice");
    session.dispatch(Action::DismissNotice, ctx.now);

    let k = ctx.iteration % 7;
    let request = BreedingRequest::new("Larvitar", spread_with_perfect(k), Some(Nature::Adamant));
    let ticket = scheduled(&session.dispatch(Action::PlanBreeding(request), ctx.now))?;
    ensure!(session.view().loading, "planning should show the loading overlay");
    session.dispatch(Action::Complete(ticket), ctx.now);
    ensure!(!session.view().loading, "loading should clear on completion");

    let Some(outcome) = session.model().breeding_result.clone() else {
        bail!("breeding result missing after completion");
    };
    let steps = u64::try_from(k.saturating_sub(1).max(1))?;
    ensure!(
        outcome.project.estimated_cost == steps * COST_PER_BREEDING_STEP,
        "cost for {k} perfect IVs was {}",
        outcome.project.estimated_cost
    );
    ctx.note(&format!("{k}x31 costs {}", outcome.project.estimated_cost));

    let saved = session.dispatch(Action::SaveBreedingProject(outcome.project.clone()), ctx.now);
    ensure!(saved.writes == 1, "saving a project should write once");
    let again = session.dispatch(Action::SaveBreedingProject(outcome.project.clone()), ctx.now);
    ensure!(again.writes == 0, "saving the same project twice should be ignored");
    ensure!(
        load_app_data(&store).breeding_projects == vec![outcome.project],
        "saved project not found in storage"
    );
    Ok(())
}

fn search(ctx: &ScenarioCtx) -> Result<()> {
    let store = MemoryStore::new();
    let mut session = ctx.open(&store);
    session.dispatch(Action::ShowTab(Tab::Items), ctx.now);

    let stale = scheduled(&session.dispatch(Action::Search("ball".into()), ctx.now))?;
    let fresh = scheduled(&session.dispatch(Action::Search("candy".into()), ctx.now))?;
    session.dispatch(Action::Complete(fresh), ctx.now);
    let late = session.dispatch(Action::Complete(stale), ctx.now);
    ensure!(!late.changed, "a superseded search must be discarded");
    let TabBody::Items(cards) = session.view().body else {
        bail!("items tab should be rendered");
    };
    ensure!(
        cards.iter().map(|c| c.name.as_str()).collect::<Vec<_>>() == ["Rare Candy"],
        "latest search results expected"
    );

    let pending = scheduled(&session.dispatch(Action::Search(String::new()), ctx.now))?;
    session.dispatch(Action::Cancel(TaskKind::Search), ctx.now);
    ensure!(!session.view().loading, "cancel should clear loading");
    ensure!(
        !session.dispatch(Action::Complete(pending), ctx.now).changed,
        "cancelled search must not land"
    );
    Ok(())
}

fn tools(ctx: &ScenarioCtx) -> Result<()> {
    let store = MemoryStore::new();
    let mut session = ctx.open(&store);

    session.dispatch(Action::OpenTool("catch-rate".into()), ctx.now);
    session.dispatch(
        Action::CalculateCatchRate(CatchRateInput {
            pokemon: "Dratini".into(),
            current_hp_pct: 10,
            status: StatusCondition::Sleep,
            ball: Pokeball::UltraBall,
        }),
        ctx.now,
    );
    let Some(ModalBody::CatchRate { result, .. }) = session.view().modal.map(|m| m.body) else {
        bail!("catch-rate modal expected");
    };
    ensure!(result.as_deref() == Some("85.3%"), "unexpected catch estimate {result:?}");

    session.dispatch(Action::OpenTool("egg-moves".into()), ctx.now);
    session.dispatch(
        Action::FindEggMovePath {
            target: "Charizard".into(),
            egg_move: "Dragon Pulse".into(),
        },
        ctx.now,
    );
    let Some(ModalBody::EggMoves { result, .. }) = session.view().modal.map(|m| m.body) else {
        bail!("egg-move modal expected");
    };
    ensure!(result.is_some(), "egg move path missing");

    session.dispatch(Action::OpenTool("berry-timer".into()), ctx.now);
    session.dispatch(
        Action::PlantBerry {
            berry: "Sitrus Berry".into(),
            planted_at: Some(ctx.now - Duration::hours(5)),
        },
        ctx.now,
    );
    let Some(ModalBody::BerryTimer { timers, .. }) = session.view().modal.map(|m| m.body) else {
        bail!("berry timer modal expected");
    };
    ensure!(
        timers.first().is_some_and(|row| row.ready),
        "a Sitrus berry planted five hours ago should be ready"
    );

    session.dispatch(Action::OpenTool("investments".into()), ctx.now);
    let quantity = u32::try_from(ctx.iteration % 5 + 1)?;
    session.dispatch(
        Action::AddInvestment {
            item_name: "Rare Candy".into(),
            quantity,
            purchase_price: 4_000,
        },
        ctx.now,
    );
    let Some(ModalBody::Investments { rows, .. }) = session.view().modal.map(|m| m.body) else {
        bail!("investment modal expected");
    };
    ensure!(rows.len() == 1 && rows[0].quantity == quantity, "investment row missing");
    ensure!(session.model().dashboard.investments == 1, "dashboard not refreshed");

    session.dispatch(Action::CloseModal, ctx.now);
    ensure!(session.view().modal.is_none(), "modal should close");
    Ok(())
}

fn import_export(ctx: &ScenarioCtx) -> Result<()> {
    let source_store = MemoryStore::new();
    let mut source = ctx.open(&source_store);
    source.dispatch(Action::TogglePokedexEntry("Charizard".into()), ctx.now);
    source.dispatch(Action::SetAutoSave(false), ctx.now);
    source.dispatch(Action::OpenSaveData, ctx.now);
    let Some(ModalBody::SaveData { export }) = source.view().modal.map(|m| m.body) else {
        bail!("save data modal expected");
    };

    let target_store = MemoryStore::new();
    let mut target = ctx.open(&target_store);
    let bad = target.dispatch(Action::ImportData("[1, 2".into()), ctx.now);
    ensure!(bad.writes == 0, "invalid import must not be written");
    ensure!(target.view().notice.is_some_and(|n| n.error), "invalid import should warn");

    let imported = target.dispatch(Action::ImportData(export), ctx.now);
    ensure!(imported.writes == 1, "import should persist once");
    ensure!(
        target.model().data == source.model().data,
        "imported data differs from export"
    );

    target.dispatch(Action::ResetData, ctx.now);
    ensure!(
        load_app_data(&target_store) == AppData::default(),
        "reset should persist defaults"
    );
    Ok(())
}
