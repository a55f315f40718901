//! Application model: persisted data plus transient UI state.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::breeding::{BreedingOutcome, BreedingRequest};
use crate::catalog::{Item, Pokemon};
use crate::catch_rate::CatchEstimate;
use crate::data::AppData;
use crate::tasks::{TaskKind, TaskSlot, Ticket, TicketMint};
use crate::types::Nature;

/// Top-level navigation tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Items,
    Breeding,
    Pokedex,
    Tools,
}

impl Tab {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Items,
        Self::Breeding,
        Self::Pokedex,
        Self::Tools,
    ];

    /// Identifier used for panel ids and `data-tab` attributes.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Items => "items",
            Self::Breeding => "breeding",
            Self::Pokedex => "pokedex",
            Self::Tools => "tools",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Items => "Items",
            Self::Breeding => "Breeding",
            Self::Pokedex => "Pokédex",
            Self::Tools => "Tools",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.slug() == slug)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tools reachable from the tools tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    CatchRate,
    EggMoves,
    BerryTimer,
    Investments,
}

impl ToolId {
    pub const ALL: [Self; 4] = [
        Self::CatchRate,
        Self::EggMoves,
        Self::BerryTimer,
        Self::Investments,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CatchRate => "catch-rate",
            Self::EggMoves => "egg-moves",
            Self::BerryTimer => "berry-timer",
            Self::Investments => "investments",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CatchRate => "Catch Rate Calculator",
            Self::EggMoves => "Egg Move Helper",
            Self::BerryTimer => "Berry Timer",
            Self::Investments => "Investment Tracker",
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::CatchRate => "Estimate your odds before throwing a ball.",
            Self::EggMoves => "Find a breeding chain that passes down an egg move.",
            Self::BerryTimer => "Track planted berries and their harvest times.",
            Self::Investments => "Follow purchases against the market price.",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.slug() == slug)
    }
}

/// What the shared modal region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalContent {
    Tool(ToolId),
    PokemonDetails(String),
    Settings,
    SaveData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Success,
}

/// A blocking message the user must dismiss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }
}

/// Transient interface state; rebuilt every session and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub loading: bool,
    pub notice: Option<Notice>,
    pub modal: Option<ModalContent>,
}

impl UiState {
    /// Message of the current error notice, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.notice
            .as_ref()
            .filter(|notice| notice.level == NoticeLevel::Error)
            .map(|notice| notice.message.as_str())
    }

    #[must_use]
    pub const fn modal_open(&self) -> bool {
        self.modal.is_some()
    }
}

/// Counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub investments: usize,
    pub breeding_projects: usize,
    pub pokedex_completion_pct: u8,
}

impl DashboardStats {
    #[must_use]
    pub fn from_data(data: &AppData) -> Self {
        Self {
            investments: data.investments.len(),
            breeding_projects: data.breeding_projects.len(),
            pokedex_completion_pct: data.pokedex_completion_pct(),
        }
    }
}

/// Options offered by the breeding form; filled the first time the tab opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreedingForm {
    pub species: Vec<String>,
    pub natures: Vec<Nature>,
}

impl BreedingForm {
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.species.is_empty() && !self.natures.is_empty()
    }
}

/// Latest output of each tool, shown inside its modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolResults {
    pub catch_estimate: Option<CatchEstimate>,
    pub egg_move_path: Option<String>,
    pub berry_message: Option<String>,
    pub investment_message: Option<String>,
}

/// Pending simulated work, one slot per kind.
#[derive(Debug, Clone, Default)]
pub struct Tasks {
    mint: TicketMint,
    pub search: TaskSlot<String>,
    pub breeding: TaskSlot<BreedingRequest>,
}

impl Tasks {
    pub fn issue(&mut self, kind: TaskKind) -> Ticket {
        self.mint.issue(kind)
    }

    #[must_use]
    pub const fn any_pending(&self) -> bool {
        self.search.is_pending() || self.breeding.is_pending()
    }

    /// Drop the pending task of `kind`.
    pub fn cancel(&mut self, kind: TaskKind) -> Option<Ticket> {
        match kind {
            TaskKind::Search => self.search.cancel(),
            TaskKind::Breeding => self.breeding.cancel(),
        }
    }
}

/// Everything the interface renders from.
#[derive(Debug, Clone)]
pub struct AppModel {
    pub data: AppData,
    pub ui: UiState,
    pub dashboard: DashboardStats,
    /// Current contents of the item grid.
    pub items: Vec<Item>,
    pub pokedex: Vec<Pokemon>,
    pub breeding_form: BreedingForm,
    /// Most recent plan, not yet saved.
    pub breeding_result: Option<BreedingOutcome>,
    pub tools: ToolResults,
    /// JSON shown in the save-data dialog.
    pub export_text: Option<String>,
    pub tasks: Tasks,
    /// Instant of the last dispatched action; drives time-relative views.
    pub as_of: DateTime<Utc>,
}

impl AppModel {
    #[must_use]
    pub fn new(data: AppData, now: DateTime<Utc>) -> Self {
        let dashboard = DashboardStats::from_data(&data);
        Self {
            data,
            ui: UiState::default(),
            dashboard,
            items: Vec::new(),
            pokedex: Vec::new(),
            breeding_form: BreedingForm::default(),
            breeding_result: None,
            tools: ToolResults::default(),
            export_text: None,
            tasks: Tasks::default(),
            as_of: now,
        }
    }

    pub fn refresh_dashboard(&mut self) {
        self.dashboard = DashboardStats::from_data(&self.data);
    }

    /// Recompute the loading overlay from the pending task slots.
    pub fn sync_loading(&mut self) {
        self.ui.loading = self.tasks.any_pending();
    }

    /// Whether `id` is used by saved data or the unsaved breeding result.
    #[must_use]
    pub fn id_taken(&self, id: &str) -> bool {
        self.data.id_taken(id)
            || self
                .breeding_result
                .as_ref()
                .is_some_and(|outcome| outcome.project.id == id)
    }
}
