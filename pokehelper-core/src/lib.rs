//! PokeMMO Helper core
//!
//! Platform-agnostic state, persistence and planning logic for the PokeMMO
//! helper. Front-ends dispatch [`Action`]s into a [`HelperSession`] and render
//! the resulting [`ViewTree`]; nothing here touches the DOM or timers.

pub mod breeding;
pub mod catalog;
pub mod catch_rate;
pub mod constants;
pub mod data;
pub mod error;
pub mod numbers;
pub mod persistence;
pub mod session;
pub mod state;
pub mod stats;
pub mod tasks;
pub mod types;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use breeding::{
    BreedingOutcome, BreedingPathSolver, BreedingPlan, BreedingRequest, EstimatingSolver,
    plan_breeding,
};
pub use catalog::{
    Berry, CatalogSource, Evolution, Item, Location, MockCatalog, Pokemon, PriceData,
    egg_move_path,
};
pub use catch_rate::{
    CatchEstimate, CatchProbability, CatchRateInput, PlaceholderCatchModel, estimate_catch,
};
pub use data::{
    AppData, AppSettings, BerryPlot, BreedingParent, BreedingProject, BreedingStep, Investment,
    ParentSource, Theme, unique_id,
};
pub use error::{StorageError, UnknownVariant, ValidationError};
pub use persistence::{
    KeyValueStore, MemoryStore, clear_app_data, export_app_data, import_app_data, load_app_data,
    persist, save_app_data,
};
pub use session::{Collaborators, Dispatched, HelperSession};
pub use state::{
    AppModel, BreedingForm, DashboardStats, ModalContent, Notice, NoticeLevel, Tab, ToolId,
    ToolResults, UiState,
};
pub use stats::{BaseStats, GenderRatio, IvSpread, Stat};
pub use tasks::{TaskKind, TaskSlot, Ticket, TicketMint};
pub use types::{
    BerryStage, BreedingStatus, CatchMethod, EggGroup, Gender, ItemCategory, Nature, Pokeball,
    PokemonType, Rarity, Region, StatusCondition,
};
pub use update::{Action, Context, Effect, PersistReason, Update, update};
pub use view::{ViewTree, format_pokedollars, format_remaining, render};
