//! Read-only reference data: items, species, berries.
//!
//! The helper never owns this data. It reaches it through [`CatalogSource`],
//! and ships [`MockCatalog`] as the stand-in for a real data source.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::ValidationError;
use crate::stats::{BaseStats, GenderRatio};
use crate::types::{CatchMethod, EggGroup, ItemCategory, Nature, PokemonType, Rarity, Region};

/// Historical price sample for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceData {
    pub date: NaiveDate,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub category: ItemCategory,
    pub current_price: u64,
    #[serde(default)]
    pub price_history: Vec<PriceData>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<String>,
}

/// Where a species can be encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub region: Region,
    pub area: String,
    pub method: CatchMethod,
    pub rarity: Rarity,
    /// Inclusive `(min, max)` encounter levels.
    pub levels: (u8, u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub from: String,
    pub to: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Species reference entry. A species has one or two types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub types: SmallVec<[PokemonType; 2]>,
    pub base_stats: BaseStats,
    pub egg_groups: Vec<EggGroup>,
    pub gender_ratio: GenderRatio,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evolution_chain: Vec<Evolution>,
}

impl Pokemon {
    /// Types joined with `separator`, e.g. `"Fire / Flying"`.
    #[must_use]
    pub fn type_line(&self, separator: &str) -> String {
        join_labels(self.types.iter().map(|ty| ty.label()), separator)
    }

    #[must_use]
    pub fn egg_group_line(&self) -> String {
        join_labels(self.egg_groups.iter().map(|group| group.label()), ", ")
    }
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>, separator: &str) -> String {
    labels.collect::<Vec<_>>().join(separator)
}

/// A plantable berry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Berry {
    pub name: String,
    /// Minutes from planting to harvest.
    pub growth_time: u32,
    /// Inclusive `(min, max)` harvest yield.
    #[serde(rename = "yield")]
    pub yield_range: (u8, u8),
    pub value: u64,
}

/// Read-only catalog lookups consumed by the helper.
pub trait CatalogSource {
    fn items(&self) -> &[Item];
    fn pokemon(&self) -> &[Pokemon];
    /// Species offered by the breeding planner.
    fn breeding_species(&self) -> &[String];
    /// Natures offered by the breeding planner.
    fn breeding_natures(&self) -> &[Nature];
    fn berries(&self) -> &[Berry];
    /// Moves offered by the egg-move helper.
    fn egg_moves(&self) -> &[String];

    /// Case-insensitive substring match on item name; an empty query matches everything.
    fn search_items(&self, query: &str) -> Vec<Item> {
        let needle = query.to_lowercase();
        self.items()
            .iter()
            .filter(|item| needle.is_empty() || item.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn find_pokemon(&self, name: &str) -> Option<&Pokemon> {
        self.pokemon()
            .iter()
            .find(|pokemon| pokemon.name.eq_ignore_ascii_case(name.trim()))
    }

    fn find_item(&self, name: &str) -> Option<&Item> {
        self.items()
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Look up a berry by name, with or without the trailing "Berry".
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownBerry`] when nothing matches.
    fn find_berry(&self, name: &str) -> Result<&Berry, ValidationError> {
        let wanted = name.trim();
        let short = wanted
            .strip_suffix(" Berry")
            .or_else(|| wanted.strip_suffix(" berry"))
            .unwrap_or(wanted);
        self.berries()
            .iter()
            .find(|berry| berry.name.eq_ignore_ascii_case(short))
            .ok_or_else(|| ValidationError::UnknownBerry(wanted.to_string()))
    }
}

/// Static placeholder catalog.
#[derive(Debug, Clone)]
pub struct MockCatalog {
    items: Vec<Item>,
    pokemon: Vec<Pokemon>,
    breeding_species: Vec<String>,
    breeding_natures: Vec<Nature>,
    berries: Vec<Berry>,
    egg_moves: Vec<String>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: mock_items(),
            pokemon: mock_pokemon(),
            breeding_species: [
                "Charizard",
                "Blastoise",
                "Venusaur",
                "Pikachu",
                "Mewtwo",
                "Dragonite",
                "Tyranitar",
                "Garchomp",
                "Metagross",
                "Salamence",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            breeding_natures: vec![
                Nature::Adamant,
                Nature::Bold,
                Nature::Brave,
                Nature::Calm,
                Nature::Careful,
                Nature::Hasty,
                Nature::Impish,
                Nature::Jolly,
                Nature::Modest,
                Nature::Naive,
                Nature::Quiet,
                Nature::Timid,
            ],
            berries: vec![
                berry("Oran", 150, (2, 5), 80),
                berry("Sitrus", 240, (2, 4), 600),
                berry("Leppa", 180, (2, 4), 350),
            ],
            egg_moves: vec!["Dragon Pulse".to_string(), "Ancient Power".to_string()],
        }
    }
}

impl CatalogSource for MockCatalog {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn pokemon(&self) -> &[Pokemon] {
        &self.pokemon
    }

    fn breeding_species(&self) -> &[String] {
        &self.breeding_species
    }

    fn breeding_natures(&self) -> &[Nature] {
        &self.breeding_natures
    }

    fn berries(&self) -> &[Berry] {
        &self.berries
    }

    fn egg_moves(&self) -> &[String] {
        &self.egg_moves
    }
}

fn berry(name: &str, growth_time: u32, yield_range: (u8, u8), value: u64) -> Berry {
    Berry {
        name: name.to_string(),
        growth_time,
        yield_range,
        value,
    }
}

fn mock_items() -> Vec<Item> {
    let item = |id: u32, name: &str, category, current_price, description: &str| Item {
        id,
        name: name.to_string(),
        category,
        current_price,
        price_history: Vec::new(),
        description: description.to_string(),
        sprite: None,
    };
    vec![
        item(
            1,
            "Ultra Ball",
            ItemCategory::Pokeballs,
            1_200,
            "A high-performance Ball with a higher catch rate than a Great Ball.",
        ),
        item(
            2,
            "Rare Candy",
            ItemCategory::Medicine,
            5_000,
            "A candy that is packed with energy. It raises the level of a Pokemon by one.",
        ),
        item(
            3,
            "Leftovers",
            ItemCategory::HeldItems,
            15_000,
            "An item to be held by a Pokemon. The holder restores HP gradually.",
        ),
    ]
}

// Both starters share the 87.5 / 12.5 split.
const STARTER_RATIO: GenderRatio = GenderRatio::preset(87.5, 12.5);

fn mock_pokemon() -> Vec<Pokemon> {
    vec![
        Pokemon {
            id: 1,
            name: "Charizard".to_string(),
            types: smallvec![PokemonType::Fire, PokemonType::Flying],
            base_stats: BaseStats {
                hp: 78,
                attack: 84,
                defense: 78,
                special_attack: 109,
                special_defense: 85,
                speed: 100,
            },
            egg_groups: vec![EggGroup::Monster, EggGroup::Dragon],
            gender_ratio: STARTER_RATIO,
            locations: Vec::new(),
            evolution_chain: Vec::new(),
        },
        Pokemon {
            id: 2,
            name: "Blastoise".to_string(),
            types: smallvec![PokemonType::Water],
            base_stats: BaseStats {
                hp: 79,
                attack: 83,
                defense: 100,
                special_attack: 85,
                special_defense: 105,
                speed: 78,
            },
            egg_groups: vec![EggGroup::Monster, EggGroup::Water1],
            gender_ratio: STARTER_RATIO,
            locations: Vec::new(),
            evolution_chain: Vec::new(),
        },
    ]
}

/// Breeding chain that passes `egg_move` down to `target`.
///
/// Placeholder: every request resolves to the same fixed chain.
///
/// # Errors
///
/// [`ValidationError::MissingPokemon`] or [`ValidationError::MissingEggMove`]
/// when either selection is blank.
pub fn egg_move_path(target: &str, egg_move: &str) -> Result<String, ValidationError> {
    if target.trim().is_empty() {
        return Err(ValidationError::MissingPokemon);
    }
    if egg_move.trim().is_empty() {
        return Err(ValidationError::MissingEggMove);
    }
    Ok("Charizard → Horsea → Target".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = MockCatalog::new();
        let hits = catalog.search_items("ultra");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Ultra Ball");
        assert_eq!(catalog.search_items("LEFT")[0].name, "Leftovers");
        assert!(catalog.search_items("master").is_empty());
    }

    #[test]
    fn empty_query_returns_full_catalog() {
        let catalog = MockCatalog::new();
        assert_eq!(catalog.search_items("").len(), 3);
    }

    #[test]
    fn breeding_form_options_are_fixed() {
        let catalog = MockCatalog::new();
        assert_eq!(catalog.breeding_species().len(), 10);
        assert_eq!(catalog.breeding_natures().len(), 12);
        assert_eq!(catalog.breeding_species()[0], "Charizard");
    }

    #[test]
    fn berries_resolve_with_or_without_suffix() {
        let catalog = MockCatalog::new();
        assert_eq!(catalog.find_berry("Oran Berry").unwrap().growth_time, 150);
        assert_eq!(catalog.find_berry("sitrus").unwrap().name, "Sitrus");
        assert_eq!(
            catalog.find_berry("Razz"),
            Err(ValidationError::UnknownBerry("Razz".to_string()))
        );
    }

    #[test]
    fn pokemon_type_lines_join_labels() {
        let catalog = MockCatalog::new();
        let charizard = catalog.find_pokemon("charizard").unwrap();
        assert_eq!(charizard.type_line(" / "), "Fire / Flying");
        assert_eq!(charizard.egg_group_line(), "Monster, Dragon");
        let json = serde_json::to_value(charizard).unwrap();
        assert_eq!(json["types"], serde_json::json!(["Fire", "Flying"]));
        assert!(json.get("locations").is_none());
    }

    #[test]
    fn egg_move_path_requires_both_selections() {
        assert_eq!(egg_move_path("", "Dragon Pulse"), Err(ValidationError::MissingPokemon));
        assert_eq!(egg_move_path("Charizard", " "), Err(ValidationError::MissingEggMove));
        assert_eq!(
            egg_move_path("Charizard", "Dragon Pulse").unwrap(),
            "Charizard → Horsea → Target"
        );
    }
}
