//! Closed enumerations of the PokeMMO domain.
//!
//! Every variant serializes as its display label (`"Water 1"`, `"In Progress"`),
//! which is also the JSON layout older saves were written with. A few variants
//! additionally accept the upper-case identifiers the previous tool wrote
//! (`"KANTO"`, `"PLANNING"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownVariant;

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Human-readable label, identical to the serialized form.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            const fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($alias),*]),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let needle = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| {
                        variant.label().eq_ignore_ascii_case(needle)
                            || variant
                                .aliases()
                                .iter()
                                .any(|alias| alias.eq_ignore_ascii_case(needle))
                    })
                    .ok_or_else(|| UnknownVariant {
                        kind: $kind,
                        value: needle.to_string(),
                    })
            }
        }
    };
}

labeled_enum! {
    pub enum PokemonType as "type" {
        Normal => "Normal",
        Fire => "Fire",
        Water => "Water",
        Electric => "Electric",
        Grass => "Grass",
        Ice => "Ice",
        Fighting => "Fighting",
        Poison => "Poison",
        Ground => "Ground",
        Flying => "Flying",
        Psychic => "Psychic",
        Bug => "Bug",
        Rock => "Rock",
        Ghost => "Ghost",
        Dragon => "Dragon",
        Dark => "Dark",
        Steel => "Steel",
        Fairy => "Fairy",
    }
}

labeled_enum! {
    /// Game regions; also the user's default region setting.
    #[derive(Default)]
    pub enum Region as "region" {
        #[default]
        Kanto => "Kanto" | "KANTO",
        Johto => "Johto" | "JOHTO",
        Hoenn => "Hoenn" | "HOENN",
        Sinnoh => "Sinnoh" | "SINNOH",
        Unova => "Unova" | "UNOVA",
    }
}

labeled_enum! {
    pub enum ItemCategory as "item category" {
        Pokeballs => "Pokeballs",
        Berries => "Berries",
        Medicine => "Medicine",
        Tms => "TMs",
        HeldItems => "Held Items",
        EvolutionItems => "Evolution Items",
        BreedingItems => "Breeding Items",
        BattleItems => "Battle Items",
    }
}

labeled_enum! {
    pub enum Nature as "nature" {
        Hardy => "Hardy",
        Lonely => "Lonely",
        Brave => "Brave",
        Adamant => "Adamant",
        Naughty => "Naughty",
        Bold => "Bold",
        Docile => "Docile",
        Relaxed => "Relaxed",
        Impish => "Impish",
        Lax => "Lax",
        Timid => "Timid",
        Hasty => "Hasty",
        Serious => "Serious",
        Jolly => "Jolly",
        Naive => "Naive",
        Modest => "Modest",
        Mild => "Mild",
        Quiet => "Quiet",
        Bashful => "Bashful",
        Rash => "Rash",
        Calm => "Calm",
        Gentle => "Gentle",
        Sassy => "Sassy",
        Careful => "Careful",
        Quirky => "Quirky",
    }
}

labeled_enum! {
    pub enum Gender as "gender" {
        Male => "Male",
        Female => "Female",
        Genderless => "Genderless",
    }
}

labeled_enum! {
    pub enum EggGroup as "egg group" {
        Monster => "Monster",
        Water1 => "Water 1",
        Water2 => "Water 2",
        Water3 => "Water 3",
        Bug => "Bug",
        Flying => "Flying",
        Field => "Field",
        Fairy => "Fairy",
        Grass => "Grass",
        HumanLike => "Human-Like",
        Mineral => "Mineral",
        Amorphous => "Amorphous",
        Dragon => "Dragon",
        Undiscovered => "Undiscovered",
        Ditto => "Ditto",
    }
}

labeled_enum! {
    /// Lifecycle label of a breeding project. Only `Planning` is ever assigned.
    #[derive(Default)]
    pub enum BreedingStatus as "breeding status" {
        #[default]
        Planning => "Planning" | "PLANNING",
        InProgress => "In Progress" | "IN_PROGRESS",
        Completed => "Completed" | "COMPLETED",
        Paused => "Paused" | "PAUSED",
    }
}

labeled_enum! {
    #[derive(Default)]
    pub enum StatusCondition as "status condition" {
        #[default]
        None => "None",
        Sleep => "Sleep",
        Freeze => "Freeze",
        Paralysis => "Paralysis",
        Poison => "Poison",
        Burn => "Burn",
    }
}

labeled_enum! {
    #[derive(Default)]
    pub enum Pokeball as "ball" {
        #[default]
        Pokeball => "Pokeball",
        GreatBall => "Great Ball",
        UltraBall => "Ultra Ball",
        MasterBall => "Master Ball",
        SafariBall => "Safari Ball",
        NetBall => "Net Ball",
        DiveBall => "Dive Ball",
        NestBall => "Nest Ball",
        RepeatBall => "Repeat Ball",
        TimerBall => "Timer Ball",
        LuxuryBall => "Luxury Ball",
        PremierBall => "Premier Ball",
    }
}

labeled_enum! {
    pub enum CatchMethod as "catch method" {
        Walk => "Walk",
        Surf => "Surf",
        Fish => "Fish",
        Headbutt => "Headbutt",
        RockSmash => "Rock Smash",
        SweetScent => "Sweet Scent",
    }
}

labeled_enum! {
    pub enum Rarity as "rarity" {
        VeryCommon => "Very Common",
        Common => "Common",
        Uncommon => "Uncommon",
        Rare => "Rare",
        VeryRare => "Very Rare",
        ExtremelyRare => "Extremely Rare",
    }
}

labeled_enum! {
    /// Growth stages of a planted berry, in order.
    #[derive(Default)]
    pub enum BerryStage as "berry stage" {
        #[default]
        Planted => "Planted",
        Sprouted => "Sprouted",
        Taller => "Taller",
        Flowering => "Flowering",
        Fruiting => "Fruiting",
    }
}
