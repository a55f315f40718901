//! Six-stat value objects shared by the catalog and breeding planner.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_IV;
use crate::error::ValidationError;

/// One of the six battle stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Attack,
        Self::Defense,
        Self::SpecialAttack,
        Self::SpecialDefense,
        Self::Speed,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hp => "HP",
            Self::Attack => "Attack",
            Self::Defense => "Defense",
            Self::SpecialAttack => "Sp. Atk",
            Self::SpecialDefense => "Sp. Def",
            Self::Speed => "Speed",
        }
    }

    /// Short identifier used for form field ids (`hp-iv`, `spatk-iv`, ...).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Hp => "hp",
            Self::Attack => "attack",
            Self::Defense => "defense",
            Self::SpecialAttack => "spatk",
            Self::SpecialDefense => "spdef",
            Self::Speed => "speed",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Species base stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    #[must_use]
    pub const fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|stat| u32::from(self.get(*stat))).sum()
    }
}

/// Individual values for all six stats, each in `0..=31`.
///
/// Deserializing rejects out-of-range values, so a stored blob can never
/// carry an invalid spread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawIvSpread")]
pub struct IvSpread {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub special_attack: u8,
    pub special_defense: u8,
    pub speed: u8,
}

impl IvSpread {
    /// A spread with the same value in every stat.
    #[must_use]
    pub const fn uniform(value: u8) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            special_attack: value,
            special_defense: value,
            speed: value,
        }
    }

    /// Build a spread from values ordered as [`Stat::ALL`].
    #[must_use]
    pub const fn from_array(values: [u8; 6]) -> Self {
        Self {
            hp: values[0],
            attack: values[1],
            defense: values[2],
            special_attack: values[3],
            special_defense: values[4],
            speed: values[5],
        }
    }

    #[must_use]
    pub const fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub const fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// Number of stats at the maximum IV.
    #[must_use]
    pub fn perfect_count(&self) -> usize {
        Stat::ALL
            .iter()
            .filter(|stat| self.get(**stat) == MAX_IV)
            .count()
    }

    /// Ensure every stat is within `0..=31`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IvOutOfRange`] for the first stat above the maximum.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match Stat::ALL.iter().find(|stat| self.get(**stat) > MAX_IV) {
            Some(stat) => Err(ValidationError::IvOutOfRange {
                stat: stat.label(),
                value: self.get(*stat),
                max: MAX_IV,
            }),
            None => Ok(()),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIvSpread {
    hp: u8,
    attack: u8,
    defense: u8,
    special_attack: u8,
    special_defense: u8,
    speed: u8,
}

impl TryFrom<RawIvSpread> for IvSpread {
    type Error = ValidationError;

    fn try_from(raw: RawIvSpread) -> Result<Self, Self::Error> {
        let spread = Self {
            hp: raw.hp,
            attack: raw.attack,
            defense: raw.defense,
            special_attack: raw.special_attack,
            special_defense: raw.special_defense,
            speed: raw.speed,
        };
        spread.validate()?;
        Ok(spread)
    }
}

/// Male/female split in percent; the two values always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGenderRatio")]
pub struct GenderRatio {
    male: f64,
    female: f64,
}

#[derive(Deserialize)]
struct RawGenderRatio {
    male: f64,
    female: f64,
}

impl TryFrom<RawGenderRatio> for GenderRatio {
    type Error = ValidationError;

    fn try_from(raw: RawGenderRatio) -> Result<Self, Self::Error> {
        Self::new(raw.male, raw.female)
    }
}

impl GenderRatio {
    /// Build a ratio from both percentages.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::GenderRatio`] when either value is negative
    /// or the pair does not sum to 100.
    pub fn new(male: f64, female: f64) -> Result<Self, ValidationError> {
        let balanced = (male + female - 100.0).abs() < 1e-9;
        if male < 0.0 || female < 0.0 || !balanced {
            return Err(ValidationError::GenderRatio { male, female });
        }
        Ok(Self { male, female })
    }

    /// Ratio from the male percentage alone.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::GenderRatio`] when `male` is outside `0..=100`.
    pub fn from_male(male: f64) -> Result<Self, ValidationError> {
        Self::new(male, 100.0 - male)
    }

    /// Fixed ratio for static catalog entries; callers guarantee the sum.
    pub(crate) const fn preset(male: f64, female: f64) -> Self {
        Self { male, female }
    }

    #[must_use]
    pub const fn male(&self) -> f64 {
        self.male
    }

    #[must_use]
    pub const fn female(&self) -> f64 {
        self.female
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_count_only_counts_max_values() {
        let spread = IvSpread::from_array([31, 31, 30, 31, 0, 31]);
        assert_eq!(spread.perfect_count(), 4);
        assert_eq!(IvSpread::uniform(31).perfect_count(), 6);
        assert_eq!(IvSpread::default().perfect_count(), 0);
    }

    #[test]
    fn validate_reports_first_out_of_range_stat() {
        let mut spread = IvSpread::uniform(20);
        assert!(spread.validate().is_ok());
        spread.set(Stat::SpecialDefense, 40);
        assert_eq!(
            spread.validate(),
            Err(ValidationError::IvOutOfRange {
                stat: "Sp. Def",
                value: 40,
                max: MAX_IV,
            })
        );
    }

    #[test]
    fn iv_spread_uses_camel_case_keys() {
        let json = serde_json::to_value(IvSpread::uniform(1)).unwrap();
        assert!(json.get("specialAttack").is_some());
        assert!(json.get("special_attack").is_none());
    }

    #[test]
    fn gender_ratio_must_sum_to_one_hundred() {
        let ratio = GenderRatio::from_male(87.5).unwrap();
        assert!((ratio.female() - 12.5).abs() < f64::EPSILON);
        assert!(GenderRatio::new(60.0, 30.0).is_err());
        assert!(GenderRatio::from_male(120.0).is_err());
    }

    #[test]
    fn gender_ratio_deserialization_goes_through_validation() {
        let ratio: GenderRatio = serde_json::from_str(r#"{"male":50.0,"female":50.0}"#).unwrap();
        assert!((ratio.male() - 50.0).abs() < f64::EPSILON);
        assert!(serde_json::from_str::<GenderRatio>(r#"{"male":90.0,"female":90.0}"#).is_err());
    }

    #[test]
    fn iv_spread_rejects_out_of_range_json() {
        let json = r#"{"hp":200,"attack":31,"defense":31,"specialAttack":31,"specialDefense":31,"speed":31}"#;
        let err = serde_json::from_str::<IvSpread>(json).unwrap_err();
        assert!(err.to_string().contains("HP"));
        let ok = json.replace("200", "31");
        assert_eq!(serde_json::from_str::<IvSpread>(&ok).unwrap(), IvSpread::uniform(31));
    }

    #[test]
    fn base_stat_total_sums_all_six() {
        let stats = BaseStats {
            hp: 78,
            attack: 84,
            defense: 78,
            special_attack: 109,
            special_defense: 85,
            speed: 100,
        };
        assert_eq!(stats.total(), 534);
    }
}
