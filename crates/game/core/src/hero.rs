//! Hero roster types.
//!
//! The roster is a static catalog served by the authority once at startup:
//! `class -> gender -> profile`.
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeroClass {
    Wizard,
    Knight,
    Hunter,
    Thief,
    Peasant,
}

impl HeroClass {
    pub const ALL: [HeroClass; 5] = [
        HeroClass::Wizard,
        HeroClass::Knight,
        HeroClass::Hunter,
        HeroClass::Thief,
        HeroClass::Peasant,
    ];

    pub fn title(self) -> &'static str {
        match self {
            HeroClass::Wizard => "Wizard",
            HeroClass::Knight => "Knight",
            HeroClass::Hunter => "Hunter",
            HeroClass::Thief => "Thief",
            HeroClass::Peasant => "Peasant",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HeroGender {
    #[default]
    Male,
    Female,
}

impl HeroGender {
    pub fn toggle(self) -> Self {
        match self {
            HeroGender::Male => HeroGender::Female,
            HeroGender::Female => HeroGender::Male,
        }
    }
}

/// Base stats and glyph for one class/gender pair.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeroProfile {
    pub name: String,
    pub emoji: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub agility: i32,
    pub dice_count: u32,
    pub dice_sides: u32,
}

impl HeroProfile {
    /// Damage dice in `NdM` notation.
    pub fn dice(&self) -> String {
        format!("{}d{}", self.dice_count, self.dice_sides)
    }
}

/// Read-only roster; may be empty when the authority could not serve it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HeroRoster {
    entries: BTreeMap<HeroClass, BTreeMap<HeroGender, HeroProfile>>,
}

impl HeroRoster {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class: HeroClass, gender: HeroGender, profile: HeroProfile) {
        self.entries.entry(class).or_default().insert(gender, profile);
    }

    pub fn profile(&self, class: HeroClass, gender: HeroGender) -> Option<&HeroProfile> {
        self.entries.get(&class).and_then(|genders| genders.get(&gender))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn classes(&self) -> impl Iterator<Item = HeroClass> + '_ {
        self.entries.keys().copied()
    }
}
