//! Static entity catalogs carried by a dungeon.
//!
//! Every entity sits on exactly one cell. Entities of different categories
//! may share a cell; the authority produces such overlaps and they are kept
//! as-is.

use std::fmt;

use crate::state::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Treasure variants produced by the authority; unknown names are preserved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum TreasureKind {
    Gold,
    Potion,
    Weapon,
    Armor,
    Other(String),
}

impl From<String> for TreasureKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "gold" => Self::Gold,
            "potion" => Self::Potion,
            "weapon" => Self::Weapon,
            "armor" => Self::Armor,
            _ => Self::Other(value),
        }
    }
}

impl From<TreasureKind> for String {
    fn from(value: TreasureKind) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TreasureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gold => f.write_str("gold"),
            Self::Potion => f.write_str("potion"),
            Self::Weapon => f.write_str("weapon"),
            Self::Armor => f.write_str("armor"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Treasure {
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: TreasureKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Enemy {
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hp: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub alive: bool,
}

/// Traps have no identifier; they are addressed by position only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trap {
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(rename = "type", default = "default_trap_kind"))]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Door {
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chest {
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Key {
    pub id: String,
    pub x: i32,
    pub y: i32,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: Option<String>,
}

/// Rectangular room carved by the generator. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub center_x: i32,
    pub center_y: i32,
}

impl Room {
    pub fn center(&self) -> Position {
        Position::new(self.center_x, self.center_y)
    }
}

/// Common accessors for anything placed on the grid.
pub trait Placed {
    const CATEGORY: &'static str;

    fn position(&self) -> Position;

    /// Identifier used in diagnostics; traps fall back to their coordinates.
    fn label(&self) -> String;
}

macro_rules! placed_with_id {
    ($ty:ty, $category:literal) => {
        impl Placed for $ty {
            const CATEGORY: &'static str = $category;

            fn position(&self) -> Position {
                Position::new(self.x, self.y)
            }

            fn label(&self) -> String {
                self.id.clone()
            }
        }
    };
}

placed_with_id!(Treasure, "treasure");
placed_with_id!(Enemy, "enemy");
placed_with_id!(Door, "door");
placed_with_id!(Chest, "chest");
placed_with_id!(Key, "key");

impl Placed for Trap {
    const CATEGORY: &'static str = "trap";

    fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    fn label(&self) -> String {
        format!("{}@{}", self.kind, self.position())
    }
}

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "serde")]
fn default_trap_kind() -> String {
    crate::GameConfig::DEFAULT_TRAP_KIND.to_string()
}
