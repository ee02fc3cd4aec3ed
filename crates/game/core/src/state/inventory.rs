/// One carried item as reported by the authority.
///
/// Older authority builds send bare item names; those decode with an empty
/// `emoji` and the frontend picks a glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ItemRecord"))]
pub struct InventoryItem {
    pub name: String,
    pub emoji: String,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
        }
    }

    pub fn has_emoji(&self) -> bool {
        !self.emoji.is_empty()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ItemRecord {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        emoji: String,
    },
}

#[cfg(feature = "serde")]
impl From<ItemRecord> for InventoryItem {
    fn from(record: ItemRecord) -> Self {
        match record {
            ItemRecord::Name(name) => Self {
                name,
                emoji: String::new(),
            },
            ItemRecord::Full { name, emoji } => Self { name, emoji },
        }
    }
}
