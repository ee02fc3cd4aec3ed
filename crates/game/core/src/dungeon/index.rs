use std::collections::BTreeMap;

use crate::state::Position;

/// Entity indices sharing one cell, grouped by category.
///
/// Each vector holds positions into the matching catalog of the owning
/// [`super::Dungeon`]. Several entities of the same category may share a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellEntities {
    pub treasures: Vec<usize>,
    pub enemies: Vec<usize>,
    pub traps: Vec<usize>,
    pub doors: Vec<usize>,
    pub chests: Vec<usize>,
    pub keys: Vec<usize>,
}

impl CellEntities {
    pub fn is_empty(&self) -> bool {
        self.treasures.is_empty()
            && self.enemies.is_empty()
            && self.traps.is_empty()
            && self.doors.is_empty()
            && self.chests.is_empty()
            && self.keys.is_empty()
    }
}

/// Coordinate-keyed multiset over all entity catalogs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityIndex {
    cells: BTreeMap<Position, CellEntities>,
}

impl EntityIndex {
    pub fn get(&self, position: Position) -> Option<&CellEntities> {
        self.cells.get(&position)
    }

    pub(super) fn slot(&mut self, position: Position) -> &mut CellEntities {
        self.cells.entry(position).or_default()
    }
}
