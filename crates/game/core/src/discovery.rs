//! Fog-of-war bookkeeping.
//!
//! A [`DiscoveryMap`] only ever grows: every operation here either sets cells
//! or leaves them untouched, so a tile once discovered stays discovered for
//! the rest of the session.
use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::dungeon::GridDimensions;
use crate::state::Position;

/// Positions revealed around a single center, clipped to the grid.
pub type Neighborhood = ArrayVec<Position, { GameConfig::MAX_REVEALED_PER_MOVE }>;

/// Wire-side discovery matrix that is not rectangular.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("discovery row {row} has {actual} cells, expected {expected}")]
pub struct DiscoveryShapeError {
    pub row: usize,
    pub expected: usize,
    pub actual: usize,
}

/// Row-major visibility mask matching a dungeon grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")
)]
pub struct DiscoveryMap {
    dimensions: GridDimensions,
    cells: Vec<bool>,
}

impl DiscoveryMap {
    /// Fully fogged map of the given size.
    pub fn hidden(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![false; dimensions.area()],
        }
    }

    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, DiscoveryShapeError> {
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(DiscoveryShapeError {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            dimensions: GridDimensions::new(width as u32, height as u32),
            cells,
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.dimensions.width == 0 {
            return vec![Vec::new(); self.dimensions.height as usize];
        }
        self.cells
            .chunks(self.dimensions.width as usize)
            .map(<[bool]>::to_vec)
            .collect()
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn is_discovered(&self, position: Position) -> bool {
        self.dimensions
            .index_of(position)
            .is_some_and(|index| self.cells[index])
    }

    /// Marks one cell. Returns `true` when it was hidden before.
    pub fn discover(&mut self, position: Position) -> bool {
        match self.dimensions.index_of(position) {
            Some(index) if !self.cells[index] => {
                self.cells[index] = true;
                true
            }
            _ => false,
        }
    }

    /// Reveals the square neighborhood around `center` and returns the cells
    /// that were newly discovered.
    pub fn reveal_around(&mut self, center: Position) -> Neighborhood {
        neighborhood(center, self.dimensions)
            .into_iter()
            .filter(|&position| self.discover(position))
            .collect()
    }

    /// Unions `other` into `self`. Maps of different size are left alone.
    ///
    /// Returns the number of cells that became discovered.
    pub fn absorb(&mut self, other: &DiscoveryMap) -> usize {
        if self.dimensions != other.dimensions {
            return 0;
        }
        let mut gained = 0;
        for (mine, theirs) in self.cells.iter_mut().zip(&other.cells) {
            if *theirs && !*mine {
                *mine = true;
                gained += 1;
            }
        }
        gained
    }

    pub fn is_superset_of(&self, other: &DiscoveryMap) -> bool {
        self.dimensions == other.dimensions
            && self
                .cells
                .iter()
                .zip(&other.cells)
                .all(|(mine, theirs)| *mine || !*theirs)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }
}

impl TryFrom<Vec<Vec<bool>>> for DiscoveryMap {
    type Error = DiscoveryShapeError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<DiscoveryMap> for Vec<Vec<bool>> {
    fn from(map: DiscoveryMap) -> Self {
        map.to_rows()
    }
}

/// In-bounds cells within [`GameConfig::DISCOVERY_RADIUS`] of `center`,
/// row by row.
pub fn neighborhood(center: Position, dimensions: GridDimensions) -> Neighborhood {
    let radius = GameConfig::DISCOVERY_RADIUS;
    let mut cells = Neighborhood::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let position = center.offset(dx, dy);
            if dimensions.contains(position) {
                cells.push(position);
            }
        }
    }
    cells
}
