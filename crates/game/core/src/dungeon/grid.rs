use crate::error::DungeonError;
use crate::state::Position;

/// Static cell kinds. The discriminants are the authority's wire codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[repr(u8)]
pub enum TileKind {
    Floor = 0,
    Wall = 1,
    Door = 2,
    Chest = 3,
}

impl TileKind {
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Floor),
            1 => Some(Self::Wall),
            2 => Some(Self::Door),
            3 => Some(Self::Chest),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }
}

/// Width and height of a grid in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Clamps a position into `[0, width-1] x [0, height-1]`.
    pub fn clamp(&self, position: Position) -> Position {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
    }

    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of an in-bounds position.
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

/// Row-major matrix of tile kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimensions: GridDimensions,
    cells: Vec<TileKind>,
}

impl Grid {
    /// Decodes wire rows (`rows[y][x]`) and checks them against the declared size.
    pub fn from_rows(dimensions: GridDimensions, rows: &[Vec<u8>]) -> Result<Self, DungeonError> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(DungeonError::EmptyDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        if rows.len() != dimensions.height as usize {
            return Err(DungeonError::RowCount {
                expected: dimensions.height,
                actual: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(dimensions.area());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != dimensions.width as usize {
                return Err(DungeonError::RowWidth {
                    row: y,
                    expected: dimensions.width,
                    actual: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let tile = TileKind::from_code(code).ok_or(DungeonError::UnknownTile {
                    position: Position::new(x as i32, y as i32),
                    code,
                })?;
                cells.push(tile);
            }
        }

        Ok(Self { dimensions, cells })
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.dimensions.width as usize)
            .map(|row| row.iter().map(|tile| tile.code()).collect())
            .collect()
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.dimensions
            .index_of(position)
            .map(|index| self.cells[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rows_in_row_major_order() {
        let rows = vec![vec![1, 1, 1], vec![1, 0, 2], vec![1, 3, 1]];
        let grid = Grid::from_rows(GridDimensions::new(3, 3), &rows).unwrap();

        assert_eq!(grid.tile(Position::new(1, 1)), Some(TileKind::Floor));
        assert_eq!(grid.tile(Position::new(2, 1)), Some(TileKind::Door));
        assert_eq!(grid.tile(Position::new(1, 2)), Some(TileKind::Chest));
        assert_eq!(grid.tile(Position::new(3, 0)), None);
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn rejects_ragged_rows_and_unknown_codes() {
        let dims = GridDimensions::new(2, 2);
        assert!(matches!(
            Grid::from_rows(dims, &[vec![0, 0], vec![0]]),
            Err(DungeonError::RowWidth { row: 1, .. })
        ));
        assert!(matches!(
            Grid::from_rows(dims, &[vec![0, 0]]),
            Err(DungeonError::RowCount { actual: 1, .. })
        ));
        assert!(matches!(
            Grid::from_rows(dims, &[vec![0, 7], vec![0, 0]]),
            Err(DungeonError::UnknownTile { code: 7, .. })
        ));
    }

    #[test]
    fn clamp_keeps_positions_inside() {
        let dims = GridDimensions::new(5, 4);
        assert_eq!(dims.clamp(Position::new(-1, 2)), Position::new(0, 2));
        assert_eq!(dims.clamp(Position::new(9, 9)), Position::new(4, 3));
    }
}
