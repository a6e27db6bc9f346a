use std::ops::{Index, IndexMut};

use crate::geometry::{Dir, Pos};

pub const GRID_W: usize = 25;
pub const GRID_H: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Door,
}

/// Fixed-size board of tiles, indexed by `Pos`.
///
/// Indexing with an out-of-range position panics; callers check bounds with
/// [`Pos::neighbor`] or [`Grid::get`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Tile; GRID_W]; GRID_H],
}

impl Grid {
    pub fn filled(tile: Tile) -> Self {
        Self {
            cells: [[tile; GRID_W]; GRID_H],
        }
    }

    /// Border walls around an empty interior.
    pub fn bordered() -> Self {
        let mut grid = Self::filled(Tile::Empty);
        for pos in Self::positions() {
            if Self::is_border(pos) {
                grid[pos] = Tile::Wall;
            }
        }
        grid
    }

    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    pub fn is_border(pos: Pos) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == GRID_W - 1 || pos.y == GRID_H - 1
    }

    /// Every position in row-major order.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..GRID_H).flat_map(|y| (0..GRID_W).map(move |x| Pos::new(x, y)))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile; GRID_W]> {
        self.cells.iter()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == tile)
            .count()
    }

    /// First door in row-major order.
    pub fn door(&self) -> Option<Pos> {
        Self::positions().find(|&pos| self[pos] == Tile::Door)
    }

    /// In-bounds 4-neighbors of `pos` that are walls.
    pub fn wall_neighbors(&self, pos: Pos) -> usize {
        Dir::ALL
            .iter()
            .filter_map(|&dir| pos.neighbor(dir))
            .filter(|&n| self[n] == Tile::Wall)
            .count()
    }
}

impl Index<Pos> for Grid {
    type Output = Tile;

    fn index(&self, pos: Pos) -> &Tile {
        &self.cells[pos.y][pos.x]
    }
}

impl IndexMut<Pos> for Grid {
    fn index_mut(&mut self, pos: Pos) -> &mut Tile {
        &mut self.cells[pos.y][pos.x]
    }
}
