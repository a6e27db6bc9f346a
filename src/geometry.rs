use crate::grid::{GRID_H, GRID_W};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn is_in_bounds(self) -> bool {
        self.x < GRID_W && self.y < GRID_H
    }

    /// The adjacent cell in `dir`, or `None` when it would leave the grid.
    pub fn neighbor(self, dir: Dir) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let nx = self.x as isize + dx;
        let ny = self.y as isize + dy;
        if in_bounds(nx, ny) {
            Some(Pos::new(nx as usize, ny as usize))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Expansion order used by every neighbor scan.
    pub const ALL: [Dir; 4] = [Dir::Right, Dir::Down, Dir::Left, Dir::Up];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

/// True iff `(x, y)` addresses a cell of the grid.
pub fn in_bounds(x: isize, y: isize) -> bool {
    0 <= x && x < GRID_W as isize && 0 <= y && y < GRID_H as isize
}
