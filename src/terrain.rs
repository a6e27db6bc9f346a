use rand::Rng;

use crate::geometry::Pos;
use crate::grid::{Grid, Tile, GRID_H, GRID_W};
use crate::rng::uniform_int;

/// Border walls, a coin flip for every interior cell, and one door on the right edge.
///
/// The door row is drawn from `1..=GRID_H - 2` so it never lands in a corner.
pub fn generate_raw(rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::filled(Tile::Wall);
    for pos in Grid::positions() {
        if Grid::is_border(pos) {
            continue;
        }
        grid[pos] = if uniform_int(rng, 0, 1) == 1 {
            Tile::Wall
        } else {
            Tile::Empty
        };
    }

    let door_row = uniform_int(rng, 1, GRID_H as i32 - 2) as usize;
    grid[Pos::new(GRID_W - 1, door_row)] = Tile::Door;
    grid
}

/// Walls in every empty cell whose four in-bounds neighbors are all walls.
///
/// One row-major pass. Pockets of two or more cells stay open. Only `Empty` cells are
/// candidates, so the door survives regardless of its surroundings.
pub fn seal_dead_cells(grid: &mut Grid) {
    let mut sealed = 0;
    for pos in Grid::positions() {
        if grid[pos] == Tile::Empty && grid.wall_neighbors(pos) == 4 {
            grid[pos] = Tile::Wall;
            sealed += 1;
        }
    }
    log::trace!("sealed {sealed} dead cells");
}
