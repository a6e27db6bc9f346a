use std::collections::VecDeque;

use crate::geometry::{Dir, Pos};
use crate::grid::{Grid, Tile, GRID_H, GRID_W};

/// True when the door can be reached from `start` through non-wall cells.
pub fn is_solvable(grid: &Grid, start: Pos) -> bool {
    door_distance(grid, start).is_some()
}

/// Fewest 4-directional steps from `start` to the door, or `None` if it is walled off.
///
/// `start` counts as visited even when it is itself a wall, so a start that was sealed
/// can still expand into its open neighbors. The search stops at the first door seen.
pub fn door_distance(grid: &Grid, start: Pos) -> Option<usize> {
    assert!(start.is_in_bounds(), "search start {start:?} outside the grid");

    let mut visited = [[false; GRID_W]; GRID_H];
    let mut q = VecDeque::with_capacity(GRID_W * GRID_H);
    visited[start.y][start.x] = true;
    q.push_back((start, 0));

    while let Some((pos, dist)) = q.pop_front() {
        for dir in Dir::ALL {
            let Some(next) = pos.neighbor(dir) else {
                continue;
            };
            if visited[next.y][next.x] {
                continue;
            }
            match grid[next] {
                Tile::Wall => {}
                Tile::Door => return Some(dist + 1),
                Tile::Empty => {
                    visited[next.y][next.x] = true;
                    q.push_back((next, dist + 1));
                }
            }
        }
    }
    None
}
