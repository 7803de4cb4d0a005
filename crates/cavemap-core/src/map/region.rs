//! Connected-region extraction and size filtering.

use std::collections::VecDeque;

use super::{Coord, Grid, Tile, CARDINAL_OFFSETS};

/// A maximal set of same-type tiles connected through cardinal neighbors.
///
/// Transient: recomputed per extraction pass and discarded once the
/// classifier has consumed it.
#[derive(Debug, Clone)]
pub struct Region {
    pub tiles: Vec<Coord>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Partition all tiles of the target type into connected regions.
///
/// Scans in row-major order and breadth-first flood fills from each
/// unvisited matching tile. Connectivity is the cardinal plus-pattern
/// (no diagonals), so regions touching only corner-to-corner stay
/// separate.
pub fn regions_of(grid: &Grid, target: Tile) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut visited = vec![false; grid.width() * grid.height()];

    for coord in grid.coords() {
        let idx = grid.index(coord.x, coord.y);
        if !visited[idx] && grid.tile(coord) == Some(target) {
            regions.push(flood_fill(grid, &mut visited, coord, target));
        }
    }
    regions
}

/// Collect the connected region containing `start` into a new Region,
/// marking every collected tile in the visited bitmap.
fn flood_fill(grid: &Grid, visited: &mut [bool], start: Coord, target: Tile) -> Region {
    let mut tiles = Vec::new();
    let mut queue = VecDeque::new();

    visited[grid.index(start.x, start.y)] = true;
    queue.push_back(start);

    while let Some(coord) = queue.pop_front() {
        tiles.push(coord);

        for (dx, dy) in CARDINAL_OFFSETS {
            let nx = coord.x + dx;
            let ny = coord.y + dy;
            if !grid.in_bounds(nx, ny) {
                continue;
            }
            let idx = grid.index(nx, ny);
            if !visited[idx] && grid.get(nx, ny) == Some(target) {
                visited[idx] = true;
                queue.push_back(Coord::new(nx, ny));
            }
        }
    }

    Region { tiles }
}

/// Flip every region of the target type smaller than `min_size` to the
/// opposite tile type, and return the surviving regions.
///
/// Removes isolated wall specks (target = Wall) or isolated floor
/// pockets (target = Floor).
pub fn cull_small_regions(grid: &mut Grid, target: Tile, min_size: usize) -> Vec<Region> {
    let mut survivors = Vec::new();
    for region in regions_of(grid, target) {
        if region.len() < min_size {
            for &tile in &region.tiles {
                grid.set_tile(tile, target.opposite());
            }
        } else {
            survivors.push(region);
        }
    }
    survivors
}
