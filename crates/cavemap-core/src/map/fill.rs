//! Random fill and cellular-automaton smoothing.

use crate::rng::MapRng;

use super::{Grid, Tile};

/// Seed the grid with a permanent wall border and a stochastic interior.
///
/// Each interior tile becomes Wall with probability `fill_percent/100`.
/// Tiles are visited in row-major order and the border consumes no
/// random numbers, so a given seed always produces the same grid.
pub fn random_fill(grid: &mut Grid, fill_percent: u32, rng: &mut MapRng) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let tile = if grid.is_border(x, y) {
                Tile::Wall
            } else if rng.percent(fill_percent) {
                Tile::Wall
            } else {
                Tile::Floor
            };
            grid.set(x, y, tile);
        }
    }
}

/// Apply one 3x3 majority-rule smoothing pass. Returns the number of
/// tiles that changed, so callers can detect the fixpoint.
///
/// Every tile is evaluated against a snapshot of the pre-pass grid
/// (read-before-write semantics), not against neighbors already updated
/// in the same pass. More than 4 wall neighbors makes a wall, fewer
/// than 4 makes a floor, exactly 4 leaves the tile alone.
pub fn smooth(grid: &mut Grid) -> usize {
    let snapshot = grid.clone();
    let mut changed = 0;

    for coord in snapshot.coords() {
        let walls = wall_neighbors(&snapshot, coord.x, coord.y);
        let next = if walls > 4 {
            Tile::Wall
        } else if walls < 4 {
            Tile::Floor
        } else {
            continue;
        };
        if snapshot.tile(coord) != Some(next) {
            grid.set_tile(coord, next);
            changed += 1;
        }
    }
    changed
}

/// Count wall tiles among the 8 neighbors of a position. Out-of-grid
/// neighbors count as walls.
fn wall_neighbors(grid: &Grid, x: i32, y: i32) -> u32 {
    let mut count = 0;
    for ny in y - 1..=y + 1 {
        for nx in x - 1..=x + 1 {
            if nx == x && ny == y {
                continue;
            }
            match grid.get(nx, ny) {
                Some(tile) if tile.is_wall() => count += 1,
                Some(_) => {}
                None => count += 1,
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_border_is_wall() {
        let mut grid = Grid::new(10, 8, Tile::Wall);
        let mut rng = MapRng::new(1);
        random_fill(&mut grid, 0, &mut rng);
        for coord in grid.coords() {
            if grid.is_border(coord.x, coord.y) {
                assert_eq!(grid.tile(coord), Some(Tile::Wall));
            } else {
                assert_eq!(grid.tile(coord), Some(Tile::Floor));
            }
        }
    }

    #[test]
    fn test_fill_deterministic() {
        let mut a = Grid::new(20, 20, Tile::Wall);
        let mut b = Grid::new(20, 20, Tile::Wall);
        random_fill(&mut a, 45, &mut MapRng::new(77));
        random_fill(&mut b, 45, &mut MapRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_100_is_all_wall() {
        let mut grid = Grid::new(8, 8, Tile::Floor);
        random_fill(&mut grid, 100, &mut MapRng::new(3));
        assert_eq!(grid.floor_count(), 0);
    }

    #[test]
    fn test_wall_neighbors_counts_out_of_grid() {
        let grid = Grid::new(3, 3, Tile::Floor);
        // Corner: 5 of 8 neighbors are out of grid
        assert_eq!(wall_neighbors(&grid, 0, 0), 5);
        // Center: all 8 in-grid floors
        assert_eq!(wall_neighbors(&grid, 1, 1), 0);
    }

    #[test]
    fn test_smooth_majority_rule() {
        // Single floor tile surrounded by walls gets swallowed
        let mut grid = Grid::new(5, 5, Tile::Wall);
        grid.set(2, 2, Tile::Floor);
        smooth(&mut grid);
        assert_eq!(grid.get(2, 2), Some(Tile::Wall));
    }

    #[test]
    fn test_smooth_opens_sparse_walls() {
        // Lone wall in open space has 0 wall neighbors and becomes floor
        let mut grid = Grid::new(7, 7, Tile::Floor);
        grid.set(3, 3, Tile::Wall);
        smooth(&mut grid);
        assert_eq!(grid.get(3, 3), Some(Tile::Floor));
    }

    #[test]
    fn test_smooth_all_wall_is_stable() {
        let mut grid = Grid::new(6, 6, Tile::Wall);
        assert_eq!(smooth(&mut grid), 0);
    }

    #[test]
    fn test_smooth_fixpoint_is_stable() {
        let mut grid = Grid::new(16, 16, Tile::Wall);
        random_fill(&mut grid, 45, &mut MapRng::new(9));
        // Drive to fixpoint, then one more pass must be a no-op
        for _ in 0..100 {
            if smooth(&mut grid) == 0 {
                break;
            }
        }
        assert_eq!(smooth(&mut grid), 0);
    }

    #[test]
    fn test_smooth_reads_snapshot() {
        // Two floor tiles in a wall field: each sees 7 wall neighbors in
        // the snapshot regardless of the other being flipped first.
        let mut grid = Grid::new(6, 6, Tile::Wall);
        grid.set(2, 2, Tile::Floor);
        grid.set(3, 2, Tile::Floor);
        let changed = smooth(&mut grid);
        assert_eq!(changed, 2);
        assert_eq!(grid.get(2, 2), Some(Tile::Wall));
        assert_eq!(grid.get(3, 2), Some(Tile::Wall));
    }
}
