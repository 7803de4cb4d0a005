//! Grid container and tile types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Cardinal (plus-pattern) neighbor offsets.
///
/// Flood fill and edge detection connect through these four neighbors
/// only; smoothing counts the full 3x3 ring. The two rules are
/// intentionally different.
pub const CARDINAL_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Tile type
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    Floor = 0,
    #[default]
    Wall = 1,
}

impl Tile {
    /// Check if this is a wall tile
    pub const fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// The other tile type
    pub const fn opposite(&self) -> Tile {
        match self {
            Tile::Floor => Tile::Wall,
            Tile::Wall => Tile::Floor,
        }
    }

    /// Get the display character for this tile
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
        }
    }
}

/// A grid position
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another coordinate
    pub fn distance_squared(&self, other: Coord) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// A fixed-size 2D tile grid, row-major.
///
/// Allocated once per generation run and mutated in place through the
/// pipeline. All accessors are bounds-checked; out-of-range writes are
/// no-ops rather than panics, since the carver and smoother routinely
/// probe past the edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Create a grid filled with a single tile type
    pub fn new(width: usize, height: usize, fill: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether a position lies inside the grid
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    pub(crate) fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width + x as usize
    }

    /// Get the tile at a position, None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.tiles[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set the tile at a position; out-of-bounds writes are ignored
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.tiles[idx] = tile;
        }
    }

    /// Get the tile at a coordinate, None if out of bounds
    pub fn tile(&self, coord: Coord) -> Option<Tile> {
        self.get(coord.x, coord.y)
    }

    /// Set the tile at a coordinate; out-of-bounds writes are ignored
    pub fn set_tile(&mut self, coord: Coord, tile: Tile) {
        self.set(coord.x, coord.y, tile);
    }

    /// Check whether a coordinate lies on the outermost ring
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        x == 0 || y == 0 || x as usize == self.width - 1 || y as usize == self.height - 1
    }

    /// Iterate over all coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Coord::new(x, y)))
    }

    /// Count floor tiles
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_wall()).count()
    }

    /// Render the grid as ASCII art, one row per line
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                out.push(self.tiles[self.index(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_uniform() {
        let grid = Grid::new(4, 3, Tile::Wall);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert!(grid.coords().all(|c| grid.tile(c) == Some(Tile::Wall)));
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(3, 3, Tile::Wall);
        grid.set(1, 1, Tile::Floor);
        assert_eq!(grid.get(1, 1), Some(Tile::Floor));
        assert_eq!(grid.get(0, 0), Some(Tile::Wall));
    }

    #[test]
    fn test_out_of_bounds_is_safe() {
        let mut grid = Grid::new(3, 3, Tile::Wall);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        // OOB writes must not panic
        grid.set(-1, -1, Tile::Floor);
        grid.set(99, 99, Tile::Floor);
        assert_eq!(grid.floor_count(), 0);
    }

    #[test]
    fn test_coords_row_major() {
        let grid = Grid::new(2, 2, Tile::Wall);
        let coords: Vec<Coord> = grid.coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_render() {
        let mut grid = Grid::new(3, 2, Tile::Wall);
        grid.set(1, 0, Tile::Floor);
        assert_eq!(grid.render(), "#.#\n###\n");
    }

    #[test]
    fn test_distance_squared() {
        let a = Coord::new(2, 2);
        let b = Coord::new(5, 6);
        assert_eq!(a.distance_squared(b), 25);
        assert_eq!(b.distance_squared(a), 25);
        assert_eq!(a.distance_squared(a), 0);
    }
}
