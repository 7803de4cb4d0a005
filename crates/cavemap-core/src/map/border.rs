//! Border wrapping.

use super::{Grid, Tile};

/// Wrap a grid in a ring of permanent wall.
///
/// Returns a new `(w + 2*border) x (h + 2*border)` grid with the source
/// copied into the interior. Pure: the source grid is untouched. The
/// pipeline feeds the wrapped grid onward as the final output and
/// shifts all room coordinates to match.
pub fn with_border(grid: &Grid, border: usize) -> Grid {
    let mut wrapped = Grid::new(
        grid.width() + border * 2,
        grid.height() + border * 2,
        Tile::Wall,
    );
    for coord in grid.coords() {
        if let Some(tile) = grid.tile(coord) {
            wrapped.set(coord.x + border as i32, coord.y + border as i32, tile);
        }
    }
    wrapped
}
