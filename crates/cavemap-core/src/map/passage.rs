//! Corridor carving: integer line walking and disk stamping.

use super::{Coord, Grid, Tile};

/// Compute the discrete line from `from` toward `to`.
///
/// Symmetric error-accumulation walk: the dominant axis steps every
/// iteration, the minor axis steps when the accumulator (seeded with
/// half the dominant length) overflows. Includes `from`, excludes `to`;
/// `to` is an edge tile of the destination room and already floor.
pub fn line_between(from: Coord, to: Coord) -> Vec<Coord> {
    let mut line = Vec::new();

    let mut x = from.x;
    let mut y = from.y;

    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let mut inverted = false;
    let mut step = dx.signum();
    let mut gradient_step = dy.signum();

    let mut longest = dx.abs();
    let mut shortest = dy.abs();

    if longest < shortest {
        inverted = true;
        longest = dy.abs();
        shortest = dx.abs();
        step = dy.signum();
        gradient_step = dx.signum();
    }

    let mut accumulator = longest / 2;
    for _ in 0..longest {
        line.push(Coord::new(x, y));

        if inverted {
            y += step;
        } else {
            x += step;
        }

        accumulator += shortest;
        if accumulator >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            accumulator -= longest;
        }
    }

    line
}

/// Stamp a disk of floor around a center tile.
///
/// Every offset with dx^2 + dy^2 <= radius^2 becomes floor; writes
/// outside the grid are dropped. Only ever converts wall to floor.
pub fn carve_disk(grid: &mut Grid, center: Coord, radius: i32) {
    for dx in -radius..=radius {
        for dy in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                grid.set(center.x + dx, center.y + dy, Tile::Floor);
            }
        }
    }
}

/// Carve a corridor between two tiles: a disk stamped along the line
/// connecting them. Guarantees a walkable path of width 2*radius+1,
/// with `to` itself being floor already as the destination edge tile.
pub fn carve_passage(grid: &mut Grid, from: Coord, to: Coord, radius: i32) {
    for tile in line_between(from, to) {
        carve_disk(grid, tile, radius);
    }
}
