//! Room graph connection.
//!
//! Two passes over the room list:
//! 1. a greedy pass giving every still-isolated room its nearest
//!    neighbor, and
//! 2. an accessibility loop that repeatedly carves the single closest
//!    passage between the rooms reachable from the main room and the
//!    rooms that are not, until none are left outside.

use super::passage::carve_passage;
use super::room::{Room, RoomId};
use super::{Coord, Grid};

/// The best edge-tile pair found during a search pass.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: i64,
    tile_a: Coord,
    tile_b: Coord,
    room_a: RoomId,
    room_b: RoomId,
}

/// Connect every room to the main room, carving passages into the grid.
///
/// Never removes a connection; running it on an already fully connected
/// room set finds no candidates and does nothing. Accessibility is
/// checked by the caller afterward.
pub fn connect_all(grid: &mut Grid, rooms: &mut [Room], passage_radius: i32) {
    greedy_pass(grid, rooms, passage_radius);
    accessibility_pass(grid, rooms, passage_radius);
}

/// Give every room with no connections yet its globally nearest
/// neighbor, carving each best pair as soon as it is found.
fn greedy_pass(grid: &mut Grid, rooms: &mut [Room], passage_radius: i32) {
    for a in 0..rooms.len() {
        if !rooms[a].connections.is_empty() {
            continue;
        }
        let a_id = rooms[a].id;
        let candidate = nearest_pair(&rooms[a], rooms.iter().filter(|b| b.id != a_id));
        if let Some(c) = candidate {
            create_passage(grid, rooms, c, passage_radius);
        }
    }
}

/// Repeatedly connect the closest (inaccessible, accessible) pair until
/// every room is reachable from the main room.
///
/// Each carve marks at least the inaccessible side accessible, so the
/// loop strictly shrinks the outside partition and terminates.
fn accessibility_pass(grid: &mut Grid, rooms: &mut [Room], passage_radius: i32) {
    loop {
        let mut best: Option<Candidate> = None;

        for a in rooms.iter().filter(|r| !r.is_accessible_from_main_room) {
            let candidate =
                nearest_pair(a, rooms.iter().filter(|b| b.is_accessible_from_main_room));
            if let Some(c) = candidate {
                // Strict < keeps the first pair found on ties
                if best.is_none_or(|b| c.distance < b.distance) {
                    best = Some(c);
                }
            }
        }

        match best {
            Some(c) => create_passage(grid, rooms, c, passage_radius),
            None => break,
        }
    }
}

/// Find the closest edge-tile pair between a room and any room in the
/// given set, skipping rooms already connected to it.
fn nearest_pair<'a>(
    room: &Room,
    others: impl Iterator<Item = &'a Room>,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for other in others {
        if room.is_connected(other.id) {
            continue;
        }
        for &tile_a in &room.edge_tiles {
            for &tile_b in &other.edge_tiles {
                let distance = tile_a.distance_squared(tile_b);
                if best.is_none_or(|b| distance < b.distance) {
                    best = Some(Candidate {
                        distance,
                        tile_a,
                        tile_b,
                        room_a: room.id,
                        room_b: other.id,
                    });
                }
            }
        }
    }
    best
}

/// Record the connection and physically carve it.
fn create_passage(grid: &mut Grid, rooms: &mut [Room], c: Candidate, passage_radius: i32) {
    connect_rooms(rooms, c.room_a, c.room_b);
    carve_passage(grid, c.tile_a, c.tile_b, passage_radius);
}

/// Add a symmetric connection between two rooms.
///
/// Accessibility propagates one level deep per call (the newly reached
/// room and its direct neighbors); the accessibility loop converges the
/// rest across iterations.
pub(crate) fn connect_rooms(rooms: &mut [Room], a: RoomId, b: RoomId) {
    if rooms[a.0].is_accessible_from_main_room {
        mark_accessible(rooms, b);
    } else if rooms[b.0].is_accessible_from_main_room {
        mark_accessible(rooms, a);
    }
    rooms[a.0].connections.push(b);
    rooms[b.0].connections.push(a);
}

/// Mark a room accessible along with its direct neighbors.
fn mark_accessible(rooms: &mut [Room], id: RoomId) {
    if rooms[id.0].is_accessible_from_main_room {
        return;
    }
    rooms[id.0].is_accessible_from_main_room = true;
    let neighbors = rooms[id.0].connections.clone();
    for n in neighbors {
        rooms[n.0].is_accessible_from_main_room = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{build_rooms, regions_of, Tile};

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows[0].len(), rows.len(), Tile::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    grid.set(x as i32, y as i32, Tile::Floor);
                }
            }
        }
        grid
    }

    fn rooms_of(grid: &Grid) -> Vec<Room> {
        build_rooms(regions_of(grid, Tile::Floor), grid)
    }

    #[test]
    fn test_two_rooms_get_connected() {
        let mut grid = grid_from(&[
            "###########",
            "#...###...#",
            "#...###...#",
            "#...###...#",
            "###########",
        ]);
        let mut rooms = rooms_of(&grid);
        connect_all(&mut grid, &mut rooms, 1);

        assert!(rooms[0].is_connected(rooms[1].id));
        assert!(rooms[1].is_connected(rooms[0].id));
        assert!(rooms.iter().all(|r| r.is_accessible_from_main_room));
        // The wall between them was breached
        let breached = (4..=6).any(|x| (1..=3).any(|y| grid.get(x, y) == Some(Tile::Floor)));
        assert!(breached);
    }

    #[test]
    fn test_three_rooms_all_accessible() {
        let mut grid = grid_from(&[
            "#################",
            "#...##....##....#",
            "#...##....##....#",
            "#################",
        ]);
        let mut rooms = rooms_of(&grid);
        connect_all(&mut grid, &mut rooms, 1);

        assert!(rooms.iter().all(|r| r.is_accessible_from_main_room));
        assert!(rooms.iter().all(|r| !r.connections.is_empty()));
    }

    #[test]
    fn test_idempotent_on_connected_set() {
        let mut grid = grid_from(&[
            "###########",
            "#...###...#",
            "#...###...#",
            "###########",
        ]);
        let mut rooms = rooms_of(&grid);
        connect_all(&mut grid, &mut rooms, 1);

        let counts: Vec<usize> = rooms.iter().map(|r| r.connections.len()).collect();
        let grid_before = grid.clone();
        connect_all(&mut grid, &mut rooms, 1);

        let counts_after: Vec<usize> = rooms.iter().map(|r| r.connections.len()).collect();
        assert_eq!(counts, counts_after);
        assert_eq!(grid, grid_before);
    }

    #[test]
    fn test_single_room_needs_no_connection() {
        let mut grid = grid_from(&[
            "#####",
            "#...#",
            "#...#",
            "#####",
        ]);
        let mut rooms = rooms_of(&grid);
        connect_all(&mut grid, &mut rooms, 1);
        assert!(rooms[0].connections.is_empty());
        assert!(rooms[0].is_accessible_from_main_room);
    }

    #[test]
    fn test_connect_rooms_is_symmetric() {
        let grid = grid_from(&[
            "#########",
            "#..###..#",
            "#########",
        ]);
        let mut rooms = rooms_of(&grid);
        connect_rooms(&mut rooms, RoomId(0), RoomId(1));
        assert!(rooms[0].is_connected(RoomId(1)));
        assert!(rooms[1].is_connected(RoomId(0)));
        // Main room was accessible, so the other side became accessible
        assert!(rooms[1].is_accessible_from_main_room);
    }

    #[test]
    fn test_nearest_pair_prefers_closest_room() {
        let mut grid = grid_from(&[
            "####################",
            "#..#################",
            "#..####..###########",
            "####################",
            "####################",
            "#................###",
            "####################",
        ]);
        let mut rooms = rooms_of(&grid);
        connect_all(&mut grid, &mut rooms, 0);
        // All accessible regardless of which pairs were chosen
        assert!(rooms.iter().all(|r| r.is_accessible_from_main_room));
    }
}
