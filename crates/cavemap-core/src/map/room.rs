//! Rooms promoted from surviving floor regions.

use serde::{Deserialize, Serialize};

use super::{Coord, Grid, Region, CARDINAL_OFFSETS};

/// Stable room identifier, assigned at creation.
///
/// Doubles as the room's index in the generated room list; connections
/// are stored as adjacency lists of ids, never by comparing rooms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct RoomId(pub usize);

/// A room built from a qualifying floor region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Every floor tile of the region
    pub tiles: Vec<Coord>,
    /// Floor tiles with at least one cardinal wall neighbor, one entry
    /// per tile
    pub edge_tiles: Vec<Coord>,
    /// Tile count
    pub size: usize,
    /// Ids of directly connected rooms (symmetric)
    pub connections: Vec<RoomId>,
    pub is_main_room: bool,
    pub is_accessible_from_main_room: bool,
}

impl Room {
    /// Build a room from a floor region, computing its edge tiles
    /// against the current grid.
    fn from_region(id: RoomId, region: Region, grid: &Grid) -> Self {
        let mut edge_tiles = Vec::new();
        for &tile in &region.tiles {
            let touches_wall = CARDINAL_OFFSETS.iter().any(|&(dx, dy)| {
                grid.get(tile.x + dx, tile.y + dy)
                    .is_none_or(|t| t.is_wall())
            });
            if touches_wall {
                edge_tiles.push(tile);
            }
        }

        let size = region.tiles.len();
        Self {
            id,
            tiles: region.tiles,
            edge_tiles,
            size,
            connections: Vec::new(),
            is_main_room: false,
            is_accessible_from_main_room: false,
        }
    }

    /// Check whether this room is directly connected to another
    pub fn is_connected(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }

    /// Shift every stored coordinate, used when the border wrapper
    /// enlarges the grid.
    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        for tile in self.tiles.iter_mut().chain(self.edge_tiles.iter_mut()) {
            tile.x += dx;
            tile.y += dy;
        }
    }
}

/// Promote surviving floor regions to rooms.
///
/// Rooms are sorted descending by size; the largest becomes the main
/// room and starts out accessible from itself. Ids are assigned after
/// sorting, so `RoomId(0)` is always the main room.
pub fn build_rooms(regions: Vec<Region>, grid: &Grid) -> Vec<Room> {
    let mut regions = regions;
    regions.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut rooms: Vec<Room> = regions
        .into_iter()
        .enumerate()
        .map(|(i, region)| Room::from_region(RoomId(i), region, grid))
        .collect();

    if let Some(main) = rooms.first_mut() {
        main.is_main_room = true;
        main.is_accessible_from_main_room = true;
    }
    rooms
}
