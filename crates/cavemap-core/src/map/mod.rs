//! Map generation pipeline
//!
//! Contains the grid container and the generation stages: random fill,
//! smoothing, region extraction and cleanup, room connection, corridor
//! carving and border wrapping.

mod border;
mod connect;
mod fill;
mod generator;
mod grid;
mod passage;
mod region;
mod room;

pub use border::with_border;
pub use connect::connect_all;
pub use fill::{random_fill, smooth};
pub use generator::{generate, GeneratedMap, MapConfig, Seed};
pub use grid::{Coord, Grid, Tile, CARDINAL_OFFSETS};
pub use passage::{carve_disk, carve_passage, line_between};
pub use region::{cull_small_regions, regions_of, Region};
pub use room::{build_rooms, Room, RoomId};
