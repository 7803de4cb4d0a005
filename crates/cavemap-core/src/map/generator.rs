//! The generation pipeline.
//!
//! Runs random fill, smoothing, region cleanup, room connection and
//! border wrapping as one synchronous pass over an exclusively owned
//! grid. Fully deterministic for a fixed config.

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::rng::{hash_seed, MapRng};

use super::border::with_border;
use super::connect::connect_all;
use super::fill::{random_fill, smooth};
use super::region::cull_small_regions;
use super::room::{build_rooms, Room, RoomId};
use super::{Grid, Tile};

/// Generator seed: a number, or a string hashed to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    /// The numeric seed fed to the RNG
    pub fn value(&self) -> u64 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => hash_seed(s),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Number(0)
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

/// Generation parameters.
///
/// Validated up front by [`MapConfig::validate`]; the pipeline itself
/// has no failure modes besides the ones in [`GenerationError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Grid width before border wrapping, at least 3
    pub width: u32,
    /// Grid height before border wrapping, at least 3
    pub height: u32,
    /// Probability (0-100) that an interior tile starts as wall
    pub fill_percent: u32,
    pub seed: Seed,
    /// Number of cellular-automaton passes
    pub smooth_passes: u32,
    /// Regions (wall or floor) below this tile count are flipped away
    pub min_region_size: u32,
    /// Disk radius used when carving passages
    pub passage_radius: u32,
    /// Thickness of the final wall ring
    pub border: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 36,
            fill_percent: 45,
            seed: Seed::default(),
            smooth_passes: 5,
            min_region_size: 10,
            passage_radius: 1,
            border: 1,
        }
    }
}

impl MapConfig {
    /// Reject parameter combinations the pipeline cannot run on.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.width < 3 {
            return Err(GenerationError::invalid(
                "width",
                format!("{} is too small to hold a wall border, need >= 3", self.width),
            ));
        }
        if self.height < 3 {
            return Err(GenerationError::invalid(
                "height",
                format!("{} is too small to hold a wall border, need >= 3", self.height),
            ));
        }
        if self.fill_percent > 100 {
            return Err(GenerationError::invalid(
                "fill_percent",
                format!("{} is not a percentage (0-100)", self.fill_percent),
            ));
        }
        Ok(())
    }
}

/// A finished map: the bordered grid plus room metadata.
///
/// Room and edge-tile coordinates index `grid`, border included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMap {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    /// Id of the largest room; always accessible, always unique
    pub main_room: RoomId,
}

/// Run the full pipeline: fill, smooth, cull, connect, wrap.
///
/// Deterministic: identical configs produce bit-identical maps.
pub fn generate(config: &MapConfig) -> Result<GeneratedMap, GenerationError> {
    config.validate()?;

    let mut grid = Grid::new(config.width as usize, config.height as usize, Tile::Wall);
    let mut rng = MapRng::new(config.seed.value());

    random_fill(&mut grid, config.fill_percent, &mut rng);
    for _ in 0..config.smooth_passes {
        smooth(&mut grid);
    }

    let min_size = config.min_region_size as usize;
    cull_small_regions(&mut grid, Tile::Wall, min_size);
    let floor_regions = cull_small_regions(&mut grid, Tile::Floor, min_size);
    if floor_regions.is_empty() {
        return Err(GenerationError::EmptyMap {
            min_region_size: config.min_region_size,
        });
    }

    let mut rooms = build_rooms(floor_regions, &grid);
    connect_all(&mut grid, &mut rooms, config.passage_radius as i32);

    // Should be unreachable given the accessibility loop, but a silent
    // violation here would corrupt every downstream consumer.
    if let Some(stranded) = rooms.iter().find(|r| !r.is_accessible_from_main_room) {
        return Err(GenerationError::UnreachableRoom {
            room: stranded.id.0,
        });
    }

    let grid = with_border(&grid, config.border as usize);
    for room in &mut rooms {
        room.translate(config.border as i32, config.border as i32);
    }

    Ok(GeneratedMap {
        grid,
        rooms,
        main_room: RoomId(0),
    })
}
