//! cavemap-core: procedural cave map generation
//!
//! Generates a 2D wall/floor grid with a cellular automaton, cleans up
//! undersized regions, promotes the surviving floor regions to rooms and
//! carves corridors until every room is reachable from the largest one.
//!
//! The crate is pure and deterministic: the same [`map::MapConfig`] always
//! produces the same map. Rendering, input handling and entropy-based
//! seeding belong to the caller.

pub mod error;
pub mod map;

mod rng;

pub use error::GenerationError;
pub use rng::MapRng;
