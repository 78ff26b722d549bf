//! The city board: areas, their adjacency and their occupancy.
//!
//! ## Key Types
//!
//! - `Area`: one of the twelve fixed areas (static data)
//! - `AdjacencyGraph`: symmetric adjacency, built once
//! - `Board` / `BoardAreaState`: per-area minions, building, trolls, demons
//!   and trouble marker

pub mod adjacency;
pub mod area;
pub mod registry;

pub use adjacency::{AdjacencyGraph, Neighbors};
pub use area::{Area, AREA_COUNT};
pub use registry::{Board, BoardAreaState};
