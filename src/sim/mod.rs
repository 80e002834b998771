//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per frame tick, all work synchronous
//! - Seeded RNG only
//! - No rendering or platform dependencies (drawing goes through the
//!   `Renderer` trait, sound through `SoundService`)

pub mod draw;
pub mod state;
pub mod tick;
pub mod vector;

pub use state::{Actor, Ball, Bat, ControlSource, Impact, Match, RespawnPhase};
pub use tick::MatchInput;
pub use vector::{DegenerateVectorError, normalize};
