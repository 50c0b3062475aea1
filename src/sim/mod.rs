//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one velocity increment per step)
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{balls_overlap, first_annihilating_pair, touches_border};
pub use state::{Ball, BallColor, SimConfig, World};
pub use tick::Annihilation;
