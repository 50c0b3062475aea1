//! Shooting Balls - click to shoot balls, opposite colors annihilate
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, border bounce, annihilation)
//! - `renderer`: Software framebuffer drawing
//! - `platform`: Window, input and frame pacing
//! - `app`: Frame loop tying the platform to the simulation
//! - `settings`: Configuration with defaults

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use settings::Settings;
pub use sim::{Ball, BallColor, SimConfig, World};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (also the window size)
    pub const ARENA_WIDTH: u32 = 1700;
    pub const ARENA_HEIGHT: u32 = 900;

    /// Side length of a ball's square, and the collision distance threshold
    pub const BALL_SIZE: f32 = 190.0;
    /// Per-tick speed on each axis for a freshly spawned ball
    pub const BALL_SPEED: f32 = 2.5;

    /// Target simulation steps per second
    pub const FPS: u32 = 60;

    pub const WINDOW_TITLE: &str = "Shooting Ball Game";

    /// Colors in minifb's 0RGB layout
    pub const BACKGROUND_COLOR: u32 = 0x00_00_00_00;
    pub const RED_COLOR: u32 = 0x00_FF_00_00;
    pub const GREEN_COLOR: u32 = 0x00_00_FF_00;
}
