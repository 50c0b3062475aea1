//! Platform abstraction layer
//!
//! Handles the native window and its surroundings:
//! - Input events (quit, mouse clicks)
//! - Presenting a finished frame
//! - Frame pacing

pub mod pacing;
pub mod window;

use std::fmt::{self, Display};

use crate::renderer::FrameBuffer;

pub use pacing::FramePacer;
pub use window::MinifbSurface;

/// Discrete input delivered to the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed or Escape pressed
    Quit,
    /// Mouse button pressed at a window pixel
    Click { x: i32, y: i32 },
}

/// Platform failures. Every variant states where things went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Creating the window failed
    WindowInit(String),
    /// Pushing a frame to the window failed
    Present(String),
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::WindowInit(s) => write!(f, "Window init error: {s}"),
            PlatformError::Present(s) => write!(f, "Window present error: {s}"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Something that produces input and displays frames
pub trait Surface {
    /// Drain input gathered since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Display a finished frame
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), PlatformError>;

    /// Drawable size in pixels
    fn size(&self) -> (usize, usize);
}
