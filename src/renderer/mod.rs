//! Software rendering module
//!
//! Draws the world into a CPU pixel buffer; the platform layer presents it.

pub mod framebuffer;

pub use framebuffer::FrameBuffer;
