//! Software framebuffer and the primitives used to draw the world

use crate::consts::BACKGROUND_COLOR;
use crate::sim::World;

/// A 0RGB pixel buffer, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a buffer filled with the background color
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND_COLOR; width * height],
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Pixel at (x, y), or None when out of bounds
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Fill a `side` x `side` square with top-left corner at (x, y).
    /// Parts outside the buffer are clipped.
    pub fn fill_square(&mut self, x: i32, y: i32, side: u32, color: u32) {
        let (x0, x1) = clip_span(x, side, self.width);
        let (y0, y1) = clip_span(y, side, self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = row * self.width;
            self.pixels[start + x0..start + x1].fill(color);
        }
    }

    /// Clear to the background and draw every ball in spawn order
    pub fn draw_world(&mut self, world: &World) {
        self.clear(BACKGROUND_COLOR);
        let side = world.config().ball_size.max(0.0) as u32;
        for ball in world {
            // `as` truncates toward zero, matching the integer cast of the position
            self.fill_square(ball.pos.x as i32, ball.pos.y as i32, side, ball.color.rgb());
        }
    }
}

/// Clamp the span [start, start + len) to [0, limit)
fn clip_span(start: i32, len: u32, limit: usize) -> (usize, usize) {
    let start = start as i64;
    let end = start + len as i64;
    let lo = start.clamp(0, limit as i64) as usize;
    let hi = end.clamp(0, limit as i64) as usize;
    (lo, hi)
}
