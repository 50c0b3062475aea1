//! Collision tests for balls against the arena borders and each other

use glam::BVec2;

use super::state::{Ball, SimConfig};

/// Per-axis border contact for a ball's current position.
///
/// An axis is in contact when the leading edge is at or below 0 or the
/// trailing edge (`pos + size`) is at or beyond the arena extent.
pub fn touches_border(ball: &Ball, config: &SimConfig) -> BVec2 {
    let size = config.ball_size;
    BVec2::new(
        ball.pos.x <= 0.0 || ball.pos.x + size >= config.arena_width,
        ball.pos.y <= 0.0 || ball.pos.y + size >= config.arena_height,
    )
}

/// Reflect velocity on every axis currently touching a border
pub fn reflect_off_borders(ball: &mut Ball, config: &SimConfig) {
    let contact = touches_border(ball, config);
    if contact.x {
        ball.vel.x = -ball.vel.x;
    }
    if contact.y {
        ball.vel.y = -ball.vel.y;
    }
}

/// True when the balls' positions are strictly closer than `size`
pub fn balls_overlap(a: &Ball, b: &Ball, size: f32) -> bool {
    a.pos.distance(b.pos) < size
}

/// First pair (i, j), i < j, scanning i then j ascending, that overlaps and
/// has different colors.
pub fn first_annihilating_pair(balls: &[Ball], size: f32) -> Option<(usize, usize)> {
    for (i, a) in balls.iter().enumerate() {
        for (j, b) in balls.iter().enumerate().skip(i + 1) {
            if a.color != b.color && balls_overlap(a, b, size) {
                return Some((i, j));
            }
        }
    }
    None
}
