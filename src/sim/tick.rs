//! Fixed timestep simulation step
//!
//! Advances the world by one tick: integrate, bounce, annihilate.

use super::collision::{first_annihilating_pair, reflect_off_borders};
use super::state::{Ball, World};

/// A red/green pair removed during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annihilation {
    /// Indices of the pair before removal, lower first
    pub indices: (usize, usize),
    /// The removed balls, at their post-integration positions
    pub balls: [Ball; 2],
}

impl World {
    /// Advance the simulation by one fixed tick.
    ///
    /// Border contact is tested against the post-integration position, so a
    /// ball overshoots the border by up to one velocity increment before it
    /// turns around, and a ball that sits on a border has its velocity
    /// flipped every tick. At most one pair is removed per step.
    pub fn step(&mut self) -> Option<Annihilation> {
        let config = self.config;
        self.time_ticks += 1;

        for ball in &mut self.balls {
            ball.integrate();
            reflect_off_borders(ball, &config);
        }

        let (i, j) = first_annihilating_pair(&self.balls, config.ball_size)?;
        // Higher index first so `i` still points at the same ball
        let second = self.balls.remove(j);
        let first = self.balls.remove(i);
        log::debug!(
            "Tick {}: annihilated balls {} and {} at ({:.1}, {:.1})",
            self.time_ticks,
            i,
            j,
            first.pos.x,
            first.pos.y
        );

        Some(Annihilation {
            indices: (i, j),
            balls: [first, second],
        })
    }
}
