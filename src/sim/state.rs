//! World state and core simulation types

use glam::Vec2;

use crate::consts::*;

/// Ball color; balls of different colors annihilate on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallColor {
    #[default]
    Red,
    Green,
}

impl BallColor {
    /// The other color
    pub fn flipped(self) -> Self {
        match self {
            BallColor::Red => BallColor::Green,
            BallColor::Green => BallColor::Red,
        }
    }

    /// Fill color in 0RGB
    pub fn rgb(self) -> u32 {
        match self {
            BallColor::Red => RED_COLOR,
            BallColor::Green => GREEN_COLOR,
        }
    }
}

/// A ball. `pos` is the top-left corner of its square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: BallColor,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, color: BallColor) -> Self {
        Self { pos, vel, color }
    }

    /// Advance by one velocity increment
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

/// Arena and ball parameters for a world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    /// Ball square side, also the collision distance threshold
    pub ball_size: f32,
    /// Speed applied on both axes at spawn
    pub ball_speed: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH as f32,
            arena_height: ARENA_HEIGHT as f32,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) config: SimConfig,
    /// Active balls in spawn order
    pub(crate) balls: Vec<Ball>,
    /// Color given to the next spawned ball
    next_color: BallColor,
    /// Completed steps
    pub(crate) time_ticks: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl World {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            balls: Vec::new(),
            next_color: BallColor::Red,
            time_ticks: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Spawn a ball at (x, y) moving down-right, then flip the spawn color.
    ///
    /// Coordinates are not validated; a ball outside the arena bounces back
    /// once it has moved.
    pub fn spawn(&mut self, x: f32, y: f32) {
        let speed = self.config.ball_speed;
        let color = self.next_color;
        self.balls
            .push(Ball::new(Vec2::new(x, y), Vec2::splat(speed), color));
        self.next_color = color.flipped();
        log::debug!("Spawned {:?} ball at ({}, {})", color, x, y);
    }

    /// Insert a ball as-is, bypassing the spawn rules. Does not touch the
    /// spawn color.
    pub fn push_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Color the next `spawn` will use
    pub fn next_color(&self) -> BallColor {
        self.next_color
    }

    /// Read-only snapshot for rendering
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ball> {
        self.balls.iter()
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Ball;
    type IntoIter = std::slice::Iter<'a, Ball>;

    fn into_iter(self) -> Self::IntoIter {
        self.balls.iter()
    }
}
