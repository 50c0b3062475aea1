//! Frame loop
//!
//! Owns the platform surface and the world. Each frame polls input, steps the
//! simulation once, draws, presents and sleeps out the rest of the budget.

use crate::platform::{FramePacer, InputEvent, PlatformError, Surface};
use crate::renderer::FrameBuffer;
use crate::settings::Settings;
use crate::sim::World;

/// Game instance holding all state
pub struct App<S: Surface> {
    surface: S,
    world: World,
    frame: FrameBuffer,
    pacer: FramePacer,
    frames: u64,
    annihilations: u64,
}

impl<S: Surface> App<S> {
    pub fn new(surface: S, settings: &Settings) -> Self {
        let world = World::new(settings.sim_config());
        let pacer = FramePacer::with_budget(settings.frame_budget());
        Self::from_parts(surface, world, pacer)
    }

    pub fn from_parts(surface: S, world: World, pacer: FramePacer) -> Self {
        let (width, height) = surface.size();
        Self {
            surface,
            world,
            frame: FrameBuffer::new(width, height),
            pacer,
            frames: 0,
            annihilations: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The last drawn frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns false once a quit was requested.
    ///
    /// The frame that sees the quit is still stepped and presented.
    pub fn run_frame(&mut self) -> Result<bool, PlatformError> {
        self.pacer.begin_frame();

        let mut running = true;
        for event in self.surface.poll_events() {
            match event {
                InputEvent::Quit => running = false,
                InputEvent::Click { x, y } => self.world.spawn(x as f32, y as f32),
            }
        }

        if let Some(hit) = self.world.step() {
            self.annihilations += 1;
            log::debug!(
                "Annihilation #{} (balls {} and {}), {} left",
                self.annihilations,
                hit.indices.0,
                hit.indices.1,
                self.world.len()
            );
        }

        self.frame.draw_world(&self.world);
        self.surface.present(&self.frame)?;
        self.frames += 1;

        self.pacer.finish_frame();
        Ok(running)
    }

    /// Run until quit or a platform error
    pub fn run(&mut self) -> Result<(), PlatformError> {
        log::info!("Game loop running");
        while self.run_frame()? {}
        log::info!(
            "Game loop stopped after {} frames, {} annihilations",
            self.frames,
            self.annihilations
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BACKGROUND_COLOR, GREEN_COLOR, RED_COLOR};
    use crate::sim::{BallColor, SimConfig};
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Headless surface replaying canned input
    struct ScriptedSurface {
        script: VecDeque<Vec<InputEvent>>,
        presented: usize,
        fail_at: Option<usize>,
    }

    impl ScriptedSurface {
        fn new(script: Vec<Vec<InputEvent>>) -> Self {
            Self {
                script: script.into(),
                presented: 0,
                fail_at: None,
            }
        }
    }

    impl Surface for ScriptedSurface {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.script
                .pop_front()
                .unwrap_or_else(|| vec![InputEvent::Quit])
        }

        fn present(&mut self, _frame: &FrameBuffer) -> Result<(), PlatformError> {
            if self.fail_at == Some(self.presented) {
                return Err(PlatformError::Present("surface lost".into()));
            }
            self.presented += 1;
            Ok(())
        }

        fn size(&self) -> (usize, usize) {
            (100, 80)
        }
    }

    fn app(surface: ScriptedSurface) -> App<ScriptedSurface> {
        let world = World::new(SimConfig {
            arena_width: 100.0,
            arena_height: 80.0,
            ball_size: 10.0,
            ball_speed: 1.0,
        });
        App::from_parts(surface, world, FramePacer::with_budget(Duration::ZERO))
    }

    #[test]
    fn test_clicks_spawn_alternating_balls() {
        let surface = ScriptedSurface::new(vec![
            vec![InputEvent::Click { x: 10, y: 10 }],
            vec![],
            vec![InputEvent::Click { x: 60, y: 40 }],
        ]);
        let mut app = app(surface);

        assert!(app.run_frame().unwrap());
        assert!(app.run_frame().unwrap());
        assert!(app.run_frame().unwrap());

        let balls = app.world().balls();
        assert_eq!(balls.len(), 2);
        assert_eq!(balls[0].color, BallColor::Red);
        assert_eq!(balls[1].color, BallColor::Green);
        // Spawned on frame 1, stepped on frames 1..=3
        assert_eq!(balls[0].pos.x, 13.0);
        assert_eq!(balls[1].pos.x, 61.0);

        assert_eq!(app.frame().pixel(13, 13), Some(RED_COLOR));
        assert_eq!(app.frame().pixel(61, 41), Some(GREEN_COLOR));
        assert_eq!(app.frame().pixel(0, 0), Some(BACKGROUND_COLOR));
    }

    #[test]
    fn test_run_stops_on_quit_after_final_frame() {
        let surface = ScriptedSurface::new(vec![
            vec![],
            vec![InputEvent::Click { x: 20, y: 20 }, InputEvent::Quit],
        ]);
        let mut app = app(surface);

        app.run().unwrap();
        assert_eq!(app.frames(), 2);
        assert_eq!(app.surface().presented, 2);
        // The quit frame still handled its click and stepped
        assert_eq!(app.world().len(), 1);
        assert_eq!(app.world().time_ticks(), 2);
    }

    #[test]
    fn test_clicks_at_same_spot_annihilate() {
        let surface = ScriptedSurface::new(vec![vec![
            InputEvent::Click { x: 30, y: 30 },
            InputEvent::Click { x: 30, y: 30 },
        ]]);
        let mut app = app(surface);

        assert!(app.run_frame().unwrap());
        assert!(app.world().is_empty());
        assert!(app.frame().pixels.iter().all(|&p| p == BACKGROUND_COLOR));
    }

    #[test]
    fn test_present_error_stops_loop() {
        let mut surface = ScriptedSurface::new(vec![vec![], vec![], vec![]]);
        surface.fail_at = Some(1);
        let mut app = app(surface);

        let err = app.run().unwrap_err();
        assert_eq!(err, PlatformError::Present("surface lost".into()));
        assert_eq!(app.frames(), 1);
    }

    #[test]
    fn test_new_uses_settings() {
        let settings = Settings {
            arena_width: 100,
            arena_height: 80,
            ball_size: 12.0,
            fps: 1000,
            ..Settings::default()
        };
        let app = App::new(ScriptedSurface::new(vec![]), &settings);
        assert_eq!(app.world().config().ball_size, 12.0);
        assert_eq!(app.frame().width, 100);
        assert_eq!(app.frame().height, 80);
    }
}
