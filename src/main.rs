//! Shooting Balls entry point
//!
//! Sets up logging, settings and the window, then runs the game loop.

use std::process::ExitCode;

use shooting_balls::platform::MinifbSurface;
use shooting_balls::{App, Settings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Shooting Balls starting...");

    let settings = Settings::load();
    let (width, height) = settings.window_size();

    let surface = match MinifbSurface::new(&settings.window_title, width, height) {
        Ok(surface) => surface,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(surface, &settings);
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
