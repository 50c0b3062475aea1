//! Native window backed by minifb

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use super::{InputEvent, PlatformError, Surface};
use crate::renderer::FrameBuffer;

const BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

/// A window showing the framebuffer. Closed when dropped.
pub struct MinifbSurface {
    window: Window,
    width: usize,
    height: usize,
    /// Button state seen by the previous poll, for press-edge detection
    buttons_down: [bool; 3],
}

impl MinifbSurface {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, PlatformError> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| PlatformError::WindowInit(e.to_string()))?;
        log::info!("Opened {}x{} window \"{}\"", width, height, title);
        Ok(Self {
            window,
            width,
            height,
            buttons_down: [false; 3],
        })
    }

    /// Cursor position truncated to whole pixels, if inside the window
    fn cursor(&self) -> Option<(i32, i32)> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| (x as i32, y as i32))
    }
}

impl Surface for MinifbSurface {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if !self.window.is_open() || self.window.is_key_down(Key::Escape) {
            events.push(InputEvent::Quit);
        }

        let cursor = self.cursor();
        for (slot, button) in BUTTONS.into_iter().enumerate() {
            let down = self.window.get_mouse_down(button);
            let pressed = down && !self.buttons_down[slot];
            self.buttons_down[slot] = down;
            if let (true, Some((x, y))) = (pressed, cursor) {
                events.push(InputEvent::Click { x, y });
            }
        }

        events
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<(), PlatformError> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| PlatformError::Present(e.to_string()))
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}

impl Drop for MinifbSurface {
    fn drop(&mut self) {
        log::info!("Closing window");
    }
}
