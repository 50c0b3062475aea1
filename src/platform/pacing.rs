//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame's time budget
#[derive(Debug)]
pub struct FramePacer {
    budget: Duration,
    frame_start: Instant,
}

impl FramePacer {
    /// Budget of `1000 / fps` whole milliseconds. An fps of 0 is treated as 1.
    pub fn new(fps: u32) -> Self {
        Self::with_budget(frame_budget(fps))
    }

    pub fn with_budget(budget: Duration) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Mark the start of a frame
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in the budget after `elapsed`, if any
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleep until the frame budget is used up. Returns the time slept.
    pub fn finish_frame(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        match self.remaining(elapsed) {
            Some(idle) => {
                std::thread::sleep(idle);
                idle
            }
            None => {
                log::trace!("Frame over budget: {:?} > {:?}", elapsed, self.budget);
                Duration::ZERO
            }
        }
    }
}

/// Per-frame budget for a target rate, in whole milliseconds
pub fn frame_budget(fps: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(fps.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_truncates_to_millis() {
        assert_eq!(frame_budget(60), Duration::from_millis(16));
        assert_eq!(frame_budget(1), Duration::from_millis(1000));
        assert_eq!(frame_budget(0), Duration::from_millis(1000));
        assert_eq!(frame_budget(2000), Duration::ZERO);
    }

    #[test]
    fn test_remaining() {
        let pacer = FramePacer::new(60);
        assert_eq!(
            pacer.remaining(Duration::from_millis(10)),
            Some(Duration::from_millis(6))
        );
        assert_eq!(pacer.remaining(Duration::from_millis(16)), None);
        assert_eq!(pacer.remaining(Duration::from_millis(40)), None);
    }

    #[test]
    fn test_finish_frame_sleeps_out_budget() {
        let mut pacer = FramePacer::with_budget(Duration::from_millis(5));
        let start = Instant::now();
        pacer.begin_frame();
        pacer.finish_frame();
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn test_zero_budget_never_sleeps() {
        let mut pacer = FramePacer::with_budget(Duration::ZERO);
        pacer.begin_frame();
        assert_eq!(pacer.finish_frame(), Duration::ZERO);
    }
}
