//! Slide-in animation for the page panels

use std::time::{Duration, Instant};

/// Rows the panels start below their resting place
pub const REVEAL_DISTANCE: u16 = 3;

/// Panel slide-in state
#[derive(Debug)]
pub struct RevealState {
    pub start_time: Instant,
    /// Rows still left to travel
    pub offset: u16,
    complete: bool,
}

impl RevealState {
    /// Length of the slide (eased)
    const DURATION: Duration = Duration::from_millis(600);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            offset: REVEAL_DISTANCE,
            complete: false,
        }
    }

    /// Advance the animation based on elapsed time
    pub fn update(&mut self) {
        if self.complete {
            return;
        }
        let elapsed = self.start_time.elapsed();
        if elapsed >= Self::DURATION {
            self.skip();
            return;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        self.offset = ((1.0 - eased) * REVEAL_DISTANCE as f32).round() as u16;
    }

    /// Jump to the resting position (user pressed a key)
    pub fn skip(&mut self) {
        self.offset = 0;
        self.complete = true;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_fully_offset() {
        let state = RevealState::new();
        assert_eq!(state.offset, REVEAL_DISTANCE);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_skip_completes_at_rest() {
        let mut state = RevealState::new();
        state.skip();
        assert!(state.is_complete());
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_update_right_after_start_stays_offset() {
        let mut state = RevealState::new();
        state.update();
        assert!(!state.is_complete());
        assert!(state.offset > 0);
    }

    #[test]
    fn test_update_after_duration_completes() {
        let mut state = RevealState::new();
        state.start_time = Instant::now() - Duration::from_millis(700);
        state.update();
        assert!(state.is_complete());
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn test_update_midway_moves_panels() {
        let mut state = RevealState::new();
        state.start_time = Instant::now() - Duration::from_millis(300);
        state.update();
        assert!(state.offset < REVEAL_DISTANCE);
    }

    #[test]
    fn test_update_after_complete_is_noop() {
        let mut state = RevealState::new();
        state.skip();
        state.update();
        assert_eq!(state.offset, 0);
    }
}
