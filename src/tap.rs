//! Double-tap detection with a cancellable deadline.
//!
//! The meridiem section toggles AM/PM when tapped twice in quick
//! succession. The first tap remembers the section and arms a deadline;
//! a second tap on the same section before the deadline counts as the
//! double tap. The deadline wait lives on its own thread so nothing on
//! the event path blocks, and a generation counter makes arming atomically
//! cancel whatever timer was pending before.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

struct TapState {
    /// Section index of the unexpired first tap, if any.
    last: Option<usize>,
    /// Bumped on every arm/cancel; a deadline thread whose generation no
    /// longer matches is stale and does nothing.
    generation: u64,
}

struct TapShared {
    state: Mutex<TapState>,
    cond: Condvar,
}

/// Tracks taps on one widget and expires the "first tap" marker.
pub(crate) struct DoubleTapTimer {
    window: Duration,
    shared: Arc<TapShared>,
}

impl DoubleTapTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            shared: Arc::new(TapShared {
                state: Mutex::new(TapState {
                    last: None,
                    generation: 0,
                }),
                cond: Condvar::new(),
            }),
        }
    }

    /// Record a tap on `index`.
    ///
    /// Returns true when this tap completes a double tap: the previous
    /// tap hit the same section and its deadline has not expired. A
    /// fresh tap arms a new deadline, cancelling any pending one.
    pub fn register_tap(&mut self, index: usize) -> bool {
        let mut state = self.shared.state.lock();
        state.generation += 1;

        if state.last == Some(index) {
            state.last = None;
            self.shared.cond.notify_all();
            return true;
        }

        state.last = Some(index);
        let generation = state.generation;
        self.shared.cond.notify_all();
        drop(state);

        let shared = Arc::clone(&self.shared);
        let window = self.window;
        thread::spawn(move || {
            let deadline = Instant::now() + window;
            let mut state = shared.state.lock();
            while state.generation == generation {
                let timeout = deadline.saturating_duration_since(Instant::now());
                if timeout.is_zero() {
                    // Deadline reached: the next tap is a fresh first tap.
                    state.last = None;
                    return;
                }
                shared.cond.wait_for(&mut state, timeout);
            }
        });

        false
    }

    /// Forget any pending first tap and cancel its deadline.
    pub fn cancel(&mut self) {
        let mut state = self.shared.state.lock();
        state.last = None;
        state.generation += 1;
        self.shared.cond.notify_all();
    }
}

impl Drop for DoubleTapTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_tap_within_window() {
        let mut timer = DoubleTapTimer::new(Duration::from_millis(300));
        assert!(!timer.register_tap(3));
        assert!(timer.register_tap(3));
        // The double tap consumed the marker; the next tap is fresh.
        assert!(!timer.register_tap(3));
    }

    #[test]
    fn test_taps_spaced_apart_do_not_toggle() {
        let mut timer = DoubleTapTimer::new(Duration::from_millis(50));
        assert!(!timer.register_tap(3));
        thread::sleep(Duration::from_millis(150));
        // The deadline expired and cleared the marker.
        assert!(!timer.register_tap(3));
    }

    #[test]
    fn test_cancel_clears_pending_tap() {
        let mut timer = DoubleTapTimer::new(Duration::from_millis(300));
        assert!(!timer.register_tap(3));
        timer.cancel();
        assert!(!timer.register_tap(3));
    }

    #[test]
    fn test_rearm_cancels_previous_deadline() {
        let mut timer = DoubleTapTimer::new(Duration::from_millis(100));
        assert!(!timer.register_tap(3));
        thread::sleep(Duration::from_millis(60));
        // Tap on a different section re-arms; the old deadline firing
        // must not clear the new marker.
        assert!(!timer.register_tap(5));
        thread::sleep(Duration::from_millis(60));
        assert!(timer.register_tap(5));
    }
}
