//! Cursor blink animation.
//!
//! The text cursor pulses between a dim and a fully opaque accent color.
//! Typing interrupts the pulse: while the last keystroke is less than
//! [`INTERRUPT_WINDOW`] ago the cursor holds fully opaque, and when the
//! window lapses the pulse resumes from the opaque end of the cycle so
//! the transition is continuous instead of jumping back to dim.
//!
//! The blink itself is a pure state machine ([`BlinkCycle`]) stepped by
//! `tick(now, ..)`, so the interrupt and resume behavior is testable
//! without a render loop. [`CursorAnimation`] wraps it in a background
//! thread that keeps a shared cursor drawable up to date.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::types::Rgba;

/// How long after a keystroke the cursor stays solid.
pub const INTERRUPT_WINDOW: Duration = Duration::from_millis(300);

/// One leg of the blink (dim to opaque, or back).
pub const HALF_PERIOD: Duration = Duration::from_millis(500);

/// Alpha of the dim end of the pulse.
const DIM_ALPHA: u8 = 0x16;

/// Animation thread tick interval.
const TICK: Duration = Duration::from_millis(16);

// =============================================================================
// Blink State Machine
// =============================================================================

/// Blink machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkState {
    /// Interpolating naturally.
    Running,
    /// Held fully opaque by a recent keystroke.
    Interrupted,
}

/// The blink interpolation itself, decoupled from threads and clocks.
#[derive(Debug)]
pub struct BlinkCycle {
    dim: Rgba,
    opaque: Rgba,
    /// Start of the current run of uninterrupted interpolation.
    origin: Instant,
    /// An inverted run starts at the opaque end. Used when resuming
    /// after an interrupt, where the cursor is already solid.
    inverted: bool,
    state: BlinkState,
}

impl BlinkCycle {
    pub fn new(opaque: Rgba, now: Instant) -> Self {
        Self {
            dim: opaque.with_alpha(DIM_ALPHA),
            opaque,
            origin: now,
            inverted: false,
            state: BlinkState::Running,
        }
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    /// Advance to `now` and produce the cursor color.
    ///
    /// While `now` is within [`INTERRUPT_WINDOW`] of `last_interrupt` the
    /// result is pinned fully opaque. On the first tick after the window
    /// lapses, a fresh run starts from the opaque end so the color picks
    /// up exactly where the pinned cursor left it.
    pub fn tick(&mut self, now: Instant, last_interrupt: Option<Instant>) -> Rgba {
        let interrupted = last_interrupt
            .is_some_and(|at| now.saturating_duration_since(at) <= INTERRUPT_WINDOW);

        if interrupted {
            self.state = BlinkState::Interrupted;
            return self.opaque;
        }

        if self.state == BlinkState::Interrupted {
            self.state = BlinkState::Running;
            self.inverted = true;
            self.origin = now;
        }

        self.color_at(now.saturating_duration_since(self.origin))
    }

    /// Triangle-wave interpolation with auto-reverse: dim -> opaque ->
    /// dim -> ... with each leg taking [`HALF_PERIOD`].
    fn color_at(&self, elapsed: Duration) -> Rgba {
        let legs = elapsed.as_secs_f32() / HALF_PERIOD.as_secs_f32();
        let phase = legs.fract();
        let mut t = if (legs as u64) % 2 == 0 { phase } else { 1.0 - phase };
        if self.inverted {
            t = 1.0 - t;
        }
        Rgba::lerp(self.dim, self.opaque, t)
    }
}

// =============================================================================
// Cursor Drawable
// =============================================================================

/// What the host renderer needs to draw the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorDrawable {
    pub fill: Rgba,
    pub visible: bool,
}

impl CursorDrawable {
    fn hidden() -> Self {
        Self {
            fill: Rgba::TRANSPARENT,
            visible: false,
        }
    }
}

// =============================================================================
// Animation Driver
// =============================================================================

/// Background-driven cursor blink.
///
/// `start` is idempotent, `stop` is safe to call repeatedly and from
/// teardown, and `interrupt` only stamps a timestamp so it is cheap to
/// call on every keystroke from any thread.
pub struct CursorAnimation {
    cursor: Arc<RwLock<CursorDrawable>>,
    last_interrupt: Arc<RwLock<Option<Instant>>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    opaque: Rgba,
}

impl CursorAnimation {
    /// Create a stopped animation pulsing toward `accent`.
    pub fn new(accent: Rgba) -> Self {
        Self {
            cursor: Arc::new(RwLock::new(CursorDrawable::hidden())),
            last_interrupt: Arc::new(RwLock::new(None)),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
            opaque: accent,
        }
    }

    /// Shared handle to the cursor drawable, for the host renderer.
    pub fn drawable_handle(&self) -> Arc<RwLock<CursorDrawable>> {
        Arc::clone(&self.cursor)
    }

    /// Snapshot of the current cursor drawable.
    pub fn drawable(&self) -> CursorDrawable {
        *self.cursor.read()
    }

    /// Start blinking. No-op if already running.
    pub fn start(&mut self) {
        if self.running.load(Ordering::SeqCst) {
            return;
        }
        tracing::trace!("cursor animation started");

        // Each run owns a fresh flag, so stopping only ever ends the
        // current thread. A thread from an earlier run that is still
        // winding down cannot be revived by a later start.
        let running = Arc::new(AtomicBool::new(true));
        self.running = Arc::clone(&running);

        let cursor = Arc::clone(&self.cursor);
        let last_interrupt = Arc::clone(&self.last_interrupt);
        let opaque = self.opaque;

        self.handle = Some(thread::spawn(move || {
            let mut cycle = BlinkCycle::new(opaque, Instant::now());
            loop {
                let fill = cycle.tick(Instant::now(), *last_interrupt.read());
                {
                    // Re-check under the lock: stop() clears the flag
                    // before hiding the cursor, so once it is cleared
                    // this run never paints again.
                    let mut drawable = cursor.write();
                    if !running.load(Ordering::SeqCst) {
                        return;
                    }
                    drawable.fill = fill;
                    drawable.visible = true;
                }
                thread::sleep(TICK);
            }
        }));
    }

    /// Hold the cursor solid for [`INTERRUPT_WINDOW`] from now.
    pub fn interrupt(&self) {
        *self.last_interrupt.write() = Some(Instant::now());
    }

    /// Stop blinking and hide the cursor.
    ///
    /// Does not block on the animation thread; it observes the cleared
    /// running flag within one tick and exits, and the cursor stays
    /// hidden until the next start.
    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::trace!("cursor animation stopped");
        }
        self.handle = None;
        *self.cursor.write() = CursorDrawable::hidden();
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for CursorAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Tests
// =============================================================================
