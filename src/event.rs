//! Input event types delivered by the host toolkit.
//!
//! The widget does not own stdin or the event loop; the host converts its
//! native events into these types (see [`crate::bridge`] for the crossterm
//! conversion) and calls the matching `TimeInput` handler.

use crate::types::Point;

// =============================================================================
// Key Names
// =============================================================================

/// Named keys the widget reacts to. Printable characters are delivered
/// through `TimeInput::typed_rune` instead.
pub mod key {
    pub const ENTER: &str = "Enter";
    pub const BACKSPACE: &str = "Backspace";
    pub const ARROW_UP: &str = "ArrowUp";
    pub const ARROW_DOWN: &str = "ArrowDown";
    pub const ARROW_LEFT: &str = "ArrowLeft";
    pub const ARROW_RIGHT: &str = "ArrowRight";
    pub const HOME: &str = "Home";
    pub const END: &str = "End";
}

// =============================================================================
// Types
// =============================================================================

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers.
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl.
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "Enter", "ArrowUp").
    pub key: String,
    /// Modifier keys state.
    pub modifiers: Modifiers,
    /// Press/repeat/release state.
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers.
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event.
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

/// Mouse wheel event over the widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    /// Pointer position in the same coordinate space as the section rects.
    pub position: Point,
    /// Vertical scroll amount. Positive = scrolled up/away from the user.
    pub delta_y: f32,
}

impl ScrollEvent {
    pub fn new(position: Point, delta_y: f32) -> Self {
        Self { position, delta_y }
    }
}

// =============================================================================
// Tests
// =============================================================================
