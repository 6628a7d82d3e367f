//! # timefield
//!
//! Segmented time-of-day input widget for terminal UIs.
//!
//! A `TimeInput` edits a clock time through a fixed sequence of bounded
//! sections (hour, minute, optional second, optional AM/PM) with
//! keyboard, mouse-wheel, tap, and clipboard editing, plus a blinking
//! text-cursor animation that pauses while the user types.
//!
//! The widget is host-agnostic: it owns the editing state machine and
//! nothing else. The host toolkit delivers events (directly or through
//! the [`bridge`] crossterm adapter), draws the section texts and cursor
//! drawable, and performs the side effects each handler reports back via
//! [`Response`] flags.
//!
//! ## Modules
//!
//! - [`types`] - Geometry, color, and handler response flags
//! - [`event`] - Keyboard and scroll event types
//! - [`time_input`] - The widget and its editing state machine
//! - [`animate`] - Cursor blink animation
//! - [`clock`] - Clock value parsing, formatting, and rounding
//! - [`clipboard`] - Clipboard interface and in-memory fallback
//! - [`bridge`] - Crossterm event conversion

pub mod animate;
pub mod bridge;
pub mod clipboard;
pub mod clock;
pub mod event;
mod section;
mod tap;
pub mod time_input;
pub mod types;

// Re-export commonly used items
pub use animate::{
    BlinkCycle, BlinkState, CursorAnimation, CursorDrawable, HALF_PERIOD, INTERRUPT_WINDOW,
};
pub use clipboard::{Clipboard, MemoryClipboard};
pub use clock::ParseClockError;
pub use event::{KeyState, KeyboardEvent, Modifiers, ScrollEvent, key};
pub use time_input::{DOUBLE_TAP_WINDOW, Shortcut, TimeInput, TimeInputConfig};
pub use types::{Point, Rect, Response, Rgba, Size};
