//! Crossterm event bridge.
//!
//! Converts crossterm's event types into widget calls for hosts that
//! drive the widget from a terminal event loop. Hosts on other toolkits
//! can skip this module and call the `TimeInput` handlers directly.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
};

use crate::clipboard::Clipboard;
use crate::event::{KeyState, KeyboardEvent, Modifiers, ScrollEvent, key};
use crate::time_input::{Shortcut, TimeInput};
use crate::types::{Point, Response};

// =============================================================================
// Conversion
// =============================================================================

/// Convert a crossterm key event to a widget keyboard event.
///
/// Returns None for printable characters (those go through
/// `typed_rune`) and for keys the widget has no use for.
pub fn convert_key_event(event: &CrosstermKeyEvent) -> Option<KeyboardEvent> {
    let name = match event.code {
        KeyCode::Enter => key::ENTER,
        KeyCode::Backspace => key::BACKSPACE,
        KeyCode::Up => key::ARROW_UP,
        KeyCode::Down => key::ARROW_DOWN,
        KeyCode::Left => key::ARROW_LEFT,
        KeyCode::Right => key::ARROW_RIGHT,
        KeyCode::Home => key::HOME,
        KeyCode::End => key::END,
        _ => return None,
    };

    Some(KeyboardEvent {
        key: name.to_string(),
        modifiers: convert_modifiers(event.modifiers),
        state: convert_key_state(event.kind),
    })
}

/// Convert crossterm KeyModifiers to widget modifiers.
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: false, // Not exposed by crossterm
    }
}

fn convert_key_state(kind: KeyEventKind) -> KeyState {
    match kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    }
}

// =============================================================================
// Routing
// =============================================================================

/// Route a crossterm event into the widget.
///
/// Handles Ctrl+C / Ctrl+V as copy/paste shortcuts, printable characters
/// as runes, named keys as key presses, left mouse down as a tap, and
/// wheel events as scrolls. Everything else is ignored.
pub fn route_event(
    input: &mut TimeInput,
    event: &CrosstermEvent,
    clipboard: &mut dyn Clipboard,
) -> Response {
    match event {
        CrosstermEvent::Key(key_event) => route_key_event(input, key_event, clipboard),
        CrosstermEvent::Mouse(mouse_event) => route_mouse_event(input, mouse_event),
        _ => Response::empty(),
    }
}

fn route_key_event(
    input: &mut TimeInput,
    event: &CrosstermKeyEvent,
    clipboard: &mut dyn Clipboard,
) -> Response {
    if event.kind == KeyEventKind::Release {
        return Response::empty();
    }

    if let KeyCode::Char(c) = event.code {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match c {
                'c' => input.typed_shortcut(Shortcut::Copy, clipboard),
                'v' => input.typed_shortcut(Shortcut::Paste, clipboard),
                _ => Response::empty(),
            };
        }
        return input.typed_rune(c);
    }

    match convert_key_event(event) {
        Some(converted) => input.typed_key(&converted),
        None => Response::empty(),
    }
}

fn route_mouse_event(input: &mut TimeInput, event: &CrosstermMouseEvent) -> Response {
    let position = Point::new(event.column as f32, event.row as f32);
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => input.tapped(position),
        MouseEventKind::ScrollUp => input.scrolled(&ScrollEvent::new(position, 1.0)),
        MouseEventKind::ScrollDown => input.scrolled(&ScrollEvent::new(position, -1.0)),
        _ => Response::empty(),
    }
}

// =============================================================================
// Tests
// =============================================================================
