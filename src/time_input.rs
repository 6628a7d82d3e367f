//! The segmented time-of-day input widget.
//!
//! `TimeInput` owns the ordered section list (hour, minute, optional
//! second, optional AM/PM) and runs the editing state machine over
//! `(active, selection)`: which section receives input, and whether its
//! value is shown selected (replace-on-type) or edited positionally
//! (append-digit). The host toolkit delivers events through the typed
//! handlers and performs whatever the returned [`Response`] asks for.
//!
//! The widget never talks to the toolkit directly: rendering reads the
//! section texts and the cursor drawable, hit testing uses the rects the
//! renderer assigned via [`TimeInput::set_section_rect`], and clipboard
//! access goes through the [`Clipboard`] trait.

use std::time::Duration;

use chrono::{DateTime, Local, Timelike};

use crate::animate::{CursorAnimation, CursorDrawable};
use crate::clipboard::Clipboard;
use crate::clock;
use crate::event::{KeyboardEvent, KeyState, ScrollEvent, key};
use crate::section::{Section, SectionEvent};
use crate::tap::DoubleTapTimer;
use crate::types::{Point, Rect, Response, Rgba};

/// Maximum interval between taps for double-tap detection.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

const DEFAULT_ACCENT: Rgba = Rgba::rgb(59, 130, 246);

// =============================================================================
// Configuration
// =============================================================================

/// Construction-time configuration.
///
/// The 12/24-hour choice is explicit per widget rather than process-wide
/// state, so differently configured widgets (and tests) can coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInputConfig {
    /// Add a third numeric section for seconds.
    pub show_seconds: bool,
    /// Use a 12-hour clock face with an AM/PM section.
    pub clock_12_hour: bool,
    /// Accent color the cursor blink pulses toward.
    pub accent: Rgba,
}

impl Default for TimeInputConfig {
    fn default() -> Self {
        Self {
            show_seconds: false,
            clock_12_hour: false,
            accent: DEFAULT_ACCENT,
        }
    }
}

impl TimeInputConfig {
    fn section_count(&self) -> usize {
        self.numeric_fields() + usize::from(self.clock_12_hour)
    }

    fn numeric_fields(&self) -> usize {
        2 + usize::from(self.show_seconds)
    }
}

/// Clipboard shortcuts the host may forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Copy,
    Paste,
}

// =============================================================================
// Widget
// =============================================================================

/// Segmented time-of-day input.
pub struct TimeInput {
    clock: DateTime<Local>,
    config: TimeInputConfig,
    sections: Vec<Section>,
    /// Section currently receiving input.
    active: usize,
    /// Section whose whole value is selected (replace-on-type), if any.
    selection: Option<usize>,
    numeric_fields: usize,
    show_focus: bool,
    disabled: bool,
    cursor_anim: CursorAnimation,
    tap_timer: DoubleTapTimer,
}

impl TimeInput {
    /// Create a widget showing the current time.
    pub fn new(config: TimeInputConfig) -> Self {
        let mut input = Self {
            clock: Local::now(),
            config,
            sections: Vec::new(),
            active: 0,
            selection: None,
            numeric_fields: config.numeric_fields(),
            show_focus: false,
            disabled: false,
            cursor_anim: CursorAnimation::new(config.accent),
            tap_timer: DoubleTapTimer::new(DOUBLE_TAP_WINDOW),
        };
        input.ensure_sections();
        input.update_sections();
        input
    }

    // =========================================================================
    // Canonical Value
    // =========================================================================

    /// Set the time, rounded to second or minute granularity depending on
    /// whether seconds are shown. Entry restarts at the hour section.
    pub fn set(&mut self, v: DateTime<Local>) -> Response {
        self.ensure_sections();
        self.clock = if self.config.show_seconds {
            clock::round_to_second(v)
        } else {
            clock::round_to_minute(v)
        };
        self.update_sections();
        self.selection = Some(0);
        self.active = 0;
        self.sections[0].col = self.sections[0].max_col;
        Response::REDRAW
    }

    /// Read the time back.
    ///
    /// Only re-derives the canonical value when every numeric section is
    /// valid; a transiently invalid mid-edit state returns the last known
    /// value unchanged.
    pub fn get(&mut self) -> DateTime<Local> {
        if self.valid() {
            let mut hour = self.sections[0].value;
            let minute = self.sections[1].value;
            let second = if self.config.show_seconds {
                self.sections[2].value
            } else {
                0
            };
            if self.config.clock_12_hour && self.sections[self.numeric_fields].value == 1 {
                hour += 12;
            }
            self.clock =
                clock::with_clock(self.clock, hour as u32, minute as u32, second as u32);
        }
        self.clock
    }

    /// Swap the configuration, rebuilding the section sequence when the
    /// field composition changed. Editing state resets to the first
    /// section.
    pub fn set_config(&mut self, config: TimeInputConfig) -> Response {
        self.config = config;
        self.numeric_fields = config.numeric_fields();
        self.ensure_sections();
        self.update_sections();
        self.active = 0;
        self.selection = None;
        Response::REDRAW
    }

    pub fn config(&self) -> TimeInputConfig {
        self.config
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Host hook: the widget gained keyboard focus. Selects the first
    /// section and starts the cursor blink.
    pub fn focus_gained(&mut self) -> Response {
        if self.show_focus {
            return Response::empty();
        }
        tracing::trace!("focus gained");
        self.show_focus = true;
        self.selection = Some(0);
        self.active = 0;
        self.sections[0].col = self.sections[0].max_col;
        self.cursor_anim.start();
        Response::REDRAW
    }

    /// Host hook: the widget lost keyboard focus.
    pub fn focus_lost(&mut self) -> Response {
        if !self.show_focus {
            return Response::empty();
        }
        tracing::trace!("focus lost");
        self.show_focus = false;
        self.cursor_anim.stop();
        Response::REDRAW
    }

    pub fn has_focus(&self) -> bool {
        self.show_focus
    }

    // =========================================================================
    // Input Handlers
    // =========================================================================

    /// Handle a named key press.
    pub fn typed_key(&mut self, event: &KeyboardEvent) -> Response {
        if self.disabled || event.state == KeyState::Release {
            return Response::empty();
        }
        self.cursor_anim.interrupt();

        match event.key.as_str() {
            key::ENTER => Response::FOCUS_NEXT,
            key::END => {
                self.selection = Some(self.sections.len() - 1);
                self.active = self.sections.len() - 1;
                self.sections[self.active].col = self.sections[self.active].max_col;
                Response::REDRAW
            }
            key::HOME => {
                self.selection = Some(0);
                self.active = 0;
                self.sections[0].col = self.sections[0].max_col;
                Response::REDRAW
            }
            _ => {
                let section_event = self.sections[self.active].key_pressed(event);
                self.apply_key_event(section_event)
            }
        }
    }

    /// Handle a typed character.
    ///
    /// An active selection is always cleared first, zeroing the section
    /// so the typed digit replaces the old value.
    pub fn typed_rune(&mut self, r: char) -> Response {
        if self.disabled {
            return Response::empty();
        }
        self.cursor_anim.interrupt();
        self.un_select(true);

        match self.sections[self.active].rune_pressed(r) {
            SectionEvent::Ignored => Response::empty(),
            SectionEvent::Changed { .. } => Response::REDRAW,
            SectionEvent::ChangedAndAdvance { .. } | SectionEvent::Advance => {
                self.next_section() | Response::REDRAW
            }
            // rune_pressed never retreats.
            SectionEvent::Retreat { .. } => Response::empty(),
        }
    }

    /// Handle a tap. Taps select the hit section whole; two quick taps on
    /// the AM/PM section toggle it instead of re-selecting.
    pub fn tapped(&mut self, position: Point) -> Response {
        if self.disabled {
            return Response::empty();
        }
        let Some(index) = self.section_at(position) else {
            return Response::empty();
        };

        self.active = index;
        self.selection = Some(index);
        self.sections[index].col = self.sections[index].max_col;

        if self.config.clock_12_hour && index == self.numeric_fields {
            if self.tap_timer.register_tap(index) {
                self.sections[index].rune_pressed(' ');
            }
        } else {
            self.tap_timer.cancel();
        }

        Response::REDRAW
    }

    /// Handle a mouse wheel over a section. Only accepted while the
    /// widget shows focus; does not move the active section.
    pub fn scrolled(&mut self, event: &ScrollEvent) -> Response {
        if self.disabled || !self.show_focus {
            return Response::empty();
        }
        let Some(index) = self.section_at(event.position) else {
            return Response::empty();
        };
        if index >= self.numeric_fields {
            return Response::empty();
        }

        let (old, new) = if event.delta_y > 0.0 {
            self.sections[index].decrement()
        } else {
            self.sections[index].increment()
        };
        self.flip_meridiem_on_rollover(index, old, new);
        Response::REDRAW
    }

    /// Handle a clipboard shortcut forwarded by the host.
    pub fn typed_shortcut(
        &mut self,
        shortcut: Shortcut,
        clipboard: &mut dyn Clipboard,
    ) -> Response {
        match shortcut {
            Shortcut::Copy => {
                self.copy_to_clipboard(clipboard);
                Response::empty()
            }
            Shortcut::Paste => self.paste_from_clipboard(clipboard),
        }
    }

    /// Serialize the current time as zero-padded 24-hour `HH:MM:SS`.
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn Clipboard) {
        clipboard.set_content(clock::format_clock(self.clock));
    }

    /// Parse `H:M:S`-shaped clipboard text into the widget, keeping the
    /// stored date and timezone. Malformed text is a silent no-op.
    pub fn paste_from_clipboard(&mut self, clipboard: &dyn Clipboard) -> Response {
        match clock::parse_clock(&clipboard.content()) {
            Ok((hour, minute, second)) => {
                let v = clock::with_clock(self.clock, hour, minute, second);
                self.set(v)
            }
            Err(err) => {
                tracing::trace!(%err, "clipboard paste ignored");
                Response::empty()
            }
        }
    }

    // =========================================================================
    // Disabled Policy
    // =========================================================================

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    // =========================================================================
    // Render Support
    // =========================================================================

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Display text of one section ("7", "05", "12", "AM", ...).
    pub fn section_text(&self, index: usize) -> String {
        self.sections
            .get(index)
            .map(Section::display)
            .unwrap_or_default()
    }

    pub fn is_section_selected(&self, index: usize) -> bool {
        self.selection == Some(index)
    }

    pub fn active_section(&self) -> usize {
        self.active
    }

    /// Assign a section's on-screen bounds for tap and wheel hit testing.
    pub fn set_section_rect(&mut self, index: usize, rect: Rect) {
        if let Some(section) = self.sections.get_mut(index) {
            section.rect = rect;
        }
    }

    /// Full display string, e.g. `"12:05:30 AM"` or `"15:32"`.
    pub fn display_text(&self) -> String {
        let mut text = String::new();
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 && index < self.numeric_fields {
                text.push(':');
            } else if index == self.numeric_fields && index > 0 {
                text.push(' ');
            }
            text.push_str(&section.display());
        }
        text
    }

    /// Snapshot of the blink-driven cursor drawable.
    pub fn cursor(&self) -> CursorDrawable {
        self.cursor_anim.drawable()
    }

    /// Mutable access to the cursor animation, e.g. for a host renderer
    /// that wants the shared drawable handle.
    pub fn cursor_animation(&mut self) -> &mut CursorAnimation {
        &mut self.cursor_anim
    }

    // =========================================================================
    // Sequence Internals
    // =========================================================================

    /// Rebuild the section sequence if the configured composition does
    /// not match the current one.
    fn ensure_sections(&mut self) {
        let wanted = self.config.section_count();
        let hour_max = if self.config.clock_12_hour { 11 } else { 23 };
        if self.sections.len() == wanted
            && self.sections.first().is_some_and(|s| s.max_value == hour_max)
        {
            return;
        }
        tracing::debug!(sections = wanted, "rebuilding section sequence");

        let mut sections = vec![Section::new(hour_max, 2), Section::new(59, 2)];
        if self.config.show_seconds {
            sections.push(Section::new(59, 2));
        }
        if self.config.clock_12_hour {
            sections.push(Section::new(1, 1));
        }
        self.sections = sections;
        self.active = 0;
        self.selection = None;
    }

    /// Decompose the canonical clock into section values.
    fn update_sections(&mut self) {
        self.sections[1].value = self.clock.minute() as i32;
        if self.config.show_seconds {
            self.sections[2].value = self.clock.second() as i32;
        }
        let hour = self.clock.hour() as i32;
        if self.config.clock_12_hour {
            let meridiem = self.numeric_fields;
            if hour >= 12 {
                self.sections[0].value = hour - 12;
                self.sections[meridiem].value = 1;
            } else {
                self.sections[0].value = hour;
                self.sections[meridiem].value = 0;
            }
        } else {
            self.sections[0].value = hour;
        }
    }

    fn valid(&self) -> bool {
        self.sections[..self.numeric_fields]
            .iter()
            .all(Section::valid)
    }

    fn section_at(&self, p: Point) -> Option<usize> {
        self.sections.iter().position(|s| s.rect.contains(p))
    }

    fn apply_key_event(&mut self, event: SectionEvent) -> Response {
        match event {
            SectionEvent::Ignored => Response::empty(),
            // Changed from a key means increment/decrement, which is the
            // only entry path that models the clock-face hour rollover.
            SectionEvent::Changed { old, new } => {
                self.flip_meridiem_on_rollover(self.active, old, new);
                Response::REDRAW
            }
            SectionEvent::ChangedAndAdvance { old, new } => {
                self.flip_meridiem_on_rollover(self.active, old, new);
                self.next_section() | Response::REDRAW
            }
            SectionEvent::Advance => self.next_section() | Response::REDRAW,
            SectionEvent::Retreat { reselect } => {
                self.prev_section(reselect);
                Response::REDRAW
            }
        }
    }

    /// Crossing 11 <-> 0 on the 12-hour hour section flips AM/PM, like
    /// the hour hand sweeping past 12 on a real clock face.
    fn flip_meridiem_on_rollover(&mut self, index: usize, old: i32, new: i32) {
        if !self.config.clock_12_hour || index != 0 {
            return;
        }
        if (old == 11 && new == 0) || (old == 0 && new == 11) {
            let meridiem = self.numeric_fields;
            self.sections[meridiem].value = (self.sections[meridiem].value + 1) % 2;
        }
    }

    /// Move to the next section, selecting it whole. Past the last
    /// section, wrap to the first and ask the host to move focus on.
    fn next_section(&mut self) -> Response {
        self.active += 1;
        if self.active >= self.sections.len() {
            self.active = 0;
            self.selection = Some(0);
            self.sections[0].col = self.sections[0].max_col;
            Response::FOCUS_NEXT
        } else {
            self.selection = Some(self.active);
            self.sections[self.active].col = self.sections[self.active].max_col;
            Response::empty()
        }
    }

    /// Move to the previous section. At the first section, restart its
    /// entry instead of moving.
    fn prev_section(&mut self, reselect: bool) {
        if self.active == 0 {
            self.sections[0].col = self.sections[0].max_col;
            return;
        }
        self.active -= 1;
        let section = &mut self.sections[self.active];
        if reselect {
            section.col = section.max_col;
            self.selection = Some(self.active);
        } else {
            // Entry continues positionally, as if the section had just
            // been unselected.
            section.col = (section.value / 10) as u32;
            self.selection = None;
        }
    }

    /// Drop the selection. With `clear`, a selected numeric section is
    /// zeroed first so the next digit replaces the value.
    fn un_select(&mut self, clear: bool) {
        let Some(selected) = self.selection.take() else {
            return;
        };
        if clear && selected < self.numeric_fields {
            self.sections[selected].value = 0;
        }
        self.sections[selected].col = (self.sections[selected].value / 10) as u32;
    }
}

// =============================================================================
// Tests
// =============================================================================
