//! A single editable section of the time field.
//!
//! A section is a bounded counter (hour, minute, second) or a two-state
//! enum (AM/PM) with column-based digit entry. Sections know nothing
//! about the sequence that owns them: every operation returns a
//! [`SectionEvent`] describing what the sequence should do next, so the
//! coupling runs one way only.

use crate::event::{KeyboardEvent, key};
use crate::types::Rect;

/// What a section operation asks of the owning sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionEvent {
    /// The event was not for this section.
    Ignored,
    /// The value changed in place.
    Changed { old: i32, new: i32 },
    /// The value changed and the last column was filled; the sequence
    /// should move on to the next section.
    ChangedAndAdvance { old: i32, new: i32 },
    /// Move to the next section.
    Advance,
    /// Move to the previous section. `reselect` selects the whole value
    /// of the section moved to; otherwise entry continues positionally.
    Retreat { reselect: bool },
}

/// One segment of the time field.
#[derive(Debug, Default)]
pub(crate) struct Section {
    /// Current value, `0..=max_value` when valid.
    pub value: i32,
    /// Digits typed since the value was last committed.
    pub col: u32,
    pub max_value: i32,
    pub max_col: u32,
    /// On-screen bounds, assigned by the host renderer for hit testing.
    pub rect: Rect,
    /// A lone leading zero was typed; display "0" instead of the
    /// normalized value until the next key.
    pub enter_zero: bool,
}

impl Section {
    pub fn new(max_value: i32, max_col: u32) -> Self {
        Self {
            max_value,
            max_col,
            ..Self::default()
        }
    }

    /// The single-column AM/PM section.
    pub fn is_meridiem(&self) -> bool {
        self.max_col == 1
    }

    /// Step the value up, wrapping past `max_value` to 0.
    /// Returns (old, new) so the sequence can observe the transition.
    pub fn increment(&mut self) -> (i32, i32) {
        let old = self.value;
        self.value += 1;
        if self.value > self.max_value {
            self.value = 0;
        }
        (old, self.value)
    }

    /// Step the value down, wrapping below 0 to `max_value`.
    pub fn decrement(&mut self) -> (i32, i32) {
        let old = self.value;
        self.value -= 1;
        if self.value < 0 {
            self.value = self.max_value;
        }
        (old, self.value)
    }

    /// Render the section for display.
    pub fn display(&self) -> String {
        if self.max_value == 1 {
            return match self.value {
                0 => "AM".to_string(),
                _ => "PM".to_string(),
            };
        }
        if self.enter_zero {
            return "0".to_string();
        }
        // On a 12-hour clock face the stored 0 reads as 12.
        if self.max_value == 11 && self.value == 0 {
            return "12".to_string();
        }
        if self.max_value > 24 {
            return format!("{:02}", self.value);
        }
        self.value.to_string()
    }

    pub fn valid(&self) -> bool {
        self.value >= 0 && self.value <= self.max_value
    }

    /// Handle a directional key aimed at this section.
    pub fn key_pressed(&mut self, event: &KeyboardEvent) -> SectionEvent {
        self.enter_zero = false;
        match event.key.as_str() {
            key::ARROW_LEFT => {
                self.col = self.max_col;
                SectionEvent::Retreat { reselect: true }
            }
            key::BACKSPACE => {
                self.col = self.max_col;
                SectionEvent::Retreat { reselect: false }
            }
            key::ARROW_RIGHT => {
                self.col = self.max_col;
                SectionEvent::Advance
            }
            key::ARROW_UP => {
                let (old, new) = self.increment();
                SectionEvent::Changed { old, new }
            }
            key::ARROW_DOWN => {
                let (old, new) = self.decrement();
                SectionEvent::Changed { old, new }
            }
            _ => SectionEvent::Ignored,
        }
    }

    /// Handle a typed character aimed at this section.
    pub fn rune_pressed(&mut self, r: char) -> SectionEvent {
        let old = self.value;
        if self.is_meridiem() {
            match r {
                'a' | 'A' => self.value = 0,
                'p' | 'P' => self.value = 1,
                ' ' => self.value = (self.value + 1) % 2,
                _ => return SectionEvent::Ignored,
            }
            return SectionEvent::Changed { old, new: self.value };
        }

        let Some(digit) = r.to_digit(10) else {
            // '.' works as a field separator: jump to the next section.
            if r == '.' {
                self.col = self.max_col;
                return SectionEvent::Advance;
            }
            return SectionEvent::Ignored;
        };

        // A full field restarts entry: the next digit replaces the value
        // instead of appending past the field width.
        if self.col >= self.max_col {
            self.value = 0;
            self.col = 0;
        }

        self.value = self.value * 10 + digit as i32;
        // Typing "12" on a 12-hour hour field means noon/midnight,
        // stored as 0.
        if self.max_value == 11 && self.value == 12 {
            self.value = 0;
        }
        self.enter_zero = self.value == 0 && digit == 0;
        self.col += 1;
        if self.col == self.max_col {
            SectionEvent::ChangedAndAdvance { old, new: self.value }
        } else {
            SectionEvent::Changed { old, new: self.value }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyboardEvent;

    fn minute() -> Section {
        Section::new(59, 2)
    }

    fn hour24() -> Section {
        Section::new(23, 2)
    }

    fn hour12() -> Section {
        Section::new(11, 2)
    }

    fn meridiem() -> Section {
        Section::new(1, 1)
    }

    #[test]
    fn test_increment_wraps() {
        let mut s = hour24();
        s.value = 23;
        assert_eq!(s.increment(), (23, 0));
        assert_eq!(s.value, 0);
    }

    #[test]
    fn test_decrement_wraps() {
        let mut s = minute();
        assert_eq!(s.decrement(), (0, 59));
        assert_eq!(s.value, 59);
    }

    #[test]
    fn test_increment_cycle_returns_to_start() {
        let mut s = minute();
        s.value = 17;
        for _ in 0..60 {
            s.increment();
        }
        assert_eq!(s.value, 17);
    }

    #[test]
    fn test_digit_entry_appends() {
        let mut s = minute();
        assert_eq!(s.rune_pressed('3'), SectionEvent::Changed { old: 0, new: 3 });
        assert_eq!(s.col, 1);
        assert_eq!(
            s.rune_pressed('7'),
            SectionEvent::ChangedAndAdvance { old: 3, new: 37 }
        );
        assert_eq!(s.col, 2);
    }

    #[test]
    fn test_digit_entry_twelve_clamps_to_zero_on_12h_hour() {
        let mut s = hour12();
        s.rune_pressed('1');
        assert_eq!(
            s.rune_pressed('2'),
            SectionEvent::ChangedAndAdvance { old: 1, new: 0 }
        );
        assert_eq!(s.display(), "12");
    }

    #[test]
    fn test_leading_zero_displays_as_zero() {
        let mut s = hour12();
        s.rune_pressed('0');
        assert!(s.enter_zero);
        assert_eq!(s.display(), "0");

        // Cleared by the next key event.
        s.key_pressed(&KeyboardEvent::new(key::ARROW_UP));
        assert!(!s.enter_zero);
    }

    #[test]
    fn test_digit_entry_restarts_when_full() {
        let mut s = minute();
        s.value = 37;
        s.col = s.max_col;

        assert_eq!(s.rune_pressed('9'), SectionEvent::Changed { old: 37, new: 9 });
        assert_eq!(s.col, 1);
    }

    #[test]
    fn test_separator_advances() {
        let mut s = minute();
        assert_eq!(s.rune_pressed('.'), SectionEvent::Advance);
        assert_eq!(s.col, s.max_col);
    }

    #[test]
    fn test_non_digit_ignored() {
        let mut s = minute();
        assert_eq!(s.rune_pressed('x'), SectionEvent::Ignored);
        assert_eq!(s.value, 0);
    }

    #[test]
    fn test_meridiem_runes() {
        let mut s = meridiem();
        assert_eq!(s.rune_pressed('p'), SectionEvent::Changed { old: 0, new: 1 });
        assert_eq!(s.display(), "PM");
        assert_eq!(s.rune_pressed('A'), SectionEvent::Changed { old: 1, new: 0 });
        assert_eq!(s.display(), "AM");
        assert_eq!(s.rune_pressed(' '), SectionEvent::Changed { old: 0, new: 1 });
        assert_eq!(s.rune_pressed('7'), SectionEvent::Ignored);
        assert_eq!(s.value, 1);
    }

    #[test]
    fn test_display_padding() {
        let mut s = minute();
        s.value = 5;
        assert_eq!(s.display(), "05");

        let mut h = hour24();
        h.value = 5;
        assert_eq!(h.display(), "5");
    }

    #[test]
    fn test_display_12h_zero_reads_twelve() {
        let mut s = hour12();
        s.value = 0;
        assert_eq!(s.display(), "12");
        s.value = 7;
        assert_eq!(s.display(), "7");
    }

    #[test]
    fn test_arrow_keys() {
        let mut s = minute();
        assert_eq!(
            s.key_pressed(&KeyboardEvent::new(key::ARROW_UP)),
            SectionEvent::Changed { old: 0, new: 1 }
        );
        assert_eq!(
            s.key_pressed(&KeyboardEvent::new(key::ARROW_DOWN)),
            SectionEvent::Changed { old: 1, new: 0 }
        );
        assert_eq!(
            s.key_pressed(&KeyboardEvent::new(key::ARROW_LEFT)),
            SectionEvent::Retreat { reselect: true }
        );
        assert_eq!(
            s.key_pressed(&KeyboardEvent::new(key::BACKSPACE)),
            SectionEvent::Retreat { reselect: false }
        );
        assert_eq!(
            s.key_pressed(&KeyboardEvent::new(key::ARROW_RIGHT)),
            SectionEvent::Advance
        );
        assert_eq!(
            s.key_pressed(&KeyboardEvent::new(key::ENTER)),
            SectionEvent::Ignored
        );
    }

    #[test]
    fn test_valid_bounds() {
        let mut s = minute();
        assert!(s.valid());
        s.value = 60;
        assert!(!s.valid());
        s.value = -1;
        assert!(!s.valid());
    }
}
