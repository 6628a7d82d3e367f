//! Clipboard interface consumed by the copy/paste shortcuts.
//!
//! The host toolkit owns the real clipboard; the widget only needs to
//! read and replace its text content. [`MemoryClipboard`] is an internal
//! buffer fallback for hosts without a system clipboard, and the one the
//! tests use.

/// Text clipboard as seen by the widget.
pub trait Clipboard {
    /// Current clipboard text, empty string if the clipboard is empty.
    fn content(&self) -> String;

    /// Replace the clipboard text.
    fn set_content(&mut self, text: String);
}

/// In-memory clipboard buffer.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    buffer: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the clipboard has content.
    pub fn has_content(&self) -> bool {
        self.buffer.is_some()
    }

    /// Clear the clipboard.
    pub fn clear(&mut self) {
        self.buffer = None;
    }
}

impl Clipboard for MemoryClipboard {
    fn content(&self) -> String {
        self.buffer.clone().unwrap_or_default()
    }

    fn set_content(&mut self, text: String) {
        // Empty strings are ignored (clipboard not modified).
        if text.is_empty() {
            return;
        }
        self.buffer = Some(text);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_paste() {
        let mut clipboard = MemoryClipboard::new();
        assert!(!clipboard.has_content());
        assert_eq!(clipboard.content(), "");

        clipboard.set_content("12:30:45".to_string());
        assert!(clipboard.has_content());
        assert_eq!(clipboard.content(), "12:30:45");

        // Non-destructive read.
        assert_eq!(clipboard.content(), "12:30:45");
    }

    #[test]
    fn test_set_overwrites() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.set_content("first".to_string());
        clipboard.set_content("second".to_string());
        assert_eq!(clipboard.content(), "second");
    }

    #[test]
    fn test_set_empty_ignored() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.set_content("kept".to_string());
        clipboard.set_content(String::new());
        assert_eq!(clipboard.content(), "kept");
    }

    #[test]
    fn test_clear() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.set_content("something".to_string());
        clipboard.clear();
        assert!(!clipboard.has_content());
    }
}
