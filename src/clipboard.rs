//! Clipboard writers.
//!
//! Failures from the platform clipboard are returned to the caller.

use secrecy::SecretString;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to write to clipboard: {0}")]
    WriteFailed(String),
}

/// Destination for the copy action. Plain text only.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    ctx: copypasta::ClipboardContext,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    /// Opens the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] when no clipboard can be
    /// reached (e.g. headless session).
    pub fn new() -> Result<Self, ClipboardError> {
        let ctx = copypasta::ClipboardContext::new().map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Clipboard initialization FAILED: {}", e);
            ClipboardError::Unavailable(e.to_string())
        })?;
        Ok(Self { ctx })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        use copypasta::ClipboardProvider;

        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

/// In-process clipboard holding the last written value.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Option<SecretString>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written value, if any.
    pub fn contents(&self) -> Option<&SecretString> {
        self.contents.as_ref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(SecretString::new(text.into()));
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_memory_clipboard_starts_empty() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.contents().is_none());
        assert_eq!(clipboard.writes(), 0);
    }

    #[test]
    fn test_memory_clipboard_keeps_last_value() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.write_text("first").unwrap();
        clipboard.write_text("second").unwrap();
        assert_eq!(clipboard.contents().unwrap().expose_secret(), "second");
        assert_eq!(clipboard.writes(), 2);
    }

    #[test]
    fn test_clipboard_error_display() {
        let err = ClipboardError::WriteFailed("denied".to_string());
        assert_eq!(err.to_string(), "Failed to write to clipboard: denied");
    }
}
