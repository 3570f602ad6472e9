//! Clipboard access
//!
//! A small trait so the app can run against the system clipboard or an
//! in-memory one.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard is empty")]
    Empty,
}

pub trait ClipboardProvider {
    fn get_text(&mut self) -> Result<String, ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard.
///
/// The handle is opened on first use and kept for the life of the app;
/// on X11 and Wayland the copied text is served by it.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            debug!("system clipboard opened");
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".into()))
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        let text = self.handle()?.get_text().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => ClipboardError::Empty,
            other => ClipboardError::Unavailable(other.to_string()),
        })?;
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        Ok(text)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// In-memory clipboard. `None` behaves like an empty clipboard.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { contents: Some(text.into()) }
    }
}

impl ClipboardProvider for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        match &self.contents {
            Some(text) if !text.is_empty() => Ok(text.clone()),
            _ => Err(ClipboardError::Empty),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}
