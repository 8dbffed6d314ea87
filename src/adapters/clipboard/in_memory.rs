//! In-memory clipboard for tests and headless hosts.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{ClipboardError, ClipboardSink};

/// Clipboard that keeps the most recent write in memory.
///
/// Can be switched into a failing mode to exercise the share flow when the
/// host refuses clipboard access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    contents: Arc<RwLock<Option<String>>>,
    reject_writes: bool,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard whose writes always fail.
    pub fn rejecting() -> Self {
        Self {
            contents: Arc::default(),
            reject_writes: true,
        }
    }

    /// Returns the last text written, if any.
    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

#[async_trait]
impl ClipboardSink for InMemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.reject_writes {
            return Err(ClipboardError::WriteRejected(
                "clipboard access denied".to_string(),
            ));
        }
        *self.contents.write().await = Some(text.to_string());
        Ok(())
    }
}
