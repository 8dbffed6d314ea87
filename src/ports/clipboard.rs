//! Clipboard Port - Asynchronous text sink for share links.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write rejected: {0}")]
    WriteRejected(String),
}

/// Port for writing text to a clipboard-like sink.
///
/// The only operation besides upload reading that may suspend.
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
