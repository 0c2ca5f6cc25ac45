//! Text extraction — pluggable adapter turning an uploaded document into
//! plain text.
//!
//! The scorer only ever sees a `String`; everything about the document
//! format lives behind this trait. `AppState` holds an
//! `Arc<dyn TextExtractor>`, so tests can inject a stub without touching
//! the handler.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: Bytes) -> Result<String, AppError>;
}

/// Production extractor backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: Bytes) -> Result<String, AppError> {
        // PDF parsing is CPU-bound; keep it off the async worker threads.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
            .map_err(|e| AppError::Extraction(format!("Could not extract text from PDF: {e}")))?;
        Ok(text)
    }
}
