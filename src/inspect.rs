use anyhow::{anyhow, Result};
use lopdf::Document;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Page count and size of a rendered PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfSummary {
    pub pages: usize,
    pub bytes: usize,
}

impl PdfSummary {
    /// Parses `data` and fails unless it is a PDF with at least one page.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Err(anyhow!("PDF output is empty"));
        }

        let document = Document::load_mem(data)
            .map_err(|e| anyhow!("Failed to parse PDF output: {}", e))?;

        let pages = document.get_pages().len();
        debug!("Parsed PDF with {} pages ({} bytes)", pages, data.len());

        if pages == 0 {
            return Err(anyhow!("PDF output has no pages"));
        }

        Ok(Self { pages, bytes: data.len() })
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .await
            .map_err(|e| anyhow!("Failed to read PDF file {}: {}", path.display(), e))?;

        Self::from_bytes(&data)
            .map_err(|e| anyhow!("{}: {}", path.display(), e))
    }

    pub fn size_kb(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}
