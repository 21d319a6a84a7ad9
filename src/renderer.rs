use anyhow::{anyhow, Result};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures_util::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, error, info};

/// Print settings passed to Chromium.
///
/// Page size and margins come from the stylesheet's `@page` rule, so only
/// scale and background printing are set here.
#[derive(Debug, Clone)]
pub struct PdfOptions {
    pub scale: f64,
    pub print_background: bool,
    pub prefer_css_page_size: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            print_background: true,
            prefer_css_page_size: true,
        }
    }
}

impl PdfOptions {
    fn to_params(&self) -> PrintToPdfParams {
        PrintToPdfParams {
            scale: Some(self.scale),
            print_background: Some(self.print_background),
            prefer_css_page_size: Some(self.prefer_css_page_size),
            ..Default::default()
        }
    }
}

/// Renders an HTML string to PDF bytes with a headless Chromium.
pub struct PdfRenderer {
    chrome_executable: Option<PathBuf>,
    pdf_options: PdfOptions,
}

impl PdfRenderer {
    pub fn new(chrome_executable: Option<PathBuf>) -> Self {
        Self {
            chrome_executable,
            pdf_options: PdfOptions::default(),
        }
    }

    pub async fn render(&self, html: &str) -> Result<Vec<u8>> {
        let mut builder = BrowserConfig::builder().no_sandbox();
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let config = builder
            .build()
            .map_err(|e| anyhow!("Failed to create browser config: {}", e))?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| anyhow!("Failed to launch browser: {}", e))?;

        let handle = tokio::spawn(async move {
            while let Some(h) = handler.next().await {
                if let Err(err) = h {
                    let err_str = err.to_string();
                    if !err_str.contains("data did not match any variant") &&
                       !err_str.contains("untagged enum Message") {
                        error!("Browser handler error: {}", err);
                    } else {
                        debug!("Chrome protocol message ignored: {}", err);
                    }
                }
            }
        });

        let result = self.render_internal(&browser, html).await;

        browser.close().await.ok();
        handle.abort();

        result
    }

    async fn render_internal(&self, browser: &Browser, html: &str) -> Result<Vec<u8>> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| anyhow!("Failed to create new page: {}", e))?;

        info!("Laying out {} KB of HTML", html.len() / 1024);

        page.set_content(html)
            .await
            .map_err(|e| anyhow!("Failed to set page content: {}", e))?;

        // Let fonts settle before printing
        tokio::time::sleep(Duration::from_millis(500)).await;

        let pdf_data = page
            .pdf(self.pdf_options.to_params())
            .await
            .map_err(|e| anyhow!("Failed to generate PDF: {}", e))?;

        Ok(pdf_data)
    }
}
