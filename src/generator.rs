use anyhow::{anyhow, Result};
use colored::*;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::assembler::HtmlAssembler;
use crate::config::DocConfig;
use crate::extractor::{extract_class, extract_library, friendly_name, ClassDoc, LibraryDoc};
use crate::inspect::PdfSummary;
use crate::renderer::PdfRenderer;
use crate::scanner::{find_library_pages, LibraryPage};
use crate::style::PRINT_STYLESHEET;

/// Runs scan, extraction, assembly and rendering for one configuration.
pub struct Generator {
    config: DocConfig,
}

impl Generator {
    pub fn new(config: DocConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DocConfig {
        &self.config
    }

    /// Renders the documentation and writes it to the configured output path.
    pub async fn run(&self) -> Result<PdfSummary> {
        info!("Generating PDF from Dart documentation...");
        info!("Input directory: {}", self.config.doc_dir.display().to_string().green());
        info!("Output: {}", self.config.output.display().to_string().blue());

        let html = self.build_html().await?;

        let renderer = PdfRenderer::new(self.config.chrome_executable.clone());
        let pdf_data = renderer.render(&html).await?;
        let summary = PdfSummary::from_bytes(&pdf_data)?;

        create_parent_dir(&self.config.output).await?;

        fs::write(&self.config.output, &pdf_data)
            .await
            .map_err(|e| anyhow!("Failed to write PDF to {}: {}", self.config.output.display(), e))?;

        info!("{}", format!("Success! PDF generated at: {}", self.config.output.display()).green());
        info!("File size: {:.2} KB, {} pages", summary.size_kb(), summary.pages);

        Ok(summary)
    }

    /// Writes the assembled HTML instead of rendering it.
    pub async fn write_html(&self, path: &Path) -> Result<()> {
        let html = self.build_html().await?;

        create_parent_dir(path).await?;

        fs::write(path, html)
            .await
            .map_err(|e| anyhow!("Failed to write HTML to {}: {}", path.display(), e))?;

        info!("HTML written to: {}", path.display().to_string().blue());
        Ok(())
    }

    /// Scans the doc directory and assembles the flat HTML document.
    pub async fn build_html(&self) -> Result<String> {
        let pages = find_library_pages(&self.config.doc_dir, &self.config.filter())?;
        info!("Found {} documentation files", pages.len());

        let mut assembler = HtmlAssembler::new(
            &self.config.title,
            &self.config.subtitle,
            &self.config.date_line(),
            PRINT_STYLESHEET,
        );

        let toc: Vec<(String, String)> = pages
            .iter()
            .map(|p| (p.name.clone(), friendly_name(&p.name)))
            .collect();
        assembler.table_of_contents(toc.iter().map(|(n, f)| (n.as_str(), f.as_str())));

        for page in &pages {
            match self.load_library(page).await {
                Ok(doc) => {
                    debug!(
                        "{}: {} sections, {} classes",
                        doc.name,
                        doc.sections.len(),
                        doc.classes.len()
                    );
                    assembler.library(&doc);
                }
                Err(e) => warn!("Could not process {}: {}", page.path.display(), e),
            }
        }

        Ok(assembler.finish())
    }

    async fn load_library(&self, page: &LibraryPage) -> Result<LibraryDoc> {
        let html = fs::read_to_string(&page.path)
            .await
            .map_err(|e| anyhow!("Failed to read {}: {}", page.path.display(), e))?;

        let mut doc = extract_library(&html, &page.name);
        let mut seen = HashSet::new();

        for href in &doc.class_links {
            let class_path = page.dir().join(href);
            if !class_path.is_file() {
                debug!("Class page {} not found, skipping", class_path.display());
                continue;
            }

            // Different hrefs can name the same page
            let resolved = fs::canonicalize(&class_path).await.unwrap_or_else(|_| class_path.clone());
            if !seen.insert(resolved) {
                continue;
            }

            match load_class(&class_path).await {
                Ok(class) => doc.classes.push(class),
                Err(e) => warn!("Could not process class file {}: {}", class_path.display(), e),
            }
        }

        Ok(doc)
    }
}

async fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| anyhow!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

async fn load_class(path: &Path) -> Result<ClassDoc> {
    let html = fs::read_to_string(path)
        .await
        .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?;

    Ok(extract_class(&html))
}
