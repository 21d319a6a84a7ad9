//! # dartdoc2pdf
//!
//! A CLI utility to turn dartdoc HTML API documentation into a single PDF.
//!
//! ## Current Features
//!
//! - Library and class page extraction from dartdoc output
//! - One flat, print-styled HTML document with a table of contents
//! - PDF rendering through headless Chromium
//!
//! ## Usage
//!
//! ```bash
//! dartdoc2pdf generate --doc-dir doc/api --output api.pdf
//! ```

mod assembler;
mod config;
mod extractor;
mod generator;
mod inspect;
mod renderer;
mod scanner;
mod style;

pub use assembler::{escape_html, HtmlAssembler};
pub use config::{DocConfig, LibraryFilter};
pub use extractor::{extract_class, extract_library, friendly_name, ClassDoc, Entry, LibraryDoc, Section};
pub use generator::Generator;
pub use inspect::PdfSummary;
pub use renderer::PdfRenderer;
pub use scanner::{find_library_pages, LibraryPage};
pub use style::PRINT_STYLESHEET;
