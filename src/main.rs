use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use colored::*;
use dartdoc2pdf::{DocConfig, Generator, PdfSummary};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "dartdoc2pdf")]
#[command(about = "CLI utility to turn dartdoc HTML API documentation into a single styled PDF")]
#[command(version = "0.1.0")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the PDF from a dartdoc output directory (default behavior)
    Generate(GenerateArgs),
    /// Print page count and size of an existing PDF
    Inspect {
        /// PDF file to inspect
        pdf: PathBuf,
    },
}

#[derive(ClapArgs, Default)]
struct GenerateArgs {
    /// JSON config file; flags below override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// dartdoc output directory
    #[arg(short = 'd', long = "doc-dir")]
    doc_dir: Option<PathBuf>,

    /// Output PDF path
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Document title
    #[arg(short = 't', long = "title")]
    title: Option<String>,

    /// Include libraries whose path contains this package name
    #[arg(long = "package")]
    package: Option<String>,

    /// Include this library by directory name (repeatable, replaces the default list)
    #[arg(short = 'l', long = "library")]
    libraries: Vec<String>,

    /// Include every library found, ignoring package and library filters
    #[arg(long = "all")]
    all: bool,

    /// Date printed under the title (defaults to today)
    #[arg(long = "date")]
    date: Option<String>,

    /// Chromium executable to use for rendering
    #[arg(long = "chrome")]
    chrome: Option<PathBuf>,

    /// Write the assembled HTML to this path and skip PDF rendering
    #[arg(long = "html-only")]
    html_only: Option<PathBuf>,
}

impl GenerateArgs {
    async fn into_config(self) -> Result<DocConfig> {
        let mut config = match &self.config {
            Some(path) => DocConfig::load(path).await?,
            None => DocConfig::default(),
        };

        if let Some(doc_dir) = self.doc_dir {
            config.doc_dir = doc_dir;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(title) = self.title {
            config.title = title;
        }
        if self.package.is_some() {
            config.package = self.package;
        }
        if !self.libraries.is_empty() {
            config.libraries = self.libraries;
        }
        if self.all {
            config.package = None;
            config.libraries.clear();
        }
        if self.date.is_some() {
            config.date = self.date;
        }
        if self.chrome.is_some() {
            config.chrome_executable = self.chrome;
        }

        Ok(config)
    }
}

async fn generate(args: GenerateArgs) -> Result<()> {
    let html_only = args.html_only.clone();
    let generator = Generator::new(args.into_config().await?);

    match html_only {
        Some(path) => generator.write_html(&path).await,
        None => {
            generator.run().await?;
            info!("Open with: {}", format!("open {}", generator.config().output.display()).blue());
            Ok(())
        }
    }
}

async fn inspect(pdf: PathBuf) -> Result<()> {
    let summary = PdfSummary::from_path(&pdf).await?;
    info!(
        "{}: {} pages, {:.2} KB",
        pdf.display().to_string().green(),
        summary.pages,
        summary.size_kb()
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    // Set up logging with chromiumoxide errors suppressed
    let filter = EnvFilter::from_default_env()
        .add_directive("chromiumoxide::conn=off".parse().unwrap())
        .add_directive("chromiumoxide::handler=off".parse().unwrap())
        .add_directive("dartdoc2pdf=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let args = Args::parse();

    let result = match args.command.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(generate_args) => generate(generate_args).await,
        Commands::Inspect { pdf } => inspect(pdf).await,
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        process::exit(1);
    }
}
