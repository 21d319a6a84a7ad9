use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Libraries picked up even when their path does not contain the package name.
const DEFAULT_LIBRARIES: &[&str] = &[
    "game_logic_player",
    "game_logic_human_player",
    "game_logic_computer_player",
    "helper_game_state",
    "helper_helper_func",
    "helper_move_data",
    "views_pages_board",
    "views_pages_pawn",
    "views_pages_square",
    "views_pages_wall",
    "views_pages_scoreboard_walls",
    "views_screens_game_screen",
    "views_screens_start_screen",
    "main",
];

/// Settings for one documentation run.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Root of the dartdoc HTML output.
    pub doc_dir: PathBuf,
    /// Where the PDF is written.
    pub output: PathBuf,
    pub title: String,
    pub subtitle: String,
    /// Date line under the title. Today's date when unset.
    pub date: Option<String>,
    /// Keep library pages whose path below `doc_dir` contains this string.
    pub package: Option<String>,
    /// Keep library pages whose directory name is listed here.
    pub libraries: Vec<String>,
    /// Explicit Chromium executable, otherwise chromiumoxide looks one up.
    pub chrome_executable: Option<PathBuf>,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            doc_dir: PathBuf::from("doc/api"),
            output: PathBuf::from("Quoridor_Dart_Documentation.pdf"),
            title: "Quoridor Game - Dart API Documentation".to_string(),
            subtitle: "Generated from dartdoc".to_string(),
            date: None,
            package: Some("quoridor_game".to_string()),
            libraries: DEFAULT_LIBRARIES.iter().map(|s| s.to_string()).collect(),
            chrome_executable: None,
        }
    }
}

impl DocConfig {
    pub async fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        Self::from_json(&raw)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The date line, falling back to the current local date ("December 21, 2025").
    pub fn date_line(&self) -> String {
        match &self.date {
            Some(date) => date.clone(),
            None => chrono::Local::now().format("%B %-d, %Y").to_string(),
        }
    }

    pub fn filter(&self) -> LibraryFilter {
        LibraryFilter {
            package: self.package.clone(),
            libraries: self.libraries.clone(),
        }
    }
}

/// Decides which located `index.html` pages count as libraries to document.
#[derive(Debug, Clone, Default)]
pub struct LibraryFilter {
    pub package: Option<String>,
    pub libraries: Vec<String>,
}

impl LibraryFilter {
    /// `path` is relative to the doc directory.
    pub fn accepts(&self, path: &Path, lib_name: &str) -> bool {
        let package = self.package.as_deref().filter(|p| !p.is_empty());

        if package.is_none() && self.libraries.is_empty() {
            return true;
        }

        if let Some(package) = package {
            if path.to_string_lossy().contains(package) {
                return true;
            }
        }

        self.libraries.iter().any(|l| l == lib_name)
    }
}
