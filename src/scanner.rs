use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibraryFilter;

/// A library `index.html` found in the dartdoc output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPage {
    /// Name of the directory holding the page, e.g. `helper_game_state`.
    pub name: String,
    pub path: PathBuf,
}

impl LibraryPage {
    /// Directory that relative links on this page resolve against.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Walks `doc_dir` for library index pages accepted by `filter`, sorted by path.
///
/// The `index.html` sitting directly in `doc_dir` is the package overview,
/// not a library, and is never returned. Unreadable subdirectories are
/// skipped. The filter sees paths relative to `doc_dir`.
pub fn find_library_pages(doc_dir: &Path, filter: &LibraryFilter) -> Result<Vec<LibraryPage>> {
    if !doc_dir.is_dir() {
        return Err(anyhow!("Documentation directory '{}' does not exist", doc_dir.display()));
    }

    let mut pages = Vec::new();

    for entry in WalkDir::new(doc_dir).min_depth(2) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let at = e.path().unwrap_or(doc_dir);
                warn!("Could not scan {}: {}", at.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != "index.html" {
            continue;
        }

        let path = entry.into_path();
        let Some(name) = path
            .parent()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
        else {
            continue;
        };

        let relative = path.strip_prefix(doc_dir).unwrap_or(path.as_path());
        if filter.accepts(relative, &name) {
            pages.push(LibraryPage { name, path });
        } else {
            debug!("Skipping {} (not selected)", path.display());
        }
    }

    pages.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn finds_nested_index_pages_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "index.html");
        touch(tmp.path(), "views_pages_board/index.html");
        touch(tmp.path(), "main/index.html");
        touch(tmp.path(), "main/Game-class.html");

        let pages = find_library_pages(tmp.path(), &LibraryFilter::default()).unwrap();
        let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["main", "views_pages_board"]);
        assert_eq!(pages[0].dir(), tmp.path().join("main"));
    }

    #[test]
    fn applies_filter() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "quoridor_game/index.html");
        touch(tmp.path(), "main/index.html");
        touch(tmp.path(), "dart_core/index.html");

        let filter = LibraryFilter {
            package: Some("quoridor_game".to_string()),
            libraries: vec!["main".to_string()],
        };
        let pages = find_library_pages(tmp.path(), &filter).unwrap();
        let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["main", "quoridor_game"]);
    }

    #[test]
    fn package_name_in_doc_dir_does_not_select_everything() {
        let tmp = tempfile::tempdir().unwrap();
        let doc_dir = tmp.path().join("quoridor_game/doc/api");
        touch(&doc_dir, "quoridor_game/index.html");
        touch(&doc_dir, "dart_core/index.html");

        let filter = LibraryFilter {
            package: Some("quoridor_game".to_string()),
            libraries: Vec::new(),
        };
        let pages = find_library_pages(&doc_dir, &filter).unwrap();
        let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["quoridor_game"]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_subdirectory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "main/index.html");
        touch(tmp.path(), "zz_private/index.html");

        let private = tmp.path().join("zz_private");
        fs::set_permissions(&private, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to root
        let readable = fs::read_dir(&private).is_ok();
        let result = find_library_pages(tmp.path(), &LibraryFilter::default());
        fs::set_permissions(&private, fs::Permissions::from_mode(0o755)).unwrap();

        let names: Vec<_> = result.unwrap().into_iter().map(|p| p.name).collect();
        if readable {
            assert_eq!(names, vec!["main", "zz_private"]);
        } else {
            assert_eq!(names, vec!["main"]);
        }
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = find_library_pages(&tmp.path().join("nope"), &LibraryFilter::default()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
