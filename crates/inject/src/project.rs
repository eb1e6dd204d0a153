//! Project location
//!
//! Confirms a root directory is an Xcode project and finds the entry-point
//! candidate file. The walk is depth-first and skips version-control, build
//! and project-bundle directories; order across siblings follows the
//! filesystem and is not guaranteed stable.

use crate::error::{InjectError, Result};
use crate::APP_DELEGATE_FILE;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// True when the directory contains an `.xcodeproj` or `.xcworkspace` bundle
pub fn is_xcode_project(root: &Path) -> bool {
    let Ok(entries) = std::fs::read_dir(root) else {
        return false;
    };

    entries.filter_map(|e| e.ok()).any(|entry| {
        let name = entry.file_name().to_string_lossy().to_string();
        name.ends_with(".xcodeproj") || name.ends_with(".xcworkspace")
    })
}

fn descend(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return true;
    }

    let name = entry.file_name().to_string_lossy();
    name != ".git"
        && name != ".build"
        && !name.ends_with(".xcodeproj")
        && !name.ends_with(".xcworkspace")
}

fn walk(root: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(descend)
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!("skipping unreadable entry: {err}");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
}

/// Find the first file with the given name, depth-first
pub fn find_named_file(root: &Path, name: &str) -> Option<PathBuf> {
    walk(root)
        .find(|entry| entry.file_name() == name)
        .map(|entry| entry.into_path())
}

/// Find the first `.swift` file whose content contains the `@main` attribute
pub fn find_main_annotated_file(root: &Path) -> Option<PathBuf> {
    walk(root)
        .filter(|entry| {
            entry
                .path()
                .extension()
                .map_or(false, |ext| ext == "swift")
        })
        .find(|entry| match std::fs::read_to_string(entry.path()) {
            Ok(content) => content.contains("@main"),
            Err(err) => {
                tracing::warn!("skipping unreadable file {}: {err}", entry.path().display());
                false
            }
        })
        .map(|entry| entry.into_path())
}

/// Resolve the entry-point candidate: `AppDelegate.swift` by name first,
/// falling back to the first `@main` annotated Swift file.
pub fn resolve_entry_file(root: &Path) -> Result<PathBuf> {
    if !is_xcode_project(root) {
        return Err(InjectError::NotAnXcodeProject(root.display().to_string()));
    }

    find_named_file(root, APP_DELEGATE_FILE)
        .or_else(|| find_main_annotated_file(root))
        .ok_or(InjectError::NoEntryPointFile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fake_project(root: &Path) {
        fs::create_dir(root.join("Demo.xcodeproj")).unwrap();
    }

    #[test]
    fn test_is_xcode_project() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!is_xcode_project(dir.path()));

        fake_project(dir.path());
        assert!(is_xcode_project(dir.path()));
    }

    #[test]
    fn test_find_named_file_in_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        fake_project(dir.path());
        fs::create_dir_all(dir.path().join("Demo/Sources")).unwrap();
        fs::write(dir.path().join("Demo/Sources/AppDelegate.swift"), "class AppDelegate {}").unwrap();

        let found = find_named_file(dir.path(), "AppDelegate.swift").unwrap();
        assert!(found.ends_with("Demo/Sources/AppDelegate.swift"));
    }

    #[test]
    fn test_excluded_directories_never_descended() {
        let dir = tempfile::tempdir().unwrap();
        fake_project(dir.path());

        for excluded in [".git", ".build", "Old.xcodeproj", "Old.xcworkspace"] {
            let sub = dir.path().join(excluded).join("inner");
            fs::create_dir_all(&sub).unwrap();
            fs::write(sub.join("AppDelegate.swift"), "class AppDelegate {}").unwrap();
            fs::write(sub.join("Main.swift"), "@main\nstruct App: App {}").unwrap();
        }

        assert!(find_named_file(dir.path(), "AppDelegate.swift").is_none());
        assert!(find_main_annotated_file(dir.path()).is_none());
    }

    #[test]
    fn test_find_main_annotated_file() {
        let dir = tempfile::tempdir().unwrap();
        fake_project(dir.path());
        fs::write(dir.path().join("Model.swift"), "struct Point {}").unwrap();
        fs::write(
            dir.path().join("DemoApp.swift"),
            "import SwiftUI\n\n@main\nstruct DemoApp: App {}\n",
        )
        .unwrap();
        // Non-Swift files are never content-scanned
        fs::write(dir.path().join("notes.md"), "@main").unwrap();

        let found = find_main_annotated_file(dir.path()).unwrap();
        assert!(found.ends_with("DemoApp.swift"));
    }

    #[test]
    fn test_resolve_prefers_app_delegate_over_main() {
        let dir = tempfile::tempdir().unwrap();
        fake_project(dir.path());
        fs::write(dir.path().join("AppDelegate.swift"), "class AppDelegate {}").unwrap();
        fs::write(dir.path().join("DemoApp.swift"), "@main\nstruct DemoApp: App {}").unwrap();

        let resolved = resolve_entry_file(dir.path()).unwrap();
        assert!(resolved.ends_with("AppDelegate.swift"));
    }

    #[test]
    fn test_resolve_requires_project_marker() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("AppDelegate.swift"), "class AppDelegate {}").unwrap();

        let err = resolve_entry_file(dir.path()).unwrap_err();
        assert!(matches!(err, InjectError::NotAnXcodeProject(_)));
    }

    #[test]
    fn test_resolve_fails_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        fake_project(dir.path());
        fs::write(dir.path().join("Model.swift"), "struct Point {}").unwrap();

        let err = resolve_entry_file(dir.path()).unwrap_err();
        assert!(matches!(err, InjectError::NoEntryPointFile));
    }
}
