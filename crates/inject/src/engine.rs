//! Line-level mutation engine
//!
//! Performs the idempotent edit: duplicate guard, import normalization, and
//! snippet placement for the resolved entry-point variant. The whole
//! transformation is computed in memory; the file is written once, and only
//! when an insertion actually happened.

use crate::classify::{find_root_declaration, InsertionTarget};
use crate::credentials::Credentials;
use crate::error::Result;
use crate::{snippet, SDK_INIT_CALL};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of one apply call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Snippet (and import, when missing) inserted; document was written
    Inserted,
    /// The initialization call already exists; nothing was touched
    AlreadyPresent,
    /// The fine-grained anchor line could not be located; nothing was touched
    NoAnchor,
}

/// One source file held as an ordered sequence of lines.
///
/// Split on `\n` and rejoined with `\n` on write-back; CRLF input is
/// normalized to LF. Owned exclusively by the engine for one edit.
#[derive(Debug)]
pub struct SourceDocument {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceDocument {
    /// Read a document fresh from disk
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_content(path, &content))
    }

    pub fn from_content(path: &Path, content: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: content.split('\n').map(|l| l.trim_end_matches('\r').to_string()).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Rejoin the line sequence with `\n`
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    fn write_back(&self) -> Result<()> {
        fs::write(&self.path, self.content())?;
        Ok(())
    }
}

/// Apply the initialization edit to an in-memory document.
///
/// The duplicate guard runs before everything else, including the import
/// insertion, so repeated invocations leave at most one initialization
/// block per file. On [`Outcome::NoAnchor`] the document is unchanged.
pub fn apply(
    document: &mut SourceDocument,
    target: &InsertionTarget,
    credentials: &Credentials,
) -> Outcome {
    if document.contains(SDK_INIT_CALL) {
        return Outcome::AlreadyPresent;
    }

    // Computed on the unmodified document so the anchor index stays valid
    // after the import line shifts everything down by at most one.
    let placement = match target {
        InsertionTarget::DelegateCallback { line } => Placement {
            anchor: *line,
            snippet: snippet::branch_snippet(credentials),
        },
        InsertionTarget::AnnotatedRoot {
            init_line: Some(line),
            ..
        } => Placement {
            anchor: *line,
            snippet: snippet::branch_snippet(credentials),
        },
        InsertionTarget::AnnotatedRoot {
            init_line: None, ..
        } => match find_root_declaration(&document.lines) {
            Some(line) => Placement {
                anchor: line,
                snippet: snippet::constructor_snippet(credentials),
            },
            None => return Outcome::NoAnchor,
        },
    };

    if !anchor_still_valid(document, target, placement.anchor) {
        return Outcome::NoAnchor;
    }

    // The import only moves the anchor when it was spliced at or above it;
    // imports may legally sit below file-scope declarations in Swift.
    let shift = match insert_import(document) {
        Some(index) if index <= placement.anchor => 1,
        _ => 0,
    };
    document
        .lines
        .insert(placement.anchor + shift + 1, placement.snippet);

    Outcome::Inserted
}

/// Apply the edit to a file on disk.
///
/// Exactly one write on [`Outcome::Inserted`]; zero writes otherwise.
/// `dry_run` computes the same outcome without touching the file.
pub fn apply_to_file(
    path: &Path,
    target: &InsertionTarget,
    credentials: &Credentials,
    dry_run: bool,
) -> Result<Outcome> {
    let mut document = SourceDocument::read(path)?;
    let outcome = apply(&mut document, target, credentials);

    if outcome == Outcome::Inserted && !dry_run {
        document.write_back()?;
    }

    Ok(outcome)
}

struct Placement {
    anchor: usize,
    snippet: String,
}

/// Re-check that the classifier's anchor line still matches in this document.
/// The classifier may have run against stale or different content.
fn anchor_still_valid(document: &SourceDocument, target: &InsertionTarget, anchor: usize) -> bool {
    let Some(line) = document.lines.get(anchor) else {
        return false;
    };

    match target {
        InsertionTarget::DelegateCallback { .. } => {
            line.contains("func application") && line.contains("didFinishLaunchingWithOptions")
        }
        InsertionTarget::AnnotatedRoot {
            init_line: Some(_), ..
        } => line.trim().starts_with("init()"),
        InsertionTarget::AnnotatedRoot {
            init_line: None, ..
        } => true,
    }
}

/// Insert `import Plengi` after the last existing import, or at the top of
/// the file when no import exists. Returns the index the line was inserted
/// at, or `None` when the import already exists.
fn insert_import(document: &mut SourceDocument) -> Option<usize> {
    let already_imported = document
        .lines
        .iter()
        .any(|line| line.trim() == snippet::import_line());
    if already_imported {
        return None;
    }

    let last_import = document
        .lines
        .iter()
        .rposition(|line| line.trim().starts_with("import "));

    let index = match last_import {
        Some(i) => i + 1,
        None => 0,
    };

    document.lines.insert(index, snippet::import_line());
    Some(index)
}
