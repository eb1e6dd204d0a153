//! Entry-point classification
//!
//! Decides which of the two supported Swift entry-point conventions a file
//! uses, from a single top-to-bottom line scan. Matching is keyword
//! co-occurrence on raw lines; there is no Swift grammar here.

use once_cell::sync::Lazy;
use regex::Regex;

/// UIKit delegate callback: `func application(... didFinishLaunchingWithOptions ...)`
static DELEGATE_CALLBACK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"func\s+application\b.*didFinishLaunchingWithOptions").unwrap());

/// SwiftUI application-root attribute
static MAIN_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@main\b").unwrap());

/// Root type declaration: `struct` co-occurring with the conventional `App` name fragment
static ROOT_DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bstruct\b.*App").unwrap());

/// Where the initialization snippet should be anchored in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionTarget {
    /// `application(_:didFinishLaunchingWithOptions:)` matched at `line`
    DelegateCallback { line: usize },
    /// `@main` attribute matched at `line`; `init_line` is the opening line
    /// of an existing constructor, when one was found
    AnnotatedRoot {
        line: usize,
        init_line: Option<usize>,
    },
}

/// Classify a file's entry-point convention.
///
/// The delegate callback wins on its first match; otherwise the `@main`
/// attribute selects the annotated-root variant. Returns `None` when the
/// file matches neither convention.
pub fn classify(content: &str) -> Option<InsertionTarget> {
    let mut main_line = None;
    let mut init_line = None;

    for (index, line) in content.lines().enumerate() {
        if DELEGATE_CALLBACK.is_match(line) {
            return Some(InsertionTarget::DelegateCallback { line: index });
        }

        if main_line.is_none() && MAIN_ATTRIBUTE.is_match(line) {
            main_line = Some(index);
        }

        if init_line.is_none() && line.trim().starts_with("init()") {
            init_line = Some(index);
        }
    }

    main_line.map(|line| InsertionTarget::AnnotatedRoot { line, init_line })
}

/// Find the root type declaration line for the annotated-root variant.
///
/// Used by the mutation engine when no constructor exists and a full
/// `init()` block has to be inserted inside the root type.
pub fn find_root_declaration(lines: &[String]) -> Option<usize> {
    lines.iter().position(|line| ROOT_DECLARATION.is_match(line))
}
