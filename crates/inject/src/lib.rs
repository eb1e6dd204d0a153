//! Plengi SDK injection for Xcode projects
//!
//! This crate wires the Loplat Plengi SDK into an existing Swift application
//! without a parser:
//! - Locate the entry-point file in an Xcode project tree
//! - Classify which entry-point convention it uses (UIKit AppDelegate
//!   callback or SwiftUI `@main` root)
//! - Insert the SDK initialization snippet and `import Plengi` exactly once
//!
//! Matching is deliberately line-oriented keyword heuristics, not a grammar.

pub mod classify;
pub mod credentials;
pub mod engine;
pub mod error;
pub mod injector;
pub mod project;
pub mod snippet;
pub mod steps;

pub use classify::InsertionTarget;
pub use credentials::Credentials;
pub use engine::{Outcome, SourceDocument};
pub use error::{InjectError, Result};
pub use injector::{InjectReport, Injector};
pub use steps::{Step, StepEvent, StepNotifier, StepState, StepTracker};

/// Vendor module added to the entry-point file's imports
pub const SDK_MODULE: &str = "Plengi";

/// Call signature used by the duplicate-insertion guard
pub const SDK_INIT_CALL: &str = "Plengi.initialize";

/// File name resolved first when locating the entry point
pub const APP_DELEGATE_FILE: &str = "AppDelegate.swift";
