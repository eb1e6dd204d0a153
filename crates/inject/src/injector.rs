//! Injection orchestration
//!
//! Ties the locator, classifier and mutation engine into one run:
//! validate credentials, locate the project, resolve the entry point,
//! apply the edit. Every failure is terminal for the invocation and maps
//! to exactly one reported condition; nothing is retried.

use crate::classify::{classify, InsertionTarget};
use crate::credentials::Credentials;
use crate::engine::{self, Outcome};
use crate::error::{InjectError, Result};
use crate::project;
use crate::steps::{Step, StepNotifier, StepState};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Options and state for one injection run
pub struct Injector {
    root: PathBuf,
    dry_run: bool,
    notifier: StepNotifier,
}

/// What one run did, for rendering and `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct InjectReport {
    pub outcome: Outcome,
    pub file: PathBuf,
    pub entry_point: EntryPointKind,
    pub dry_run: bool,
}

/// Which entry-point convention was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryPointKind {
    DelegateCallback,
    AnnotatedRoot,
}

impl From<&InsertionTarget> for EntryPointKind {
    fn from(target: &InsertionTarget) -> Self {
        match target {
            InsertionTarget::DelegateCallback { .. } => Self::DelegateCallback,
            InsertionTarget::AnnotatedRoot { .. } => Self::AnnotatedRoot,
        }
    }
}

impl Injector {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run: false,
            notifier: StepNotifier::silent(),
        }
    }

    /// Compute the outcome without writing the target file
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Send step transitions to this notifier while running
    pub fn with_notifier(mut self, notifier: StepNotifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Run the full injection flow once.
    ///
    /// Credentials are validated before anything touches the filesystem;
    /// the engine is never invoked with empty or unembeddable input.
    pub fn run(&self, client_id: &str, client_secret: &str) -> Result<InjectReport> {
        let credentials = self.step(Step::Credentials, || {
            Credentials::new(client_id, client_secret)
        })?;

        let file = self.step(Step::LocateProject, || {
            project::resolve_entry_file(&self.root)
        })?;

        let target = self.step(Step::ResolveEntryPoint, || {
            let content = fs::read_to_string(&file)?;
            classify(&content)
                .ok_or_else(|| InjectError::NoEntryPointConvention(file.display().to_string()))
        })?;

        // already-present and no-anchor are outcomes, not errors, but the
        // final step only shows success when something was inserted
        let outcome = match engine::apply_to_file(&file, &target, &credentials, self.dry_run) {
            Ok(Outcome::Inserted) => {
                self.notifier.notify(Step::ApplyEdit, StepState::Success);
                Outcome::Inserted
            }
            Ok(outcome) => {
                self.notifier.notify(Step::ApplyEdit, StepState::Failed);
                outcome
            }
            Err(err) => {
                self.notifier.notify(Step::ApplyEdit, StepState::Failed);
                return Err(err);
            }
        };

        Ok(InjectReport {
            outcome,
            entry_point: EntryPointKind::from(&target),
            file,
            dry_run: self.dry_run,
        })
    }

    fn step<T>(&self, step: Step, op: impl FnOnce() -> Result<T>) -> Result<T> {
        match op() {
            Ok(value) => {
                self.notifier.notify(step, StepState::Success);
                Ok(value)
            }
            Err(err) => {
                self.notifier.notify(step, StepState::Failed);
                Err(err)
            }
        }
    }
}
