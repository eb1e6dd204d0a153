use thiserror::Error;

pub type Result<T> = std::result::Result<T, InjectError>;

#[derive(Error, Debug)]
pub enum InjectError {
    #[error("{field} must not be empty")]
    EmptyCredential { field: &'static str },

    #[error("{field} contains characters that cannot be embedded in a Swift string literal: {reason}")]
    UnsafeCredential {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Not an Xcode project: no .xcodeproj or .xcworkspace found in {0}")]
    NotAnXcodeProject(String),

    #[error("No AppDelegate.swift or @main annotated file found in the project")]
    NoEntryPointFile,

    #[error("No recognized entry-point convention in {0}")]
    NoEntryPointConvention(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
