//! Error types for the marble run planner.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the parts catalog.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The parts root does not exist.
    #[error("parts directory '{path}' does not exist")]
    MissingRoot { path: PathBuf },

    /// The parts root exists but is not a directory.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// Listing a directory failed.
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Inspecting a directory entry failed.
    #[error("failed to read metadata for '{path}': {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur when loading catalog or kit documents.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the document from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON for the expected schema.
    #[error("invalid document '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to move the finished file into place.
    #[error("failed to move '{from}' to '{to}': {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
