use thiserror::Error;

/// Custom error types for colstats
#[derive(Debug, Error)]
pub enum ColstatsError {
    /// The input path did not resolve to a readable file. The display string
    /// is part of the CLI contract.
    #[error("Error: File not found.")]
    FileNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
