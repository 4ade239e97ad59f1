//! Error types for the cellcast library.

use thiserror::Error;

/// Main error type for token evaluation.
///
/// These are the pipeline-fatal failures. Literal-loader rejections are a
/// separate, recoverable tier ([`crate::loader::LoadError`]) that never
/// escapes the pipeline.
#[derive(Debug, Error)]
pub enum CellcastError {
    /// A date interpretation was selected but the token would not parse.
    #[error("cannot interpret '{token}' as a date: {detail}")]
    DateParse { token: String, detail: String },

    /// A deferred percent or sign correction landed on a non-numeric result.
    #[error("cannot apply {correction} to non-numeric result of '{token}'")]
    Correction {
        token: String,
        correction: &'static str,
    },
}

/// Result type alias for cellcast operations.
pub type Result<T> = std::result::Result<T, CellcastError>;
