//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("File size must be less than 10MB")]
    ProofTooLarge { size: u64 },

    #[error("Only PDF, Word (.doc, .docx), and Excel (.xls, .xlsx) files are allowed")]
    ProofTypeNotAllowed { file_name: String },

    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),
}

impl ClaimError {
    /// The submission field a validation error is attached to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ClaimError::MissingField { field } => Some(field),
            ClaimError::ProofTooLarge { .. } | ClaimError::ProofTypeNotAllowed { .. } => {
                Some("file")
            }
            ClaimError::UnknownStatus(_) => None,
        }
    }
}
