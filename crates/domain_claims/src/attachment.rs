//! Proof-of-work file acceptance policy
//!
//! A submission may carry one evidence file. The policy is checked before
//! any byte reaches disk: a rejected file leaves no trace and the claim is
//! not persisted.

use crate::error::ClaimError;

/// Size ceiling for an uploaded proof file (10 MiB)
pub const MAX_PROOF_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions accepted for proof files, lowercase, without the dot
pub const ALLOWED_PROOF_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx"];

/// Validates a proof file against the size ceiling and extension allow-list
///
/// The extension check is case-insensitive. Files at exactly
/// [`MAX_PROOF_BYTES`] pass; only strictly larger ones are rejected.
pub fn validate_proof(file_name: &str, size: u64) -> Result<(), ClaimError> {
    if size > MAX_PROOF_BYTES {
        return Err(ClaimError::ProofTooLarge { size });
    }

    match file_extension(file_name) {
        Some(ext) if ALLOWED_PROOF_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(ClaimError::ProofTypeNotAllowed {
            file_name: file_name.to_string(),
        }),
    }
}

/// Extracts the lowercased extension of a file name, without the dot
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercased() {
        assert_eq!(file_extension("Report.PDF"), Some("pdf".to_string()));
    }

    #[test]
    fn test_extension_takes_last_segment() {
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".gitignore"), None);
        assert_eq!(file_extension("trailing."), None);
    }
}
