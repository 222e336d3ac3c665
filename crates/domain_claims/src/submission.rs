//! Claim submission and edit input
//!
//! Raw form fields on their way into a [`Claim`]. Validation covers only
//! field presence; hours and rate pass through unchecked.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use core_kernel::ClaimId;

/// Placeholder stored when a submission leaves the description blank
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Raw fields of a claim submission or edit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClaimSubmission {
    pub lecturer_name: String,
    pub title: String,
    pub description: String,
    pub hours: i32,
    pub rate: Decimal,
}

impl ClaimSubmission {
    /// Checks required fields; whitespace-only counts as blank
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.lecturer_name.trim().is_empty() {
            return Err(ClaimError::MissingField {
                field: "Lecturer Name",
            });
        }
        if self.title.trim().is_empty() {
            return Err(ClaimError::MissingField { field: "Title" });
        }
        Ok(())
    }

    /// Builds a new pending claim from this submission
    ///
    /// Fields are trimmed, a blank description becomes
    /// [`DEFAULT_DESCRIPTION`], and the identity is left for the store to
    /// assign.
    pub fn into_claim(self, file_path: Option<String>) -> Claim {
        Claim {
            id: ClaimId::UNASSIGNED,
            lecturer_name: self.lecturer_name.trim().to_string(),
            title: self.title.trim().to_string(),
            description: normalize_description(&self.description),
            hours: self.hours,
            rate: self.rate,
            file_path,
            status: ClaimStatus::Pending,
        }
    }

    /// Applies this submission to an existing claim
    ///
    /// Identity, lecturer name, and status are preserved; the edited claim
    /// keeps whatever review state it had.
    pub fn apply_to(&self, claim: &mut Claim, file_path: Option<String>) {
        claim.title = self.title.trim().to_string();
        claim.description = normalize_description(&self.description);
        claim.hours = self.hours;
        claim.rate = self.rate;
        claim.file_path = file_path;
    }
}

fn normalize_description(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        trimmed.to_string()
    }
}
