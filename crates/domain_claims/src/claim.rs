//! Claim aggregate

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClaimError;
use core_kernel::ClaimId;

/// Claim review status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting a manager decision
    #[default]
    Pending,
    /// Approved by an academic manager
    Approved,
    /// Rejected by an academic manager
    Rejected,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        };
        f.write_str(name)
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ClaimStatus::Pending),
            "Approved" => Ok(ClaimStatus::Approved),
            "Rejected" => Ok(ClaimStatus::Rejected),
            other => Err(ClaimError::UnknownStatus(other.to_string())),
        }
    }
}

/// A lecturer's claim for worked hours
///
/// The claimed amount is never stored; [`Claim::amount`] recomputes it from
/// hours and rate on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Store-assigned identity; `UNASSIGNED` until inserted
    pub id: ClaimId,
    /// Submitting lecturer's name, fixed at submission time
    pub lecturer_name: String,
    /// Short title of the claimed work
    pub title: String,
    /// Description; falls back to a placeholder when left blank
    pub description: String,
    /// Worked hours (unvalidated)
    pub hours: i32,
    /// Hourly rate (unvalidated)
    pub rate: Decimal,
    /// Relative path of the stored proof file, if one was uploaded
    pub file_path: Option<String>,
    /// Review status
    pub status: ClaimStatus,
}

impl Claim {
    /// Total claimed amount, recomputed as `hours * rate`
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.hours) * self.rate
    }

    /// Whether a proof file is attached
    pub fn has_proof(&self) -> bool {
        self.file_path.as_deref().is_some_and(|p| !p.is_empty())
    }
}
