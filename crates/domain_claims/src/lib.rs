//! Claims Domain
//!
//! This crate implements the lecturer claim lifecycle: a submission of
//! worked hours at an hourly rate, optionally evidenced by a proof-of-work
//! file, progressing through a review status.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Approved
//!         -> Rejected
//! ```
//!
//! Status changes are deliberately unconstrained: the review operation
//! overwrites the status without checking the current one.

pub mod attachment;
pub mod claim;
pub mod error;
pub mod submission;

pub use attachment::{validate_proof, ALLOWED_PROOF_EXTENSIONS, MAX_PROOF_BYTES};
pub use claim::{Claim, ClaimStatus};
pub use error::ClaimError;
pub use submission::ClaimSubmission;
