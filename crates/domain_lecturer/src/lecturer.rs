//! Lecturer profile record

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::LecturerId;

/// A lecturer in the directory
///
/// Fields are free text with no uniqueness or format invariants; presence
/// is the only requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Lecturer {
    /// Store-assigned identity; `UNASSIGNED` until inserted
    pub id: LecturerId,
    /// Full name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Contact email
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Home department
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    /// Contact phone number
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

impl Lecturer {
    /// Builds a lecturer record awaiting insertion
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: LecturerId::UNASSIGNED,
            name: name.into(),
            email: email.into(),
            department: department.into(),
            phone: phone.into(),
        }
    }
}
