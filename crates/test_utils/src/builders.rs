//! Test Data Builders
//!
//! Builder patterns for constructing test entities with sensible defaults.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClaimId, LecturerId};
use domain_claims::{Claim, ClaimStatus};
use domain_lecturer::Lecturer;

use crate::fixtures::StringFixtures;

/// Builder for test claims
pub struct ClaimBuilder {
    id: ClaimId,
    lecturer_name: String,
    title: String,
    description: String,
    hours: i32,
    rate: Decimal,
    file_path: Option<String>,
    status: ClaimStatus,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::UNASSIGNED,
            lecturer_name: StringFixtures::lecturer_name().to_string(),
            title: StringFixtures::claim_title().to_string(),
            description: "Weekly research supervision".to_string(),
            hours: 40,
            rate: dec!(200.00),
            file_path: None,
            status: ClaimStatus::Pending,
        }
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    pub fn with_lecturer_name(mut self, name: impl Into<String>) -> Self {
        self.lecturer_name = name.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_hours(mut self, hours: i32) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            lecturer_name: self.lecturer_name,
            title: self.title,
            description: self.description,
            hours: self.hours,
            rate: self.rate,
            file_path: self.file_path,
            status: self.status,
        }
    }
}

/// Builder for test lecturers
pub struct LecturerBuilder {
    id: LecturerId,
    name: String,
    email: String,
    department: String,
    phone: String,
}

impl Default for LecturerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LecturerBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            id: LecturerId::UNASSIGNED,
            name: StringFixtures::lecturer_name().to_string(),
            email: "test.professor@university.ac.za".to_string(),
            department: StringFixtures::department().to_string(),
            phone: "011 555 0100".to_string(),
        }
    }

    pub fn with_id(mut self, id: LecturerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builds the lecturer
    pub fn build(self) -> Lecturer {
        Lecturer {
            id: self.id,
            name: self.name,
            email: self.email,
            department: self.department,
            phone: self.phone,
        }
    }
}
