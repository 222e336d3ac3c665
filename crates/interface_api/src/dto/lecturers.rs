//! Lecturer directory DTOs

use serde::{Deserialize, Serialize};

use domain_lecturer::Lecturer;

/// Form-encoded lecturer create/edit payload
#[derive(Debug, Deserialize)]
pub struct LecturerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub phone: String,
}

impl From<LecturerForm> for Lecturer {
    fn from(form: LecturerForm) -> Self {
        Lecturer::new(form.name, form.email, form.department, form.phone)
    }
}

#[derive(Debug, Serialize)]
pub struct LecturerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub phone: String,
}

impl From<Lecturer> for LecturerResponse {
    fn from(lecturer: Lecturer) -> Self {
        Self {
            id: lecturer.id.value(),
            name: lecturer.name,
            email: lecturer.email,
            department: lecturer.department,
            phone: lecturer.phone,
        }
    }
}
