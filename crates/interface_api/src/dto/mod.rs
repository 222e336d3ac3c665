//! Request/Response data transfer objects

pub mod claims;
pub mod lecturers;
