//! Lecturer Directory Domain
//!
//! This crate holds the lecturer profile record. All fields are free text;
//! the only rule is that every field must be present, enforced through the
//! `validator` derive at the interface boundary.

pub mod lecturer;

pub use lecturer::Lecturer;
