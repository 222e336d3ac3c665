//! Test Utilities
//!
//! Shared builders and fixtures for the workspace test suites. Builders
//! construct entities with sensible defaults so tests specify only the
//! fields they care about.

pub mod builders;
pub mod fixtures;

pub use builders::{ClaimBuilder, LecturerBuilder};
pub use fixtures::{temp_web_root, StringFixtures};
