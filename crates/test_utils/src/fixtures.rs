//! Test fixtures
//!
//! Canonical string values reused across test suites, plus helpers for
//! isolated filesystem roots in upload tests.

use std::path::PathBuf;

use fake::faker::name::en::Name;
use fake::Fake;
use uuid::Uuid;

/// Canonical string values for tests
pub struct StringFixtures;

impl StringFixtures {
    pub fn lecturer_name() -> &'static str {
        "Dr. Test Professor"
    }

    pub fn claim_title() -> &'static str {
        "Research Hours"
    }

    pub fn department() -> &'static str {
        "Computer Science"
    }

    /// A generated, unlikely-to-collide lecturer name
    pub fn random_lecturer_name() -> String {
        format!("Dr. {}", Name().fake::<String>())
    }
}

/// Creates a fresh web-root directory under the system temp dir
///
/// Each call returns a unique path, so parallel tests never share an
/// uploads area. The directory itself is created; callers own cleanup.
pub fn temp_web_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("claims-api-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&root).expect("temp web root");
    root
}
