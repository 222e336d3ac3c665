//! The shared registry

use crate::claims::ClaimsStore;
use crate::lecturers::LecturersStore;

/// Owner of all entity state
///
/// One instance is created at startup and dependency-passed (typically as
/// `Arc<MemoryStore>`) into every request handler; there is no process-wide
/// singleton. Claims and lecturers sit behind independent locks, so traffic
/// on one collection never blocks the other. No cross-collection
/// transaction exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    claims: ClaimsStore,
    lecturers: LecturersStore,
}

impl MemoryStore {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The claims collection
    pub fn claims(&self) -> &ClaimsStore {
        &self.claims
    }

    /// The lecturers collection
    pub fn lecturers(&self) -> &LecturersStore {
        &self.lecturers
    }
}
