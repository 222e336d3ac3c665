//! Claims collection
//!
//! All operations lock the collection for their full duration, including
//! the clone handed back to the caller. No operation performs I/O under
//! the lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStatus};

/// Claims side of the registry
#[derive(Debug, Default)]
pub struct ClaimsStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    claims: Vec<Claim>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            claims: Vec::new(),
            next_id: 1,
        }
    }
}

impl ClaimsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Writes are whole-field overwrites, so the data behind a poisoned
        // lock is still consistent; recover instead of propagating the panic.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a clone of every claim, insertion order
    pub fn list(&self) -> Vec<Claim> {
        self.lock().claims.clone()
    }

    /// Returns a clone of the claim with the given id
    pub fn get(&self, id: ClaimId) -> Option<Claim> {
        self.lock().claims.iter().find(|c| c.id == id).cloned()
    }

    /// Inserts a claim, assigning the next sequential identity
    ///
    /// Any identity on the input is ignored. The counter is process-lifetime
    /// monotonic; an id is never handed out twice, even after deletion.
    /// Returns a clone of the stored claim.
    pub fn add(&self, claim: Claim) -> Claim {
        let mut inner = self.lock();
        let mut stored = claim;
        stored.id = ClaimId::new(inner.next_id);
        inner.next_id += 1;
        inner.claims.push(stored.clone());
        stored
    }

    /// Overwrites the mutable fields of the claim with the matching id
    ///
    /// Title, description, hours, rate, file reference, and status are
    /// replaced wholesale; identity and lecturer name are untouched.
    /// Returns false when no claim has that id.
    pub fn update(&self, claim: &Claim) -> bool {
        let mut inner = self.lock();
        match inner.claims.iter_mut().find(|c| c.id == claim.id) {
            Some(existing) => {
                existing.title = claim.title.clone();
                existing.description = claim.description.clone();
                existing.hours = claim.hours;
                existing.rate = claim.rate;
                existing.file_path = claim.file_path.clone();
                existing.status = claim.status;
                true
            }
            None => false,
        }
    }

    /// Removes the claim with the given id; returns whether one was removed
    pub fn delete(&self, id: ClaimId) -> bool {
        let mut inner = self.lock();
        let before = inner.claims.len();
        inner.claims.retain(|c| c.id != id);
        inner.claims.len() != before
    }

    /// Returns clones of the claims still awaiting review
    pub fn list_pending(&self) -> Vec<Claim> {
        self.lock()
            .claims
            .iter()
            .filter(|c| c.status == ClaimStatus::Pending)
            .cloned()
            .collect()
    }

    /// Overwrites the status of the claim with the given id
    ///
    /// No transition legality check: any status can replace any other.
    /// Returns false when no claim has that id.
    pub fn set_status(&self, id: ClaimId, status: ClaimStatus) -> bool {
        let mut inner = self.lock();
        match inner.claims.iter_mut().find(|c| c.id == id) {
            Some(claim) => {
                claim.status = status;
                tracing::debug!(claim = %id, %status, "claim status updated");
                true
            }
            None => {
                tracing::debug!(claim = %id, "status update target not found");
                false
            }
        }
    }
}
