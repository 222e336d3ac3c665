//! Lecturers collection
//!
//! Structurally identical to the claims side, minus the review operations.
//! Its lock is independent of the claims lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use core_kernel::LecturerId;
use domain_lecturer::Lecturer;

/// Lecturers side of the registry
#[derive(Debug, Default)]
pub struct LecturersStore {
    inner: Mutex<Inner>,
}

#[derive(Debug)]
struct Inner {
    lecturers: Vec<Lecturer>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            lecturers: Vec::new(),
            next_id: 1,
        }
    }
}

impl LecturersStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a clone of every lecturer, insertion order
    pub fn list(&self) -> Vec<Lecturer> {
        self.lock().lecturers.clone()
    }

    /// Returns a clone of the lecturer with the given id
    pub fn get(&self, id: LecturerId) -> Option<Lecturer> {
        self.lock().lecturers.iter().find(|l| l.id == id).cloned()
    }

    /// Inserts a lecturer, assigning the next sequential identity
    ///
    /// Any identity on the input is ignored; the counter is independent of
    /// the claims counter. Returns a clone of the stored record.
    pub fn add(&self, lecturer: Lecturer) -> Lecturer {
        let mut inner = self.lock();
        let mut stored = lecturer;
        stored.id = LecturerId::new(inner.next_id);
        inner.next_id += 1;
        inner.lecturers.push(stored.clone());
        stored
    }

    /// Overwrites the profile fields of the lecturer with the matching id
    ///
    /// Returns false when no lecturer has that id.
    pub fn update(&self, lecturer: &Lecturer) -> bool {
        let mut inner = self.lock();
        match inner.lecturers.iter_mut().find(|l| l.id == lecturer.id) {
            Some(existing) => {
                existing.name = lecturer.name.clone();
                existing.email = lecturer.email.clone();
                existing.department = lecturer.department.clone();
                existing.phone = lecturer.phone.clone();
                true
            }
            None => false,
        }
    }

    /// Removes the lecturer with the given id; returns whether one was removed
    pub fn delete(&self, id: LecturerId) -> bool {
        let mut inner = self.lock();
        let before = inner.lecturers.len();
        inner.lecturers.retain(|l| l.id != id);
        inner.lecturers.len() != before
    }
}
