//! In-Memory Registry
//!
//! This crate is the single source of truth for claim and lecturer state.
//! There is no database: entities live in process memory and disappear on
//! restart.
//!
//! # Contract
//!
//! - Each collection is guarded by its own mutual-exclusion lock, held for
//!   the full duration of every operation including the defensive clone, so
//!   no caller observes a partially mutated entity or a concurrent
//!   structural change. The two collections never block each other.
//! - Callers receive independent clones on every read and write-return;
//!   mutating a returned entity never touches stored state.
//! - Identities are assigned on insert from a process-lifetime counter
//!   starting at 1, never reused after deletion.
//! - Absence of a target id is a normal outcome (`Option`/`bool`), never an
//!   error.
//!
//! # Example
//!
//! ```rust
//! use infra_store::MemoryStore;
//! use domain_claims::ClaimSubmission;
//!
//! let store = MemoryStore::new();
//! let stored = store.claims().add(ClaimSubmission::default().into_claim(None));
//! assert!(stored.id.is_assigned());
//! ```

pub mod claims;
pub mod lecturers;
pub mod store;

pub use claims::ClaimsStore;
pub use lecturers::LecturersStore;
pub use store::MemoryStore;
