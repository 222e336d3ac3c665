//! Core Kernel - Foundational types for the claims service
//!
//! This crate provides the building blocks shared across all domain
//! modules: strongly-typed sequential identifiers.

pub mod identifiers;

pub use identifiers::{ClaimId, LecturerId};
