//! Domain model for the student persistence core.
//!
//! # Responsibility
//! - Define canonical data structures used by repository and service layers.
//!
//! # Invariants
//! - Every persisted record is identified by a stable, store-assigned
//!   `StudentId`.

pub mod student;
