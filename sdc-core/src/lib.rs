#![warn(missing_docs)]
//! Core domain models for supply and demand curve analysis.
//!
//! Everything in this crate is an immutable value type: sample data is
//! validated once at construction, and every downstream computation
//! produces a fresh value rather than mutating an existing one.

/// Domain models for curve analysis.
///
/// The models in this module are primarily data structures with minimal
/// business logic. Validation happens at the boundary: constructors and
/// deserialization go through DTOs that reject malformed data, so the
/// engine can assume every value it receives is well-formed.
pub mod models;
