//! Domain model for the contact registry.
//!
//! # Responsibility
//! - Define the canonical contact record and its write-side input shape.
//! - Keep field validation rules in one place.
//!
//! # Invariants
//! - Every persisted contact is identified by a stable store-assigned id.
//! - Email addresses are unique across the registry.

pub mod contact;
