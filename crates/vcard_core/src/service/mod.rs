//! Use-case services tying the record store to card generation.
//!
//! # Responsibility
//! - Provide stable entry points for operator-facing workflows.
//! - Delegate persistence to repository implementations and artifact work
//!   to the qr module.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

pub mod contact_service;
