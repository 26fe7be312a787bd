//! Domain model shared by both demo variants.
//!
//! # Responsibility
//! - Define the canonical customer record used by every repository.
//!
//! # Invariants
//! - An identifier, once assigned by a store, is never changed in place.

pub mod customer;
