//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract shared by both store variants.
//! - Isolate SQLite query details from runner orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `Ambiguous`) in
//!   addition to DB transport errors.

pub mod customer_repo;
pub mod doc_repo;
pub mod sql_repo;
