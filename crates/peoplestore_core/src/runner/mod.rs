//! One-shot startup runners.
//!
//! # Responsibility
//! - Drive each repository through its fixed clear / seed / report sequence.
//!
//! # Invariants
//! - Runners execute a single linear path; the first repository error aborts
//!   the run unmodified. No retries, no partial recovery.

pub mod doc_runner;
pub mod sql_runner;
