//! Core library for the peoplestore demos.
//!
//! Two structurally identical subsystems share this crate: a document-style
//! customer collection and a relational customer table, each exposed through
//! the same repository contract and exercised by a one-shot startup runner.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod runner;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{Customer, DocId};
pub use repo::customer_repo::{CustomerRepository, RepoError, RepoResult};
pub use repo::doc_repo::DocCustomerRepository;
pub use repo::sql_repo::SqlCustomerRepository;
pub use runner::doc_runner::DocRunner;
pub use runner::sql_runner::SqlRunner;
