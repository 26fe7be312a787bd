//! Document-store demo runner.
//!
//! # Responsibility
//! - Exercise a customer repository through the document demo sequence:
//!   clear, seed two customers one at a time, report all, look up by first
//!   name, look up by last name.

use crate::model::customer::Customer;
use crate::repo::customer_repo::{CustomerRepository, RepoResult};
use log::info;
use std::fmt::Display;

const SEED: &[(&str, &str)] = &[("Alice", "Smith"), ("Bob", "Smith")];
const FIRST_NAME_LOOKUP: &str = "Alice";
const LAST_NAME_LOOKUP: &str = "Smith";

/// One-shot runner for the document-store variant.
///
/// Holds the repository it was constructed with; invoked once at process
/// start, the result is not consumed beyond abort-on-error.
pub struct DocRunner<R> {
    repo: R,
}

impl<R> DocRunner<R>
where
    R: CustomerRepository,
    R::Id: Display,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Runs the demo sequence. The first repository error aborts the run.
    pub fn run(&self) -> RepoResult<()> {
        info!("event=collection_clear module=doc_runner status=start");
        self.repo.delete_all()?;

        for (first_name, last_name) in SEED {
            let saved = self.repo.save(&Customer::new(*first_name, *last_name))?;
            info!("event=customer_saved module=doc_runner customer={saved}");
        }

        info!("event=report_all module=doc_runner status=start");
        for customer in self.repo.find_all()? {
            info!("event=customer_row module=doc_runner customer={customer}");
        }

        info!("event=first_name_lookup module=doc_runner first_name={FIRST_NAME_LOOKUP}");
        let customer = self.repo.find_by_first_name(FIRST_NAME_LOOKUP)?;
        info!("event=first_name_hit module=doc_runner customer={customer}");

        info!("event=last_name_lookup module=doc_runner last_name={LAST_NAME_LOOKUP}");
        for customer in self.repo.find_by_last_name(LAST_NAME_LOOKUP)? {
            info!("event=last_name_hit module=doc_runner customer={customer}");
        }

        info!("event=doc_demo module=doc_runner status=ok");
        Ok(())
    }
}
