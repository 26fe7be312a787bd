//! Relational demo runner.
//!
//! # Responsibility
//! - Exercise the relational repository through the demo sequence: rebuild
//!   the table, seed four customers in one batch, report all, look up every
//!   match for a fixed first name.

use crate::model::customer::Customer;
use crate::repo::customer_repo::{CustomerRepository, RepoResult};
use crate::repo::sql_repo::SqlCustomerRepository;
use log::info;

const SEED_NAMES: &[&str] = &["John Woo", "Jeff Dean", "Josh Bloch", "Josh Long"];
const FIRST_NAME_LOOKUP: &str = "Josh";

/// One-shot runner for the relational variant.
///
/// Takes the concrete SQL repository: table DDL and the batched insert are
/// relational-only operations outside the shared contract.
pub struct SqlRunner<'conn> {
    repo: SqlCustomerRepository<'conn>,
}

impl<'conn> SqlRunner<'conn> {
    pub fn new(repo: SqlCustomerRepository<'conn>) -> Self {
        Self { repo }
    }

    /// Runs the demo sequence. The first repository error aborts the run.
    pub fn run(&self) -> RepoResult<()> {
        info!("event=table_reset module=sql_runner status=start");
        self.repo.reset_table()?;

        let seed: Vec<Customer<i64>> = SEED_NAMES
            .iter()
            .map(|full_name| split_full_name(full_name))
            .collect();
        for customer in &seed {
            info!(
                "event=customer_insert module=sql_runner first_name={} last_name={}",
                customer.first_name, customer.last_name
            );
        }
        self.repo.save_batch(&seed)?;

        info!("event=report_all module=sql_runner status=start");
        for customer in self.repo.find_all()? {
            info!("event=customer_row module=sql_runner customer={customer}");
        }

        info!("event=first_name_lookup module=sql_runner first_name={FIRST_NAME_LOOKUP}");
        for customer in self.repo.find_all_by_first_name(FIRST_NAME_LOOKUP)? {
            info!("event=first_name_hit module=sql_runner customer={customer}");
        }

        info!("event=sql_demo module=sql_runner status=ok");
        Ok(())
    }
}

/// Splits a `"First Last"` seed string on its first space.
fn split_full_name(full_name: &str) -> Customer<i64> {
    match full_name.split_once(' ') {
        Some((first_name, last_name)) => Customer::new(first_name, last_name),
        None => Customer::new(full_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::split_full_name;

    #[test]
    fn split_full_name_splits_on_first_space() {
        let customer = split_full_name("Josh Bloch");
        assert_eq!(customer.first_name, "Josh");
        assert_eq!(customer.last_name, "Bloch");
    }

    #[test]
    fn split_full_name_keeps_remainder_in_last_name() {
        let customer = split_full_name("Mary Jane Watson");
        assert_eq!(customer.first_name, "Mary");
        assert_eq!(customer.last_name, "Jane Watson");
    }
}
