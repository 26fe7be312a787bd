//! Relational customer repository.
//!
//! # Responsibility
//! - Implement the customer contract over the `customers` table.
//! - Provide the table reset, batched insert and multi-row lookup the
//!   relational runner drives.
//!
//! # Invariants
//! - Identifiers come from the engine (`last_insert_rowid`), never from
//!   application code on first save.
//! - `reset_table` leaves an empty table regardless of prior state.

use crate::model::customer::Customer;
use crate::repo::customer_repo::{expect_single, CustomerRepository, RepoResult};
use rusqlite::{params, Connection, Row};

const CUSTOMER_SELECT_SQL: &str = "SELECT id, first_name, last_name FROM customers";

/// Customer repository backed by the relational `customers` table.
pub struct SqlCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlCustomerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Drops and recreates the `customers` table.
    ///
    /// The relational demo owns its DDL, so the table is rebuilt on every
    /// run rather than migrated. Idempotent.
    pub fn reset_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(
            "DROP TABLE IF EXISTS customers;
             CREATE TABLE customers (
                 id         INTEGER PRIMARY KEY AUTOINCREMENT,
                 first_name TEXT NOT NULL,
                 last_name  TEXT NOT NULL
             );",
        )?;
        Ok(())
    }

    /// Persists a batch of customers through one prepared statement inside a
    /// single transaction. Returns the persisted copies in input order.
    pub fn save_batch(&self, customers: &[Customer<i64>]) -> RepoResult<Vec<Customer<i64>>> {
        // Unchecked transaction because the repository borrows the
        // connection; the runner never holds overlapping transactions.
        let tx = self.conn.unchecked_transaction()?;
        let mut persisted = Vec::with_capacity(customers.len());
        {
            let mut stmt = tx.prepare(
                "INSERT INTO customers (first_name, last_name) VALUES (?1, ?2);",
            )?;
            for customer in customers {
                stmt.execute(params![customer.first_name, customer.last_name])?;
                persisted.push(Customer::with_id(
                    tx.last_insert_rowid(),
                    customer.first_name.clone(),
                    customer.last_name.clone(),
                ));
            }
        }
        tx.commit()?;
        Ok(persisted)
    }

    /// Returns all customers matching the first name, engine order.
    ///
    /// The multi-row counterpart to the contract's single-result
    /// `find_by_first_name`; the relational demo reports every match.
    pub fn find_all_by_first_name(&self, first_name: &str) -> RepoResult<Vec<Customer<i64>>> {
        self.query_customers(
            &format!("{CUSTOMER_SELECT_SQL} WHERE first_name = ?1"),
            params![first_name],
        )
    }

    fn query_customers(
        &self,
        sql: &str,
        bind: impl rusqlite::Params,
    ) -> RepoResult<Vec<Customer<i64>>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(bind)?;

        let mut customers = Vec::new();
        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }
        Ok(customers)
    }
}

impl CustomerRepository for SqlCustomerRepository<'_> {
    type Id = i64;

    fn save(&self, customer: &Customer<i64>) -> RepoResult<Customer<i64>> {
        let id = match customer.id {
            Some(id) => {
                // Preserve an already-assigned identifier: full-state write
                // keyed on it.
                self.conn.execute(
                    "INSERT INTO customers (id, first_name, last_name)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT (id) DO UPDATE SET
                         first_name = excluded.first_name,
                         last_name = excluded.last_name;",
                    params![id, customer.first_name, customer.last_name],
                )?;
                id
            }
            None => {
                self.conn.execute(
                    "INSERT INTO customers (first_name, last_name) VALUES (?1, ?2);",
                    params![customer.first_name, customer.last_name],
                )?;
                self.conn.last_insert_rowid()
            }
        };

        Ok(Customer::with_id(
            id,
            customer.first_name.clone(),
            customer.last_name.clone(),
        ))
    }

    fn find_all(&self) -> RepoResult<Vec<Customer<i64>>> {
        self.query_customers(CUSTOMER_SELECT_SQL, [])
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM customers;", [])?;
        Ok(())
    }

    fn find_by_first_name(&self, first_name: &str) -> RepoResult<Customer<i64>> {
        expect_single(first_name, self.find_all_by_first_name(first_name)?)
    }

    fn find_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Customer<i64>>> {
        self.query_customers(
            &format!("{CUSTOMER_SELECT_SQL} WHERE last_name = ?1"),
            params![last_name],
        )
    }
}

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer<i64>> {
    Ok(Customer::with_id(
        row.get::<_, i64>("id")?,
        row.get::<_, String>("first_name")?,
        row.get::<_, String>("last_name")?,
    ))
}
