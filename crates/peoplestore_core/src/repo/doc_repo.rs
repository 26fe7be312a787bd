//! Document-store customer repository.
//!
//! # Responsibility
//! - Implement the customer contract over the generic `documents` collection
//!   table, treating each customer as one JSON document.
//! - Keep the four document-store operation shapes (save, delete-all,
//!   find-all, find-by-field) inside this persistence boundary.
//!
//! # Invariants
//! - Document identity lives in the `doc_id` key column, never in the body.
//! - Read paths reject undecodable persisted documents instead of masking
//!   them.

use crate::model::customer::{Customer, DocId};
use crate::repo::customer_repo::{expect_single, CustomerRepository, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const COLLECTION: &str = "customers";

const DOC_SELECT_SQL: &str = "SELECT doc_id, body FROM documents WHERE collection = ?1";

/// Customer repository backed by the JSON document collection.
pub struct DocCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> DocCustomerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn find_by_field(&self, field: &str, value: &str) -> RepoResult<Vec<Customer<DocId>>> {
        // Field names are compile-time constants from this module; only the
        // looked-up value is bound as a parameter.
        let sql = format!("{DOC_SELECT_SQL} AND json_extract(body, '$.{field}') = ?2");
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![COLLECTION, value])?;

        let mut customers = Vec::new();
        while let Some(row) = rows.next()? {
            customers.push(parse_document_row(row)?);
        }
        Ok(customers)
    }
}

impl CustomerRepository for DocCustomerRepository<'_> {
    type Id = DocId;

    fn save(&self, customer: &Customer<DocId>) -> RepoResult<Customer<DocId>> {
        let doc_id = customer.id.unwrap_or_else(Uuid::new_v4);
        let body = serde_json::to_string(customer)
            .map_err(|err| RepoError::InvalidData(format!("failed to encode document: {err}")))?;

        self.conn.execute(
            "INSERT INTO documents (collection, doc_id, body)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (collection, doc_id) DO UPDATE SET body = excluded.body;",
            params![COLLECTION, doc_id.to_string(), body],
        )?;

        Ok(Customer::with_id(
            doc_id,
            customer.first_name.clone(),
            customer.last_name.clone(),
        ))
    }

    fn find_all(&self) -> RepoResult<Vec<Customer<DocId>>> {
        let mut stmt = self.conn.prepare(DOC_SELECT_SQL)?;
        let mut rows = stmt.query(params![COLLECTION])?;

        let mut customers = Vec::new();
        while let Some(row) = rows.next()? {
            customers.push(parse_document_row(row)?);
        }
        Ok(customers)
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM documents WHERE collection = ?1;",
            params![COLLECTION],
        )?;
        Ok(())
    }

    fn find_by_first_name(&self, first_name: &str) -> RepoResult<Customer<DocId>> {
        expect_single(first_name, self.find_by_field("first_name", first_name)?)
    }

    fn find_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Customer<DocId>>> {
        self.find_by_field("last_name", last_name)
    }
}

fn parse_document_row(row: &Row<'_>) -> RepoResult<Customer<DocId>> {
    let doc_id_text: String = row.get("doc_id")?;
    let doc_id = Uuid::parse_str(&doc_id_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{doc_id_text}` in documents.doc_id"
        ))
    })?;

    let body: String = row.get("body")?;
    let mut customer: Customer<DocId> = serde_json::from_str(&body).map_err(|err| {
        RepoError::InvalidData(format!("undecodable document body for `{doc_id_text}`: {err}"))
    })?;

    customer.id = Some(doc_id);
    Ok(customer)
}
