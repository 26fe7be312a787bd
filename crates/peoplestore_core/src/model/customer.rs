//! Customer domain model.
//!
//! # Responsibility
//! - Define the plain customer record persisted by both store variants.
//!
//! # Invariants
//! - `id` is `None` until a store assigns it on first save, then immutable.
//! - `first_name` / `last_name` are free-form, never null.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned by the document store.
pub type DocId = Uuid;

/// Plain customer record, generic over the identifier type the backing store
/// assigns: `DocId` for the document collection, `i64` for the relational
/// table.
///
/// The identifier travels out-of-band as the storage key, so serde only
/// covers the name fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Customer<K> {
    /// Assigned by the storage engine on first save; absent before.
    #[serde(skip)]
    pub id: Option<K>,
    pub first_name: String,
    pub last_name: String,
}

impl<K> Customer<K> {
    /// Creates an unpersisted customer with no identifier.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Creates a customer carrying an already-assigned identifier.
    ///
    /// Used by read paths hydrating rows/documents from the store.
    pub fn with_id(
        id: K,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Returns whether this customer has been persisted at least once.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl<K: Display> Display for Customer<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(
                f,
                "Customer[id={id}, first_name={}, last_name={}]",
                self.first_name, self.last_name
            ),
            None => write!(
                f,
                "Customer[id=unassigned, first_name={}, last_name={}]",
                self.first_name, self.last_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Customer, DocId};
    use uuid::Uuid;

    #[test]
    fn new_customer_has_no_id() {
        let customer: Customer<i64> = Customer::new("Alice", "Smith");
        assert!(!customer.is_persisted());
        assert_eq!(customer.first_name, "Alice");
        assert_eq!(customer.last_name, "Smith");
    }

    #[test]
    fn display_includes_assigned_id() {
        let id: DocId = Uuid::nil();
        let customer = Customer::with_id(id, "Bob", "Smith");
        let rendered = customer.to_string();
        assert!(rendered.contains(&id.to_string()));
        assert!(rendered.contains("first_name=Bob"));
    }

    #[test]
    fn display_marks_unassigned_id() {
        let customer: Customer<i64> = Customer::new("Alice", "Smith");
        assert!(customer.to_string().contains("id=unassigned"));
    }
}
