//! Customer repository contract and error taxonomy.
//!
//! # Responsibility
//! - Define the store-agnostic CRUD and finder contract both demo variants
//!   implement.
//!
//! # Invariants
//! - `save` never returns a customer without an identifier.
//! - `find_by_first_name` resolves to exactly one customer; zero matches are
//!   `NotFound`, two or more are `Ambiguous`. Neither case is masked by
//!   picking an arbitrary row.

use crate::db::DbError;
use crate::model::customer::Customer;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for customer persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Storage engine failure: unreachable database, constraint violation,
    /// malformed statement.
    Db(DbError),
    /// `find_by_first_name` matched no customer.
    NotFound { first_name: String },
    /// `find_by_first_name` matched more than one customer.
    Ambiguous { first_name: String, matches: usize },
    /// Persisted state could not be decoded back into a customer.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { first_name } => {
                write!(f, "no customer with first name `{first_name}`")
            }
            Self::Ambiguous {
                first_name,
                matches,
            } => write!(
                f,
                "first name `{first_name}` matched {matches} customers, expected exactly one"
            ),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted customer data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } | Self::Ambiguous { .. } | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store-agnostic repository contract over one customer collection.
///
/// `Id` is whatever identifier the backing engine assigns: a UUID for the
/// document collection, a rowid for the relational table.
pub trait CustomerRepository {
    type Id;

    /// Persists the customer, assigning an identifier when it has none and
    /// preserving it otherwise. Returns the persisted copy with `id` set.
    fn save(&self, customer: &Customer<Self::Id>) -> RepoResult<Customer<Self::Id>>;

    /// Returns every stored customer in engine-defined order. An empty
    /// collection yields an empty vec, never an error.
    fn find_all(&self) -> RepoResult<Vec<Customer<Self::Id>>>;

    /// Removes every customer from the collection. Idempotent.
    fn delete_all(&self) -> RepoResult<()>;

    /// Returns the single customer with the given first name.
    fn find_by_first_name(&self, first_name: &str) -> RepoResult<Customer<Self::Id>>;

    /// Returns all customers with the given last name, engine order.
    fn find_by_last_name(&self, last_name: &str) -> RepoResult<Vec<Customer<Self::Id>>>;
}

/// Collapses a finder result set into the single-customer contract of
/// `find_by_first_name`.
pub(crate) fn expect_single<K>(
    first_name: &str,
    mut matches: Vec<Customer<K>>,
) -> RepoResult<Customer<K>> {
    match matches.len() {
        0 => Err(RepoError::NotFound {
            first_name: first_name.to_string(),
        }),
        1 => Ok(matches.remove(0)),
        count => Err(RepoError::Ambiguous {
            first_name: first_name.to_string(),
            matches: count,
        }),
    }
}
