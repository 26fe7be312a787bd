use peoplestore_core::db::open_db_in_memory;
use peoplestore_core::{Customer, CustomerRepository, DocCustomerRepository, RepoError};
use std::collections::HashSet;

#[test]
fn save_assigns_id_and_preserves_names() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    let saved = repo.save(&Customer::new("Alice", "Smith")).unwrap();
    assert!(saved.is_persisted());
    assert_eq!(saved.first_name, "Alice");
    assert_eq!(saved.last_name, "Smith");
}

#[test]
fn save_preserves_existing_id_and_replaces_state() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    let saved = repo.save(&Customer::new("Alice", "Smith")).unwrap();
    let id = saved.id.unwrap();

    let resaved = repo
        .save(&Customer::with_id(id, "Alice", "Jones"))
        .unwrap();
    assert_eq!(resaved.id, Some(id));

    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].last_name, "Jones");
}

#[test]
fn find_all_roundtrips_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    let alice = repo.save(&Customer::new("Alice", "Smith")).unwrap();
    let bob = repo.save(&Customer::new("Bob", "Smith")).unwrap();

    let all: HashSet<_> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|customer| (customer.id, customer.first_name, customer.last_name))
        .collect();
    assert_eq!(all.len(), 2);
    assert!(all.contains(&(alice.id, "Alice".to_string(), "Smith".to_string())));
    assert!(all.contains(&(bob.id, "Bob".to_string(), "Smith".to_string())));
}

#[test]
fn delete_all_empties_collection_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    repo.save(&Customer::new("Alice", "Smith")).unwrap();
    repo.save(&Customer::new("Bob", "Smith")).unwrap();

    repo.delete_all().unwrap();
    assert!(repo.find_all().unwrap().is_empty());

    repo.delete_all().unwrap();
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn find_by_first_name_returns_single_match() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    repo.save(&Customer::new("Alice", "Smith")).unwrap();
    repo.save(&Customer::new("Bob", "Smith")).unwrap();

    let alice = repo.find_by_first_name("Alice").unwrap();
    assert_eq!(alice.first_name, "Alice");
    assert_eq!(alice.last_name, "Smith");
}

#[test]
fn find_by_first_name_without_match_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    let err = repo.find_by_first_name("Zoe").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { first_name } if first_name == "Zoe"));
}

#[test]
fn find_by_first_name_with_duplicates_is_ambiguous() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    repo.save(&Customer::new("Alice", "Smith")).unwrap();
    repo.save(&Customer::new("Alice", "Jones")).unwrap();

    let err = repo.find_by_first_name("Alice").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Ambiguous {
            matches: 2,
            ref first_name,
        } if first_name == "Alice"
    ));
}

#[test]
fn find_by_last_name_returns_all_matches() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    repo.save(&Customer::new("Alice", "Smith")).unwrap();
    repo.save(&Customer::new("Bob", "Smith")).unwrap();
    repo.save(&Customer::new("Carol", "Jones")).unwrap();

    let smiths: HashSet<_> = repo
        .find_by_last_name("Smith")
        .unwrap()
        .into_iter()
        .map(|customer| customer.first_name)
        .collect();
    assert_eq!(
        smiths,
        HashSet::from(["Alice".to_string(), "Bob".to_string()])
    );

    assert!(repo.find_by_last_name("Nguyen").unwrap().is_empty());
}

#[test]
fn corrupt_document_body_surfaces_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = DocCustomerRepository::new(&conn);

    conn.execute(
        "INSERT INTO documents (collection, doc_id, body)
         VALUES ('customers', '00000000-0000-4000-8000-000000000001', 'not json');",
        [],
    )
    .unwrap();

    let err = repo.find_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
