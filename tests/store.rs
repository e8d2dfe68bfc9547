use std::io::Cursor;

use rusty_contacts::prelude::*;

fn names(contacts: &[Contact]) -> Vec<&str> {
    contacts.iter().map(Contact::name).collect()
}

#[test]
fn two_contact_scenario() {
    let mut store = ContactStore::new();
    store.add("Bob", "111", "Friends");
    store.add("Alice", "222", "Work");

    assert_eq!(names(&store.list_fifo()), vec!["Bob", "Alice"]);
    assert_eq!(names(&store.list_lifo()), vec!["Alice", "Bob"]);
    assert_eq!(names(&store.list_alphabetical()), vec!["Alice", "Bob"]);
}

#[test]
fn empty_store_scenario() {
    let store = ContactStore::new();

    assert!(store.list_alphabetical().is_empty());
    assert!(store.list_by_quick_sort().is_empty());
    assert!(store.list_by_merge_sort().is_empty());
    assert!(store.list_fifo().is_empty());
    assert!(store.list_lifo().is_empty());
    assert!(store.list_by_category("Family").is_empty());
    assert_eq!(store.search("x"), None);
}

#[test]
fn exact_search_scenario() {
    let mut store = ContactStore::new();
    let ann = store.add("Ann", "555", "Family");

    let found = store.locate("ann").unwrap();
    assert_eq!(found.contact, ann);
    assert_eq!(found.phase, MatchPhase::Exact);
}

#[test]
fn partial_search_scenario() {
    let mut store = ContactStore::new();
    let annabelle = store.add("Annabelle", "333", "Family");

    let found = store.locate("nab").unwrap();
    assert_eq!(found.contact, annabelle);
    assert_eq!(found.phase, MatchPhase::Partial);
}

#[test]
fn stable_duplicate_scenario() {
    let mut store = ContactStore::new();
    store.add("Sam", "1", "Work");
    store.add("Sam", "2", "Work");

    let sorted = store.list_alphabetical();
    let phones: Vec<&str> = sorted.iter().map(|c| c.phone()).collect();
    assert_eq!(phones, vec!["1", "2"]);
}

#[test]
fn session_over_in_memory_buffers() -> Result<(), AppError> {
    let mut session = Session::new(
        ContactStore::new(),
        SearchHistory::new(Some(3)),
        display::OutputFormat::Table,
        Cursor::new(b"1\nAnn\n555\nFamily\n8\nann\n10\n".to_vec()),
        Vec::new(),
    );
    session.run()?;

    assert_eq!(session.store().len(), 1);
    assert_eq!(session.history().len(), 1);

    let output = String::from_utf8_lossy(&session.into_output()).to_string();
    assert!(output.contains("Ann - 555 (Family)"));
    Ok(())
}

#[test]
fn shared_store_round_trip() -> Result<(), AppError> {
    let shared = SharedContactStore::new(ContactStore::with_search_mode(SearchMode::Legacy));
    let writer = shared.clone();

    std::thread::spawn(move || writer.add("Ann", "555", "Family"))
        .join()
        .expect("writer thread")?;

    assert!(!shared.is_empty()?);
    assert_eq!(shared.search("ANN")?.map(|c| c.phone().to_string()), Some("555".to_string()));
    assert_eq!(names(&shared.list_alphabetical()?), vec!["Ann"]);
    assert_eq!(shared.list_lifo()?.len(), 1);
    assert_eq!(shared.list_by_quick_sort()?, shared.list_by_merge_sort()?);
    Ok(())
}
