//! Behavioural coverage for lookups against the bundled dataset.

use std::cell::RefCell;

use plz_core::{Entry, Gazetteer, InvalidPatternError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type SearchResult = Result<Vec<Entry>, InvalidPatternError>;

#[fixture]
fn gazetteer() -> Gazetteer {
    match Gazetteer::embedded() {
        Ok(gazetteer) => gazetteer,
        Err(err) => panic!("load bundled dataset: {err}"),
    }
}

/// Entry returned by the most recent `find_first` step.
#[fixture]
fn first() -> RefCell<Option<Entry>> {
    RefCell::new(None)
}

/// Outcome of the most recent listing or search step.
#[fixture]
fn listed() -> RefCell<Option<SearchResult>> {
    RefCell::new(None)
}

fn record_list(listed: &RefCell<Option<SearchResult>>, entries: Vec<&Entry>) {
    *listed.borrow_mut() = Some(Ok(entries.into_iter().cloned().collect()));
}

fn listed_entries(listed: &RefCell<Option<SearchResult>>) -> Vec<Entry> {
    match listed.borrow().as_ref() {
        Some(Ok(entries)) => entries.clone(),
        Some(Err(err)) => panic!("listing should succeed, got {err}"),
        None => panic!("listing result must be recorded"),
    }
}

#[given("the bundled Swiss postal gazetteer")]
fn bundled(#[from(gazetteer)] gazetteer: &Gazetteer) {
    assert!(!gazetteer.is_empty(), "bundled dataset should not be empty");
}

#[when("I look up the first entry for Aarau")]
fn first_for_aarau(
    #[from(gazetteer)] gazetteer: &Gazetteer,
    #[from(first)] first: &RefCell<Option<Entry>>,
) {
    *first.borrow_mut() = gazetteer.find_first("Aarau").cloned();
}

#[when("I look up the first entry for zürich in lower case")]
fn first_for_lower_case_zurich(
    #[from(gazetteer)] gazetteer: &Gazetteer,
    #[from(first)] first: &RefCell<Option<Entry>>,
) {
    *first.borrow_mut() = gazetteer.find_first("zürich").cloned();
}

#[then("the entry has postal code 5000")]
fn first_is_5000(#[from(first)] first: &RefCell<Option<Entry>>) {
    assert_first_code(first, 5000);
}

#[then("the entry has postal code 8001")]
fn first_is_8001(#[from(first)] first: &RefCell<Option<Entry>>) {
    assert_first_code(first, 8001);
}

fn assert_first_code(first: &RefCell<Option<Entry>>, expected: u32) {
    let binding = first.borrow();
    let Some(entry) = binding.as_ref() else {
        panic!("lookup should find an entry");
    };
    assert_eq!(entry.code.get(), expected, "unexpected entry {entry}");
}

#[when("I list all entries for postal code 5405")]
fn list_5405(
    #[from(gazetteer)] gazetteer: &Gazetteer,
    #[from(listed)] listed: &RefCell<Option<SearchResult>>,
) {
    record_list(listed, gazetteer.find_all("5405"));
}

#[when("I list all entries named Baden")]
fn list_baden(
    #[from(gazetteer)] gazetteer: &Gazetteer,
    #[from(listed)] listed: &RefCell<Option<SearchResult>>,
) {
    record_list(listed, gazetteer.find_all("Baden"));
}

#[when("I search for names matching Oberdorf.*")]
fn search_oberdorf(
    #[from(gazetteer)] gazetteer: &Gazetteer,
    #[from(listed)] listed: &RefCell<Option<SearchResult>>,
) {
    let result = gazetteer
        .find_all_by_pattern("Oberdorf.*")
        .map(|entries| entries.into_iter().cloned().collect());
    *listed.borrow_mut() = Some(result);
}

#[when("I search for names matching an unclosed character class")]
fn search_invalid(
    #[from(gazetteer)] gazetteer: &Gazetteer,
    #[from(listed)] listed: &RefCell<Option<SearchResult>>,
) {
    let result = gazetteer
        .find_all_by_pattern("[invalid")
        .map(|entries| entries.into_iter().cloned().collect());
    *listed.borrow_mut() = Some(result);
}

#[then("two entries are returned")]
fn two_entries(#[from(listed)] listed: &RefCell<Option<SearchResult>>) {
    assert_eq!(listed_entries(listed).len(), 2);
}

#[then("three entries are returned")]
fn three_entries(#[from(listed)] listed: &RefCell<Option<SearchResult>>) {
    assert_eq!(listed_entries(listed).len(), 3);
}

#[then("six entries are returned")]
fn six_entries(#[from(listed)] listed: &RefCell<Option<SearchResult>>) {
    assert_eq!(listed_entries(listed).len(), 6);
}

#[then("every entry has postal code 5405")]
fn all_5405(#[from(listed)] listed: &RefCell<Option<SearchResult>>) {
    assert!(
        listed_entries(listed)
            .iter()
            .all(|entry| entry.code.get() == 5405)
    );
}

#[then("every entry is named Baden")]
fn all_baden(#[from(listed)] listed: &RefCell<Option<SearchResult>>) {
    assert!(listed_entries(listed).iter().all(|entry| entry.name == "Baden"));
}

#[then("every entry name starts with Oberdorf")]
fn all_oberdorf(#[from(listed)] listed: &RefCell<Option<SearchResult>>) {
    assert!(
        listed_entries(listed)
            .iter()
            .all(|entry| entry.name.starts_with("Oberdorf"))
    );
}

#[then("the search is rejected as an invalid pattern")]
fn search_rejected(#[from(listed)] listed: &RefCell<Option<SearchResult>>) {
    match listed.borrow().as_ref() {
        Some(Err(err)) => assert_eq!(err.pattern(), "[invalid"),
        Some(Ok(entries)) => panic!("expected an invalid pattern, got {} entries", entries.len()),
        None => panic!("search result must be recorded"),
    }
}

#[then("no entries are returned")]
fn no_entries(#[from(listed)] listed: &RefCell<Option<SearchResult>>) {
    let binding = listed.borrow();
    let entries = binding
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .map_or(0, Vec::len);
    assert_eq!(entries, 0);
}

#[scenario(path = "tests/features/gazetteer.feature", index = 0)]
fn city_name_resolves_to_primary_code(gazetteer: Gazetteer, first: RefCell<Option<Entry>>) {
    let _ = (gazetteer, first);
}

#[scenario(path = "tests/features/gazetteer.feature", index = 1)]
fn shared_code_lists_every_place(gazetteer: Gazetteer, listed: RefCell<Option<SearchResult>>) {
    let _ = (gazetteer, listed);
}

#[scenario(path = "tests/features/gazetteer.feature", index = 2)]
fn shared_name_lists_every_code(gazetteer: Gazetteer, listed: RefCell<Option<SearchResult>>) {
    let _ = (gazetteer, listed);
}

#[scenario(path = "tests/features/gazetteer.feature", index = 3)]
fn pattern_finds_matching_places(gazetteer: Gazetteer, listed: RefCell<Option<SearchResult>>) {
    let _ = (gazetteer, listed);
}

#[scenario(path = "tests/features/gazetteer.feature", index = 4)]
fn invalid_pattern_is_reported(gazetteer: Gazetteer, listed: RefCell<Option<SearchResult>>) {
    let _ = (gazetteer, listed);
}

#[scenario(path = "tests/features/gazetteer.feature", index = 5)]
fn folded_lookup_keeps_first_seen_entry(gazetteer: Gazetteer, first: RefCell<Option<Entry>>) {
    let _ = (gazetteer, first);
}
