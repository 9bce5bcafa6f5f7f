// tests/store.rs
//
// AnswerStore semantics: normalization, duplicate handling, pruning,
// persistence round-trip.
//
use std::fs;
use std::path::PathBuf;

use slf_bot::error::Error;
use slf_bot::store::AnswerStore;

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("slf_store_{}_{}.csv", std::process::id(), name));
    let _ = fs::remove_file(&p);
    p
}

#[test]
fn add_then_has_ignores_case_and_whitespace() {
    let mut store = AnswerStore::load(tmp("norm")).unwrap();
    store.add_answer("  Stadt ", 'b', " Berlin ").unwrap();

    assert!(store.has_category("STADT"));
    assert!(store.has_letter("stadt", 'B'));
    assert!(store.has_answer("Stadt", 'b', "berlin"));
    assert!(store.has_answer(" stadt", 'B', "  BERLIN "));

    // display casing of the answer is preserved
    assert_eq!(store.get_answers("stadt", 'B').unwrap(), ["Berlin"]);
}

#[test]
fn duplicate_add_fails_and_leaves_store_unchanged() {
    let mut store = AnswerStore::load(tmp("dup")).unwrap();
    store.add_answer("Stadt", 'B', "Berlin").unwrap();

    let err = store.add_answer("STADT", 'b', " BERLIN ").unwrap_err();
    assert!(matches!(err, Error::Duplicate { .. }));

    assert_eq!(store.get_answers("Stadt", 'B').unwrap(), ["Berlin"]);
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_prunes_empty_levels() {
    let mut store = AnswerStore::load(tmp("prune")).unwrap();
    store.add_answer("Stadt", 'B', "Berlin").unwrap();
    store.remove_answer("stadt", 'b', "BERLIN").unwrap();

    assert!(!store.has_category("Stadt"));
    assert!(store.is_empty());

    let err = store.remove_answer("Stadt", 'B', "Berlin").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn removing_one_of_two_keeps_the_levels() {
    let mut store = AnswerStore::load(tmp("keep")).unwrap();
    store.add_answer("Stadt", 'B', "Berlin").unwrap();
    store.add_answer("Stadt", 'B', "Bonn").unwrap();

    store.remove_answer("Stadt", 'B', "Berlin").unwrap();
    assert!(store.has_letter("Stadt", 'B'));
    assert_eq!(store.get_answers("Stadt", 'B').unwrap(), ["Bonn"]);
}

#[test]
fn random_answer_is_always_a_stored_one() {
    let mut store = AnswerStore::load(tmp("random")).unwrap();
    for answer in ["Berlin", "Bonn", "Bochum"] {
        store.add_answer("Stadt", 'B', answer).unwrap();
    }

    let answers = store.get_answers("Stadt", 'B').unwrap().to_vec();
    for _ in 0..20 {
        let pick = store.get_random_answer("Stadt", 'B').unwrap();
        assert!(answers.contains(&pick), "{pick} not in {answers:?}");
    }
}

#[test]
fn get_answers_for_absent_pair_is_not_found() {
    let store = AnswerStore::load(tmp("absent")).unwrap();
    assert!(matches!(
        store.get_answers("Stadt", 'B').unwrap_err(),
        Error::NotFound { .. }
    ));
    assert!(matches!(
        store.get_random_answer("Stadt", 'B').unwrap_err(),
        Error::NotFound { .. }
    ));
}

#[test]
fn save_load_round_trip() {
    let path = tmp("roundtrip");
    let mut store = AnswerStore::load(&path).unwrap();
    store.add_answer("Stadt", 'F', "Frankfurt, Oder").unwrap();
    store.add_answer("Stadt", 'B', "Berlin").unwrap();
    store.add_answer("Land", 'D', "Deutschland \"BRD\"").unwrap();
    store.add_answer("Fluss", 'D', "Donau").unwrap();
    store.save().unwrap();

    let reloaded = AnswerStore::load(&path).unwrap();
    assert_eq!(reloaded.list_categories(), store.list_categories());
    assert_eq!(reloaded.len(), store.len());
    for (category, letter) in [("Stadt", 'F'), ("Stadt", 'B'), ("Land", 'D'), ("Fluss", 'D')] {
        assert_eq!(
            reloaded.get_answers(category, letter).unwrap(),
            store.get_answers(category, letter).unwrap()
        );
    }
}

#[test]
fn load_creates_and_persists_a_fresh_store() {
    let path = tmp("fresh");
    assert!(!path.exists());

    let store = AnswerStore::load(&path).unwrap();
    assert!(path.exists(), "fresh store must be persisted immediately");
    assert!(store.is_empty());
}

#[test]
fn reset_deletes_the_backing_file() {
    let path = tmp("reset");
    let mut store = AnswerStore::load(&path).unwrap();
    store.add_answer("Stadt", 'B', "Berlin").unwrap();
    store.save().unwrap();

    store.reset().unwrap();
    assert!(!path.exists());
    assert!(store.is_empty());

    // a later save recreates the file
    store.save().unwrap();
    assert!(path.exists());
}

#[test]
fn load_rejects_a_corrupt_file() {
    let path = tmp("corrupt");
    fs::write(&path, "Stadt,B\n").unwrap();
    assert!(matches!(
        AnswerStore::load(&path).unwrap_err(),
        Error::Storage { .. }
    ));

    fs::write(&path, "Stadt,XY,Berlin\n").unwrap();
    assert!(matches!(
        AnswerStore::load(&path).unwrap_err(),
        Error::Storage { .. }
    ));
}
