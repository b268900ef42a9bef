//! Integration tests for guessing-store
//!
//! These tests walk the store through seeding, lookups, upserts and the
//! inject operation that grows the tree.

use guessing_domain::traits::{DEFAULT_NO_ANSWER, DEFAULT_ROOT_QUESTION, DEFAULT_YES_ANSWER};
use guessing_domain::{Prompt, PromptKey, PromptKind, PromptStore};
use guessing_store::{MemoryStore, StoreError};

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.seed_default().unwrap();
    store
}

#[test]
fn test_seed_builds_root_and_two_answers() {
    let store = seeded_store();

    let root = store.lookup("0").unwrap();
    assert_eq!(root.value, DEFAULT_ROOT_QUESTION);
    assert_eq!(root.kind, PromptKind::Question);
    assert_eq!(root.yes_key(), Some(PromptKey::new("01")));
    assert_eq!(root.no_key(), Some(PromptKey::new("00")));

    let yes = store.lookup("01").unwrap();
    assert_eq!(yes.value, DEFAULT_YES_ANSWER);
    assert!(yes.is_answer());

    let no = store.lookup("00").unwrap();
    assert_eq!(no.value, DEFAULT_NO_ANSWER);
    assert!(no.is_answer());

    assert_eq!(store.all_prompts().len(), 3);
}

#[test]
fn test_custom_seed() {
    let store = MemoryStore::new();
    store.seed("Is it bigger than a breadbox?", "An elephant", "A mouse").unwrap();

    assert_eq!(store.lookup("0").unwrap().value, "Is it bigger than a breadbox?");
    assert_eq!(store.lookup("01").unwrap().value, "An elephant");
    assert_eq!(store.lookup("00").unwrap().value, "A mouse");
}

#[test]
fn test_lookup_before_any_write_is_not_found() {
    let store = MemoryStore::new();
    let result = store.lookup("nonexistent");
    assert_eq!(result, Err(StoreError::NotFound("nonexistent".to_string())));
}

#[test]
fn test_lookup_unknown_key_after_seed() {
    let store = seeded_store();
    assert!(matches!(store.lookup("0110"), Err(StoreError::NotFound(_))));
    assert!(matches!(store.lookup(""), Err(StoreError::NotFound(_))));
}

#[test]
fn test_upsert_then_lookup_round_trip() {
    let store = MemoryStore::new();
    let prompts = [
        Prompt::answer("0", "A lonely answer"),
        Prompt::question("01", "Does it bark?"),
        Prompt::answer("0110", "You are thinking of a parrot!"),
    ];

    for prompt in &prompts {
        store.upsert(prompt.clone()).unwrap();
        let stored = store.lookup(prompt.key.as_str()).unwrap();
        assert_eq!(&stored, prompt);
        assert_eq!(stored.yes_key(), prompt.yes_key());
        assert_eq!(stored.no_key(), prompt.no_key());
    }
}

#[test]
fn test_upsert_overwrites() {
    let store = seeded_store();
    store.upsert(Prompt::answer("01", "You are thinking of a wolf!")).unwrap();

    assert_eq!(store.lookup("01").unwrap().value, "You are thinking of a wolf!");
    assert_eq!(store.all_prompts().len(), 3);
}

#[test]
fn test_upsert_is_idempotent() {
    let store = seeded_store();
    let prompt = Prompt::answer("0111", "You are thinking of a horse!");

    store.upsert(prompt.clone()).unwrap();
    let len = store.all_prompts().len();

    for _ in 0..5 {
        store.upsert(prompt.clone()).unwrap();
    }

    assert_eq!(store.all_prompts().len(), len);
    assert_eq!(store.lookup("0111").unwrap(), prompt);
}

#[test]
fn test_inject_pushes_old_answer_down() {
    let store = MemoryStore::new();
    store
        .seed(
            "Is it an animal?",
            "You are thinking of a dog!",
            "You are thinking of a computer!",
        )
        .unwrap();

    store
        .inject(Prompt::answer("00", ""), "You are thinking of a cat!")
        .unwrap();

    let split = store.lookup("00").unwrap();
    assert!(split.is_question());
    assert_eq!(split.yes_key(), Some(PromptKey::new("001")));
    assert_eq!(split.no_key(), Some(PromptKey::new("000")));

    let pushed_down = store.lookup("000").unwrap();
    assert_eq!(pushed_down.value, "You are thinking of a computer!");
    assert!(pushed_down.is_answer());

    let taught = store.lookup("001").unwrap();
    assert_eq!(taught.value, "You are thinking of a cat!");
    assert!(taught.is_answer());

    // Untouched branch
    assert_eq!(store.lookup("01").unwrap().value, "You are thinking of a dog!");
    assert_eq!(store.all_prompts().len(), 5);
}

#[test]
fn test_inject_stores_question_text() {
    let store = seeded_store();
    store
        .inject(Prompt::answer("01", "Does it purr?"), "You are thinking of a cat!")
        .unwrap();

    let question = store.lookup("01").unwrap();
    assert_eq!(question.value, "Does it purr?");
    assert!(question.is_question());
    assert_eq!(store.lookup("010").unwrap().value, DEFAULT_YES_ANSWER);
    assert_eq!(store.lookup("011").unwrap().value, "You are thinking of a cat!");
}

#[test]
fn test_inject_on_derived_leaf_grows_deeper() {
    let store = seeded_store();
    store
        .inject(Prompt::answer("00", "Does it run on batteries?"), "A phone")
        .unwrap();
    store
        .inject(Prompt::answer("001", "Does it fit in a pocket?"), "A phone")
        .unwrap();
    store
        .inject(Prompt::answer("0010", "Does it have a screen?"), "A laptop")
        .unwrap();

    assert!(store.lookup("0010").unwrap().is_question());
    assert_eq!(store.lookup("00100").unwrap().value, "A phone");
    assert_eq!(store.lookup("00101").unwrap().value, "A laptop");
    assert_eq!(PromptKey::new("00101").depth(), 4);
    assert_eq!(store.all_prompts().len(), 9);
}

#[test]
fn test_inject_unknown_key_is_not_found() {
    let store = seeded_store();
    let result = store.inject(Prompt::answer("0111", "Does it fly?"), "A bird");

    assert_eq!(result, Err(StoreError::NotFound("0111".to_string())));
    assert_eq!(store.all_prompts().len(), 3);
}

#[test]
fn test_inject_on_question_is_rejected() {
    let store = seeded_store();
    let result = store.inject(Prompt::answer("0", "Is it alive?"), "A tree");

    assert_eq!(result, Err(StoreError::NotAnAnswer("0".to_string())));
    assert_eq!(store.lookup("0").unwrap().value, DEFAULT_ROOT_QUESTION);
    assert_eq!(store.lookup("00").unwrap().value, DEFAULT_NO_ANSWER);
    assert_eq!(store.all_prompts().len(), 3);
}

#[test]
fn test_every_question_has_both_children() {
    let store = seeded_store();
    store.inject(Prompt::answer("00", "Is it a vehicle?"), "A car").unwrap();
    store.inject(Prompt::answer("01", "Does it meow?"), "A cat").unwrap();
    store.inject(Prompt::answer("001", "Does it fly?"), "A plane").unwrap();

    for prompt in store.all_prompts() {
        if let (Some(yes), Some(no)) = (prompt.yes_key(), prompt.no_key()) {
            assert!(store.lookup(yes.as_str()).is_ok(), "missing yes child of {}", prompt.key);
            assert!(store.lookup(no.as_str()).is_ok(), "missing no child of {}", prompt.key);
        } else {
            assert!(prompt.is_answer());
        }
    }
}

#[test]
fn test_works_through_trait_object() {
    let store: Box<dyn PromptStore<Error = StoreError>> = Box::new(MemoryStore::new());
    store.seed_default().unwrap();
    store.inject(Prompt::answer("01", "Does it purr?"), "A cat").unwrap();
    assert_eq!(store.all_prompts().len(), 5);
}
