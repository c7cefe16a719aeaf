#![cfg(feature = "catalog")]

use lingo_i18n::{TextCatalog, TextMap, DEFAULT_ERROR_TEXT};
use pretty_assertions::assert_eq;

#[test]
fn fallback_chain_ends_at_error_text() {
    let mut catalog: TextCatalog = TextCatalog::new("en-US");
    catalog.set_text("fr-FR", 1, "Bonjour");

    assert_eq!(catalog.get_text("de-DE", &1), "TEXT_NOT_FOUND");
    assert_eq!(catalog.get_text("fr-FR", &1), "Bonjour");

    catalog.set_text("en-US", 1, "Hello");
    assert_eq!(catalog.get_text("de-DE", &1), "Hello");
    assert_eq!(catalog.get_text("fr-FR", &1), "Bonjour");
}

#[test]
fn batch_insert_matches_sequential_inserts() {
    let entries = [(1u64, "One"), (2, "Two"), (3, "Three")];

    let mut sequential: TextCatalog = TextCatalog::new("en-US");
    sequential.set_text("en-US", 2, "old");
    for (id, text) in entries {
        sequential.set_text("en-US", id, text);
    }

    let mut batched: TextCatalog = TextCatalog::new("en-US");
    batched.set_text("en-US", 2, "old");
    batched.set_texts("en-US", entries);

    assert_eq!(sequential.texts(), batched.texts());
}

#[test]
fn set_texts_accepts_a_text_map() {
    let mut ko = TextMap::new();
    ko.insert(10u64, "안녕하세요".to_string());
    ko.insert(11, "감사합니다".to_string());

    let mut catalog: TextCatalog = TextCatalog::new("en-US");
    catalog.set_text("ko-KR", 12, "keep").set_texts("ko-KR", ko);

    assert_eq!(catalog.get_text("ko-KR", &10), "안녕하세요");
    assert_eq!(catalog.get_text("ko-KR", &12), "keep");
    assert_eq!(catalog.len(), 3);
}

#[test]
fn repeated_set_text_is_idempotent_and_last_write_wins() {
    let mut catalog: TextCatalog = TextCatalog::new("en-US");
    catalog.set_text("en-US", 1, "Hello");
    let before = catalog.texts().clone();
    catalog.set_text("en-US", 1, "Hello");
    assert_eq!(catalog.texts(), &before);

    catalog.set_text("en-US", 1, "Hi");
    assert_eq!(catalog.get_text("en-US", &1), "Hi");
    assert_eq!(catalog.len(), 1);
}

#[test]
fn error_text_is_shared_and_configurable() {
    let catalog: TextCatalog = TextCatalog::new("en-US");
    assert_eq!(catalog.default_error_text(), DEFAULT_ERROR_TEXT);
    assert!(std::ptr::eq(
        catalog.get_text("en-US", &1),
        catalog.default_error_text()
    ));

    let custom: TextCatalog<String, String, u32> =
        TextCatalog::with_error_text("en-US", "<missing>");
    assert_eq!(custom.get_text("en-US", &1), "<missing>");
}
