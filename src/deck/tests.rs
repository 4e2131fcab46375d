//! Tests for deck parsing and the slide model

use super::*;
use crate::common::Error;

#[test]
fn test_basic_deck_parsing() {
    let deck = Deck::parse("A\n---\nB\n---\nC").unwrap();

    assert_eq!(deck.len(), 3);
    assert_eq!(deck.get(0).unwrap().text(), "A");
    assert_eq!(deck.get(1).unwrap().text(), "B");
    assert_eq!(deck.get(2).unwrap().text(), "C");

    // Ordinals and display numbers
    assert_eq!(deck.get(2).unwrap().index(), 2);
    assert_eq!(deck.get(2).unwrap().number(), 3);
}

#[test]
fn test_empty_source_is_parse_error() {
    let err = Deck::parse("").unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

#[test]
fn test_single_slide_without_delimiter() {
    let deck = Deck::parse("just one slide").unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.get(0).unwrap().text(), "just one slide");
}

#[test]
fn test_whitespace_only_source_is_one_blank_slide() {
    let deck = Deck::parse("   \n  ").unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.get(0).unwrap().text(), "");
}

#[test]
fn test_deck_length_equals_segment_count() {
    // Blank segments still count as slides
    let deck = Deck::parse("A\n---\n---\nC").unwrap();
    assert_eq!(deck.len(), 3);
    assert_eq!(deck.get(1).unwrap().text(), "");
}

#[test]
fn test_trailing_delimiter_yields_blank_slide() {
    let deck = Deck::parse("A\n---").unwrap();
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.get(1).unwrap().text(), "");
}

#[test]
fn test_crlf_source() {
    let deck = Deck::parse("class: center\r\nA\r\n---\r\nB").unwrap();
    assert_eq!(deck.len(), 2);
    assert!(deck.get(0).unwrap().classes().is_centered());
    assert_eq!(deck.get(0).unwrap().text(), "A");
    assert_eq!(deck.get(1).unwrap().text(), "B");
}

#[test]
fn test_class_property() {
    let deck = Deck::parse("class: center, middle, inverse\n# Title").unwrap();
    let slide = deck.get(0).unwrap();

    assert!(slide.classes().is_centered());
    assert!(slide.classes().is_middle());
    assert!(slide.classes().is_inverse());
    assert_eq!(slide.text(), "# Title");
}

#[test]
fn test_class_property_space_separated() {
    let deck = Deck::parse("class: center middle\nbody").unwrap();
    let classes = deck.get(0).unwrap().classes();
    assert_eq!(classes.layout(), LayoutFlags::CENTER | LayoutFlags::MIDDLE);
}

#[test]
fn test_repeated_class_lines_merge() {
    let deck = Deck::parse("class: center\nclass: inverse\nbody").unwrap();
    let classes = deck.get(0).unwrap().classes();
    assert!(classes.is_centered());
    assert!(classes.is_inverse());
}

#[test]
fn test_custom_classes_survive() {
    let deck = Deck::parse("class: center, my-theme\nbody").unwrap();
    let slide = deck.get(0).unwrap();
    assert_eq!(slide.classes().custom(), &["my-theme"]);
}

#[test]
fn test_name_property_and_lookup() {
    let deck = Deck::parse("intro\n---\nname: agenda\nbody").unwrap();

    let slide = deck.slide_named("agenda").unwrap();
    assert_eq!(slide.index(), 1);
    assert_eq!(slide.text(), "body");
    assert_eq!(slide.name(), Some("agenda"));

    assert!(deck.slide_named("missing").is_none());
    assert_eq!(deck.position_named("agenda"), Some(1));
}

#[test]
fn test_duplicate_names_resolve_to_first() {
    let deck = Deck::parse("name: a\nfirst\n---\nname: a\nsecond").unwrap();
    assert_eq!(deck.position_named("a"), Some(0));
}

#[test]
fn test_unknown_property_key_is_content() {
    let deck = Deck::parse("Title: subtitle\nbody").unwrap();
    let slide = deck.get(0).unwrap();
    assert!(slide.classes().is_empty());
    assert_eq!(slide.text(), "Title: subtitle\nbody");
}

#[test]
fn test_count_false_shares_display_number() {
    let deck = Deck::parse("one\n---\ncount: false\ninterlude\n---\ntwo").unwrap();

    assert_eq!(deck.get(0).unwrap().number(), 1);
    assert_eq!(deck.get(1).unwrap().number(), 1);
    assert!(!deck.get(1).unwrap().is_counted());
    assert_eq!(deck.get(2).unwrap().number(), 2);
}

#[test]
fn test_count_false_on_first_slide() {
    let deck = Deck::parse("count: false\ncover\n---\nreal start").unwrap();
    assert_eq!(deck.get(0).unwrap().number(), 1);
    assert_eq!(deck.get(1).unwrap().number(), 1);
}

#[test]
fn test_presenter_notes() {
    let deck = Deck::parse("body text\n???\nnotes text\nmore notes").unwrap();
    let slide = deck.get(0).unwrap();

    assert_eq!(slide.text(), "body text");
    assert_eq!(slide.notes(), Some("notes text\nmore notes"));
}

#[test]
fn test_notes_do_not_leak_across_slides() {
    let deck = Deck::parse("A\n???\nnote A\n---\nB").unwrap();
    assert_eq!(deck.get(0).unwrap().notes(), Some("note A"));
    assert_eq!(deck.get(1).unwrap().notes(), None);
    assert_eq!(deck.get(1).unwrap().text(), "B");
}

#[test]
fn test_incremental_expansion() {
    let config = DeckConfig::new().with_incremental(true);
    let deck = Deck::parse_with_config("class: center\nfirst\n--\nsecond\n---\nlast", config).unwrap();

    assert_eq!(deck.len(), 3);

    let step1 = deck.get(0).unwrap();
    assert_eq!(step1.text(), "first");
    assert!(!step1.is_continuation());
    assert_eq!(step1.number(), 1);

    // Cumulative content, inherited classes, shared display number
    let step2 = deck.get(1).unwrap();
    assert_eq!(step2.text(), "first\nsecond");
    assert!(step2.is_continuation());
    assert!(step2.classes().is_centered());
    assert_eq!(step2.number(), 1);

    assert_eq!(deck.get(2).unwrap().number(), 2);
}

#[test]
fn test_incremental_disabled_keeps_fragment_lines() {
    let deck = Deck::parse("first\n--\nsecond").unwrap();
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.get(0).unwrap().text(), "first\n--\nsecond");
}

#[test]
fn test_incremental_name_only_on_first_step() {
    let config = DeckConfig::new().with_incremental(true);
    let deck = Deck::parse_with_config("name: build\nfirst\n--\nsecond", config).unwrap();

    assert_eq!(deck.position_named("build"), Some(0));
    assert_eq!(deck.get(1).unwrap().name(), None);
}

#[test]
fn test_blank_edge_trimming_preserves_indentation() {
    let deck = Deck::parse("\n\n    indented code\n\n---\nB").unwrap();
    assert_eq!(deck.get(0).unwrap().text(), "    indented code");
}

#[test]
fn test_blank_edge_trimming_can_be_disabled() {
    let config = DeckConfig::new().with_trim_blank_edges(false);
    let deck = Deck::parse_with_config("A\n---\nB", config).unwrap();
    assert_eq!(deck.get(0).unwrap().text(), "A\n");
}

#[test]
fn test_from_bytes() {
    let deck = Deck::from_bytes(b"A\n---\nB").unwrap();
    assert_eq!(deck.len(), 2);
}

#[test]
fn test_from_bytes_invalid_utf8() {
    let err = Deck::from_bytes(&[0xFF, 0xFE, 0x00]).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
}

#[test]
fn test_from_reader() {
    let mut cursor = std::io::Cursor::new("A\n---\nB");
    let deck = Deck::from_reader(&mut cursor).unwrap();
    assert_eq!(deck.len(), 2);
}

#[test]
fn test_open_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"class: center\n# Hello\n---\n# World").unwrap();

    let deck = Deck::open(file.path()).unwrap();
    assert_eq!(deck.len(), 2);
    assert!(deck.get(0).unwrap().classes().is_centered());
}

#[test]
fn test_open_missing_file() {
    let err = Deck::open("/nonexistent/deck.md").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_deck_text_joins_bodies() {
    let deck = Deck::parse("A\n---\n\n---\nB").unwrap();
    assert_eq!(deck.text(), "A\n\nB");
}

#[test]
fn test_deck_iteration() {
    let deck = Deck::parse("A\n---\nB").unwrap();
    let texts: Vec<&str> = deck.into_iter().map(Slide::text).collect();
    assert_eq!(texts, vec!["A", "B"]);
}

#[test]
fn test_slide_serialization() {
    let deck = Deck::parse("class: center\nname: intro\nbody").unwrap();
    let json = serde_json::to_string(deck.get(0).unwrap());
    // Slide and its class list derive Serialize
    assert!(json.is_ok());
}
