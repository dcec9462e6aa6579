//! Tests for the line loop against in-memory readers and sinks.

use std::collections::HashMap;
use std::io::Cursor;

use crate::loader::env::EnvSink;
use crate::loader::store::{ConfigStore, LoadSummary};

fn load_str(store: &mut ConfigStore, content: &str) -> (LoadSummary, HashMap<String, String>) {
    let mut sink = HashMap::new();
    let summary = store.load_from_reader(Cursor::new(content.to_string()), &mut sink);
    (summary, sink)
}

#[test]
fn test_sink_and_mapping_receive_same_pairs() {
    let mut store = ConfigStore::new();
    let (summary, sink) = load_str(&mut store, "a=1\nB = two\nC=x=y\n");

    assert_eq!(summary, LoadSummary { applied: 3, skipped: 0 });
    assert_eq!(sink.len(), 3);
    for (key, value) in &sink {
        assert_eq!(store.get(key).unwrap().raw_value(), value);
    }
    assert_eq!(sink["A"], "1");
    assert_eq!(sink["C"], "x=y");
}

#[test]
fn test_blank_comment_and_malformed_lines_skipped() {
    let mut store = ConfigStore::new();
    let (summary, sink) = load_str(
        &mut store,
        "\n# just a comment\nNO_EQUALS_HERE\n= orphan value\n   \nKEPT=yes\n",
    );

    assert_eq!(summary, LoadSummary { applied: 1, skipped: 5 });
    assert_eq!(sink.len(), 1);
    assert_eq!(store.len(), 1);
    assert!(store.contains_key("KEPT"));
}

#[test]
fn test_later_line_wins_for_duplicate_key() {
    let mut store = ConfigStore::new();
    let (summary, sink) = load_str(&mut store, "DUP=first\ndup=second\n");

    assert_eq!(summary.applied, 2);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("DUP").unwrap().raw_value(), "second");
    assert_eq!(sink["DUP"], "second");
}

#[test]
fn test_nul_entries_stored_but_not_exported() {
    let mut store = ConfigStore::new();
    let (summary, sink) = load_str(&mut store, "BAD=a\0b\nGOOD=c\n");

    assert_eq!(summary, LoadSummary { applied: 2, skipped: 0 });
    assert!(!sink.contains_key("BAD"));
    assert_eq!(store.get("BAD").unwrap().raw_value(), "a\0b");
    assert_eq!(sink["GOOD"], "c");
}

#[test]
fn test_invalid_utf8_comment_keeps_later_entries() {
    let mut store = ConfigStore::new();
    let mut sink: HashMap<String, String> = HashMap::new();
    let input: &[u8] = b"A=1\n# caf\xe9 latin-1 comment\nB=2\n";
    let summary = store.load_from_reader(input, &mut sink);

    assert_eq!(summary, LoadSummary { applied: 2, skipped: 1 });
    assert_eq!(sink["B"], "2");
    assert!(store.contains_key("B"));
}

#[test]
fn test_last_line_without_newline() {
    let mut store = ConfigStore::new();
    let (summary, sink) = load_str(&mut store, "A=1\r\nLAST=end");

    assert_eq!(summary.applied, 2);
    assert_eq!(sink["A"], "1");
    assert_eq!(store.get("LAST").unwrap().raw_value(), "end");
}

#[test]
fn test_empty_input() {
    let mut store = ConfigStore::new();
    let (summary, sink) = load_str(&mut store, "");

    assert_eq!(summary, LoadSummary::default());
    assert!(sink.is_empty());
    assert!(store.is_empty());
}

/// Sink that records write order, to check every applied line reaches it.
#[derive(Default)]
struct RecordingSink {
    writes: Vec<(String, String)>,
}

impl EnvSink for RecordingSink {
    fn set(&mut self, key: &str, value: &str) {
        self.writes.push((key.to_string(), value.to_string()));
    }
}

#[test]
fn test_custom_sink_sees_every_write_in_order() {
    let mut store = ConfigStore::new();
    let mut sink = RecordingSink::default();
    store.load_from_reader(Cursor::new("X=1\nY=2\nX=3\n"), &mut sink);

    let keys: Vec<&str> = sink.writes.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["X", "Y", "X"]);
    assert_eq!(store.get("X").unwrap().raw_value(), "3");
}
