/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::Path;

use bibsort_core::{Citation, ReferenceType, UnclassifiedPosition};
use bibsort_processor::{load_references, load_scheme, BibliographySorter};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn load_references_map_form_keeps_input_order_and_ids() {
    let refs = load_references(&fixture("references.yaml")).expect("fixture should load");
    assert_eq!(refs.len(), 4);
    // The map key becomes the id when the record carries none.
    assert_eq!(refs[0].id(), Some("smith2004"));
    let keys: Vec<&String> = refs.keys().collect();
    assert_eq!(keys, vec!["smith2004", "archer2001", "chapman2005", "webb2019"]);

    let chapter = &refs["chapman2005"];
    assert_eq!(chapter.ref_type, Some(ReferenceType::Contribution));
    assert_eq!(
        chapter.parent.as_deref().and_then(|p| p.ref_type),
        Some(ReferenceType::BookEdited)
    );
}

#[test]
fn load_references_list_form_skips_entries_without_ids() {
    let refs = load_references(&fixture("references.json")).expect("fixture should load");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].id(), Some("kuhn1962"));
}

#[test]
fn load_scheme_and_sort_fixture_bibliography() {
    let scheme = load_scheme(&fixture("scheme.yaml")).expect("scheme should load");
    assert_eq!(scheme.unclassified_position(), UnclassifiedPosition::Last);
    assert_eq!(scheme.max_section(), Some(4));

    let refs = load_references(&fixture("references.yaml")).expect("fixture should load");
    let citations: Vec<Citation> = refs
        .values()
        .map(|r| Citation::bibliography(r.clone()))
        .collect();

    let sorter = BibliographySorter::new(&scheme);
    let sorted = sorter.sort(citations.iter().collect());
    let ids: Vec<&str> = sorted
        .iter()
        .filter_map(|c| c.reference().and_then(|r| r.id()))
        .collect();
    assert_eq!(ids, vec!["smith2004", "archer2001", "chapman2005", "webb2019"]);
}

#[test]
fn missing_file_reports_io_error() {
    let err = load_scheme(&fixture("does-not-exist.yaml")).unwrap_err();
    assert!(err.to_string().starts_with("IO error"));
}
