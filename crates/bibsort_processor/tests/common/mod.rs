/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use bibsort_core::{Citation, Name, Reference, ReferenceType, SchemeFile, SectionScheme};

// --- Helper Functions for Test Data Construction ---

/// A typed reference with one author.
pub fn make_reference(
    id: &str,
    ref_type: Option<ReferenceType>,
    family: &str,
    year: i32,
    title: &str,
) -> Reference {
    Reference {
        id: Some(id.to_string()),
        ref_type,
        authors: vec![Name::new(family, "Test")],
        year: Some(year),
        title: Some(title.to_string()),
        ..Default::default()
    }
}

/// A bibliography citation over a typed, single-author reference.
pub fn make_citation(
    id: &str,
    ref_type: Option<ReferenceType>,
    family: &str,
    year: i32,
    title: &str,
) -> Citation {
    Citation::bibliography(make_reference(id, ref_type, family, year, title))
}

/// A contribution citation inside a typed container work.
pub fn make_contribution(
    id: &str,
    container: ReferenceType,
    family: &str,
    year: i32,
    title: &str,
) -> Citation {
    let mut reference = make_reference(id, Some(ReferenceType::Contribution), family, year, title);
    reference.parent = Some(Box::new(Reference {
        ref_type: Some(container),
        ..Default::default()
    }));
    Citation::bibliography(reference)
}

/// Parse and validate a scheme from inline YAML.
pub fn scheme_from_yaml(yaml: &str) -> SectionScheme {
    let file: SchemeFile = serde_yaml::from_str(yaml).expect("scheme YAML should parse");
    SectionScheme::try_from(file).expect("scheme should validate")
}

/// Ids of sorted citations, for compact assertions.
pub fn ids<'a>(citations: &[&'a Citation]) -> Vec<&'a str> {
    citations
        .iter()
        .filter_map(|c| c.reference().and_then(|r| r.id()))
        .collect()
}
