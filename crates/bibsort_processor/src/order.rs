/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Default author/year/title ordering.
//!
//! This is the stock fallback the comparer applies within a section.
//! Hosts with their own tie-breaking rules pass a different function to
//! [`SectionComparer::compare_with`](crate::SectionComparer::compare_with).

use std::cmp::Ordering;

use bibsort_core::{Citation, Reference};

/// Order two citations by first author family name (editor, then
/// title, as substitutes), then year, then title, all ascending.
///
/// Citations without an attached reference compare as Equal.
pub fn author_year_title(a: &Citation, b: &Citation) -> Ordering {
    match (a.reference(), b.reference()) {
        (Some(ra), Some(rb)) => compare_references(ra, rb),
        _ => Ordering::Equal,
    }
}

/// The same ordering over bare references.
pub fn compare_references(a: &Reference, b: &Reference) -> Ordering {
    author_sort_key(a)
        .cmp(&author_sort_key(b))
        .then_with(|| a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)))
        .then_with(|| title_sort_key(a).cmp(&title_sort_key(b)))
}

fn author_sort_key(reference: &Reference) -> String {
    reference
        .authors
        .first()
        .map(|n| n.family.to_lowercase())
        .or_else(|| reference.editors.first().map(|n| n.family.to_lowercase()))
        .or_else(|| reference.title.as_ref().map(|t| t.to_lowercase()))
        .unwrap_or_default()
}

fn title_sort_key(reference: &Reference) -> String {
    reference
        .title
        .as_ref()
        .map(|t| t.to_lowercase())
        .unwrap_or_default()
}
