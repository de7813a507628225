/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Stable sorting of citation sequences.

use std::cmp::Ordering;

use bibsort_core::{Citation, SectionScheme};

use crate::comparer::SectionComparer;

/// Sorts a bibliography with the section comparer.
///
/// Sorting is stable: non-bibliography citations and pairs the
/// comparer reports no preference for keep their incoming order.
pub struct BibliographySorter<'a> {
    comparer: SectionComparer<'a>,
}

impl<'a> BibliographySorter<'a> {
    pub fn new(scheme: &'a SectionScheme) -> Self {
        Self {
            comparer: SectionComparer::new(scheme),
        }
    }

    /// Sort citations by section, then author/year/title.
    pub fn sort<'b>(&self, citations: Vec<&'b Citation>) -> Vec<&'b Citation> {
        self.sort_with(citations, crate::order::author_year_title)
    }

    /// Sort citations by section with a caller-supplied tie-breaker.
    pub fn sort_with<'b, F>(&self, citations: Vec<&'b Citation>, fallback: F) -> Vec<&'b Citation>
    where
        F: Fn(&Citation, &Citation) -> Ordering,
    {
        let mut citations = citations;
        citations.sort_by(|a, b| self.comparer.compare_with(a, b, &fallback));
        citations
    }
}
