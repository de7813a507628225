/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Section-first citation comparison.

use std::cmp::Ordering;

use bibsort_core::{Citation, Section, SectionScheme, UnclassifiedPosition};

use crate::order::author_year_title;

/// Compares citations by bibliography section, falling back to a
/// within-section ordering on ties.
///
/// The comparer never fails mid-sort: citations outside the
/// bibliography role and citations without an attached reference
/// compare as Equal, and references without a usable classification
/// resolve to the unclassified section.
pub struct SectionComparer<'a> {
    scheme: &'a SectionScheme,
}

impl<'a> SectionComparer<'a> {
    pub fn new(scheme: &'a SectionScheme) -> Self {
        Self { scheme }
    }

    /// Compare with the built-in author/year/title fallback.
    pub fn compare(&self, a: &Citation, b: &Citation) -> Ordering {
        self.compare_with(a, b, author_year_title)
    }

    /// Compare with a caller-supplied fallback for same-section ties.
    ///
    /// `Ordering::Equal` means "no preference", not "equal": callers
    /// must keep the existing order of such pairs, i.e. sort stably.
    pub fn compare_with<F>(&self, a: &Citation, b: &Citation, fallback: F) -> Ordering
    where
        F: Fn(&Citation, &Citation) -> Ordering,
    {
        let (ba, bb) = match (a, b) {
            (Citation::Bibliography(x), Citation::Bibliography(y)) => (x, y),
            _ => return Ordering::Equal,
        };
        let (ra, rb) = match (&ba.reference, &bb.reference) {
            (Some(x), Some(y)) => (x, y),
            _ => return Ordering::Equal,
        };

        let sa = self.scheme.section_of(ra);
        let sb = self.scheme.section_of(rb);
        match self.compare_sections(sa, sb) {
            Ordering::Equal => fallback(a, b),
            ordering => ordering,
        }
    }

    /// Order two resolved sections under the scheme's sentinel policy.
    fn compare_sections(&self, a: Section, b: Section) -> Ordering {
        match (a, b) {
            (Section::Numbered(x), Section::Numbered(y)) => x.cmp(&y),
            (Section::Unclassified, Section::Unclassified) => Ordering::Equal,
            (Section::Unclassified, Section::Numbered(_)) => {
                match self.scheme.unclassified_position() {
                    UnclassifiedPosition::First => Ordering::Less,
                    UnclassifiedPosition::Last => Ordering::Greater,
                }
            }
            (Section::Numbered(_), Section::Unclassified) => {
                match self.scheme.unclassified_position() {
                    UnclassifiedPosition::First => Ordering::Greater,
                    UnclassifiedPosition::Last => Ordering::Less,
                }
            }
        }
    }
}
