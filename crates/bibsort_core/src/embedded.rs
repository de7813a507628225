/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Embedded default section scheme.
//!
//! Ships the stock deployment scheme so the CLI and tests work without
//! a scheme file on disk: monographs and theses first, then periodical
//! articles, standards, contributions inside container works, internet
//! documents, and interview material, with everything else in the
//! trailing "other" bucket.

use crate::scheme::{SectionScheme, UnclassifiedPosition};

/// Build the default scheme.
///
/// Every entry is an explicit full-type pairing; contribution entries
/// exist only for the container types listed here, so a contribution
/// inside any other container falls into the "other" bucket.
pub fn default_scheme() -> SectionScheme {
    let entries = [
        (crate::full_type!(Book), 1),
        (crate::full_type!(Thesis), 1),
        (crate::full_type!(JournalArticle), 2),
        (crate::full_type!(NewspaperArticle), 2),
        (crate::full_type!(Standard), 3),
        (crate::full_type!(Contribution in BookEdited), 4),
        (crate::full_type!(Contribution in CollectedWorks), 4),
        (crate::full_type!(Contribution in ConferenceProceedings), 4),
        (crate::full_type!(Contribution in SpecialIssue), 4),
        (crate::full_type!(Contribution in UnpublishedWork), 4),
        (crate::full_type!(ContributionInLegalCommentary), 4),
        (crate::full_type!(UnpublishedWork), 4),
        (crate::full_type!(InternetDocument), 5),
        (crate::full_type!(InterviewMaterial), 6),
    ];
    SectionScheme::from_entries(UnclassifiedPosition::Last, entries)
        .expect("embedded scheme has no duplicate keys")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{FullReferenceType, ReferenceType::*};
    use crate::scheme::Section;

    #[test]
    fn default_scheme_sections() {
        let scheme = default_scheme();
        assert_eq!(scheme.unclassified_position(), UnclassifiedPosition::Last);
        assert_eq!(
            scheme.section_for(&FullReferenceType::standalone(Book)),
            Section::Numbered(1)
        );
        assert_eq!(
            scheme.section_for(&FullReferenceType::within(Contribution, BookEdited)),
            Section::Numbered(4)
        );
        assert_eq!(
            scheme.section_for(&FullReferenceType::standalone(InterviewMaterial)),
            Section::Numbered(6)
        );
        // Court decisions have no entry and land in "other".
        assert_eq!(
            scheme.section_for(&FullReferenceType::standalone(CourtDecision)),
            Section::Unclassified
        );
    }

    #[test]
    fn default_scheme_spans_six_sections() {
        assert_eq!(default_scheme().max_section(), Some(6));
    }
}
