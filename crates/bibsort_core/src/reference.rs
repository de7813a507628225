/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Reference records and their classification.
//!
//! A reference is the host's bibliographic record for a single source.
//! For section ordering only a thin slice of it matters: the assigned
//! type, the containing work (if the record is a contribution inside
//! another reference), and the handful of fields the default
//! author/year/title ordering reads.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

pub type RefID = String;

crate::str_enum! {
    /// The kind of source a reference describes.
    ///
    /// This is the host's catalog of reference types. `Unknown` is a
    /// real catalog value assigned by the host, not an error marker;
    /// a record may also carry no type at all (`Reference::ref_type`
    /// is optional).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[cfg_attr(feature = "schema", derive(JsonSchema))]
    #[serde(rename_all = "kebab-case")]
    pub enum ReferenceType {
        ArchiveMaterial = "archive-material",
        AudioBook = "audio-book",
        AudioOrVideoDocument = "audio-or-video-document",
        Book = "book",
        BookEdited = "book-edited",
        Broadcast = "broadcast",
        CollectedWorks = "collected-works",
        ComputerProgram = "computer-program",
        ConferenceProceedings = "conference-proceedings",
        /// A dependent work; only meaningful inside a parent reference.
        Contribution = "contribution",
        ContributionInLegalCommentary = "contribution-in-legal-commentary",
        CourtDecision = "court-decision",
        File = "file",
        InternetDocument = "internet-document",
        InterviewMaterial = "interview-material",
        JournalArticle = "journal-article",
        Lecture = "lecture",
        LegalCommentary = "legal-commentary",
        Manuscript = "manuscript",
        Map = "map",
        Movie = "movie",
        MusicAlbum = "music-album",
        MusicTrack = "music-track",
        NewsAgencyReport = "news-agency-report",
        NewspaperArticle = "newspaper-article",
        Patent = "patent",
        PersonalCommunication = "personal-communication",
        PressRelease = "press-release",
        RadioPlay = "radio-play",
        SpecialIssue = "special-issue",
        Standard = "standard",
        StatuteOrRegulation = "statute-or-regulation",
        Thesis = "thesis",
        Unknown = "unknown",
        UnpublishedWork = "unpublished-work",
    }
}

impl fmt::Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A personal name, family-name keyed for sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Name {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
}

impl Name {
    pub fn new(family: &str, given: &str) -> Self {
        Self {
            family: family.to_string(),
            given: Some(given.to_string()),
        }
    }
}

/// A bibliographic record as supplied by the host.
///
/// The host owns the full record; this models only what section
/// ordering and the default fallback ordering read. All fields are
/// optional because the comparator must tolerate half-filled records
/// without failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Reference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RefID>,
    /// The assigned type; absent for records the host has not
    /// classified yet.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<ReferenceType>,
    /// The containing work, when this record is a contribution inside
    /// another reference (a chapter in an edited book, a track on an
    /// album).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Reference>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<Name>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub editors: Vec<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

impl Reference {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The full semantic type of this record, or `None` when it has no
    /// assigned type.
    pub fn full_type(&self) -> Option<FullReferenceType> {
        FullReferenceType::of(self)
    }
}

/// The full semantic type of a reference: its own type plus the type of
/// the work containing it, when any.
///
/// A chapter in an edited book and a chapter in conference proceedings
/// share a primary type but carry different full types, and may land in
/// different bibliography sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct FullReferenceType {
    #[serde(rename = "type")]
    pub primary: ReferenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ReferenceType>,
}

impl FullReferenceType {
    /// A type with no containing work.
    pub fn standalone(primary: ReferenceType) -> Self {
        Self {
            primary,
            parent: None,
        }
    }

    /// A type contained inside a parent work.
    pub fn within(primary: ReferenceType, parent: ReferenceType) -> Self {
        Self {
            primary,
            parent: Some(parent),
        }
    }

    /// Classify a reference.
    ///
    /// Returns `None` when the reference has no assigned type. The
    /// parent component is `None` when there is no parent or the parent
    /// itself is untyped.
    pub fn of(reference: &Reference) -> Option<Self> {
        let primary = reference.ref_type?;
        let parent = reference.parent.as_deref().and_then(|p| p.ref_type);
        Some(Self { primary, parent })
    }
}

impl fmt::Display for FullReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parent {
            Some(parent) => write!(f, "{} in {}", self.primary, parent),
            None => write!(f, "{}", self.primary),
        }
    }
}
