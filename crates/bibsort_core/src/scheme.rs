/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Section schemes: the editor-supplied mapping from full reference
//! types to bibliography sections.
//!
//! A scheme is hand-edited per deployment as a YAML or JSON file
//! ([`SchemeFile`]), then validated once into an immutable
//! [`SectionScheme`] that comparators read for the lifetime of a sort
//! pass.
//!
//! # Examples
//!
//! ```yaml
//! unclassified: last
//! sections:
//!   - type: book
//!     section: 1
//!   - type: journal-article
//!     section: 2
//!   - type: contribution
//!     parent: book-edited
//!     section: 4
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::reference::{FullReferenceType, Reference};

/// Where a reference landed after section resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// A ranked section; well-formed schemes number them from 1.
    Numbered(u32),
    /// No usable classification: an untyped reference, a full type
    /// missing from the scheme, or one the scheme maps to the reserved
    /// section 0.
    Unclassified,
}

/// Where unclassified references sort relative to numbered sections.
///
/// Fixed when the scheme is built, not per comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub enum UnclassifiedPosition {
    /// Before every numbered section.
    First,
    /// After every numbered section.
    #[default]
    Last,
}

/// A single scheme entry: one full reference type and its section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct SectionEntry {
    #[serde(flatten)]
    pub key: FullReferenceType,
    /// Section number. 0 is reserved for "other" and resolves as
    /// unclassified; ranked sections start at 1.
    pub section: u32,
}

/// The on-disk shape of a section scheme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct SchemeFile {
    /// Sentinel policy for unclassified references.
    #[serde(default)]
    pub unclassified: UnclassifiedPosition,
    pub sections: Vec<SectionEntry>,
}

/// Scheme construction errors.
#[derive(Debug, Error)]
pub enum SchemeError {
    #[error("duplicate section entry for {0}")]
    DuplicateEntry(FullReferenceType),
}

/// A validated, immutable section scheme.
///
/// Built once at startup; afterwards it is read-only and may be shared
/// by reference across concurrent comparisons.
#[derive(Debug, Clone, Default)]
pub struct SectionScheme {
    unclassified: UnclassifiedPosition,
    table: HashMap<FullReferenceType, u32>,
}

impl SectionScheme {
    /// Build a scheme from (key, section) pairs.
    ///
    /// Rejects duplicate keys rather than letting a later entry win.
    pub fn from_entries<I>(
        unclassified: UnclassifiedPosition,
        entries: I,
    ) -> Result<Self, SchemeError>
    where
        I: IntoIterator<Item = (FullReferenceType, u32)>,
    {
        let mut table = HashMap::new();
        for (key, section) in entries {
            if table.insert(key, section).is_some() {
                return Err(SchemeError::DuplicateEntry(key));
            }
        }
        Ok(Self {
            unclassified,
            table,
        })
    }

    pub fn unclassified_position(&self) -> UnclassifiedPosition {
        self.unclassified
    }

    /// Number of entries in the table, counting section-0 entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The authoritative set of known full reference types.
    pub fn keys(&self) -> impl Iterator<Item = &FullReferenceType> {
        self.table.keys()
    }

    /// The highest ranked section, if the scheme has any.
    pub fn max_section(&self) -> Option<u32> {
        self.table.values().copied().filter(|s| *s > 0).max()
    }

    /// Resolve a full reference type to its section.
    pub fn section_for(&self, key: &FullReferenceType) -> Section {
        match self.table.get(key) {
            None | Some(&0) => Section::Unclassified,
            Some(&section) => Section::Numbered(section),
        }
    }

    /// Classify a reference and resolve its section.
    ///
    /// Untyped references resolve as unclassified; so does a generic
    /// contribution whose parent pairing has no entry of its own.
    pub fn section_of(&self, reference: &Reference) -> Section {
        match FullReferenceType::of(reference) {
            Some(key) => self.section_for(&key),
            None => Section::Unclassified,
        }
    }
}

impl TryFrom<SchemeFile> for SectionScheme {
    type Error = SchemeError;

    fn try_from(file: SchemeFile) -> Result<Self, Self::Error> {
        Self::from_entries(
            file.unclassified,
            file.sections.into_iter().map(|e| (e.key, e.section)),
        )
    }
}
