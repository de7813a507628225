/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation input model.
//!
//! A citation wraps a reference in the role it plays in a document.
//! Only bibliography citations take part in section ordering; in-text
//! and footnote citations always compare as "no preference" so the
//! caller's existing order stands.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::reference::Reference;

/// A list of citations to order.
pub type Citations = Vec<Citation>;

/// A citation in one of the host's rendering roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "role", rename_all = "kebab-case")]
pub enum Citation {
    /// An entry in the rendered reference list.
    Bibliography(BibliographyCitation),
    /// A parenthetical or narrative citation in running text.
    InText(InTextCitation),
    /// A citation rendered in a footnote or endnote.
    Footnote(FootnoteCitation),
}

impl Citation {
    /// Wrap a reference as a bibliography citation.
    pub fn bibliography(reference: Reference) -> Self {
        Self::Bibliography(BibliographyCitation {
            reference: Some(reference),
        })
    }

    /// The underlying reference, for any role.
    pub fn reference(&self) -> Option<&Reference> {
        match self {
            Citation::Bibliography(c) => c.reference.as_ref(),
            Citation::InText(c) => c.reference.as_ref(),
            Citation::Footnote(c) => c.reference.as_ref(),
        }
    }

    pub fn is_bibliography(&self) -> bool {
        matches!(self, Citation::Bibliography(_))
    }
}

/// A bibliography entry citation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct BibliographyCitation {
    /// The cited record; the host may hand over placeholders with no
    /// reference attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
}

/// A citation in running text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct InTextCitation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    /// Pinpoint locator, e.g. "42-45" for pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locator: Option<String>,
}

/// A footnote or endnote citation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct FootnoteCitation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<Reference>,
    /// Note number assigned by the document processor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_number: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceType;

    #[test]
    fn citation_role_tag_deserialization() {
        let yaml = r#"
role: bibliography
reference:
  id: kuhn1962
  type: book
"#;
        let citation: Citation = serde_yaml::from_str(yaml).unwrap();
        assert!(citation.is_bibliography());
        let reference = citation.reference().unwrap();
        assert_eq!(reference.id(), Some("kuhn1962"));
        assert_eq!(reference.ref_type, Some(ReferenceType::Book));
    }

    #[test]
    fn footnote_citation_keeps_note_number() {
        let json = r#"{"role": "footnote", "note-number": 7}"#;
        let citation: Citation = serde_json::from_str(json).unwrap();
        match citation {
            Citation::Footnote(note) => assert_eq!(note.note_number, Some(7)),
            _ => panic!("Expected Footnote"),
        }
    }

    #[test]
    fn bibliography_placeholder_has_no_reference() {
        let citation = Citation::Bibliography(BibliographyCitation::default());
        assert!(citation.reference().is_none());
    }
}
