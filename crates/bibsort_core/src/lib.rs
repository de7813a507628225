//! Core data model for sectioned bibliography ordering.
//!
//! This crate defines the pieces the comparator in `bibsort_processor`
//! operates on: reference records and their types, citations in their
//! rendering roles, the composite full-reference-type key, and the
//! editor-supplied section scheme that maps full types to integer
//! bibliography sections.
//!
//! Everything here is plain immutable data; the ordering logic lives in
//! the processor crate.

pub mod citation;
pub mod embedded;
pub mod macros;
pub mod reference;
pub mod scheme;

pub use citation::{BibliographyCitation, Citation, Citations, FootnoteCitation, InTextCitation};
pub use reference::{FullReferenceType, Name, RefID, Reference, ReferenceType};
pub use scheme::{
    Section, SectionEntry, SectionScheme, SchemeError, SchemeFile, UnclassifiedPosition,
};
