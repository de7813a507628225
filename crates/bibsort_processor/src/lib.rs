/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Section-first bibliography ordering.
//!
//! This crate carries the comparator that orders bibliography entries
//! for a reference-management host: citations resolve to integer
//! sections through an editor-supplied [`SectionScheme`], sections
//! compare numerically, and ties within a section fall back to an
//! author/year/title ordering (or any fallback the host supplies).
//!
//! The comparator is designed to plug into the host's sort routine as
//! an ordinary two-argument ordering function, and it never fails:
//! malformed input degrades to "no preference" instead of erroring.
//!
//! # Example
//!
//! ```rust
//! use bibsort_core::{Citation, Reference, ReferenceType, SchemeFile, SectionScheme};
//! use bibsort_processor::SectionComparer;
//!
//! let file: SchemeFile = serde_yaml::from_str(
//!     r#"
//! sections:
//!   - type: book
//!     section: 1
//!   - type: journal-article
//!     section: 2
//! "#,
//! )
//! .unwrap();
//! let scheme = SectionScheme::try_from(file).unwrap();
//! let comparer = SectionComparer::new(&scheme);
//!
//! let book = Citation::bibliography(Reference {
//!     ref_type: Some(ReferenceType::Book),
//!     ..Default::default()
//! });
//! let article = Citation::bibliography(Reference {
//!     ref_type: Some(ReferenceType::JournalArticle),
//!     ..Default::default()
//! });
//!
//! assert_eq!(comparer.compare(&book, &article), std::cmp::Ordering::Less);
//! ```

pub mod comparer;
pub mod error;
pub mod io;
pub mod order;
pub mod sorter;

pub use comparer::SectionComparer;
pub use error::ProcessorError;
pub use io::{load_references, load_scheme, References};
pub use order::{author_year_title, compare_references};
pub use sorter::BibliographySorter;
