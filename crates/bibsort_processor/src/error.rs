/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use bibsort_core::SchemeError;
use thiserror::Error;

/// Errors at the loading boundary.
///
/// The comparator itself never fails; only reading references and
/// schemes from disk can.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} parse error: {1}")]
    ParseError(String, String),

    #[error("invalid section scheme: {0}")]
    Scheme(#[from] SchemeError),
}
