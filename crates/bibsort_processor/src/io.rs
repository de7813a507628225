/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! File loading for references and section schemes.
//!
//! References load into an order-preserving map keyed by id; input
//! order is the order stable sorting falls back to when the comparer
//! reports no preference.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use bibsort_core::{Reference, SchemeFile, SectionScheme};

use crate::ProcessorError;

/// References keyed by id, in input order.
pub type References = IndexMap<String, Reference>;

/// Load a section scheme from a YAML or JSON file and validate it.
pub fn load_scheme(path: &Path) -> Result<SectionScheme, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let file: SchemeFile = match ext {
        "json" => serde_json::from_slice(&bytes)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?,
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?
        }
    };
    Ok(SectionScheme::try_from(file)?)
}

/// Load references from a YAML or JSON file.
///
/// Accepts either a list of references (entries without an id are
/// skipped) or a map of id to reference (the map key becomes the id
/// when the record carries none).
pub fn load_references(path: &Path) -> Result<References, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;

            if let Ok(list) = serde_json::from_slice::<Vec<Reference>>(&bytes) {
                return Ok(keyed_by_id(list));
            }
            match serde_json::from_slice::<IndexMap<String, Reference>>(&bytes) {
                Ok(map) => Ok(with_map_ids(map)),
                Err(e) => Err(ProcessorError::ParseError(
                    "JSON".to_string(),
                    e.to_string(),
                )),
            }
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;

            if let Ok(list) = serde_yaml::from_str::<Vec<Reference>>(&content) {
                return Ok(keyed_by_id(list));
            }
            match serde_yaml::from_str::<IndexMap<String, Reference>>(&content) {
                Ok(map) => Ok(with_map_ids(map)),
                Err(e) => Err(ProcessorError::ParseError(
                    "YAML".to_string(),
                    e.to_string(),
                )),
            }
        }
    }
}

fn keyed_by_id(list: Vec<Reference>) -> References {
    let mut refs = IndexMap::new();
    for reference in list {
        if let Some(id) = reference.id() {
            refs.insert(id.to_string(), reference);
        }
    }
    refs
}

fn with_map_ids(map: IndexMap<String, Reference>) -> References {
    map.into_iter()
        .map(|(key, mut reference)| {
            if reference.id.is_none() {
                reference.id = Some(key.clone());
            }
            (key, reference)
        })
        .collect()
}
