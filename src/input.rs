// src/input.rs
use std::fs;
use std::path::Path;

use log::debug;
use range_sums_shared_kernel::{InfraResult, InfrastructureError};

use crate::query::Query;

/// Read a batch file: a JSON array of queries, or YAML when the extension is
/// `.yaml` / `.yml`.
///
/// # Errors
///
/// Returns `FileRead` when the file cannot be read and `SerializationError`
/// when its contents do not describe a list of queries.
pub fn load_batch(path: &Path) -> InfraResult<Vec<Query>> {
    let text = fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let queries = if is_yaml(path) { parse_yaml(&text)? } else { serde_json::from_str(&text)? };
    debug!("loaded {} queries from {}", queries.len(), path.display());
    Ok(queries)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

#[cfg(feature = "yaml")]
fn parse_yaml(text: &str) -> InfraResult<Vec<Query>> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_text: &str) -> InfraResult<Vec<Query>> {
    Err(InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    })
}
