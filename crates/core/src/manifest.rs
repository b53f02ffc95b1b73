//! Example-pair manifest
//!
//! The manifest lists the (before, after) sample directories used as few-shot
//! examples. Two shapes are accepted:
//!
//! ```json
//! { "examples/aws/vm": "examples/azure/vm" }
//! ```
//!
//! ```json
//! [{ "before": "examples/aws/vm", "after": "examples/azure/vm" }]
//! ```
//!
//! Relative paths resolve against the directory holding the manifest. Order
//! is preserved in both shapes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::conversation::ExamplePair;
use crate::error::Error;
use crate::serialize::serialize;

/// Default manifest file name.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Directories of one few-shot example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSource {
    pub before: PathBuf,
    pub after: PathBuf,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawManifest {
    Map(serde_json::Map<String, Value>),
    List(Vec<RawPair>),
}

#[derive(Deserialize)]
struct RawPair {
    before: String,
    after: String,
}

/// Parse manifest JSON.
pub fn parse_manifest(json: &str, base_dir: &Path) -> Result<Vec<ExampleSource>, Error> {
    let raw: RawManifest = serde_json::from_str(json).map_err(|e| {
        Error::Manifest(format!(
            "expected an object of before/after directories or a list of {{\"before\", \"after\"}} pairs: {e}"
        ))
    })?;

    let pairs: Vec<(String, String)> = match raw {
        RawManifest::Map(map) => map
            .into_iter()
            .map(|(before, after)| match after {
                Value::String(after) => Ok((before, after)),
                other => Err(Error::Manifest(format!(
                    "value for '{before}' must be a directory path, got {other}"
                ))),
            })
            .collect::<Result<_, _>>()?,
        RawManifest::List(list) => list
            .into_iter()
            .map(|pair| (pair.before, pair.after))
            .collect(),
    };

    if pairs.is_empty() {
        return Err(Error::Manifest(
            "at least one before/after pair must be specified".to_string(),
        ));
    }

    Ok(pairs
        .into_iter()
        .map(|(before, after)| ExampleSource {
            before: base_dir.join(before),
            after: base_dir.join(after),
        })
        .collect())
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Vec<ExampleSource>, Error> {
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    parse_manifest(&json, base_dir)
}

/// Serialize every example into an [`ExamplePair`].
///
/// Outputs always carry markers since they teach the model the response
/// format. Inputs carry them when `include_input_names` is set.
pub fn load_example_pairs(
    sources: &[ExampleSource],
    include_input_names: bool,
) -> Result<Vec<ExamplePair>, Error> {
    sources
        .iter()
        .map(|source| {
            Ok(ExamplePair::new(
                serialize(&source.before, include_input_names)?,
                serialize(&source.after, true)?,
            ))
        })
        .collect()
}
