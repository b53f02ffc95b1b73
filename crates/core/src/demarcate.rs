//! Response demarcator
//!
//! Splits a model completion back into named files using the marker grammar
//! (see [`crate::marker`]).
//!
//! Names are discovered with a fixed regex. Locating each file's markers
//! afterwards uses literal substring search, so names containing pattern
//! metacharacters are matched verbatim.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;
use crate::file_set::FileSet;
use crate::marker::{begin_marker, end_marker};

fn begin_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"###([^#\r\n]+?)###").expect("begin marker regex is valid"))
}

/// Names of every begin marker in `blob`, in order, duplicates included.
pub fn marker_names(blob: &str) -> Vec<&str> {
    begin_marker_regex()
        .captures_iter(blob)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str())
        .collect()
}

/// Parse a completion into a [`FileSet`].
///
/// A name that appears more than once keeps the content of its last
/// occurrence.
///
/// # Errors
///
/// - [`Error::ResponseEmpty`] when `blob` is empty or whitespace only
/// - [`Error::NoFileMarkersFound`] when no begin marker is present
/// - [`Error::MissingBeginMarker`] / [`Error::MissingEndMarker`] when a
///   segment is not closed, typically a truncated response
pub fn parse(blob: &str) -> Result<FileSet, Error> {
    if blob.trim().is_empty() {
        return Err(Error::ResponseEmpty);
    }

    let names = marker_names(blob);
    if names.is_empty() {
        return Err(Error::NoFileMarkersFound);
    }

    let mut files = FileSet::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for name in names {
        let occurrence = seen.entry(name).or_insert(0);
        let content = extract_segment(blob, name, *occurrence)?;
        *occurrence += 1;

        if files.insert(name, content).is_some() {
            log::warn!("File '{}' appears more than once in the response; keeping the last one", name);
        }
    }

    Ok(files)
}

/// Content of the `occurrence`-th (0-based) segment named `name`, trimmed.
fn extract_segment<'a>(blob: &'a str, name: &str, occurrence: usize) -> Result<&'a str, Error> {
    let begin = begin_marker(name);
    let end = end_marker(name);

    let (begin_at, _) = blob
        .match_indices(begin.as_str())
        .nth(occurrence)
        .ok_or_else(|| Error::MissingBeginMarker(name.to_string()))?;
    let content_start = begin_at + begin.len();

    let content_len = blob[content_start..]
        .find(end.as_str())
        .ok_or_else(|| Error::MissingEndMarker(name.to_string()))?;

    Ok(blob[content_start..content_start + content_len].trim())
}
