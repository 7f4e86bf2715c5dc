//! Pip requirements manifest parser.
//!
//! Extracts exact-version pins (`name==version`) from `requirements.txt`
//! content. This is a best-effort extractor, not a validator: comments,
//! `-r` includes, range constraints (`>=`, `~=`, ...) and otherwise
//! unparseable lines are skipped silently. Each accepted line yields one
//! [`Library`] record tagged with its 1-based physical line number; the pip
//! format declares no relationships between packages, so the report's
//! dependency list is always empty.

use std::io::{Read, Seek};

use async_trait::async_trait;
use tracing::debug;

use crate::formats::encoding;
use crate::model::{Library, Location, ManifestReport};
use crate::traits::{ManifestParser, ParseError};

const COMMENT_MARKER: &str = "#";
const ENV_MARKER: &str = ";";
const OPTION_MARKER: &str = "--";
const EXTRAS_OPEN: char = '[';
const EXTRAS_CLOSE: char = ']';

/// Parser for pip requirements manifests.
pub struct PipRequirementsParser;

impl PipRequirementsParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PipRequirementsParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ManifestParser for PipRequirementsParser {
    fn manifest_id(&self) -> &str {
        "pip"
    }

    async fn parse(&self, content: &[u8]) -> Result<ManifestReport, ParseError> {
        parse_bytes(content)
    }
}

/// Parses a seekable byte source positioned at the start of a manifest.
///
/// The source is read to the end and then scanned; the caller bounds
/// execution by bounding input size.
///
/// # Errors
///
/// Returns `Err` if the source cannot be fully read or its content cannot be
/// decoded. No partial report is returned in that case.
pub fn parse_reader<R: Read + Seek>(reader: &mut R) -> Result<ManifestReport, ParseError> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    parse_bytes(&raw)
}

/// Scans in-memory manifest content for exact-version pins.
pub fn parse_bytes(content: &[u8]) -> Result<ManifestReport, ParseError> {
    let text = encoding::decode(content)?;

    let mut libraries = Vec::new();
    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = normalize_line(raw_line);
        if let Some((name, version)) = split_exact_pin(&line) {
            debug!(line = line_number, name, version, "accepted pin");
            libraries.push(Library {
                name: name.to_string(),
                version: version.to_string(),
                location: Location::line(line_number),
            });
        }
    }

    Ok(ManifestReport {
        libraries,
        dependencies: Vec::new(),
    })
}

/// Reduces one raw line to a candidate `name==version` token.
///
/// The steps run in a fixed order; later steps assume earlier ones ran.
/// Backslashes are deleted rather than used to join lines, so a requirement
/// continued across physical lines is evaluated fragment by fragment and
/// usually dropped. Known limitation, kept intentionally.
fn normalize_line(raw: &str) -> String {
    let line = raw.replace(' ', "");
    let line = line.replace('\\', "");
    let line = remove_extras(&line);
    let line = rstrip_at(&line, COMMENT_MARKER);
    let line = rstrip_at(line, ENV_MARKER);
    rstrip_at(line, OPTION_MARKER).to_string()
}

/// Deletes the first `[`...`]` extras segment, e.g. `requests[security]` →
/// `requests`. If either bracket is missing (or the first `]` precedes the
/// first `[`) the line is returned unchanged; only one segment is removed.
fn remove_extras(line: &str) -> String {
    match (line.find(EXTRAS_OPEN), line.find(EXTRAS_CLOSE)) {
        (Some(start), Some(end)) if start < end => {
            format!("{}{}", &line[..start], &line[end + 1..])
        }
        _ => line.to_string(),
    }
}

/// Truncates the line before the first occurrence of `key` and trims
/// trailing whitespace from the remainder; absent `key`, returns the line
/// unchanged.
fn rstrip_at<'a>(line: &'a str, key: &str) -> &'a str {
    match line.find(key) {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}

/// Splits a normalized line on `==`, accepting it only as an exact pin.
///
/// Exactly two non-empty operands are required. A stray `=` adjacent to the
/// split point rejects the line as well, so PEP 440 arbitrary equality
/// (`name===version`) does not slip through as version `=x`. An interior
/// `=` elsewhere in an operand is passed through uncorrected, like any
/// other syntactically illegal name.
fn split_exact_pin(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split("==");
    let name = parts.next()?;
    let version = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if name.is_empty() || version.is_empty() {
        return None;
    }
    if name.ends_with('=') || version.starts_with('=') {
        return None;
    }
    Some((name, version))
}
