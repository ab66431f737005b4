//! Enum block extraction.
//!
//! Locates a `typedef enum { ... } <tag>;` block and collects its
//! `NAME = NUMBER, //!< description` members. Matching is line-oriented and
//! best effort: anything that does not look like a member is counted as a
//! skipped line rather than reported as an error.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

use crate::error::ExtractError;

/// Marker that flags a member as deprecated in its doc comment.
pub const DEPRECATED_MARKER: &str = "\\deprecated";

/// Declaration prefix used by the MySensors enums.
pub const TYPEDEF_ENUM: &str = "typedef enum";

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z_][A-Z0-9_]*)\s*=\s*([0-9]+)\s*,?\s*(?://!<\s*(.*))?").expect("valid regex")
});

/// A single enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumEntry {
    /// Ordinal exactly as written in the header (decimal digits).
    pub ordinal: String,
    /// Symbol name, e.g. `S_TEMP`.
    pub name: String,
    /// Doc-comment text, empty when the member has none.
    pub description: String,
}

impl EnumEntry {
    /// Numeric value of the ordinal used for sorting.
    ///
    /// Ordinals too large for `u128` sort after every other entry.
    #[must_use]
    pub fn sort_key(&self) -> u128 {
        self.ordinal.parse().unwrap_or(u128::MAX)
    }
}

/// Result of scanning one enum block.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnumExtraction {
    /// Enum tag that was searched for.
    pub tag: String,
    /// Whether the enum block itself was located.
    pub block_found: bool,
    /// Members keyed by ordinal text; a later duplicate replaces the earlier one.
    pub entries: IndexMap<String, EnumEntry>,
    /// Members dropped because their description carries the deprecation marker.
    pub deprecated: usize,
    /// Non-comment body lines that contained no recognizable member.
    pub skipped_lines: usize,
}

impl EnumExtraction {
    /// Number of kept members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no member was kept.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members ordered by ascending numeric ordinal.
    #[must_use]
    pub fn sorted(&self) -> Vec<&EnumEntry> {
        let mut sorted: Vec<_> = self.entries.values().collect();
        sorted.sort_by_key(|e| e.sort_key());
        sorted
    }
}

/// Build the patterns for the opening `<prefix> {` and closing `} <tag>;`
/// of a block.
///
/// Whitespace inside `prefix` matches any run of whitespace.
fn block_patterns(prefix: &str, tag: &str) -> (String, String) {
    let prefix = prefix
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    (
        format!(r"{prefix}\s*\{{"),
        format!(r"\}}\s*{};", regex::escape(tag)),
    )
}

/// Body of the first block closed by `} <tag>;`.
///
/// The body starts after the last opening that precedes the close, so an
/// earlier enum is never merged in and braces inside member comments are
/// harmless.
fn find_block<'a>(content: &'a str, open_re: &Regex, close_re: &Regex) -> Option<&'a str> {
    let close = close_re.find(content)?;
    let open = open_re.find_iter(&content[..close.start()]).last()?;
    Some(content[open.end()..close.start()].trim())
}

fn is_comment_or_blank(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with("//") || line.starts_with("/*") || line.starts_with('*')
}

/// Extract the members of the first enum block named `tag`.
///
/// A missing block is not an error: a warning is logged and the returned
/// extraction has `block_found == false` and no entries.
///
/// # Errors
///
/// Returns [`ExtractError::Pattern`] if the block pattern built from
/// `prefix` and `tag` fails to compile.
pub fn extract_enum(content: &str, tag: &str, prefix: &str) -> Result<EnumExtraction, ExtractError> {
    let (open, close) = block_patterns(prefix, tag);
    let compile = |pattern: &str| {
        Regex::new(pattern).map_err(|source| ExtractError::Pattern {
            tag: tag.to_string(),
            source,
        })
    };
    let open_re = compile(&open)?;
    let close_re = compile(&close)?;

    let mut extraction = EnumExtraction {
        tag: tag.to_string(),
        ..EnumExtraction::default()
    };

    let Some(body) = find_block(content, &open_re, &close_re) else {
        tracing::warn!(tag, "could not find enum block");
        return Ok(extraction);
    };
    extraction.block_found = true;

    let mut match_starts = Vec::new();
    for caps in ENTRY_RE.captures_iter(body) {
        let (Some(whole), Some(name), Some(ordinal)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        match_starts.push(whole.start());

        let description = caps.get(3).map_or("", |m| m.as_str().trim());
        if description.contains(DEPRECATED_MARKER) {
            tracing::trace!(tag, name = name.as_str(), "skipping deprecated member");
            extraction.deprecated += 1;
            continue;
        }

        extraction.entries.insert(
            ordinal.as_str().to_string(),
            EnumEntry {
                ordinal: ordinal.as_str().to_string(),
                name: name.as_str().to_string(),
                description: description.to_string(),
            },
        );
    }

    let mut offset = 0;
    for line in body.split_inclusive('\n') {
        let end = offset + line.len();
        if !is_comment_or_blank(line) && !match_starts.iter().any(|&s| s >= offset && s < end) {
            tracing::debug!(tag, line = line.trim(), "skipping unrecognized enum line");
            extraction.skipped_lines += 1;
        }
        offset = end;
    }

    tracing::debug!(
        tag,
        entries = extraction.len(),
        deprecated = extraction.deprecated,
        skipped = extraction.skipped_lines,
        "parsed enum block"
    );

    Ok(extraction)
}
