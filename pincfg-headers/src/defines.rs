//! `#define` constant extraction.
//!
//! Only object-like macros whose name starts with [`DEFINE_PREFIX`] are
//! collected. Values are coerced to numbers where possible and otherwise
//! kept verbatim.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

/// Name prefix shared by all pinCfgC constants.
pub const DEFINE_PREFIX: &str = "PINCFG_";

/// C literal suffixes stripped before numeric coercion (`1000000LL`, `5U`, `1.0f`).
const LITERAL_SUFFIXES: [char; 6] = ['L', 'l', 'U', 'u', 'F', 'f'];

static DEFINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#define[ \t]+(PINCFG_[A-Z0-9_]+)[ \t]+(\S+)").expect("valid regex")
});

/// Coerced value of a macro definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MacroValue {
    /// Decimal integer literal.
    Int(i64),
    /// Literal containing a decimal point.
    Float(f64),
    /// Anything else, kept as written.
    Str(String),
}

impl fmt::Display for MacroValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            // Debug keeps the fractional part on whole numbers (1.0, -1000.0)
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Macro name → value, in first-seen order.
pub type DefineMap = IndexMap<String, MacroValue>;

/// Returns `true` for an optionally signed decimal literal with at most one
/// decimal point and at least one digit.
fn is_decimal_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    let mut seen_point = false;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Coerce a raw macro value into a [`MacroValue`].
#[must_use]
pub fn coerce_value(raw: &str) -> MacroValue {
    let cleaned = raw.trim_end_matches(LITERAL_SUFFIXES);
    if !is_decimal_literal(cleaned) {
        return MacroValue::Str(raw.to_string());
    }

    let coerced = if cleaned.contains('.') {
        cleaned.parse().ok().map(MacroValue::Float)
    } else {
        cleaned.parse().ok().map(MacroValue::Int)
    };
    coerced.unwrap_or_else(|| MacroValue::Str(raw.to_string()))
}

/// Collect every `#define PINCFG_* <value>` in `content`.
///
/// Trailing comments are ignored. A name defined more than once keeps its
/// first position and its last value.
#[must_use]
pub fn extract_defines(content: &str) -> DefineMap {
    let mut defines = DefineMap::new();
    for caps in DEFINE_RE.captures_iter(content) {
        let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let value = coerce_value(value.as_str());
        tracing::trace!(name = name.as_str(), %value, "parsed define");
        defines.insert(name.as_str().to_string(), value);
    }
    defines
}
