//! Rendering of enum extractions as script lookup tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::enums::{EnumEntry, EnumExtraction};

/// Leading sensor-type reference such as `S_TEMP. ` in a variable description.
static TYPE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z_]+\.\s*").expect("valid regex"));

/// How one enum is rendered into a table declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    /// Enum tag in the header.
    pub tag: &'static str,
    /// Name of the emitted `const`.
    pub name: &'static str,
    /// Comment line placed above the declaration.
    pub comment: &'static str,
    /// Descriptions are cut at the first occurrence of this character.
    pub delimiter: char,
    /// Strip a leading `[A-Z_]+.` reference from the cut description.
    pub strip_type_prefix: bool,
}

/// `S_TYPES`: sensor types, descriptions cut at the first comma.
pub const SENSOR_TYPES: TableStyle = TableStyle {
    tag: "mysensors_sensor_t",
    name: "S_TYPES",
    comment: "// MySensors sensor types (S_TYPE) - auto-generated from MyMessage.h",
    delimiter: ',',
    strip_type_prefix: false,
};

/// `V_TYPES`: variable types, descriptions cut at the first period.
pub const VARIABLE_TYPES: TableStyle = TableStyle {
    tag: "mysensors_data_t",
    name: "V_TYPES",
    comment: "// MySensors variable types (V_TYPE) - auto-generated from MyMessage.h",
    delimiter: '.',
    strip_type_prefix: true,
};

/// Escape text for use inside a single-quoted script string.
#[must_use]
pub fn escape_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Short description shown next to the symbol.
///
/// An entry without any description shows its own symbol name.
#[must_use]
pub fn short_description(entry: &EnumEntry, style: &TableStyle) -> String {
    if entry.description.is_empty() {
        return entry.name.clone();
    }

    let cut = entry
        .description
        .split(style.delimiter)
        .next()
        .unwrap_or_default()
        .trim();

    if style.strip_type_prefix {
        TYPE_PREFIX_RE.replace(cut, "").into_owned()
    } else {
        cut.to_string()
    }
}

/// Render one enum as `const <NAME> = { ... };` preceded by its comment.
#[must_use]
pub fn render_enum_table(extraction: &EnumExtraction, style: &TableStyle) -> String {
    let mut lines = vec![style.comment.to_string(), format!("const {} = {{", style.name)];
    for entry in extraction.sorted() {
        lines.push(format!(
            "    '{}': '{} - {}',",
            entry.ordinal,
            entry.name,
            escape_single_quoted(&short_description(entry, style))
        ));
    }
    lines.push("};".to_string());
    lines.join("\n")
}

/// Render the sensor and variable tables separated by a blank line.
#[must_use]
pub fn render_types_block(sensors: &EnumExtraction, variables: &EnumExtraction) -> String {
    format!(
        "{}\n\n{}",
        render_enum_table(sensors, &SENSOR_TYPES),
        render_enum_table(variables, &VARIABLE_TYPES)
    )
}
