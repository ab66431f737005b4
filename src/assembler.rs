//! Page assembly.
//!
//! Splices the generated tables into the primary script fragment,
//! concatenates all fragments, and substitutes the stylesheet and script
//! placeholders in the template.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::{BuildPaths, Placeholders};
use crate::error::AssembleError;

/// Hand-written declarations in the primary fragment that the generated
/// blocks replace, each introduced by its marker comment.
static STALE_DECLARATIONS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"(?s)// MySensors variable types.*?const V_TYPES = \{[^}]+\};",
        r"(?s)// MySensors sensor types.*?const S_TYPES = \{[^}]+\};",
        r"(?s)// pinCfgC constraints.*?const PINCFG_LIMITS = \{[^}]+\};",
    ]
    .map(|pattern| Regex::new(pattern).expect("valid regex"))
});

/// Separator written after every script fragment.
const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Which placeholders were found and replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Substitution {
    /// Stylesheet placeholder replaced.
    pub stylesheet: bool,
    /// Script placeholder replaced.
    pub script: bool,
}

impl Substitution {
    /// Tokens that were not found, in substitution order.
    #[must_use]
    pub fn missing<'a>(&self, placeholders: &'a Placeholders) -> Vec<&'a str> {
        let mut missing = Vec::new();
        if !self.stylesheet {
            missing.push(placeholders.stylesheet.as_str());
        }
        if !self.script {
            missing.push(placeholders.script.as_str());
        }
        missing
    }

    /// Returns `true` if both placeholders were replaced.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.stylesheet && self.script
    }
}

/// Result of assembling the page in memory.
#[derive(Debug, Clone)]
pub struct AssembledPage {
    /// Final HTML.
    pub html: String,
    /// Template as read.
    pub template_len: usize,
    /// Stylesheet as read.
    pub stylesheet_len: usize,
    /// Concatenated script text.
    pub script: String,
    /// Placeholder outcome.
    pub substitution: Substitution,
}

/// Read a required input file.
///
/// # Errors
///
/// Returns [`AssembleError::MissingInput`] if the file does not exist and
/// [`AssembleError::ReadInput`] for any other read failure.
pub fn read_required(path: &Path) -> Result<String, AssembleError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AssembleError::MissingInput {
                path: path.to_path_buf(),
            }
        } else {
            AssembleError::ReadInput {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Remove the hand-written table declarations from a fragment.
#[must_use]
pub fn strip_stale_declarations(fragment: &str) -> String {
    STALE_DECLARATIONS
        .iter()
        .fold(fragment.to_string(), |text, re| re.replace_all(&text, "").into_owned())
}

/// Prefix the primary fragment with the generated blocks.
#[must_use]
pub fn splice_primary(fragment: &str, types: &str, limits: &str) -> String {
    format!(
        "{types}\n\n{limits}\n\n{}",
        strip_stale_declarations(fragment)
    )
}

/// Join fragments, each followed by a blank line.
#[must_use]
pub fn concat_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments.iter().fold(String::new(), |mut out, part| {
        out.push_str(part.as_ref());
        out.push_str(FRAGMENT_SEPARATOR);
        out
    })
}

/// Replace the first stylesheet token and the first script token.
///
/// Both tokens are located in `template` before anything is inserted, so
/// text coming from the stylesheet or script is never searched for tokens.
/// A script token overlapping the chosen stylesheet token is not used.
#[must_use]
pub fn substitute(
    template: &str,
    placeholders: &Placeholders,
    stylesheet: &str,
    script: &str,
) -> (String, Substitution) {
    let css_token = placeholders.stylesheet.as_str();
    let js_token = placeholders.script.as_str();

    let css_at = template
        .find(css_token)
        .map(|start| (start, start + css_token.len(), stylesheet));
    let js_at = template
        .match_indices(js_token)
        .map(|(start, _)| (start, start + js_token.len(), script))
        .find(|&(start, end, _)| css_at.is_none_or(|(s, e, _)| end <= s || start >= e));

    let substitution = Substitution {
        stylesheet: css_at.is_some(),
        script: js_at.is_some(),
    };

    let mut splices: Vec<_> = css_at.into_iter().chain(js_at).collect();
    splices.sort_unstable_by_key(|&(start, _, _)| start);

    let mut html = String::with_capacity(template.len() + stylesheet.len() + script.len());
    let mut cursor = 0;
    for (start, end, value) in splices {
        html.push_str(&template[cursor..start]);
        html.push_str(value);
        cursor = end;
    }
    html.push_str(&template[cursor..]);

    (html, substitution)
}

/// Read all page sources and assemble the page in memory.
///
/// `types` and `limits` are the generated (or fallback) script blocks.
///
/// # Errors
///
/// Returns an error if any template, stylesheet or script fragment cannot
/// be read.
pub fn assemble(
    paths: &BuildPaths,
    placeholders: &Placeholders,
    types: &str,
    limits: &str,
) -> Result<AssembledPage, AssembleError> {
    let template = read_required(&paths.template)?;
    let stylesheet = read_required(&paths.stylesheet)?;

    let mut fragments = Vec::with_capacity(paths.scripts.len());
    for (index, path) in paths.scripts.iter().enumerate() {
        tracing::info!(path = %path.display(), "reading script fragment");
        let fragment = read_required(path)?;
        if index == 0 {
            fragments.push(splice_primary(&fragment, types, limits));
        } else {
            fragments.push(fragment);
        }
    }
    let script = concat_fragments(&fragments);

    let (html, substitution) = substitute(&template, placeholders, &stylesheet, &script);
    for token in substitution.missing(placeholders) {
        tracing::warn!(token, "placeholder not found in template");
    }

    Ok(AssembledPage {
        html,
        template_len: template.len(),
        stylesheet_len: stylesheet.len(),
        script,
        substitution,
    })
}

/// Write the page, replacing any existing file.
///
/// # Errors
///
/// Returns [`AssembleError::WriteOutput`] if the file cannot be written.
pub fn write_page(path: &Path, html: &str) -> Result<(), AssembleError> {
    std::fs::write(path, html).map_err(|source| AssembleError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote page");
    Ok(())
}
