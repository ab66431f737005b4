//! Build configuration schema.
//!
//! Every path except `source_dir` is relative to `source_dir` unless it is
//! absolute. The defaults reproduce the pinCfgC repository layout:
//!
//! ```text
//! SW/submodules/
//! ├── MySensors/core/MyMessage.h
//! └── pinCfgC/
//!     ├── src/Types.h
//!     └── config/
//!         ├── config-tool.html      (output)
//!         └── src/                  (source_dir)
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Token in the template replaced by the stylesheet.
pub const CSS_PLACEHOLDER: &str = "/* CSS_PLACEHOLDER */";

/// Token in the template replaced by the concatenated scripts.
pub const JAVASCRIPT_PLACEHOLDER: &str = "/* JAVASCRIPT_PLACEHOLDER */";

/// Complete build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory holding the template, stylesheet and script parts.
    pub source_dir: PathBuf,

    /// HTML template file.
    pub template: PathBuf,

    /// Stylesheet inlined into the template.
    pub stylesheet: PathBuf,

    /// Script fragments in concatenation order; the first is the primary
    /// fragment that receives the generated tables.
    pub scripts: Vec<PathBuf>,

    /// MySensors `MyMessage.h` (optional at build time).
    pub mysensors_header: PathBuf,

    /// pinCfgC `Types.h` (optional at build time).
    pub types_header: PathBuf,

    /// Generated page.
    pub output: PathBuf,

    /// Placeholder tokens in the template.
    pub placeholders: Placeholders,

    /// Fail the build when a placeholder is missing from the template.
    pub strict: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("config/src"),
            template: PathBuf::from("config-tool-template.html"),
            stylesheet: PathBuf::from("config-tool-styles.css"),
            scripts: (1..=4)
                .map(|n| PathBuf::from(format!("config-tool-script-part{n}.js")))
                .collect(),
            mysensors_header: ["..", "..", "..", "MySensors", "core", "MyMessage.h"]
                .iter()
                .collect(),
            types_header: ["..", "..", "src", "Types.h"].iter().collect(),
            output: ["..", "config-tool.html"].iter().collect(),
            placeholders: Placeholders::default(),
            strict: false,
        }
    }
}

/// Placeholder tokens substituted in the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Placeholders {
    /// Replaced by the stylesheet text.
    pub stylesheet: String,
    /// Replaced by the concatenated script text.
    pub script: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            stylesheet: CSS_PLACEHOLDER.to_string(),
            script: JAVASCRIPT_PLACEHOLDER.to_string(),
        }
    }
}

/// Concrete file locations for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPaths {
    /// HTML template file.
    pub template: PathBuf,
    /// Stylesheet file.
    pub stylesheet: PathBuf,
    /// Script fragments in order.
    pub scripts: Vec<PathBuf>,
    /// `MyMessage.h`.
    pub mysensors_header: PathBuf,
    /// `Types.h`.
    pub types_header: PathBuf,
    /// Generated page.
    pub output: PathBuf,
}

impl BuildConfig {
    /// Resolve every configured path against `source_dir`.
    #[must_use]
    pub fn paths(&self) -> BuildPaths {
        let at = |p: &Path| self.source_dir.join(p);
        BuildPaths {
            template: at(&self.template),
            stylesheet: at(&self.stylesheet),
            scripts: self.scripts.iter().map(|p| at(p)).collect(),
            mysensors_header: at(&self.mysensors_header),
            types_header: at(&self.types_header),
            output: at(&self.output),
        }
    }
}
