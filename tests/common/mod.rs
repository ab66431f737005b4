//! Shared integration-test harness: copies the fixture tree into a temporary
//! directory and runs the `pincfg-builder` binary against it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A throwaway copy of `tests/fixtures/SW`.
///
/// The directory is removed on drop.
#[allow(clippy::missing_panics_doc)]
pub struct FixtureTree {
    dir: TempDir,
}

impl FixtureTree {
    /// Copies the complete fixture tree (sources and both headers).
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        copy_dir(&Self::fixture_root(), dir.path());
        Self { dir }
    }

    /// Path of the pristine fixture tree in the repository.
    pub fn fixture_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/SW")
    }

    /// Root of the copy (the `SW` directory).
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// `pinCfgC/config/src` inside the copy.
    pub fn source_dir(&self) -> PathBuf {
        self.root().join("pinCfgC/config/src")
    }

    /// Default output location for `source_dir`.
    pub fn output(&self) -> PathBuf {
        self.root().join("pinCfgC/config/config-tool.html")
    }

    /// `MySensors/core/MyMessage.h` inside the copy.
    pub fn mysensors_header(&self) -> PathBuf {
        self.root().join("MySensors/core/MyMessage.h")
    }

    /// `pinCfgC/src/Types.h` inside the copy.
    pub fn types_header(&self) -> PathBuf {
        self.root().join("pinCfgC/src/Types.h")
    }

    /// Delete both optional headers.
    pub fn remove_headers(&self) {
        std::fs::remove_file(self.mysensors_header()).expect("remove MyMessage.h");
        std::fs::remove_file(self.types_header()).expect("remove Types.h");
    }

    /// Read a file from the source directory.
    pub fn read_source(&self, name: &str) -> String {
        std::fs::read_to_string(self.source_dir().join(name)).expect("read fixture source")
    }

    /// Overwrite a file in the source directory.
    pub fn write_source(&self, name: &str, content: &str) {
        std::fs::write(self.source_dir().join(name), content).expect("write fixture source");
    }

    /// Read the generated page.
    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.output()).expect("read generated page")
    }

    /// Run `build --source-dir <copy>` with extra arguments.
    pub fn build(&self, extra: &[&str]) -> Output {
        let source_dir = self.source_dir();
        let mut args = vec!["build", "--source-dir", source_dir.to_str().expect("utf-8 path")];
        args.extend_from_slice(extra);
        run_command(&args)
    }
}

/// Run the binary with `args`, isolated from `PINCFG_BUILDER_*` variables.
#[allow(clippy::missing_panics_doc)]
pub fn run_command(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_pincfg-builder");
    let mut cmd = Command::new(bin);
    for (key, _) in std::env::vars() {
        if key.starts_with("PINCFG_BUILDER_") {
            cmd.env_remove(key);
        }
    }
    cmd.env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("spawn pincfg-builder")
}

fn copy_dir(from: &Path, to: &Path) {
    std::fs::create_dir_all(to).expect("create dir");
    for entry in std::fs::read_dir(from).expect("read fixture dir") {
        let entry = entry.expect("fixture entry");
        let target = to.join(entry.file_name());
        if entry.file_type().expect("file type").is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            std::fs::copy(entry.path(), &target).expect("copy fixture file");
        }
    }
}
