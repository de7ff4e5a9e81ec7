//! Shared testing utilities for shotpath integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Project configuration fixture used across the integration tests: drive
/// letters with a forward-slash convention on Windows, mount points on posix.
#[allow(dead_code)]
pub const CONFIG_YAML: &str = r#"
id: SWA
root_mapping:
  windows:
    separator: "/"
    roots:
      working_files: "V:"
      render_outputs: "W:"
      media_files: "J:"
      cache_files: "T:"
      backup_files: "U:"
  linux:
    roots:
      working_files: "/mnt/projects"
      render_outputs: "/mnt/renders"
      media_files: "/mnt/media"
      cache_files: "/mnt/cache"
      backup_files: "/mnt/backup"
path_segments:
  middle_path: all/scene
  version_dir: version
templates:
  working_file: "{working_files}/{project}/{middle_path}/{episode}/{sequence_clean}/{shot_clean}/{task}/{version_dir}/{filename}"
  render_output: "{render_outputs}/{project}/{middle_path}/{episode}/{sequence_clean}/{shot_clean}/{task}/{version_dir}/{version_v}/"
  media_file: "{media_files}/{project}/{middle_path}/{episode}/{sequence_clean}/{shot_clean}/{task}/{version_dir}/{version_v}/"
  cache_file: "{cache_files}/{project}/{middle_path}/{episode}/{sequence_clean}/{shot_clean}/{task}/{version_dir}/{version_v}/"
  submission: "{working_files}/{project}/deliveries/{client}/{episode}/{shot_clean}/{version_v}/"
filename_patterns:
  maya_scene: "{episode}_{sequence_clean}_{shot_clean}_{task}_master_{version_v}.ma"
  nuke_script: "{episode}_{sequence_clean}_{shot_clean}_{task}_comp_{version_v}.nk"
name_cleaning_rules:
  sequence:
    pattern: '^[A-Za-z0-9]+_[A-Za-z0-9]+_(sq\d+)$'
    replacement: "$1"
  shot:
    pattern: '^[A-Za-z0-9]+_[A-Za-z0-9]+_(SH\d+)$'
    replacement: "$1"
  episode:
    pattern: '^[A-Za-z0-9]+_(Ep\d+)$'
    replacement: "$1"
version_settings:
  padding: 3
  default_version: 1
"#;

/// Isolated environment holding a configuration document on disk.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    config_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with the standard fixture config.
    pub fn new() -> Self {
        Self::with_config(CONFIG_YAML)
    }

    /// Create a new isolated environment with a custom config document.
    pub fn with_config(yaml: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let config_path = root.path().join("project.yml");
        fs::write(&config_path, yaml).expect("Failed to write fixture config");
        Self { root, config_path }
    }

    /// Path to the configuration document.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Build a command for invoking the compiled `shotpath` binary.
    pub fn cli(&self) -> Command {
        Command::cargo_bin("shotpath").expect("Failed to locate shotpath binary")
    }

    /// A `resolve` invocation pre-filled with the standard fixture task.
    pub fn resolve_cmd(&self, version: &str, file_type: &str, platform: &str) -> Command {
        let mut cmd = self.cli();
        cmd.args([
            "resolve",
            "--config",
            &self.config_path.to_string_lossy(),
            "--episode",
            "Ep00",
            "--sequence",
            "SWA_Ep00_sq0010",
            "--shot",
            "SWA_Ep00_SH0020",
            "--task",
            "comp",
            "--version",
            version,
            "--file-type",
            file_type,
            "--platform",
            platform,
        ]);
        cmd
    }
}
