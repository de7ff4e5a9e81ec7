//! Shared fixtures for unit tests.

use crate::domain::config::ProjectConfig;
use crate::domain::task::TaskDescriptor;

/// Project configuration used throughout the unit tests: a show with drive
/// letters on Windows (forward-slash convention) and mount points on posix.
pub(crate) const SAMPLE_CONFIG_YAML: &str = r#"
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
  macos:
    roots:
      working_files: "/Volumes/projects"
      render_outputs: "/Volumes/renders"
      media_files: "/Volumes/media"
      cache_files: "/Volumes/cache"
      backup_files: "/Volumes/backup"
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
  houdini_scene: "{episode}_{sequence_clean}_{shot_clean}_{task}_master_{version_v}.hip"
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

pub(crate) fn sample_config() -> ProjectConfig {
    ProjectConfig::from_yaml(SAMPLE_CONFIG_YAML).expect("sample config must parse")
}

pub(crate) fn sample_task() -> TaskDescriptor {
    TaskDescriptor::new("SWA", "Ep00", "SWA_Ep00_sq0010", "SWA_Ep00_SH0020", "comp")
}
