//! Typed project configuration and pre-flight validation.
//!
//! The configuration is a per-project document owned by the external config
//! store; the engine only ever reads an immutable snapshot. Missing required
//! sections are rejected by [`ProjectConfig::validate`] before any path is
//! generated, never discovered mid-render.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::PathError;
use crate::domain::platform::Platform;
use crate::engine::template;

/// Template name for the working-file path.
pub const TEMPLATE_WORKING_FILE: &str = "working_file";
/// Template name for the render-output path.
pub const TEMPLATE_RENDER_OUTPUT: &str = "render_output";
/// Template name for the media-file path.
pub const TEMPLATE_MEDIA_FILE: &str = "media_file";
/// Template name for the cache-file path.
pub const TEMPLATE_CACHE_FILE: &str = "cache_file";
/// Template name for the client submission path (optional in configuration).
pub const TEMPLATE_SUBMISSION: &str = "submission";

/// Templates every project configuration must define.
pub const REQUIRED_TEMPLATES: [&str; 4] =
    [TEMPLATE_WORKING_FILE, TEMPLATE_RENDER_OUTPUT, TEMPLATE_MEDIA_FILE, TEMPLATE_CACHE_FILE];

/// Variable names the engine itself contributes to every render, independent
/// of configured roots and path segments.
const BUILTIN_VARIABLES: [&str; 12] = [
    "project",
    "episode",
    "sequence",
    "shot",
    "task",
    "client",
    "sequence_clean",
    "shot_clean",
    "episode_clean",
    "version",
    "version_v",
    "filename",
];

/// Immutable per-project configuration snapshot driving all path generation.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Unique project code (e.g. "SWA").
    pub id: String,
    /// Per-platform translation of logical storage roles to concrete roots.
    #[serde(default)]
    pub root_mapping: BTreeMap<String, PlatformRoots>,
    /// Named reusable path fragments (e.g. `middle_path`, `version_dir`).
    #[serde(default)]
    pub path_segments: BTreeMap<String, String>,
    /// Path templates keyed by template name.
    #[serde(default)]
    pub templates: BTreeMap<String, String>,
    /// Filename patterns keyed by file/artifact type.
    #[serde(default)]
    pub filename_patterns: BTreeMap<String, String>,
    /// Prefix-stripping rules for sequence, shot and episode identifiers.
    #[serde(default)]
    pub name_cleaning_rules: NameCleaningRules,
    /// Version padding width and default version.
    #[serde(default)]
    pub version_settings: VersionSettings,
}

/// Root-mapping table for one platform.
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformRoots {
    /// Directory separator override for this platform. Defaults to the
    /// platform convention when absent.
    #[serde(default)]
    pub separator: Option<char>,
    /// Logical root name (e.g. "working_files") to concrete root string
    /// (drive letter or mount point).
    #[serde(default)]
    pub roots: BTreeMap<String, String>,
}

/// Name-cleaning rules per identifier field. A missing rule means the raw
/// value passes through unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameCleaningRules {
    #[serde(default)]
    pub sequence: Option<NameRule>,
    #[serde(default)]
    pub shot: Option<NameRule>,
    #[serde(default)]
    pub episode: Option<NameRule>,
}

impl NameCleaningRules {
    /// Rules paired with the field name they apply to.
    pub fn iter(&self) -> [(&'static str, Option<&NameRule>); 3] {
        [
            ("sequence", self.sequence.as_ref()),
            ("shot", self.shot.as_ref()),
            ("episode", self.episode.as_ref()),
        ]
    }
}

/// A match pattern and a replacement expression with a single capture group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameRule {
    pub pattern: String,
    pub replacement: String,
}

/// Version padding width and default version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionSettings {
    /// Zero-padding width in digits.
    #[serde(default = "default_padding")]
    pub padding: usize,
    /// Version used when the caller supplies an empty version value.
    #[serde(default = "default_version")]
    pub default_version: u64,
}

impl Default for VersionSettings {
    fn default() -> Self {
        Self { padding: default_padding(), default_version: default_version() }
    }
}

fn default_padding() -> usize {
    3
}

fn default_version() -> u64 {
    1
}

/// Outcome of pre-flight configuration validation.
///
/// Collects every problem at once so authoring tools can report them all
/// before a document is allowed to save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { valid: errors.is_empty(), errors }
    }
}

impl ProjectConfig {
    /// Load a project configuration document from a YAML file.
    pub fn load(path: &Path) -> Result<Self, PathError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a project configuration document from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, PathError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Validate the whole configuration, collecting every problem rather than
    /// stopping at the first.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push("missing required field: id".to_string());
        }

        if self.root_mapping.is_empty() {
            errors.push("missing required section: root_mapping".to_string());
        }
        for (platform_key, table) in &self.root_mapping {
            if Platform::from_str(platform_key).is_err() {
                errors.push(format!(
                    "root_mapping: unknown platform '{}' (expected one of: windows, linux, macos)",
                    platform_key
                ));
            }
            if table.roots.is_empty() {
                errors.push(format!("root_mapping.{}: no roots defined", platform_key));
            }
        }

        if self.templates.is_empty() {
            errors.push("missing required section: templates".to_string());
        } else {
            for name in REQUIRED_TEMPLATES {
                if !self.templates.contains_key(name) {
                    errors.push(format!("missing required template: {}", name));
                }
            }
        }

        if self.filename_patterns.is_empty() {
            errors.push("missing required section: filename_patterns".to_string());
        }

        if self.version_settings.padding == 0 {
            errors.push("version_settings.padding must be at least 1".to_string());
        }

        for (field, rule) in self.name_cleaning_rules.iter() {
            if let Some(rule) = rule
                && let Err(reason) = rule.check()
            {
                errors.push(format!("name_cleaning_rules.{}: {}", field, reason));
            }
        }

        // Placeholder resolvability can only be judged against a known root
        // set; with no root mapping at all the missing section is the report.
        if self.root_mapping.is_empty() {
            return ValidationReport::from_errors(errors);
        }

        let known = self.known_variables();
        for (name, text) in &self.templates {
            for variable in template::placeholders(text) {
                if !known.contains(variable) {
                    errors.push(format!(
                        "template '{}' references unresolvable variable '{{{}}}'",
                        name, variable
                    ));
                }
            }
        }
        for (file_type, pattern) in &self.filename_patterns {
            for variable in template::placeholders(pattern) {
                if variable == "filename" {
                    errors.push(format!(
                        "filename pattern '{}' must not reference '{{filename}}'",
                        file_type
                    ));
                } else if !known.contains(variable) {
                    errors.push(format!(
                        "filename pattern '{}' references unresolvable variable '{{{}}}'",
                        file_type, variable
                    ));
                }
            }
        }

        ValidationReport::from_errors(errors)
    }

    /// Every variable name resolvable from this configuration plus the
    /// engine-built task, cleaning and version tokens.
    fn known_variables(&self) -> BTreeSet<&str> {
        let mut known: BTreeSet<&str> = BUILTIN_VARIABLES.into_iter().collect();
        for table in self.root_mapping.values() {
            known.extend(table.roots.keys().map(String::as_str));
        }
        known.extend(self.path_segments.keys().map(String::as_str));
        known
    }
}

impl NameRule {
    /// Compile the pattern, checking every replacement reference against the
    /// capture groups it defines.
    pub(crate) fn compile(&self) -> Result<regex::Regex, String> {
        let regex = regex::Regex::new(&self.pattern)
            .map_err(|err| format!("invalid pattern '{}': {}", self.pattern, err))?;
        let defined = regex.captures_len() - 1;
        for reference in group_references(&self.replacement) {
            match reference {
                GroupRef::Index(index) => {
                    if index > defined {
                        return Err(format!(
                            "replacement '{}' references capture group {} but pattern '{}' defines {}",
                            self.replacement, index, self.pattern, defined
                        ));
                    }
                }
                GroupRef::Name(name) => {
                    if !regex.capture_names().flatten().any(|group| group == name) {
                        return Err(format!(
                            "replacement '{}' references capture group '{}' which pattern '{}' does not define",
                            self.replacement, name, self.pattern
                        ));
                    }
                }
            }
        }
        Ok(regex)
    }

    /// Check that the pattern compiles and the replacement references only
    /// capture groups the pattern defines.
    pub fn check(&self) -> Result<(), String> {
        self.compile().map(|_| ())
    }
}

/// A capture-group reference found in a replacement expression.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum GroupRef {
    Index(usize),
    Name(String),
}

/// Capture-group references in a replacement expression, parsed the way
/// `regex::Captures::expand` parses them: `$$` escapes a literal dollar sign,
/// a braced `${ref}` takes everything up to the closing brace, and a bare
/// `$ref` takes the longest run of word characters (so `$1a` is the *name*
/// `1a`, not group 1). An all-digit reference is a group index; anything else
/// is a group name.
pub(crate) fn group_references(replacement: &str) -> Vec<GroupRef> {
    let mut references = Vec::new();
    let bytes = replacement.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }
        if bytes.get(i + 1) == Some(&b'$') {
            i += 2;
            continue;
        }
        let rest = &replacement[i + 1..];
        let (candidate, consumed) = if let Some(braced) = rest.strip_prefix('{') {
            match braced.find('}') {
                // Unclosed or empty braces are literal text to `expand`.
                Some(end) if end > 0 => (&braced[..end], end + 2),
                _ => {
                    i += 1;
                    continue;
                }
            }
        } else {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            (&rest[..end], end)
        };
        let is_word = |b: u8| b.is_ascii_alphanumeric() || b == b'_';
        if candidate.is_empty() || !candidate.bytes().all(is_word) {
            i += 1;
            continue;
        }
        let all_digits = candidate.bytes().all(|b| b.is_ascii_digit());
        references.push(match candidate.parse::<usize>() {
            Ok(index) if all_digits => GroupRef::Index(index),
            _ => GroupRef::Name(candidate.to_string()),
        });
        i += 1 + consumed;
    }
    references
}
