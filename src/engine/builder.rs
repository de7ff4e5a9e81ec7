//! Path generation orchestration.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::config::{
    ProjectConfig, TEMPLATE_CACHE_FILE, TEMPLATE_MEDIA_FILE, TEMPLATE_RENDER_OUTPUT,
    TEMPLATE_SUBMISSION, TEMPLATE_WORKING_FILE,
};
use crate::domain::error::PathError;
use crate::domain::platform::Platform;
use crate::domain::task::TaskDescriptor;
use crate::engine::version::FormattedVersion;
use crate::engine::{context, filename, name_cleaner, template, version};
use crate::engine::context::CleanedNames;

/// The complete set of computed paths and intermediate values for one
/// task/version/file-type combination. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathGenerationResult {
    pub working_file_path: String,
    pub render_output_path: String,
    pub media_file_path: String,
    pub cache_file_path: String,
    /// Present only when the task carries a client context and the
    /// configuration defines a submission template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_path: Option<String>,
    pub filename: String,
    pub sequence_clean: String,
    pub shot_clean: String,
    pub episode_clean: String,
    pub version_formatted: String,
}

/// Per-project path generation engine.
///
/// Wraps a validated, immutable configuration snapshot. Every generation call
/// is a pure function of its inputs, so one instance may be shared freely
/// across threads; see [`crate::cache::ProjectCache`] for the caller-owned
/// per-project cache.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    config: ProjectConfig,
}

impl PathBuilder {
    /// Wrap a configuration, running pre-flight validation first.
    ///
    /// Fails with [`PathError::ConfigValidation`] listing every problem the
    /// validation report found.
    pub fn new(config: ProjectConfig) -> Result<Self, PathError> {
        let report = config.validate();
        if !report.valid {
            return Err(PathError::ConfigValidation(report.errors));
        }
        Ok(Self { config })
    }

    /// The wrapped configuration snapshot.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Project code this builder generates paths for.
    pub fn project_id(&self) -> &str {
        &self.config.id
    }

    /// Generate every configured path kind for one task/version/file-type.
    ///
    /// Single-pass pipeline: clean names, format the version, build the
    /// variable context, compose the filename, render each template. Any
    /// stage failure aborts the whole call; partial results are never
    /// returned.
    pub fn generate_all_paths(
        &self,
        task: &TaskDescriptor,
        version: &str,
        file_type: &str,
        platform: Platform,
    ) -> Result<PathGenerationResult, PathError> {
        let prepared = self.prepare(task, version, file_type, platform)?;
        let separator = context::separator_for(&self.config, platform)?;

        let working_file_path =
            self.render_path(TEMPLATE_WORKING_FILE, &prepared.variables, separator)?;
        let render_output_path =
            self.render_path(TEMPLATE_RENDER_OUTPUT, &prepared.variables, separator)?;
        let media_file_path =
            self.render_path(TEMPLATE_MEDIA_FILE, &prepared.variables, separator)?;
        let cache_file_path =
            self.render_path(TEMPLATE_CACHE_FILE, &prepared.variables, separator)?;
        let submission_path = match (&task.client, self.config.templates.get(TEMPLATE_SUBMISSION)) {
            (Some(_), Some(_)) => {
                Some(self.render_path(TEMPLATE_SUBMISSION, &prepared.variables, separator)?)
            }
            _ => None,
        };

        Ok(PathGenerationResult {
            working_file_path,
            render_output_path,
            media_file_path,
            cache_file_path,
            submission_path,
            filename: prepared.filename,
            sequence_clean: prepared.cleaned.sequence,
            shot_clean: prepared.cleaned.shot,
            episode_clean: prepared.cleaned.episode,
            version_formatted: prepared.version.padded,
        })
    }

    /// The same pipeline restricted to the working-file template.
    pub fn generate_working_file_path(
        &self,
        task: &TaskDescriptor,
        version: &str,
        file_type: &str,
        platform: Platform,
    ) -> Result<String, PathError> {
        self.generate_one(TEMPLATE_WORKING_FILE, task, version, file_type, platform)
    }

    /// The same pipeline restricted to the render-output template.
    pub fn generate_render_output_path(
        &self,
        task: &TaskDescriptor,
        version: &str,
        file_type: &str,
        platform: Platform,
    ) -> Result<String, PathError> {
        self.generate_one(TEMPLATE_RENDER_OUTPUT, task, version, file_type, platform)
    }

    /// Extension implied by a file type's configured pattern, for callers
    /// that want to verify type/extension consistency.
    pub fn file_type_extension(&self, file_type: &str) -> Result<Option<&str>, PathError> {
        filename::extension(file_type, &self.config.filename_patterns)
    }

    fn generate_one(
        &self,
        template_name: &str,
        task: &TaskDescriptor,
        version: &str,
        file_type: &str,
        platform: Platform,
    ) -> Result<String, PathError> {
        let prepared = self.prepare(task, version, file_type, platform)?;
        let separator = context::separator_for(&self.config, platform)?;
        self.render_path(template_name, &prepared.variables, separator)
    }

    fn prepare(
        &self,
        task: &TaskDescriptor,
        version: &str,
        file_type: &str,
        platform: Platform,
    ) -> Result<Prepared, PathError> {
        if task.project != self.config.id {
            return Err(PathError::ProjectMismatch {
                task: task.project.clone(),
                config: self.config.id.clone(),
            });
        }

        let rules = &self.config.name_cleaning_rules;
        let cleaned = CleanedNames {
            sequence: name_cleaner::clean(&task.sequence, "sequence", rules.sequence.as_ref())?,
            shot: name_cleaner::clean(&task.shot, "shot", rules.shot.as_ref())?,
            episode: name_cleaner::clean(&task.episode, "episode", rules.episode.as_ref())?,
        };
        let version = version::format(version, &self.config.version_settings)?;
        let mut variables = context::build(&self.config, task, &cleaned, &version, platform)?;
        let filename =
            filename::compose(file_type, &variables, &self.config.filename_patterns)?;
        variables.insert("filename".to_string(), filename.clone());

        Ok(Prepared { variables, cleaned, version, filename })
    }

    fn render_path(
        &self,
        template_name: &str,
        variables: &BTreeMap<String, String>,
        separator: char,
    ) -> Result<String, PathError> {
        let text = self.config.templates.get(template_name).ok_or_else(|| {
            PathError::ConfigValidation(vec![format!("missing required template: {template_name}")])
        })?;
        // Template text is normalized here; root and path-segment values were
        // normalized at context build. Identifier values and the filename are
        // never rewritten.
        let normalized = template::normalize_separators(text, separator);
        template::render(&format!("template '{template_name}'"), &normalized, variables)
    }
}

struct Prepared {
    variables: BTreeMap<String, String>,
    cleaned: CleanedNames,
    version: FormattedVersion,
    filename: String,
}
