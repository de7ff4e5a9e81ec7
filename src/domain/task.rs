use serde::{Deserialize, Serialize};

/// Identifying metadata for one task, as maintained by the surrounding CRUD
/// layer.
///
/// All fields are opaque strings except `project`, which must match the id of
/// the loaded project configuration. `sequence`, `shot` and `episode` may
/// carry studio prefixes; the engine cleans them through the configured name
/// rules before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    pub project: String,
    pub episode: String,
    pub sequence: String,
    pub shot: String,
    /// Task/artifact-category name (e.g. "comp", "lighting").
    pub task: String,
    /// Delivery client context; a submission path is produced only when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

impl TaskDescriptor {
    pub fn new(
        project: impl Into<String>,
        episode: impl Into<String>,
        sequence: impl Into<String>,
        shot: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            episode: episode.into(),
            sequence: sequence.into(),
            shot: shot.into(),
            task: task.into(),
            client: None,
        }
    }

    /// Attach a delivery client context, enabling the submission path.
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }
}
