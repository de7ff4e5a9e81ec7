//! Caller-owned cache of per-project path builders.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::engine::builder::PathBuilder;

/// Cache of loaded [`PathBuilder`]s keyed by project id.
///
/// The engine itself holds no shared mutable state; this cache is owned by
/// the caller and must be explicitly invalidated whenever a project's
/// configuration document changes — the engine exposes no change
/// notification. Reads are concurrent, writes exclusive.
#[derive(Debug, Default)]
pub struct ProjectCache {
    builders: RwLock<HashMap<String, Arc<PathBuilder>>>,
}

impl ProjectCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached builder for a project, if any.
    pub fn get(&self, project_id: &str) -> Option<Arc<PathBuilder>> {
        self.builders.read().expect("project cache lock poisoned").get(project_id).cloned()
    }

    /// Insert or replace the builder for its project, returning the shared
    /// handle.
    pub fn insert(&self, builder: PathBuilder) -> Arc<PathBuilder> {
        let shared = Arc::new(builder);
        self.builders
            .write()
            .expect("project cache lock poisoned")
            .insert(shared.project_id().to_string(), Arc::clone(&shared));
        shared
    }

    /// Drop the cached builder for a project after its configuration changed.
    /// Returns whether an entry was present.
    pub fn invalidate(&self, project_id: &str) -> bool {
        self.builders.write().expect("project cache lock poisoned").remove(project_id).is_some()
    }

    /// Drop every cached builder.
    pub fn clear(&self) {
        self.builders.write().expect("project cache lock poisoned").clear();
    }

    pub fn len(&self) -> usize {
        self.builders.read().expect("project cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
