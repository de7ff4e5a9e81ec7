pub mod builder;
pub mod context;
pub mod filename;
pub mod name_cleaner;
pub mod template;
pub mod version;

pub use builder::{PathBuilder, PathGenerationResult};
pub use context::CleanedNames;
pub use version::FormattedVersion;
