//! Reference tables shared by the parsing, matching and gap engines.
//!
//! Everything here is built once at startup (built-in defaults, optionally overridden by
//! JSON files in the data dir) and is read-only afterwards. `AppState` carries it behind
//! an `Arc`, so concurrent requests share one copy without locking.

pub mod aliases;
pub mod loader;
pub mod metadata;
pub mod resources;
pub mod taxonomy;

use std::path::PathBuf;

use thiserror::Error;

pub use aliases::SkillAliasTable;
pub use loader::load_reference_data;
pub use metadata::{Difficulty, SkillMetadata, SkillMetadataTable};
pub use resources::{LearningResource, ResourceMap};
pub use taxonomy::{CategorizedSkills, SkillTaxonomy};

/// Errors raised while loading reference tables from disk.
/// A file that is absent is not an error (built-ins are used); a file that is present but
/// unreadable or malformed is.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Skill alias group '{canonical}' contains an empty variant")]
    EmptyVariant { canonical: String },
}

/// The full set of static tables consumed by the engines.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub aliases: SkillAliasTable,
    pub metadata: SkillMetadataTable,
    pub taxonomy: SkillTaxonomy,
    pub resources: ResourceMap,
}

impl ReferenceData {
    /// Built-in tables only; no filesystem access.
    pub fn builtin() -> Self {
        Self {
            aliases: SkillAliasTable::builtin(),
            metadata: SkillMetadataTable::builtin(),
            taxonomy: SkillTaxonomy::builtin(),
            resources: ResourceMap::builtin(),
        }
    }
}
