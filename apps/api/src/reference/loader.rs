//! Builds `ReferenceData` from an optional data directory.
//!
//! Each table is read from its own JSON file. An absent file (or no data dir at all) falls
//! back to the built-in table; a file that exists but cannot be read or parsed is an error,
//! so a typo in a deployment's data never silently reverts to defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::reference::{
    LearningResource, ReferenceData, ReferenceError, ResourceMap, SkillAliasTable, SkillMetadata,
    SkillMetadataTable, SkillTaxonomy,
};

pub const ALIASES_FILE: &str = "skill_aliases.json";
pub const METADATA_FILE: &str = "skill_metadata.json";
pub const TAXONOMY_FILE: &str = "skills_taxonomy.json";
pub const RESOURCES_FILE: &str = "learning_resources.json";

pub fn load_reference_data(data_dir: Option<&Path>) -> Result<ReferenceData, ReferenceError> {
    let Some(dir) = data_dir else {
        info!("No data dir configured, using built-in reference data");
        return Ok(ReferenceData::builtin());
    };

    let aliases = match read_optional::<BTreeMap<String, Vec<String>>>(Some(dir), ALIASES_FILE)? {
        Some(groups) => SkillAliasTable::from_groups(&groups)?,
        None => SkillAliasTable::builtin(),
    };

    let metadata = read_optional::<BTreeMap<String, SkillMetadata>>(Some(dir), METADATA_FILE)?
        .map(SkillMetadataTable::from_map)
        .unwrap_or_else(SkillMetadataTable::builtin);

    let taxonomy = read_optional::<SkillTaxonomy>(Some(dir), TAXONOMY_FILE)?
        .unwrap_or_else(SkillTaxonomy::builtin);

    let resources =
        read_optional::<BTreeMap<String, Vec<LearningResource>>>(Some(dir), RESOURCES_FILE)?
            .map(ResourceMap::from_map)
            .unwrap_or_else(ResourceMap::builtin);

    info!(
        "Reference data ready: {} alias variants, {} metadata entries, {} resource skills",
        aliases.len(),
        metadata.len(),
        resources.len()
    );
    if aliases.is_empty() {
        warn!("{ALIASES_FILE} defines no aliases; no skills will be extracted");
    }
    if metadata.is_empty() {
        warn!("{METADATA_FILE} is empty; every skill gets default learning metadata");
    }
    if resources.is_empty() {
        warn!("{RESOURCES_FILE} is empty; roadmaps will carry no resources");
    }

    Ok(ReferenceData {
        aliases,
        metadata,
        taxonomy,
        resources,
    })
}

/// Reads `<data_dir>/<file>` as JSON. `Ok(None)` means "use the built-in".
pub(crate) fn read_optional<T: DeserializeOwned>(
    data_dir: Option<&Path>,
    file: &str,
) -> Result<Option<T>, ReferenceError> {
    let Some(dir) = data_dir else {
        return Ok(None);
    };

    let path = dir.join(file);
    if !path.exists() {
        warn!("{} not found, using built-in table", path.display());
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path).map_err(|source| ReferenceError::Io {
        path: path.clone(),
        source,
    })?;
    let parsed = serde_json::from_str(&raw).map_err(|source| ReferenceError::Json {
        path: path.clone(),
        source,
    })?;

    info!("Loaded {}", path.display());
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Difficulty;

    #[test]
    fn test_no_data_dir_uses_builtins() {
        let data = load_reference_data(None).unwrap();
        assert!(!data.aliases.is_empty());
        assert_eq!(data.metadata.len(), 13);
        assert_eq!(data.resources.len(), 3);
    }

    #[test]
    fn test_missing_files_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_reference_data(Some(dir.path())).unwrap();
        assert_eq!(data.taxonomy, SkillTaxonomy::builtin());
    }

    #[test]
    fn test_files_override_builtins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(METADATA_FILE),
            r#"{"Elixir": {"learning_months": 5, "difficulty": "hard", "prerequisites": ["Erlang"]}}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join(ALIASES_FILE),
            r#"{"elixir": ["elixir", "ex"]}"#,
        )
        .unwrap();

        let data = load_reference_data(Some(dir.path())).unwrap();
        let meta = data.metadata.lookup("Elixir");
        assert_eq!(meta.learning_months, 5);
        assert_eq!(meta.difficulty, Difficulty::Hard);
        // Overrides replace the table rather than merging into it.
        assert_eq!(data.metadata.lookup("Kubernetes").learning_months, 2);
        assert!(data.aliases.canonicalize("Wrote Elixir services").contains("elixir"));
        assert!(data.aliases.canonicalize("Python").is_empty());
    }

    #[test]
    fn test_empty_tables_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ALIASES_FILE), "{}").unwrap();
        std::fs::write(dir.path().join(RESOURCES_FILE), "{}").unwrap();

        let data = load_reference_data(Some(dir.path())).unwrap();
        assert!(data.aliases.is_empty());
        assert!(data.resources.is_empty());
        assert!(!data.metadata.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TAXONOMY_FILE), "{ not json").unwrap();
        let err = load_reference_data(Some(dir.path())).unwrap_err();
        assert!(matches!(err, ReferenceError::Json { .. }));
    }

    #[test]
    fn test_blank_alias_variant_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(ALIASES_FILE), r#"{"go": ["golang", ""]}"#).unwrap();
        let err = load_reference_data(Some(dir.path())).unwrap_err();
        assert!(matches!(err, ReferenceError::EmptyVariant { .. }));
    }
}
