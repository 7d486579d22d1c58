//! Named learning resources per skill, attached to roadmap phases.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

impl LearningResource {
    fn new(name: &str, kind: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResourceMap {
    by_skill: HashMap<String, Vec<LearningResource>>,
}

impl ResourceMap {
    pub fn builtin() -> Self {
        let mut map = BTreeMap::new();
        map.insert(
            "Python".to_string(),
            vec![
                LearningResource::new(
                    "freeCodeCamp Python Course",
                    "video",
                    "https://www.youtube.com/freecodecamp",
                ),
                LearningResource::new(
                    "Automate the Boring Stuff",
                    "book",
                    "https://automatetheboringstuff.com/",
                ),
            ],
        );
        map.insert(
            "React".to_string(),
            vec![
                LearningResource::new("React Official Docs", "docs", "https://react.dev"),
                LearningResource::new(
                    "freeCodeCamp React Course",
                    "video",
                    "https://www.youtube.com/freecodecamp",
                ),
            ],
        );
        map.insert(
            "Docker".to_string(),
            vec![
                LearningResource::new(
                    "Docker Getting Started",
                    "docs",
                    "https://docs.docker.com/get-started/",
                ),
                LearningResource::new("Docker Mastery Course", "course", "https://www.udemy.com/"),
            ],
        );
        Self::from_map(map)
    }

    pub fn from_map(map: BTreeMap<String, Vec<LearningResource>>) -> Self {
        Self {
            by_skill: map
                .into_iter()
                .map(|(skill, resources)| (skill.trim().to_lowercase(), resources))
                .collect(),
        }
    }

    /// The preferred (first-listed) resource for `skill`, if any.
    pub fn first_for(&self, skill: &str) -> Option<&LearningResource> {
        self.by_skill
            .get(skill.trim().to_lowercase().as_str())
            .and_then(|resources| resources.first())
    }

    pub fn len(&self) -> usize {
        self.by_skill.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_skill.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_for_known_skill() {
        let map = ResourceMap::builtin();
        let res = map.first_for("docker").unwrap();
        assert_eq!(res.name, "Docker Getting Started");
        assert_eq!(res.kind, "docs");
    }

    #[test]
    fn test_first_for_unknown_skill() {
        assert!(ResourceMap::builtin().first_for("Kubernetes").is_none());
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let res = LearningResource::new("Rust Book", "book", "https://doc.rust-lang.org/book/");
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["type"], "book");
    }
}
