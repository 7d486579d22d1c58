//! Skill alias resolution: maps every spelling of a skill to one canonical name.
//!
//! Matching is case-insensitive and whole-word: a variant only counts when the characters
//! on either side of it are not word characters. That is the usual `\b` rule for variants
//! that start and end with letters, and it also lets `c++` or `c#` match before a space.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::reference::ReferenceError;

/// Built-in alias groups, canonical name first.
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    // Programming languages
    ("python", &["python", "python3", "py"]),
    ("java", &["java"]),
    ("javascript", &["javascript", "js", "ecmascript"]),
    ("typescript", &["typescript", "ts"]),
    ("c++", &["c++", "cpp", "cplusplus"]),
    ("c#", &["c#", "csharp", "c sharp"]),
    ("go", &["golang", "go"]),
    ("rust", &["rust"]),
    ("ruby", &["ruby"]),
    ("php", &["php"]),
    ("swift", &["swift"]),
    ("kotlin", &["kotlin"]),
    // Frontend
    ("react", &["react", "reactjs", "react.js"]),
    ("angular", &["angular", "angularjs"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("next.js", &["next", "nextjs", "next.js"]),
    ("svelte", &["svelte"]),
    ("html", &["html", "html5"]),
    ("css", &["css", "css3"]),
    ("tailwind", &["tailwind", "tailwindcss"]),
    ("bootstrap", &["bootstrap"]),
    ("material-ui", &["material-ui", "mui", "material ui"]),
    // Backend
    ("node.js", &["node", "nodejs", "node.js"]),
    ("django", &["django"]),
    ("fastapi", &["fastapi", "fast api"]),
    ("flask", &["flask"]),
    ("spring", &["spring", "spring boot", "springboot"]),
    ("express", &["express", "expressjs", "express.js"]),
    ("laravel", &["laravel"]),
    ("asp.net", &["asp.net", "aspnet", "asp net"]),
    // Databases
    ("sql", &["sql"]),
    ("postgresql", &["postgresql", "postgres", "psql"]),
    ("mysql", &["mysql"]),
    ("mongodb", &["mongodb", "mongo"]),
    ("redis", &["redis"]),
    ("cassandra", &["cassandra"]),
    ("dynamodb", &["dynamodb"]),
    ("elasticsearch", &["elasticsearch", "elastic"]),
    ("oracle", &["oracle"]),
    ("sqlite", &["sqlite"]),
    // DevOps & cloud
    ("docker", &["docker"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("aws", &["aws", "amazon web services"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud", "google cloud platform"]),
    ("jenkins", &["jenkins"]),
    ("gitlab ci", &["gitlab ci", "gitlab"]),
    ("github actions", &["github actions"]),
    ("terraform", &["terraform"]),
    ("ansible", &["ansible"]),
    ("git", &["git"]),
    ("linux", &["linux", "unix"]),
    ("nginx", &["nginx"]),
    ("apache", &["apache"]),
    // ML & data
    ("machine learning", &["machine learning", "ml", "machine-learning"]),
    ("deep learning", &["deep learning", "dl"]),
    ("tensorflow", &["tensorflow", "tf"]),
    ("pytorch", &["pytorch", "torch"]),
    ("pandas", &["pandas"]),
    ("numpy", &["numpy"]),
    ("scikit-learn", &["scikit-learn", "sklearn", "scikit learn"]),
    ("keras", &["keras"]),
    ("data analysis", &["data analysis"]),
    ("tableau", &["tableau"]),
    ("power bi", &["power bi", "powerbi"]),
    // APIs & protocols
    ("rest", &["rest", "restful", "rest api"]),
    ("graphql", &["graphql", "graph ql"]),
    ("grpc", &["grpc"]),
    ("websocket", &["websocket", "websockets"]),
    // Tools
    ("jira", &["jira"]),
    ("postman", &["postman"]),
    ("vs code", &["vs code", "vscode", "visual studio code"]),
    ("intellij", &["intellij"]),
];

/// Lower-cased variant → canonical skill name.
#[derive(Debug, Clone, Default)]
pub struct SkillAliasTable {
    index: HashMap<String, String>,
}

impl SkillAliasTable {
    pub fn builtin() -> Self {
        Self::build(
            BUILTIN_ALIASES
                .iter()
                .map(|(canonical, variants)| (*canonical, variants.iter().copied())),
        )
    }

    /// Builds a table from externally supplied groups, rejecting blank variants.
    pub fn from_groups(groups: &BTreeMap<String, Vec<String>>) -> Result<Self, ReferenceError> {
        for (canonical, variants) in groups {
            if canonical.trim().is_empty() || variants.iter().any(|v| v.trim().is_empty()) {
                return Err(ReferenceError::EmptyVariant {
                    canonical: canonical.clone(),
                });
            }
        }
        Ok(Self::build(groups.iter().map(|(canonical, variants)| {
            (canonical.as_str(), variants.iter().map(String::as_str))
        })))
    }

    fn build<'a, G, V>(groups: G) -> Self
    where
        G: IntoIterator<Item = (&'a str, V)>,
        V: IntoIterator<Item = &'a str>,
    {
        let mut index = HashMap::new();
        for (canonical, variants) in groups {
            // A canonical name always resolves to itself.
            index.insert(canonical.trim().to_lowercase(), canonical.to_string());
            for variant in variants {
                index.insert(variant.trim().to_lowercase(), canonical.to_string());
            }
        }
        Self { index }
    }

    /// Returns the canonical names of every skill mentioned in `text`, sorted.
    pub fn canonicalize(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        if text.trim().is_empty() {
            return found;
        }

        let lowered = text.to_lowercase();
        for (variant, canonical) in &self.index {
            if !found.contains(canonical) && contains_whole_word(&lowered, variant) {
                found.insert(canonical.clone());
            }
        }
        found
    }

    /// Number of indexed variants.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// True when `needle` occurs in `haystack` with no word character directly before or after.
/// Both arguments are expected to be lower-cased already.
pub(crate) fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitively() {
        let table = SkillAliasTable::builtin();
        let skills = table.canonicalize("I used React daily");
        assert!(skills.contains("react"));
    }

    #[test]
    fn test_does_not_match_inside_longer_word() {
        let table = SkillAliasTable::builtin();
        let skills = table.canonicalize("Built a Reactive pipeline");
        assert!(!skills.contains("react"));
    }

    #[test]
    fn test_variants_collapse_to_one_canonical() {
        let table = SkillAliasTable::builtin();
        let skills = table.canonicalize("ReactJS, React.js and plain React");
        assert_eq!(skills.iter().filter(|s| *s == "react").count(), 1);
    }

    #[test]
    fn test_multi_word_variant() {
        let table = SkillAliasTable::builtin();
        let skills = table.canonicalize("Deployed on Amazon Web Services with K8s");
        assert!(skills.contains("aws"));
        assert!(skills.contains("kubernetes"));
    }

    #[test]
    fn test_symbol_suffixed_variants_match() {
        let table = SkillAliasTable::builtin();
        let skills = table.canonicalize("Languages: C++, C# and Python3");
        assert!(skills.contains("c++"));
        assert!(skills.contains("c#"));
        assert!(skills.contains("python"));
    }

    #[test]
    fn test_blank_text_yields_empty_set() {
        let table = SkillAliasTable::builtin();
        assert!(table.canonicalize("").is_empty());
        assert!(table.canonicalize("   \n\t ").is_empty());
    }

    #[test]
    fn test_output_is_sorted() {
        let table = SkillAliasTable::builtin();
        let skills: Vec<_> = table
            .canonicalize("Terraform, Docker, AWS, Python")
            .into_iter()
            .collect();
        let mut sorted = skills.clone();
        sorted.sort();
        assert_eq!(skills, sorted);
    }

    #[test]
    fn test_canonical_resolves_to_itself() {
        let mut groups = BTreeMap::new();
        groups.insert("Elixir".to_string(), vec!["ex".to_string()]);
        let table = SkillAliasTable::from_groups(&groups).unwrap();
        assert!(table.canonicalize("Wrote elixir services").contains("Elixir"));
        assert!(table.canonicalize("Shipped EX code").contains("Elixir"));
    }

    #[test]
    fn test_blank_variant_is_rejected() {
        let mut groups = BTreeMap::new();
        groups.insert("Elixir".to_string(), vec!["  ".to_string()]);
        assert!(matches!(
            SkillAliasTable::from_groups(&groups),
            Err(ReferenceError::EmptyVariant { .. })
        ));
    }

    #[test]
    fn test_contains_whole_word_boundaries() {
        assert!(contains_whole_word("node.js and docker", "node"));
        assert!(contains_whole_word("docker", "docker"));
        assert!(!contains_whole_word("dockerfile", "docker"));
        assert!(!contains_whole_word("my_docker", "docker"));
        assert!(!contains_whole_word("anything", ""));
    }
}
