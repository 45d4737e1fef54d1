//! @ai:module:intent Read-only reference lists used as analysis yardsticks
//! @ai:module:layer domain
//! @ai:module:public_api ReferenceLists, CWE_TOP_25_2023, KNOWN_LANGUAGES
//! @ai:module:stateless true

use crate::catalog::record::ValidationMethod;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// CWE Top 25 (2023), in published rank order.
pub const CWE_TOP_25_2023: [&str; 25] = [
    "CWE-787", "CWE-79", "CWE-89", "CWE-416", "CWE-78", "CWE-20", "CWE-125", "CWE-22",
    "CWE-352", "CWE-434", "CWE-476", "CWE-502", "CWE-190", "CWE-287", "CWE-798", "CWE-862",
    "CWE-77", "CWE-306", "CWE-119", "CWE-276", "CWE-918", "CWE-362", "CWE-400", "CWE-611",
    "CWE-94",
];

/// Programming languages the catalog knows about.
pub const KNOWN_LANGUAGES: [&str; 8] = [
    "Python", "C", "C++", "Java", "JavaScript", "Go", "Rust", "PHP",
];

/// @ai:intent Fixed reference lists shared by every engine
/// @ai:invariant validation_methods is always ValidationMethod::ALL
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceLists {
    pub critical_categories: Vec<String>,
    pub known_languages: Vec<String>,
    #[serde(skip_deserializing, default = "all_methods")]
    pub validation_methods: Vec<ValidationMethod>,
}

fn all_methods() -> Vec<ValidationMethod> {
    ValidationMethod::ALL.to_vec()
}

/// @ai:intent Drop repeated entries, keeping first-seen order
/// @ai:effects pure
fn distinct(values: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .filter(|v| seen.insert(v.as_str()))
        .cloned()
        .collect()
}

impl Default for ReferenceLists {
    fn default() -> Self {
        Self {
            critical_categories: CWE_TOP_25_2023.iter().map(|c| c.to_string()).collect(),
            known_languages: KNOWN_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            validation_methods: all_methods(),
        }
    }
}

impl ReferenceLists {
    /// @ai:intent Check whether a category is in the critical list
    /// @ai:effects pure
    pub fn is_critical(&self, category: &str) -> bool {
        self.critical_categories.iter().any(|c| c == category)
    }

    /// @ai:intent Check whether a language is in the known-language list
    /// @ai:effects pure
    pub fn is_known_language(&self, language: &str) -> bool {
        self.known_languages.iter().any(|l| l == language)
    }

    /// @ai:intent Critical categories as analyzed, repeats removed
    /// @ai:effects pure
    pub fn critical_list(&self) -> Vec<String> {
        distinct(&self.critical_categories)
    }

    /// @ai:intent Known languages as analyzed, repeats removed
    /// @ai:effects pure
    pub fn language_list(&self) -> Vec<String> {
        distinct(&self.known_languages)
    }

    /// @ai:intent Validation method codes forming the grouping domain
    /// @ai:effects pure
    pub fn method_codes(&self) -> Vec<String> {
        self.validation_methods
            .iter()
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists() {
        let lists = ReferenceLists::default();
        assert_eq!(lists.critical_categories.len(), 25);
        assert_eq!(lists.critical_categories[0], "CWE-787");
        assert_eq!(lists.known_languages.len(), 8);
        assert_eq!(lists.validation_methods, ValidationMethod::ALL.to_vec());
    }

    #[test]
    fn test_deserialize_keeps_method_domain() {
        let toml_src = r#"
criticalCategories = ["CWE-79"]
knownLanguages = ["Python"]
"#;
        let lists: ReferenceLists = toml::from_str(toml_src).unwrap();
        assert!(lists.is_critical("CWE-79"));
        assert!(!lists.is_critical("CWE-89"));
        assert_eq!(lists.validation_methods.len(), 4);
    }

    #[test]
    fn test_analyzed_lists_drop_repeats() {
        let lists = ReferenceLists {
            critical_categories: vec!["CWE-79".into(), "CWE-89".into(), "CWE-79".into()],
            known_languages: vec!["Go".into(), "Go".into()],
            ..Default::default()
        };
        assert_eq!(lists.critical_list(), vec!["CWE-79", "CWE-89"]);
        assert_eq!(lists.language_list(), vec!["Go"]);
        assert_eq!(lists.method_codes(), vec!["static", "dynamic", "manual", "hybrid"]);
    }
}
