//! @ai:module:intent Data-quality diagnostics for catalog authoring defects
//! @ai:module:layer domain
//! @ai:module:public_api SchemaChecker, SchemaIssue, SchemaIssueKind
//! @ai:module:stateless true

use crate::catalog::record::BenchmarkRecord;
use crate::catalog::reference::ReferenceLists;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// @ai:intent Kind of authoring defect found in a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaIssueKind {
    DuplicateId,
    DuplicateName,
    CategoryCountMismatch { declared: u32, distinct: usize },
    DuplicateCategory { category: String },
    MalformedCategory { category: String },
    EmptyCategories,
    EmptyLanguages,
    UnknownLanguage { language: String },
    DuplicateReferenceEntry { list: String, entry: String },
}

/// Issue owner for defects in the reference lists rather than a record.
pub const REFERENCE_OWNER: &str = "reference";

/// @ai:intent One diagnostic tied to the record that triggered it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaIssue {
    pub benchmark_id: String,
    #[serde(flatten)]
    pub kind: SchemaIssueKind,
}

impl std::fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SchemaIssueKind::DuplicateId => write!(f, "{}: duplicate id", self.benchmark_id),
            SchemaIssueKind::DuplicateName => {
                write!(f, "{}: duplicate name", self.benchmark_id)
            }
            SchemaIssueKind::CategoryCountMismatch { declared, distinct } => write!(
                f,
                "{}: declares {} categories but lists {} distinct",
                self.benchmark_id, declared, distinct
            ),
            SchemaIssueKind::DuplicateCategory { category } => {
                write!(f, "{}: category {} listed more than once", self.benchmark_id, category)
            }
            SchemaIssueKind::MalformedCategory { category } => {
                write!(f, "{}: malformed category code '{}'", self.benchmark_id, category)
            }
            SchemaIssueKind::EmptyCategories => {
                write!(f, "{}: no categories listed", self.benchmark_id)
            }
            SchemaIssueKind::EmptyLanguages => {
                write!(f, "{}: no languages listed", self.benchmark_id)
            }
            SchemaIssueKind::UnknownLanguage { language } => {
                write!(f, "{}: unknown language '{}'", self.benchmark_id, language)
            }
            SchemaIssueKind::DuplicateReferenceEntry { list, entry } => {
                write!(f, "{}: {} lists {} more than once", self.benchmark_id, list, entry)
            }
        }
    }
}

/// @ai:intent Detects authoring defects without rejecting the catalog
pub struct SchemaChecker {
    category_regex: Regex,
}

impl SchemaChecker {
    /// @ai:intent Create a new schema checker
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            category_regex: Regex::new(r"^CWE-\d+$").expect("Invalid regex"),
        }
    }

    /// @ai:intent Collect every defect across the records, in catalog order
    /// @ai:effects pure
    pub fn check(&self, records: &[BenchmarkRecord], reference: &ReferenceLists) -> Vec<SchemaIssue> {
        let mut issues = Vec::new();
        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();

        for record in records {
            let mut push = |kind| {
                issues.push(SchemaIssue {
                    benchmark_id: record.id.clone(),
                    kind,
                })
            };

            if !seen_ids.insert(record.id.as_str()) {
                push(SchemaIssueKind::DuplicateId);
            }
            if !seen_names.insert(record.name.as_str()) {
                push(SchemaIssueKind::DuplicateName);
            }

            if record.categories.is_empty() {
                push(SchemaIssueKind::EmptyCategories);
            }
            if record.languages.is_empty() {
                push(SchemaIssueKind::EmptyLanguages);
            }

            let mut seen_categories = HashSet::new();
            for category in &record.categories {
                if !self.category_regex.is_match(category) {
                    push(SchemaIssueKind::MalformedCategory {
                        category: category.clone(),
                    });
                }
                if !seen_categories.insert(category.as_str()) {
                    push(SchemaIssueKind::DuplicateCategory {
                        category: category.clone(),
                    });
                }
            }

            let distinct = seen_categories.len();
            if record.category_count as usize != distinct {
                push(SchemaIssueKind::CategoryCountMismatch {
                    declared: record.category_count,
                    distinct,
                });
            }

            for language in &record.languages {
                if !reference.is_known_language(language) {
                    push(SchemaIssueKind::UnknownLanguage {
                        language: language.clone(),
                    });
                }
            }
        }

        issues.extend(Self::reference_duplicates("criticalCategories", &reference.critical_categories));
        issues.extend(Self::reference_duplicates("knownLanguages", &reference.known_languages));

        issues
    }

    /// @ai:intent Report repeated entries of one reference list
    /// @ai:effects pure
    fn reference_duplicates(list: &str, entries: &[String]) -> Vec<SchemaIssue> {
        let mut seen = HashSet::new();
        entries
            .iter()
            .filter(|e| !seen.insert(e.as_str()))
            .map(|e| SchemaIssue {
                benchmark_id: REFERENCE_OWNER.to_string(),
                kind: SchemaIssueKind::DuplicateReferenceEntry {
                    list: list.to_string(),
                    entry: e.clone(),
                },
            })
            .collect()
    }
}

impl Default for SchemaChecker {
    fn default() -> Self {
        Self::new()
    }
}
