//! @ai:module:intent Benchmark record definitions for the catalog
//! @ai:module:layer domain
//! @ai:module:public_api BenchmarkRecord, ValidationMethod
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// @ai:intent Technique a benchmark uses to confirm a vulnerability is real
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMethod {
    Static,
    Dynamic,
    Manual,
    Hybrid,
}

impl ValidationMethod {
    /// The complete enumeration domain, in reference order.
    pub const ALL: [ValidationMethod; 4] = [
        ValidationMethod::Static,
        ValidationMethod::Dynamic,
        ValidationMethod::Manual,
        ValidationMethod::Hybrid,
    ];

    /// @ai:intent Convert method to its stable string code
    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMethod::Static => "static",
            ValidationMethod::Dynamic => "dynamic",
            ValidationMethod::Manual => "manual",
            ValidationMethod::Hybrid => "hybrid",
        }
    }

    /// @ai:intent Human readable name of the method
    /// @ai:effects pure
    pub fn label(&self) -> &'static str {
        match self {
            ValidationMethod::Static => "Static Analysis",
            ValidationMethod::Dynamic => "Dynamic Analysis",
            ValidationMethod::Manual => "Manual Review",
            ValidationMethod::Hybrid => "Hybrid Approach",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ValidationMethod::Static => "Code analysis without execution",
            ValidationMethod::Dynamic => "Runtime testing and execution",
            ValidationMethod::Manual => "Human expert validation",
            ValidationMethod::Hybrid => "Combination of methods",
        }
    }
}

impl std::fmt::Display for ValidationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent One evaluated security benchmark
///
/// `categories` keeps the authored order and may contain duplicates. Set
/// operations go through [`BenchmarkRecord::category_set`]; `category_count`
/// is the declared total and is only used for display and the overlap
/// diagonal.
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    pub id: String,
    pub name: String,
    pub year: u32,
    pub sample_count: u64,
    pub category_count: u32,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub validation_method: ValidationMethod,
    #[serde(default)]
    pub authors: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_contribution: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub limitations: Vec<String>,
    #[serde(default)]
    pub dataset_source: String,
    #[serde(default)]
    pub has_test_suite: bool,
    #[serde(default)]
    pub has_secure_examples: bool,
    #[serde(default)]
    pub automated_evaluation: bool,
}

impl BenchmarkRecord {
    /// @ai:intent Distinct category codes of this benchmark
    /// @ai:effects pure
    pub fn category_set(&self) -> HashSet<&str> {
        self.categories.iter().map(String::as_str).collect()
    }

    /// @ai:intent Check whether the benchmark supports a language
    /// @ai:effects pure
    pub fn supports(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// @ai:intent Number of distinct languages the benchmark supports
    /// @ai:effects pure
    pub fn language_count(&self) -> usize {
        self.languages.iter().collect::<HashSet<_>>().len()
    }
}
