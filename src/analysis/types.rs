//! @ai:module:intent Value types produced by the coverage and aggregation engines
//! @ai:module:layer domain
//! @ai:module:public_api CoverageMatrix, GapReport, OverlapMatrix, Distributions, Aggregates, AnalysisBundle
//! @ai:module:stateless true

use crate::catalog::ValidationMethod;
use serde::{Deserialize, Serialize};

/// @ai:intent Which category codes a coverage matrix analyzes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryScope {
    /// Every category any selected benchmark covers.
    #[default]
    Union,
    /// Covered categories that also appear in the critical list.
    CriticalInUnion,
    /// The whole critical list, including entries nobody covers.
    CriticalList,
}

/// @ai:intent Coverage of one category across the selected benchmarks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageRow {
    pub category: String,
    /// One flag per selected benchmark, in the matrix column order.
    pub coverage: Vec<bool>,
    pub total: usize,
    pub critical: bool,
}

impl CoverageRow {
    /// @ai:intent Share of selected benchmarks covering this category
    /// @ai:post returns 0 for an empty selection
    /// @ai:effects pure
    pub fn ratio(&self) -> f64 {
        ratio(self.total, self.coverage.len())
    }
}

/// @ai:intent Category-by-benchmark coverage table, sorted by total descending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageMatrix {
    pub scope: CategoryScope,
    pub benchmarks: Vec<String>,
    pub rows: Vec<CoverageRow>,
}

impl CoverageMatrix {
    /// @ai:intent Rows surfaced for presentation
    /// @ai:effects pure
    pub fn top(&self, limit: usize) -> &[CoverageRow] {
        &self.rows[..self.rows.len().min(limit)]
    }

    pub fn is_truncated(&self, limit: usize) -> bool {
        self.rows.len() > limit
    }

    pub fn row(&self, category: &str) -> Option<&CoverageRow> {
        self.rows.iter().find(|r| r.category == category)
    }
}

/// @ai:intent Critical-list entries covered by the selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalCoverage {
    pub covered: usize,
    pub total: usize,
}

impl CriticalCoverage {
    pub fn percentage(&self) -> f64 {
        ratio(self.covered, self.total) * 100.0
    }
}

/// @ai:intent Gaps between the selection and the reference lists
///
/// `covered_by_all`, `partially_covered` and `covered_by_none` partition the
/// analyzed category set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub covered_by_all: Vec<String>,
    pub partially_covered: Vec<String>,
    pub covered_by_none: Vec<String>,
    pub critical_coverage: CriticalCoverage,
    pub covered_critical: Vec<String>,
    pub missing_critical: Vec<String>,
    pub missing_languages: Vec<String>,
    pub missing_validation_methods: Vec<ValidationMethod>,
}

/// @ai:intent Presentation band for an overlap count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapIntensity {
    Diagonal,
    High,
    Medium,
    Low,
}

impl OverlapIntensity {
    /// @ai:intent Band an off-diagonal overlap count
    /// @ai:effects pure
    pub fn for_count(count: usize) -> Self {
        if count > 20 {
            OverlapIntensity::High
        } else if count > 10 {
            OverlapIntensity::Medium
        } else {
            OverlapIntensity::Low
        }
    }
}

/// @ai:intent Overlap of a row benchmark with one other benchmark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapCell {
    pub with: String,
    pub count: usize,
    /// `None` when the row benchmark declares zero categories.
    pub percentage: Option<f64>,
    pub intensity: OverlapIntensity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapRow {
    pub benchmark: String,
    pub cells: Vec<OverlapCell>,
}

/// @ai:intent Pairwise category overlap of the selected benchmarks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlapMatrix {
    pub benchmarks: Vec<String>,
    pub rows: Vec<OverlapRow>,
}

impl OverlapMatrix {
    /// @ai:intent Cell for the ordered pair (row, column)
    /// @ai:effects pure
    pub fn get(&self, benchmark: &str, with: &str) -> Option<&OverlapCell> {
        self.rows
            .iter()
            .find(|r| r.benchmark == benchmark)
            .and_then(|r| r.cells.iter().find(|c| c.with == with))
    }
}

/// @ai:intent Off-diagonal pair above the redundancy threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificantOverlap {
    pub benchmark: String,
    pub with: String,
    pub count: usize,
    pub percentage: f64,
}

/// @ai:intent Count and sample totals for one value of a categorical field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub value: String,
    pub count: usize,
    pub total_samples: u64,
    /// Share of the selection, 0 for an empty selection.
    pub percentage: f64,
    pub benchmarks: Vec<String>,
    /// Display label for enumerated values such as validation methods.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// @ai:intent Benchmarks split around the mean sample count
///
/// Benchmarks exactly at the mean belong to neither side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplePartition {
    pub mean: f64,
    pub below: Vec<String>,
    pub at_mean: Vec<String>,
    pub above: Vec<String>,
}

/// @ai:intent Grouped summaries over the selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distributions {
    /// Observed methods only, first-encountered order.
    pub validation_methods: Vec<DistributionEntry>,
    /// Every method of the enumeration, zero counts included.
    pub validation_coverage: Vec<DistributionEntry>,
    /// Observed languages only, first-encountered order.
    pub languages: Vec<DistributionEntry>,
    /// Every known language, zero counts included.
    pub language_coverage: Vec<DistributionEntry>,
    pub sample_partition: SamplePartition,
}

/// @ai:intent Scalar totals over the selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub benchmark_count: usize,
    pub total_samples: u64,
    pub unique_categories: usize,
    pub unique_languages: usize,
    pub average_samples: f64,
    pub multi_language_benchmarks: usize,
    pub memory_safety_support: usize,
    pub most_covered_language: Option<String>,
}

/// @ai:intent Whether a benchmark has a capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCell {
    pub benchmark: String,
    pub has_feature: bool,
}

/// @ai:intent Capability flag across the selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub feature: String,
    pub benchmarks: Vec<FeatureCell>,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Critical,
    Warning,
    Info,
    Opportunity,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Critical => "critical",
            InsightKind::Warning => "warning",
            InsightKind::Info => "info",
            InsightKind::Opportunity => "opportunity",
        }
    }
}

/// @ai:intent Research finding derived from gaps and distributions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub affected: Vec<String>,
}

/// @ai:intent Everything a presentation layer consumes for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    pub selected: Vec<String>,
    /// Untruncated; presentation applies `row_limit` through `CoverageMatrix::top`.
    pub coverage_matrix: CoverageMatrix,
    pub row_limit: usize,
    pub overlap_matrix: OverlapMatrix,
    pub significant_overlaps: Vec<SignificantOverlap>,
    pub gap_report: GapReport,
    pub distributions: Distributions,
    pub aggregates: Aggregates,
    pub features: Vec<FeatureRow>,
    pub insights: Vec<Insight>,
}

/// @ai:intent Divide counts, defining an empty denominator as 0
/// @ai:effects pure
pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio(3, 0), 0.0);
        assert!((ratio(1, 4) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overlap_intensity_bands() {
        assert_eq!(OverlapIntensity::for_count(21), OverlapIntensity::High);
        assert_eq!(OverlapIntensity::for_count(20), OverlapIntensity::Medium);
        assert_eq!(OverlapIntensity::for_count(10), OverlapIntensity::Low);
    }

    #[test]
    fn test_matrix_top_truncates() {
        let rows: Vec<_> = (0..25)
            .map(|i| CoverageRow {
                category: format!("CWE-{}", i),
                coverage: vec![true],
                total: 1,
                critical: false,
            })
            .collect();
        let matrix = CoverageMatrix {
            scope: CategoryScope::Union,
            benchmarks: vec!["A".to_string()],
            rows,
        };
        assert_eq!(matrix.top(20).len(), 20);
        assert!(matrix.is_truncated(20));
        assert_eq!(matrix.top(100).len(), 25);
    }

    #[test]
    fn test_critical_coverage_percentage() {
        let cc = CriticalCoverage { covered: 5, total: 25 };
        assert!((cc.percentage() - 20.0).abs() < 0.01);
        assert_eq!(CriticalCoverage::default().percentage(), 0.0);
    }
}
