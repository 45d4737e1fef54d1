//! @ai:module:intent Set algebra over benchmark category coverage
//! @ai:module:layer domain
//! @ai:module:public_api category_union, coverage_matrix, critical_coverage, gap_report, overlap_matrix, significant_overlaps
//! @ai:module:stateless true

use crate::analysis::aggregation::{missing_languages, missing_validation_methods};
use crate::analysis::types::{
    CategoryScope, CoverageMatrix, CoverageRow, CriticalCoverage, GapReport, OverlapCell,
    OverlapIntensity, OverlapMatrix, OverlapRow, SignificantOverlap,
};
use crate::catalog::{BenchmarkRecord, ReferenceLists};
use crate::selection::Selection;
use std::collections::HashSet;

/// @ai:intent Distinct values across records, in first-encountered order
/// @ai:effects pure
pub(crate) fn ordered_union<'r, I, F>(records: I, values: F) -> Vec<String>
where
    I: IntoIterator<Item = &'r BenchmarkRecord>,
    F: Fn(&'r BenchmarkRecord) -> &'r [String],
{
    let mut seen = HashSet::new();
    let mut union = Vec::new();

    for record in records {
        for value in values(record) {
            if seen.insert(value.as_str()) {
                union.push(value.clone());
            }
        }
    }

    union
}

/// @ai:intent Union of every selected benchmark's categories
/// @ai:effects pure
pub fn category_union(selection: &Selection<'_>) -> Vec<String> {
    ordered_union(selection.iter(), |r| r.categories.as_slice())
}

/// @ai:intent Category codes a matrix of the given scope analyzes
/// @ai:effects pure
pub fn categories_in_scope(
    selection: &Selection<'_>,
    reference: &ReferenceLists,
    scope: CategoryScope,
) -> Vec<String> {
    match scope {
        CategoryScope::Union => category_union(selection),
        CategoryScope::CriticalInUnion => category_union(selection)
            .into_iter()
            .filter(|c| reference.is_critical(c))
            .collect(),
        CategoryScope::CriticalList => reference.critical_list(),
    }
}

/// @ai:intent Build the coverage matrix for an explicit category list
///
/// Rows keep the input order among equal totals.
/// @ai:effects pure
pub fn coverage_matrix_for(
    selection: &Selection<'_>,
    reference: &ReferenceLists,
    scope: CategoryScope,
    categories: Vec<String>,
) -> CoverageMatrix {
    let sets: Vec<HashSet<&str>> = selection.iter().map(|r| r.category_set()).collect();

    let mut rows: Vec<CoverageRow> = categories
        .into_iter()
        .map(|category| {
            let coverage: Vec<bool> = sets.iter().map(|s| s.contains(category.as_str())).collect();
            let total = coverage.iter().filter(|c| **c).count();
            let critical = reference.is_critical(&category);

            CoverageRow {
                category,
                coverage,
                total,
                critical,
            }
        })
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| b.total.cmp(&a.total));

    CoverageMatrix {
        scope,
        benchmarks: selection.names(),
        rows,
    }
}

/// @ai:intent Build the coverage matrix for a category scope
/// @ai:effects pure
pub fn coverage_matrix(
    selection: &Selection<'_>,
    reference: &ReferenceLists,
    scope: CategoryScope,
) -> CoverageMatrix {
    let categories = categories_in_scope(selection, reference, scope);
    coverage_matrix_for(selection, reference, scope, categories)
}

/// @ai:intent Split the critical list into covered and missing entries
///
/// Both halves keep reference order; repeated list entries count once.
/// @ai:effects pure
pub fn critical_partition(
    selection: &Selection<'_>,
    reference: &ReferenceLists,
) -> (Vec<String>, Vec<String>) {
    let union = category_union(selection);
    let union: HashSet<&str> = union.iter().map(String::as_str).collect();

    reference
        .critical_list()
        .into_iter()
        .partition(|c| union.contains(c.as_str()))
}

fn coverage_of(covered: &[String], missing: &[String]) -> CriticalCoverage {
    CriticalCoverage {
        covered: covered.len(),
        total: covered.len() + missing.len(),
    }
}

/// @ai:intent Count critical-list entries present in the union
/// @ai:effects pure
pub fn critical_coverage(selection: &Selection<'_>, reference: &ReferenceLists) -> CriticalCoverage {
    let (covered, missing) = critical_partition(selection, reference);
    coverage_of(&covered, &missing)
}

/// @ai:intent Derive gap sets from a coverage matrix and the reference lists
/// @ai:post covered_by_all, partially_covered and covered_by_none partition matrix.rows
/// @ai:effects pure
pub fn gap_report(
    selection: &Selection<'_>,
    reference: &ReferenceLists,
    matrix: &CoverageMatrix,
) -> GapReport {
    let selected = selection.len();
    let mut report = GapReport::default();

    for row in &matrix.rows {
        if row.total == 0 {
            report.covered_by_none.push(row.category.clone());
        } else if row.total == selected {
            report.covered_by_all.push(row.category.clone());
        } else {
            report.partially_covered.push(row.category.clone());
        }
    }

    let (covered, missing) = critical_partition(selection, reference);

    report.critical_coverage = coverage_of(&covered, &missing);
    report.covered_critical = covered;
    report.missing_critical = missing;
    report.missing_languages = missing_languages(selection, reference);
    report.missing_validation_methods = missing_validation_methods(selection, reference);

    report
}

/// @ai:intent Shared categories between two benchmarks
///
/// A benchmark paired with itself reports its declared category count.
/// @ai:effects pure
pub fn overlap_count(a: &BenchmarkRecord, b: &BenchmarkRecord) -> usize {
    if a.id == b.id {
        return a.category_count as usize;
    }

    let b_set = b.category_set();
    a.category_set().intersection(&b_set).count()
}

/// @ai:intent Overlap as a percentage of the first benchmark's declared count
/// @ai:post None when a declares zero categories
/// @ai:effects pure
pub fn overlap_percentage(a: &BenchmarkRecord, b: &BenchmarkRecord) -> Option<f64> {
    if a.category_count == 0 {
        return None;
    }
    Some(overlap_count(a, b) as f64 / a.category_count as f64 * 100.0)
}

/// @ai:intent Pairwise overlap for every ordered pair in the selection
/// @ai:effects pure
pub fn overlap_matrix(selection: &Selection<'_>) -> OverlapMatrix {
    let rows = selection
        .iter()
        .map(|a| OverlapRow {
            benchmark: a.name.clone(),
            cells: selection
                .iter()
                .map(|b| {
                    let count = overlap_count(a, b);
                    let intensity = if a.id == b.id {
                        OverlapIntensity::Diagonal
                    } else {
                        OverlapIntensity::for_count(count)
                    };

                    OverlapCell {
                        with: b.name.clone(),
                        count,
                        percentage: overlap_percentage(a, b),
                        intensity,
                    }
                })
                .collect(),
        })
        .collect();

    OverlapMatrix {
        benchmarks: selection.names(),
        rows,
    }
}

/// @ai:intent Off-diagonal pairs whose overlap percentage exceeds the threshold
///
/// Pairs with an undefined percentage are skipped.
/// @ai:effects pure
pub fn significant_overlaps(selection: &Selection<'_>, threshold: f64) -> Vec<SignificantOverlap> {
    let mut found = Vec::new();

    for a in selection.iter() {
        for b in selection.iter().filter(|b| b.id != a.id) {
            if let Some(percentage) = overlap_percentage(a, b) {
                if percentage > threshold {
                    found.push(SignificantOverlap {
                        benchmark: a.name.clone(),
                        with: b.name.clone(),
                        count: overlap_count(a, b),
                        percentage,
                    });
                }
            }
        }
    }

    found
}
