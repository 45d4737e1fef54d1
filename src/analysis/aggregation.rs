//! @ai:module:intent Scalar and grouped summaries over a benchmark selection
//! @ai:module:layer domain
//! @ai:module:public_api aggregates, group_observed, group_over_domain, sample_partition, missing_values
//! @ai:module:stateless true

use crate::analysis::coverage::{category_union, ordered_union};
use crate::analysis::types::{
    ratio, Aggregates, DistributionEntry, Distributions, FeatureCell, FeatureRow, SamplePartition,
};
use crate::catalog::{BenchmarkRecord, ReferenceLists, ValidationMethod};
use crate::selection::Selection;
use std::collections::HashSet;

/// Languages whose support signals memory-safety focused benchmarks.
const MEMORY_UNSAFE_LANGUAGES: [&str; 2] = ["C", "C++"];

/// @ai:intent Calculate average of an iterator of f64
/// @ai:effects pure
fn average<I: Iterator<Item = f64>>(iter: I) -> f64 {
    let (sum, count) = iter.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// @ai:intent Union of every selected benchmark's languages
/// @ai:effects pure
pub fn language_union(selection: &Selection<'_>) -> Vec<String> {
    ordered_union(selection.iter(), |r| r.languages.as_slice())
}

fn entry(value: String, members: Vec<&BenchmarkRecord>, selected: usize) -> DistributionEntry {
    DistributionEntry {
        value,
        count: members.len(),
        total_samples: members.iter().map(|r| r.sample_count).sum(),
        percentage: ratio(members.len(), selected) * 100.0,
        benchmarks: members.iter().map(|r| r.name.clone()).collect(),
        label: None,
        description: None,
    }
}

/// @ai:intent Attach validation method labels to entries keyed by method
/// @ai:effects pure
fn with_method_labels(entries: Vec<DistributionEntry>) -> Vec<DistributionEntry> {
    entries
        .into_iter()
        .map(|mut e| {
            if let Some(method) = ValidationMethod::ALL.iter().find(|m| m.as_str() == e.value) {
                e.label = Some(method.label().to_string());
                e.description = Some(method.description().to_string());
            }
            e
        })
        .collect()
}

/// @ai:intent Group by the values a key yields, observed values only
///
/// Values appear in first-encountered order; a record yielding a value more
/// than once is counted once for it.
/// @ai:effects pure
pub fn group_observed<F>(selection: &Selection<'_>, key: F) -> Vec<DistributionEntry>
where
    F: Fn(&BenchmarkRecord) -> Vec<String>,
{
    let mut groups: Vec<(String, Vec<&BenchmarkRecord>)> = Vec::new();

    for record in selection.iter() {
        let mut values = key(record);
        let mut seen = HashSet::new();
        values.retain(|v| seen.insert(v.clone()));

        for value in values {
            match groups.iter_mut().find(|(v, _)| *v == value) {
                Some((_, members)) => members.push(record),
                None => groups.push((value, vec![record])),
            }
        }
    }

    groups
        .into_iter()
        .map(|(value, members)| entry(value, members, selection.len()))
        .collect()
}

/// @ai:intent Group over a fixed enumeration domain, zero counts included
/// @ai:effects pure
pub fn group_over_domain<F>(selection: &Selection<'_>, domain: &[String], member: F) -> Vec<DistributionEntry>
where
    F: Fn(&BenchmarkRecord, &str) -> bool,
{
    domain
        .iter()
        .map(|value| {
            let members: Vec<_> = selection
                .iter()
                .filter(|r| member(r, value.as_str()))
                .collect();
            entry(value.clone(), members, selection.len())
        })
        .collect()
}

/// @ai:intent Validation methods present in the selection
/// @ai:effects pure
pub fn validation_distribution(selection: &Selection<'_>) -> Vec<DistributionEntry> {
    with_method_labels(group_observed(selection, |r| {
        vec![r.validation_method.as_str().to_string()]
    }))
}

/// @ai:intent Every validation method with its share of the selection
/// @ai:effects pure
pub fn validation_coverage(selection: &Selection<'_>, reference: &ReferenceLists) -> Vec<DistributionEntry> {
    with_method_labels(group_over_domain(selection, &reference.method_codes(), |r, m| {
        r.validation_method.as_str() == m
    }))
}

/// @ai:intent Languages present in the selection
/// @ai:effects pure
pub fn language_distribution(selection: &Selection<'_>) -> Vec<DistributionEntry> {
    group_observed(selection, |r| r.languages.clone())
}

/// @ai:intent Every known language with its supporting benchmarks
/// @ai:effects pure
pub fn language_coverage(selection: &Selection<'_>, reference: &ReferenceLists) -> Vec<DistributionEntry> {
    group_over_domain(selection, &reference.language_list(), |r, l| r.supports(l))
}

/// @ai:intent Split benchmarks below, at and above the mean sample count
/// @ai:post below + at_mean + above == selection size
/// @ai:effects pure
pub fn sample_partition(selection: &Selection<'_>) -> SamplePartition {
    let mean = average(selection.iter().map(|r| r.sample_count as f64));
    let mut partition = SamplePartition {
        mean,
        ..Default::default()
    };

    for record in selection.iter() {
        let samples = record.sample_count as f64;
        let side = if samples < mean {
            &mut partition.below
        } else if samples > mean {
            &mut partition.above
        } else {
            &mut partition.at_mean
        };
        side.push(record.name.clone());
    }

    partition
}

/// @ai:intent Domain members with zero occurrences among observed values
/// @ai:effects pure
pub fn missing_values(domain: &[String], observed: &[String]) -> Vec<String> {
    let observed: HashSet<&str> = observed.iter().map(String::as_str).collect();
    domain
        .iter()
        .filter(|v| !observed.contains(v.as_str()))
        .cloned()
        .collect()
}

/// @ai:intent Known languages no selected benchmark supports
/// @ai:effects pure
pub fn missing_languages(selection: &Selection<'_>, reference: &ReferenceLists) -> Vec<String> {
    missing_values(&reference.language_list(), &language_union(selection))
}

/// @ai:intent Validation methods no selected benchmark uses
/// @ai:effects pure
pub fn missing_validation_methods(
    selection: &Selection<'_>,
    reference: &ReferenceLists,
) -> Vec<ValidationMethod> {
    reference
        .validation_methods
        .iter()
        .copied()
        .filter(|m| !selection.iter().any(|r| r.validation_method == *m))
        .collect()
}

/// @ai:intent Compute scalar totals over the selection
/// @ai:effects pure
pub fn aggregates(selection: &Selection<'_>, reference: &ReferenceLists) -> Aggregates {
    let coverage = language_coverage(selection, reference);

    let memory_safety_support = coverage
        .iter()
        .filter(|e| MEMORY_UNSAFE_LANGUAGES.contains(&e.value.as_str()))
        .map(|e| e.count)
        .sum();

    // first language wins ties
    let most_covered_language = coverage
        .iter()
        .filter(|e| e.count > 0)
        .fold(None::<&DistributionEntry>, |best, e| match best {
            Some(b) if b.count >= e.count => Some(b),
            _ => Some(e),
        })
        .map(|e| e.value.clone());

    Aggregates {
        benchmark_count: selection.len(),
        total_samples: selection.iter().map(|r| r.sample_count).sum(),
        unique_categories: category_union(selection).len(),
        unique_languages: language_union(selection).len(),
        average_samples: average(selection.iter().map(|r| r.sample_count as f64)),
        multi_language_benchmarks: selection.iter().filter(|r| r.language_count() > 1).count(),
        memory_safety_support,
        most_covered_language,
    }
}

/// @ai:intent Capability flags across the selection
/// @ai:effects pure
pub fn feature_matrix(selection: &Selection<'_>) -> Vec<FeatureRow> {
    let features: [(&str, fn(&BenchmarkRecord) -> bool); 3] = [
        ("Has Test Suite", |r| r.has_test_suite),
        ("Has Secure Examples", |r| r.has_secure_examples),
        ("Automated Evaluation", |r| r.automated_evaluation),
    ];

    features
        .iter()
        .map(|(feature, has)| {
            let benchmarks: Vec<FeatureCell> = selection
                .iter()
                .map(|r| FeatureCell {
                    benchmark: r.name.clone(),
                    has_feature: has(r),
                })
                .collect();
            let count = benchmarks.iter().filter(|c| c.has_feature).count();

            FeatureRow {
                feature: feature.to_string(),
                benchmarks,
                count,
            }
        })
        .collect()
}

/// @ai:intent Compute every grouped summary for the selection
/// @ai:effects pure
pub fn distributions(selection: &Selection<'_>, reference: &ReferenceLists) -> Distributions {
    Distributions {
        validation_methods: validation_distribution(selection),
        validation_coverage: validation_coverage(selection, reference),
        languages: language_distribution(selection),
        language_coverage: language_coverage(selection, reference),
        sample_partition: sample_partition(selection),
    }
}
