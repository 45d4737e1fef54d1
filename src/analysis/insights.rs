//! @ai:module:intent Derive research findings from gaps and distributions
//! @ai:module:layer domain
//! @ai:module:public_api derive_insights
//! @ai:module:stateless true

use crate::analysis::types::{GapReport, Insight, InsightKind, SamplePartition};
use crate::catalog::{ReferenceLists, ValidationMethod};
use crate::selection::Selection;

/// @ai:intent Build the fixed set of research insights for a selection
/// @ai:effects pure
pub fn derive_insights(
    selection: &Selection<'_>,
    reference: &ReferenceLists,
    gaps: &GapReport,
    partition: &SamplePartition,
) -> Vec<Insight> {
    let known = reference.language_list().len();
    let covered_languages = known.saturating_sub(gaps.missing_languages.len());

    let static_benchmarks: Vec<String> = selection
        .iter()
        .filter(|r| r.validation_method == ValidationMethod::Static)
        .map(|r| r.name.clone())
        .collect();

    vec![
        Insight {
            kind: InsightKind::Critical,
            title: "Critical Category Coverage Gap".to_string(),
            description: format!(
                "{} critical vulnerabilities from the reference list are not covered by any benchmark",
                gaps.missing_critical.len()
            ),
            recommendation: "Focus on adding coverage for these high-priority vulnerabilities"
                .to_string(),
            affected: gaps.missing_critical.clone(),
        },
        Insight {
            kind: InsightKind::Warning,
            title: "Language Diversity Limited".to_string(),
            description: format!(
                "Only {}/{} programming languages are covered",
                covered_languages, known
            ),
            recommendation: "Expand language coverage, especially for emerging languages"
                .to_string(),
            affected: gaps.missing_languages.clone(),
        },
        Insight {
            kind: InsightKind::Info,
            title: "Validation Method Bias".to_string(),
            description: format!(
                "{} benchmarks rely primarily on static analysis",
                static_benchmarks.len()
            ),
            recommendation: "Balance with more dynamic and runtime testing approaches".to_string(),
            affected: static_benchmarks,
        },
        Insight {
            kind: InsightKind::Opportunity,
            title: "Scale Imbalance".to_string(),
            description: format!(
                "{} benchmarks have below-average sample sizes",
                partition.below.len()
            ),
            recommendation:
                "Consider expanding smaller benchmarks or creating consolidated versions"
                    .to_string(),
            affected: partition.below.clone(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregation::sample_partition;
    use crate::analysis::coverage::{coverage_matrix, gap_report};
    use crate::analysis::types::CategoryScope;
    use crate::catalog::Catalog;

    #[test]
    fn test_insights_for_full_catalog() {
        let catalog = Catalog::builtin();
        let selection = Selection::all(&catalog);
        let reference = catalog.reference();
        let matrix = coverage_matrix(&selection, reference, CategoryScope::Union);
        let gaps = gap_report(&selection, reference, &matrix);
        let partition = sample_partition(&selection);

        let insights = derive_insights(&selection, reference, &gaps, &partition);
        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0].kind, InsightKind::Critical);
        assert_eq!(insights[0].affected, vec!["CWE-77"]);
        assert_eq!(insights[1].description, "Only 8/8 programming languages are covered");
        assert_eq!(insights[2].affected, vec!["CyberSecEval"]);
        assert_eq!(insights[3].affected.len(), 4);
    }
}
