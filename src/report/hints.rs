//! @ai:module:intent Chart-ready series for external visualization tools
//! @ai:module:layer application
//! @ai:module:public_api ChartHint, ChartKind, ChartPoint, visualization_hints
//! @ai:module:stateless true

use crate::analysis::{AnalysisBundle, DistributionEntry};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};

/// @ai:intent Suggested chart type for a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// @ai:intent One chart a renderer can draw without further computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartHint {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub series: Vec<ChartPoint>,
}

fn hint(id: &str, title: &str, kind: ChartKind, series: Vec<ChartPoint>) -> ChartHint {
    ChartHint {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        series,
    }
}

fn point(label: &str, value: f64) -> ChartPoint {
    ChartPoint {
        label: label.to_string(),
        value,
    }
}

fn counts(entries: &[DistributionEntry]) -> Vec<ChartPoint> {
    entries.iter().map(|e| point(&e.value, e.count as f64)).collect()
}

/// @ai:intent Build chart series from a selection and its analysis
/// @ai:effects pure
pub fn visualization_hints(selection: &Selection<'_>, bundle: &AnalysisBundle) -> Vec<ChartHint> {
    let dists = &bundle.distributions;

    vec![
        hint(
            "samples_by_benchmark",
            "Sample Count by Benchmark",
            ChartKind::Bar,
            selection
                .iter()
                .map(|r| point(&r.name, r.sample_count as f64))
                .collect(),
        ),
        hint(
            "categories_by_benchmark",
            "Declared Categories by Benchmark",
            ChartKind::Bar,
            selection
                .iter()
                .map(|r| point(&r.name, r.category_count as f64))
                .collect(),
        ),
        hint(
            "validation_distribution",
            "Validation Method Distribution",
            ChartKind::Pie,
            counts(&dists.validation_methods),
        ),
        hint(
            "samples_by_validation_method",
            "Samples by Validation Method",
            ChartKind::Bar,
            dists
                .validation_methods
                .iter()
                .map(|e| point(&e.value, e.total_samples as f64))
                .collect(),
        ),
        hint(
            "languages_by_benchmark",
            "Languages Supported per Benchmark",
            ChartKind::Bar,
            selection
                .iter()
                .map(|r| point(&r.name, r.language_count() as f64))
                .collect(),
        ),
        hint(
            "language_coverage",
            "Benchmarks per Language",
            ChartKind::Pie,
            counts(
                &dists
                    .language_coverage
                    .iter()
                    .filter(|e| e.count > 0)
                    .cloned()
                    .collect::<Vec<_>>(),
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::catalog::Catalog;
    use crate::config::AnalysisSettings;

    #[test]
    fn test_hint_series_follow_selection() {
        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let selection = analyzer.select(&["SecurityEval", "CyberSecEval"]);
        let bundle = analyzer.analyze_selection(&selection);

        let hints = visualization_hints(&selection, &bundle);
        assert_eq!(hints.len(), 6);
        assert_eq!(hints[0].series[1].label, "CyberSecEval");
        assert!((hints[0].series[1].value - 1920.0).abs() < f64::EPSILON);

        let languages = hints.iter().find(|h| h.id == "language_coverage").unwrap();
        assert_eq!(languages.series.len(), 8);
    }

    #[test]
    fn test_empty_selection_has_empty_series() {
        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let selection = analyzer.select::<&str>(&[]);
        let bundle = analyzer.analyze_selection(&selection);

        assert!(visualization_hints(&selection, &bundle)
            .iter()
            .all(|h| h.series.is_empty()));
    }
}
