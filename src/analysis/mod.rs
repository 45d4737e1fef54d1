//! @ai:module:intent Coverage and aggregation engines over a benchmark selection
//! @ai:module:layer application
//! @ai:module:public_api Analyzer, AnalyzerTrait, AnalysisBundle, CoverageMatrix, GapReport, OverlapMatrix

pub mod aggregation;
pub mod coverage;
pub mod insights;
pub mod types;

pub use types::{
    Aggregates, AnalysisBundle, CategoryScope, CoverageMatrix, CoverageRow, CriticalCoverage,
    DistributionEntry, Distributions, FeatureCell, FeatureRow, GapReport, Insight, InsightKind,
    OverlapCell, OverlapIntensity, OverlapMatrix, OverlapRow, SamplePartition, SignificantOverlap,
};

use crate::catalog::Catalog;
use crate::config::AnalysisSettings;
use crate::selection::{filter, Selection};

/// @ai:intent Trait for producing an analysis bundle from selected names
pub trait AnalyzerTrait: Send + Sync {
    /// @ai:intent Analyze the catalog records whose names are selected
    fn analyze(&self, selected_names: &[String]) -> AnalysisBundle;
}

/// @ai:intent Runs every engine over a selection of an injected catalog
///
/// Holds no state besides its inputs; analyzing the same names twice yields
/// equal bundles.
pub struct Analyzer<'c> {
    catalog: &'c Catalog,
    settings: AnalysisSettings,
}

impl<'c> Analyzer<'c> {
    /// @ai:intent Create an analyzer over a catalog
    /// @ai:effects pure
    pub fn new(catalog: &'c Catalog, settings: AnalysisSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// @ai:intent Resolve names against the catalog
    /// @ai:effects pure
    pub fn select<S: AsRef<str>>(&self, selected_names: &[S]) -> Selection<'c> {
        filter(self.catalog, selected_names)
    }

    /// @ai:intent Run the coverage and aggregation engines over a selection
    /// @ai:effects pure
    pub fn analyze_selection(&self, selection: &Selection<'_>) -> AnalysisBundle {
        tracing::debug!("Analyzing {} benchmarks", selection.len());

        let reference = self.catalog.reference();

        let coverage_matrix =
            coverage::coverage_matrix(selection, reference, self.settings.category_scope);
        let gap_report = coverage::gap_report(selection, reference, &coverage_matrix);
        let overlap_matrix = coverage::overlap_matrix(selection);
        let significant_overlaps = coverage::significant_overlaps(
            selection,
            self.settings.significant_overlap_threshold,
        );

        let distributions = aggregation::distributions(selection, reference);
        let aggregates = aggregation::aggregates(selection, reference);
        let features = aggregation::feature_matrix(selection);
        let insights = insights::derive_insights(
            selection,
            reference,
            &gap_report,
            &distributions.sample_partition,
        );

        AnalysisBundle {
            selected: selection.names(),
            coverage_matrix,
            row_limit: self.settings.matrix_row_limit,
            overlap_matrix,
            significant_overlaps,
            gap_report,
            distributions,
            aggregates,
            features,
            insights,
        }
    }
}

impl AnalyzerTrait for Analyzer<'_> {
    /// @ai:intent Filter the catalog and analyze the result
    /// @ai:effects pure
    fn analyze(&self, selected_names: &[String]) -> AnalysisBundle {
        let selection = self.select(selected_names);
        self.analyze_selection(&selection)
    }
}

/// @ai:intent Analyze selected names with default presentation settings
/// @ai:effects pure
pub fn analyze<S: AsRef<str>>(catalog: &Catalog, selected_names: &[S]) -> AnalysisBundle {
    let analyzer = Analyzer::new(catalog, AnalysisSettings::default());
    analyzer.analyze_selection(&analyzer.select(selected_names))
}
