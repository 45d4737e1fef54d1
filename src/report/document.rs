//! @ai:module:intent Format-agnostic export document assembled from an analysis
//! @ai:module:layer application
//! @ai:module:public_api ReportAssembler, ReportDocument, ReportMetadata, ExportOptions, ExportFormat
//! @ai:module:stateless true

use crate::analysis::{AnalysisBundle, Analyzer};
use crate::catalog::BenchmarkRecord;
use crate::report::hints::{visualization_hints, ChartHint};
use crate::selection::Selection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// @ai:intent Output format chosen by the external serializer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(format!("unsupported export format: {}", other)),
        }
    }
}

/// @ai:intent Flags controlling what the document embeds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub include_raw_data: bool,
    pub include_analysis: bool,
    pub include_visualization_hints: bool,
    pub notes: String,
    pub format: ExportFormat,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_raw_data: true,
            include_analysis: true,
            include_visualization_hints: false,
            notes: String::new(),
            format: ExportFormat::default(),
        }
    }
}

/// @ai:intent Composition and headline counts of the exported selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub export_format: ExportFormat,
    /// Names as requested, including any that matched nothing.
    pub requested_benchmarks: Vec<String>,
    pub selected_benchmarks: Vec<String>,
    pub include_raw_data: bool,
    pub include_analysis: bool,
    pub include_visualization_hints: bool,
    pub notes: String,
    pub total_benchmarks: usize,
    pub total_samples: u64,
    pub total_categories: usize,
    pub average_samples: f64,
}

/// @ai:intent Canonical export structure every serializer derives from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub metadata: ReportMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmarks: Option<Vec<BenchmarkRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visualization_hints: Option<Vec<ChartHint>>,
}

/// @ai:intent Composes analysis output and raw records into a ReportDocument
pub struct ReportAssembler<'a, 'c> {
    analyzer: &'a Analyzer<'c>,
}

impl<'a, 'c> ReportAssembler<'a, 'c> {
    /// @ai:intent Create an assembler backed by an analyzer
    /// @ai:effects pure
    pub fn new(analyzer: &'a Analyzer<'c>) -> Self {
        Self { analyzer }
    }

    /// @ai:intent Assemble a document stamped with the current time
    /// @ai:effects time
    pub fn assemble(&self, requested: &[String], options: &ExportOptions) -> ReportDocument {
        self.assemble_at(requested, options, Utc::now())
    }

    /// @ai:intent Assemble a document with an explicit timestamp
    /// @ai:effects pure
    pub fn assemble_at(
        &self,
        requested: &[String],
        options: &ExportOptions,
        generated_at: DateTime<Utc>,
    ) -> ReportDocument {
        let selection = self.analyzer.select(requested);
        let bundle = self.analyzer.analyze_selection(&selection);

        let metadata = ReportMetadata {
            generated_at,
            export_format: options.format,
            requested_benchmarks: requested.to_vec(),
            selected_benchmarks: selection.names(),
            include_raw_data: options.include_raw_data,
            include_analysis: options.include_analysis,
            include_visualization_hints: options.include_visualization_hints,
            notes: options.notes.clone(),
            total_benchmarks: bundle.aggregates.benchmark_count,
            total_samples: bundle.aggregates.total_samples,
            total_categories: bundle.aggregates.unique_categories,
            average_samples: bundle.aggregates.average_samples,
        };

        let benchmarks = options
            .include_raw_data
            .then(|| raw_records(&selection));
        let visualization_hints = options
            .include_visualization_hints
            .then(|| visualization_hints(&selection, &bundle));
        let analysis = options.include_analysis.then_some(bundle);

        ReportDocument {
            metadata,
            benchmarks,
            analysis,
            visualization_hints,
        }
    }
}

fn raw_records(selection: &Selection<'_>) -> Vec<BenchmarkRecord> {
    selection.iter().cloned().collect()
}

/// @ai:intent Dated export file name for a format
/// @ai:effects pure
pub fn export_file_name(document: &ReportDocument, format: ExportFormat) -> String {
    format!(
        "securebench-analysis-{}.{}",
        document.metadata.generated_at.format("%Y-%m-%d"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::AnalysisSettings;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 19, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_assemble_respects_flags() {
        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let assembler = ReportAssembler::new(&analyzer);
        let requested = vec!["SecurityEval".to_string(), "Unknown".to_string()];

        let options = ExportOptions {
            include_raw_data: false,
            include_analysis: true,
            include_visualization_hints: true,
            notes: "pilot".to_string(),
            format: ExportFormat::Markdown,
        };
        let doc = assembler.assemble_at(&requested, &options, fixed_time());

        assert!(doc.benchmarks.is_none());
        assert!(doc.analysis.is_some());
        assert!(doc.visualization_hints.is_some());
        assert_eq!(doc.metadata.requested_benchmarks, requested);
        assert_eq!(doc.metadata.selected_benchmarks, vec!["SecurityEval"]);
        assert_eq!(doc.metadata.total_samples, 130);
        assert_eq!(doc.metadata.notes, "pilot");
        assert_eq!(doc.metadata.export_format, ExportFormat::Markdown);
    }

    #[test]
    fn test_assemble_raw_only() {
        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let options = ExportOptions {
            include_analysis: false,
            ..Default::default()
        };

        let doc = ReportAssembler::new(&analyzer).assemble_at(
            &["CODEGUARD+".to_string()],
            &options,
            fixed_time(),
        );
        assert!(doc.analysis.is_none());
        assert!(doc.visualization_hints.is_none());
        assert_eq!(doc.benchmarks.as_ref().map(|b| b.len()), Some(1));
    }

    #[test]
    fn test_omitted_sections_are_not_serialized() {
        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let options = ExportOptions {
            include_raw_data: false,
            include_analysis: false,
            ..Default::default()
        };

        let doc = ReportAssembler::new(&analyzer).assemble_at(&[], &options, fixed_time());
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json.get("benchmarks").is_none());
        assert!(json.get("analysis").is_none());
        assert_eq!(json["metadata"]["total_benchmarks"], 0);
        assert_eq!(json["metadata"]["export_format"], "json");
    }

    #[test]
    fn test_export_file_name() {
        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let doc = ReportAssembler::new(&analyzer).assemble_at(
            &[],
            &ExportOptions::default(),
            fixed_time(),
        );
        assert_eq!(
            export_file_name(&doc, ExportFormat::Markdown),
            "securebench-analysis-2026-01-19.md"
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert_eq!("md".parse::<ExportFormat>(), Ok(ExportFormat::Markdown));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
