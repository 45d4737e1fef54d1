//! @ai:module:intent JSON report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::report::document::ReportDocument;
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Render a report document as JSON text
    fn render(&self, document: &ReportDocument) -> Result<String>;

    /// @ai:intent Generate JSON report to file
    fn generate(&self, document: &ReportDocument, output_path: &Path) -> Result<()> {
        std::fs::write(output_path, self.render(document)?)?;
        Ok(())
    }
}

/// @ai:intent Generates JSON reports from report documents
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:effects pure
    fn render(&self, document: &ReportDocument) -> Result<String> {
        Ok(serde_json::to_string_pretty(document)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::catalog::Catalog;
    use crate::config::AnalysisSettings;
    use crate::report::document::{ExportOptions, ReportAssembler};
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_generate_json_report() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("results.json");

        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let document = ReportAssembler::new(&analyzer).assemble_at(
            &["CWEval-Bench".to_string()],
            &ExportOptions::default(),
            Utc.with_ymd_and_hms(2026, 1, 19, 0, 0, 0).unwrap(),
        );

        reporter.generate(&document, &output).unwrap();
        assert!(output.exists());

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("CWEval-Bench"));
        assert!(content.contains("2026-01-19T00:00:00Z"));

        let parsed: ReportDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.metadata.selected_benchmarks, vec!["CWEval-Bench"]);
        assert_eq!(parsed.benchmarks.map(|b| b.len()), Some(1));
    }
}
