//! @ai:module:intent Report assembly and serialization for analysis results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportAssembler, ReportDocument, ExportOptions, ReportGenerator, JsonReporter, MarkdownReporter

pub mod document;
pub mod hints;
pub mod json_report;
pub mod markdown_report;

pub use document::{
    export_file_name, ExportFormat, ExportOptions, ReportAssembler, ReportDocument, ReportMetadata,
};
pub use hints::{visualization_hints, ChartHint, ChartKind, ChartPoint};
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use markdown_report::{MarkdownReporter, MarkdownReporterTrait};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// @ai:intent Writes a report document in the requested format
pub struct ReportGenerator {
    json: JsonReporter,
    markdown: MarkdownReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            json: JsonReporter::new(),
            markdown: MarkdownReporter::new(),
        }
    }

    /// @ai:intent Render a document without touching the filesystem
    /// @ai:effects pure
    pub fn render(&self, document: &ReportDocument, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => self.json.render(document),
            ExportFormat::Markdown => self.markdown.render(document),
        }
    }

    /// @ai:intent Write the document into output_dir and return its path
    /// @ai:effects fs:write
    pub fn generate(
        &self,
        document: &ReportDocument,
        format: ExportFormat,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;

        let path = output_dir.join(export_file_name(document, format));
        match format {
            ExportFormat::Json => self.json.generate(document, &path)?,
            ExportFormat::Markdown => self.markdown.generate(document, &path)?,
        }

        tracing::info!("Report written to {}", path.display());
        Ok(path)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::catalog::Catalog;
    use crate::config::AnalysisSettings;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_generate_creates_dated_file() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("nested").join("reports");

        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let document = ReportAssembler::new(&analyzer).assemble_at(
            &["SecCodePLT".to_string()],
            &ExportOptions::default(),
            Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0).unwrap(),
        );

        let path = ReportGenerator::new()
            .generate(&document, ExportFormat::Json, &out_dir)
            .unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("securebench-analysis-2026-03-02.json")
        );
        assert!(path.exists());
    }
}
