//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::analysis::{AnalysisBundle, DistributionEntry};
use crate::catalog::BenchmarkRecord;
use crate::error::Result;
use crate::report::document::ReportDocument;
use std::fmt::{self, Write as FmtWrite};
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Render a report document as Markdown text
    fn render(&self, document: &ReportDocument) -> Result<String>;

    /// @ai:intent Generate Markdown report to file
    fn generate(&self, document: &ReportDocument, output_path: &Path) -> Result<()> {
        std::fs::write(output_path, self.render(document)?)?;
        Ok(())
    }
}

/// @ai:intent Generates Markdown reports from report documents
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Format an optional percentage, n/a when undefined
    /// @ai:effects pure
    fn format_percentage(value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{:.1}%", v),
            None => "n/a".to_string(),
        }
    }

    fn format_list(items: &[String]) -> String {
        if items.is_empty() {
            "none".to_string()
        } else {
            items.join(", ")
        }
    }

    /// @ai:intent Generate header and summary section
    fn write_summary(out: &mut String, document: &ReportDocument) -> fmt::Result {
        let meta = &document.metadata;

        writeln!(out, "# Security Benchmark Analysis")?;
        writeln!(out)?;
        writeln!(out, "**Date:** {}", meta.generated_at.to_rfc3339())?;
        writeln!(out, "**Format:** {}", meta.export_format.extension())?;
        writeln!(
            out,
            "**Benchmarks:** {}",
            Self::format_list(&meta.selected_benchmarks)
        )?;
        writeln!(out)?;
        writeln!(out, "| Metric | Value |")?;
        writeln!(out, "|--------|-------|")?;
        writeln!(out, "| Benchmarks | {} |", meta.total_benchmarks)?;
        writeln!(out, "| Total Samples | {} |", meta.total_samples)?;
        writeln!(out, "| Unique Categories | {} |", meta.total_categories)?;
        writeln!(out, "| Average Samples | {:.1} |", meta.average_samples)?;
        writeln!(out)?;

        if !meta.notes.is_empty() {
            writeln!(out, "## Notes")?;
            writeln!(out)?;
            writeln!(out, "{}", meta.notes)?;
            writeln!(out)?;
        }

        Ok(())
    }

    /// @ai:intent Generate the truncated coverage matrix section
    fn write_coverage(out: &mut String, bundle: &AnalysisBundle) -> fmt::Result {
        let matrix = &bundle.coverage_matrix;

        writeln!(out, "## Category Coverage")?;
        writeln!(out)?;

        if matrix.rows.is_empty() {
            writeln!(out, "No categories to analyze.")?;
            writeln!(out)?;
            return Ok(());
        }

        write!(out, "| Category | Critical |")?;
        for name in &matrix.benchmarks {
            write!(out, " {} |", name)?;
        }
        writeln!(out, " Total |")?;
        write!(out, "|----------|----------|")?;
        for _ in &matrix.benchmarks {
            write!(out, "---|")?;
        }
        writeln!(out, "-------|")?;

        for row in matrix.top(bundle.row_limit) {
            write!(
                out,
                "| {} | {} |",
                row.category,
                if row.critical { "yes" } else { "" }
            )?;
            for covered in &row.coverage {
                write!(out, " {} |", if *covered { "x" } else { "" })?;
            }
            writeln!(out, " {} |", row.total)?;
        }
        writeln!(out)?;

        if matrix.is_truncated(bundle.row_limit) {
            writeln!(
                out,
                "Showing top {} categories. Total: {}",
                bundle.row_limit,
                matrix.rows.len()
            )?;
            writeln!(out)?;
        }

        Ok(())
    }

    /// @ai:intent Generate pairwise overlap section
    fn write_overlap(out: &mut String, bundle: &AnalysisBundle) -> fmt::Result {
        let matrix = &bundle.overlap_matrix;
        if matrix.rows.is_empty() {
            return Ok(());
        }

        writeln!(out, "## Benchmark Overlap")?;
        writeln!(out)?;
        write!(out, "| Benchmark |")?;
        for name in &matrix.benchmarks {
            write!(out, " {} |", name)?;
        }
        writeln!(out)?;
        write!(out, "|-----------|")?;
        for _ in &matrix.benchmarks {
            write!(out, "---|")?;
        }
        writeln!(out)?;

        for row in &matrix.rows {
            write!(out, "| {} |", row.benchmark)?;
            for cell in &row.cells {
                write!(
                    out,
                    " {} ({}) |",
                    cell.count,
                    Self::format_percentage(cell.percentage)
                )?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
        writeln!(out, "Diagonal shows each benchmark's declared category count.")?;
        writeln!(out)?;

        if !bundle.significant_overlaps.is_empty() {
            writeln!(out, "### Significant Overlaps")?;
            writeln!(out)?;
            for overlap in &bundle.significant_overlaps {
                writeln!(
                    out,
                    "- {}: {:.1}% overlap with {} ({} categories)",
                    overlap.benchmark, overlap.percentage, overlap.with, overlap.count
                )?;
            }
            writeln!(out)?;
        }

        Ok(())
    }

    /// @ai:intent Generate gap analysis section
    fn write_gaps(out: &mut String, bundle: &AnalysisBundle) -> fmt::Result {
        let gaps = &bundle.gap_report;
        let methods: Vec<String> = gaps
            .missing_validation_methods
            .iter()
            .map(|m| m.as_str().to_string())
            .collect();

        writeln!(out, "## Gap Analysis")?;
        writeln!(out)?;
        writeln!(
            out,
            "- Critical coverage: {}/{} ({:.1}%)",
            gaps.critical_coverage.covered,
            gaps.critical_coverage.total,
            gaps.critical_coverage.percentage()
        )?;
        writeln!(out, "- Missing critical: {}", Self::format_list(&gaps.missing_critical))?;
        writeln!(out, "- Covered by all: {}", gaps.covered_by_all.len())?;
        writeln!(out, "- Covered by none: {}", gaps.covered_by_none.len())?;
        writeln!(out, "- Missing languages: {}", Self::format_list(&gaps.missing_languages))?;
        writeln!(out, "- Missing validation methods: {}", Self::format_list(&methods))?;
        writeln!(out)?;

        Ok(())
    }

    fn write_distribution(out: &mut String, title: &str, entries: &[DistributionEntry]) -> fmt::Result {
        writeln!(out, "### {}", title)?;
        writeln!(out)?;
        writeln!(out, "| Value | Benchmarks | Share | Samples |")?;
        writeln!(out, "|-------|------------|-------|---------|")?;
        for entry in entries {
            writeln!(
                out,
                "| {} | {} | {:.1}% | {} |",
                entry.label.as_deref().unwrap_or(&entry.value),
                entry.count,
                entry.percentage,
                entry.total_samples
            )?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// @ai:intent Generate distribution and partition section
    fn write_distributions(out: &mut String, bundle: &AnalysisBundle) -> fmt::Result {
        let dists = &bundle.distributions;
        let partition = &dists.sample_partition;

        writeln!(out, "## Distributions")?;
        writeln!(out)?;
        Self::write_distribution(out, "Validation Methods", &dists.validation_coverage)?;
        Self::write_distribution(out, "Language Coverage", &dists.language_coverage)?;

        writeln!(out, "### Sample Size")?;
        writeln!(out)?;
        writeln!(out, "- Mean: {:.1}", partition.mean)?;
        writeln!(out, "- Below average: {}", Self::format_list(&partition.below))?;
        writeln!(out, "- At average: {}", Self::format_list(&partition.at_mean))?;
        writeln!(out, "- Above average: {}", Self::format_list(&partition.above))?;
        writeln!(out)?;

        Ok(())
    }

    /// @ai:intent Generate research insights section
    fn write_insights(out: &mut String, bundle: &AnalysisBundle) -> fmt::Result {
        writeln!(out, "## Insights")?;
        writeln!(out)?;
        for insight in &bundle.insights {
            writeln!(out, "### [{}] {}", insight.kind.as_str(), insight.title)?;
            writeln!(out)?;
            writeln!(out, "{}", insight.description)?;
            writeln!(out)?;
            writeln!(out, "*Recommendation:* {}", insight.recommendation)?;
            if !insight.affected.is_empty() {
                writeln!(out, "*Affected:* {}", insight.affected.join(", "))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// @ai:intent Generate raw benchmark table
    fn write_benchmarks(out: &mut String, records: &[BenchmarkRecord]) -> fmt::Result {
        writeln!(out, "## Benchmarks")?;
        writeln!(out)?;
        writeln!(out, "| Name | Year | Samples | Categories | Languages | Validation |")?;
        writeln!(out, "|------|------|---------|------------|-----------|------------|")?;
        for r in records {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                r.name,
                r.year,
                r.sample_count,
                r.category_count,
                r.languages.join(", "),
                r.validation_method.label()
            )?;
        }
        writeln!(out)?;
        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:effects pure
    fn render(&self, document: &ReportDocument) -> Result<String> {
        let mut content = String::new();

        Self::write_summary(&mut content, document)?;

        if let Some(bundle) = &document.analysis {
            Self::write_coverage(&mut content, bundle)?;
            Self::write_overlap(&mut content, bundle)?;
            Self::write_gaps(&mut content, bundle)?;
            Self::write_distributions(&mut content, bundle)?;
            Self::write_insights(&mut content, bundle)?;
        }

        if let Some(records) = &document.benchmarks {
            Self::write_benchmarks(&mut content, records)?;
        }

        Ok(content)
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

    fn document(names: &[&str], options: ExportOptions) -> ReportDocument {
        let catalog = Catalog::builtin();
        let analyzer = Analyzer::new(&catalog, AnalysisSettings::default());
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        ReportAssembler::new(&analyzer).assemble_at(
            &names,
            &options,
            Utc.with_ymd_and_hms(2026, 1, 19, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(MarkdownReporter::format_percentage(Some(41.176)), "41.2%");
        assert_eq!(MarkdownReporter::format_percentage(None), "n/a");
    }

    #[test]
    fn test_generate_markdown_report() {
        let reporter = MarkdownReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("results.md");

        let doc = document(
            &["SecurityEval", "CODEGUARD+", "CodeSecEval", "SecCodePLT", "CWEval-Bench", "CyberSecEval"],
            ExportOptions {
                notes: "Thesis chapter 3".to_string(),
                ..Default::default()
            },
        );
        reporter.generate(&doc, &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("# Security Benchmark Analysis"));
        assert!(content.contains("Thesis chapter 3"));
        assert!(content.contains("Showing top 20 categories."));
        assert!(content.contains("- Missing critical: CWE-77"));
        assert!(content.contains("| CyberSecEval | 2023 | 1920 |"));
    }

    #[test]
    fn test_render_without_analysis() {
        let doc = document(
            &["SecurityEval"],
            ExportOptions {
                include_analysis: false,
                include_raw_data: false,
                ..Default::default()
            },
        );
        let content = MarkdownReporter::new().render(&doc).unwrap();
        assert!(!content.contains("## Category Coverage"));
        assert!(!content.contains("## Benchmarks"));
    }
}
