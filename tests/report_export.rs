use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use securebench::{
    AnalysisConfig, Analyzer, CatalogLoader, CatalogLoaderTrait, ExportFormat, ReportAssembler,
    ReportDocument, ReportGenerator,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos")
}

fn load_demo_config() -> AnalysisConfig {
    let mut config = AnalysisConfig::load(&demos_dir().join("securebench.toml")).unwrap();
    config.paths.catalog_dir = Some(demos_dir().join("catalog"));
    config
}

#[test]
fn demo_catalog_loads_with_reference_override() {
    let config = load_demo_config();
    let catalog = CatalogLoader::new()
        .load_or_builtin(config.paths.catalog_dir.as_deref())
        .unwrap();

    assert_eq!(catalog.names(), vec!["PySecure", "CMemCheck"]);
    assert_eq!(catalog.reference().critical_categories.len(), 5);
    assert!(catalog.schema_issues().is_empty());
}

#[test]
fn demo_export_writes_markdown_and_json() {
    let temp = TempDir::new().unwrap();
    let config = load_demo_config();
    let catalog = CatalogLoader::new()
        .load_or_builtin(config.paths.catalog_dir.as_deref())
        .unwrap();

    let names = config.selection.resolve(&catalog.names());
    let analyzer = Analyzer::new(&catalog, config.analysis.clone());
    let document = ReportAssembler::new(&analyzer).assemble_at(
        &names,
        &config.export.options(),
        Utc.with_ymd_and_hms(2026, 5, 4, 12, 0, 0).unwrap(),
    );

    let analysis = document.analysis.as_ref().unwrap();
    assert_eq!(analysis.gap_report.covered_by_all, vec!["CWE-79"]);
    assert_eq!(analysis.gap_report.missing_critical, vec!["CWE-78"]);
    assert_eq!(analysis.gap_report.missing_languages, vec!["Rust"]);
    assert_eq!(analysis.aggregates.memory_safety_support, 2);
    assert_eq!(analysis.significant_overlaps.len(), 0);
    assert!(document.visualization_hints.is_some());
    assert_eq!(document.metadata.export_format, ExportFormat::Markdown);

    let generator = ReportGenerator::new();
    let md_path = generator
        .generate(&document, config.export.format, temp.path())
        .unwrap();
    assert_eq!(
        md_path.file_name().and_then(|n| n.to_str()),
        Some("securebench-analysis-2026-05-04.md")
    );
    let markdown = std::fs::read_to_string(&md_path).unwrap();
    assert!(markdown.contains("Demo catalog"));
    assert!(markdown.contains("## Gap Analysis"));

    let json_path = generator
        .generate(&document, ExportFormat::Json, temp.path())
        .unwrap();
    let parsed: ReportDocument =
        serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(parsed.metadata.selected_benchmarks, vec!["PySecure", "CMemCheck"]);
    assert_eq!(parsed.metadata.total_samples, 300);
    assert_eq!(parsed.benchmarks.map(|b| b.len()), Some(2));
}

#[test]
fn init_config_round_trips_through_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("securebench.toml");

    AnalysisConfig::default().save(&path).unwrap();
    assert_eq!(AnalysisConfig::load(&path).unwrap(), AnalysisConfig::default());
}
