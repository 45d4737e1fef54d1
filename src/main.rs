//! @ai:module:intent CLI for the security benchmark analysis tool
//! @ai:module:layer presentation

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use securebench::{
    analysis::{AnalysisBundle, Analyzer, AnalyzerTrait, CategoryScope},
    catalog::{Catalog, CatalogLoader, CatalogLoaderTrait},
    config::AnalysisConfig,
    report::{ExportFormat, ReportAssembler, ReportGenerator},
};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "securebench")]
#[command(about = "Comparative coverage analysis of security code-generation benchmarks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a benchmark selection and print a summary
    Analyze {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Benchmarks to analyze (comma-separated names)
        #[arg(long)]
        benchmarks: Option<String>,

        /// Restrict the coverage matrix to critical categories
        #[arg(long)]
        critical_only: bool,
    },

    /// Export an analysis report
    Export {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Benchmarks to export (comma-separated names)
        #[arg(long)]
        benchmarks: Option<String>,

        /// Output format (json, markdown)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Leave raw benchmark records out of the report
        #[arg(long)]
        no_raw: bool,

        /// Leave the analysis bundle out of the report
        #[arg(long)]
        no_analysis: bool,

        /// Include chart-ready series
        #[arg(long)]
        hints: bool,

        /// Free-form notes embedded in the report
        #[arg(long)]
        notes: Option<String>,

        /// Output directory for the report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List catalogued benchmarks
    List {
        /// Directory of TOML benchmark records
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Check the catalog for data-quality issues
    Validate {
        /// Directory of TOML benchmark records
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "securebench.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("securebench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            config,
            benchmarks,
            critical_only,
        } => run_analysis(config, benchmarks, critical_only),
        Commands::Export {
            config,
            benchmarks,
            format,
            no_raw,
            no_analysis,
            hints,
            notes,
            output,
        } => run_export(ExportArgs {
            config,
            benchmarks,
            format,
            no_raw,
            no_analysis,
            hints,
            notes,
            output,
        }),
        Commands::List { catalog } => list_benchmarks(catalog),
        Commands::Validate { catalog } => validate(catalog),
        Commands::Init { output } => init_config(output),
    }
}

struct ExportArgs {
    config: Option<PathBuf>,
    benchmarks: Option<String>,
    format: Option<ExportFormat>,
    no_raw: bool,
    no_analysis: bool,
    hints: bool,
    notes: Option<String>,
    output: Option<PathBuf>,
}

/// @ai:intent Load configuration from file or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<AnalysisConfig> {
    match path {
        Some(p) => AnalysisConfig::load(&p)
            .with_context(|| format!("Failed to load config {}", p.display())),
        None => {
            let default_path = PathBuf::from("securebench.toml");

            if default_path.exists() {
                Ok(AnalysisConfig::load(&default_path)?)
            } else {
                Ok(AnalysisConfig::default())
            }
        }
    }
}

/// @ai:intent Load the configured catalog
/// @ai:effects fs:read
fn load_catalog(catalog_dir: Option<&std::path::Path>) -> Result<Catalog> {
    if let Some(dir) = catalog_dir {
        tracing::info!("Loading catalog from {}", dir.display());
    }

    CatalogLoader::new()
        .load_or_builtin(catalog_dir)
        .context("Failed to load catalog")
}

/// @ai:intent Parse a comma-separated list
/// @ai:effects pure
fn parse_comma_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// @ai:intent Selected names from the CLI, else configuration, else the whole catalog
/// @ai:effects pure
fn resolve_names(cli: Option<String>, config: &AnalysisConfig, catalog: &Catalog) -> Vec<String> {
    match cli {
        Some(list) => parse_comma_list(&list),
        None => config.selection.resolve(&catalog.names()),
    }
}

/// @ai:intent Distinct requested names that matched no catalog record
/// @ai:effects pure
fn unmatched_names<'n>(requested: &'n [String], selected: &[String]) -> Vec<&'n str> {
    let mut seen = HashSet::new();
    requested
        .iter()
        .map(String::as_str)
        .filter(|n| seen.insert(*n) && !selected.iter().any(|s| s == n))
        .collect()
}

/// @ai:intent Analyze a selection and print its summary
/// @ai:effects fs:read, stdout
fn run_analysis(config: Option<PathBuf>, benchmarks: Option<String>, critical_only: bool) -> Result<()> {
    let mut config = load_or_default_config(config)?;
    if critical_only {
        config.analysis.category_scope = CategoryScope::CriticalInUnion;
    }

    let catalog = load_catalog(config.paths.catalog_dir.as_deref())?;
    let names = resolve_names(benchmarks, &config, &catalog);

    let analyzer = Analyzer::new(&catalog, config.analysis.clone());
    let bundle = analyzer.analyze(&names);

    let unmatched = unmatched_names(&names, &bundle.selected);
    if !unmatched.is_empty() {
        tracing::warn!(
            "Requested benchmarks not in the catalog: {}",
            unmatched.join(", ")
        );
    }

    print_summary(&bundle);
    Ok(())
}

/// @ai:intent Assemble and write a report
/// @ai:effects fs:read, fs:write
fn run_export(args: ExportArgs) -> Result<()> {
    let config = load_or_default_config(args.config)?;
    let catalog = load_catalog(config.paths.catalog_dir.as_deref())?;
    let names = resolve_names(args.benchmarks, &config, &catalog);

    let mut options = config.export.options();
    options.include_raw_data &= !args.no_raw;
    options.include_analysis &= !args.no_analysis;
    options.include_visualization_hints |= args.hints;
    if let Some(notes) = args.notes {
        options.notes = notes;
    }

    if let Some(format) = args.format {
        options.format = format;
    }
    let format = options.format;
    let output_dir = args.output.unwrap_or_else(|| config.paths.output_dir.clone());

    tracing::info!("Exporting {} report for {} benchmarks", format.extension(), names.len());

    let analyzer = Analyzer::new(&catalog, config.analysis.clone());
    let document = ReportAssembler::new(&analyzer).assemble(&names, &options);

    let path = ReportGenerator::new().generate(&document, format, &output_dir)?;
    println!("Report generated at {}", path.display());
    Ok(())
}

/// @ai:intent Print analysis summary to stdout
/// @ai:effects stdout
fn print_summary(bundle: &AnalysisBundle) {
    let totals = &bundle.aggregates;
    let gaps = &bundle.gap_report;

    println!();
    println!("Benchmark Analysis Summary");
    println!("==========================");
    println!();
    println!("Benchmarks:        {}", bundle.selected.join(", "));
    println!("Total samples:     {}", totals.total_samples);
    println!("Unique categories: {}", totals.unique_categories);
    println!("Languages:         {}", totals.unique_languages);
    println!(
        "Critical coverage: {}/{} ({:.1}%)",
        gaps.critical_coverage.covered,
        gaps.critical_coverage.total,
        gaps.critical_coverage.percentage()
    );
    println!();

    let matrix = &bundle.coverage_matrix;
    if !matrix.rows.is_empty() {
        println!("{:<12} {:>6} {:>8}", "Category", "Total", "Share");
        println!("{}", "-".repeat(28));
        for row in matrix.top(bundle.row_limit) {
            println!(
                "{:<12} {:>6} {:>7.1}%",
                row.category,
                row.total,
                row.ratio() * 100.0
            );
        }
        if matrix.is_truncated(bundle.row_limit) {
            println!("... {} more", matrix.rows.len() - bundle.row_limit);
        }
        println!();
    }

    if !bundle.significant_overlaps.is_empty() {
        println!("Significant overlaps:");
        for overlap in &bundle.significant_overlaps {
            println!(
                "  {} -> {}: {:.1}% ({} categories)",
                overlap.benchmark, overlap.with, overlap.percentage, overlap.count
            );
        }
        println!();
    }

    for insight in &bundle.insights {
        println!("[{}] {}: {}", insight.kind.as_str(), insight.title, insight.description);
    }
}

/// @ai:intent List catalogued benchmarks
/// @ai:effects fs:read, stdout
fn list_benchmarks(catalog_dir: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog_dir.as_deref())?;

    println!("Available benchmarks ({}):", catalog.len());
    println!();
    println!(
        "{:<16} {:<16} {:<6} {:>8} {:>6} {:<10}",
        "ID", "Name", "Year", "Samples", "CWEs", "Validation"
    );
    println!("{}", "-".repeat(68));

    for record in catalog.records() {
        println!(
            "{:<16} {:<16} {:<6} {:>8} {:>6} {:<10}",
            record.id,
            record.name,
            record.year,
            record.sample_count,
            record.category_count,
            record.validation_method
        );
    }

    Ok(())
}

/// @ai:intent Print catalog data-quality issues
/// @ai:effects fs:read, stdout
fn validate(catalog_dir: Option<PathBuf>) -> Result<()> {
    let catalog = load_catalog(catalog_dir.as_deref())?;
    let issues = catalog.schema_issues();

    if issues.is_empty() {
        println!("Catalog OK: {} benchmarks, no issues", catalog.len());
        return Ok(());
    }

    println!("{} data-quality issues found:", issues.len());
    for issue in &issues {
        println!("  {}", issue);
    }

    Ok(())
}

/// @ai:intent Write default configuration
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = AnalysisConfig::default();
    config.save(&output)?;
    println!("Configuration written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_list() {
        assert_eq!(
            parse_comma_list("SecurityEval, CODEGUARD+ ,,"),
            vec!["SecurityEval", "CODEGUARD+"]
        );
    }

    #[test]
    fn test_unmatched_names_ignores_repeats() {
        let catalog = Catalog::builtin();
        let requested = parse_comma_list("SecCodePLT,SecCodePLT,Nope,Nope");
        let bundle = securebench::analyze(&catalog, &requested);

        assert_eq!(bundle.selected, vec!["SecCodePLT"]);
        assert_eq!(unmatched_names(&requested, &bundle.selected), vec!["Nope"]);
        assert!(unmatched_names(&requested[..2], &bundle.selected).is_empty());
    }

    #[test]
    fn test_resolve_names_prefers_cli() {
        let catalog = Catalog::builtin();
        let config = AnalysisConfig::default();
        assert_eq!(
            resolve_names(Some("SecCodePLT".to_string()), &config, &catalog),
            vec!["SecCodePLT"]
        );
        assert_eq!(resolve_names(None, &config, &catalog).len(), 6);
    }

    #[test]
    fn test_cli_parses_export() {
        let cli = Cli::try_parse_from([
            "securebench",
            "export",
            "--format",
            "markdown",
            "--hints",
            "--benchmarks",
            "SecurityEval",
        ])
        .unwrap();

        match cli.command {
            Commands::Export { format, hints, .. } => {
                assert_eq!(format, Some(ExportFormat::Markdown));
                assert!(hints);
            }
            _ => panic!("expected export command"),
        }
    }
}
