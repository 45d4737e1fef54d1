//! @ai:module:intent Comparative coverage analysis of security benchmark datasets
//! @ai:module:layer application
//! @ai:module:public_api catalog, selection, analysis, report, config, error
//!
//! # SecureBench
//!
//! Filters a fixed catalog of security code-generation benchmarks and derives
//! coverage matrices, overlaps, gaps and distributions from the selection.
//!
//! ```rust
//! use securebench::{analyze, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let bundle = analyze(&catalog, &["CODEGUARD+", "CWEval-Bench"]);
//! assert_eq!(bundle.aggregates.benchmark_count, 2);
//! ```

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod report;
pub mod selection;

pub use analysis::{analyze, AnalysisBundle, Analyzer, AnalyzerTrait};
pub use catalog::{BenchmarkRecord, Catalog, CatalogLoader, CatalogLoaderTrait, ReferenceLists, ValidationMethod};
pub use config::{AnalysisConfig, AnalysisSettings};
pub use error::{Error, Result};
pub use report::{ExportFormat, ExportOptions, ReportAssembler, ReportDocument, ReportGenerator};
pub use selection::{filter, Selection};
