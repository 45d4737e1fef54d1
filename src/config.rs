//! @ai:module:intent Configuration structs for the analysis tool
//! @ai:module:layer infrastructure
//! @ai:module:public_api AnalysisConfig, AnalysisSettings, SelectionConfig, ExportConfig, PathConfig
//! @ai:module:stateless true

use crate::analysis::CategoryScope;
use crate::error::{Error, Result};
use crate::report::{ExportFormat, ExportOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Main configuration for the analysis tool
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub paths: PathConfig,
}

/// @ai:intent Presentation policy knobs for the engines
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_overlap_threshold")]
    pub significant_overlap_threshold: f64,
    #[serde(default = "default_row_limit")]
    pub matrix_row_limit: usize,
    #[serde(default)]
    pub category_scope: CategoryScope,
}

/// @ai:intent Benchmarks to analyze; absent means the whole catalog
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub benchmarks: Option<Vec<String>>,
}

/// @ai:intent Default export options
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_true")]
    pub include_raw_data: bool,
    #[serde(default = "default_true")]
    pub include_analysis: bool,
    #[serde(default)]
    pub include_visualization_hints: bool,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub format: ExportFormat,
}

/// @ai:intent Path configuration for input/output directories
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Directory of TOML records; the built-in catalog is used when unset.
    pub catalog_dir: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            significant_overlap_threshold: default_overlap_threshold(),
            matrix_row_limit: default_row_limit(),
            category_scope: CategoryScope::default(),
        }
    }
}

impl Default for ExportConfig {
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

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            output_dir: default_output_dir(),
        }
    }
}

fn default_overlap_threshold() -> f64 {
    50.0
}

fn default_row_limit() -> usize {
    20
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

impl AnalysisConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl SelectionConfig {
    /// @ai:intent Names to analyze, falling back to every catalog name
    /// @ai:effects pure
    pub fn resolve(&self, catalog_names: &[&str]) -> Vec<String> {
        match &self.benchmarks {
            Some(names) => names.clone(),
            None => catalog_names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl ExportConfig {
    /// @ai:intent Assembler options carried by this configuration
    /// @ai:effects pure
    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            include_raw_data: self.include_raw_data,
            include_analysis: self.include_analysis,
            include_visualization_hints: self.include_visualization_hints,
            notes: self.notes.clone(),
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert!((config.analysis.significant_overlap_threshold - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.analysis.matrix_row_limit, 20);
        assert!(config.export.include_raw_data);
        assert!(!config.export.include_visualization_hints);
        assert!(config.paths.catalog_dir.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AnalysisConfig = toml::from_str(
            r#"
[analysis]
matrix_row_limit = 5
category_scope = "critical_list"

[selection]
benchmarks = ["SecurityEval"]
"#,
        )
        .unwrap();

        assert_eq!(config.analysis.matrix_row_limit, 5);
        assert_eq!(config.analysis.category_scope, CategoryScope::CriticalList);
        assert!((config.analysis.significant_overlap_threshold - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.selection.resolve(&["A", "B"]), vec!["SecurityEval"]);
        assert_eq!(config.paths.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn test_selection_falls_back_to_catalog() {
        let selection = SelectionConfig::default();
        assert_eq!(selection.resolve(&["A", "B"]), vec!["A", "B"]);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("securebench.toml");

        let mut config = AnalysisConfig::default();
        config.export.notes = "draft".to_string();
        config.export.format = ExportFormat::Markdown;
        config.save(&path).unwrap();

        let loaded = AnalysisConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_export_options_carry_format() {
        let export = ExportConfig {
            format: ExportFormat::Markdown,
            notes: "draft".to_string(),
            ..Default::default()
        };
        let options = export.options();
        assert_eq!(options.format, ExportFormat::Markdown);
        assert_eq!(options.notes, "draft");
        assert!(options.include_raw_data);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = AnalysisConfig::load(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }
}
