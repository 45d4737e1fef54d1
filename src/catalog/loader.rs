//! @ai:module:intent TOML catalog loader for benchmark records
//! @ai:module:layer infrastructure
//! @ai:module:public_api CatalogLoader, CatalogLoaderTrait
//! @ai:module:stateless true

use crate::catalog::record::BenchmarkRecord;
use crate::catalog::reference::ReferenceLists;
use crate::catalog::store::Catalog;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File holding reference-list overrides inside a catalog directory.
pub const REFERENCE_FILE: &str = "reference.toml";

/// @ai:intent Trait for loading a benchmark catalog
pub trait CatalogLoaderTrait: Send + Sync {
    /// @ai:intent Load a catalog from a directory of TOML files
    fn load_dir(&self, catalog_dir: &Path) -> Result<Catalog>;

    /// @ai:intent Load the directory if configured, else the built-in catalog
    fn load_or_builtin(&self, catalog_dir: Option<&Path>) -> Result<Catalog>;
}

/// @ai:intent Raw record structure from TOML file
#[derive(Debug, Deserialize)]
struct RecordFile {
    benchmark: BenchmarkRecord,
}

/// @ai:intent Raw reference-list structure from TOML file
#[derive(Debug, Deserialize)]
struct ReferenceFile {
    reference: ReferenceLists,
}

/// @ai:intent Loads benchmark records from TOML files, one record per file
///
/// Records are ordered by file path so authors control catalog order with
/// file-name prefixes.
/// @ai:effects pure (stateless)
pub struct CatalogLoader;

impl CatalogLoader {
    /// @ai:intent Create a new catalog loader
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    fn read(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })
    }

    /// @ai:intent Parse a single record file
    /// @ai:pre path points to a TOML file with a [benchmark] table
    /// @ai:effects fs:read
    fn parse_record_file(path: &Path) -> Result<BenchmarkRecord> {
        let content = Self::read(path)?;
        let file: RecordFile = toml::from_str(&content).map_err(|e| Error::CatalogParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(file.benchmark)
    }

    /// @ai:intent Parse the reference-list override file
    /// @ai:effects fs:read
    fn parse_reference_file(path: &Path) -> Result<ReferenceLists> {
        let content = Self::read(path)?;
        let file: ReferenceFile = toml::from_str(&content).map_err(|e| Error::CatalogParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(file.reference)
    }

    /// @ai:intent Find all record files in directory, sorted by path
    /// @ai:effects fs:read
    fn find_record_files(catalog_dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(catalog_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .map(|ext| ext == "toml")
                    .unwrap_or(false)
            })
            .filter(|e| e.file_name() != REFERENCE_FILE)
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLoaderTrait for CatalogLoader {
    /// @ai:intent Load a catalog from a directory of TOML files
    /// @ai:effects fs:read
    fn load_dir(&self, catalog_dir: &Path) -> Result<Catalog> {
        if !catalog_dir.is_dir() {
            return Err(Error::FileRead {
                path: catalog_dir.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "catalog directory not found",
                ),
            });
        }

        let files = Self::find_record_files(catalog_dir);
        let mut records = Vec::with_capacity(files.len());

        for path in files {
            match Self::parse_record_file(&path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Skipping invalid catalog file {}: {}", path.display(), e);
                }
            }
        }

        let reference_path = catalog_dir.join(REFERENCE_FILE);
        let reference = if reference_path.exists() {
            Self::parse_reference_file(&reference_path)?
        } else {
            ReferenceLists::default()
        };

        let catalog = Catalog::new(records, reference);
        tracing::info!(
            "Loaded {} benchmarks from {}",
            catalog.len(),
            catalog_dir.display()
        );

        for issue in catalog.schema_issues() {
            tracing::warn!("Catalog data issue: {}", issue);
        }

        Ok(catalog)
    }

    /// @ai:intent Load the directory if configured, else the built-in catalog
    /// @ai:effects fs:read
    fn load_or_builtin(&self, catalog_dir: Option<&Path>) -> Result<Catalog> {
        match catalog_dir {
            Some(dir) => self.load_dir(dir),
            None => {
                tracing::debug!("Using built-in catalog");
                Ok(Catalog::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::ValidationMethod;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut file = std::fs::File::create(path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    const ALPHA: &str = r#"
[benchmark]
id = "alpha"
name = "Alpha"
year = 2024
sampleCount = 40
categoryCount = 2
categories = ["CWE-79", "CWE-89"]
languages = ["Python"]
validationMethod = "static"
"#;

    const BETA: &str = r#"
[benchmark]
id = "beta"
name = "Beta"
year = 2025
sampleCount = 10
categoryCount = 1
categories = ["CWE-787"]
languages = ["C"]
validationMethod = "dynamic"
hasTestSuite = true
"#;

    #[test]
    fn test_load_orders_by_file_name() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "02-alpha.toml", ALPHA);
        create_file(temp.path(), "01-beta.toml", BETA);

        let catalog = CatalogLoader::new().load_dir(temp.path()).unwrap();
        assert_eq!(catalog.names(), vec!["Beta", "Alpha"]);
        assert_eq!(
            catalog.get("beta").map(|r| r.validation_method),
            Some(ValidationMethod::Dynamic)
        );
        assert_eq!(catalog.reference(), &ReferenceLists::default());
    }

    #[test]
    fn test_skips_invalid_files() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "alpha.toml", ALPHA);
        create_file(temp.path(), "broken.toml", "[benchmark]\nid = 3\n");
        create_file(temp.path(), "notes.md", "not a record");

        let catalog = CatalogLoader::new().load_dir(temp.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_reference_override() {
        let temp = TempDir::new().unwrap();
        create_file(temp.path(), "alpha.toml", ALPHA);
        create_file(
            temp.path(),
            REFERENCE_FILE,
            "[reference]\ncriticalCategories = [\"CWE-79\"]\nknownLanguages = [\"Python\"]\n",
        );

        let catalog = CatalogLoader::new().load_dir(temp.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.reference().critical_categories, vec!["CWE-79"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = CatalogLoader::new().load_dir(&temp.path().join("missing"));
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }

    #[test]
    fn test_load_or_builtin_without_dir() {
        let catalog = CatalogLoader::new().load_or_builtin(None).unwrap();
        assert_eq!(catalog.len(), 6);
    }
}
