//! @ai:module:intent Immutable catalog of benchmark records and reference lists
//! @ai:module:layer domain
//! @ai:module:public_api Catalog
//! @ai:module:stateless true

use crate::catalog::builtin::builtin_records;
use crate::catalog::record::BenchmarkRecord;
use crate::catalog::reference::ReferenceLists;
use crate::catalog::schema::{SchemaChecker, SchemaIssue};

/// @ai:intent Read-only data source handed to every engine call
///
/// Built once and never mutated. Test fixtures construct their own catalogs
/// with [`Catalog::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<BenchmarkRecord>,
    reference: ReferenceLists,
}

impl Catalog {
    /// @ai:intent Create a catalog from records and reference lists
    /// @ai:effects pure
    pub fn new(records: Vec<BenchmarkRecord>, reference: ReferenceLists) -> Self {
        Self { records, reference }
    }

    /// @ai:intent Catalog compiled into the crate
    /// @ai:effects pure
    pub fn builtin() -> Self {
        Self::new(builtin_records(), ReferenceLists::default())
    }

    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    pub fn reference(&self) -> &ReferenceLists {
        &self.reference
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// @ai:intent Look up a record by its stable id
    /// @ai:effects pure
    pub fn get(&self, id: &str) -> Option<&BenchmarkRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// @ai:intent Look up a record by its display name
    /// @ai:effects pure
    pub fn find_by_name(&self, name: &str) -> Option<&BenchmarkRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// @ai:intent Display names in catalog order
    /// @ai:effects pure
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// @ai:intent Report authoring defects without rejecting the data
    /// @ai:effects pure
    pub fn schema_issues(&self) -> Vec<SchemaIssue> {
        SchemaChecker::new().check(&self.records, &self.reference)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id_and_name() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("codeguard").map(|r| r.name.as_str()), Some("CODEGUARD+"));
        assert_eq!(
            catalog.find_by_name("CWEval-Bench").map(|r| r.id.as_str()),
            Some("cweval")
        );
        assert!(catalog.get("CODEGUARD+").is_none());
    }

    #[test]
    fn test_names_preserve_catalog_order() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.names(),
            vec![
                "SecurityEval",
                "CODEGUARD+",
                "CodeSecEval",
                "SecCodePLT",
                "CWEval-Bench",
                "CyberSecEval"
            ]
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![], ReferenceLists::default());
        assert!(catalog.is_empty());
        assert!(catalog.schema_issues().is_empty());
    }
}
