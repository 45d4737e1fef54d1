//! @ai:module:intent Resolve a caller's benchmark selection against the catalog
//! @ai:module:layer domain
//! @ai:module:public_api Selection, filter
//! @ai:module:stateless true

use crate::catalog::{BenchmarkRecord, Catalog};
use std::collections::HashSet;

/// @ai:intent Catalog records chosen for one analysis, in catalog order
///
/// Borrowed from the catalog and never stored beyond the computation that
/// requested it.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    records: Vec<&'a BenchmarkRecord>,
}

impl<'a> Selection<'a> {
    /// @ai:intent Wrap already-resolved records
    /// @ai:effects pure
    pub fn from_records(records: Vec<&'a BenchmarkRecord>) -> Self {
        Self { records }
    }

    /// @ai:intent Select every record in the catalog
    /// @ai:effects pure
    pub fn all(catalog: &'a Catalog) -> Self {
        Self::from_records(catalog.records().iter().collect())
    }

    pub fn records(&self) -> &[&'a BenchmarkRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a BenchmarkRecord> + '_ {
        self.records.iter().copied()
    }

    /// @ai:intent Display names of the selected records
    /// @ai:effects pure
    pub fn names(&self) -> Vec<String> {
        self.records.iter().map(|r| r.name.clone()).collect()
    }
}

/// @ai:intent Keep records whose name is selected, preserving catalog order
///
/// Unknown names are ignored; an empty name set yields an empty selection.
/// @ai:effects pure
pub fn filter<'a, S: AsRef<str>>(catalog: &'a Catalog, selected_names: &[S]) -> Selection<'a> {
    let wanted: HashSet<&str> = selected_names.iter().map(|s| s.as_ref()).collect();

    let records: Vec<_> = catalog
        .records()
        .iter()
        .filter(|r| wanted.contains(r.name.as_str()))
        .collect();

    let unknown = wanted
        .iter()
        .filter(|name| catalog.find_by_name(name).is_none())
        .count();
    if unknown > 0 {
        tracing::debug!("Ignoring {} unknown benchmark names", unknown);
    }

    Selection::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let selection = filter(&catalog, &["CyberSecEval", "SecurityEval"]);
        assert_eq!(selection.names(), vec!["SecurityEval", "CyberSecEval"]);
    }

    #[test]
    fn test_filter_ignores_unknown_names() {
        let catalog = Catalog::builtin();
        let selection = filter(&catalog, &["CODEGUARD+", "NoSuchBench"]);
        assert_eq!(selection.len(), 1);
        assert_eq!(selection.records()[0].id, "codeguard");
    }

    #[test]
    fn test_filter_empty_names() {
        let catalog = Catalog::builtin();
        let names: Vec<String> = vec![];
        assert!(filter(&catalog, &names).is_empty());
    }

    #[test]
    fn test_filter_duplicate_names_select_once() {
        let catalog = Catalog::builtin();
        let selection = filter(&catalog, &["SecCodePLT", "SecCodePLT"]);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_all_selects_whole_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(Selection::all(&catalog).len(), catalog.len());
    }
}
