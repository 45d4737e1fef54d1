//! @ai:module:intent Benchmark catalog definitions and loading
//! @ai:module:layer domain
//! @ai:module:public_api Catalog, BenchmarkRecord, ValidationMethod, ReferenceLists, CatalogLoader, SchemaIssue

pub mod builtin;
pub mod loader;
pub mod record;
pub mod reference;
pub mod schema;
pub mod store;

pub use builtin::builtin_records;
pub use loader::{CatalogLoader, CatalogLoaderTrait};
pub use record::{BenchmarkRecord, ValidationMethod};
pub use reference::{ReferenceLists, CWE_TOP_25_2023, KNOWN_LANGUAGES};
pub use schema::{SchemaChecker, SchemaIssue, SchemaIssueKind, REFERENCE_OWNER};
pub use store::Catalog;
