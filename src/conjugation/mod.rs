/// Conjugation domain layer: language tables, parsing, querying.
pub mod errors;
pub mod language;
pub mod query;
pub mod table;

pub use errors::ConjugError;
pub use language::Language;
pub use query::query;
pub use table::parse_tenses;
