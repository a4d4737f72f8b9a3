/// Conjugation-page layer: HTTP fetch and the typed document adapter.
pub mod document;
pub mod errors;
pub mod fetch;

pub use document::{tense_sections, FormEntry, TenseSection};
pub use errors::PageError;
pub use fetch::fetch;
