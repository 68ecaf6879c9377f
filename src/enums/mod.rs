//! Enumerated types.

mod language;

pub use language::Language;
