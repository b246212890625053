#![forbid(unsafe_code)]

pub mod csv_source;
pub mod repository;

pub use csv_source::{CsvQuestionSource, REQUIRED_COLUMNS, load_from_reader};
pub use repository::{InMemoryQuestionSource, LoadError, QuestionSource};
