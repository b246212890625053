use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use log::{info, warn};
use quiz_core::model::QuestionBank;

use crate::repository::{LoadError, QuestionSource};

mod record;

use record::QuestionRecord;

/// Header columns every question file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["image_path", "answer", "wrong1", "wrong2", "wrong3"];

/// Question source backed by a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvQuestionSource {
    path: PathBuf,
}

impl CsvQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionSource for CsvQuestionSource {
    fn load(&self) -> Result<QuestionBank, LoadError> {
        let file = File::open(&self.path).map_err(|source| LoadError::Open {
            path: self.path.clone(),
            source,
        })?;
        let bank = load_from_reader(file)?;
        info!(
            "loaded {} questions from {}",
            bank.len(),
            self.path.display()
        );
        Ok(bank)
    }
}

/// Parse CSV question data from any reader.
///
/// Cells are trimmed and extra columns are ignored. Rows are numbered from 1,
/// not counting the header.
///
/// # Errors
///
/// Returns `LoadError::MissingColumn` if the header lacks a required column,
/// `LoadError::Csv` for malformed or ragged rows and `LoadError::InvalidRow`
/// for rows that fail question validation.
pub fn load_from_reader<R: Read>(reader: R) -> Result<QuestionBank, LoadError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|required| !headers.iter().any(|h| h == *required))
    {
        return Err(LoadError::MissingColumn { column });
    }

    let mut questions = Vec::new();
    for (idx, row) in reader.deserialize::<QuestionRecord>().enumerate() {
        let row_number = idx + 1;
        let question = row?.into_question().map_err(|source| {
            warn!("rejecting question row {row_number}: {source}");
            LoadError::InvalidRow {
                row: row_number,
                source,
            }
        })?;
        questions.push(question);
    }

    Ok(QuestionBank::new(questions))
}
