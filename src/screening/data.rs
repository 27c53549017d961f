//! Questionnaire dataset records and CSV loading.

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::error::LoadError;
use crate::questionnaire::{MAX_FEATURE_VALUE, QUESTIONS, QUESTION_COUNT};

/// Column holding the record identifier.
pub const ID_COLUMN: &str = "Number";
/// Column holding the ground-truth category label.
pub const LABEL_COLUMN: &str = "Depression State";

/// One row of the training dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionnaireRecord {
    /// Record identifier from the `Number` column
    pub id: String,
    /// Ordinal answers in questionnaire order (0 means unanswered)
    pub features: [u8; QUESTION_COUNT],
    /// Category label, e.g. "Moderate"
    pub label: String,
}

/// Load questionnaire records from a CSV file.
///
/// # Example
/// ```no_run
/// use moodscan::screening::data::load_records;
///
/// let records = load_records("data/Deepression.csv")?;
/// println!("Loaded {} records", records.len());
/// # Ok::<(), moodscan::error::LoadError>(())
/// ```
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<QuestionnaireRecord>, LoadError> {
    let path = path.as_ref();
    let start = Instant::now();
    let file = File::open(path)?;
    let records = read_records(file)?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "loaded questionnaire dataset"
    );
    Ok(records)
}

/// Parse questionnaire records from any CSV source with a header row.
///
/// Columns are located by name, so their order in the file does not matter
/// and extra columns are ignored.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<QuestionnaireRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let layout = ColumnLayout::resolve(&headers)?;

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let raw = result?;
        records.push(layout.parse_row(&raw, i + 1)?);
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(records)
}

/// Positions of the required columns within a header row.
struct ColumnLayout {
    id: usize,
    label: usize,
    features: [usize; QUESTION_COUNT],
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
        };

        let mut features = [0usize; QUESTION_COUNT];
        for (slot, question) in features.iter_mut().zip(QUESTIONS.iter()) {
            *slot = find(question.column)?;
        }

        Ok(ColumnLayout {
            id: find(ID_COLUMN)?,
            label: find(LABEL_COLUMN)?,
            features,
        })
    }

    fn parse_row(&self, raw: &StringRecord, row: usize) -> Result<QuestionnaireRecord, LoadError> {
        let cell = |idx: usize| raw.get(idx).unwrap_or("");

        let mut features = [0u8; QUESTION_COUNT];
        for ((slot, &idx), question) in features
            .iter_mut()
            .zip(self.features.iter())
            .zip(QUESTIONS.iter())
        {
            let value = cell(idx);
            *slot = parse_feature(value).ok_or_else(|| LoadError::InvalidValue {
                row,
                column: question.column.to_string(),
                value: value.to_string(),
            })?;
        }

        let label = cell(self.label);
        if label.is_empty() {
            return Err(LoadError::EmptyLabel { row });
        }

        Ok(QuestionnaireRecord {
            id: cell(self.id).to_string(),
            features,
            label: label.to_string(),
        })
    }
}

/// Parse an ordinal cell. Whole floats such as "3.0" are accepted since
/// spreadsheet exports often write integer columns that way.
fn parse_feature(value: &str) -> Option<u8> {
    let parsed = match value.parse::<u8>() {
        Ok(v) => v,
        Err(_) => {
            let float: f64 = value.parse().ok()?;
            if float.fract() != 0.0 || !(0.0..=f64::from(MAX_FEATURE_VALUE)).contains(&float) {
                return None;
            }
            float as u8
        }
    };
    (parsed <= MAX_FEATURE_VALUE).then_some(parsed)
}
