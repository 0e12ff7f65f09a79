use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use contracare_core::{Method, MethodScores, ReferenceRow};

use crate::error::TableError;

pub const CONDITION_COLUMN: &str = "Condition";
pub const SUB_CONDITION_COLUMN: &str = "Sub-Condition";

/// The MEC reference table.
///
/// Loaded once at startup and never mutated afterwards; callers hold it by
/// shared reference for the rest of the process.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    rows: Vec<ReferenceRow>,
}

impl ReferenceTable {
    /// Load the table from a CSV file.
    ///
    /// Any unreadable file, missing column or non-numeric score cell fails the
    /// whole load. Empty score cells load as NaN.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let file = File::open(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), rows = table.len(), "reference table loaded");
        Ok(table)
    }

    /// Parse CSV from any reader. Columns are located by header name, so
    /// their order in the file does not matter and extra columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        let mut csv = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let columns = Columns::resolve(csv.headers()?)?;

        let mut rows = Vec::new();
        for record in csv.records() {
            rows.push(columns.row(&record?)?);
        }
        Ok(Self { rows })
    }

    pub fn from_rows(rows: Vec<ReferenceRow>) -> Self {
        Self { rows }
    }

    /// Rows in source order.
    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Header positions of the columns the table needs.
struct Columns {
    condition: usize,
    sub_condition: usize,
    scores: [usize; Method::COUNT],
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, TableError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| TableError::MissingColumn(name.to_string()))
        };

        let condition = find(CONDITION_COLUMN)?;
        let sub_condition = find(SUB_CONDITION_COLUMN)?;
        let mut scores = [0; Method::COUNT];
        for (slot, method) in scores.iter_mut().zip(Method::ALL) {
            *slot = find(method.code())?;
        }

        Ok(Self {
            condition,
            sub_condition,
            scores,
        })
    }

    fn row(&self, record: &StringRecord) -> Result<ReferenceRow, TableError> {
        let line = record.position().map_or(0, |p| p.line());
        let field = |idx: usize| record.get(idx).unwrap_or_default();

        let mut scores = [f64::NAN; Method::COUNT];
        for ((slot, method), &idx) in scores.iter_mut().zip(Method::ALL).zip(&self.scores) {
            let cell = field(idx);
            *slot = parse_score(cell).ok_or_else(|| TableError::MalformedScore {
                line,
                column: method.code(),
                value: cell.to_string(),
            })?;
        }

        Ok(ReferenceRow::new(
            field(self.condition),
            field(self.sub_condition),
            MethodScores::new(scores),
        ))
    }
}

/// Empty cells are missing scores (NaN); anything else must parse as a number.
fn parse_score(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(f64::NAN);
    }
    cell.parse().ok()
}
