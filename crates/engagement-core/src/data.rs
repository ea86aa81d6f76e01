// File: crates/engagement-core/src/data.rs
// Summary: CSV records with named fields, loading, and text-to-number coercion.

use std::io;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ChartError, Result};

/// One cell of a record.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

/// One input row: field name to value, in header order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self { Self::default() }

    /// Builder form of [`Record::insert`] taking raw text.
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, Value::Text(text.into()));
        self
    }

    /// Set `name` to `value`, replacing an existing field of that name.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Field as text. Numbers are not formatted back.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Field as a number, once coerced.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Number(v)) => Some(*v),
            _ => None,
        }
    }

    /// Categorical key of this record; `row` is only used for the error.
    pub fn category(&self, name: &str, row: usize) -> Result<&str> {
        self.text(name).ok_or_else(|| ChartError::MissingField { row, field: name.to_string() })
    }
}

/// Read a CSV file with a header row into records.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let rdr = csv_builder()
        .from_path(path)
        .map_err(|source| ChartError::Open { path: path.to_path_buf(), source })?;
    let records = read_records(rdr)?;
    debug!(path = %path.display(), rows = records.len(), "loaded csv");
    Ok(records)
}

/// Read CSV text (header row plus data rows) from any reader.
pub fn from_reader<R: io::Read>(reader: R) -> Result<Vec<Record>> {
    read_records(csv_builder().from_reader(reader))
}

fn csv_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    // short rows leave trailing fields absent; long rows drop the extras
    b.has_headers(true).flexible(true);
    b
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Record>> {
    let headers = rdr.headers()?.clone();
    let mut out = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let mut rec = Record::new();
        for (name, cell) in headers.iter().zip(row.iter()) {
            rec.insert(name, Value::Text(cell.to_string()));
        }
        out.push(rec);
    }
    Ok(out)
}

/// What coercion does with text that is not a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoercionPolicy {
    /// Store `NaN` and log a warning.
    #[default]
    Lenient,
    /// Stop at the first failure.
    Strict,
}

/// Replace the text of each named field with its numeric value.
///
/// Blank text reads as `0`. Returns how many cells failed to parse; under
/// [`CoercionPolicy::Strict`] the first failure is returned as an error
/// instead. Rows are reported 1-based, counting data rows only.
pub fn coerce_numeric(records: &mut [Record], fields: &[&str], policy: CoercionPolicy) -> Result<usize> {
    let mut failures = 0;
    for (i, rec) in records.iter_mut().enumerate() {
        let row = i + 1;
        for &field in fields {
            let parsed = match rec.get(field) {
                Some(Value::Number(_)) => continue,
                Some(Value::Text(s)) => parse_number(s).ok_or_else(|| ChartError::InvalidNumber {
                    row,
                    field: field.to_string(),
                    value: s.clone(),
                }),
                None => Err(ChartError::MissingField { row, field: field.to_string() }),
            };
            let value = match (parsed, policy) {
                (Ok(v), _) => v,
                (Err(e), CoercionPolicy::Strict) => return Err(e),
                (Err(e), CoercionPolicy::Lenient) => {
                    warn!(error = %e, "coercing to NaN");
                    failures += 1;
                    f64::NAN
                }
            };
            rec.insert(field, Value::Number(value));
        }
    }
    if failures > 0 {
        debug!(failures, "numeric coercion finished with failures");
    }
    Ok(failures)
}

/// Finite decimal literals only; `inf`, `NaN` and overflowing exponents fail.
fn parse_number(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}
