//! Raw CSV parsing: a pasted or uploaded text blob becomes a header row
//! plus string rows. Dialect handling (quoting, embedded commas and
//! newlines) is the `csv` crate's concern; typing and schema validation
//! happen later in [`super::dataset`].

use super::dataset::DatasetError;

/// Header names plus untyped data rows, exactly as they appeared in the
/// input (cells trimmed).
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Parse a CSV text blob. The reader runs in flexible mode so a row with
/// the wrong cell count surfaces as a schema violation with a row number
/// instead of a library error.
pub fn parse(text: &str) -> Result<RawTable, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|err| DatasetError::Malformed(err.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| DatasetError::Malformed(err.to_string()))?;
        // A whitespace-only line trims down to one empty cell; skip it.
        if record.len() == 1 && record.get(0).map(str::is_empty).unwrap_or(true) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { columns, rows })
}
