//! Typed dataset model and schema validation.
//!
//! The schema is fixed: four columns in order — label (text), width
//! (positive number), height (signed number), category (text, at most
//! ten distinct values). Records are sorted by height ascending before
//! anything downstream sees them; validation reports only the first
//! violation found.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::csv::{self, RawTable};

/// The schema is exactly four columns wide.
pub const COLUMN_COUNT: usize = 4;

/// Maximum distinct category values a dataset may carry.
pub const MAX_CATEGORIES: usize = 10;

/// One CSV row, typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub label: String,
    pub width: f64,
    pub height: f64,
    pub category: String,
}

/// A validated dataset: the four header names plus records sorted by
/// height ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub columns: [String; COLUMN_COUNT],
    pub records: Vec<Record>,
}

/// First validation violation found in a submission. Row numbers are
/// 1-based data-row positions (the header is row zero).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("expected exactly 4 columns, found {found}")]
    ColumnCount { found: usize },
    #[error("row {row} has {found} cells, expected 4")]
    RaggedRow { row: usize, found: usize },
    #[error("no data rows")]
    NoRows,
    #[error("row {row}, column {column}: {value:?} is not a number")]
    NotNumeric {
        row: usize,
        column: String,
        value: String,
    },
    #[error("row {row}: width must be positive, got {value}")]
    NonPositiveWidth { row: usize, value: f64 },
    #[error("{count} distinct categories exceed the limit of 10")]
    TooManyCategories { count: usize },
    #[error("malformed CSV: {0}")]
    Malformed(String),
}

impl Dataset {
    /// Full ingestion pipeline: parse, validate, type, sort.
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        Self::from_table(csv::parse(text)?)
    }

    pub fn from_table(table: RawTable) -> Result<Self, DatasetError> {
        let columns: [String; COLUMN_COUNT] = match table.columns.try_into() {
            Ok(columns) => columns,
            Err(columns) => {
                return Err(DatasetError::ColumnCount {
                    found: columns.len(),
                })
            }
        };
        if table.rows.is_empty() {
            return Err(DatasetError::NoRows);
        }

        let mut records = Vec::with_capacity(table.rows.len());
        let mut categories: Vec<&str> = Vec::new();
        for (idx, row) in table.rows.iter().enumerate() {
            let row_no = idx + 1;
            if row.len() != COLUMN_COUNT {
                return Err(DatasetError::RaggedRow {
                    row: row_no,
                    found: row.len(),
                });
            }
            let width = parse_number(&row[1], row_no, &columns[1])?;
            let height = parse_number(&row[2], row_no, &columns[2])?;
            if width <= 0.0 {
                return Err(DatasetError::NonPositiveWidth {
                    row: row_no,
                    value: width,
                });
            }
            if !categories.iter().any(|known| *known == row[3]) {
                categories.push(&row[3]);
            }
            records.push(Record {
                label: row[0].clone(),
                width,
                height,
                category: row[3].clone(),
            });
        }
        if categories.len() > MAX_CATEGORIES {
            return Err(DatasetError::TooManyCategories {
                count: categories.len(),
            });
        }

        // Stable sort: equal heights keep their input order.
        records.sort_by(|a, b| a.height.total_cmp(&b.height));

        Ok(Self { columns, records })
    }

    /// Distinct categories in first-seen order over the sorted records.
    pub fn distinct_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            if !seen.iter().any(|known| *known == record.category) {
                seen.push(&record.category);
            }
        }
        seen
    }

    pub fn total_width(&self) -> f64 {
        self.records.iter().map(|r| r.width).sum()
    }

    /// (min, max) of the height column. Records are sorted by height, so
    /// the extent is the first and last record.
    pub fn height_extent(&self) -> (f64, f64) {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => (first.height, last.height),
            _ => (0.0, 0.0),
        }
    }
}

fn parse_number(raw: &str, row: usize, column: &str) -> Result<f64, DatasetError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DatasetError::NotNumeric {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
segment,share,growth,division
alpha,10,5,a
beta,20,-3,b
gamma,5,12,a
";

    #[test]
    fn accepts_valid_input_and_sorts_by_height() {
        let dataset = Dataset::from_csv(VALID).unwrap();
        assert_eq!(dataset.columns[1], "share");
        let heights: Vec<f64> = dataset.records.iter().map(|r| r.height).collect();
        assert_eq!(heights, vec![-3.0, 5.0, 12.0]);
        assert_eq!(dataset.records[0].label, "beta");
    }

    #[test]
    fn total_width_is_sum_of_widths() {
        let dataset = Dataset::from_csv(VALID).unwrap();
        assert_eq!(dataset.total_width(), 35.0);
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = Dataset::from_csv("a,b,c\n1,2,3\n").unwrap_err();
        assert_eq!(err, DatasetError::ColumnCount { found: 3 });
        let err = Dataset::from_csv("a,b,c,d,e\n1,2,3,4,5\n").unwrap_err();
        assert_eq!(err, DatasetError::ColumnCount { found: 5 });
    }

    #[test]
    fn rejects_ragged_row_with_position() {
        let err = Dataset::from_csv("l,w,h,c\nx,1,2,a\ny,1,2\n").unwrap_err();
        assert_eq!(err, DatasetError::RaggedRow { row: 2, found: 3 });
    }

    #[test]
    fn rejects_header_only_input() {
        let err = Dataset::from_csv("l,w,h,c\n").unwrap_err();
        assert_eq!(err, DatasetError::NoRows);
    }

    #[test]
    fn rejects_non_numeric_height_before_rendering() {
        let err = Dataset::from_csv("l,w,h,c\nx,1,tall,a\n").unwrap_err();
        assert_eq!(
            err,
            DatasetError::NotNumeric {
                row: 1,
                column: "h".to_string(),
                value: "tall".to_string(),
            }
        );
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let err = Dataset::from_csv("l,w,h,c\nx,1,NaN,a\n").unwrap_err();
        assert!(matches!(err, DatasetError::NotNumeric { .. }));
        let err = Dataset::from_csv("l,w,h,c\nx,inf,2,a\n").unwrap_err();
        assert!(matches!(err, DatasetError::NotNumeric { .. }));
    }

    #[test]
    fn rejects_zero_or_negative_width() {
        let err = Dataset::from_csv("l,w,h,c\nx,0,2,a\n").unwrap_err();
        assert_eq!(err, DatasetError::NonPositiveWidth { row: 1, value: 0.0 });
        let err = Dataset::from_csv("l,w,h,c\nx,-4,2,a\n").unwrap_err();
        assert!(matches!(err, DatasetError::NonPositiveWidth { row: 1, .. }));
    }

    #[test]
    fn reports_first_violation_only() {
        // Row 1 has a bad width AND row 2 has a bad height; row 1 wins.
        let err = Dataset::from_csv("l,w,h,c\nx,oops,2,a\ny,1,oops,b\n").unwrap_err();
        assert_eq!(
            err,
            DatasetError::NotNumeric {
                row: 1,
                column: "w".to_string(),
                value: "oops".to_string(),
            }
        );
    }

    fn csv_with_categories(n: usize) -> String {
        let mut out = String::from("l,w,h,c\n");
        for i in 0..n {
            out.push_str(&format!("row{i},1,{i},cat{i}\n"));
        }
        out
    }

    #[test]
    fn accepts_exactly_ten_categories() {
        let dataset = Dataset::from_csv(&csv_with_categories(10)).unwrap();
        assert_eq!(dataset.distinct_categories().len(), 10);
    }

    #[test]
    fn rejects_eleven_categories() {
        let err = Dataset::from_csv(&csv_with_categories(11)).unwrap_err();
        assert_eq!(err, DatasetError::TooManyCategories { count: 11 });
    }

    #[test]
    fn distinct_categories_follow_sorted_order() {
        // After the height sort, category "b" (height -3) is seen first.
        let dataset = Dataset::from_csv(VALID).unwrap();
        assert_eq!(dataset.distinct_categories(), vec!["b", "a"]);
    }

    #[test]
    fn height_extent_spans_min_to_max() {
        let dataset = Dataset::from_csv(VALID).unwrap();
        assert_eq!(dataset.height_extent(), (-3.0, 12.0));
    }
}
