mod view;
pub use view::StudioView;

mod sample;
pub use sample::sample_csv;

use crate::core::dataset::{DatasetError, MAX_CATEGORIES};
use crate::core::format;
use crate::t;

/// Localized message for the first violation found in a submission.
pub(crate) fn error_message(error: &DatasetError) -> String {
    match error {
        DatasetError::ColumnCount { found } => {
            t!("err-column-count", found = (*found as i64))
        }
        DatasetError::RaggedRow { row, found } => {
            t!("err-ragged-row", row = (*row as i64), found = (*found as i64))
        }
        DatasetError::NoRows => t!("err-no-rows"),
        DatasetError::NotNumeric { row, column, value } => t!(
            "err-not-numeric",
            row = (*row as i64),
            column = column.as_str(),
            value = value.as_str()
        ),
        DatasetError::NonPositiveWidth { row, value } => t!(
            "err-nonpositive-width",
            row = (*row as i64),
            value = format::value(*value)
        ),
        DatasetError::TooManyCategories { count } => t!(
            "err-too-many-categories",
            count = (*count as i64),
            max = (MAX_CATEGORIES as i64)
        ),
        DatasetError::Malformed(detail) => t!("err-malformed-csv", detail = detail.as_str()),
    }
}
