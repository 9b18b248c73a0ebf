mod delimited;
mod error;

pub use delimited::{read_issues_from, CsvIssueSource};
pub use error::InputError;

use crate::model::IssueRecord;

/// Where the flat issue export comes from.
pub trait IssueSource {
    /// Reads every row, resolving each configured link column into an outward-link slot.
    fn read_issues(&self, link_columns: &[String]) -> Result<Vec<IssueRecord>, InputError>;
}
