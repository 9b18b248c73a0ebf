mod delimited;
mod markdown;
mod table;

pub use delimited::CsvReportSink;
pub use markdown::MarkdownReportSink;
pub use table::ReportTable;

use crate::analyze::IssueReport;
use crate::model::Result;
use std::path::PathBuf;

pub const SUMMARY_FILE_NAME: &str = "Summary_Per_Assignee.csv";
pub const AT_RISK_FILE_NAME: &str = "Issues_Close_To_Estimate.csv";
pub const MARKDOWN_FILE_NAME: &str = "report.md";

/// Destination for a finished report. Returns the files it wrote.
pub trait ReportSink {
    fn write_report(&self, report: &IssueReport) -> Result<Vec<PathBuf>>;
}
