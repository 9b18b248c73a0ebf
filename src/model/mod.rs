mod config;
mod issue;
mod result;

pub use config::ReportConfig;
pub use issue::{IssueRecord, IssueType};
pub use result::Result;
