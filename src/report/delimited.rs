use crate::analyze::IssueReport;
use crate::model::Result;
use crate::report::{ReportSink, ReportTable, AT_RISK_FILE_NAME, SUMMARY_FILE_NAME};
use csv::Writer;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes both tables as comma-delimited files into one directory.
#[derive(Debug, Clone)]
pub struct CsvReportSink {
    dir: PathBuf,
}

impl CsvReportSink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl ReportSink for CsvReportSink {
    fn write_report(&self, report: &IssueReport) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)?;
        let summary_path = self.dir.join(SUMMARY_FILE_NAME);
        write_table(&summary_path, report.summary.as_slice())?;
        let at_risk_path = self.dir.join(AT_RISK_FILE_NAME);
        write_table(&at_risk_path, report.at_risk.as_slice())?;
        Ok(vec![summary_path, at_risk_path])
    }
}

fn write_table<T: ReportTable + ?Sized>(path: &Path, table: &T) -> Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(table.headings())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
