use crate::model::{IssueRecord, IssueType};
use crate::source::{InputError, IssueSource};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const ISSUE_TYPE_COLUMN: &str = "Issue Type";
pub const ISSUE_KEY_COLUMN: &str = "Issue key";
pub const ASSIGNEE_COLUMN: &str = "Assignee";
pub const ORIGINAL_ESTIMATE_COLUMN: &str = "Original estimate";
pub const TIME_SPENT_COLUMN: &str = "Time Spent";
pub const STATUS_COLUMN: &str = "Status";

#[derive(Debug, Clone)]
pub struct CsvIssueSource {
    path: PathBuf,
}

impl CsvIssueSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl IssueSource for CsvIssueSource {
    fn read_issues(&self, link_columns: &[String]) -> Result<Vec<IssueRecord>, InputError> {
        let file = File::open(&self.path)?;
        read_issues_from(file, link_columns)
    }
}

/// Parses a comma-delimited export with a header row.
pub fn read_issues_from<R: Read>(
    reader: R,
    link_columns: &[String],
) -> Result<Vec<IssueRecord>, InputError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers, link_columns)?;

    let mut issues = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        issues.push(columns.issue_from(&record, index + 1)?);
    }
    Ok(issues)
}

/// Positions of the typed fields, fixed once from the header row.
struct ColumnIndex {
    issue_type: usize,
    issue_key: usize,
    assignee: usize,
    original_estimate: usize,
    time_spent: usize,
    status: usize,
    links: Vec<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord, link_columns: &[String]) -> Result<Self, InputError> {
        // Repeated headers resolve to their first occurrence.
        let find = |name: &str| {
            headers
                .iter()
                .position(|header| header.trim_start_matches('\u{feff}') == name)
                .ok_or_else(|| InputError::MissingColumn(name.to_string()))
        };
        Ok(Self {
            issue_type: find(ISSUE_TYPE_COLUMN)?,
            issue_key: find(ISSUE_KEY_COLUMN)?,
            assignee: find(ASSIGNEE_COLUMN)?,
            original_estimate: find(ORIGINAL_ESTIMATE_COLUMN)?,
            time_spent: find(TIME_SPENT_COLUMN)?,
            status: find(STATUS_COLUMN)?,
            links: link_columns
                .iter()
                .map(|column| find(column))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    fn issue_from(&self, record: &StringRecord, row: usize) -> Result<IssueRecord, InputError> {
        Ok(IssueRecord {
            issue_key: cell(record, self.issue_key).unwrap_or_default(),
            issue_type: IssueType::from_name(record.get(self.issue_type).unwrap_or("")),
            assignee: cell(record, self.assignee),
            original_estimate: seconds(record, self.original_estimate, row, ORIGINAL_ESTIMATE_COLUMN)?,
            time_spent: seconds(record, self.time_spent, row, TIME_SPENT_COLUMN)?,
            status: cell(record, self.status),
            outward_links: self.links.iter().map(|&index| cell(record, index)).collect(),
        })
    }
}

/// Placeholders spreadsheet and tracker exports write into empty cells.
const MISSING_VALUE_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn cell(record: &StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .filter(|value| !value.is_empty() && !MISSING_VALUE_TOKENS.contains(value))
        .map(String::from)
}

fn seconds(
    record: &StringRecord,
    index: usize,
    row: usize,
    column: &str,
) -> Result<Option<f64>, InputError> {
    cell(record, index)
        .map(|value| match value.parse::<f64>() {
            Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds),
            _ => Err(InputError::InvalidNumber {
                row,
                column: column.to_string(),
                value,
            }),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReportConfig;
    use std::io::Write;

    const HEADER: &str = "Issue Type,Issue key,Assignee,Original estimate,Time Spent,Status,Outward issue link (Blocks),Outward issue link (Problem/Incident)";

    fn link_columns() -> Vec<String> {
        ReportConfig::default().link_columns
    }

    fn parse(body: &str) -> Result<Vec<IssueRecord>, InputError> {
        let csv = format!("{HEADER}\n{body}");
        read_issues_from(csv.as_bytes(), &link_columns())
    }

    #[test]
    fn test_reads_typed_rows() {
        let issues = parse(
            "Story,S1,Ann,3600,1800,In Progress,,\n\
             Bug,B1,Ann,,3600,Open,S1,\n\
             Epic,E1,Bob,,,Done,,\n",
        )
        .unwrap();
        assert_eq!(issues.len(), 3);

        assert_eq!(issues[0].issue_type, IssueType::Story);
        assert_eq!(issues[0].issue_key, "S1");
        assert_eq!(issues[0].assignee.as_deref(), Some("Ann"));
        assert_eq!(issues[0].original_estimate, Some(3600.0));
        assert_eq!(issues[0].time_spent, Some(1800.0));
        assert_eq!(issues[0].status.as_deref(), Some("In Progress"));
        assert_eq!(issues[0].outward_links, vec![None, None]);

        assert_eq!(issues[1].issue_type, IssueType::Bug);
        assert_eq!(issues[1].original_estimate, None);
        assert_eq!(issues[1].outward_links, vec![Some("S1".to_string()), None]);

        assert_eq!(issues[2].issue_type, IssueType::Other);
    }

    #[test]
    fn test_empty_cells_are_absent() {
        let issues = parse("Story,S1, ,,,,,\n").unwrap();
        assert_eq!(issues[0].assignee, None);
        assert_eq!(issues[0].original_estimate, None);
        assert_eq!(issues[0].time_spent, None);
        assert_eq!(issues[0].status, None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Issue Type,Issue key,Assignee,Time Spent,Status,Outward issue link (Blocks),Outward issue link (Problem/Incident)\n";
        let err = read_issues_from(csv.as_bytes(), &link_columns()).unwrap_err();
        assert!(matches!(err, InputError::MissingColumn(ref column) if column == "Original estimate"));
        assert_eq!(err.to_string(), "Missing required column 'Original estimate'");
    }

    #[test]
    fn test_missing_link_column() {
        let csv = "Issue Type,Issue key,Assignee,Original estimate,Time Spent,Status,Outward issue link (Blocks)\n";
        let err = read_issues_from(csv.as_bytes(), &link_columns()).unwrap_err();
        assert!(
            matches!(err, InputError::MissingColumn(ref column) if column == "Outward issue link (Problem/Incident)")
        );
    }

    #[test]
    fn test_invalid_number_reports_row_and_column() {
        let err = parse("Story,S1,Ann,3600,1800,Open,,\nStory,S2,Ann,2h,,Open,,\n").unwrap_err();
        match err {
            InputError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Original estimate");
                assert_eq!(value, "2h");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_value_tokens_are_absent() {
        let issues = parse(
            "Story,S1,Ann,3600,3600,Open,,\n\
             Story,S2,Ann,NaN,NaN,Open,N/A,null\n\
             Story,S3,NA,#N/A,nan,NULL,,\n",
        )
        .unwrap();
        assert_eq!(issues[1].original_estimate, None);
        assert_eq!(issues[1].time_spent, None);
        assert_eq!(issues[1].outward_links, vec![None, None]);
        assert_eq!(issues[2].assignee, None);
        assert_eq!(issues[2].original_estimate, None);
        assert_eq!(issues[2].time_spent, None);
        assert_eq!(issues[2].status, None);

        let report = crate::analyze::analyze(&issues, &ReportConfig::default());
        let ann = report
            .summary
            .iter()
            .find(|row| row.assignee.as_deref() == Some("Ann"))
            .unwrap();
        assert_eq!(ann.issues_linked, 2);
        assert_eq!(ann.sum_original_estimate_hours, 1.0);
        assert_eq!(ann.sum_time_spent_on_stories_hours, 1.0);
    }

    #[test]
    fn test_non_finite_and_negative_times_are_rejected() {
        for value in ["inf", "-inf", "infinity", "-60"] {
            let err = parse(&format!("Story,S1,Ann,3600,{value},Open,,\n")).unwrap_err();
            match err {
                InputError::InvalidNumber { row, column, value: cell } => {
                    assert_eq!(row, 1);
                    assert_eq!(column, "Time Spent");
                    assert_eq!(cell, value);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_ragged_row_is_fatal() {
        let err = parse("Story,S1,Ann\n").unwrap_err();
        assert!(matches!(err, InputError::Csv(_)));
    }

    #[test]
    fn test_repeated_header_uses_first_occurrence() {
        let csv = "Issue Type,Issue key,Assignee,Original estimate,Time Spent,Status,Outward issue link (Blocks),Outward issue link (Blocks)\n\
                   Bug,B1,Ann,,60,Open,S1,S2\n";
        let columns = vec!["Outward issue link (Blocks)".to_string()];
        let issues = read_issues_from(csv.as_bytes(), &columns).unwrap();
        assert_eq!(issues[0].outward_links, vec![Some("S1".to_string())]);
    }

    #[test]
    fn test_byte_order_mark_and_column_order() {
        let csv = "\u{feff}Status,Issue key,Issue Type,Assignee,Time Spent,Original estimate,Outward issue link (Problem/Incident),Outward issue link (Blocks)\n\
                   Done,S1,Story,Ann,10,20,B,A\n";
        let issues = read_issues_from(csv.as_bytes(), &link_columns()).unwrap();
        assert_eq!(issues[0].issue_type, IssueType::Story);
        assert_eq!(issues[0].original_estimate, Some(20.0));
        assert_eq!(issues[0].time_spent, Some(10.0));
        assert_eq!(
            issues[0].outward_links,
            vec![Some("A".to_string()), Some("B".to_string())]
        );
    }

    #[test]
    fn test_csv_issue_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "Story,S1,Ann,3600,,Open,,").unwrap();
        let issues = CsvIssueSource::new(file.path())
            .read_issues(&link_columns())
            .unwrap();
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_csv_issue_source_missing_file() {
        let err = CsvIssueSource::new("does/not/exist.csv")
            .read_issues(&link_columns())
            .unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }
}
