use crate::analyze::{Highlights, IssueReport};
use crate::model::Result;
use crate::report::table::{decimal, text};
use crate::report::{ReportSink, ReportTable, MARKDOWN_FILE_NAME};
use markdown_builder::Markdown;
use markdown_table::{Heading, HeadingAlignment, MarkdownTable};
use std::fs;
use std::path::{Path, PathBuf};

const UNASSIGNED: &str = "Unassigned";

/// Renders the whole report into a single markdown document.
#[derive(Debug, Clone)]
pub struct MarkdownReportSink {
    dir: PathBuf,
    title: String,
}

impl MarkdownReportSink {
    pub fn new(dir: impl AsRef<Path>, title: impl ToString) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            title: title.to_string(),
        }
    }

    pub fn render(&self, report: &IssueReport) -> Result<String> {
        let mut doc = Markdown::new();
        doc.header1(self.title.clone());
        doc.add_table("Assignee Summary", report.summary.as_slice())?;
        doc.add_table("At-Risk Issues", report.at_risk.as_slice())?;
        doc.add_highlights(&report.highlights)?;
        Ok(doc.render())
    }
}

impl ReportSink for MarkdownReportSink {
    fn write_report(&self, report: &IssueReport) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(MARKDOWN_FILE_NAME);
        fs::write(&path, self.render(report)?)?;
        Ok(vec![path])
    }
}

trait MarkdownExt {
    fn add_table<T: ReportTable + ?Sized>(&mut self, title: &str, table: &T) -> Result<()>;
    fn add_highlights(&mut self, highlights: &Highlights) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_table<T: ReportTable + ?Sized>(&mut self, title: &str, table: &T) -> Result<()> {
        self.header2(title.to_string());
        let rows = table
            .rows()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .enumerate()
                    .map(|(index, cell)| match index {
                        0 if cell.is_empty() => format!("*{UNASSIGNED}*"),
                        _ => cell,
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        if rows.is_empty() {
            self.paragraph("*No rows.*".to_string());
            return Ok(());
        }

        let header = table
            .headings()
            .into_iter()
            .enumerate()
            .map(|(index, heading)| match index {
                0 => Heading::new(heading, Some(HeadingAlignment::Left)),
                _ => Heading::new(heading, Some(HeadingAlignment::Right)),
            })
            .collect::<Vec<_>>();
        self.paragraph(render_table(rows, header)?);
        Ok(())
    }

    fn add_highlights(&mut self, highlights: &Highlights) -> Result<()> {
        self.header2("Highlights".to_string());

        let mut table = vec![];
        if let Some(lowest) = &highlights.lowest_efficiency {
            table.push(vec![
                "Lowest efficiency ratio".to_string(),
                assignee_name(&lowest.assignee),
                decimal(lowest.value),
            ]);
        }
        if let Some(highest) = &highlights.highest_bugs_to_issues {
            table.push(vec![
                "Highest bugs to issues ratio".to_string(),
                assignee_name(&highest.assignee),
                decimal(highest.value),
            ]);
        }
        for share in &highlights.time_distribution {
            table.push(vec![
                "Share of total hours".to_string(),
                assignee_name(&share.assignee),
                format!("{:.1}% ({} h)", share.share_pct, decimal(share.hours)),
            ]);
        }
        if table.is_empty() {
            self.paragraph("*No rows.*".to_string());
            return Ok(());
        }

        let header = vec![
            Heading::new("".to_string(), None),
            Heading::new("Assignee".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("Value".to_string(), Some(HeadingAlignment::Right)),
        ];
        self.paragraph(render_table(table, header)?);
        Ok(())
    }
}

fn render_table(rows: Vec<Vec<String>>, header: Vec<Heading>) -> Result<String> {
    let mut md_table = MarkdownTable::new(rows);
    md_table.with_headings(header);
    md_table
        .as_markdown()
        .map_err(|_| "Failed to render markdown table".into())
}

fn assignee_name(assignee: &Option<String>) -> String {
    match text(assignee) {
        name if name.is_empty() => format!("*{UNASSIGNED}*"),
        name => name,
    }
}
