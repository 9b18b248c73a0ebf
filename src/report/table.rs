use crate::analyze::{AssigneeSummary, AtRiskIssue};

pub const SUMMARY_HEADINGS: [&str; 13] = [
    "Assignee",
    "Issues Linked",
    "Number of Bugs",
    "Sum of Original Estimated Time (hours)",
    "Sum of Time Spent on Stories (hours)",
    "Sum of Time Spent on Bugs (hours)",
    "Total Time Spent (hours)",
    "Efficiency Ratio",
    "Bugs to Issues Ratio",
    "Average Time per Bug (hours)",
    "Average Time per Issue (hours)",
    "Proportion on Bugs (%)",
    "Proportion on Stories (%)",
];

pub const AT_RISK_HEADINGS: [&str; 6] = [
    "Assignee",
    "Issue key",
    "Status",
    "Original estimate",
    "Time Spent",
    "Percentage",
];

/// A report projected to heading names and display cells.
pub trait ReportTable {
    fn headings(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<String>>;
}

impl ReportTable for [AssigneeSummary] {
    fn headings(&self) -> Vec<String> {
        SUMMARY_HEADINGS.iter().map(|h| h.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| {
                vec![
                    text(&row.assignee),
                    row.issues_linked.to_string(),
                    row.number_of_bugs.to_string(),
                    decimal(row.sum_original_estimate_hours),
                    decimal(row.sum_time_spent_on_stories_hours),
                    decimal(row.sum_time_spent_on_bugs_hours),
                    decimal(row.total_time_spent_hours),
                    decimal(row.efficiency_ratio),
                    decimal(row.bugs_to_issues_ratio),
                    decimal(row.average_time_per_bug_hours),
                    decimal(row.average_time_per_issue_hours),
                    decimal(row.proportion_on_bugs_pct),
                    decimal(row.proportion_on_stories_pct),
                ]
            })
            .collect()
    }
}

impl ReportTable for [AtRiskIssue] {
    fn headings(&self) -> Vec<String> {
        AT_RISK_HEADINGS.iter().map(|h| h.to_string()).collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|issue| {
                vec![
                    text(&issue.assignee),
                    issue.issue_key.clone(),
                    text(&issue.status),
                    decimal(issue.original_estimate_hours),
                    decimal(issue.time_spent_hours),
                    decimal(issue.percentage),
                ]
            })
            .collect()
    }
}

pub fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Shortest round-trip form, whole numbers keeping one decimal (`2.0`, `0.5`, `66.66666666666667`).
pub fn decimal(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
