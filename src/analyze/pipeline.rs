use crate::analyze::{
    AssigneeAggregator, BugLinkIndex, ClassifiedIssues, Highlights, IssueReport, RiskFilter,
};
use crate::model::{IssueRecord, ReportConfig};

/// Turns one export into both reports. Every stage works on the previous stage's output only,
/// so the same input always gives the same report.
pub fn analyze(issues: &[IssueRecord], config: &ReportConfig) -> IssueReport {
    let classified = ClassifiedIssues::from_issues(issues);
    let link_index = BugLinkIndex::from_bugs(&classified.bugs);
    let summary = classified.aggregate_assignees(&link_index);
    let at_risk = classified.at_risk_issues(config);
    let highlights = Highlights::from_summary(&summary);
    IssueReport::new(summary, at_risk, highlights)
}
