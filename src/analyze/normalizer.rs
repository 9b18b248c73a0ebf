use crate::analyze::{Bug, ClassifiedIssues, Story};
use crate::model::{IssueRecord, IssueType};
use tracing::debug;

impl ClassifiedIssues {
    /// Splits the export into Stories and Bugs with their times zero-filled.
    /// Any other issue type is dropped.
    pub fn from_issues(issues: &[IssueRecord]) -> Self {
        let classified = issues
            .iter()
            .fold(Self::default(), |mut acc, issue| {
                match issue.issue_type {
                    IssueType::Story => acc.stories.push(Story::from_issue(issue)),
                    IssueType::Bug => acc.bugs.push(Bug::from_issue(issue)),
                    IssueType::Other => {}
                }
                acc
            });
        debug!(
            stories = classified.stories.len(),
            bugs = classified.bugs.len(),
            skipped = issues.len() - classified.stories.len() - classified.bugs.len(),
            "Classified issues"
        );
        classified
    }
}

impl Story {
    fn from_issue(issue: &IssueRecord) -> Self {
        Self {
            issue_key: issue.issue_key.clone(),
            assignee: issue.assignee.clone(),
            original_estimate: issue.original_estimate.unwrap_or(0.0),
            time_spent: issue.time_spent.unwrap_or(0.0),
            status: issue.status.clone(),
        }
    }
}

impl Bug {
    fn from_issue(issue: &IssueRecord) -> Self {
        Self {
            issue_key: issue.issue_key.clone(),
            assignee: issue.assignee.clone(),
            original_estimate: issue.original_estimate,
            time_spent: issue.time_spent.unwrap_or(0.0),
            status: issue.status.clone(),
            outward_links: issue.outward_links.clone(),
        }
    }
}
