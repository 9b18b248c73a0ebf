use crate::analyze::{seconds_to_hours, AtRiskIssue, ClassifiedIssues};
use crate::model::ReportConfig;
use tracing::debug;

pub trait RiskFilter {
    fn at_risk_issues(&self, config: &ReportConfig) -> Vec<AtRiskIssue>;
}

impl RiskFilter for ClassifiedIssues {
    /// Open issues whose time spent reached the configured share of their estimate.
    /// Stories come first, then Bugs, each in input order.
    fn at_risk_issues(&self, config: &ReportConfig) -> Vec<AtRiskIssue> {
        let stories = self.stories.iter().map(|story| Candidate {
            assignee: &story.assignee,
            issue_key: &story.issue_key,
            status: &story.status,
            original_estimate: Some(story.original_estimate),
            time_spent: story.time_spent,
        });
        let bugs = self.bugs.iter().map(|bug| Candidate {
            assignee: &bug.assignee,
            issue_key: &bug.issue_key,
            status: &bug.status,
            original_estimate: bug.original_estimate,
            time_spent: bug.time_spent,
        });

        let at_risk = stories
            .chain(bugs)
            .filter_map(|candidate| candidate.into_at_risk(config))
            .collect::<Vec<_>>();
        debug!(at_risk = at_risk.len(), "Filtered at-risk issues");
        at_risk
    }
}

struct Candidate<'a> {
    assignee: &'a Option<String>,
    issue_key: &'a String,
    status: &'a Option<String>,
    original_estimate: Option<f64>,
    time_spent: f64,
}

impl Candidate<'_> {
    fn into_at_risk(self, config: &ReportConfig) -> Option<AtRiskIssue> {
        if self.status.as_deref() == Some(config.done_status.as_str()) {
            return None;
        }
        let original_estimate_hours = seconds_to_hours(self.original_estimate?);
        let time_spent_hours = seconds_to_hours(self.time_spent);
        let percentage = time_spent_hours / original_estimate_hours * 100.0;
        // A zero estimate gives NaN or infinity, neither of which is a real overrun.
        if !percentage.is_finite() || percentage < config.at_risk_threshold {
            return None;
        }
        Some(AtRiskIssue {
            assignee: self.assignee.clone(),
            issue_key: self.issue_key.clone(),
            status: self.status.clone(),
            original_estimate_hours,
            time_spent_hours,
            percentage,
        })
    }
}
