use crate::analyze::{
    finite_or_zero, round_to_tenth, safe_div, seconds_to_hours, AssigneeSummary, BugLinkIndex,
    ClassifiedIssues,
};
use indexmap::IndexMap;
use tracing::debug;

pub trait AssigneeAggregator {
    fn aggregate_assignees(&self, link_index: &BugLinkIndex) -> Vec<AssigneeSummary>;
}

impl AssigneeAggregator for ClassifiedIssues {
    /// One row per distinct assignee, Story owners first, each in input order. The absent
    /// assignee forms its own row.
    fn aggregate_assignees(&self, link_index: &BugLinkIndex) -> Vec<AssigneeSummary> {
        let mut totals: IndexMap<Option<&str>, AssigneeTotals> = IndexMap::new();
        for story in &self.stories {
            let entry = totals.entry(story.assignee.as_deref()).or_default();
            entry.issues_linked += 1;
            entry.number_of_bugs += link_index.linked_bugs(&story.issue_key);
            entry.estimate_seconds += story.original_estimate;
            entry.story_seconds += story.time_spent;
        }
        for bug in &self.bugs {
            let entry = totals.entry(bug.assignee.as_deref()).or_default();
            entry.bug_seconds += bug.time_spent;
        }

        let summary = totals
            .into_iter()
            .map(|(assignee, totals)| totals.into_summary(assignee.map(String::from)))
            .collect::<Vec<_>>();
        debug!(assignees = summary.len(), "Aggregated assignees");
        summary
    }
}

#[derive(Debug, Default)]
struct AssigneeTotals {
    issues_linked: usize,
    number_of_bugs: usize,
    estimate_seconds: f64,
    story_seconds: f64,
    bug_seconds: f64,
}

impl AssigneeTotals {
    fn into_summary(self, assignee: Option<String>) -> AssigneeSummary {
        let issues_linked = self.issues_linked as f64;
        let number_of_bugs = self.number_of_bugs as f64;
        let estimate_hours = round_to_tenth(seconds_to_hours(self.estimate_seconds));
        let stories_hours = round_to_tenth(seconds_to_hours(self.story_seconds));
        let bugs_hours = round_to_tenth(seconds_to_hours(self.bug_seconds));
        let total_hours = round_to_tenth(stories_hours + bugs_hours);

        AssigneeSummary {
            assignee,
            issues_linked: self.issues_linked,
            number_of_bugs: self.number_of_bugs,
            sum_original_estimate_hours: finite_or_zero(estimate_hours),
            sum_time_spent_on_stories_hours: finite_or_zero(stories_hours),
            sum_time_spent_on_bugs_hours: finite_or_zero(bugs_hours),
            total_time_spent_hours: finite_or_zero(total_hours),
            // Hour denominators divide as is; a zero total leaves NaN or infinity for the final pass.
            efficiency_ratio: finite_or_zero(estimate_hours / total_hours),
            bugs_to_issues_ratio: finite_or_zero(safe_div(number_of_bugs, issues_linked)),
            average_time_per_bug_hours: finite_or_zero(safe_div(bugs_hours, number_of_bugs)),
            average_time_per_issue_hours: finite_or_zero(safe_div(stories_hours, issues_linked)),
            proportion_on_bugs_pct: finite_or_zero(bugs_hours / total_hours * 100.0),
            proportion_on_stories_pct: finite_or_zero(stories_hours / total_hours * 100.0),
        }
    }
}
