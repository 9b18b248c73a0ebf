use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub issue_key: String,
    pub assignee: Option<String>,
    pub original_estimate: f64,
    pub time_spent: f64,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bug {
    pub issue_key: String,
    pub assignee: Option<String>,
    /// Bugs are not estimated as a rule; an estimate present in the export is kept as is.
    pub original_estimate: Option<f64>,
    pub time_spent: f64,
    pub status: Option<String>,
    pub outward_links: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedIssues {
    pub stories: Vec<Story>,
    pub bugs: Vec<Bug>,
}

/// Number of Bugs per composite link key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BugLinkIndex {
    pub counts: IndexMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssigneeSummary {
    pub assignee: Option<String>,
    pub issues_linked: usize,
    pub number_of_bugs: usize,
    pub sum_original_estimate_hours: f64,
    pub sum_time_spent_on_stories_hours: f64,
    pub sum_time_spent_on_bugs_hours: f64,
    pub total_time_spent_hours: f64,
    pub efficiency_ratio: f64,
    pub bugs_to_issues_ratio: f64,
    pub average_time_per_bug_hours: f64,
    pub average_time_per_issue_hours: f64,
    pub proportion_on_bugs_pct: f64,
    pub proportion_on_stories_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtRiskIssue {
    pub assignee: Option<String>,
    pub issue_key: String,
    pub status: Option<String>,
    pub original_estimate_hours: f64,
    pub time_spent_hours: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssigneeValue {
    pub assignee: Option<String>,
    pub value: f64,
}

impl AssigneeValue {
    pub fn new(assignee: Option<String>, value: f64) -> Self {
        Self { assignee, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeShare {
    pub assignee: Option<String>,
    pub hours: f64,
    pub share_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlights {
    /// Smallest non-zero efficiency ratio.
    pub lowest_efficiency: Option<AssigneeValue>,
    pub highest_bugs_to_issues: Option<AssigneeValue>,
    /// Share of all logged hours, assignees without hours left out.
    pub time_distribution: Vec<TimeShare>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IssueReport {
    pub summary: Vec<AssigneeSummary>,
    pub at_risk: Vec<AtRiskIssue>,
    pub highlights: Highlights,
}

impl IssueReport {
    pub fn new(
        summary: Vec<AssigneeSummary>,
        at_risk: Vec<AtRiskIssue>,
        highlights: Highlights,
    ) -> Self {
        Self {
            summary,
            at_risk,
            highlights,
        }
    }
}
