mod aggregator;
mod highlights;
mod link_resolver;
mod model;
mod normalizer;
mod pipeline;
mod ratio;
mod risk_filter;

pub use aggregator::AssigneeAggregator;
pub use model::{
    AssigneeSummary, AssigneeValue, AtRiskIssue, Bug, BugLinkIndex, ClassifiedIssues, Highlights,
    IssueReport, Story, TimeShare,
};
pub use pipeline::analyze;
pub use ratio::{finite_or_zero, round_to_tenth, safe_div, seconds_to_hours};
pub use risk_filter::RiskFilter;
