use crate::analyze::{finite_or_zero, AssigneeSummary, AssigneeValue, Highlights, TimeShare};
use std::cmp::Ordering;

impl Highlights {
    pub fn from_summary(summary: &[AssigneeSummary]) -> Self {
        let lowest_efficiency = summary
            .iter()
            .filter(|row| row.efficiency_ratio > 0.0)
            .min_by(|a, b| compare(a.efficiency_ratio, b.efficiency_ratio))
            .map(|row| AssigneeValue::new(row.assignee.clone(), row.efficiency_ratio));

        // min_by keeps the first of equal elements, so reversing it picks the first maximum.
        let highest_bugs_to_issues = summary
            .iter()
            .min_by(|a, b| compare(b.bugs_to_issues_ratio, a.bugs_to_issues_ratio))
            .map(|row| AssigneeValue::new(row.assignee.clone(), row.bugs_to_issues_ratio));

        let total_hours = summary
            .iter()
            .map(|row| row.total_time_spent_hours)
            .sum::<f64>();
        let time_distribution = summary
            .iter()
            .filter(|row| row.total_time_spent_hours > 0.0)
            .map(|row| TimeShare {
                assignee: row.assignee.clone(),
                hours: row.total_time_spent_hours,
                share_pct: finite_or_zero(row.total_time_spent_hours / total_hours * 100.0),
            })
            .collect();

        Self {
            lowest_efficiency,
            highest_bugs_to_issues,
            time_distribution,
        }
    }
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
