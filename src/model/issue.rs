#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum IssueType {
    Story,
    Bug,
    Other,
}

impl IssueType {
    /// Tracker exports spell the type exactly, so the match is case-sensitive.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Story" => IssueType::Story,
            "Bug" => IssueType::Bug,
            _ => IssueType::Other,
        }
    }
}

/// One row of the flat issue export. Times are in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueRecord {
    pub issue_key: String,
    pub issue_type: IssueType,
    pub assignee: Option<String>,
    pub original_estimate: Option<f64>,
    pub time_spent: Option<f64>,
    pub status: Option<String>,
    /// One slot per configured outward-link column, in column order.
    pub outward_links: Vec<Option<String>>,
}

// Create
#[cfg(test)]
impl IssueRecord {
    pub fn new(issue_key: impl ToString, issue_type: IssueType) -> Self {
        Self {
            issue_key: issue_key.to_string(),
            issue_type,
            assignee: None,
            original_estimate: None,
            time_spent: None,
            status: None,
            outward_links: vec![],
        }
    }

    pub fn with_assignee(mut self, assignee: impl ToString) -> Self {
        self.assignee = Some(assignee.to_string());
        self
    }

    pub fn with_original_estimate(mut self, seconds: f64) -> Self {
        self.original_estimate = Some(seconds);
        self
    }

    pub fn with_time_spent(mut self, seconds: f64) -> Self {
        self.time_spent = Some(seconds);
        self
    }

    pub fn with_status(mut self, status: impl ToString) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn with_outward_links(mut self, links: Vec<Option<&str>>) -> Self {
        self.outward_links = links
            .into_iter()
            .map(|link| link.map(String::from))
            .collect();
        self
    }
}
