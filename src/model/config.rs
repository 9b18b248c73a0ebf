use crate::model::Result;
use indexmap::IndexMap;
use serde_json::{from_str, Value};
use std::fs;
use tracing::warn;

pub const DEFAULT_LINK_COLUMNS: [&str; 2] = [
    "Outward issue link (Blocks)",
    "Outward issue link (Problem/Incident)",
];
pub const DEFAULT_AT_RISK_THRESHOLD: f64 = 80.0;
pub const DEFAULT_DONE_STATUS: &str = "Done";

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Outward-link columns read from each Bug, in join order.
    pub link_columns: Vec<String>,
    /// Spent/estimate percentage at which an open issue is reported.
    pub at_risk_threshold: f64,
    pub done_status: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            link_columns: DEFAULT_LINK_COLUMNS.iter().map(|c| c.to_string()).collect(),
            at_risk_threshold: DEFAULT_AT_RISK_THRESHOLD,
            done_status: DEFAULT_DONE_STATUS.to_string(),
        }
    }
}

// Create
impl ReportConfig {
    pub fn from_config(path: &str) -> Result<Self> {
        let json_str = fs::read_to_string(path)?;
        Self::parse(&json_str)
    }
}

// Parser
impl ReportConfig {
    fn parse(json_str: &str) -> Result<Self> {
        let details: IndexMap<String, Value> = from_str(json_str)?;
        let mut config = Self::default();
        for (key, value) in details {
            match key.as_str() {
                "linkColumns" => {
                    let Some(columns) = value.as_array() else {
                        return Err("Not a valid 'linkColumns' field".into());
                    };
                    let Some(columns) = columns
                        .iter()
                        .map(|column| column.as_str().map(String::from))
                        .collect::<Option<Vec<_>>>()
                    else {
                        return Err("Not a valid 'linkColumns' field".into());
                    };
                    if columns.is_empty() {
                        return Err("Empty 'linkColumns' field".into());
                    }
                    config.link_columns = columns;
                }
                "atRiskThreshold" => {
                    let Some(threshold) = value.as_f64() else {
                        return Err("Not a valid 'atRiskThreshold' field".into());
                    };
                    config.at_risk_threshold = threshold;
                }
                "doneStatus" => {
                    let Some(status) = value.as_str() else {
                        return Err("Not a valid 'doneStatus' field".into());
                    };
                    config.done_status = status.to_string();
                }
                unknown => warn!("Ignoring unknown config field '{unknown}'"),
            }
        }
        Ok(config)
    }
}
