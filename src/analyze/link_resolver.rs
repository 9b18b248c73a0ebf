use crate::analyze::{Bug, BugLinkIndex};
use itertools::Itertools;
use tracing::debug;

/// Key of the bucket holding Bugs without any populated link slot.
pub const UNLINKED_KEY: &str = "";

impl Bug {
    /// Populated link slots joined in slot order, e.g. `"S1"` or `"S1,S2"`.
    pub fn composite_link_key(&self) -> String {
        self.outward_links.iter().flatten().join(",")
    }
}

impl BugLinkIndex {
    pub fn from_bugs(bugs: &[Bug]) -> Self {
        let mut index = Self::default();
        for bug in bugs {
            *index.counts.entry(bug.composite_link_key()).or_insert(0) += 1;
        }
        debug!(
            keys = index.counts.len(),
            unlinked = index.unlinked(),
            "Resolved bug links"
        );
        index
    }

    /// Bugs whose composite key equals `issue_key` exactly. A Bug pointing at two issues is
    /// counted under the joined key and never matches a single Story.
    pub fn linked_bugs(&self, issue_key: &str) -> usize {
        if issue_key == UNLINKED_KEY {
            return 0;
        }
        self.counts.get(issue_key).copied().unwrap_or(0)
    }

    pub fn unlinked(&self) -> usize {
        self.counts.get(UNLINKED_KEY).copied().unwrap_or(0)
    }
}
