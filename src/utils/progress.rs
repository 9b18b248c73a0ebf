use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use itertools::Itertools;
use std::path::PathBuf;
use std::time::Duration;

const ONLY_MESSAGE_TEMPLATE: &str = "{spinner} {wide_msg}";

/// One spinner line per processed export.
#[derive(Clone)]
pub struct RunProgress {
    input: String,
    pb: ProgressBar,
}

impl RunProgress {
    pub fn add_to(multi_progress: &MultiProgress, input: impl ToString) -> Self {
        let pb = multi_progress.add(ProgressBar::new_spinner());
        if let Ok(style) = ProgressStyle::with_template(ONLY_MESSAGE_TEMPLATE) {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        let progress = Self {
            input: input.to_string(),
            pb,
        };
        progress.stage("Waiting ...");
        progress
    }

    pub fn stage(&self, message: &str) {
        self.pb.set_message(format!("`{}`: {}", self.input, message));
    }

    pub fn finish_saved(&self, assignees: usize, at_risk: usize, paths: &[PathBuf]) {
        self.pb.finish_with_message(format!(
            "✅ Completed `{}` ({} assignees, {} at-risk issues), saved {}",
            self.input,
            assignees,
            at_risk,
            paths.iter().map(|p| format!("`{}`", p.display())).join(", ")
        ));
    }

    pub fn finish_failed(&self, error: &str) {
        self.pb
            .abandon_with_message(format!("❌ Failed `{}`: {}", self.input, error));
    }
}
