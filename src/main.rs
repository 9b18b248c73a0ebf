mod analyze;
mod model;
mod report;
mod source;
mod utils;

use crate::analyze::analyze;
use crate::report::{CsvReportSink, MarkdownReportSink, ReportSink};
use crate::source::{CsvIssueSource, IssueSource};
use crate::utils::RunProgress;
use clap::{Parser, ValueEnum};
use futures::future;
use indicatif::MultiProgress;
use model::{ReportConfig, Result};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
struct Args {
    #[arg(long = "input", default_value = "data.csv")]
    inputs: Vec<String>,
    #[arg(long = "config")]
    config_path: Option<String>,
    #[arg(long = "out", default_value = "reports")]
    out_dir: String,
    #[arg(long = "format", value_enum, default_value_t = ReportFormat::All)]
    format: ReportFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Csv,
    Markdown,
    All,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = match &args.config_path {
        Some(path) => ReportConfig::from_config(path)?,
        None => ReportConfig::default(),
    };
    debug!(?config, "Loaded report config");
    let config = Arc::new(config);

    // Every export is an independent run, so they are processed side by side.
    let multi_progress = MultiProgress::default();
    let tasks = args
        .inputs
        .iter()
        .zip(report_dirs(&args.out_dir, &args.inputs))
        .map(|(input, out_dir)| {
            let job = ReportJob {
                input: input.clone(),
                out_dir,
                format: args.format,
                config: config.clone(),
            };
            let progress = RunProgress::add_to(&multi_progress, input);
            tokio::task::spawn_blocking(move || job.run(&progress))
        })
        .collect::<Vec<_>>();

    let mut failed = 0;
    for (input, result) in args.inputs.iter().zip(future::join_all(tasks).await) {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                warn!("Report for `{input}` failed: {err}");
                failed += 1;
            }
            Err(err) => {
                warn!("Report task for `{input}` panicked: {err}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(format!("{failed} of {} inputs failed", args.inputs.len()).into());
    }
    Ok(())
}

struct ReportJob {
    input: String,
    out_dir: PathBuf,
    format: ReportFormat,
    config: Arc<ReportConfig>,
}

impl ReportJob {
    fn run(&self, progress: &RunProgress) -> Result<()> {
        match self.build(progress) {
            Ok(()) => Ok(()),
            Err(err) => {
                progress.finish_failed(&err.to_string());
                Err(err)
            }
        }
    }

    fn build(&self, progress: &RunProgress) -> Result<()> {
        progress.stage("Read issues ...");
        let issues = CsvIssueSource::new(&self.input).read_issues(&self.config.link_columns)?;

        progress.stage(&format!("Analyze {} issues ...", issues.len()));
        let report = analyze(&issues, &self.config);

        progress.stage("Write report ...");
        let mut paths = vec![];
        for sink in self.sinks() {
            paths.extend(sink.write_report(&report)?);
        }
        progress.finish_saved(report.summary.len(), report.at_risk.len(), &paths);
        Ok(())
    }

    fn sinks(&self) -> Vec<Box<dyn ReportSink>> {
        let csv = || Box::new(CsvReportSink::new(&self.out_dir)) as Box<dyn ReportSink>;
        let markdown = || {
            Box::new(MarkdownReportSink::new(&self.out_dir, &self.input)) as Box<dyn ReportSink>
        };
        match self.format {
            ReportFormat::Csv => vec![csv()],
            ReportFormat::Markdown => vec![markdown()],
            ReportFormat::All => vec![csv(), markdown()],
        }
    }
}

/// One `<out>/<input file stem>` directory per input. A stem seen before gets a `-2`, `-3`, ...
/// suffix, so concurrent runs never share a directory.
fn report_dirs(out_dir: &str, inputs: &[String]) -> Vec<PathBuf> {
    let mut taken = HashSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = Path::new(input)
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "report".to_string());
            let mut name = stem.clone();
            let mut index = 1;
            while !taken.insert(name.clone()) {
                index += 1;
                name = format!("{stem}-{index}");
            }
            Path::new(out_dir).join(name)
        })
        .collect()
}
