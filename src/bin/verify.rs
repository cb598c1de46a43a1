//! Verification suite and dataset export entry point.
//!
//! Runs the built-in curve checks, exports the standard CSV datasets, and
//! writes the JSON report. Exits with 0 when every check passes and 1
//! otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use lissageo::dataset::{export_datasets, standard_configurations};
use lissageo::verify::{run_verification_suite, write_report, CheckStatus};

#[derive(Parser)]
#[command(name = "verify")]
#[command(about = "Runs the Lissajous verification suite and dataset export")]
#[command(version)]
struct Cli {
    /// Directory receiving the exported CSV datasets
    #[arg(long, default_value = "datasets")]
    output_dir: PathBuf,

    /// Path of the JSON verification report
    #[arg(long, default_value = "verification_results.json")]
    report: PathBuf,

    /// Skip the dataset export and only run the checks
    #[arg(long)]
    no_export: bool,
}

fn main() -> ExitCode {
    // Default: INFO for lissageo. Override with RUST_LOG.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("lissageo=info".parse().unwrap_or_default())
        .add_directive("verify=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let report = run_verification_suite();
    for check in &report.test_details {
        match check.status {
            CheckStatus::Passed => match check.value {
                Some(value) => info!(check = check.name.as_str(), value, "passed"),
                None => info!(check = check.name.as_str(), "passed"),
            },
            CheckStatus::Failed => error!(
                check = check.name.as_str(),
                error = check.error.as_deref().unwrap_or(""),
                "failed"
            ),
        }
    }
    info!(
        passed = report.tests_passed,
        failed = report.tests_failed,
        "verification complete"
    );

    if !cli.no_export {
        match export_datasets(&cli.output_dir, &standard_configurations()) {
            Ok(summaries) => {
                for summary in &summaries {
                    info!(
                        name = summary.name.as_str(),
                        arc_length = summary.arc_length,
                        symmetry = summary.symmetry_score,
                        "exported dataset"
                    );
                }
            }
            Err(e) => {
                error!("dataset export failed: {e}");
                return ExitCode::from(1);
            }
        }
    }

    if let Err(e) = write_report(&cli.report, &report) {
        error!("failed to write report: {e}");
        return ExitCode::from(1);
    }
    info!(path = %cli.report.display(), "report written");

    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
