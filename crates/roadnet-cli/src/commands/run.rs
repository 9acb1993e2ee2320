//! Batch command handler: plan every request of an input file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use roadnet_lib::{load_network, render_report, write_report};

/// Arguments for the run command.
#[derive(Debug, Clone)]
pub struct RunCommandArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub quiet: bool,
}

/// Handle the run subcommand.
///
/// Each request is planned independently; unknown names or unreachable
/// locations only affect their own section of the report.
pub fn handle_run_command(args: &RunCommandArgs) -> Result<()> {
    let input = load_network(&args.input)
        .with_context(|| format!("failed to load input from {}", args.input.display()))?;

    if input.skipped > 0 {
        warn!(skipped = input.skipped, "some input records were malformed and ignored");
    }
    info!(
        locations = input.graph.location_count(),
        roads = input.graph.road_count(),
        requests = input.requests.len(),
        "processing requests"
    );

    let report = render_report(&input.graph, &input.requests);
    write_report(&args.output, &report)
        .with_context(|| format!("failed to write report to {}", args.output.display()))?;

    if !args.quiet {
        println!("Results written to {}", args.output.display());
    }
    Ok(())
}
