use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadnet_cli::output::OutputFormat;

mod commands;

use commands::route::{handle_route_command, RouteCommandArgs};
use commands::run::{handle_run_command, RunCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Multi-criterion road network route planner")]
struct Cli {
    /// Suppress informational messages on stdout.
    #[arg(long, global = true)]
    quiet: bool,

    /// Output format for single-route queries.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process every request in an input file and write the report.
    Run {
        /// Input file with [CITIES], [ROADS] and [REQUESTS] sections.
        #[arg(long, default_value = "input.txt")]
        input: PathBuf,
        /// Destination for the rendered report.
        #[arg(long, default_value = "output.txt")]
        output: PathBuf,
    },
    /// Plan a single route between two named locations.
    Route {
        /// Input file describing the road network.
        #[arg(long, default_value = "input.txt")]
        input: PathBuf,
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Compromise priority such as "(T,D)"; defaults to distance, time, cost.
        #[arg(long)]
        priority: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Run { input, output } => handle_run_command(&RunCommandArgs {
            input,
            output,
            quiet: cli.quiet,
        }),
        Command::Route {
            input,
            from,
            to,
            priority,
        } => handle_route_command(
            &RouteCommandArgs {
                input,
                from,
                to,
                priority,
            },
            cli.format,
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
