//! Output formatting for route rendering.
//!
//! This module provides formatters for rendering route summaries
//! in the formats selectable with `--format`.

use std::fmt::Write as _;
use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;

use roadnet_lib::{RouteRenderMode, RouteSummary};

/// Output format for single-route queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Report lines, one per criterion plus the compromise.
    #[default]
    Text,
    /// Markdown-flavoured listing of every route and step.
    Rich,
    /// Pretty-printed JSON.
    Json,
    /// Compromise route only, one location per line.
    Basic,
}

impl OutputFormat {
    /// Render a summary as a string in this format.
    pub fn render(self, summary: &RouteSummary) -> Result<String> {
        let rendered = match self {
            OutputFormat::Text => summary.render(RouteRenderMode::PlainText),
            OutputFormat::Rich => summary.render(RouteRenderMode::RichText),
            OutputFormat::Json => {
                let mut json = summary.to_json()?;
                json.push('\n');
                json
            }
            OutputFormat::Basic => render_basic(summary),
        };
        Ok(rendered)
    }

    /// Render a summary to stdout.
    pub fn render_route_result(self, summary: &RouteSummary) -> Result<()> {
        let rendered = self.render(summary)?;
        let mut stdout = io::stdout();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Render the compromise route in basic path format.
///
/// Uses `+`/`|`/`-` prefixes for first/middle/last steps.
fn render_basic(summary: &RouteSummary) -> String {
    let mut buffer = String::new();
    let chosen = summary
        .compromise
        .and_then(|criterion| summary.routes.iter().find(|r| r.criterion == criterion));

    let Some(route) = chosen else {
        let _ = writeln!(buffer, "no compromise route");
        return buffer;
    };

    let len = route.steps.len();
    for (i, step) in route.steps.iter().enumerate() {
        let prefix = if i == 0 {
            '+'
        } else if i + 1 == len {
            '-'
        } else {
            '|'
        };
        let name = step.name.as_deref().unwrap_or("<unknown>");
        let _ = writeln!(buffer, "{} {}", prefix, name);
    }
    let _ = writeln!(
        buffer,
        "via {} (D={}, T={}, C={})",
        route.criterion, route.totals.distance, route.totals.time, route.totals.cost
    );
    buffer
}
