use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;
use gridmander::Plan;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ScoreArgs) -> Result<()> {
    let payload = fs::read_to_string(&args.plan)
        .with_context(|| format!("Failed to read plan file: {}", args.plan.display()))?;
    let plan = Plan::from_json(&payload)
        .with_context(|| format!("Failed to parse plan file: {}", args.plan.display()))?;

    if cli.verbose > 0 {
        println!("[score] scoring plan with {} districts", plan.num_districts());
    }

    let mut report = plan.compute_metrics();
    report.timestamp = Some(Utc::now().to_rfc3339());
    report.puzzle_id = plan.puzzle_id.clone();

    let body = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    if let Some(out_path) = &args.output {
        // A failed store must not fail the response; the report still prints.
        match fs::write(out_path, &body) {
            Err(err) => eprintln!(
                "[score] warning: failed to write report to {}: {err}",
                out_path.display()
            ),
            _ if cli.verbose > 0 => println!("[score] wrote report to {}", out_path.display()),
            _ => {}
        }
    }

    println!("{body}");

    Ok(())
}
