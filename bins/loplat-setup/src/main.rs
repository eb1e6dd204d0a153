//! Loplat Plengi SDK setup tool
//!
//! CLI for wiring the Plengi SDK initialization into a Swift Xcode project.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use loplat_inject::{Injector, Outcome, Step, StepEvent, StepNotifier, StepState};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

#[derive(Parser)]
#[command(name = "loplat-setup")]
#[command(about = "Insert Plengi SDK initialization into an Xcode project")]
#[command(version)]
#[command(author)]
struct Cli {
    /// Project root directory
    #[arg(short, long, default_value = ".")]
    project_root: PathBuf,

    /// Loplat client ID
    #[arg(long, env = "LOPLAT_CLIENT_ID")]
    client_id: String,

    /// Loplat client secret
    #[arg(long, env = "LOPLAT_CLIENT_SECRET")]
    client_secret: String,

    /// Compute the edit without writing the file
    #[arg(long)]
    dry_run: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.format == "json";

    let (tx, rx) = mpsc::channel::<StepEvent>();
    let printer = (!json).then(|| thread::spawn(move || print_steps(rx)));

    if !json {
        println!("\n{}", "🛰  Loplat Plengi SDK setup".bold());
        println!();
    }

    let result = Injector::new(&cli.project_root)
        .dry_run(cli.dry_run)
        .with_notifier(StepNotifier::new(tx))
        .run(&cli.client_id, &cli.client_secret);

    if let Some(printer) = printer {
        let _ = printer.join();
    }

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            if json {
                println!("{}", serde_json::json!({ "error": err.to_string() }));
            } else {
                eprintln!("\n{} {}", "✗".red(), err);
            }
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        match report.outcome {
            Outcome::Inserted if report.dry_run => {
                println!(
                    "{} Would insert the SDK initialization into {}",
                    "✓".green(),
                    report.file.display()
                );
            }
            Outcome::Inserted => {
                println!(
                    "{} SDK initialization inserted into {}",
                    "✓".green(),
                    report.file.display()
                );
            }
            Outcome::AlreadyPresent => {
                println!(
                    "{} Plengi initialization already present in {}",
                    "ℹ".blue(),
                    report.file.display()
                );
            }
            Outcome::NoAnchor => {
                eprintln!(
                    "{} No suitable insertion point found in {}",
                    "✗".red(),
                    report.file.display()
                );
            }
        }
    }

    if report.outcome == Outcome::NoAnchor {
        std::process::exit(1);
    }

    Ok(())
}

/// Render step transitions as they arrive from the engine
fn print_steps(rx: mpsc::Receiver<StepEvent>) {
    for event in rx {
        let mark = match event.state {
            StepState::Success => "✓".green(),
            StepState::Failed => "✗".red(),
            StepState::Pending => "·".dimmed(),
        };
        println!(
            "{} {} {}",
            format!("[{}/{}]", event.step.position(), Step::ALL.len()).dimmed(),
            mark,
            event.step.label()
        );
    }
}
