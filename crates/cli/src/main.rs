use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod provenance;
mod tasks;

use tasks::{evaluate, Lowering, Task};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Evaluate one matgeo routine from a JSON job")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate a job file and print or write the outcome
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Failure convention: NaN-filled value, status code only, or hard error
        #[arg(long, value_enum, default_value_t = Lowering::Nan)]
        lower: Lowering,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { input, out, lower } => run(&input, out.as_deref(), lower, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run(input: &Path, out: Option<&Path>, lower: Lowering, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), ?lower, tag = ?tag, "run");
    let raw = fs::read(input).with_context(|| format!("reading job {}", input.display()))?;
    let params: Value =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", input.display()))?;
    let task: Task = serde_json::from_value(params.clone())
        .with_context(|| format!("unrecognized job in {}", input.display()))?;

    let outcome = evaluate(&task, lower)?;
    tracing::info!(task = outcome.task, code = outcome.code, "evaluated");
    let body = serde_json::to_vec_pretty(&outcome)?;

    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
            let payload = provenance::Payload::new(params).with_tag(tag);
            provenance::write_sidecar(out, payload)?;
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let record = provenance::Record::bare(tag.into_iter().collect());
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
