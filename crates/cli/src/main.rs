use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use origami::api::*;
use origami::Error;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod provenance;

#[derive(Parser)]
#[command(name = "origami")]
#[command(about = "Fold the unit square onto problem silhouettes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one problem file and write the solution next to a provenance sidecar
    Solve {
        #[arg(long)]
        problem: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Search budget in seconds
        #[arg(long, default_value = "5", value_parser = parse_secs)]
        time_limit: Duration,
    },
    /// Work through every unsolved problem of a store in shuffled order
    Batch {
        #[arg(long)]
        root: PathBuf,
        #[arg(long, default_value = "5", value_parser = parse_secs)]
        time_limit: Duration,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Stop after this many attempts
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print skeleton statistics as JSON
    Stats {
        #[arg(long)]
        problem: PathBuf,
    },
    /// List solutions that have not been marked submitted
    Pending {
        #[arg(long)]
        root: PathBuf,
    },
    /// Record that a solution was submitted
    MarkSubmitted {
        #[arg(long)]
        root: PathBuf,
        #[arg(long)]
        id: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            problem,
            out,
            time_limit,
        } => solve_file(&problem, &out, time_limit).map(|_| ()),
        Action::Batch {
            root,
            time_limit,
            seed,
            limit,
        } => {
            let summary = batch(&root, time_limit, seed, limit)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Action::Stats { problem } => stats(&problem),
        Action::Pending { root } => pending(&root),
        Action::MarkSubmitted { root, id } => mark_submitted(&root, id),
        Action::Report => report(),
    }
}

fn parse_secs(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{e}"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("{e}"))
}

/// `Ok(false)` when the search gave up; the process still succeeds.
fn solve_file(problem_path: &Path, out: &Path, time_limit: Duration) -> Result<bool> {
    tracing::info!(problem = %problem_path.display(), out = %out.display(), ?time_limit, "solve");
    let problem = Problem::from_file(problem_path)
        .with_context(|| format!("loading {}", problem_path.display()))?;
    let ps = match solve_problem(&problem, SearchCfg { time_limit }) {
        Ok(ps) => ps,
        Err(err @ (Error::NoSolution | Error::Timeout { .. })) => {
            tracing::warn!(%err, "no fold written");
            return Ok(false);
        }
        Err(err) => return Err(err.into()),
    };
    let solution = Solution::from_partial(&ps);

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    solution
        .write_to(out)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = provenance::Payload::new(json!({
        "problem": problem_path.to_string_lossy(),
        "time_limit_secs": time_limit.as_secs_f64(),
        "facets": solution.facets.len(),
        "points": solution.points.len(),
    }));
    provenance::write_sidecar(out, payload)?;
    Ok(true)
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
struct BatchSummary {
    solved: Vec<u64>,
    failed: Vec<u64>,
    skipped: Vec<u64>,
}

fn batch(
    root: &Path,
    time_limit: Duration,
    seed: u64,
    limit: Option<usize>,
) -> Result<BatchSummary> {
    let store = Store::open(root).with_context(|| format!("opening store {}", root.display()))?;
    let mut ids = shuffled(store.unsolved_ids()?, seed);
    if let Some(n) = limit {
        ids.truncate(n);
    }
    tracing::info!(root = %root.display(), todo = ids.len(), seed, "batch");

    let mut summary = BatchSummary::default();
    for id in ids {
        // another worker may have finished it meanwhile
        if store.is_resolved(id) {
            summary.skipped.push(id);
            continue;
        }
        match solve_id(&store, id, SearchCfg { time_limit }) {
            Ok(solution) => {
                store.save_solution(id, &solution)?;
                tracing::info!(id, facets = solution.facets.len(), "solved");
                summary.solved.push(id);
            }
            Err(err @ Error::Io { .. }) => return Err(err.into()),
            Err(err) => {
                tracing::warn!(id, %err, "marking failed");
                store.mark_failed(id)?;
                summary.failed.push(id);
            }
        }
    }
    Ok(summary)
}

fn solve_id(store: &Store, id: u64, cfg: SearchCfg) -> origami::Result<Solution> {
    let problem = store.load_problem(id)?;
    let ps = solve_problem(&problem, cfg)?;
    Ok(Solution::from_partial(&ps))
}

fn stats(problem_path: &Path) -> Result<()> {
    let problem = Problem::from_file(problem_path)
        .with_context(|| format!("loading {}", problem_path.display()))?;
    println!("{}", serde_json::to_string_pretty(&problem.stats())?);
    Ok(())
}

fn pending(root: &Path) -> Result<()> {
    let store = Store::open(root)?;
    for id in store.unsubmitted_ids()? {
        println!("{id}");
    }
    Ok(())
}

fn mark_submitted(root: &Path, id: u64) -> Result<()> {
    let store = Store::open(root)?;
    anyhow::ensure!(
        store.solution_path(id).is_file(),
        "no solution for problem {id} under {}",
        root.display()
    );
    store.mark_submitted(id)?;
    tracing::info!(id, "marked submitted");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": origami::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
