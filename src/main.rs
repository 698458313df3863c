use clap::Parser;
use eyre::{Context, Result};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tasklist::{Filter, Outcome, Session, Task, TaskStore, seed};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "TaskList - In-memory to-do list with All/Active/Completed filters")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Seed file with the starting tasks (.jsonl, .json, .yaml)
    #[arg(short, long, env = "TASKLIST_TASKS", conflicts_with = "empty")]
    tasks: Option<PathBuf>,

    /// Start with no tasks
    #[arg(long)]
    empty: bool,

    /// Initial filter: all, active or completed
    #[arg(short, long, default_value = "all", value_parser = parse_filter)]
    filter: Filter,
}

fn parse_filter(s: &str) -> std::result::Result<Filter, String> {
    s.parse::<Filter>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Setup tracing on stderr so it stays out of the rendered list
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut store = TaskStore::new(initial_tasks(&cli)?).context("Failed to build task list")?;
    store.set_filter(cli.filter);

    run(Session::new(store))
}

/// Seed file from the flag or env, then the default seed path, then the sample list
fn initial_tasks(cli: &Cli) -> Result<Vec<Task>> {
    if cli.empty {
        return Ok(Vec::new());
    }

    if let Some(path) = &cli.tasks {
        return seed::load(path);
    }

    match seed::default_seed_path() {
        Some(path) if path.exists() => seed::load(&path),
        _ => Ok(seed::sample_tasks()),
    }
}

fn run(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut stdout = io::stdout();

    println!("{}", session.view());

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            stdout.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;

        match session.execute(&line) {
            Ok(Outcome::Render(view)) => println!("\n{}", view),
            Ok(Outcome::Quit) => break,
            Err(e) => eprintln!("error: {}", e),
        }
    }

    info!(remaining = session.store().len(), "Session ended");
    Ok(())
}
