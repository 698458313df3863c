// JSONL reading for seed files

use crate::task::Task;
use eyre::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Read tasks from a JSONL file, one task object per line
///
/// Blank lines are ignored; unreadable or unparsable lines are logged and skipped.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>> {
    let file = File::open(path).with_context(|| format!("Failed to open JSONL file {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut tasks = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to read line, skipping"
                );
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Task>(&line) {
            Ok(task) => tasks.push(task),
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to parse task, skipping"
                );
            }
        }
    }

    debug!(file = ?path, count = tasks.len(), "Read tasks from JSONL");
    Ok(tasks)
}
