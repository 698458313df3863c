// Initial task lists: built-in sample and seed files

use crate::jsonl;
use crate::task::Task;
use eyre::{Context, Result, eyre};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// The list a fresh session starts with when no seed file is available
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new("todo-0", "Code", true),
        Task::new("todo-1", "Eat", false),
        Task::new("todo-2", "Sleep", false),
    ]
}

/// Load an initial task list, picking the format from the file extension
///
/// Supported: `.jsonl`, `.json` (array of tasks), `.yaml` / `.yml`
/// (sequence of tasks).
pub fn load(path: &Path) -> Result<Vec<Task>> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    let tasks: Vec<Task> = match ext.as_str() {
        "jsonl" => jsonl::read_tasks(path)?,
        "json" => {
            let content = read(path)?;
            serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON seed {}", path.display()))?
        }
        "yaml" | "yml" => {
            let content = read(path)?;
            serde_yaml::from_str(&content).with_context(|| format!("Failed to parse YAML seed {}", path.display()))?
        }
        _ => {
            return Err(eyre!(
                "Unsupported seed file {} (expected .jsonl, .json, .yaml or .yml)",
                path.display()
            ));
        }
    };

    info!(file = ?path, count = tasks.len(), "Loaded seed tasks");
    Ok(tasks)
}

/// `<config dir>/tasklist/tasks.yaml`, if the platform has a config dir
pub fn default_seed_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tasklist").join("tasks.yaml"))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read seed file {}", path.display()))
}
