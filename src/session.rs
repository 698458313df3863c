// Interactive session: one command per line against a TaskStore

use crate::filter::Filter;
use crate::render;
use crate::store::TaskStore;
use crate::task::TaskId;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use eyre::{Result, eyre};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a task
    Add {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Mark a task done, or not done
    Toggle { id: String },

    /// Rename a task
    Edit {
        id: String,
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },

    /// Remove a task
    #[command(alias = "rm")]
    Delete { id: String },

    /// Show all, active or completed tasks
    Filter {
        #[arg(value_parser = parse_filter)]
        filter: Filter,
    },

    /// Show the list again
    #[command(alias = "ls")]
    List,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

fn parse_filter(s: &str) -> std::result::Result<Filter, String> {
    s.parse::<Filter>().map_err(|e| e.to_string())
}

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show this view
    Render(String),
    Quit,
}

/// Presentation layer over a `TaskStore`
pub struct Session {
    store: TaskStore,
}

impl Session {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Current view without running a command
    pub fn view(&self) -> String {
        render::render(&self.store)
    }

    /// Parse and run one input line
    ///
    /// Parse errors and empty task names are returned as errors; the store
    /// is left untouched in both cases.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Outcome::Render(self.view()));
        }

        let parsed = match Line::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                return Ok(Outcome::Render(e.render().to_string().trim_end().to_string()));
            }
            Err(e) => return Err(eyre!("{}", e.render().to_string().trim_end())),
        };
        debug!(command = ?parsed.command, "Executing command");

        let notice = match parsed.command {
            Command::Add { name } => {
                let name = validate_name(&name)?;
                self.store.add(name);
                None
            }
            Command::Toggle { id } => {
                let id = TaskId::from(id);
                missing(self.store.toggle(&id), &id)
            }
            Command::Edit { id, name } => {
                let name = validate_name(&name)?;
                let id = TaskId::from(id);
                missing(self.store.edit(&id, name), &id)
            }
            Command::Delete { id } => {
                let id = TaskId::from(id);
                missing(self.store.delete(&id), &id)
            }
            Command::Filter { filter } => {
                self.store.set_filter(filter);
                None
            }
            Command::List => None,
            Command::Quit => return Ok(Outcome::Quit),
        };

        let view = self.view();
        Ok(Outcome::Render(match notice {
            Some(notice) => format!("{}\n{}", notice, view),
            None => view,
        }))
    }
}

/// Notice line for an id the store did not know
fn missing(found: bool, id: &TaskId) -> Option<String> {
    (!found).then(|| format!("no task with id {}", id))
}

/// Join the words of a task name and reject blank names
fn validate_name(words: &[String]) -> Result<String> {
    let name = words.join(" ");
    if name.trim().is_empty() {
        return Err(eyre!("Task name cannot be empty"));
    }
    Ok(name)
}
