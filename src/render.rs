// Terminal rendering of the store

use crate::filter::Filter;
use crate::store::TaskStore;
use crate::task::Task;
use colored::Colorize;

/// Count heading for `count` visible tasks, singular when `count == 1`
pub fn heading(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{} {} remaining", count, noun)
}

/// The three filter buttons, the active one shown pressed
pub fn filter_bar(active: Filter) -> String {
    Filter::ALL
        .iter()
        .map(|&filter| {
            if filter == active {
                format!("[{}]", filter.label()).cyan().bold().to_string()
            } else {
                format!(" {} ", filter.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per task: checkbox, name, id
pub fn task_row(task: &Task) -> String {
    let (checkbox, name) = if task.completed {
        ("[x]".green().to_string(), task.name.dimmed().to_string())
    } else {
        ("[ ]".to_string(), task.name.clone())
    };
    format!("{} {} ({})", checkbox, name, task.id.as_str().dimmed())
}

/// Full view: filter bar, heading, visible rows
pub fn render(store: &TaskStore) -> String {
    let visible = store.visible_tasks();

    let mut lines = vec![filter_bar(store.filter()), String::new(), heading(visible.len()).bold().to_string()];
    lines.extend(visible.into_iter().map(task_row));
    lines.join("\n")
}
