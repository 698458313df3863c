//! Demo 01: Basic task list operations
//!
//! Walks through add, toggle, edit, delete and filtering on a TaskStore,
//! then drives the same store through a Session the way the CLI does.
//!
//! Run with: cargo run --example 01_basic_session

use eyre::Result;
use tasklist::{Filter, Outcome, Session, TaskStore, render, seed};

fn main() -> Result<()> {
    println!("TaskList Basic Demo");
    println!("===================\n");

    let mut store = TaskStore::new(seed::sample_tasks())?;
    println!("{}\n", render::render(&store));

    // ADD
    println!("1. ADD - Adding 'Water the plants'...");
    let id = store.add("Water the plants");
    println!("   Created task with ID: {}\n", id);

    // TOGGLE
    println!("2. TOGGLE - Completing it...");
    store.toggle(&id);
    println!("   Completed = {}\n", store.get(&id).map(|t| t.completed).unwrap_or(false));

    // EDIT
    println!("3. EDIT - Renaming it...");
    store.edit(&id, "Water the garden");
    if let Some(task) = store.get(&id) {
        println!("   New name: {}\n", task.name);
    }

    // FILTER
    println!("4. FILTER - Completed tasks only...");
    store.set_filter(Filter::Completed);
    for task in store.visible_tasks() {
        println!("   - {} : {}", task.id, task.name);
    }
    println!();

    // DELETE
    println!("5. DELETE - Removing it...");
    let removed = store.delete(&id);
    println!("   Removed = {}, deleting again = {}\n", removed, store.delete(&id));

    // SESSION
    println!("6. SESSION - Same store, command lines...");
    let mut session = Session::new(store);
    for line in ["filter all", "add Read a book", "toggle todo-1"] {
        println!("> {}", line);
        if let Outcome::Render(view) = session.execute(line)? {
            println!("{}\n", view);
        }
    }

    println!("Demo complete!");
    Ok(())
}
