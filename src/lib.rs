// TaskList - In-memory to-do list with filtering

pub mod filter;
pub mod jsonl;
pub mod render;
pub mod seed;
pub mod session;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use filter::Filter;
pub use session::{Outcome, Session};
pub use store::TaskStore;
pub use task::{Task, TaskId};
