//! Task definitions and loading
//!
//! This module provides the task types and the JSON loader.

mod loader;
mod task;

pub use loader::{TaskLoader, load_task_from_json};
pub use task::{Example, ExampleRole, Task, TaskId};
