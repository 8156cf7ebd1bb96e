// tasklist - Ordered in-memory task list driven by UI callbacks

pub mod command;
pub mod models;
pub mod render;
pub mod session;
pub mod store;

// Re-export main types for convenience
pub use command::Command;
pub use models::{Task, TaskId, TaskStatus, now_ms};
pub use render::Format;
pub use session::{AddPrompt, Session};
pub use store::{Snapshot, TaskList};
