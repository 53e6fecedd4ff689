pub mod list_ops;
pub mod progress;
pub mod task_ops;
