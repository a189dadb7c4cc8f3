pub mod column;
pub mod drag;
pub mod task;

// Export the board entities and drag payload types for use throughout the app
pub use column::{Column, DEFAULT_COLUMN_TITLE};
pub use drag::{DragItem, DragRef};
pub use task::{Task, DEFAULT_TASK_CONTENT};
