use serde::{Deserialize, Serialize};

use super::{Column, Task};

/// Identifies the entity a drag event refers to: the item under the pointer
/// (`over`) or the item being dragged (`active`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DragRef {
    Column(String),
    Task(String),
}

impl DragRef {
    pub fn id(&self) -> &str {
        match self {
            DragRef::Column(id) | DragRef::Task(id) => id,
        }
    }
}

/// Snapshot of the entity captured at drag-start, kept around so the
/// presentation layer can render the in-flight item.
#[derive(Debug, Clone, PartialEq)]
pub enum DragItem {
    Column(Column),
    Task(Task),
}

impl DragItem {
    pub fn id(&self) -> &str {
        match self {
            DragItem::Column(column) => &column.id,
            DragItem::Task(task) => &task.id,
        }
    }

    pub fn to_ref(&self) -> DragRef {
        match self {
            DragItem::Column(column) => DragRef::Column(column.id.clone()),
            DragItem::Task(task) => DragRef::Task(task.id.clone()),
        }
    }
}
