use crate::core::models::{DragItem, DragRef};

use super::board_store::BoardStore;

/// Translates drag lifecycle events into `BoardStore` mutations.
///
/// One gesture at a time: `idle -> dragging` when an item is captured at
/// drag-start, back to `idle` when the gesture ends. Task placement is
/// committed live while hovering; column reordering is committed at the drop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragReconciler {
    active: Option<DragItem>,
}

impl DragReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entity snapshot captured at drag-start, if a gesture is live.
    pub fn active(&self) -> Option<&DragItem> {
        self.active.as_ref()
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.active.as_ref().is_some_and(|item| item.id() == id)
    }

    /// Records the dragged entity for overlay rendering. The board itself is
    /// not touched. An id the board no longer knows leaves the gesture idle.
    pub fn on_drag_start(&mut self, board: &BoardStore, active: &DragRef) {
        self.active = match active {
            DragRef::Column(id) => board.column(id).cloned().map(DragItem::Column),
            DragRef::Task(id) => board.task(id).cloned().map(DragItem::Task),
        };
    }

    /// Live feedback while dragging. A task passing over another task takes
    /// its place (and column); a task hovering a column body joins that
    /// column. Column drags wait for the drop.
    pub fn on_drag_over(&mut self, board: &mut BoardStore, active: &DragRef, over: &DragRef) {
        if active.id() == over.id() {
            return;
        }
        match (active, over) {
            (DragRef::Task(task_id), DragRef::Task(over_id)) => {
                board.move_task(task_id, over_id);
            }
            (DragRef::Task(task_id), DragRef::Column(column_id)) => {
                board.move_task_to_column(task_id, column_id);
            }
            (DragRef::Column(_), _) => {}
        }
    }

    /// Ends the gesture and clears the active record. Task placement was
    /// already committed during hover, so only a column dropped on another
    /// column still mutates the board.
    pub fn on_drag_end(&mut self, board: &mut BoardStore, active: &DragRef, over: Option<&DragRef>) {
        self.active = None;
        let Some(over) = over else {
            return;
        };
        if active.id() == over.id() {
            return;
        }
        if let (DragRef::Column(active_id), DragRef::Column(over_id)) = (active, over) {
            board.move_column(active_id, over_id);
        }
    }
}
