pub mod board_store;
pub mod drag_reconciler;

pub use board_store::BoardStore;
pub use drag_reconciler::DragReconciler;
