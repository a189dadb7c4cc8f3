use leptos::prelude::*;

use crate::core::models::{DragItem, DragRef};
use crate::core::services::{BoardStore, DragReconciler};

/// Reactive handle over the board state plus the intent callbacks the
/// components forward into. Copyable, so it can be passed down the component
/// tree as a single prop.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<BoardStore>,
    pub drag: RwSignal<DragReconciler>,
    pub create_column: Callback<()>,
    pub rename_column: Callback<(String, String)>,
    pub delete_column: Callback<String>,
    pub create_task: Callback<String>,
    pub update_task: Callback<(String, String)>,
    pub delete_task: Callback<String>,
    pub drag_start: Callback<DragRef>,
    pub drag_over: Callback<DragRef>,
    pub drag_end: Callback<Option<DragRef>>,
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(BoardStore::new());
    let drag = RwSignal::new(DragReconciler::new());

    let create_column = Callback::new(move |()| {
        board.update(|b| b.create_column());
    });

    let rename_column = Callback::new(move |(id, title): (String, String)| {
        board.update(|b| b.update_column_title(&id, title));
    });

    let delete_column = Callback::new(move |id: String| {
        web_sys::console::log_1(&format!("Deleting column {} and its tasks", id).into());
        board.update(|b| b.delete_column(&id));
    });

    let create_task = Callback::new(move |column_id: String| {
        board.update(|b| b.create_task(&column_id));
    });

    let update_task = Callback::new(move |(id, content): (String, String)| {
        board.update(|b| b.update_task_content(&id, content));
    });

    let delete_task = Callback::new(move |id: String| {
        board.update(|b| b.delete_task(&id));
    });

    // The browser's drag machinery only tells us which element an event fired
    // on, so the active side of each event is re-read from the reconciler's
    // record before forwarding.
    let drag_start = Callback::new(move |active: DragRef| {
        board.with_untracked(|b| drag.update(|d| d.on_drag_start(b, &active)));
    });

    let drag_over = Callback::new(move |over: DragRef| {
        let Some(active) = drag.with_untracked(|d| d.active().map(DragItem::to_ref)) else {
            return;
        };
        board.update(|b| drag.update(|d| d.on_drag_over(b, &active, &over)));
    });

    let drag_end = Callback::new(move |over: Option<DragRef>| {
        let Some(active) = drag.with_untracked(|d| d.active().map(DragItem::to_ref)) else {
            return;
        };
        board.update(|b| drag.update(|d| d.on_drag_end(b, &active, over.as_ref())));
    });

    BoardHook {
        board,
        drag,
        create_column,
        rename_column,
        delete_column,
        create_task,
        update_task,
        delete_task,
        drag_start,
        drag_over,
        drag_end,
    }
}
