use leptos::prelude::*;

use crate::features::kanban::components::{KanbanBoard, KanbanColumn};
use crate::features::kanban::hooks::use_board;

#[component]
pub fn BoardPage() -> impl IntoView {
    let hook = use_board();
    let board = hook.board;

    view! {
        <div class="board-page">
            <header class="board-header">
                <h1>"Kanban Board"</h1>
                <span class="board-meta">
                    {move || {
                        board
                            .with(|b| {
                                format!(
                                    "{} columns, {} tasks",
                                    b.columns().len(),
                                    b.tasks().len(),
                                )
                            })
                    }}
                </span>
            </header>
            <KanbanBoard on_add_column=hook.create_column>
                // Re-renders from a fresh snapshot after every mutation
                {move || {
                    board
                        .with(|b| {
                            b.columns()
                                .iter()
                                .cloned()
                                .map(|column| {
                                    let tasks = b.tasks_in(&column.id);
                                    view! { <KanbanColumn column=column tasks=tasks hook=hook /> }
                                })
                                .collect::<Vec<_>>()
                        })
                }}
            </KanbanBoard>
        </div>
    }
}
