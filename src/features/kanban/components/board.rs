use leptos::prelude::*;

/// Horizontal board surface: the columns, followed by the add-column button.
#[component]
pub fn KanbanBoard(on_add_column: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="kanban-board">
            {children()}
            <button class="add-column-btn" on:click=move |_| on_add_column.run(())>
                "+ Add column"
            </button>
        </div>
    }
}
