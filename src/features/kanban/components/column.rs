use leptos::prelude::*;
use leptos::{ev, html};

use crate::core::models::{Column, DragRef, Task};
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn KanbanColumn(column: Column, tasks: Vec<Task>, hook: BoardHook) -> impl IntoView {
    let (edit_mode, set_edit_mode) = signal(false);
    let draft = RwSignal::new(column.title.clone());
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Focus the title input once it has been rendered
    Effect::new(move |_| {
        if edit_mode.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let drag = hook.drag;
    let title = column.title.clone();
    let task_count = tasks.len();
    let column_id_for_ghost = column.id.clone();
    let column_id_for_start = column.id.clone();
    let column_id_for_over = column.id.clone();
    let column_id_for_drop = column.id.clone();
    let column_id_for_delete = column.id.clone();
    let column_id_for_rename = column.id.clone();
    let column_id_for_add = column.id.clone();

    view! {
        <div
            class="kanban-column"
            class:dragging=move || drag.with(|d| d.is_dragging(&column_id_for_ghost))
            on:dragover=move |ev: ev::DragEvent| {
                // Fires on the column body between and below the cards; card
                // hovers stop propagation before reaching here
                ev.prevent_default();
                hook.drag_over.run(DragRef::Column(column_id_for_over.clone()));
            }
            on:drop=move |ev: ev::DragEvent| {
                ev.prevent_default();
                hook.drag_end.run(Some(DragRef::Column(column_id_for_drop.clone())));
            }
        >
            <div
                class="column-header"
                draggable=move || if edit_mode.get() { "false" } else { "true" }
                on:dragstart=move |ev: ev::DragEvent| {
                    if let Some(data_transfer) = ev.data_transfer() {
                        data_transfer.set_effect_allowed("move");
                    }
                    hook.drag_start.run(DragRef::Column(column_id_for_start.clone()));
                }
                on:dragend=move |_| hook.drag_end.run(None)
                on:click=move |_| set_edit_mode.set(true)
            >
                {move || {
                    if edit_mode.get() {
                        let commit_id = column_id_for_rename.clone();
                        let blur_id = column_id_for_rename.clone();
                        view! {
                            <input
                                node_ref=input_ref
                                class="column-title-input"
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                                on:keydown=move |ev: ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        hook.rename_column.run((commit_id.clone(), draft.get_untracked()));
                                        set_edit_mode.set(false);
                                    }
                                }
                                on:blur=move |_| {
                                    hook.rename_column.run((blur_id.clone(), draft.get_untracked()));
                                    set_edit_mode.set(false);
                                }
                            />
                        }
                            .into_any()
                    } else {
                        view! {
                            <h3>{title.clone()}</h3>
                            <span class="task-count">{task_count}</span>
                        }
                            .into_any()
                    }
                }}
                <button
                    class="column-delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        hook.delete_column.run(column_id_for_delete.clone());
                    }
                >
                    "×"
                </button>
            </div>
            <div class="column-content">
                {tasks
                    .into_iter()
                    .map(|task| view! { <TaskCard task=task hook=hook /> })
                    .collect::<Vec<_>>()}
            </div>
            <button
                class="add-task-btn"
                on:click=move |_| hook.create_task.run(column_id_for_add.clone())
            >
                "+ Add task"
            </button>
        </div>
    }
}
