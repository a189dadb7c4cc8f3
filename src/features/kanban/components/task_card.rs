use leptos::prelude::*;
use leptos::{ev, html};

use crate::core::models::{DragItem, DragRef, Task};
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn TaskCard(task: Task, hook: BoardHook) -> impl IntoView {
    let (edit_mode, set_edit_mode) = signal(false);
    let draft = RwSignal::new(task.content.clone());
    let textarea_ref: NodeRef<html::Textarea> = NodeRef::new();

    // Focus the editor once it has been rendered
    Effect::new(move |_| {
        if edit_mode.get() {
            if let Some(textarea) = textarea_ref.get() {
                let _ = textarea.focus();
            }
        }
    });

    let drag = hook.drag;
    let content = task.content.clone();
    let task_id_for_ghost = task.id.clone();
    let task_id_for_start = task.id.clone();
    let task_id_for_over = task.id.clone();
    let task_id_for_drop = task.id.clone();
    let task_id_for_delete = task.id.clone();
    let task_id_for_commit = task.id.clone();
    let column_id_for_drop = task.column_id.clone();

    view! {
        <div
            class="task-card"
            class:dragging=move || drag.with(|d| d.is_dragging(&task_id_for_ghost))
            draggable=move || if edit_mode.get() { "false" } else { "true" }
            on:dragstart=move |ev: ev::DragEvent| {
                if let Some(data_transfer) = ev.data_transfer() {
                    data_transfer.set_effect_allowed("move");
                }
                hook.drag_start.run(DragRef::Task(task_id_for_start.clone()));
            }
            on:dragover=move |ev: ev::DragEvent| {
                // prevent_default marks the card as a drop target
                ev.prevent_default();
                ev.stop_propagation();
                hook.drag_over.run(DragRef::Task(task_id_for_over.clone()));
            }
            on:drop=move |ev: ev::DragEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                // A column dropped on a card lands on the card's column
                let over = if drag
                    .with_untracked(|d| matches!(d.active(), Some(DragItem::Column(_))))
                {
                    DragRef::Column(column_id_for_drop.clone())
                } else {
                    DragRef::Task(task_id_for_drop.clone())
                };
                hook.drag_end.run(Some(over));
            }
            on:dragend=move |_| hook.drag_end.run(None)
            on:click=move |_| set_edit_mode.set(true)
        >
            {move || {
                if edit_mode.get() {
                    let commit_id = task_id_for_commit.clone();
                    let blur_id = task_id_for_commit.clone();
                    view! {
                        <textarea
                            node_ref=textarea_ref
                            class="task-edit-input"
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                            on:keydown=move |ev: ev::KeyboardEvent| {
                                // Enter commits, Shift+Enter inserts a newline
                                if ev.key() == "Enter" && !ev.shift_key() {
                                    ev.prevent_default();
                                    hook.update_task.run((commit_id.clone(), draft.get_untracked()));
                                    set_edit_mode.set(false);
                                }
                            }
                            on:blur=move |_| {
                                hook.update_task.run((blur_id.clone(), draft.get_untracked()));
                                set_edit_mode.set(false);
                            }
                        ></textarea>
                    }
                        .into_any()
                } else {
                    view! { <p class="task-content">{content.clone()}</p> }.into_any()
                }
            }}
            <button
                class="task-delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    hook.delete_task.run(task_id_for_delete.clone());
                }
            >
                "🗑"
            </button>
        </div>
    }
}
