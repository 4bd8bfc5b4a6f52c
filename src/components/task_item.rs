//! Task Item Component
//!
//! Single task card: status cycle button, inline edit, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use taskboard_client::domain::{Task, TaskPatch, TaskStatus};

use crate::context::use_services;

fn status_class(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "todo",
        TaskStatus::InProgress => "in-progress",
        TaskStatus::Done => "done",
    }
}

fn status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "○",
        TaskStatus::InProgress => "◐",
        TaskStatus::Done => "●",
    }
}

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let services = use_services();
    let id = task.id;
    let status = task.status;

    let (editing, set_editing) = signal(false);
    let (edit_title, set_edit_title) = signal(task.title.clone());
    let (edit_description, set_edit_description) =
        signal(task.description.clone().unwrap_or_default());

    let cycle = {
        let services = services.clone();
        move |_| {
            let services = services.clone();
            spawn_local(async move {
                let _ = services.sync.cycle_status(id).await;
            });
        }
    };

    let delete = {
        let services = services.clone();
        move |_| {
            let services = services.clone();
            spawn_local(async move {
                let _ = services.sync.delete_task(id).await;
            });
        }
    };

    let save = {
        let services = services.clone();
        move |_| {
            let title = edit_title.get();
            if title.trim().is_empty() {
                return;
            }
            let description = edit_description.get();
            let patch = TaskPatch {
                title: Some(title.trim().to_string()),
                description: if description.trim().is_empty() {
                    None
                } else {
                    Some(description.trim().to_string())
                },
                status: None,
            };
            set_editing.set(false);
            let services = services.clone();
            spawn_local(async move {
                let _ = services.sync.update_task(id, patch).await;
            });
        }
    };

    let title = task.title.clone();
    let description = task.description.clone();
    let created = task.created_at.format("%b %e, %Y").to_string();
    let updated = task.updated_at.map(|t| t.format("%b %e, %Y").to_string());

    view! {
        <div class=format!("task-card {}", status_class(status))>
            {move || {
                if editing.get() {
                    view! {
                        <div class="task-edit">
                            <input
                                type="text"
                                prop:value=move || edit_title.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_edit_title.set(input.value());
                                }
                            />
                            <textarea
                                placeholder="Task description (optional)"
                                prop:value=move || edit_description.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    set_edit_description.set(input.value());
                                }
                            ></textarea>
                            <div class="edit-actions">
                                <button class="save-btn" on:click=save.clone()>"Save"</button>
                                <button class="cancel-btn" on:click=move |_| set_editing.set(false)>
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    let title = title.clone();
                    let description = description.clone();
                    let created = created.clone();
                    let updated = updated.clone();
                    view! {
                        <div class="task-body">
                            <div class="task-main">
                                <button
                                    class="status-btn"
                                    title="Cycle status"
                                    on:click=cycle.clone()
                                >
                                    {status_icon(status)}
                                </button>
                                <div class="task-text">
                                    <h4 class="task-title">{title}</h4>
                                    {description.map(|d| view! { <p class="task-description">{d}</p> })}
                                    <p class="task-meta">
                                        <span class="task-status-label">{status.label()}</span>
                                        <span>{format!(" · Created {}", created)}</span>
                                        {updated.map(|u| view! { <span>{format!(" · Updated {}", u)}</span> })}
                                    </p>
                                </div>
                            </div>
                            <div class="task-actions">
                                <button class="edit-btn" on:click=move |_| set_editing.set(true)>
                                    "Edit"
                                </button>
                                <button class="delete-btn" on:click=delete.clone()>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
