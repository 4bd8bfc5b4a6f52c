//! Task List Component
//!
//! Status-grouped task sections with loading and empty states.

use leptos::prelude::*;

use taskboard_client::domain::{Task, TaskStatus};

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let section = move |status: TaskStatus| {
        let tasks = move || {
            store
                .tasks()
                .get()
                .into_iter()
                .filter(|t| t.status == status)
                .collect::<Vec<_>>()
        };
        view! {
            <Show when=move || !tasks().is_empty()>
                <div class="task-section">
                    <h3 class="section-title">
                        {move || format!("{} ({})", status.label(), tasks().len())}
                    </h3>
                    <For
                        each=tasks
                        key=|task: &Task| {
                            (
                                task.id,
                                task.title.clone(),
                                task.description.clone(),
                                task.status,
                                task.updated_at,
                            )
                        }
                        children=move |task| view! { <TaskItem task=task /> }
                    />
                </div>
            </Show>
        }
    };

    view! {
        <div class="task-list">
            <Show when=move || store.loading().get()>
                <p class="loading">"Loading tasks..."</p>
            </Show>
            <Show when=move || !store.loading().get() && store.tasks().get().is_empty()>
                <div class="empty-state">
                    <p>"No tasks yet. Create your first task to get started!"</p>
                </div>
            </Show>
            {section(TaskStatus::Todo)}
            {section(TaskStatus::InProgress)}
            {section(TaskStatus::Done)}
        </div>
    }
}
