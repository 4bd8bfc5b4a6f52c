//! Dashboard Page
//!
//! Signed-in surface: header with profile and sign out, task creation
//! form, status counters, and the grouped task list.

use leptos::prelude::*;

use taskboard_client::domain::TaskStatus;

use crate::components::{NewTaskForm, TaskList};
use crate::context::{use_app_context, use_services, Page};
use crate::store::{store_set_user, use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let services = use_services();
    let store = use_app_store();

    let sign_out = move |_| {
        services.auth.sign_out();
        store_set_user(&store, None);
        ctx.go_to(Page::SignIn);
    };

    let count = move |status: TaskStatus| {
        store
            .tasks()
            .get()
            .iter()
            .filter(|t| t.status == status)
            .count()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Taskboard"</h1>
                <div class="header-user">
                    {move || store.user().get().map(|user| view! {
                        <span class="user-name">{user.name.clone()}</span>
                        <span class="user-email">{user.email.clone()}</span>
                    })}
                    <button class="sign-out-btn" on:click=sign_out>"Sign Out"</button>
                </div>
            </header>

            <main class="dashboard-main">
                <section class="sidebar">
                    <h2>"Create New Task"</h2>
                    <NewTaskForm />

                    <div class="stats">
                        <div class="stat">
                            <span class="stat-label">"To Do"</span>
                            <span class="stat-value">{move || count(TaskStatus::Todo)}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-label">"In Progress"</span>
                            <span class="stat-value">{move || count(TaskStatus::InProgress)}</span>
                        </div>
                        <div class="stat">
                            <span class="stat-label">"Done"</span>
                            <span class="stat-value">{move || count(TaskStatus::Done)}</span>
                        </div>
                    </div>
                </section>

                <section class="tasks-panel">
                    <h2>"Your Tasks"</h2>
                    <TaskList />
                </section>
            </main>
        </div>
    }
}
