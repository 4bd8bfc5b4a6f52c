//! New Task Form Component
//!
//! Creates tasks for the signed-in user; the form resets only when the
//! server confirms the creation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use taskboard_client::domain::TaskDraft;

use crate::context::use_services;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let services = use_services();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() || pending.get() {
            return;
        }
        let Some(user) = store.user().get_untracked() else {
            return;
        };

        let mut draft = TaskDraft::new(text.trim(), user.id);
        let desc = description.get();
        if !desc.trim().is_empty() {
            draft.description = Some(desc.trim().to_string());
        }

        set_pending.set(true);
        let services = services.clone();
        spawn_local(async move {
            if services.sync.create_task(draft).await.is_ok() {
                set_title.set(String::new());
                set_description.set(String::new());
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="new-task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_description.set(input.value());
                }
            ></textarea>
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
