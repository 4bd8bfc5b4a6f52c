//! Signup Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use taskboard_client::auth::SignUpData;

use crate::context::{use_app_context, use_services, Page};
use crate::store::{store_set_user, use_app_store};

#[component]
pub fn SignupForm() -> impl IntoView {
    let ctx = use_app_context();
    let services = use_services();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let data = SignUpData {
            email: email.get().trim().to_string(),
            password: password.get(),
            name: name.get().trim().to_string(),
        };
        if data.name.is_empty() || data.email.is_empty() {
            set_error.set(Some("Name and email are required".to_string()));
            return;
        }
        if data.password.len() < 8 {
            set_error.set(Some("Password must be at least 8 characters".to_string()));
            return;
        }
        set_error.set(None);
        set_pending.set(true);

        let services = services.clone();
        spawn_local(async move {
            match services.auth.sign_up(data).await {
                Ok(user) => {
                    store_set_user(&store, Some(user));
                    ctx.reload();
                    ctx.go_to(Page::Dashboard);
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    set_pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Create Account"</h2>
            <p class="auth-subtitle">"Start organizing your tasks"</p>

            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <input
                    type="email"
                    placeholder="Email address"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Password (8+ characters)"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>

            <p class="auth-switch">
                "Already registered? "
                <button type="button" class="link-btn" on:click=move |_| ctx.go_to(Page::SignIn)>
                    "Sign in"
                </button>
            </p>
        </div>
    }
}
