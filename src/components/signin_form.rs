//! Signin Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use taskboard_client::auth::SignInData;

use crate::context::{use_app_context, use_services, Page};
use crate::store::{store_set_user, use_app_store};

#[component]
pub fn SigninForm() -> impl IntoView {
    let ctx = use_app_context();
    let services = use_services();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let data = SignInData {
            email: email.get(),
            password: password.get(),
        };
        if data.email.trim().is_empty() || data.password.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }
        set_error.set(None);
        set_pending.set(true);

        let services = services.clone();
        spawn_local(async move {
            match services.auth.sign_in(data).await {
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
            <h2>"Welcome Back"</h2>
            <p class="auth-subtitle">"Sign in to continue to your workspace"</p>

            <form class="auth-form" on:submit=submit>
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
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

                <button type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>

            <p class="auth-switch">
                "No account yet? "
                <button type="button" class="link-btn" on:click=move |_| ctx.go_to(Page::SignUp)>
                    "Sign up"
                </button>
            </p>
        </div>
    }
}
