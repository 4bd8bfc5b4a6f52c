//! Notifications Component
//!
//! Dismissible toast list fed by the synchronizer's failure channel.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn Notifications() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notices">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice">
                            <span class="notice-text">{notice.message.clone()}</span>
                            <button
                                class="notice-dismiss"
                                on:click=move |_| store_dismiss_notice(&store, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
