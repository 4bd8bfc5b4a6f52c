//! Taskboard Frontend App
//!
//! Top-level component: session bootstrap, page switching, and wiring
//! of the client services into the reactive store.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use taskboard_client::auth::AuthService;
use taskboard_client::remote::{ApiClient, ApiConfig};
use taskboard_client::session::{SessionEvents, SessionStore};
use taskboard_client::sync::{Notifier, SyncEvent, TaskListSync};

use crate::components::{Dashboard, Notifications, SigninForm, SignupForm};
use crate::context::{AppContext, AppServices, Page};
use crate::session::BrowserSession;
use crate::store::{
    store_push_notice, store_set_loading, store_set_tasks, store_set_user, AppState, AppStore,
};
use reactive_stores::Store;

/// Routes synchronizer failures into the toast area
struct StoreNotifier {
    store: AppStore,
}

impl Notifier for StoreNotifier {
    fn error(&self, message: &str) {
        store_push_notice(&self.store, message);
    }
}

/// Sends the user back to signin when the server rejects the session
struct SignInRedirect {
    set_page: WriteSignal<Page>,
    store: AppStore,
}

impl SessionEvents for SignInRedirect {
    fn session_invalidated(&self) {
        store_set_user(&self.store, None);
        store_push_notice(&self.store, "Session expired, please sign in again");
        self.set_page.set(Page::SignIn);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let session = Arc::new(BrowserSession::new());
    let start_page = if session.is_authenticated() {
        Page::Dashboard
    } else {
        Page::SignIn
    };

    let (page, set_page) = signal(start_page);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new(
        (page, set_page),
        (reload_trigger, set_reload_trigger),
    ));

    // Service wiring: session store and invalidation handling live one
    // level below the synchronizer, in the transport
    let session_store: Arc<dyn SessionStore> = session;
    let events: Arc<dyn SessionEvents> = Arc::new(SignInRedirect { set_page, store });
    let client = Arc::new(ApiClient::new(
        ApiConfig::default(),
        session_store.clone(),
        events,
    ));

    let sync = Arc::new(TaskListSync::new(
        client.clone(),
        Arc::new(StoreNotifier { store }),
    ));
    sync.set_listener(move |event| match event {
        SyncEvent::Tasks(tasks) => store_set_tasks(&store, tasks),
        SyncEvent::Loading(loading) => store_set_loading(&store, loading),
    });

    let auth = Arc::new(AuthService::new(client, session_store));
    store_set_user(&store, auth.current_user());
    provide_context(AppServices {
        sync: sync.clone(),
        auth,
    });

    // Load tasks whenever the dashboard is shown or a reload is requested
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        if page.get() != Page::Dashboard {
            return;
        }
        web_sys::console::log_1(&format!("[APP] Loading tasks, trigger={}", trigger).into());
        let sync = sync.clone();
        spawn_local(async move {
            let _ = sync.refresh().await;
        });
    });

    view! {
        <div class="app-layout">
            <Notifications />
            {move || match page.get() {
                Page::SignIn => view! { <SigninForm /> }.into_any(),
                Page::SignUp => view! { <SignupForm /> }.into_any(),
                Page::Dashboard => view! { <Dashboard /> }.into_any(),
            }}
        </div>
    }
}
