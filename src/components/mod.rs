//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod new_task_form;
mod notifications;
mod signin_form;
mod signup_form;
mod task_item;
mod task_list;

pub use dashboard::Dashboard;
pub use new_task_form::NewTaskForm;
pub use notifications::Notifications;
pub use signin_form::SigninForm;
pub use signup_form::SignupForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
