//! Optimistic Task List Synchronizer
//!
//! Mirrors the remote task collection in client memory. Mutations are
//! applied locally first and rolled back to a pre-mutation snapshot when
//! the remote call fails. Mutations to the same task id are serialized
//! through a per-id FIFO lock; refreshes carry a sequence number so a
//! superseded response can never overwrite a newer one.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::domain::{ApiError, ApiResult, Task, TaskDraft, TaskPatch};
use crate::remote::RemoteTasks;

/// State change pushed to the registered listener
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// The collection changed; carries a full snapshot
    Tasks(Vec<Task>),
    /// A full fetch started or finished
    Loading(bool),
}

/// Failure channel: every failed operation surfaces one message here
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

type Listener = Box<dyn Fn(SyncEvent) + Send + Sync>;

struct ListState {
    tasks: Vec<Task>,
    loading: bool,
}

/// Client-held mirror of the remote task collection
pub struct TaskListSync<R: RemoteTasks> {
    remote: Arc<R>,
    notifier: Arc<dyn Notifier>,
    state: Mutex<ListState>,
    /// FIFO locks serializing mutations per task id
    op_locks: Mutex<HashMap<u32, Arc<tokio::sync::Mutex<()>>>>,
    /// Latest issued refresh sequence number; stale resolutions are discarded
    refresh_seq: AtomicU64,
    listener: Mutex<Option<Listener>>,
}

impl<R: RemoteTasks> TaskListSync<R> {
    pub fn new(remote: Arc<R>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            remote,
            notifier,
            state: Mutex::new(ListState {
                tasks: Vec::new(),
                loading: false,
            }),
            op_locks: Mutex::new(HashMap::new()),
            refresh_seq: AtomicU64::new(0),
            listener: Mutex::new(None),
        }
    }

    /// Register the single listener receiving state changes
    pub fn set_listener(&self, listener: impl Fn(SyncEvent) + Send + Sync + 'static) {
        *self.listener.lock().expect("listener lock") = Some(Box::new(listener));
    }

    /// Snapshot of the current collection
    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().expect("state lock").tasks.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().expect("state lock").loading
    }

    /// Replace the collection wholesale from the server
    pub async fn refresh(&self) -> ApiResult<()> {
        let seq = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_loading(true);

        let result = self.remote.list_tasks().await;

        // Only the most recently issued request's result may apply
        if self.refresh_seq.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding superseded refresh response");
            return Ok(());
        }

        match result {
            Ok(tasks) => {
                debug!(count = tasks.len(), "refreshed task collection");
                self.state.lock().expect("state lock").tasks = tasks;
                self.emit_tasks();
                self.set_loading(false);
                Ok(())
            }
            Err(err) => {
                // Keep the stale collection: stale-but-consistent
                self.set_loading(false);
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Create a task on the server and append the returned record
    ///
    /// No optimistic insert: without a server-assigned id there is
    /// nothing consistent to show.
    pub async fn create_task(&self, draft: TaskDraft) -> ApiResult<()> {
        if draft.title.trim().is_empty() {
            let err = ApiError::InvalidInput("Title is required".to_string());
            self.report(&err);
            return Err(err);
        }

        match self.remote.create_task(&draft).await {
            Ok(created) => {
                debug!(id = created.id, "task created");
                self.state.lock().expect("state lock").tasks.push(created);
                self.emit_tasks();
                Ok(())
            }
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Apply a partial update optimistically, rolling back on failure
    ///
    /// An unknown id changes nothing locally but the remote request is
    /// still attempted.
    pub async fn update_task(&self, id: u32, patch: TaskPatch) -> ApiResult<()> {
        let lock = self.op_lock(id);
        let _guard = lock.lock().await;

        let (snapshot, changed) = {
            let mut state = self.state.lock().expect("state lock");
            let snapshot = state.tasks.clone();
            let target = state.tasks.iter_mut().find(|t| t.id == id);
            let changed = target.is_some();
            if let Some(task) = target {
                patch.apply_to(task);
            }
            (snapshot, changed)
        };
        if changed {
            self.emit_tasks();
        }

        match self.remote.update_task(id, &patch).await {
            Ok(server_task) => {
                // Adopt the server's representation of this record so
                // server-computed fields (updated_at) are picked up
                let adopted = {
                    let mut state = self.state.lock().expect("state lock");
                    match state.tasks.iter_mut().find(|t| t.id == id) {
                        Some(task) => {
                            *task = server_task;
                            true
                        }
                        None => false,
                    }
                };
                if adopted {
                    self.emit_tasks();
                }
                Ok(())
            }
            Err(err) => {
                warn!(id, "update failed, rolling back");
                self.state.lock().expect("state lock").tasks = snapshot;
                if changed {
                    self.emit_tasks();
                }
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Remove a task optimistically, restoring the snapshot on failure
    pub async fn delete_task(&self, id: u32) -> ApiResult<()> {
        let lock = self.op_lock(id);
        let _guard = lock.lock().await;

        let (snapshot, removed) = {
            let mut state = self.state.lock().expect("state lock");
            let snapshot = state.tasks.clone();
            let before = state.tasks.len();
            state.tasks.retain(|t| t.id != id);
            (snapshot, state.tasks.len() != before)
        };
        if removed {
            self.emit_tasks();
        }

        match self.remote.delete_task(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(id, "delete failed, rolling back");
                self.state.lock().expect("state lock").tasks = snapshot;
                if removed {
                    self.emit_tasks();
                }
                self.report(&err);
                Err(err)
            }
        }
    }

    /// Advance the task's status one step along the fixed cycle
    pub async fn cycle_status(&self, id: u32) -> ApiResult<()> {
        let current = self
            .state
            .lock()
            .expect("state lock")
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.status);

        match current {
            Some(status) => self.update_task(id, TaskPatch::status(status.next())).await,
            None => {
                debug!(id, "cycle_status on unknown task");
                Ok(())
            }
        }
    }

    fn op_lock(&self, id: u32) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.op_locks.lock().expect("op lock map");
        locks
            .entry(id)
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    fn set_loading(&self, loading: bool) {
        self.state.lock().expect("state lock").loading = loading;
        self.emit(SyncEvent::Loading(loading));
    }

    fn emit_tasks(&self) {
        let tasks = self.tasks();
        self.emit(SyncEvent::Tasks(tasks));
    }

    fn emit(&self, event: SyncEvent) {
        if let Some(listener) = self.listener.lock().expect("listener lock").as_ref() {
            listener(event);
        }
    }

    fn report(&self, err: &ApiError) {
        // Session teardown is surfaced by the transport layer already
        if matches!(err, ApiError::Unauthorized) {
            return;
        }
        self.notifier.error(&err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use tokio::sync::oneshot;
    use tokio::task::yield_now;

    use crate::domain::TaskStatus;

    /// Canned reply; an optional gate delays resolution until released
    struct Reply<T> {
        result: ApiResult<T>,
        gate: Option<oneshot::Receiver<()>>,
    }

    impl<T> Reply<T> {
        fn ready(result: ApiResult<T>) -> Self {
            Self { result, gate: None }
        }

        fn gated(result: ApiResult<T>) -> (Self, oneshot::Sender<()>) {
            let (tx, rx) = oneshot::channel();
            (
                Self {
                    result,
                    gate: Some(rx),
                },
                tx,
            )
        }
    }

    #[derive(Default)]
    struct FakeRemote {
        list: StdMutex<VecDeque<Reply<Vec<Task>>>>,
        create: StdMutex<VecDeque<Reply<Task>>>,
        update: StdMutex<VecDeque<Reply<Task>>>,
        delete: StdMutex<VecDeque<Reply<()>>>,
        calls: StdMutex<Vec<String>>,
    }

    impl FakeRemote {
        async fn next<T>(queue: &StdMutex<VecDeque<Reply<T>>>) -> ApiResult<T> {
            let reply = queue
                .lock()
                .unwrap()
                .pop_front()
                .expect("no canned reply left");
            if let Some(gate) = reply.gate {
                let _ = gate.await;
            }
            reply.result
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RemoteTasks for FakeRemote {
        async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
            self.record("list".to_string());
            Self::next(&self.list).await
        }

        async fn create_task(&self, draft: &TaskDraft) -> ApiResult<Task> {
            self.record(format!("create {}", draft.title));
            Self::next(&self.create).await
        }

        async fn update_task(&self, id: u32, _patch: &TaskPatch) -> ApiResult<Task> {
            self.record(format!("update {}", id));
            Self::next(&self.update).await
        }

        async fn delete_task(&self, id: u32) -> ApiResult<()> {
            self.record(format!("delete {}", id));
            Self::next(&self.delete).await
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: StdMutex<Vec<String>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn error(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    fn task(id: u32, title: &str, status: TaskStatus) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            status,
            owner_id: "user-1".to_string(),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
            updated_at: None,
        }
    }

    fn setup(
        initial: Vec<Task>,
    ) -> (
        Arc<TaskListSync<FakeRemote>>,
        Arc<FakeRemote>,
        Arc<RecordingNotifier>,
    ) {
        let remote = Arc::new(FakeRemote::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let sync = Arc::new(TaskListSync::new(remote.clone(), notifier.clone()));
        sync.state.lock().unwrap().tasks = initial;
        (sync, remote, notifier)
    }

    #[tokio::test]
    async fn test_refresh_replaces_collection_wholesale() {
        let (sync, remote, _notifier) = setup(vec![task(9, "Stale", TaskStatus::Done)]);
        let fresh = vec![
            task(1, "First", TaskStatus::Todo),
            task(2, "Second", TaskStatus::InProgress),
        ];
        remote
            .list
            .lock()
            .unwrap()
            .push_back(Reply::ready(Ok(fresh.clone())));

        sync.refresh().await.expect("refresh failed");

        assert_eq!(sync.tasks(), fresh);
        assert!(!sync.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_stale_collection() {
        let initial = vec![task(1, "Keep me", TaskStatus::Todo)];
        let (sync, remote, notifier) = setup(initial.clone());
        remote
            .list
            .lock()
            .unwrap()
            .push_back(Reply::ready(Err(ApiError::Network("timed out".into()))));

        let result = sync.refresh().await;

        assert!(result.is_err());
        assert_eq!(sync.tasks(), initial);
        assert!(!sync.is_loading());
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_superseded_refresh_response_is_discarded() {
        let (sync, remote, _notifier) = setup(Vec::new());
        let old = vec![task(1, "Old", TaskStatus::Todo)];
        let new = vec![task(2, "New", TaskStatus::Todo)];

        let (slow, release) = Reply::gated(Ok(old));
        remote.list.lock().unwrap().push_back(slow);
        remote.list.lock().unwrap().push_back(Reply::ready(Ok(new.clone())));

        let first = {
            let sync = sync.clone();
            tokio::spawn(async move { sync.refresh().await })
        };
        for _ in 0..5 {
            yield_now().await;
        }

        // Second call supersedes the first while it is still in flight
        sync.refresh().await.expect("refresh failed");
        assert_eq!(sync.tasks(), new);

        release.send(()).unwrap();
        first.await.unwrap().expect("first refresh errored");

        assert_eq!(sync.tasks(), new);
        assert_eq!(remote.calls(), vec!["list", "list"]);
    }

    #[tokio::test]
    async fn test_update_is_visible_before_resolution_and_rolls_back() {
        let initial = vec![task(1, "A", TaskStatus::Todo)];
        let (sync, remote, notifier) = setup(initial.clone());

        let (reply, release) = Reply::gated(Err(ApiError::Network("connection reset".into())));
        remote.update.lock().unwrap().push_back(reply);

        let handle = {
            let sync = sync.clone();
            tokio::spawn(async move {
                sync.update_task(1, TaskPatch::status(TaskStatus::InProgress))
                    .await
            })
        };
        for _ in 0..5 {
            yield_now().await;
        }

        // Optimistic window: visible before the network resolves
        assert_eq!(sync.tasks()[0].status, TaskStatus::InProgress);

        release.send(()).unwrap();
        let result = handle.await.unwrap();

        assert!(result.is_err());
        assert_eq!(sync.tasks(), initial);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_update_rolls_back_partial_field_patch() {
        let initial = vec![
            task(1, "A", TaskStatus::Todo),
            task(2, "B", TaskStatus::Done),
        ];
        let (sync, remote, _notifier) = setup(initial.clone());
        remote
            .update
            .lock()
            .unwrap()
            .push_back(Reply::ready(Err(ApiError::Api("rejected".into()))));

        let patch = TaskPatch {
            title: Some("A2".to_string()),
            description: Some("details".to_string()),
            status: None,
        };
        let result = sync.update_task(1, patch).await;

        assert!(result.is_err());
        assert_eq!(sync.tasks(), initial);
    }

    #[tokio::test]
    async fn test_update_success_adopts_server_record() {
        let (sync, remote, notifier) = setup(vec![task(1, "A", TaskStatus::Todo)]);
        let mut server_task = task(1, "A2", TaskStatus::Todo);
        server_task.updated_at = chrono::NaiveDate::from_ymd_opt(2024, 5, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0);
        remote
            .update
            .lock()
            .unwrap()
            .push_back(Reply::ready(Ok(server_task.clone())));

        sync.update_task(
            1,
            TaskPatch {
                title: Some("A2".to_string()),
                description: None,
                status: None,
            },
        )
        .await
        .expect("update failed");

        assert_eq!(sync.tasks(), vec![server_task]);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_changes_nothing_but_calls_remote() {
        let initial = vec![task(1, "A", TaskStatus::Todo)];
        let (sync, remote, _notifier) = setup(initial.clone());
        remote
            .update
            .lock()
            .unwrap()
            .push_back(Reply::ready(Ok(task(99, "Ghost", TaskStatus::Todo))));

        sync.update_task(99, TaskPatch::status(TaskStatus::Done))
            .await
            .expect("update failed");

        assert_eq!(sync.tasks(), initial);
        assert_eq!(remote.calls(), vec!["update 99"]);
    }

    #[tokio::test]
    async fn test_delete_removes_immediately_and_rolls_back() {
        let initial = vec![
            task(1, "A", TaskStatus::Todo),
            task(2, "B", TaskStatus::Done),
        ];
        let (sync, remote, notifier) = setup(initial.clone());

        let (reply, release) = Reply::gated(Err(ApiError::Api("boom".into())));
        remote.delete.lock().unwrap().push_back(reply);

        let handle = {
            let sync = sync.clone();
            tokio::spawn(async move { sync.delete_task(1).await })
        };
        for _ in 0..5 {
            yield_now().await;
        }

        assert_eq!(sync.tasks(), vec![task(2, "B", TaskStatus::Done)]);

        release.send(()).unwrap();
        assert!(handle.await.unwrap().is_err());

        assert_eq!(sync.tasks(), initial);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_success() {
        let (sync, remote, _notifier) = setup(vec![
            task(1, "A", TaskStatus::Todo),
            task(2, "B", TaskStatus::Done),
        ]);
        remote.delete.lock().unwrap().push_back(Reply::ready(Ok(())));

        sync.delete_task(1).await.expect("delete failed");

        assert_eq!(sync.tasks(), vec![task(2, "B", TaskStatus::Done)]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_issues_exactly_one_request() {
        let initial = vec![task(1, "A", TaskStatus::Todo)];
        let (sync, remote, _notifier) = setup(initial.clone());
        remote.delete.lock().unwrap().push_back(Reply::ready(Ok(())));

        sync.delete_task(99).await.expect("delete failed");

        assert_eq!(sync.tasks(), initial);
        assert_eq!(remote.calls(), vec!["delete 99"]);
    }

    #[tokio::test]
    async fn test_create_appends_only_after_success() {
        let (sync, remote, _notifier) = setup(Vec::new());
        let created = task(5, "Fresh", TaskStatus::Todo);

        let (reply, release) = Reply::gated(Ok(created.clone()));
        remote.create.lock().unwrap().push_back(reply);

        let handle = {
            let sync = sync.clone();
            tokio::spawn(async move { sync.create_task(TaskDraft::new("Fresh", "user-1")).await })
        };
        for _ in 0..5 {
            yield_now().await;
        }

        // No optimistic insert while the request is in flight
        assert!(sync.tasks().is_empty());

        release.send(()).unwrap();
        handle.await.unwrap().expect("create failed");

        assert_eq!(sync.tasks(), vec![created]);
    }

    #[tokio::test]
    async fn test_create_failure_leaves_collection_unchanged() {
        let initial = vec![task(1, "A", TaskStatus::Todo)];
        let (sync, remote, notifier) = setup(initial.clone());
        remote
            .create
            .lock()
            .unwrap()
            .push_back(Reply::ready(Err(ApiError::Api("nope".into()))));

        let result = sync.create_task(TaskDraft::new("Doomed", "user-1")).await;

        assert!(result.is_err());
        assert_eq!(sync.tasks(), initial);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_title_without_remote_call() {
        let (sync, remote, notifier) = setup(Vec::new());

        let result = sync.create_task(TaskDraft::new("   ", "user-1")).await;

        assert_eq!(
            result,
            Err(ApiError::InvalidInput("Title is required".to_string()))
        );
        assert!(remote.calls().is_empty());
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_cycle_status_three_times_returns_to_start() {
        for start in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done] {
            let (sync, remote, _notifier) = setup(vec![task(1, "A", start)]);

            let mut expected = start;
            for _ in 0..3 {
                expected = expected.next();
                remote
                    .update
                    .lock()
                    .unwrap()
                    .push_back(Reply::ready(Ok(task(1, "A", expected))));
                sync.cycle_status(1).await.expect("cycle failed");
                assert_eq!(sync.tasks()[0].status, expected);
            }

            assert_eq!(sync.tasks()[0].status, start);
        }
    }

    #[tokio::test]
    async fn test_cycle_status_unknown_id_is_local_noop() {
        let (sync, remote, _notifier) = setup(Vec::new());

        sync.cycle_status(42).await.expect("cycle failed");

        assert!(remote.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_cycle_rolls_back_to_previous_status() {
        let initial = vec![task(1, "A", TaskStatus::InProgress)];
        let (sync, remote, notifier) = setup(initial.clone());
        remote
            .update
            .lock()
            .unwrap()
            .push_back(Reply::ready(Err(ApiError::Network("offline".into()))));

        let result = sync.cycle_status(1).await;

        assert!(result.is_err());
        assert_eq!(sync.tasks(), initial);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_same_id_mutations_are_serialized() {
        let initial = vec![task(1, "A", TaskStatus::Todo)];
        let (sync, remote, notifier) = setup(initial.clone());

        // First update stalls in flight, second queues behind it; both fail
        let (slow, release) = Reply::gated(Err(ApiError::Network("reset".into())));
        remote.update.lock().unwrap().push_back(slow);
        remote
            .update
            .lock()
            .unwrap()
            .push_back(Reply::ready(Err(ApiError::Network("reset".into()))));

        let first = {
            let sync = sync.clone();
            tokio::spawn(async move {
                sync.update_task(
                    1,
                    TaskPatch {
                        title: Some("B".to_string()),
                        description: None,
                        status: None,
                    },
                )
                .await
            })
        };
        for _ in 0..5 {
            yield_now().await;
        }

        let second = {
            let sync = sync.clone();
            tokio::spawn(async move {
                sync.update_task(
                    1,
                    TaskPatch {
                        title: Some("C".to_string()),
                        description: None,
                        status: None,
                    },
                )
                .await
            })
        };
        for _ in 0..5 {
            yield_now().await;
        }

        // The queued mutation must not have applied while the first is in flight
        assert_eq!(sync.tasks()[0].title, "B");

        release.send(()).unwrap();
        assert!(first.await.unwrap().is_err());
        assert!(second.await.unwrap().is_err());

        // Second snapshot was taken after the first rollback, so the
        // original value survives both failures
        assert_eq!(sync.tasks(), initial);
        assert_eq!(notifier.messages().len(), 2);
        assert_eq!(remote.calls(), vec!["update 1", "update 1"]);
    }

    #[tokio::test]
    async fn test_updates_to_different_ids_run_independently() {
        let (sync, remote, _notifier) = setup(vec![
            task(1, "A", TaskStatus::Todo),
            task(2, "B", TaskStatus::Todo),
        ]);

        // First id stalls; the other id is not blocked by it
        let (slow, release) = Reply::gated(Ok(task(1, "A2", TaskStatus::Todo)));
        remote.update.lock().unwrap().push_back(slow);
        remote
            .update
            .lock()
            .unwrap()
            .push_back(Reply::ready(Ok(task(2, "B2", TaskStatus::Todo))));

        let first = {
            let sync = sync.clone();
            tokio::spawn(async move {
                sync.update_task(
                    1,
                    TaskPatch {
                        title: Some("A2".to_string()),
                        description: None,
                        status: None,
                    },
                )
                .await
            })
        };
        for _ in 0..5 {
            yield_now().await;
        }

        sync.update_task(
            2,
            TaskPatch {
                title: Some("B2".to_string()),
                description: None,
                status: None,
            },
        )
        .await
        .expect("independent update failed");
        assert_eq!(sync.tasks()[1].title, "B2");

        release.send(()).unwrap();
        first.await.unwrap().expect("first update failed");
        assert_eq!(sync.tasks()[0].title, "A2");
    }

    #[tokio::test]
    async fn test_listener_sees_loading_and_tasks_events() {
        let (sync, remote, _notifier) = setup(Vec::new());
        let seen: Arc<StdMutex<Vec<SyncEvent>>> = Arc::new(StdMutex::new(Vec::new()));
        let sink = seen.clone();
        sync.set_listener(move |event| sink.lock().unwrap().push(event));

        remote
            .list
            .lock()
            .unwrap()
            .push_back(Reply::ready(Ok(vec![task(1, "A", TaskStatus::Todo)])));
        sync.refresh().await.expect("refresh failed");

        let events = seen.lock().unwrap();
        assert!(matches!(events[0], SyncEvent::Loading(true)));
        assert!(matches!(&events[1], SyncEvent::Tasks(tasks) if tasks.len() == 1));
        assert!(matches!(events[2], SyncEvent::Loading(false)));
    }
}
