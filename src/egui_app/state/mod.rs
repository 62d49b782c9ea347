use std::sync::mpsc::{channel, Receiver, Sender};

use chrono::{Duration as ChronoDuration, Utc};
use thiserror::Error;
use tokio::runtime::{Builder, Runtime};

use crate::egui_app::sources::SourceError;
use crate::egui_app::store::{
    Applied, Completion, LoadState, Lookup, Notice, Operation, PendingOp, StoreEvent, UserStore,
};
use crate::egui_app::types::{AppView, DetailState, UserForm};
use crate::egui_app::Config;
use crate::shared::user::{UserId, UserRecord};

/// How long a notice stays on screen
pub const TOAST_SECONDS: i64 = 4;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build backend client: {0}")]
    Source(#[from] SourceError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Central application state shared across egui views.
///
/// Backend calls run on `runtime`; their completions come back over
/// `completion_rx` and are applied to the store on the UI thread in
/// [`AppState::poll`].
pub struct AppState {
    pub config: Config,
    pub store: UserStore,
    runtime: Runtime,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
    events: Receiver<StoreEvent>,

    pub current_view: AppView,
    pub search_query: String,
    pub add_form: UserForm,
    pub edit_form: UserForm,
    pub detail: Option<DetailState>,
    /// User awaiting delete confirmation
    pub pending_delete: Option<UserId>,
    pub toasts: Vec<Notice>,
    /// Dispatched backend calls not yet applied
    pub in_flight: usize,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, StartupError> {
        let store = UserStore::from_config(&config)?;
        Ok(Self::with_store(config, store)?)
    }

    pub fn with_store(config: Config, mut store: UserStore) -> Result<Self, std::io::Error> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("userdesk-io")
            .enable_all()
            .build()?;
        let (completion_tx, completion_rx) = channel();
        let events = store.subscribe();

        Ok(Self {
            config,
            store,
            runtime,
            completion_tx,
            completion_rx,
            events,
            current_view: AppView::List,
            search_query: String::new(),
            add_form: UserForm::default(),
            edit_form: UserForm::default(),
            detail: None,
            pending_delete: None,
            toasts: Vec::new(),
            in_flight: 0,
        })
    }

    /// Fetch both sources; also used for "Reload"
    pub fn start_load(&mut self) {
        tracing::info!(
            demo = self.config.demo_api_url(),
            records = self.config.record_store_url(),
            "loading users"
        );
        for op in self.store.begin_initial_load() {
            self.spawn(op);
        }
    }

    fn spawn(&mut self, op: PendingOp) {
        let tx = self.completion_tx.clone();
        self.in_flight += 1;
        self.runtime.spawn(async move {
            let completion = op.await;
            let _ = tx.send(completion);
        });
    }

    /// Apply finished backend calls and collect notices. Call once per frame.
    pub fn poll(&mut self) {
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            self.handle_completion(completion);
        }
        while let Ok(event) = self.events.try_recv() {
            match event {
                StoreEvent::Notice(notice) => self.toasts.push(notice),
                StoreEvent::Changed { len } => tracing::trace!(len, "collection changed"),
            }
        }
        self.prune_toasts();
    }

    fn handle_completion(&mut self, completion: Completion) {
        if let Completion::LookedUp { id, .. } = &completion {
            if !self.awaiting_detail(id) {
                tracing::debug!(%id, "detail view moved on, dropping lookup result");
                return;
            }
        }

        let operation = completion.operation();
        match self.store.apply(completion) {
            Ok(Applied::Created(_)) => {
                self.add_form.clear();
                if self.current_view == AppView::AddUser {
                    self.navigate(AppView::List);
                }
            }
            Ok(Applied::Updated(record)) => {
                if self.current_view == AppView::Detail(record.id.clone()) {
                    self.navigate(AppView::List);
                }
            }
            Ok(Applied::Deleted(id)) => {
                if self.current_view == AppView::Detail(id) {
                    self.navigate(AppView::List);
                }
            }
            Ok(Applied::Found(record)) => self.show_detail(record, false),
            Ok(Applied::Merged { .. }) => {}
            Err(_) if operation == Operation::Lookup => self.navigate(AppView::List),
            // already reported through a notice
            Err(_) => {}
        }
    }

    fn awaiting_detail(&self, id: &UserId) -> bool {
        matches!(&self.detail, Some(DetailState::Loading(waiting)) if waiting == id)
            && self.current_view == AppView::Detail(id.clone())
    }

    fn show_detail(&mut self, record: UserRecord, listed: bool) {
        self.edit_form = UserForm::from_record(&record);
        self.detail = Some(DetailState::Ready { record, listed });
    }

    pub fn navigate(&mut self, view: AppView) {
        if !matches!(view, AppView::Detail(_)) {
            self.detail = None;
            self.edit_form.clear();
        }
        self.current_view = view;
    }

    /// Enter the detail view: memory first, record store otherwise
    pub fn open_detail(&mut self, id: UserId) {
        self.navigate(AppView::Detail(id.clone()));
        match self.store.begin_lookup(&id) {
            Lookup::Cached(record) => self.show_detail(record, true),
            Lookup::Pending(op) => {
                self.detail = Some(DetailState::Loading(id));
                self.spawn(op);
            }
        }
    }

    pub fn submit_new_user(&mut self) {
        if let Some(fields) = self.add_form.validate() {
            let op = self.store.begin_create(fields);
            self.spawn(op);
        }
    }

    pub fn submit_update(&mut self) {
        let id = match &self.detail {
            Some(detail) if detail.is_editable() => detail.id().clone(),
            _ => return,
        };
        let Some(fields) = self.edit_form.validate() else {
            return;
        };
        // Rejections are published as notices by the store
        if let Ok(op) = self.store.begin_update(&id, fields) {
            self.spawn(op);
        }
    }

    pub fn request_delete(&mut self, id: UserId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        if let Ok(op) = self.store.begin_delete(&id) {
            self.spawn(op);
        }
    }

    /// Users matching the search box, in collection order
    pub fn visible_users(&self) -> Vec<&UserRecord> {
        self.store.search(&self.search_query)
    }

    /// True until the first source has answered
    pub fn is_loading(&self) -> bool {
        self.store.load_state() == LoadState::Loading && self.store.users().is_empty()
    }

    pub fn dismiss_toast(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    fn prune_toasts(&mut self) {
        let cutoff = Utc::now() - ChronoDuration::seconds(TOAST_SECONDS);
        self.toasts.retain(|notice| notice.at > cutoff);
    }
}
