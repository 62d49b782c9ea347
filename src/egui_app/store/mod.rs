//! # Reconciliation Store
//!
//! Owns the merged, identifier-unique collection of users built from the demo
//! API and the record store, and arbitrates every mutation against each
//! record's [`Origin`](crate::shared::user::Origin).
//!
//! ## Rules
//!
//! - **Initial load**: both sources are fetched independently; each batch is
//!   merged as it arrives (existing ids win). A failed source leaves the
//!   collection as it is and is reported once.
//! - **Create** always goes to the record store and appends the returned
//!   record.
//! - **Update / Delete** are rejected without any backend call when the target
//!   is read-only or not in the collection. Otherwise the record store is
//!   called and the collection changes only after it confirms.
//! - **Lookup** answers from memory first, then asks the record store. A
//!   fetched record is returned but not inserted; demo records that are not in
//!   memory cannot be looked up.
//!
//! No operation is retried.
//!
//! ## Driving the store
//!
//! The UI thread never awaits. It calls a `begin_*` method, which does the
//! policy check immediately and hands back a [`PendingOp`]; the op is run on
//! a runtime and its [`Completion`] is passed back to [`UserStore::apply`] on
//! the UI thread. Headless callers can use the async shortcuts instead:
//!
//! ```rust,no_run
//! use userdesk::egui_app::{Config, UserStore};
//! use userdesk::shared::user::{UserFields, UserId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = UserStore::from_config(&Config::new())?;
//! store.load().await;
//! store.update(&UserId::Int(11), UserFields::new("Ada", "ada@example.com", "5551234567")).await?;
//! # Ok(())
//! # }
//! ```

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::egui_app::config::Config;
use crate::egui_app::sources::{
    DemoApiClient, ReadOnlySource, RecordStoreClient, SourceError, SourceKind, WritableSource,
};
use crate::shared::user::{UserFields, UserId, UserRecord};

pub mod collection;
pub mod error;
pub mod notice;

pub use collection::MergedCollection;
pub use error::{Operation, StoreError};
pub use notice::{Notice, NoticeLevel, StoreEvent};

use notice::Observers;

/// A dispatched backend call, resolving to the completion to apply
pub type PendingOp = BoxFuture<'static, Completion>;

/// Result of a backend call, applied to the store on the UI thread
#[derive(Debug)]
pub enum Completion {
    Fetched {
        source: SourceKind,
        result: Result<Vec<UserRecord>, SourceError>,
    },
    Created {
        result: Result<UserRecord, SourceError>,
    },
    Updated {
        record: UserRecord,
        result: Result<(), SourceError>,
    },
    Deleted {
        id: UserId,
        result: Result<(), SourceError>,
    },
    LookedUp {
        id: UserId,
        result: Result<UserRecord, SourceError>,
    },
}

impl Completion {
    pub fn operation(&self) -> Operation {
        match self {
            Completion::Fetched { .. } => Operation::Load,
            Completion::Created { .. } => Operation::Create,
            Completion::Updated { .. } => Operation::Update,
            Completion::Deleted { .. } => Operation::Delete,
            Completion::LookedUp { .. } => Operation::Lookup,
        }
    }
}

/// What an applied completion did
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Merged { source: SourceKind, added: usize },
    Created(UserRecord),
    Updated(UserRecord),
    Deleted(UserId),
    Found(UserRecord),
}

/// Lookup-by-id outcome
pub enum Lookup {
    /// Already in memory; no network call
    Cached(UserRecord),
    /// Not in memory; the record store is being asked
    Pending(PendingOp),
}

impl fmt::Debug for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Cached(user) => f.debug_tuple("Cached").field(user).finish(),
            Lookup::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Per-source initial load status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceStatus {
    #[default]
    Idle,
    Pending,
    Loaded,
    Failed,
}

/// Overall initial load status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    NotStarted,
    Loading,
    Complete,
    /// Some sources merged, the listed ones failed
    Partial { failed: Vec<SourceKind> },
    /// Every source failed
    Unavailable,
}

pub struct UserStore {
    demo: Arc<dyn ReadOnlySource>,
    records: Arc<dyn WritableSource>,
    users: MergedCollection,
    demo_status: SourceStatus,
    records_status: SourceStatus,
    observers: Observers,
}

impl UserStore {
    pub fn new(demo: Arc<dyn ReadOnlySource>, records: Arc<dyn WritableSource>) -> Self {
        Self {
            demo,
            records,
            users: MergedCollection::new(),
            demo_status: SourceStatus::Idle,
            records_status: SourceStatus::Idle,
            observers: Observers::default(),
        }
    }

    /// Store backed by the HTTP clients for the configured base URLs
    pub fn from_config(config: &Config) -> Result<Self, SourceError> {
        Ok(Self::new(
            Arc::new(DemoApiClient::new(config)?),
            Arc::new(RecordStoreClient::new(config)?),
        ))
    }

    // ---- queries -------------------------------------------------------

    pub fn users(&self) -> &[UserRecord] {
        self.users.as_slice()
    }

    pub fn get(&self, id: &UserId) -> Option<&UserRecord> {
        self.users.get(id)
    }

    pub fn search(&self, query: &str) -> Vec<&UserRecord> {
        self.users.search(query)
    }

    /// `None` when the id is not in the collection
    pub fn is_read_only(&self, id: &UserId) -> Option<bool> {
        self.users.get(id).map(UserRecord::is_read_only)
    }

    pub fn source_status(&self, source: SourceKind) -> SourceStatus {
        match source {
            SourceKind::DemoApi => self.demo_status,
            SourceKind::RecordStore => self.records_status,
        }
    }

    pub fn load_state(&self) -> LoadState {
        let statuses = [
            (SourceKind::DemoApi, self.demo_status),
            (SourceKind::RecordStore, self.records_status),
        ];

        if statuses.iter().all(|(_, s)| *s == SourceStatus::Idle) {
            return LoadState::NotStarted;
        }
        if statuses
            .iter()
            .any(|(_, s)| matches!(s, SourceStatus::Idle | SourceStatus::Pending))
        {
            return LoadState::Loading;
        }

        let failed: Vec<SourceKind> = statuses
            .iter()
            .filter(|(_, s)| *s == SourceStatus::Failed)
            .map(|(kind, _)| *kind)
            .collect();
        if failed.is_empty() {
            LoadState::Complete
        } else if failed.len() == statuses.len() {
            LoadState::Unavailable
        } else {
            LoadState::Partial { failed }
        }
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.observers.subscribe()
    }

    // ---- dispatch ------------------------------------------------------

    /// Start (or restart) fetching both sources. Each op merges on apply.
    pub fn begin_initial_load(&mut self) -> Vec<PendingOp> {
        self.demo_status = SourceStatus::Pending;
        self.records_status = SourceStatus::Pending;

        let demo = Arc::clone(&self.demo);
        let records = Arc::clone(&self.records);
        vec![
            async move {
                Completion::Fetched {
                    source: SourceKind::DemoApi,
                    result: demo.list_users().await,
                }
            }
            .boxed(),
            async move {
                Completion::Fetched {
                    source: SourceKind::RecordStore,
                    result: records.list_users().await,
                }
            }
            .boxed(),
        ]
    }

    /// Create on the record store. Fields are expected to be validated.
    pub fn begin_create(&self, fields: UserFields) -> PendingOp {
        let records = Arc::clone(&self.records);
        async move {
            Completion::Created {
                result: records.create_user(&fields).await,
            }
        }
        .boxed()
    }

    pub fn begin_update(&mut self, id: &UserId, fields: UserFields) -> Result<PendingOp, StoreError> {
        let candidate = self.authorize(id, Operation::Update)?.with_fields(fields);
        tracing::debug!(%id, "dispatching update");
        let records = Arc::clone(&self.records);
        Ok(async move {
            let result = records.replace_user(&candidate).await;
            Completion::Updated {
                record: candidate,
                result,
            }
        }
        .boxed())
    }

    pub fn begin_delete(&mut self, id: &UserId) -> Result<PendingOp, StoreError> {
        self.authorize(id, Operation::Delete)?;
        tracing::debug!(%id, "dispatching delete");
        let records = Arc::clone(&self.records);
        let id = id.clone();
        Ok(async move {
            let result = records.delete_user(&id).await;
            Completion::Deleted { id, result }
        }
        .boxed())
    }

    pub fn begin_lookup(&self, id: &UserId) -> Lookup {
        if let Some(user) = self.users.get(id) {
            return Lookup::Cached(user.clone());
        }
        tracing::debug!(%id, "user not in memory, asking the record store");
        let records = Arc::clone(&self.records);
        let id = id.clone();
        Lookup::Pending(
            async move {
                let result = records.get_user(&id).await;
                Completion::LookedUp { id, result }
            }
            .boxed(),
        )
    }

    /// Apply a finished backend call
    pub fn apply(&mut self, completion: Completion) -> Result<Applied, StoreError> {
        match completion {
            Completion::Fetched { source, result } => self
                .commit_fetch(source, result)
                .map(|added| Applied::Merged { source, added }),
            Completion::Created { result } => self.commit_create(result).map(Applied::Created),
            Completion::Updated { record, result } => {
                self.commit_update(record, result).map(Applied::Updated)
            }
            Completion::Deleted { id, result } => {
                self.commit_delete(id, result).map(Applied::Deleted)
            }
            Completion::LookedUp { id, result } => {
                self.commit_lookup(id, result).map(Applied::Found)
            }
        }
    }

    // ---- async shortcuts -----------------------------------------------

    /// Fetch both sources, merging each as soon as it arrives.
    ///
    /// Each fetch runs as its own tokio task, so this must be awaited
    /// inside a tokio runtime.
    pub async fn load(&mut self) -> LoadState {
        let mut pending = JoinSet::new();
        for op in self.begin_initial_load() {
            pending.spawn(op);
        }
        while let Some(joined) = pending.join_next().await {
            match joined {
                Ok(completion) => {
                    if let Err(error) = self.apply(completion) {
                        tracing::debug!(%error, "initial load continues without this source");
                    }
                }
                Err(error) => tracing::error!(%error, "source fetch task panicked"),
            }
        }
        self.load_state()
    }

    pub async fn create(&mut self, fields: UserFields) -> Result<UserRecord, StoreError> {
        let result = self.records.create_user(&fields).await;
        self.commit_create(result)
    }

    pub async fn update(&mut self, id: &UserId, fields: UserFields) -> Result<UserRecord, StoreError> {
        let candidate = self.authorize(id, Operation::Update)?.with_fields(fields);
        let result = self.records.replace_user(&candidate).await;
        self.commit_update(candidate, result)
    }

    pub async fn delete(&mut self, id: &UserId) -> Result<UserId, StoreError> {
        self.authorize(id, Operation::Delete)?;
        let result = self.records.delete_user(id).await;
        self.commit_delete(id.clone(), result)
    }

    /// Lookup-by-id: memory first, then the record store
    pub async fn find(&mut self, id: &UserId) -> Result<UserRecord, StoreError> {
        if let Some(user) = self.users.get(id) {
            return Ok(user.clone());
        }
        let result = self.records.get_user(id).await;
        self.commit_lookup(id.clone(), result)
    }

    // ---- policy --------------------------------------------------------

    /// Current writable record for `id`, or the rejection
    fn authorize(&mut self, id: &UserId, operation: Operation) -> Result<UserRecord, StoreError> {
        let current = self.users.get(id).cloned();
        match current {
            None => Err(self.fail(StoreError::NotFound { id: id.clone() })),
            Some(user) if user.is_read_only() => Err(self.fail(StoreError::NotPermitted {
                id: id.clone(),
                operation,
            })),
            Some(user) => Ok(user),
        }
    }

    // ---- commits -------------------------------------------------------

    fn commit_fetch(
        &mut self,
        source: SourceKind,
        result: Result<Vec<UserRecord>, SourceError>,
    ) -> Result<usize, StoreError> {
        let status = match source {
            SourceKind::DemoApi => &mut self.demo_status,
            SourceKind::RecordStore => &mut self.records_status,
        };

        match result {
            Ok(batch) => {
                *status = SourceStatus::Loaded;
                let fetched = batch.len();
                let added = self.users.merge(batch);
                tracing::info!(%source, fetched, added, "merged users");
                if added > 0 {
                    self.changed();
                }
                Ok(added)
            }
            Err(source_error) => {
                *status = SourceStatus::Failed;
                Err(self.fail(StoreError::Fetch {
                    source_kind: source,
                    source: source_error,
                }))
            }
        }
    }

    fn commit_create(&mut self, result: Result<UserRecord, SourceError>) -> Result<UserRecord, StoreError> {
        let record = result.map_err(|source| {
            self.fail(StoreError::Backend {
                operation: Operation::Create,
                source,
            })
        })?;

        let inserted = match self.users.push(record.clone()) {
            Ok(()) => true,
            Err(colliding) if self.is_read_only(&colliding.id) == Some(false) => {
                tracing::warn!(id = %colliding.id, "created id already listed, replacing the stale entry");
                self.users.replace(colliding).is_ok()
            }
            Err(colliding) => {
                tracing::warn!(id = %colliding.id, "created id collides with a demo user, not listing it");
                false
            }
        };

        tracing::info!(id = %record.id, "user created");
        self.notify(Notice::success("User created successfully!"));
        if inserted {
            self.changed();
        }
        Ok(record)
    }

    fn commit_update(
        &mut self,
        record: UserRecord,
        result: Result<(), SourceError>,
    ) -> Result<UserRecord, StoreError> {
        if let Err(source) = result {
            return Err(self.fail(StoreError::Backend {
                operation: Operation::Update,
                source,
            }));
        }

        // The listed entry may have changed while the request was in flight
        match self.is_read_only(&record.id) {
            Some(false) => {}
            Some(true) => {
                tracing::warn!(id = %record.id, "id now belongs to a demo user, discarding update");
                return Err(self.fail(StoreError::NotPermitted {
                    id: record.id,
                    operation: Operation::Update,
                }));
            }
            None => {
                tracing::warn!(id = %record.id, "updated user left the collection while in flight");
                return Err(self.fail(StoreError::NotFound { id: record.id }));
            }
        }

        if self.users.replace(record.clone()).is_err() {
            return Err(self.fail(StoreError::NotFound { id: record.id }));
        }
        self.changed();
        tracing::info!(id = %record.id, "user updated");
        self.notify(Notice::success("User updated successfully!"));
        Ok(record)
    }

    fn commit_delete(&mut self, id: UserId, result: Result<(), SourceError>) -> Result<UserId, StoreError> {
        if let Err(source) = result {
            return Err(self.fail(StoreError::Backend {
                operation: Operation::Delete,
                source,
            }));
        }

        if self.users.remove(&id).is_some() {
            self.changed();
        }
        tracing::info!(%id, "user deleted");
        self.notify(Notice::success("User deleted successfully!"));
        Ok(id)
    }

    fn commit_lookup(
        &mut self,
        id: UserId,
        result: Result<UserRecord, SourceError>,
    ) -> Result<UserRecord, StoreError> {
        match result {
            Ok(record) => {
                tracing::debug!(%id, origin = %record.origin(), "user fetched for detail view");
                Ok(record)
            }
            Err(SourceError::NotFound) => Err(self.fail(StoreError::NotFound { id })),
            Err(source) => Err(self.fail(StoreError::Backend {
                operation: Operation::Lookup,
                source,
            })),
        }
    }

    // ---- notifications -------------------------------------------------

    /// Log, notify once, and hand the error back
    fn fail(&mut self, error: StoreError) -> StoreError {
        tracing::warn!(%error, "user operation failed");
        self.notify(Notice::error(failure_message(&error)));
        error
    }

    fn notify(&mut self, notice: Notice) {
        self.observers.publish(StoreEvent::Notice(notice));
    }

    fn changed(&mut self) {
        let len = self.users.len();
        self.observers.publish(StoreEvent::Changed { len });
    }
}

fn failure_message(error: &StoreError) -> String {
    match error {
        StoreError::Fetch { source_kind, .. } => format!("Failed to fetch users from {}!", source_kind),
        StoreError::NotPermitted { operation, .. } => match operation {
            Operation::Update => "You cannot edit users from the demo API!".to_string(),
            other => format!("You cannot {} users from the demo API!", other),
        },
        StoreError::Backend { operation, .. } => match operation {
            Operation::Create => "Error creating user! Please try again.".to_string(),
            Operation::Update => "Error updating user!".to_string(),
            Operation::Delete => "Error deleting user! Please try again.".to_string(),
            Operation::Lookup => "Error fetching user details.".to_string(),
            Operation::Load => "Error loading users.".to_string(),
        },
        StoreError::NotFound { id } => format!("User {} was not found", id),
    }
}
