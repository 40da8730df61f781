use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Params, and Actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: std::error::Error + Clone + Send + Sync + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from a freshly generated ID and the creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Entities that exist implicitly (e.g. per-key counters) return a fresh
    /// record here so that an action against an unseen ID can proceed.
    fn from_missing(_id: &Self::Id) -> Option<Self> {
        None
    }

    /// Secondary unique key (such as an email). No two stored items may share one.
    fn lookup_key(&self) -> Option<String> {
        None
    }

    /// True when the item holds nothing `from_missing` would not rebuild.
    /// Vacant items are dropped from the store instead of kept.
    fn is_vacant(&self) -> bool {
        false
    }

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;

    // --- Action Handler ---

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

/// Failures surfaced by the actor plumbing. Domain rejections travel inside `Rejected`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError<E> {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    DuplicateKey(String),
    #[error("{0}")]
    Rejected(E),
    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Register {
        item: T,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    FindByKey {
        key: String,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
    #[cfg(test)]
    Count {
        respond_to: Response<usize, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// Owns the registry for one entity type. Requests are handled one at a time,
/// so every operation is a complete read-modify-write.
pub struct ResourceActor<T: Entity> {
    name: &'static str,
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    index: HashMap<String, T::Id>,
    next_id_fn: Option<IdGenerator<T::Id>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(name: &'static str, buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name,
            receiver,
            store: HashMap::new(),
            index: HashMap::new(),
            next_id_fn: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Enables `Create` requests. Without a generator only `Register` can add items.
    pub fn with_id_generator(
        mut self,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> Self {
        self.next_id_fn = Some(Box::new(next_id_fn));
        self
    }

    #[instrument(name = "resource_actor", skip(self), fields(resource = %self.name))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Register { item, respond_to } => {
                    let _ = respond_to.send(self.handle_register(item));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::FindByKey { key, respond_to } => {
                    let found = self.index.get(&key).and_then(|id| self.store.get(id)).cloned();
                    let _ = respond_to.send(Ok(found));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let _ = respond_to.send(self.handle_action(id, action));
                }
                #[cfg(test)]
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }
        info!("Actor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError<T::Error>> {
        let next_id = self
            .next_id_fn
            .as_ref()
            .ok_or(FrameworkError::Unsupported("create without an id generator"))?;
        let mut item =
            T::from_create_params(next_id(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.insert_new(item.clone())?;
        Ok(item)
    }

    fn handle_register(&mut self, mut item: T) -> Result<T::Id, FrameworkError<T::Error>> {
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.insert_new(item)
    }

    fn insert_new(&mut self, item: T) -> Result<T::Id, FrameworkError<T::Error>> {
        let id = item.id().clone();
        if self.store.contains_key(&id) {
            warn!(id = %id, "Rejected duplicate key");
            return Err(FrameworkError::DuplicateKey(id.to_string()));
        }
        let key = item.lookup_key();
        if let Some(key) = &key {
            if self.index.contains_key(key) {
                warn!(key = %key, "Rejected duplicate lookup key");
                return Err(FrameworkError::DuplicateKey(key.clone()));
            }
        }
        if let Some(key) = key {
            self.index.insert(key, id.clone());
        }
        self.store.insert(id.clone(), item);
        debug!(id = %id, "Item stored");
        Ok(id)
    }

    // Hooks run against a copy; the stored record is only replaced on success.
    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError<T::Error>> {
        let mut draft = self
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        draft.on_update(patch).map_err(FrameworkError::Rejected)?;
        self.commit(id, draft.clone())?;
        Ok(draft)
    }

    fn handle_action(
        &mut self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        let mut draft = match self.store.get(&id) {
            Some(item) => item.clone(),
            None => match T::from_missing(&id) {
                Some(item) => {
                    debug!(id = %id, "Materialized implicit item");
                    item
                }
                None => return Err(FrameworkError::NotFound(id.to_string())),
            },
        };
        let result = draft.handle_action(action).map_err(FrameworkError::Rejected)?;
        self.commit(id, draft)?;
        Ok(result)
    }

    /// Replaces the stored record with `draft`, keeping the key index in step.
    fn commit(&mut self, id: T::Id, draft: T) -> Result<(), FrameworkError<T::Error>> {
        let old_key = self.store.get(&id).and_then(T::lookup_key);
        let new_key = draft.lookup_key();
        if new_key != old_key {
            if let Some(key) = &new_key {
                if self.index.contains_key(key) {
                    warn!(key = %key, "Rejected duplicate lookup key");
                    return Err(FrameworkError::DuplicateKey(key.clone()));
                }
            }
        }

        if let Some(key) = old_key {
            self.index.remove(&key);
        }
        if draft.is_vacant() {
            if self.store.remove(&id).is_some() {
                debug!(id = %id, "Dropped vacant item");
            }
            return Ok(());
        }
        if let Some(key) = new_key {
            self.index.insert(key, id.clone());
        }
        self.store.insert(id, draft);
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError<T::Error>> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn register(&self, item: T) -> Result<T::Id, FrameworkError<T::Error>> {
        self.call(|respond_to| ResourceRequest::Register { item, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError<T::Error>> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    /// Looks an item up by its [`Entity::lookup_key`].
    pub async fn find_by_key(
        &self,
        key: impl Into<String>,
    ) -> Result<Option<T>, FrameworkError<T::Error>> {
        let key = key.into();
        self.call(|respond_to| ResourceRequest::FindByKey { key, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError<T::Error>> {
        self.call(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError<T::Error>> {
        self.call(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        self.call(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    /// Test-only inspection of the registry size
    #[cfg(test)]
    pub async fn count(&self) -> Result<usize, FrameworkError<T::Error>> {
        self.call(|respond_to| ResourceRequest::Count { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
