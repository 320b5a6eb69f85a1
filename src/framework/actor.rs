//! # Generic Actor Server
//!
//! `ResourceActor` owns an [`OrderedStore`] and processes requests one at a time. It is the
//! only writer of the store.

use crate::framework::{
    ActorEntity, FrameworkError, Latency, OrderedStore, Page, ResourceClient, ResourceRequest,
    Response,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "server" half of the actor. It owns the `store` and the receiving end
/// of the channel. Requests are processed sequentially, so the store needs no `Mutex`.
///
/// # Deferred Replies
/// Every request is applied to the store as soon as it is received. The reply is then
/// delivered according to the [`Latency`] policy: immediately, or from a detached task
/// after the configured delay. The actor loop never sleeps, so a request issued after
/// another one always observes its effect, even if the earlier reply arrives later.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Seed** (optional): `actor.seed(...)` loads an initial collection.
/// 3.  **Run**: spawn `actor.run()` on the Tokio runtime.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: OrderedStore<T>,
    latency: Latency,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When full, client calls wait.
    /// * `latency` - Delay applied to every reply.
    pub fn new(buffer_size: usize, latency: Latency) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: OrderedStore::new(),
            latency,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Loads an initial collection before the loop starts.
    pub fn seed<I>(&mut self, seeds: I) -> Result<(), FrameworkError>
    where
        I: IntoIterator<Item = T::Create>,
    {
        self.store.seed(seeds)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // e.g. "Product" instead of "storefront_catalog::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), latency = ?self.latency, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.store.insert(params);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    self.reply(respond_to, result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    self.reply(respond_to, Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.store.replace(&id, update);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    self.reply(respond_to, result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.store.remove(&id).map(|_| ());
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    self.reply(respond_to, result);
                }
                ResourceRequest::List {
                    filter,
                    page,
                    respond_to,
                } => {
                    let matched = self.store.filtered(&filter);
                    let page = Page::slice(matched, page);
                    debug!(
                        entity_type,
                        ?filter,
                        current_page = page.current_page,
                        total_pages = page.total_pages,
                        returned = page.items.len(),
                        "List"
                    );
                    self.reply(respond_to, Ok(page));
                }
                ResourceRequest::Snapshot { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "Snapshot");
                    self.reply(respond_to, Ok(self.store.all().to_vec()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Delivers `result`, deferred by the latency policy.
    ///
    /// A dropped receiver is ignored: the caller stopped waiting, the store effect stands.
    fn reply<R: Send + 'static>(&self, respond_to: Response<R>, result: Result<R, FrameworkError>) {
        match self.latency.delay() {
            None => {
                let _ = respond_to.send(result);
            }
            Some(delay) => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = respond_to.send(result);
                });
            }
        }
    }
}
