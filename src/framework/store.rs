//! # Ordered Store
//!
//! The authoritative, in-memory collection behind a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Insertion order is significant: new entities go to the front, so iteration order is
//! newest-first. Seeded entities keep the order they were given in.

use crate::framework::{ActorEntity, FrameworkError};

/// An ordered, id-assigning collection of entities.
///
/// All operations are synchronous. The store is owned by exactly one actor task, so it
/// needs no locking.
pub struct OrderedStore<T: ActorEntity> {
    items: Vec<T>,
    next_id: u32,
}

impl<T: ActorEntity> OrderedStore<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends entities in the given order, assigning ids from the sequence.
    ///
    /// Used to load an initial catalog so that the first seed gets id 1 and is listed first.
    pub fn seed<I>(&mut self, seeds: I) -> Result<(), FrameworkError>
    where
        I: IntoIterator<Item = T::Create>,
    {
        for params in seeds {
            let item = self.build(params)?;
            self.items.push(item);
        }
        Ok(())
    }

    /// Creates a new entity with a fresh id and places it at the front.
    pub fn insert(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        let item = self.build(params)?;
        self.items.insert(0, item.clone());
        Ok(item)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Merges `update` onto the entity with `id`, keeping its position and id.
    pub fn replace(&mut self, id: &T::Id, update: T::Update) -> Result<T, FrameworkError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(update)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        Ok(item.clone())
    }

    pub fn remove(&mut self, id: &T::Id) -> Result<T, FrameworkError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        Ok(self.items.remove(position))
    }

    /// Read-only view of the whole collection, newest first.
    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Entities retained by `filter`, in store order.
    pub fn filtered(&self, filter: &T::Filter) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| item.matches(filter))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn build(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let item =
            T::from_create_params(id, params).map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.next_id += 1;
        Ok(item)
    }
}

impl<T: ActorEntity> Default for OrderedStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
