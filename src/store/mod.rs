pub mod filter;

use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use crate::models::{Category, InventoryError, Item, ItemQuery, ItemUpdate};

/// In-memory item store, keyed and ordered by item id.
///
/// Readers share the lock; `insert`, `update` and `delete` hold the write lock
/// for the whole check-then-mutate sequence.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<BTreeMap<i64, Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a set of items. Later items replace earlier ones
    /// with the same id.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items = items.into_iter().map(|item| (item.id(), item)).collect();
        Self { items: RwLock::new(items) }
    }

    /// Create a store holding the sample inventory served at startup
    pub fn seeded() -> Result<Self, InventoryError> {
        let items = vec![
            Item::new(0, "Hammer", 9.99, 20, Category::Tools)?,
            Item::new(1, "Pliers", 5.99, 20, Category::Tools)?,
            Item::new(2, "Nails", 1.99, 100, Category::Consumables)?,
        ];
        info!("Seeding item store with {} sample items", items.len());
        Ok(Self::with_items(items))
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Items whose id is strictly below `limit`, in ascending id order.
    ///
    /// `limit` is a ceiling on the id, not on the number of results.
    pub async fn list(&self, limit: i64) -> BTreeMap<i64, Item> {
        let items = self.items.read().await;
        items
            .range(..limit)
            .map(|(id, item)| (*id, item.clone()))
            .collect()
    }

    pub async fn get(&self, id: i64) -> Result<Item, InventoryError> {
        self.items
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(InventoryError::NotFound(id))
    }

    /// Items matching every constraint of `query`, in ascending id order
    pub async fn search(&self, query: &ItemQuery) -> Vec<Item> {
        let items = self.items.read().await;
        filter::select(items.values(), query)
    }

    pub async fn insert(&self, item: Item) -> Result<Item, InventoryError> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id()) {
            return Err(InventoryError::Conflict(item.id()));
        }
        debug!("Inserting item {}", item.id());
        items.insert(item.id(), item.clone());
        Ok(item)
    }

    /// Overwrite the supplied fields of an existing item in place.
    pub async fn update(&self, id: i64, update: ItemUpdate) -> Result<Item, InventoryError> {
        let mut items = self.items.write().await;
        let item = items.get_mut(&id).ok_or(InventoryError::NotFound(id))?;
        if update.is_empty() {
            return Err(InventoryError::BadRequest);
        }
        update.validate()?;
        debug!("Updating item {}", id);
        item.apply(update);
        Ok(item.clone())
    }

    pub async fn delete(&self, id: i64) -> Result<Item, InventoryError> {
        let removed = self
            .items
            .write()
            .await
            .remove(&id)
            .ok_or(InventoryError::NotFound(id))?;
        debug!("Deleted item {}", id);
        Ok(removed)
    }
}
