//! Seed - JSON fixture describing the initial contents of a store.
//!
//! ```json
//! {
//!   "products": [{ "id": 5, "name": "Milk" }],
//!   "clients": [{ "id": 1, "name": "Anna" }],
//!   "grocery_lists": [{ "id": 10, "client_id": 1, "name": "Weekly" }],
//!   "grocery_list_items": [{ "id": 100, "grocery_list_id": 10, "product_id": 5, "amount": 2 }]
//! }
//! ```
//!
//! Every collection is optional. Foreign keys are not checked: a seed may
//! contain dangling references, and the join will skip them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{event, Level};

use super::{InMemoryStore, RecordStore, StoreError};
use crate::models::{Client, GroceryList, GroceryListItem, Product};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid seed document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write seed records: {0}")]
    Store(#[from] StoreError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub products: Vec<Product>,
    pub clients: Vec<Client>,
    pub grocery_lists: Vec<GroceryList>,
    pub grocery_list_items: Vec<GroceryListItem>,
}

impl Seed {
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&contents)
    }

    /// Upsert every record into `store`. Existing records with the same id
    /// are replaced.
    pub fn apply<S: RecordStore>(&self, store: &S) -> Result<(), SeedError> {
        for product in &self.products {
            store.upsert(product)?;
        }
        for client in &self.clients {
            store.upsert(client)?;
        }
        for list in &self.grocery_lists {
            store.upsert(list)?;
        }
        for item in &self.grocery_list_items {
            store.upsert(item)?;
        }

        event!(
            Level::DEBUG,
            products = self.products.len(),
            clients = self.clients.len(),
            grocery_lists = self.grocery_lists.len(),
            grocery_list_items = self.grocery_list_items.len(),
            "seed applied"
        );
        Ok(())
    }

    /// A fresh `InMemoryStore` holding exactly this seed.
    pub fn into_store(self) -> Result<InMemoryStore, SeedError> {
        let store = InMemoryStore::new();
        self.apply(&store)?;
        Ok(store)
    }
}
