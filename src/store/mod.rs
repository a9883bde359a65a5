//! Stores - the four read capabilities the purchase join depends on.
//!
//! The join never talks to a concrete backend. It asks for:
//!
//! - every purchase line ([`PurchaseItemStore`]),
//! - a grocery list by id ([`GroceryListStore`]),
//! - a client by id ([`ClientStore`]),
//! - a product by id, or all products ([`ProductStore`]).
//!
//! Method names are distinct per capability so a single value may implement
//! all four. Any [`RecordStore`] does, through the blanket impls below.

mod error;
mod in_memory;
mod seed;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use seed::{Seed, SeedError};

use crate::models::{Client, GroceryList, GroceryListItem, Product, Record};

/// Source of purchase lines.
pub trait PurchaseItemStore {
    fn list_items(&self) -> Result<Vec<GroceryListItem>, StoreError>;
}

/// Grocery list lookup by id.
pub trait GroceryListStore {
    fn get_list(&self, id: i64) -> Result<Option<GroceryList>, StoreError>;
}

/// Client lookup by id.
pub trait ClientStore {
    fn get_client(&self, id: i64) -> Result<Option<Client>, StoreError>;
}

/// Product lookup by id, plus the full product catalogue.
pub trait ProductStore {
    fn get_product(&self, id: i64) -> Result<Option<Product>, StoreError>;

    /// All products, used to fill the list a user picks a selection from.
    fn list_products(&self) -> Result<Vec<Product>, StoreError>;
}

/// Abstract record storage keyed by collection and integer id.
///
/// Methods that would collide with the capability traits (`get_*`, `list_*`)
/// use a `_record(s)` suffix.
pub trait RecordStore: Send + Sync {
    /// Get a record by id. Returns None if not found.
    fn get_record<M: Record>(&self, id: i64) -> Result<Option<M>, StoreError>;

    /// All records of a collection, in ascending id order.
    fn list_records<M: Record>(&self) -> Result<Vec<M>, StoreError>;

    /// Insert or replace a record.
    fn upsert<M: Record>(&self, record: &M) -> Result<(), StoreError>;

    /// Insert a new record. Fails if one with the same id already exists.
    fn insert<M: Record>(&self, record: &M) -> Result<(), StoreError>;

    /// Delete a record by id. Returns true if it existed.
    fn delete<M: Record>(&self, id: i64) -> Result<bool, StoreError>;
}

// Blanket implementations: anything implementing RecordStore serves every capability

impl<S: RecordStore> PurchaseItemStore for S {
    fn list_items(&self) -> Result<Vec<GroceryListItem>, StoreError> {
        self.list_records()
    }
}

impl<S: RecordStore> GroceryListStore for S {
    fn get_list(&self, id: i64) -> Result<Option<GroceryList>, StoreError> {
        self.get_record(id)
    }
}

impl<S: RecordStore> ClientStore for S {
    fn get_client(&self, id: i64) -> Result<Option<Client>, StoreError> {
        self.get_record(id)
    }
}

impl<S: RecordStore> ProductStore for S {
    fn get_product(&self, id: i64) -> Result<Option<Product>, StoreError> {
        self.get_record(id)
    }

    fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.list_records()
    }
}
