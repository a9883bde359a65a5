//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bought_products::{
    BoughtProducts, BoughtProductsQuery, BoughtProductsService, Client, ClientStore, GroceryList,
    GroceryListItem, GroceryListStore, InMemoryStore, Product, ProductStore, PurchaseItemStore,
    RecordStore, SelectionController, SelectionEvent, StoreError,
};

pub type MemoryService =
    BoughtProductsService<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore>;

pub fn service(store: &InMemoryStore) -> MemoryService {
    BoughtProductsService::new(store.clone(), store.clone(), store.clone(), store.clone())
}

/// Anna buys milk on "Weekly", Bob buys milk on "Monthly". Bread is never bought.
///
/// Records are inserted with Bob first so the sort has work to do.
pub fn anna_and_bob() -> InMemoryStore {
    let store = InMemoryStore::new();
    store.insert(&Product::new(5, "Milk")).unwrap();
    store.insert(&Product::new(6, "Bread")).unwrap();
    store.insert(&Client::new(1, "Bob")).unwrap();
    store.insert(&Client::new(2, "Anna")).unwrap();
    store.insert(&GroceryList::new(10, 1, "Monthly")).unwrap();
    store.insert(&GroceryList::new(20, 2, "Weekly")).unwrap();
    store.insert(&GroceryListItem::new(100, 10, 5, 1)).unwrap();
    store.insert(&GroceryListItem::new(101, 20, 5, 3)).unwrap();
    store
}

pub fn names(rows: &[BoughtProducts]) -> Vec<(String, String)> {
    rows.iter()
        .map(|r| (r.client.name.clone(), r.grocery_list.name.clone()))
        .collect()
}

/// Collects every event a controller publishes.
pub fn record_events<Q: BoughtProductsQuery>(
    controller: &mut SelectionController<Q>,
) -> Arc<Mutex<Vec<SelectionEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    controller.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    events
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Items,
    Lists,
    Clients,
    Products,
}

/// Delegates to an in-memory store, except for one capability which always fails.
pub struct FlakyStore {
    inner: InMemoryStore,
    broken: Capability,
}

impl FlakyStore {
    pub fn new(inner: InMemoryStore, broken: Capability) -> Self {
        Self { inner, broken }
    }

    fn check(&self, capability: Capability) -> Result<(), StoreError> {
        if self.broken == capability {
            Err(StoreError::Unavailable(format!("{:?} offline", capability)))
        } else {
            Ok(())
        }
    }
}

impl PurchaseItemStore for FlakyStore {
    fn list_items(&self) -> Result<Vec<GroceryListItem>, StoreError> {
        self.check(Capability::Items)?;
        self.inner.list_items()
    }
}

impl GroceryListStore for FlakyStore {
    fn get_list(&self, id: i64) -> Result<Option<GroceryList>, StoreError> {
        self.check(Capability::Lists)?;
        self.inner.get_list(id)
    }
}

impl ClientStore for FlakyStore {
    fn get_client(&self, id: i64) -> Result<Option<Client>, StoreError> {
        self.check(Capability::Clients)?;
        self.inner.get_client(id)
    }
}

impl ProductStore for FlakyStore {
    fn get_product(&self, id: i64) -> Result<Option<Product>, StoreError> {
        self.check(Capability::Products)?;
        self.inner.get_product(id)
    }

    fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.check(Capability::Products)?;
        self.inner.list_products()
    }
}
