// Lets `#[derive(Record)]` expand to `::bought_products::Record` inside this crate too.
extern crate self as bought_products;

mod aggregation;
mod models;
mod selection;
mod store;

pub use aggregation::{BoughtProductsError, BoughtProductsQuery, BoughtProductsService};
pub use models::{BoughtProducts, Client, GroceryList, GroceryListItem, Product, Record};
pub use selection::{Observers, Selection, SelectionController, SelectionEvent, SubscriptionId};
pub use store::{
    ClientStore, GroceryListStore, InMemoryStore, ProductStore, PurchaseItemStore, RecordStore,
    Seed, SeedError, StoreError,
};

// Re-export the derive macro for `Record`
pub use bought_products_macros::Record;
