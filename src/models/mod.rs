//! Records - the reference data the purchase join reads.
//!
//! Products, clients, grocery lists and their line items are owned by
//! whatever store holds them; this crate only reads them. `BoughtProducts`
//! is the one derived row type and is never stored.
//!
//! ## Example
//!
//! ```ignore
//! use bought_products::{Record, Product};
//!
//! #[derive(Clone, Serialize, Deserialize, Record)]
//! #[record(collection = "products")]
//! pub struct Product {
//!     #[record(id)]
//!     pub id: i64,
//!     pub name: String,
//! }
//!
//! assert_eq!(Product::COLLECTION, "products");
//! ```

mod bought_products;
mod client;
mod grocery_list;
mod grocery_list_item;
mod product;

use serde::{de::DeserializeOwned, Serialize};

pub use bought_products::BoughtProducts;
pub use client::Client;
pub use grocery_list::GroceryList;
pub use grocery_list_item::GroceryListItem;
pub use product::Product;

/// Trait for types that can be kept in a `RecordStore`.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "products", "clients").
    /// Maps to a table in SQL, a collection in MongoDB, a key prefix in KV stores, etc.
    const COLLECTION: &'static str;

    /// Returns the integer identity of this record.
    fn id(&self) -> i64;
}
