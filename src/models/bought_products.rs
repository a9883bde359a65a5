use serde::Serialize;

use super::{Client, GroceryList, Product};

/// One resolved purchase: who bought the product, and on which list.
///
/// Built fresh for every query and never written back to a store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoughtProducts {
    pub client: Client,
    pub grocery_list: GroceryList,
    pub product: Product,
}

impl BoughtProducts {
    pub fn new(client: Client, grocery_list: GroceryList, product: Product) -> Self {
        Self {
            client,
            grocery_list,
            product,
        }
    }
}
