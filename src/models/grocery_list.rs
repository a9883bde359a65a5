use serde::{Deserialize, Serialize};

use crate::Record;

/// A named grocery list belonging to a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "grocery_lists")]
pub struct GroceryList {
    #[record(id)]
    pub id: i64,
    pub client_id: i64,
    pub name: String,
}

impl GroceryList {
    pub fn new(id: i64, client_id: i64, name: &str) -> Self {
        Self {
            id,
            client_id,
            name: name.to_string(),
        }
    }
}
