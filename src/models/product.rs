use serde::{Deserialize, Serialize};

use crate::Record;

/// A product that can appear on grocery lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "products")]
pub struct Product {
    #[record(id)]
    pub id: i64,
    pub name: String,
}

impl Product {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}
