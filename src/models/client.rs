use serde::{Deserialize, Serialize};

use crate::Record;

/// A customer owning one or more grocery lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "clients")]
pub struct Client {
    #[record(id)]
    pub id: i64,
    pub name: String,
}

impl Client {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}
