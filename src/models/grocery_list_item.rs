use serde::{Deserialize, Serialize};

use crate::Record;

/// One purchase line on a grocery list.
///
/// `grocery_list_id` and `product_id` are plain foreign keys; nothing
/// guarantees the referenced records exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Record)]
#[record(collection = "grocery_list_items")]
pub struct GroceryListItem {
    #[record(id)]
    pub id: i64,
    pub grocery_list_id: i64,
    pub product_id: i64,
    pub amount: i64,
}

impl GroceryListItem {
    pub fn new(id: i64, grocery_list_id: i64, product_id: i64, amount: i64) -> Self {
        Self {
            id,
            grocery_list_id,
            product_id,
            amount,
        }
    }
}
