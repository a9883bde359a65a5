use tracing::{event, Level};

use super::{BoughtProductsError, BoughtProductsQuery};
use crate::models::BoughtProducts;
use crate::store::{ClientStore, GroceryListStore, ProductStore, PurchaseItemStore, StoreError};

/// Joins purchase lines to their grocery list, client and product.
///
/// Holds no state besides its four stores; every call reads them afresh.
pub struct BoughtProductsService<I, L, C, P> {
    items: I,
    lists: L,
    clients: C,
    products: P,
}

impl<I, L, C, P> BoughtProductsService<I, L, C, P>
where
    I: PurchaseItemStore,
    L: GroceryListStore,
    C: ClientStore,
    P: ProductStore,
{
    pub fn new(items: I, lists: L, clients: C, products: P) -> Self {
        Self {
            items,
            lists,
            clients,
            products,
        }
    }

    /// Every purchase of `product_id`, sorted by client name then list name.
    ///
    /// An absent or non-positive id returns an empty result without touching
    /// the stores. Purchase lines whose list, client or product cannot be
    /// found are skipped.
    pub fn get(&self, product_id: Option<i64>) -> Result<Vec<BoughtProducts>, BoughtProductsError> {
        let product_id = match product_id {
            Some(id) if id > 0 => id,
            other => {
                event!(Level::DEBUG, product_id = ?other, "invalid product id");
                return Ok(Vec::new());
            }
        };

        let items: Vec<_> = self
            .items
            .list_items()
            .map_err(unavailable("list purchase items"))?
            .into_iter()
            .filter(|item| item.product_id == product_id)
            .collect();

        event!(
            Level::DEBUG,
            product_id,
            matched = items.len(),
            "purchase items for product"
        );

        let mut results = Vec::with_capacity(items.len());
        for item in items {
            let list = self
                .lists
                .get_list(item.grocery_list_id)
                .map_err(unavailable("get grocery list"))?;
            let Some(list) = list else {
                event!(
                    Level::DEBUG,
                    item = item.id,
                    grocery_list_id = item.grocery_list_id,
                    "skipping item: grocery list not found"
                );
                continue;
            };

            let client = self
                .clients
                .get_client(list.client_id)
                .map_err(unavailable("get client"))?;
            let Some(client) = client else {
                event!(
                    Level::DEBUG,
                    item = item.id,
                    client_id = list.client_id,
                    "skipping item: client not found"
                );
                continue;
            };

            let product = self
                .products
                .get_product(item.product_id)
                .map_err(unavailable("get product"))?;
            let Some(product) = product else {
                event!(
                    Level::DEBUG,
                    item = item.id,
                    product_id = item.product_id,
                    "skipping item: product not found"
                );
                continue;
            };

            event!(
                Level::DEBUG,
                client = %client.name,
                grocery_list = %list.name,
                product = %product.name,
                amount = item.amount,
                "match found"
            );

            results.push(BoughtProducts::new(client, list, product));
        }

        // Ordinal, case-sensitive; stable, so equal (client, list) names keep store order
        results.sort_by(|a, b| {
            a.client
                .name
                .cmp(&b.client.name)
                .then_with(|| a.grocery_list.name.cmp(&b.grocery_list.name))
        });

        event!(Level::DEBUG, product_id, total = results.len(), "purchases resolved");
        Ok(results)
    }
}

fn unavailable(operation: &'static str) -> impl Fn(StoreError) -> BoughtProductsError {
    move |err| {
        event!(Level::WARN, operation, error = %err, "store failed during purchase query");
        BoughtProductsError::RepositoryUnavailable(err)
    }
}

impl<I, L, C, P> BoughtProductsQuery for BoughtProductsService<I, L, C, P>
where
    I: PurchaseItemStore,
    L: GroceryListStore,
    C: ClientStore,
    P: ProductStore,
{
    fn get(&self, product_id: Option<i64>) -> Result<Vec<BoughtProducts>, BoughtProductsError> {
        BoughtProductsService::get(self, product_id)
    }
}
