use tracing::{event, Level};

use super::{Observers, SelectionEvent, SubscriptionId};
use crate::aggregation::{BoughtProductsError, BoughtProductsQuery};
use crate::models::{BoughtProducts, Product};
use crate::store::ProductStore;

/// Which product, if any, the user has picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    HasSelection(Product),
}

/// Holds the selected product and the purchases published for it.
///
/// Every call to [`select_product`](Self::select_product) reruns the query,
/// even for the product that is already selected.
pub struct SelectionController<Q> {
    query: Q,
    products: Vec<Product>,
    selection: Selection,
    results: Vec<BoughtProducts>,
    failure: Option<BoughtProductsError>,
    observers: Observers<SelectionEvent>,
}

impl<Q: BoughtProductsQuery> SelectionController<Q> {
    /// Create a controller offering `products` for selection.
    pub fn new(query: Q, products: Vec<Product>) -> Self {
        Self {
            query,
            products,
            selection: Selection::NoSelection,
            results: Vec::new(),
            failure: None,
            observers: Observers::new(),
        }
    }

    /// Create a controller offering every product in `store`.
    pub fn from_store<P: ProductStore>(query: Q, store: &P) -> Result<Self, BoughtProductsError> {
        let products = store.list_products()?;
        event!(Level::DEBUG, products = products.len(), "selectable products loaded");
        Ok(Self::new(query, products))
    }

    /// Products the user can choose from.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_product(&self) -> Option<&Product> {
        match &self.selection {
            Selection::HasSelection(product) => Some(product),
            Selection::NoSelection => None,
        }
    }

    /// Purchases of the selected product, in published order.
    pub fn results(&self) -> &[BoughtProducts] {
        &self.results
    }

    /// The error of the last selection, if its query failed.
    pub fn failure(&self) -> Option<&BoughtProductsError> {
        self.failure.as_ref()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&SelectionEvent) + Send + Sync + 'static,
    {
        self.observers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Select `product` and republish its purchases.
    ///
    /// Observers see `Cleared`, one `Added` per row, then `Selected` once the
    /// results are complete. If the query fails they see `Failed` instead of
    /// any `Added`, still followed by `Selected`; the error is kept in
    /// [`failure`](Self::failure) and returned.
    pub fn select_product(&mut self, product: Product) -> Result<(), BoughtProductsError> {
        event!(
            Level::DEBUG,
            product_id = product.id,
            product = %product.name,
            "product selected"
        );

        let product_id = product.id;
        self.selection = Selection::HasSelection(product.clone());
        self.failure = None;

        self.results.clear();
        self.observers.notify(&SelectionEvent::Cleared);

        let rows = match self.query.get(Some(product_id)) {
            Ok(rows) => rows,
            Err(err) => {
                event!(Level::WARN, product_id, error = %err, "purchase query failed");
                self.failure = Some(err.clone());
                self.observers.notify(&SelectionEvent::Failed(err.clone()));
                self.observers.notify(&SelectionEvent::Selected(product));
                return Err(err);
            }
        };

        for row in rows {
            let index = self.results.len();
            self.results.push(row.clone());
            self.observers.notify(&SelectionEvent::Added { index, row });
        }
        self.observers.notify(&SelectionEvent::Selected(product));

        event!(
            Level::DEBUG,
            product_id,
            results = self.results.len(),
            "purchases published"
        );
        Ok(())
    }
}
