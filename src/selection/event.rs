use crate::aggregation::BoughtProductsError;
use crate::models::{BoughtProducts, Product};

/// Notifications published by a `SelectionController`.
///
/// One selection produces `Cleared`, then either one `Added` per result row
/// in result order or a single `Failed`, and finally `Selected` once the
/// republish is complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The current selection is now this product and its results are final.
    Selected(Product),
    /// The published results were emptied.
    Cleared,
    /// `row` was appended at `index` of the published results.
    Added { index: usize, row: BoughtProducts },
    /// The query could not run; the published results stay empty.
    Failed(BoughtProductsError),
}
