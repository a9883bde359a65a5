//! Selection - keeps the purchases of the selected product published.
//!
//! ## Example
//!
//! ```ignore
//! let mut controller = SelectionController::from_store(service, &store)?;
//!
//! controller.subscribe(|event| match event {
//!     SelectionEvent::Added { row, .. } => println!("{} - {}", row.client.name, row.grocery_list.name),
//!     SelectionEvent::Failed(err) => eprintln!("search failed: {}", err),
//!     _ => {}
//! });
//!
//! let milk = controller.products()[0].clone();
//! controller.select_product(milk)?;
//! ```

mod controller;
mod event;
mod observers;

pub use controller::{Selection, SelectionController};
pub use event::SelectionEvent;
pub use observers::{Observers, SubscriptionId};
