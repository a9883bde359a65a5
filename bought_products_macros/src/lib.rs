mod record;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Record)] derive macro
// ============================================================================

/// Derive macro for the `Record` trait.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "grocery_lists")]
/// struct GroceryList {
///     #[record(id)]
///     pub id: i64,
///     pub client_id: i64,
///     pub name: String,
/// }
/// ```
///
/// - `#[record(collection = "...")]` sets the collection name.
///   If omitted, defaults to snake_case struct name + "s".
/// - `#[record(id)]` marks the integer field used as the identity.
///   If omitted, defaults to a field named `id`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
