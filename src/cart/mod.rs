//! Persisted shopping cart widget.

mod catalog;
mod currency;
mod store;

pub use catalog::{Catalog, Product};
pub use currency::CurrencyFormat;
pub use store::{CART_KEY, CartEntry, CartLine, CartStore, CartView, EMPTY_PLACEHOLDER};
