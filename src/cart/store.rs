//! Persisted shopping cart.
//!
//! Keyed by product id with insertion order preserved, so the rendered
//! cart keeps the order items were first added in. Quantity is at least 1
//! for as long as a key exists: decrementing a quantity of 1 removes the
//! line entirely.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::Catalog;
use super::currency::CurrencyFormat;
use crate::storage::{KeyValueStore, load_or_default, persist};

/// Fixed durable slot for the cart.
pub const CART_KEY: &str = "deskpad_cart";

/// Placeholder text shown when the cart is empty.
pub const EMPTY_PLACEHOLDER: &str = "Your cart is empty.";

/// Per-product cart state. Only the quantity; product data lives in the
/// catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub quantity: u32,
}

/// One rendered cart line, joined against the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub title: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Render snapshot of the cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: String,
    /// Present only when the cart is empty.
    pub placeholder: Option<&'static str>,
}

/// The persisted cart collection.
pub struct CartStore<S: KeyValueStore> {
    kv: S,
    entries: IndexMap<String, CartEntry>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Load the cart from the durable slot. An absent or malformed slot
    /// loads as an empty cart; lines that violate the quantity invariant
    /// are dropped rather than trusted.
    pub fn load(kv: S) -> Self {
        let mut entries: IndexMap<String, CartEntry> = load_or_default(&kv, CART_KEY);
        entries.retain(|product_id, entry| {
            if entry.quantity == 0 {
                warn!(%product_id, "dropping zero-quantity cart line from snapshot");
                return false;
            }
            true
        });
        Self { kv, entries }
    }

    pub fn entries(&self) -> &IndexMap<String, CartEntry> {
        &self.entries
    }

    /// Number of units of `product_id` currently in the cart.
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.entries
            .get(product_id)
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }

    /// Add one unit, merging into the existing line if the product is
    /// already in the cart.
    pub fn add(&mut self, product_id: &str) {
        let entry = self
            .entries
            .entry(product_id.to_string())
            .or_insert(CartEntry { quantity: 0 });
        entry.quantity = entry.quantity.saturating_add(1);
        self.save();
    }

    /// Remove one unit. Reaching zero removes the line; an unknown id is
    /// a no-op.
    pub fn decrement(&mut self, product_id: &str) {
        let Some(entry) = self.entries.get_mut(product_id) else {
            return;
        };

        entry.quantity = entry.quantity.saturating_sub(1);
        if entry.quantity == 0 {
            self.entries.shift_remove(product_id);
        }
        self.save();
    }

    /// Drop the whole line. Unknown ids leave the cart unchanged; the
    /// snapshot is rewritten either way.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.shift_remove(product_id);
        self.save();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.save();
    }

    /// Build the render snapshot, resolving titles and prices against the
    /// catalog. Lines whose product has left the catalog are skipped and
    /// excluded from the total.
    pub fn view(&self, catalog: &Catalog, currency: &CurrencyFormat) -> CartView {
        if self.entries.is_empty() {
            return CartView {
                lines: Vec::new(),
                total: currency.format(0),
                placeholder: Some(EMPTY_PLACEHOLDER),
            };
        }

        let mut lines = Vec::with_capacity(self.entries.len());
        let mut total: u64 = 0;

        for (product_id, entry) in &self.entries {
            let Some(product) = catalog.get(product_id) else {
                continue;
            };

            let subtotal = product.price * u64::from(entry.quantity);
            total += subtotal;
            lines.push(CartLine {
                product_id: product_id.clone(),
                title: product.title.clone(),
                quantity: entry.quantity,
                subtotal: currency.format(subtotal),
            });
        }

        CartView {
            lines,
            total: currency.format(total),
            placeholder: None,
        }
    }

    fn save(&mut self) {
        persist(&mut self.kv, CART_KEY, &self.entries);
    }
}
