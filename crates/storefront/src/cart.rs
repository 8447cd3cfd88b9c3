//! Cart ledger.
//!
//! Maps product identity to a quantity. Entries keep the order in which they
//! were first added. A quantity is always positive while the entry exists;
//! setting it to zero removes the entry.
//!
//! Totals are recomputed on every call rather than cached.

use serde::Serialize;
use tracing::debug;

use artisan_gallery_core::{Price, ProductId};

use crate::models::Product;

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    /// The product in the cart.
    pub product: Product,
    /// Number of units (always at least 1).
    pub quantity: u32,
}

impl CartEntry {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

/// Outcome of [`CartLedger::set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The entry now has this quantity.
    Updated(u32),
    /// Quantity zero removed the entry.
    Removed,
    /// No entry had that ID; nothing changed.
    Absent,
}

/// The cart's quantity-tracking ledger.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CartLedger {
    entries: Vec<CartEntry>,
}

impl CartLedger {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `product`, inserting a new entry if needed.
    ///
    /// Returns the entry's quantity after the add.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(entry) = self.entry_mut(&product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = entry.quantity, "Cart quantity incremented");
            return entry.quantity;
        }

        self.entries.push(CartEntry {
            product: product.clone(),
            quantity: 1,
        });
        debug!(product_id = %product.id, "Cart entry inserted");
        1
    }

    /// Replace the quantity for `id`. Zero removes the entry; an absent ID is
    /// a silent no-op.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> QuantityChange {
        if quantity == 0 {
            return if self.remove(id).is_some() {
                QuantityChange::Removed
            } else {
                QuantityChange::Absent
            };
        }

        match self.entry_mut(id) {
            Some(entry) => {
                entry.quantity = quantity;
                QuantityChange::Updated(quantity)
            }
            None => QuantityChange::Absent,
        }
    }

    /// Remove the entry for `id`, returning it if it existed.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartEntry> {
        let index = self.entries.iter().position(|e| &e.product.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// The entry for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| &e.product.id == id)
    }

    /// Quantity for `id`, or zero.
    #[must_use]
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.get(id).map_or(0, |e| e.quantity)
    }

    /// Sum of quantities across all entries.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Sum of price × quantity across all entries.
    #[must_use]
    pub fn total_amount(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Returns `true` if the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, id: &ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| &e.product.id == id)
    }
}
