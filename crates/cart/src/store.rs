//! Cart persistence: a single-slot port plus the store that keeps the
//! in-memory cart and the slot in sync.

use std::sync::Arc;

use thiserror::Error;

use tienda_catalog::Product;
use tienda_core::ProductId;

use crate::cart::Cart;

/// Cart slot operation error.
#[derive(Debug, Error)]
pub enum CartSlotError {
    #[error("cart slot unavailable: {0}")]
    Unavailable(String),

    #[error("cart encoding failed: {0}")]
    Encode(String),
}

/// One whole-value storage slot holding the serialized cart.
///
/// The slot is read and written as a unit; there is no partial or keyed
/// access. Implementations decide where the slot lives (process memory, a
/// session registry, a browser-storage bridge); the store only assumes
/// last-writer-wins semantics with no version check.
pub trait CartSlot: Send + Sync {
    /// Read the current slot contents, `None` when the slot is empty.
    fn load(&self) -> Result<Option<String>, CartSlotError>;

    /// Replace the slot contents wholesale.
    fn save(&self, payload: &str) -> Result<(), CartSlotError>;

    /// Erase the slot entirely (distinct from saving an empty value).
    fn clear(&self) -> Result<(), CartSlotError>;
}

impl<S> CartSlot for Arc<S>
where
    S: CartSlot + ?Sized,
{
    fn load(&self) -> Result<Option<String>, CartSlotError> {
        (**self).load()
    }

    fn save(&self, payload: &str) -> Result<(), CartSlotError> {
        (**self).save(payload)
    }

    fn clear(&self) -> Result<(), CartSlotError> {
        (**self).clear()
    }
}

/// Session cart store: in-memory cart + injected slot.
///
/// Every mutating command applies its transition and then writes the
/// post-mutation cart back to the slot, exactly once per command. Slot
/// failures on `add`/`remove` surface to the caller but do not roll back the
/// in-memory mutation.
#[derive(Debug)]
pub struct CartStore<S: CartSlot> {
    cart: Cart,
    slot: S,
}

impl<S: CartSlot> CartStore<S> {
    /// Build a store from whatever the slot currently holds.
    ///
    /// Never fails: an empty slot, an unreadable slot, and unparseable slot
    /// contents all hydrate as an empty cart. A corrupt slot value is left
    /// in place untouched; the next successful write replaces it.
    pub fn hydrate(slot: S) -> Self {
        let cart = match slot.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Cart>(&raw) {
                Ok(cart) => cart,
                Err(err) => {
                    tracing::warn!(error = %err, "persisted cart is unparseable, starting empty");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(err) => {
                tracing::warn!(error = %err, "cart slot unreadable, starting empty");
                Cart::new()
            }
        };

        Self { cart, slot }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of `product`, then persist.
    pub fn add_to_cart(&mut self, product: Product) -> Result<(), CartSlotError> {
        self.cart.add(product);
        self.persist()
    }

    /// Remove the line for `id` (no-op when absent), then persist.
    pub fn remove_from_cart(&mut self, id: &ProductId) -> Result<(), CartSlotError> {
        self.cart.remove(id);
        self.persist()
    }

    /// Erase the slot entirely and empty the in-memory cart.
    pub fn empty_cart(&mut self) -> Result<(), CartSlotError> {
        self.slot.clear()?;
        self.cart.clear();
        Ok(())
    }

    /// Complete checkout: erase the slot, empty the cart, and hand back the
    /// lines as of checkout.
    pub fn checkout(&mut self) -> Result<Cart, CartSlotError> {
        self.slot.clear()?;
        Ok(core::mem::take(&mut self.cart))
    }

    fn persist(&self) -> Result<(), CartSlotError> {
        let payload = serde_json::to_string(&self.cart)
            .map_err(|e| CartSlotError::Encode(e.to_string()))?;
        self.slot.save(&payload)
    }
}
