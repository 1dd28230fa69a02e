//! `tienda-cart` — the session cart: pure transitions plus a persistence
//! port.
//!
//! `Cart` holds the in-memory state and its invariants (one line per product
//! identity, insertion order preserved). `CartStore` wraps a `Cart` together
//! with an injected `CartSlot` and writes the whole serialized cart back to
//! the slot after every mutating command.

pub mod cart;
pub mod store;

pub use cart::{Cart, CartLine};
pub use store::{CartSlot, CartSlotError, CartStore};
