//! `tienda-catalog` — product records and the derived catalog view.
//!
//! The view engine is a pure transform: `(base list, sort key, price range)`
//! in, derived list out. It holds no state of its own.

pub mod product;
pub mod view;

pub use product::{Product, ProductDraft};
pub use view::{derive_view, PriceRange, SortKey};
