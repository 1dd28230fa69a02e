use serde::{Deserialize, Serialize};

use tienda_catalog::Product;
use tienda_core::ProductId;

/// Cart line: one product snapshot paired with a positive quantity.
///
/// The product is held by value: a snapshot taken at add time, not a live
/// reference into the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Ordered sequence of cart lines.
///
/// Invariant: at most one line per distinct product identity. New lines are
/// appended; existing lines are updated in place without reordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| &l.product.id == id)
            .map(|l| l.quantity)
    }

    /// Total number of items across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of `price * quantity` across all lines, in smallest currency unit.
    pub fn subtotal(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| l.product.price.saturating_mul(u64::from(l.quantity)))
            .sum()
    }

    /// Add one unit of `product`.
    ///
    /// If a line with the same product identity exists its quantity is
    /// incremented by exactly 1 in place; otherwise a new line with quantity
    /// 1 is appended.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Remove the line for `id`. No-op when absent.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|l| &l.product.id != id);
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: format!("product {id}"),
            brand: "Acme".to_string(),
            price: 100,
            original_price: None,
            rating: 4.0,
            short_description: String::new(),
            full_description: String::new(),
            color: None,
            category: "Home".to_string(),
            subcategory: "Lighting".to_string(),
            seller: String::new(),
            has_stock: true,
            stock: None,
            image: None,
            images: Vec::new(),
        }
    }

    fn pid(id: &str) -> ProductId {
        ProductId::new(id).unwrap()
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_line_with_quantity_two() {
        let mut cart = Cart::new();
        cart.add(test_product("a"));
        cart.add(test_product("a"));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(&pid("a")), Some(2));
    }

    #[test]
    fn adding_distinct_products_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(test_product("a"));
        cart.add(test_product("b"));
        cart.add(test_product("c"));
        cart.add(test_product("a"));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(cart.quantity_of(&pid("a")), Some(2));
        assert_eq!(cart.quantity_of(&pid("b")), Some(1));
    }

    #[test]
    fn incrementing_an_existing_line_does_not_reorder_it() {
        let mut cart = Cart::new();
        cart.add(test_product("a"));
        cart.add(test_product("b"));
        cart.add(test_product("b"));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn removing_an_absent_product_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add(test_product("a"));
        let before = cart.clone();

        cart.remove(&pid("missing"));
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_then_inspect_matches_spec_scenario() {
        let mut cart = Cart::new();
        cart.add(test_product("a"));
        cart.add(test_product("b"));
        cart.remove(&pid("a"));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product.id.as_str(), "b");
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart = Cart::new();
        cart.add(test_product("a"));
        cart.add(test_product("b"));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn totals_account_for_quantities() {
        let mut cart = Cart::new();
        let mut cheap = test_product("a");
        cheap.price = 50;
        let mut dear = test_product("b");
        dear.price = 200;

        cart.add(cheap.clone());
        cart.add(cheap);
        cart.add(dear);

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.subtotal(), 50 * 2 + 200);
    }

    #[test]
    fn persisted_shape_is_a_sequence_of_product_quantity_pairs() {
        let mut cart = Cart::new();
        cart.add(test_product("a"));
        cart.add(test_product("a"));

        let json = serde_json::to_value(&cart).unwrap();
        let arr = json.as_array().expect("cart serializes as a bare array");
        assert_eq!(arr.len(), 1);
        assert_eq!(arr[0]["quantity"], 2);
        assert_eq!(arr[0]["product"]["id"], "a");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Applying any add sequence keeps the one-line-per-identity
            // invariant and makes quantities equal to add counts.
            #[test]
            fn merge_by_identity_invariant(adds in prop::collection::vec(0u8..5, 1..60)) {
                let mut cart = Cart::new();
                for id in &adds {
                    cart.add(test_product(&format!("p{id}")));
                }

                let mut seen = std::collections::HashSet::new();
                for line in cart.lines() {
                    prop_assert!(seen.insert(line.product.id.clone()));
                    let expected = adds.iter().filter(|a| format!("p{a}") == line.product.id.as_str()).count();
                    prop_assert_eq!(line.quantity as usize, expected);
                }
                prop_assert_eq!(cart.total_items() as usize, adds.len());
            }

            #[test]
            fn remove_is_complete_and_targeted(adds in prop::collection::vec(0u8..5, 1..60), victim in 0u8..5) {
                let mut cart = Cart::new();
                for id in &adds {
                    cart.add(test_product(&format!("p{id}")));
                }
                let victim_id = pid(&format!("p{victim}"));
                let other_lines: Vec<CartLine> = cart
                    .lines()
                    .iter()
                    .filter(|l| l.product.id != victim_id)
                    .cloned()
                    .collect();

                cart.remove(&victim_id);

                prop_assert_eq!(cart.quantity_of(&victim_id), None);
                prop_assert_eq!(cart.lines(), other_lines.as_slice());
            }
        }
    }
}
