//! Cart model: item id to quantity, priced against a vendor menu.
//!
//! Quantities are always positive; an entry that would reach zero is removed.
//! Ids the menu does not know contribute nothing to the total. Counts and
//! totals saturate at `u32::MAX` instead of overflowing.

use crate::model::{ItemId, Menu};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: BTreeMap<ItemId, u32>,
}

/// A cart entry resolved against the menu, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: u32,
    pub quantity: u32,
    pub subtotal: u32,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `delta` (which may be negative) to the item's quantity.
    ///
    /// The result is clamped at zero, and a zero entry is removed. Returns the
    /// new quantity.
    pub fn update_quantity(&mut self, item_id: &ItemId, delta: i32) -> u32 {
        let current = self.quantity(item_id);
        let next = (i64::from(current) + i64::from(delta)).clamp(0, i64::from(u32::MAX)) as u32;
        if next == 0 {
            self.entries.remove(item_id);
        } else {
            self.entries.insert(item_id.clone(), next);
        }
        next
    }

    pub fn quantity(&self, item_id: &ItemId) -> u32 {
        self.entries.get(item_id).copied().unwrap_or(0)
    }

    pub fn item_count(&self) -> u32 {
        self.entries
            .values()
            .fold(0_u32, |count, qty| count.saturating_add(*qty))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.entries.iter().map(|(id, qty)| (id, *qty))
    }

    /// Sum of price times quantity over the ids the menu resolves.
    ///
    /// Each unknown id is logged and skipped.
    pub fn total(&self, menu: &Menu) -> u32 {
        self.entries
            .iter()
            .map(|(id, qty)| match menu.item(id) {
                Some(item) => item.price.saturating_mul(*qty),
                None => {
                    warn!(item_id = %id, quantity = qty, "Unknown item in cart, skipped");
                    0
                }
            })
            .fold(0_u32, u32::saturating_add)
    }

    /// Ids in the cart that the menu does not contain.
    pub fn unknown_items(&self, menu: &Menu) -> Vec<ItemId> {
        self.entries
            .keys()
            .filter(|id| menu.item(id).is_none())
            .cloned()
            .collect()
    }

    pub fn lines(&self, menu: &Menu) -> Vec<CartLine> {
        self.entries
            .iter()
            .filter_map(|(id, qty)| {
                let item = menu.item(id)?;
                Some(CartLine {
                    item_id: id.clone(),
                    name: item.name.clone(),
                    unit_price: item.price,
                    quantity: *qty,
                    subtotal: item.price.saturating_mul(*qty),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DietaryTag, MenuCategory, MenuItem};

    fn menu() -> Menu {
        Menu {
            categories: vec![MenuCategory {
                name: "Main Dishes".to_string(),
                items: vec![
                    MenuItem::new("a", "Masala Dosa", 80, "", true, &[DietaryTag::Veg]),
                    MenuItem::new("b", "Filter Coffee", 25, "", true, &[DietaryTag::Veg]),
                ],
            }],
        }
    }

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    #[test]
    fn test_total_and_count() {
        let mut cart = Cart::new();
        cart.update_quantity(&id("a"), 1);
        cart.update_quantity(&id("a"), 1);
        cart.update_quantity(&id("b"), 1);

        assert_eq!(cart.total(&menu()), 185);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_decrement_to_zero_removes_entry() {
        let mut cart = Cart::new();
        cart.update_quantity(&id("a"), 2);
        cart.update_quantity(&id("b"), 1);

        assert_eq!(cart.update_quantity(&id("b"), -1), 0);
        assert_eq!(cart.entries().count(), 1);
        assert_eq!(cart.quantity(&id("b")), 0);
        assert_eq!(cart.total(&menu()), 160);
    }

    #[test]
    fn test_quantity_never_negative() {
        let mut cart = Cart::new();
        assert_eq!(cart.update_quantity(&id("a"), -3), 0);
        assert!(cart.is_empty());

        cart.update_quantity(&id("a"), 2);
        assert_eq!(cart.update_quantity(&id("a"), -5), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::new();
        cart.update_quantity(&id("a"), i32::MAX);
        assert_eq!(cart.update_quantity(&id("a"), i32::MAX), u32::MAX - 1);
        cart.update_quantity(&id("b"), 5);

        assert_eq!(cart.total(&menu()), u32::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
        assert_eq!(cart.lines(&menu())[0].subtotal, u32::MAX);

        assert_eq!(cart.update_quantity(&id("a"), i32::MAX), u32::MAX);
    }

    #[test]
    fn test_unknown_items_contribute_nothing() {
        let mut cart = Cart::new();
        cart.update_quantity(&id("a"), 1);
        cart.update_quantity(&id("ghost"), 4);

        assert_eq!(cart.total(&menu()), 80);
        assert_eq!(cart.unknown_items(&menu()), vec![id("ghost")]);
        // Count is over entries, known or not
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_lines_resolve_names_and_subtotals() {
        let mut cart = Cart::new();
        cart.update_quantity(&id("a"), 2);
        cart.update_quantity(&id("ghost"), 1);

        let lines = cart.lines(&menu());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Masala Dosa");
        assert_eq!(lines[0].subtotal, 160);
    }
}
