//! Vendors, menus and the catalog entity.
//!
//! # Actor Framework
//! [`Stall`] implements [`ActorEntity`](actor_framework::ActorEntity) (see
//! [`catalog_actor`](crate::catalog_actor)); the catalog actor keeps one per vendor,
//! keyed by [`VendorId`].
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Display;

/// Type-safe identifier for vendors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub String);

impl From<&str> for VendorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl VendorId {
    /// Listing order: numeric ids by value, then any other ids by text.
    pub fn catalog_cmp(&self, other: &Self) -> Ordering {
        match (self.0.parse::<u64>(), other.0.parse::<u64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => self.0.cmp(&other.0),
        }
    }
}

impl Display for VendorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vendor_{}", self.0)
    }
}

/// Type-safe identifier for menu items. Unique within a vendor's menu.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietaryTag {
    Veg,
    Egg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    Jain,
    Vegan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub floor: String,
    pub stall_number: String,
    pub category: String,
    pub is_open: bool,
    pub rating: f32,
    /// Display estimate such as `"12-15 min"`.
    pub preparation_time: String,
    pub popular_items: Vec<String>,
    pub dietary_options: Vec<DietaryTag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    /// Whole rupees.
    pub price: u32,
    pub description: String,
    pub available: bool,
    pub dietary: Vec<DietaryTag>,
}

impl MenuItem {
    pub fn new(
        id: &str,
        name: impl Into<String>,
        price: u32,
        description: impl Into<String>,
        available: bool,
        dietary: &[DietaryTag],
    ) -> Self {
        Self {
            id: ItemId::from(id),
            name: name.into(),
            price,
            description: description.into(),
            available,
            dietary: dietary.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    /// Looks an item up across all categories.
    pub fn item(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items().find(|item| &item.id == id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut MenuItem> {
        self.categories
            .iter_mut()
            .flat_map(|c| c.items.iter_mut())
            .find(|item| &item.id == id)
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }
}

/// Catalog entity: a vendor together with its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stall {
    pub vendor: Vendor,
    pub menu: Menu,
}

/// Vendor-side changes to a stall. `None` leaves the field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorUpdate {
    pub is_open: Option<bool>,
}

/// Search and floor filter for the vendor listing.
///
/// An empty search matches everything; `floor: None` means all floors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorFilter {
    pub search: String,
    pub floor: Option<String>,
}

impl VendorFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn floor(mut self, floor: impl Into<String>) -> Self {
        self.floor = Some(floor.into());
        self
    }

    /// Case-insensitive match on name or category, plus an exact floor match.
    pub fn matches(&self, vendor: &Vendor) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = vendor.name.to_lowercase().contains(&term)
            || vendor.category.to_lowercase().contains(&term);
        let matches_floor = self
            .floor
            .as_deref()
            .map_or(true, |floor| vendor.floor == floor);
        matches_search && matches_floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::fixtures;

    fn vendor(id: &str) -> Vendor {
        fixtures::stalls()
            .into_iter()
            .find(|s| s.vendor.id.0 == id)
            .map(|s| s.vendor)
            .unwrap()
    }

    #[test]
    fn test_catalog_order_is_numeric() {
        let mut ids: Vec<VendorId> = ["10", "2", "kiosk", "1", "9"]
            .into_iter()
            .map(VendorId::from)
            .collect();
        ids.sort_by(|a, b| a.catalog_cmp(b));

        let ids: Vec<&str> = ids.iter().map(|id| id.0.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "9", "10", "kiosk"]);
    }

    #[test]
    fn test_menu_lookup_spans_categories() {
        let stall = fixtures::stalls().remove(0);
        let coffee = stall.menu.item(&ItemId::from("4")).unwrap();
        assert_eq!(coffee.name, "Filter Coffee");
        assert_eq!(coffee.price, 25);
        assert!(stall.menu.item(&ItemId::from("12")).is_none());
    }

    #[test]
    fn test_filter_matches_name_or_category() {
        let south = vendor("1");
        assert!(VendorFilter::default().matches(&south));
        assert!(VendorFilter::default().search("DELIGHT").matches(&south));
        assert!(VendorFilter::default().search("south ind").matches(&south));
        assert!(!VendorFilter::default().search("snack").matches(&south));
    }

    #[test]
    fn test_filter_by_floor() {
        let healthy = vendor("3");
        assert!(VendorFilter::default().floor("Ground Floor").matches(&healthy));
        assert!(!VendorFilter::default().floor("1st Floor").matches(&healthy));
        assert!(!VendorFilter::default()
            .search("salad")
            .floor("2nd Floor")
            .matches(&healthy));
    }

    #[test]
    fn test_dietary_tag_wire_names() {
        let json = serde_json::to_string(&[DietaryTag::NonVeg, DietaryTag::Veg]).unwrap();
        assert_eq!(json, r#"["Non-Veg","Veg"]"#);
        let tag: DietaryTag = serde_json::from_str(r#""Jain""#).unwrap();
        assert_eq!(tag, DietaryTag::Jain);
    }
}
