//! Custom actions for the catalog actor.
//!
//! Vendor-side menu maintenance goes through actions; the open/closed flag
//! goes through a plain update ([`VendorUpdate`](super::VendorUpdate)).

use crate::model::{ItemId, MenuItem};

#[derive(Debug, Clone)]
pub enum StallAction {
    /// Reads one menu item.
    Item(ItemId),
    /// Marks an item as available or sold out.
    SetItemAvailability { item_id: ItemId, available: bool },
}

/// Results from StallActions; variants match 1:1 with StallAction.
#[derive(Debug, Clone)]
pub enum StallActionResult {
    Item(MenuItem),
    /// The item after the change.
    SetItemAvailability(MenuItem),
}
