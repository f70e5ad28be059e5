//! [`ActorEntity`] implementation for [`Stall`].
//!
//! The catalog is seeded from fixtures; `Create` exists for onboarding a new
//! stall and takes a whole [`Stall`] whose vendor id is overwritten with the
//! generated one. Item ids only need to be unique within that stall's menu.

use super::actions::{StallAction, StallActionResult};
use super::error::CatalogError;
use crate::model::{Stall, VendorId, VendorUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::info;

#[async_trait]
impl ActorEntity for Stall {
    type Id = VendorId;
    type Create = Stall;
    type Update = VendorUpdate;
    type Action = StallAction;
    type ActionResult = StallActionResult;
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: VendorId, mut stall: Stall) -> Result<Self, Self::Error> {
        if stall.vendor.name.trim().is_empty() {
            return Err(CatalogError::InvalidStall("vendor name is blank".to_string()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = stall.menu.items().find(|item| !seen.insert(&item.id)) {
            return Err(CatalogError::InvalidStall(format!(
                "menu lists {} more than once",
                dup.id
            )));
        }
        stall.vendor.id = id;
        Ok(stall)
    }

    async fn on_update(&mut self, update: VendorUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(is_open) = update.is_open {
            info!(vendor = %self.vendor.id, is_open, "Vendor open flag changed");
            self.vendor.is_open = is_open;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: StallAction,
        _ctx: &(),
    ) -> Result<StallActionResult, Self::Error> {
        let vendor = &self.vendor.id;
        match action {
            StallAction::Item(item_id) => self
                .menu
                .item(&item_id)
                .cloned()
                .map(StallActionResult::Item)
                .ok_or_else(|| CatalogError::UnknownItem {
                    vendor: vendor.to_string(),
                    item: item_id.to_string(),
                }),
            StallAction::SetItemAvailability { item_id, available } => {
                let item = self.menu.item_mut(&item_id).ok_or_else(|| CatalogError::UnknownItem {
                    vendor: vendor.to_string(),
                    item: item_id.to_string(),
                })?;
                item.available = available;
                Ok(StallActionResult::SetItemAvailability(item.clone()))
            }
        }
    }
}
