//! # Catalog Client
//!
//! Wraps a `ResourceClient<Stall>` and exposes the vendor listing, menu reads
//! and the vendor-side toggles. Also defines [`Catalog`], the read seam other
//! components depend on instead of the concrete client.
use crate::catalog_actor::{CatalogError, StallAction, StallActionResult};
use crate::model::{ItemId, Menu, MenuItem, Stall, Vendor, VendorFilter, VendorId, VendorUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Read access to vendors and menus.
///
/// The order actor and [`CartSession::open`](crate::checkout::CartSession::open)
/// take this instead of [`CatalogClient`], so tests can hand them anything
/// that answers these two questions.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn vendor(&self, id: &VendorId) -> Result<Option<Vendor>, CatalogError>;
    async fn menu(&self, id: &VendorId) -> Result<Option<Menu>, CatalogError>;
}

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Stall>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Stall>) -> Self {
        Self { inner }
    }

    /// Vendors matching `filter`, numeric ids in ascending order.
    #[instrument(skip(self))]
    pub async fn vendors(&self, filter: &VendorFilter) -> Result<Vec<Vendor>, CatalogError> {
        debug!("Sending request");
        let mut vendors: Vec<Vendor> = self
            .list()
            .await?
            .into_iter()
            .map(|stall| stall.vendor)
            .filter(|vendor| filter.matches(vendor))
            .collect();
        vendors.sort_by(|a, b| a.id.catalog_cmp(&b.id));
        Ok(vendors)
    }

    /// Distinct floors, in the order the sorted vendor listing first mentions them.
    #[instrument(skip(self))]
    pub async fn floors(&self) -> Result<Vec<String>, CatalogError> {
        let mut floors: Vec<String> = Vec::new();
        for vendor in self.vendors(&VendorFilter::default()).await? {
            if !floors.contains(&vendor.floor) {
                floors.push(vendor.floor);
            }
        }
        Ok(floors)
    }

    /// Reads one item from a vendor's menu.
    #[instrument(skip(self))]
    pub async fn item(&self, vendor: &VendorId, item: &ItemId) -> Result<MenuItem, CatalogError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(vendor.clone(), StallAction::Item(item.clone()))
            .await
            .map_err(Self::map_error)?
        {
            StallActionResult::Item(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    /// Opens or closes a vendor. Returns the updated vendor.
    #[instrument(skip(self))]
    pub async fn set_open(&self, vendor: &VendorId, is_open: bool) -> Result<Vendor, CatalogError> {
        debug!("Sending request");
        let update = VendorUpdate {
            is_open: Some(is_open),
        };
        self.inner
            .update(vendor.clone(), update)
            .await
            .map(|stall| stall.vendor)
            .map_err(Self::map_error)
    }

    /// Marks an item available or sold out. Returns the updated item.
    #[instrument(skip(self))]
    pub async fn set_item_availability(
        &self,
        vendor: &VendorId,
        item: &ItemId,
        available: bool,
    ) -> Result<MenuItem, CatalogError> {
        debug!("Sending request");
        let action = StallAction::SetItemAvailability {
            item_id: item.clone(),
            available,
        };
        match self
            .inner
            .perform_action(vendor.clone(), action)
            .await
            .map_err(Self::map_error)?
        {
            StallActionResult::SetItemAvailability(item) => Ok(item),
            other => Err(unexpected(other)),
        }
    }

    /// Adds a stall; its vendor id is replaced by a generated one.
    #[instrument(skip(self, stall), fields(name = %stall.vendor.name))]
    pub async fn add_stall(&self, stall: Stall) -> Result<VendorId, CatalogError> {
        debug!("Sending request");
        self.inner.create(stall).await.map_err(Self::map_error)
    }
}

fn unexpected(result: StallActionResult) -> CatalogError {
    CatalogError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn vendor(&self, id: &VendorId) -> Result<Option<Vendor>, CatalogError> {
        Ok(self.get(id.clone()).await?.map(|stall| stall.vendor))
    }

    async fn menu(&self, id: &VendorId) -> Result<Option<Menu>, CatalogError> {
        Ok(self.get(id.clone()).await?.map(|stall| stall.menu))
    }
}

#[async_trait]
impl ActorClient<Stall> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Stall> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(err) = e.entity_error::<CatalogError>() {
            return err.clone();
        }
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_actor::fixtures;
    use actor_framework::mock::{create_mock_client, expect_action, expect_list, MockClient};

    #[tokio::test]
    async fn test_vendors_sorted_and_filtered() {
        let (client, mut receiver) = create_mock_client::<Stall>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move {
            catalog
                .vendors(&VendorFilter::default().search("indian"))
                .await
        });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        let mut stalls = fixtures::stalls();
        stalls.reverse();
        responder.send(Ok(stalls)).unwrap();

        let names: Vec<String> = task.await.unwrap().unwrap().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["South Delights", "North Spice Corner"]);
    }

    #[tokio::test]
    async fn test_vendors_sorted_numerically_past_nine() {
        let mut stalls = fixtures::stalls();
        let template = stalls[3].clone();
        for n in 5..=10 {
            let mut stall = template.clone();
            stall.vendor.id = VendorId(n.to_string());
            stall.vendor.floor = format!("Floor {n}");
            stalls.push(stall);
        }
        stalls.reverse();

        let mut mock = MockClient::<Stall>::new();
        mock.expect_list().return_ok(stalls.clone());
        mock.expect_list().return_ok(stalls);

        let catalog = CatalogClient::new(mock.client());
        let ids: Vec<String> = catalog
            .vendors(&VendorFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.id.0)
            .collect();
        assert_eq!(ids, (1..=10).map(|n| n.to_string()).collect::<Vec<_>>());

        let floors = catalog.floors().await.unwrap();
        assert_eq!(floors[..3], ["Ground Floor", "1st Floor", "2nd Floor"]);
        assert_eq!(floors.last().map(String::as_str), Some("Floor 10"));
        mock.verify();
    }

    #[tokio::test]
    async fn test_floors_follow_catalog_order() {
        let mut mock = MockClient::<Stall>::new();
        mock.expect_list().return_ok(fixtures::stalls());

        let catalog = CatalogClient::new(mock.client());
        let floors = catalog.floors().await.unwrap();
        assert_eq!(floors, vec!["Ground Floor", "1st Floor", "2nd Floor"]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_set_item_availability_sends_action() {
        let (client, mut receiver) = create_mock_client::<Stall>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move {
            catalog
                .set_item_availability(&VendorId::from("1"), &ItemId::from("3"), true)
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, VendorId::from("1"));
        match action {
            StallAction::SetItemAvailability { item_id, available } => {
                assert_eq!(item_id, ItemId::from("3"));
                assert!(available);
            }
            other => panic!("Expected SetItemAvailability, got {other:?}"),
        }

        let mut vada = fixtures::stalls()[0].menu.item(&ItemId::from("3")).cloned().unwrap();
        vada.available = true;
        responder
            .send(Ok(StallActionResult::SetItemAvailability(vada)))
            .unwrap();

        assert!(task.await.unwrap().unwrap().available);
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let mut mock = MockClient::<Stall>::new();
        let unknown = CatalogError::UnknownItem {
            vendor: "vendor_1".to_string(),
            item: "item_99".to_string(),
        };
        mock.expect_action(VendorId::from("1"))
            .return_err(FrameworkError::EntityError(Box::new(unknown.clone())));
        mock.expect_update(VendorId::from("7"))
            .return_err(FrameworkError::NotFound("vendor_7".to_string()));

        let catalog = CatalogClient::new(mock.client());
        let err = catalog
            .item(&VendorId::from("1"), &ItemId::from("99"))
            .await
            .unwrap_err();
        assert_eq!(err, unknown);

        let err = catalog.set_open(&VendorId::from("7"), false).await.unwrap_err();
        assert_eq!(err, CatalogError::NotFound("vendor_7".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_catalog_trait_reads_stall() {
        let mut mock = MockClient::<Stall>::new();
        mock.expect_get(VendorId::from("4"))
            .return_ok(fixtures::stalls().pop());
        mock.expect_get(VendorId::from("5")).return_ok(None);

        let catalog = CatalogClient::new(mock.client());
        let menu = catalog.menu(&VendorId::from("4")).await.unwrap().unwrap();
        assert_eq!(menu.items().count(), 3);
        assert!(catalog.vendor(&VendorId::from("5")).await.unwrap().is_none());
    }
}
