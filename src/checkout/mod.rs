//! # Checkout Pipeline
//!
//! An order moves through four stages, each its own type:
//!
//! | Stage | Type | Produced by |
//! |---|---|---|
//! | Cart draft | [`CartSession`] | [`CartSession::open`] / [`CartSession::new`] |
//! | Payment pending | [`OrderDraft`] | [`CartSession::checkout`] |
//! | Submitted | [`PaymentRequest`] | [`OrderDraft::submit`] |
//! | Confirmed | [`OrderRecord`](crate::model::OrderRecord) | [`OrderClient::place_order`](crate::clients::OrderClient::place_order) |
//!
//! Every transition consumes the previous stage, so a draft cannot be
//! submitted twice and a cart cannot change after checkout.
//!
//! ```rust
//! use canteen_orders::checkout::CartSession;
//! use canteen_orders::catalog_actor::fixtures;
//! use canteen_orders::model::{ItemId, PaymentDetails, PaymentMethod};
//!
//! let stall = fixtures::stalls().remove(0);
//! let mut session = CartSession::new(stall.vendor, stall.menu);
//! session.add_item(&ItemId::from("1")).unwrap();
//! session.add_item(&ItemId::from("4")).unwrap();
//! session.set_payment_method(PaymentMethod::Cash);
//!
//! let draft = session.checkout().unwrap();
//! assert_eq!(draft.total(), 105);
//!
//! // Cash ignores whatever was typed on the payment step
//! let request = draft.submit(PaymentDetails::upi("")).unwrap();
//! assert_eq!(request.upi_id(), "");
//! ```

pub mod error;

pub use error::*;

use crate::clients::Catalog;
use crate::model::{
    Cart, CartLine, ItemId, Menu, OnlineOption, OrderCreate, PaymentDetails, PaymentMethod,
    PaymentOption, PaymentStatus, Vendor, VendorId,
};
use tracing::{debug, instrument};

/// Cart draft for one vendor.
#[derive(Debug, Clone)]
pub struct CartSession {
    vendor: Vendor,
    menu: Menu,
    cart: Cart,
    notes: String,
    payment_method: PaymentMethod,
}

impl CartSession {
    pub fn new(vendor: Vendor, menu: Menu) -> Self {
        Self {
            vendor,
            menu,
            cart: Cart::new(),
            notes: String::new(),
            payment_method: PaymentMethod::default(),
        }
    }

    /// Starts a session for `vendor_id`, reading vendor and menu from the catalog.
    ///
    /// Fails with [`CheckoutError::MissingState`] if either is missing.
    #[instrument(skip(catalog))]
    pub async fn open(catalog: &dyn Catalog, vendor_id: &VendorId) -> Result<Self, CheckoutError> {
        let vendor = catalog
            .vendor(vendor_id)
            .await?
            .ok_or_else(|| CheckoutError::MissingState(format!("vendor {vendor_id}")))?;
        let menu = catalog
            .menu(vendor_id)
            .await?
            .ok_or_else(|| CheckoutError::MissingState(format!("menu for {vendor_id}")))?;
        debug!(vendor = %vendor.name, "Cart session opened");
        Ok(Self::new(vendor, menu))
    }

    pub fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Adds one of an item, refusing items that are not on the menu or sold out.
    pub fn add_item(&mut self, item_id: &ItemId) -> Result<u32, CheckoutError> {
        let item = self
            .menu
            .item(item_id)
            .ok_or_else(|| CheckoutError::UnknownItem(item_id.to_string()))?;
        if !item.available {
            return Err(CheckoutError::ItemUnavailable(item.name.clone()));
        }
        Ok(self.cart.update_quantity(item_id, 1))
    }

    /// Raw quantity change, clamped at zero. See [`Cart::update_quantity`].
    pub fn update_quantity(&mut self, item_id: &ItemId, delta: i32) -> u32 {
        self.cart.update_quantity(item_id, delta)
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn total(&self) -> u32 {
        self.cart.total(&self.menu)
    }

    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    pub fn lines(&self) -> Vec<CartLine> {
        self.cart.lines(&self.menu)
    }

    /// Leaves the cart stage. Requires at least one item.
    pub fn checkout(self) -> Result<OrderDraft, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let total = self.total();
        let item_count = self.item_count();
        debug!(vendor = %self.vendor.id, total, item_count, "Checked out");
        Ok(OrderDraft {
            vendor_id: self.vendor.id.clone(),
            vendor: self.vendor,
            cart: self.cart,
            notes: self.notes,
            payment_method: self.payment_method,
            total,
            item_count,
        })
    }
}

/// Payment pending: cart and totals are fixed, payment input is not yet given.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    vendor_id: VendorId,
    vendor: Vendor,
    cart: Cart,
    notes: String,
    payment_method: PaymentMethod,
    total: u32,
    item_count: u32,
}

impl OrderDraft {
    pub fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Attaches payment input.
    ///
    /// Online UPI needs a non-blank UPI id. Cash needs nothing and drops `details`.
    pub fn submit(self, details: PaymentDetails) -> Result<PaymentRequest, CheckoutError> {
        let (payment_option, upi_id) = match self.payment_method {
            PaymentMethod::Cash => (PaymentOption::Cash, String::new()),
            PaymentMethod::Online => match details.option {
                OnlineOption::Upi => {
                    let upi_id = details.upi_id.trim();
                    if upi_id.is_empty() {
                        return Err(CheckoutError::BlankPaymentId);
                    }
                    (PaymentOption::Upi, upi_id.to_string())
                }
                other => (other.into(), String::new()),
            },
        };
        Ok(PaymentRequest {
            draft: self,
            payment_option,
            upi_id,
        })
    }
}

/// Submitted: ready to be paid for and placed.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    draft: OrderDraft,
    payment_option: PaymentOption,
    upi_id: String,
}

impl PaymentRequest {
    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    pub fn method(&self) -> PaymentMethod {
        self.draft.payment_method
    }

    pub fn payment_option(&self) -> PaymentOption {
        self.payment_option
    }

    pub fn upi_id(&self) -> &str {
        &self.upi_id
    }

    pub fn vendor_id(&self) -> &VendorId {
        &self.draft.vendor_id
    }

    pub fn total(&self) -> u32 {
        self.draft.total
    }

    /// Combines the request with the payment outcome into the order payload.
    pub fn into_order_create(self, payment_status: PaymentStatus) -> OrderCreate {
        let draft = self.draft;
        OrderCreate {
            vendor_id: draft.vendor_id,
            vendor: draft.vendor,
            cart: draft.cart,
            notes: draft.notes,
            payment_method: draft.payment_method,
            total: draft.total,
            item_count: draft.item_count,
            payment_status,
            payment_option: self.payment_option,
            upi_id: self.upi_id,
        }
    }
}
