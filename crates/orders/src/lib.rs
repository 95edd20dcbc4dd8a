//! Commerce order read models.
//!
//! This crate defines the narrow, read-only views of an order that tax line
//! assembly consumes: line items, shipments with their selected rates, and
//! (for returns) a refund with its originating payment. The data-access layer
//! that materializes these views is an external collaborator; nothing here
//! fetches or mutates anything.

pub mod order;
pub mod refund;
pub mod tax;

pub use order::{LineItem, LineItemId, Order, OrderId, Shipment, ShipmentId, ShippingRate};
pub use refund::{Payment, PaymentId, Refund, RefundId};
pub use tax::{TaxCategory, TaxCode};
