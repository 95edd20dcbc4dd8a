//! Build-time failures of tax line assembly.

use thiserror::Error;

use taxforge_orders::{LineItemId, OrderId, RefundId, ShipmentId};

/// Result type used across tax line assembly.
pub type LineBuildResult<T> = Result<T, LineBuildError>;

/// A build either fully succeeds or fails with one of these; no partial
/// line set is ever returned. Each variant carries the offending entity so
/// callers can diagnose without re-deriving state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineBuildError {
    /// A document type tag received as text was not recognized.
    #[error("unrecognized document type: {0:?}")]
    InvalidDocumentType(String),

    /// A return document was requested without a refund to summarize.
    #[error("cannot build return document for order {order_id} without a refund")]
    MissingRefundContext { order_id: OrderId },

    /// A line item is missing its quantity-extended total.
    #[error("line item {line_item_id} has no extended total")]
    IncompleteLineItem { line_item_id: LineItemId },

    /// A shipment has no selected shipping rate to price.
    #[error("shipment {shipment_id} has no selected shipping rate")]
    NoSelectedRate { shipment_id: ShipmentId },

    /// A refund must represent a positive reversed amount.
    #[error("refund {refund_id} amount must be positive, got {amount}")]
    InvalidRefundAmount { refund_id: RefundId, amount: i64 },
}
