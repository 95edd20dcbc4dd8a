use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taxforge_core::{Entity, EntityId};

use crate::tax::TaxCategory;

/// Order identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub EntityId);

impl OrderId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Line item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub EntityId);

impl LineItemId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Shipment identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentId(pub EntityId);

impl ShipmentId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One purchased product line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    /// Product description carried through to the outbound tax line.
    pub description: String,
    pub quantity: i64,
    /// Price in smallest currency unit (e.g., cents).
    pub unit_price: i64,
    /// Quantity-extended total in smallest currency unit.
    ///
    /// Absent when the pricing pass has not yet run for this line; tax line
    /// assembly treats that as malformed input.
    pub total: Option<i64>,
    pub tax_category: Option<TaxCategory>,
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// One candidate rate for shipping a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    /// Carrier/service label (e.g. "UPS Ground").
    pub label: String,
    /// Cost in smallest currency unit.
    pub cost: i64,
    pub tax_category: Option<TaxCategory>,
}

/// One fulfillment group of an order.
///
/// A shipment may hold many candidate rates upstream; only the rate the
/// buyer selected is materialized here. A shipment without a selected rate
/// cannot be priced and is rejected by tax line assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub selected_rate: Option<ShippingRate>,
}

impl Entity for Shipment {
    type Id = ShipmentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only view of an order, as materialized by the data-access layer.
///
/// `line_items` order is the authoritative item order; tax line assembly
/// preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// ISO currency code (e.g., "USD", "EUR").
    pub currency: String,
    pub placed_at: DateTime<Utc>,
    pub line_items: Vec<LineItem>,
    pub shipments: Vec<Shipment>,
}

impl Order {
    /// True when the order has nothing to build tax lines from.
    ///
    /// An empty order is valid input; callers use this to flag a
    /// likely-empty document before submitting it anywhere.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty() && self.shipments.is_empty()
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
