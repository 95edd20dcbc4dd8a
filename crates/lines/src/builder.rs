use taxforge_orders::{LineItem, Order, Refund, Shipment, TaxCode};

use crate::error::{LineBuildError, LineBuildResult};
use crate::line::{DocumentType, Line, LineKind, LineSet};

/// Externally-decided build policy.
///
/// Holds the shipping tax code configured in the external service's account,
/// applied when a selected rate carries no tax category of its own. The code
/// itself comes from configuration; this crate never invents one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub shipping_tax_code: Option<TaxCode>,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shipping_tax_code(mut self, code: TaxCode) -> Self {
        self.shipping_tax_code = Some(code);
        self
    }
}

/// Assembles the ordered tax lines of one commerce document.
///
/// Dispatch is by document type: sales documents get one line per line item
/// followed by one line per shipment; return documents get refund lines only.
/// The builder reads the order views and mutates nothing, so repeated builds
/// over unchanged input yield element-for-element equal line sequences.
pub struct LineBuilder<'a> {
    order: &'a Order,
    document_type: DocumentType,
    refund: Option<&'a Refund>,
    config: BuildConfig,
}

impl<'a> LineBuilder<'a> {
    pub fn new(
        order: &'a Order,
        document_type: DocumentType,
        refund: Option<&'a Refund>,
    ) -> Self {
        Self {
            order,
            document_type,
            refund,
            config: BuildConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    pub fn order(&self) -> &Order {
        self.order
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    /// Build the full line set for this document.
    ///
    /// Fails as a whole: any malformed entity aborts the build and no
    /// partial line set escapes.
    pub fn build(&self) -> LineBuildResult<LineSet> {
        let lines = match self.document_type {
            DocumentType::SalesOrder => {
                let mut lines = self.item_lines()?;
                lines.extend(self.shipment_lines()?);
                lines
            }
            DocumentType::ReturnOrder => {
                let refund = self.refund.ok_or(LineBuildError::MissingRefundContext {
                    order_id: self.order.id,
                })?;
                self.refund_lines(refund)?
            }
        };

        tracing::debug!(
            order_id = %self.order.id,
            document_type = %self.document_type,
            lines = lines.len(),
            "built tax lines"
        );

        Ok(LineSet::new(
            self.order.id,
            self.document_type,
            self.order.placed_at,
            lines,
        ))
    }

    /// One line per line item, in the order's native item order.
    ///
    /// Zero-quantity and zero-total items still produce a line; materiality
    /// is the tax engine's decision, not this collector's.
    pub fn item_lines(&self) -> LineBuildResult<Vec<Line>> {
        self.order
            .line_items
            .iter()
            .map(|item| self.item_line(item))
            .collect()
    }

    /// Exactly one line per shipment, priced from its selected rate.
    pub fn shipment_lines(&self) -> LineBuildResult<Vec<Line>> {
        self.order
            .shipments
            .iter()
            .map(|shipment| self.shipment_line(shipment))
            .collect()
    }

    /// Lines reversing a refunded amount.
    ///
    /// Stateless and repeatable: documents carrying several refunds invoke
    /// this once per refund and concatenate.
    pub fn refund_lines(&self, refund: &Refund) -> LineBuildResult<Vec<Line>> {
        if refund.amount <= 0 {
            return Err(LineBuildError::InvalidRefundAmount {
                refund_id: refund.id,
                amount: refund.amount,
            });
        }

        Ok(vec![Line {
            kind: LineKind::Refund,
            source_id: refund.payment.id.0,
            amount: -refund.amount,
            quantity: 1,
            // Refunds reverse a monetary total, not a specific taxed item;
            // categorization is applied to the whole document externally.
            tax_code: None,
            description: refund.reason.clone(),
        }])
    }

    fn item_line(&self, item: &LineItem) -> LineBuildResult<Line> {
        let total = item
            .total
            .ok_or(LineBuildError::IncompleteLineItem { line_item_id: item.id })?;

        Ok(Line {
            kind: LineKind::Item,
            source_id: item.id.0,
            amount: total,
            quantity: item.quantity,
            tax_code: item
                .tax_category
                .as_ref()
                .and_then(|category| category.tax_code.clone()),
            description: item.description.clone(),
        })
    }

    fn shipment_line(&self, shipment: &Shipment) -> LineBuildResult<Line> {
        let rate = shipment
            .selected_rate
            .as_ref()
            .ok_or(LineBuildError::NoSelectedRate {
                shipment_id: shipment.id,
            })?;

        let tax_code = rate
            .tax_category
            .as_ref()
            .and_then(|category| category.tax_code.clone())
            .or_else(|| self.config.shipping_tax_code.clone());

        Ok(Line {
            kind: LineKind::Shipment,
            source_id: shipment.id.0,
            amount: rate.cost,
            quantity: 1,
            tax_code,
            description: rate.label.clone(),
        })
    }
}
