use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use taxforge_core::{EntityId, ValueObject};
use taxforge_orders::{OrderId, TaxCode};

use crate::error::LineBuildError;

/// Classification of the transaction being represented.
///
/// Determines which collectors run: sales documents itemize merchandise and
/// shipping, return documents summarize reversed amounts. The enum is closed
/// and dispatch over it is exhaustive, so adding a document type is a
/// compile-time decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    SalesOrder,
    ReturnOrder,
}

impl DocumentType {
    /// Wire tag used by the external tax service.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::SalesOrder => "SalesOrder",
            DocumentType::ReturnOrder => "ReturnOrder",
        }
    }
}

impl core::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = LineBuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SalesOrder" => Ok(DocumentType::SalesOrder),
            "ReturnOrder" => Ok(DocumentType::ReturnOrder),
            other => Err(LineBuildError::InvalidDocumentType(other.to_string())),
        }
    }
}

/// What a line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Item,
    Shipment,
    Refund,
}

/// One taxable or tax-relevant entry of the outbound request.
///
/// Every line traces to exactly one originating entity through `source_id`,
/// so the external service's per-line response can be reconciled back to the
/// item, shipment, or payment it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub source_id: EntityId,
    /// Amount in smallest currency unit; negative for refunds.
    pub amount: i64,
    pub quantity: i64,
    pub tax_code: Option<TaxCode>,
    pub description: String,
}

impl ValueObject for Line {}

/// The complete ordered result of one build.
///
/// Constructed fresh per build request and immutable once returned; the core
/// never persists it. `doc_date` is the order's placement date, stamped on
/// the outbound document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    order_id: OrderId,
    document_type: DocumentType,
    doc_date: DateTime<Utc>,
    lines: Vec<Line>,
}

impl LineSet {
    pub(crate) fn new(
        order_id: OrderId,
        document_type: DocumentType,
        doc_date: DateTime<Utc>,
        lines: Vec<Line>,
    ) -> Self {
        Self {
            order_id,
            document_type,
            doc_date,
            lines,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn doc_date(&self) -> DateTime<Utc> {
        self.doc_date
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// An empty line set is valid output for an empty order; callers should
    /// flag it as likely-empty rather than submit it.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_parses_wire_tags() {
        assert_eq!(
            "SalesOrder".parse::<DocumentType>().unwrap(),
            DocumentType::SalesOrder
        );
        assert_eq!(
            "ReturnOrder".parse::<DocumentType>().unwrap(),
            DocumentType::ReturnOrder
        );
    }

    #[test]
    fn unrecognized_document_type_is_rejected() {
        let err = "CreditMemo".parse::<DocumentType>().unwrap_err();
        match err {
            LineBuildError::InvalidDocumentType(tag) => assert_eq!(tag, "CreditMemo"),
            _ => panic!("Expected InvalidDocumentType"),
        }
    }

    #[test]
    fn document_type_display_matches_wire_tag() {
        assert_eq!(DocumentType::SalesOrder.to_string(), "SalesOrder");
        assert_eq!(DocumentType::ReturnOrder.to_string(), "ReturnOrder");
    }
}
