//! Tax classification values attached to taxable entities.
//!
//! Tax codes are consumed by this system, never computed: they originate in
//! an external tax-determination service's catalog and are carried through
//! to the outbound request unchanged.

use serde::{Deserialize, Serialize};

use taxforge_core::{DomainError, DomainResult, ValueObject};

/// External tax classification tag (e.g. `"FR000000"` for freight).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxCode(String);

impl TaxCode {
    /// Create a tax code from its external string form.
    ///
    /// The code is opaque to this system; only emptiness is rejected.
    pub fn new(code: impl Into<String>) -> DomainResult<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("tax code must not be empty"));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TaxCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for TaxCode {}

/// Tax category assigned to a product or shipping rate.
///
/// Carries the category's display name and, when the category has been mapped
/// in the external service, its tax code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCategory {
    pub name: String,
    pub tax_code: Option<TaxCode>,
}

impl TaxCategory {
    pub fn new(name: impl Into<String>, tax_code: Option<TaxCode>) -> Self {
        Self {
            name: name.into(),
            tax_code,
        }
    }
}

impl ValueObject for TaxCategory {}
