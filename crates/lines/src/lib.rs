//! Tax line assembly for commerce documents.
//!
//! Given an order (and, for returns, a refund), this crate builds the ordered
//! collection of line records an external tax-determination service needs:
//! one line per purchased item, one per shipment, or one per refunded amount,
//! depending on the document type. The result is a [`LineSet`] that an
//! external client serializes into the outbound request; submitting it and
//! parsing the response are not this crate's concern.
//!
//! The transform is pure: it reads the order views, mutates nothing, and
//! either fully succeeds or fails with a [`LineBuildError`] naming the
//! offending entity.

pub mod builder;
pub mod error;
pub mod line;

pub use builder::{BuildConfig, LineBuilder};
pub use error::{LineBuildError, LineBuildResult};
pub use line::{DocumentType, Line, LineKind, LineSet};
