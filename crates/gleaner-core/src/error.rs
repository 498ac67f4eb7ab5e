//! Collection errors

use crate::field::AccessError;
use thiserror::Error;

/// Errors that can abort a collection scan
///
/// There is exactly one: a field read the collector could not perform.
/// Every other condition (no qualifying fields, absent markers, type
/// mismatches) is a normal empty-or-smaller result.
#[derive(Debug, Error)]
pub enum CollectError {
    /// A qualifying field's value could not be read; the scan is
    /// aborted and no partial result is returned
    #[error("cannot read field `{class}.{field}`")]
    AccessDenied {
        /// Class being scanned
        class: String,
        /// Field whose read failed
        field: String,
        /// Underlying access fault
        #[source]
        source: AccessError,
    },
}
