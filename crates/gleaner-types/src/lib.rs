//! Gleaner Type Descriptors
//!
//! Nominal type definitions, definition-time markers, and the
//! assignability relation the field collector filters on.

#![warn(missing_docs)]

pub mod ty;
pub mod context;
pub mod assignability;
pub mod error;

pub use ty::{Marker, MarkerSet, TypeDef, TypeId};
pub use context::TypeContext;
pub use assignability::AssignabilityContext;
pub use error::TypeError;
