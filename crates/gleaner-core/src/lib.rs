//! Gleaner Field Collector
//!
//! This crate provides marker-driven field collection:
//! - Tagged runtime values with checked narrowing
//! - Static per-class descriptor tables built at definition time
//! - The `Collectable` trait with the `collect` scan
//!
//! A class registers its fields once into a [`ClassDescriptor`]; the
//! scan then filters them by assignability to a requested supertype
//! and by the `Include`/`Exclude` markers declared on fields and type
//! definitions, reading current values fresh on every call.

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod value;
pub mod field;
pub mod class;
pub mod collect;
pub mod error;

pub use value::Value;
pub use field::{AccessError, FieldDef};
pub use class::{ClassBuilder, ClassDescriptor};
pub use collect::{collect_fields, Collectable, FieldValue};
pub use error::CollectError;

pub use gleaner_types::{AssignabilityContext, Marker, MarkerSet, TypeContext, TypeDef, TypeId};

/// Collection result
pub type CollectResult<'a> = Result<Vec<FieldValue<'a>>, CollectError>;
