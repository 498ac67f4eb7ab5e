//! Field descriptors and access errors
//!
//! A [`FieldDef`] is one entry in a class's static descriptor table:
//! the field name, its declared type handle, an optional marker, and
//! the accessor closure that reads the current value off an instance.

use crate::value::Value;
use gleaner_types::{Marker, TypeId};
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// Why a single field read failed
///
/// Any accessor error is fatal to the collection call that triggered
/// the read; the collector wraps it and returns no partial result.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccessError {
    /// The object handed to the accessor is not an instance of the
    /// class the descriptor was built for
    #[error("receiver is not an instance of `{expected}`")]
    ReceiverMismatch {
        /// Type name the accessor expected
        expected: &'static str,
    },

    /// The accessor refused to expose the field's value
    #[error("read of `{field}` denied: {reason}")]
    Restricted {
        /// Field that could not be read
        field: &'static str,
        /// Reason reported by the accessor
        reason: String,
    },
}

impl AccessError {
    /// Convenience constructor for accessor-side denials
    pub fn restricted(field: &'static str, reason: impl Into<String>) -> Self {
        AccessError::Restricted {
            field,
            reason: reason.into(),
        }
    }
}

/// Accessor closure stored in a descriptor entry
pub(crate) type Reader = Box<dyn Fn(&dyn Any) -> Result<Value, AccessError> + Send + Sync>;

/// One named, typed slot in a class descriptor
pub struct FieldDef {
    name: &'static str,
    ty: TypeId,
    marker: Option<Marker>,
    reader: Reader,
}

impl FieldDef {
    pub(crate) fn new(
        name: &'static str,
        ty: TypeId,
        marker: Option<Marker>,
        reader: Reader,
    ) -> Self {
        FieldDef {
            name,
            ty,
            marker,
            reader,
        }
    }

    /// Field name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type of the field
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    /// Marker declared on the field, if any
    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    /// Read the field's current value off an instance
    pub fn read(&self, object: &dyn Any) -> Result<Value, AccessError> {
        (self.reader)(object)
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("marker", &self.marker)
            .finish()
    }
}
