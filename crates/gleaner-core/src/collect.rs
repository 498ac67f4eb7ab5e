//! The collection scan
//!
//! A single synchronous pass over a class's descriptor table. A field
//! is selected iff:
//! 1. its declared type is assignable to the requested supertype,
//! 2. it carries `Include`, or the class's type definition does,
//! 3. the requested supertype's definition does not carry `Exclude`.
//!
//! Values are read fresh on every call; nothing is cached between
//! calls. Any accessor failure aborts the whole scan with no partial
//! result.

use crate::class::ClassDescriptor;
use crate::error::CollectError;
use crate::field::FieldDef;
use crate::value::Value;
use crate::CollectResult;
use gleaner_types::{AssignabilityContext, Marker, TypeContext, TypeId};
use std::any::Any;

/// One result entry: a selected field paired with the value read on
/// this call
///
/// Entries are transient query output; they borrow the descriptor and
/// hold no state of their own.
#[derive(Debug)]
pub struct FieldValue<'a> {
    /// The selected field's descriptor entry
    pub field: &'a FieldDef,
    /// The field's value at the time of the scan
    pub value: Value,
}

/// Scan a descriptor table and collect qualifying fields off `object`
///
/// Only fields declared directly in `descriptor` are considered.
/// Returns entries in declaration order; an empty vector is a normal
/// outcome, not an error.
pub fn collect_fields<'d>(
    object: &dyn Any,
    descriptor: &'d ClassDescriptor,
    supertype: TypeId,
    types: &TypeContext,
) -> CollectResult<'d> {
    let assign = AssignabilityContext::new(types);
    let class_includes_all = types.markers(descriptor.ty()).include();
    // Quirk kept from the documented semantics: `Exclude` is consulted
    // on the REQUESTED supertype's definition, not on the scanned
    // class or the field.
    let supertype_excluded = types.markers(supertype).exclude();

    let mut values = Vec::new();
    for field in descriptor.fields() {
        let is_field_supertype = assign.is_assignable(field.ty(), supertype);
        let should_include =
            field.marker() == Some(Marker::Include) || class_includes_all;

        if is_field_supertype && should_include && !supertype_excluded {
            let value = field
                .read(object)
                .map_err(|source| CollectError::AccessDenied {
                    class: descriptor.name().to_string(),
                    field: field.name().to_string(),
                    source,
                })?;
            values.push(FieldValue { field, value });
        }
    }
    Ok(values)
}

/// Capability exposed by any object whose fields can be collected
///
/// Implementors supply their static descriptor; the scan itself is a
/// provided method, so the trait reads like a mixin.
pub trait Collectable: Any {
    /// The static descriptor table for this object's concrete class
    fn descriptor(&self) -> &ClassDescriptor;

    /// Collect all fields whose declared type is assignable to
    /// `supertype`, honoring the `Include`/`Exclude` markers
    ///
    /// See [`collect_fields`] for the selection rules.
    fn collect(&self, supertype: TypeId, types: &TypeContext) -> CollectResult<'_>
    where
        Self: Sized,
    {
        collect_fields(self, self.descriptor(), supertype, types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gleaner_types::TypeDef;

    struct Config {
        timeout: i64,
        name: String,
        retries: i64,
    }

    fn config_descriptor(ctx: &mut TypeContext) -> ClassDescriptor {
        let config_ty = ctx.declare(TypeDef::new("Config")).unwrap();
        ClassDescriptor::builder::<Config>("Config", config_ty)
            .field_marked("timeout", ctx.integer_type(), Marker::Include, |c| {
                Value::int(c.timeout)
            })
            .field("name", ctx.string_type(), |c| Value::str(c.name.clone()))
            .field_marked("retries", ctx.integer_type(), Marker::Include, |c| {
                Value::int(c.retries)
            })
            .build()
    }

    #[test]
    fn test_marked_integers_collected_in_order() {
        let mut ctx = TypeContext::new();
        let desc = config_descriptor(&mut ctx);
        let config = Config {
            timeout: 30,
            name: "primary".to_string(),
            retries: 3,
        };

        let values = collect_fields(&config, &desc, ctx.integer_type(), &ctx).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].field.name(), "timeout");
        assert_eq!(values[0].value, Value::int(30));
        assert_eq!(values[1].field.name(), "retries");
        assert_eq!(values[1].value, Value::int(3));
    }

    #[test]
    fn test_unmarked_field_not_collected() {
        let mut ctx = TypeContext::new();
        let desc = config_descriptor(&mut ctx);
        let config = Config {
            timeout: 30,
            name: "primary".to_string(),
            retries: 3,
        };

        // `name` is the only string field and carries no marker.
        let values = collect_fields(&config, &desc, ctx.string_type(), &ctx).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_collectable_trait_forwards() {
        struct Wrapped {
            desc: ClassDescriptor,
            inner: i64,
        }
        // Descriptor built for the wrapper itself so the receiver
        // downcast matches.
        impl Collectable for Wrapped {
            fn descriptor(&self) -> &ClassDescriptor {
                &self.desc
            }
        }

        let mut ctx = TypeContext::new();
        let ty = ctx.declare(TypeDef::new("Wrapped")).unwrap();
        let desc = ClassDescriptor::builder::<Wrapped>("Wrapped", ty)
            .field_marked("inner", ctx.integer_type(), Marker::Include, |w| {
                Value::int(w.inner)
            })
            .build();

        let w = Wrapped { desc, inner: 11 };
        let values = w.collect(ctx.integer_type(), &ctx).unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].value, Value::int(11));
    }
}
