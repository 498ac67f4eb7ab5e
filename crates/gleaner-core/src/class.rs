//! Class descriptors: the static field table behind `collect`
//!
//! A statically typed host has no runtime reflection to enumerate
//! fields with, so each collectable class registers its fields once,
//! at definition time, into a [`ClassDescriptor`]. The builder is
//! generic over the host struct: accessors are written as plain typed
//! closures and the builder wraps them with the `dyn Any` downcast.

use crate::field::{AccessError, FieldDef, Reader};
use crate::value::Value;
use gleaner_types::{Marker, TypeId};
use std::any::Any;
use std::marker::PhantomData;

/// Static descriptor for one collectable class
///
/// Holds the class's fields in declaration order. Type-level markers
/// are not stored here: they live on the class's `TypeDef` in the
/// `TypeContext`, reachable through [`ClassDescriptor::ty`].
#[derive(Debug)]
pub struct ClassDescriptor {
    name: &'static str,
    ty: TypeId,
    fields: Vec<FieldDef>,
}

impl ClassDescriptor {
    /// Start building a descriptor for class `O`
    pub fn builder<O: 'static>(name: &'static str, ty: TypeId) -> ClassBuilder<O> {
        ClassBuilder {
            name,
            ty,
            fields: Vec::new(),
            _host: PhantomData,
        }
    }

    /// Class name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The class's type handle in the context
    pub fn ty(&self) -> TypeId {
        self.ty
    }

    /// Fields declared directly on this class, in declaration order
    ///
    /// A descriptor never inherits entries from a parent type's
    /// descriptor.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}

/// Builder for [`ClassDescriptor`], generic over the host struct
pub struct ClassBuilder<O: 'static> {
    name: &'static str,
    ty: TypeId,
    fields: Vec<FieldDef>,
    _host: PhantomData<fn(&O)>,
}

impl<O: 'static> ClassBuilder<O> {
    /// Register an unmarked field
    pub fn field<F>(self, name: &'static str, ty: TypeId, read: F) -> Self
    where
        F: Fn(&O) -> Value + Send + Sync + 'static,
    {
        self.push(name, ty, None, move |host| Ok(read(host)))
    }

    /// Register a field carrying a marker
    pub fn field_marked<F>(self, name: &'static str, ty: TypeId, marker: Marker, read: F) -> Self
    where
        F: Fn(&O) -> Value + Send + Sync + 'static,
    {
        self.push(name, ty, Some(marker), move |host| Ok(read(host)))
    }

    /// Register a field whose accessor may deny the read
    ///
    /// An `Err` from the accessor aborts the entire collection call.
    pub fn restricted_field<F>(
        self,
        name: &'static str,
        ty: TypeId,
        marker: Option<Marker>,
        read: F,
    ) -> Self
    where
        F: Fn(&O) -> Result<Value, AccessError> + Send + Sync + 'static,
    {
        self.push(name, ty, marker, read)
    }

    fn push<F>(mut self, name: &'static str, ty: TypeId, marker: Option<Marker>, read: F) -> Self
    where
        F: Fn(&O) -> Result<Value, AccessError> + Send + Sync + 'static,
    {
        let expected = std::any::type_name::<O>();
        let reader: Reader = Box::new(move |object: &dyn Any| {
            let host = object
                .downcast_ref::<O>()
                .ok_or(AccessError::ReceiverMismatch { expected })?;
            read(host)
        });
        self.fields.push(FieldDef::new(name, ty, marker, reader));
        self
    }

    /// Freeze the descriptor
    pub fn build(self) -> ClassDescriptor {
        ClassDescriptor {
            name: self.name,
            ty: self.ty,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gleaner_types::{TypeContext, TypeDef};

    struct Config {
        timeout: i64,
        name: String,
    }

    fn descriptor(ctx: &mut TypeContext) -> ClassDescriptor {
        let config_ty = ctx.declare(TypeDef::new("Config")).unwrap();
        ClassDescriptor::builder::<Config>("Config", config_ty)
            .field_marked("timeout", ctx.integer_type(), Marker::Include, |c| {
                Value::int(c.timeout)
            })
            .field("name", ctx.string_type(), |c| Value::str(c.name.clone()))
            .build()
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let mut ctx = TypeContext::new();
        let desc = descriptor(&mut ctx);

        let names: Vec<_> = desc.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["timeout", "name"]);
        assert_eq!(desc.name(), "Config");
    }

    #[test]
    fn test_builder_wraps_typed_accessors() {
        let mut ctx = TypeContext::new();
        let desc = descriptor(&mut ctx);

        let config = Config {
            timeout: 30,
            name: "primary".to_string(),
        };
        assert_eq!(desc.fields()[0].read(&config), Ok(Value::int(30)));
        assert_eq!(desc.fields()[1].read(&config), Ok(Value::str("primary")));
    }

    #[test]
    fn test_wrong_receiver_is_mismatch() {
        let mut ctx = TypeContext::new();
        let desc = descriptor(&mut ctx);

        let other = 5u32;
        let err = desc.fields()[0].read(&other).unwrap_err();
        assert!(matches!(err, AccessError::ReceiverMismatch { .. }));
    }

    #[test]
    fn test_restricted_field_can_deny() {
        let mut ctx = TypeContext::new();
        let vault_ty = ctx.declare(TypeDef::new("Vault")).unwrap();

        struct Vault;
        let desc = ClassDescriptor::builder::<Vault>("Vault", vault_ty)
            .restricted_field("secret", ctx.string_type(), Some(Marker::Include), |_| {
                Err(AccessError::restricted("secret", "sealed"))
            })
            .build();

        let err = desc.fields()[0].read(&Vault).unwrap_err();
        assert!(matches!(err, AccessError::Restricted { field: "secret", .. }));
    }
}
