//! Type context: owns every declared type definition
//!
//! The context is the collector's stand-in for a reflection facility.
//! It mints [`TypeId`] handles, resolves names, and answers marker
//! queries. Declarations are append-only; a parent must already be
//! declared when a child references it, so extends chains are acyclic
//! by construction.

use crate::error::TypeError;
use crate::ty::{MarkerSet, TypeDef, TypeId};
use rustc_hash::FxHashMap;

/// Registry of all type definitions known to the collector
///
/// Created with the builtin value types (`integer`, `float`,
/// `boolean`, `string`) already declared.
#[derive(Debug, Clone)]
pub struct TypeContext {
    types: Vec<TypeDef>,
    by_name: FxHashMap<String, TypeId>,

    integer: TypeId,
    float: TypeId,
    boolean: TypeId,
    string: TypeId,
}

impl TypeContext {
    /// Create a context with the builtin value types declared
    pub fn new() -> Self {
        let mut ctx = TypeContext {
            types: Vec::new(),
            by_name: FxHashMap::default(),
            integer: TypeId(0),
            float: TypeId(0),
            boolean: TypeId(0),
            string: TypeId(0),
        };

        // Builtins are plain nominal types with no markers.
        ctx.integer = ctx.declare_unchecked(TypeDef::new("integer"));
        ctx.float = ctx.declare_unchecked(TypeDef::new("float"));
        ctx.boolean = ctx.declare_unchecked(TypeDef::new("boolean"));
        ctx.string = ctx.declare_unchecked(TypeDef::new("string"));
        ctx
    }

    /// The builtin `integer` type
    pub fn integer_type(&self) -> TypeId {
        self.integer
    }

    /// The builtin `float` type
    pub fn float_type(&self) -> TypeId {
        self.float
    }

    /// The builtin `boolean` type
    pub fn boolean_type(&self) -> TypeId {
        self.boolean
    }

    /// The builtin `string` type
    pub fn string_type(&self) -> TypeId {
        self.string
    }

    /// Declare a new type definition
    ///
    /// Fails if the name is already taken or the parent handle does
    /// not resolve in this context.
    pub fn declare(&mut self, def: TypeDef) -> Result<TypeId, TypeError> {
        if self.by_name.contains_key(&def.name) {
            return Err(TypeError::DuplicateType {
                name: def.name.clone(),
            });
        }
        if let Some(parent) = def.extends {
            if self.get(parent).is_none() {
                return Err(TypeError::UndefinedParent {
                    name: def.name.clone(),
                });
            }
        }
        Ok(self.declare_unchecked(def))
    }

    fn declare_unchecked(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.by_name.insert(def.name.clone(), id);
        self.types.push(def);
        id
    }

    /// Resolve a handle to its definition
    pub fn get(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(id.0 as usize)
    }

    /// Look up a type by name
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Markers declared on a type
    ///
    /// Unknown handles yield the empty set rather than an error.
    pub fn markers(&self, id: TypeId) -> MarkerSet {
        self.get(id).map(|def| def.markers).unwrap_or_default()
    }

    /// Number of declared types (builtins included)
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the context holds no declarations
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeContext {
    fn default() -> Self {
        Self::new()
    }
}
