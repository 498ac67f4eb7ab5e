//! Assignability rules for nominal type definitions
//!
//! Implements the relation `sub <: sup` used by the collector: a
//! declared field type qualifies for a requested supertype when it is
//! the same type or reaches it through its extends chain.

use crate::context::TypeContext;
use crate::ty::TypeId;

/// Context for checking assignability between declared types
#[derive(Debug, Clone, Copy)]
pub struct AssignabilityContext<'a> {
    type_ctx: &'a TypeContext,
}

impl<'a> AssignabilityContext<'a> {
    /// Create a new assignability context
    pub fn new(type_ctx: &'a TypeContext) -> Self {
        AssignabilityContext { type_ctx }
    }

    /// Check if `sub` is assignable to `sup` (sub <: sup)
    ///
    /// Returns true if a value of type `sub` can be used where `sup`
    /// is expected: reflexivity, or `sup` reached by walking `sub`'s
    /// extends chain. Handles unknown to the context are assignable to
    /// nothing but themselves.
    pub fn is_assignable(&self, sub: TypeId, sup: TypeId) -> bool {
        // Reflexivity: T <: T
        if sub == sup {
            return true;
        }

        // Parents are declared before children, so the chain is finite.
        let mut current = sub;
        while let Some(def) = self.type_ctx.get(current) {
            match def.extends {
                Some(parent) if parent == sup => return true,
                Some(parent) => current = parent,
                None => return false,
            }
        }

        false
    }
}
