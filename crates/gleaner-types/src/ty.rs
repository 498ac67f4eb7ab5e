//! Core type definitions for the Gleaner descriptor system

use std::fmt;

/// Unique identifier for a type in the type context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub(crate) u32);

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Definition-time marker attachable to a type or to a field
///
/// Markers are fixed when the definition is declared and never change
/// at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Select this field, or every field of the carrying type
    Include,
    /// Veto collection when carried by the requested supertype
    Exclude,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Include => write!(f, "include"),
            Marker::Exclude => write!(f, "exclude"),
        }
    }
}

/// The set of markers carried by one type definition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerSet {
    include: bool,
    exclude: bool,
}

impl MarkerSet {
    /// The empty marker set
    pub const fn empty() -> Self {
        MarkerSet {
            include: false,
            exclude: false,
        }
    }

    /// Check whether a specific marker is present
    pub const fn contains(&self, marker: Marker) -> bool {
        match marker {
            Marker::Include => self.include,
            Marker::Exclude => self.exclude,
        }
    }

    /// Whether the `Include` marker is present
    pub const fn include(&self) -> bool {
        self.include
    }

    /// Whether the `Exclude` marker is present
    pub const fn exclude(&self) -> bool {
        self.exclude
    }

    pub(crate) fn insert(&mut self, marker: Marker) {
        match marker {
            Marker::Include => self.include = true,
            Marker::Exclude => self.exclude = true,
        }
    }
}

/// A nominal type definition
///
/// Carries a name, an optional parent for the assignability chain, and
/// the markers fixed at declaration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    /// Type name, unique within a context
    pub name: String,
    /// Parent type, if any (`sub extends parent`)
    pub extends: Option<TypeId>,
    /// Markers declared on the type itself
    pub markers: MarkerSet,
}

impl TypeDef {
    /// Create a type definition with no parent and no markers
    pub fn new(name: impl Into<String>) -> Self {
        TypeDef {
            name: name.into(),
            extends: None,
            markers: MarkerSet::empty(),
        }
    }

    /// Set the parent type
    pub fn extends(mut self, parent: TypeId) -> Self {
        self.extends = Some(parent);
        self
    }

    /// Attach a marker to the type definition
    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.insert(marker);
        self
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
