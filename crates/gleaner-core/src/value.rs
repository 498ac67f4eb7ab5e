//! Tagged runtime value representation
//!
//! Field accessors produce a [`Value`]: a small tagged union over the
//! builtin value kinds. Narrowing back out is always checked through
//! the `as_*` accessors; there is no unchecked cast anywhere in the
//! collector.

use std::fmt;

/// A tagged runtime value read from a field
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (64-bit signed)
    Int(i64),
    /// Floating point value (IEEE 754 double precision)
    Float(f64),
    /// String value
    Str(String),
}

impl Value {
    /// Create a null value
    pub const fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub const fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub const fn int(i: i64) -> Self {
        Value::Int(i)
    }

    /// Create a float value
    pub const fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Check if this value is null
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extract the boolean value
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract the integer value
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract the float value
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract the string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the tag name of this value
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::null()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_null() {
        let v = Value::null();
        assert!(v.is_null());
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_int(), None);
        assert_eq!(v.type_name(), "null");
    }

    #[test]
    fn test_value_bool() {
        let t = Value::bool(true);
        assert!(!t.is_null());
        assert_eq!(t.as_bool(), Some(true));
        assert_eq!(t.type_name(), "boolean");

        let f = Value::bool(false);
        assert_eq!(f.as_bool(), Some(false));
    }

    #[test]
    fn test_value_int() {
        let v = Value::int(42);
        assert_eq!(v.as_int(), Some(42));
        assert_eq!(v.as_float(), None);
        assert_eq!(v.type_name(), "integer");

        assert_eq!(Value::int(i64::MIN).as_int(), Some(i64::MIN));
        assert_eq!(Value::int(i64::MAX).as_int(), Some(i64::MAX));
    }

    #[test]
    fn test_value_str() {
        let v = Value::str("hello");
        assert_eq!(v.as_str(), Some("hello"));
        assert_eq!(v.as_int(), None);
        assert_eq!(v.type_name(), "string");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::null()), "null");
        assert_eq!(format!("{}", Value::bool(true)), "true");
        assert_eq!(format!("{}", Value::int(-10)), "-10");
        assert_eq!(format!("{}", Value::str("abc")), "abc");
    }

    #[test]
    fn test_value_default_is_null() {
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Value::int(42), Value::int(42));
        assert_ne!(Value::int(1), Value::int(2));
        assert_ne!(Value::null(), Value::bool(false));
        assert_ne!(Value::int(0), Value::float(0.0));
    }
}
