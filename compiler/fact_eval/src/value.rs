//! Runtime values.

use crate::environment::FrameRef;
use fact_ir::FuncDef;
use std::fmt;
use std::rc::Rc;

/// A function value: the definition plus the frame it was defined in.
///
/// Capturing the defining frame gives lexical scoping: the body sees the
/// names visible at the definition site, not at the call site. Recursion
/// works because a definition is inserted into its own defining frame.
#[derive(Debug, Clone)]
pub struct Closure {
    pub def: Rc<FuncDef>,
    pub env: FrameRef,
}

/// A runtime value. The value tags are the only type system Fact has.
#[derive(Debug, Clone)]
pub enum Value {
    Nil,
    Bool(bool),
    Int(i64),
    Str(String),
    Function(Rc<Closure>),
}

impl Value {
    /// Truthiness: `nil` and `false` are falsy, everything else is truthy.
    #[inline]
    pub fn truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    /// Human-readable tag name, used in type-mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "number",
            Value::Str(_) => "string",
            Value::Function(_) => "function",
        }
    }
}

impl PartialEq for Value {
    /// Structural equality; functions compare by identity.
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Function(c) => write!(f, "<func {}>", c.def.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.truthy());
        assert!(!Value::Bool(false).truthy());
        assert!(Value::Bool(true).truthy());
        assert!(Value::Int(0).truthy());
        assert!(Value::Str(String::new()).truthy());
    }

    #[test]
    fn equality_is_structural_and_never_cross_type() {
        assert_eq!(Value::Int(1), Value::Int(1));
        assert_ne!(Value::Int(1), Value::Str("1".into()));
        assert_ne!(Value::Nil, Value::Bool(false));
        assert_eq!(Value::Str("a".into()), Value::Str("a".into()));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Str("hi".into()).to_string(), "\"hi\"");
    }
}
