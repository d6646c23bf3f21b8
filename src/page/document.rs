//! Read-only access to a parsed JSON tree
//!
//! The resolver only needs three capabilities from a document node: member
//! lookup, element lookup and reading a scalar. Both JSON representations in
//! the stack implement them.

use serde_json::Value;
use simd_json::{OwnedValue, StaticNode};

/// A scalar leaf borrowed from a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Str(&'a str),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

/// A node in a parsed JSON document
pub trait DocumentNode {
    /// Member `key` of an object node
    fn child(&self, key: &str) -> Option<&Self>;

    /// Element `index` of an array node
    fn element(&self, index: usize) -> Option<&Self>;

    /// The scalar held by a leaf node; `None` for null, objects and arrays
    fn scalar(&self) -> Option<Scalar<'_>>;
}

impl DocumentNode for Value {
    fn child(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    fn element(&self, index: usize) -> Option<&Self> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    fn scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Value::String(s) => Some(Scalar::Str(s)),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Scalar::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Some(Scalar::UInt(u))
                } else {
                    n.as_f64().map(Scalar::Float)
                }
            }
            _ => None,
        }
    }
}

impl DocumentNode for OwnedValue {
    fn child(&self, key: &str) -> Option<&Self> {
        match self {
            OwnedValue::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    fn element(&self, index: usize) -> Option<&Self> {
        match self {
            OwnedValue::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    fn scalar(&self) -> Option<Scalar<'_>> {
        match self {
            OwnedValue::String(s) => Some(Scalar::Str(s)),
            OwnedValue::Static(StaticNode::Bool(b)) => Some(Scalar::Bool(*b)),
            OwnedValue::Static(StaticNode::I64(i)) => Some(Scalar::Int(*i)),
            OwnedValue::Static(StaticNode::U64(u)) => Some(Scalar::UInt(*u)),
            OwnedValue::Static(StaticNode::F64(f)) => Some(Scalar::Float(*f)),
            _ => None,
        }
    }
}
