//! Path resolution against a document
//!
//! A walk that cannot be followed (missing key, index out of range, scalar
//! reached early) resolves to the zero value of the requested type.

use crate::page::document::{DocumentNode, Scalar};
use crate::page::registry::{PathSegment, PathSpec};

/// Follow `path` from `doc`, one segment at a time
pub fn walk<'d, D: DocumentNode>(doc: &'d D, path: &PathSpec) -> Option<&'d D> {
    path.segments()
        .iter()
        .try_fold(doc, |node, segment| match segment {
            PathSegment::Key(key) => node.child(key),
            PathSegment::Index(index) => node.element(*index),
        })
}

/// The string at `path`, or "" when absent or not a scalar
pub fn resolve_string<D: DocumentNode>(doc: &D, path: &PathSpec) -> String {
    walk(doc, path)
        .and_then(|node| node.scalar())
        .map(scalar_to_string)
        .unwrap_or_default()
}

/// The integer at `path`, or 0 when absent or not numeric
pub fn resolve_int<D: DocumentNode>(doc: &D, path: &PathSpec) -> i64 {
    walk(doc, path)
        .and_then(|node| node.scalar())
        .and_then(scalar_to_int)
        .unwrap_or(0)
}

fn scalar_to_string(scalar: Scalar<'_>) -> String {
    match scalar {
        Scalar::Str(s) => s.to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::UInt(u) => u.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(_) => String::new(),
    }
}

fn scalar_to_int(scalar: Scalar<'_>) -> Option<i64> {
    match scalar {
        Scalar::Str(s) => s.trim().parse::<i64>().ok(),
        Scalar::Int(i) => Some(i),
        Scalar::UInt(u) => i64::try_from(u).ok(),
        Scalar::Float(f) if f.fract() == 0.0 && f.is_finite() => {
            // Saturating cast; only integral values get here
            Some(f as i64)
        }
        Scalar::Float(_) | Scalar::Bool(_) => None,
    }
}
