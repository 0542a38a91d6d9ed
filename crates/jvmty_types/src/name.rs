//! Validation of the names stored in nodes.
//!
//! A name that contained an encoding delimiter would make a node's internal
//! encoding ambiguous (and its intern key collide with unrelated text), so
//! factories reject such names up front.

use crate::error::ConstructionError;

/// Characters that terminate or structure an encoding.
const DELIMITERS: &[char] = &[';', '<', '>', '['];

/// Extra characters a simple name may not contain.
const SIMPLE_EXTRA: &[char] = &['/', '.', ':'];

/// Normalize and validate a class (binary) name such as `java/lang/String`.
///
/// Dots are accepted as package separators and rewritten to slashes.
pub(crate) fn class_name(name: &str) -> Result<Box<str>, ConstructionError> {
    if name.is_empty() {
        return Err(invalid(name, "empty"));
    }
    if name.contains(DELIMITERS) {
        return Err(invalid(name, "contains one of `; < > [`"));
    }
    let normalized = name.replace('.', "/");
    if normalized.split('/').any(str::is_empty) {
        return Err(invalid(name, "has an empty package segment"));
    }
    Ok(normalized.into_boxed_str())
}

/// Validate a simple name: a nested class segment, a type variable or a
/// type parameter.
pub(crate) fn simple_name(name: &str) -> Result<Box<str>, ConstructionError> {
    if name.is_empty() {
        return Err(invalid(name, "empty"));
    }
    if name.contains(DELIMITERS) || name.contains(SIMPLE_EXTRA) {
        return Err(invalid(name, "contains one of `; < > [ / . :`"));
    }
    Ok(Box::from(name))
}

fn invalid(name: &str, reason: &'static str) -> ConstructionError {
    ConstructionError::InvalidName {
        name: name.to_owned(),
        reason,
    }
}
