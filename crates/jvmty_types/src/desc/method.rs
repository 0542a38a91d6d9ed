use std::fmt;

use super::TypeDescriptor;
use crate::canon::{intern, interned_handle};
use crate::error::{ConstructionError, TypeError};
use crate::repr::{encode_all, write_joined, Encode, Encoding};
use crate::sig::MethodSignature;

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct MethodDescData {
    params: Box<[TypeDescriptor]>,
    return_type: TypeDescriptor,
}

impl Encode for MethodDescData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        out.push('(');
        encode_all(&self.params, out, encoding);
        out.push(')');
        self.return_type.encode(out, encoding);
    }
}

interned_handle! {
    /// An erased method type: parameter types and a return type.
    pub struct MethodDescriptor(MethodDescData);
}

impl MethodDescriptor {
    /// Parameters may not be `void`; the return type may.
    pub fn try_new(
        params: Vec<TypeDescriptor>,
        return_type: TypeDescriptor,
    ) -> Result<Self, TypeError> {
        if params.iter().any(TypeDescriptor::is_void) {
            return Err(ConstructionError::VoidNotAllowed {
                context: "a method parameter",
            }
            .into());
        }
        Ok(Self(intern(MethodDescData {
            params: params.into_boxed_slice(),
            return_type,
        })))
    }

    pub fn new(params: Vec<TypeDescriptor>, return_type: TypeDescriptor) -> Self {
        Self::try_new(params, return_type).unwrap_or_else(|e| panic!("{e}"))
    }

    pub(crate) fn lookup(text: &str) -> Option<Self> {
        crate::canon::find::<MethodDescData>(text).map(Self)
    }

    pub fn params(&self) -> &[TypeDescriptor] {
        &self.0.params
    }

    pub fn return_type(&self) -> &TypeDescriptor {
        &self.0.return_type
    }

    /// Local-variable slots taken by the parameters, excluding `this`.
    pub fn parameter_slots(&self) -> usize {
        self.0.params.iter().map(TypeDescriptor::slot_size).sum()
    }

    pub fn as_signature(&self) -> MethodSignature {
        MethodSignature::from_valid_parts(
            Vec::new(),
            self.0.params.iter().map(TypeDescriptor::as_signature).collect(),
            self.0.return_type.as_signature(),
            Vec::new(),
        )
    }
}

/// `ret (p1, p2)`
impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.0.return_type)?;
        write_joined(f, &self.0.params, ", ")?;
        f.write_str(")")
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("params", &self.0.params)
            .field("return_type", &self.0.return_type)
            .finish()
    }
}
