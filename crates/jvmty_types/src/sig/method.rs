use std::fmt;

use super::variable::{encode_type_parameters, fmt_type_parameters};
use super::{ThrowsSignature, TypeParameter, TypeSignature};
use crate::canon::{intern, interned_handle};
use crate::desc::{MethodDescriptor, TypeDescriptor};
use crate::error::{ConstructionError, TypeError};
use crate::repr::{encode_all, write_joined, Encode, Encoding};

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct MethodSigData {
    type_parameters: Box<[TypeParameter]>,
    params: Box<[TypeSignature]>,
    return_type: TypeSignature,
    throws: Box<[ThrowsSignature]>,
}

impl Encode for MethodSigData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        encode_type_parameters(&self.type_parameters, out, encoding);
        out.push('(');
        encode_all(&self.params, out, encoding);
        out.push(')');
        self.return_type.encode(out, encoding);
        for throws in &self.throws {
            out.push('^');
            throws.encode(out, encoding);
        }
    }
}

interned_handle! {
    /// A generic method type: `<T:...>(params)ret^throws`.
    pub struct MethodSignature(MethodSigData);
}

impl MethodSignature {
    pub fn try_new(
        type_parameters: Vec<TypeParameter>,
        params: Vec<TypeSignature>,
        return_type: TypeSignature,
        throws: Vec<ThrowsSignature>,
    ) -> Result<Self, TypeError> {
        if params.iter().any(TypeSignature::is_void) {
            return Err(ConstructionError::VoidNotAllowed {
                context: "a method parameter",
            }
            .into());
        }
        Ok(Self::from_valid_parts(
            type_parameters,
            params,
            return_type,
            throws,
        ))
    }

    pub fn new(
        type_parameters: Vec<TypeParameter>,
        params: Vec<TypeSignature>,
        return_type: TypeSignature,
        throws: Vec<ThrowsSignature>,
    ) -> Self {
        Self::try_new(type_parameters, params, return_type, throws)
            .unwrap_or_else(|e| panic!("{e}"))
    }

    pub(crate) fn from_valid_parts(
        type_parameters: Vec<TypeParameter>,
        params: Vec<TypeSignature>,
        return_type: TypeSignature,
        throws: Vec<ThrowsSignature>,
    ) -> Self {
        Self(intern(MethodSigData {
            type_parameters: type_parameters.into_boxed_slice(),
            params: params.into_boxed_slice(),
            return_type,
            throws: throws.into_boxed_slice(),
        }))
    }

    pub(crate) fn lookup(text: &str) -> Option<Self> {
        crate::canon::find::<MethodSigData>(text).map(Self)
    }

    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.0.type_parameters
    }

    pub fn params(&self) -> &[TypeSignature] {
        &self.0.params
    }

    pub fn return_type(&self) -> &TypeSignature {
        &self.0.return_type
    }

    pub fn throws(&self) -> &[ThrowsSignature] {
        &self.0.throws
    }

    /// The erased descriptor; type parameters and throws are dropped.
    pub fn try_as_descriptor(&self) -> Result<MethodDescriptor, TypeError> {
        let params = self
            .0
            .params
            .iter()
            .map(TypeSignature::try_as_descriptor)
            .collect::<Result<Vec<TypeDescriptor>, _>>()?;
        MethodDescriptor::try_new(params, self.0.return_type.try_as_descriptor()?)
    }

    pub fn as_descriptor(&self) -> MethodDescriptor {
        self.try_as_descriptor().unwrap_or_else(|e| panic!("{e}"))
    }
}

/// `<T extends A> ret (p1, p2) throws E1, E2`
impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_type_parameters(f, &self.0.type_parameters)?;
        write!(f, "{} (", self.0.return_type)?;
        write_joined(f, &self.0.params, ", ")?;
        f.write_str(")")?;
        if !self.0.throws.is_empty() {
            f.write_str(" throws ")?;
            write_joined(f, &self.0.throws, ", ")?;
        }
        Ok(())
    }
}

impl fmt::Debug for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodSignature")
            .field("type_parameters", &self.0.type_parameters)
            .field("params", &self.0.params)
            .field("return_type", &self.0.return_type)
            .field("throws", &self.0.throws)
            .finish()
    }
}
