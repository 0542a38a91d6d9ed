//! Generics-aware signatures.
//!
//! The three sum types here cover the positions a signature can appear in:
//! any value position ([`TypeSignature`]), bounds and type arguments
//! ([`ReferenceTypeSignature`]), and throws clauses ([`ThrowsSignature`]).
//! The narrower two convert into `TypeSignature` with `From` and back with
//! `TryFrom`, which hands the value back on mismatch.

mod argument;
mod array;
mod class;
mod class_signature;
mod method;
mod variable;

use std::fmt;

use crate::desc::TypeDescriptor;
use crate::error::TypeError;
use crate::primitive::PrimitiveType;
use crate::repr::{representable, Encode, Encoding};

pub use argument::{BoundedTypeArgument, TypeArgument, WildcardBound};
pub use array::ArrayTypeSignature;
pub use class::ClassTypeSignature;
pub use class_signature::ClassSignature;
pub use method::MethodSignature;
pub use variable::{TypeParameter, TypeVariable, UnboundTypeVariable};

pub(crate) use argument::BoundedArgData;
pub(crate) use array::ArraySigData;
pub(crate) use class::ClassSigData;
pub(crate) use class_signature::ClassSignatureData;
pub(crate) use method::MethodSigData;
pub(crate) use variable::{TypeParamData, TypeVarData, UnboundVarData};

/// Any type that can appear in a value position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeSignature {
    Primitive(PrimitiveType),
    Void,
    Class(ClassTypeSignature),
    Array(ArrayTypeSignature),
    Variable(TypeVariable),
    Unbound(UnboundTypeVariable),
}

/// A class, array or type variable: what bounds and type arguments hold.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceTypeSignature {
    Class(ClassTypeSignature),
    Array(ArrayTypeSignature),
    Variable(TypeVariable),
    Unbound(UnboundTypeVariable),
}

/// A class or type variable in a `throws` clause.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThrowsSignature {
    Class(ClassTypeSignature),
    Variable(TypeVariable),
    Unbound(UnboundTypeVariable),
}

impl TypeSignature {
    /// The erased descriptor.
    ///
    /// Fails with [`TypeError::UnresolvedPlaceholder`] if the signature
    /// still contains an unbound type variable in an erased position.
    pub fn try_as_descriptor(&self) -> Result<TypeDescriptor, TypeError> {
        match self {
            TypeSignature::Primitive(kind) => Ok(TypeDescriptor::Primitive(*kind)),
            TypeSignature::Void => Ok(TypeDescriptor::Void),
            TypeSignature::Class(class) => Ok(TypeDescriptor::Class(class.as_descriptor())),
            TypeSignature::Array(array) => Ok(TypeDescriptor::Array(array.try_as_descriptor()?)),
            TypeSignature::Variable(var) => var.try_as_descriptor(),
            TypeSignature::Unbound(var) => Err(TypeError::unresolved(var.name())),
        }
    }

    /// Panicking form of [`try_as_descriptor`](Self::try_as_descriptor).
    pub fn as_descriptor(&self) -> TypeDescriptor {
        self.try_as_descriptor().unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeSignature::Void)
    }
}

impl ReferenceTypeSignature {
    pub fn try_as_descriptor(&self) -> Result<TypeDescriptor, TypeError> {
        match self {
            ReferenceTypeSignature::Class(class) => {
                Ok(TypeDescriptor::Class(class.as_descriptor()))
            }
            ReferenceTypeSignature::Array(array) => {
                Ok(TypeDescriptor::Array(array.try_as_descriptor()?))
            }
            ReferenceTypeSignature::Variable(var) => var.try_as_descriptor(),
            ReferenceTypeSignature::Unbound(var) => Err(TypeError::unresolved(var.name())),
        }
    }

    pub fn as_descriptor(&self) -> TypeDescriptor {
        self.try_as_descriptor().unwrap_or_else(|e| panic!("{e}"))
    }
}

impl ThrowsSignature {
    pub fn try_as_descriptor(&self) -> Result<TypeDescriptor, TypeError> {
        match self {
            ThrowsSignature::Class(class) => Ok(TypeDescriptor::Class(class.as_descriptor())),
            ThrowsSignature::Variable(var) => var.try_as_descriptor(),
            ThrowsSignature::Unbound(var) => Err(TypeError::unresolved(var.name())),
        }
    }

    pub fn as_descriptor(&self) -> TypeDescriptor {
        self.try_as_descriptor().unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Encode for TypeSignature {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        match self {
            TypeSignature::Primitive(kind) => kind.encode(out, encoding),
            TypeSignature::Void => out.push('V'),
            TypeSignature::Class(class) => class.encode(out, encoding),
            TypeSignature::Array(array) => array.encode(out, encoding),
            TypeSignature::Variable(var) => var.encode(out, encoding),
            TypeSignature::Unbound(var) => var.encode(out, encoding),
        }
    }
}

impl Encode for ReferenceTypeSignature {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        match self {
            ReferenceTypeSignature::Class(class) => class.encode(out, encoding),
            ReferenceTypeSignature::Array(array) => array.encode(out, encoding),
            ReferenceTypeSignature::Variable(var) => var.encode(out, encoding),
            ReferenceTypeSignature::Unbound(var) => var.encode(out, encoding),
        }
    }
}

impl Encode for ThrowsSignature {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        match self {
            ThrowsSignature::Class(class) => class.encode(out, encoding),
            ThrowsSignature::Variable(var) => var.encode(out, encoding),
            ThrowsSignature::Unbound(var) => var.encode(out, encoding),
        }
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSignature::Primitive(kind) => fmt::Display::fmt(kind, f),
            TypeSignature::Void => f.write_str("void"),
            TypeSignature::Class(class) => fmt::Display::fmt(class, f),
            TypeSignature::Array(array) => fmt::Display::fmt(array, f),
            TypeSignature::Variable(var) => fmt::Display::fmt(var, f),
            TypeSignature::Unbound(var) => fmt::Display::fmt(var, f),
        }
    }
}

impl fmt::Display for ReferenceTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceTypeSignature::Class(class) => fmt::Display::fmt(class, f),
            ReferenceTypeSignature::Array(array) => fmt::Display::fmt(array, f),
            ReferenceTypeSignature::Variable(var) => fmt::Display::fmt(var, f),
            ReferenceTypeSignature::Unbound(var) => fmt::Display::fmt(var, f),
        }
    }
}

impl fmt::Display for ThrowsSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThrowsSignature::Class(class) => fmt::Display::fmt(class, f),
            ThrowsSignature::Variable(var) => fmt::Display::fmt(var, f),
            ThrowsSignature::Unbound(var) => fmt::Display::fmt(var, f),
        }
    }
}

representable!(TypeSignature, ReferenceTypeSignature, ThrowsSignature);

impl From<PrimitiveType> for TypeSignature {
    fn from(kind: PrimitiveType) -> Self {
        TypeSignature::Primitive(kind)
    }
}

impl From<ClassTypeSignature> for TypeSignature {
    fn from(class: ClassTypeSignature) -> Self {
        TypeSignature::Class(class)
    }
}

impl From<ArrayTypeSignature> for TypeSignature {
    fn from(array: ArrayTypeSignature) -> Self {
        TypeSignature::Array(array)
    }
}

impl From<TypeVariable> for TypeSignature {
    fn from(var: TypeVariable) -> Self {
        TypeSignature::Variable(var)
    }
}

impl From<UnboundTypeVariable> for TypeSignature {
    fn from(var: UnboundTypeVariable) -> Self {
        TypeSignature::Unbound(var)
    }
}

impl From<ReferenceTypeSignature> for TypeSignature {
    fn from(reference: ReferenceTypeSignature) -> Self {
        match reference {
            ReferenceTypeSignature::Class(class) => TypeSignature::Class(class),
            ReferenceTypeSignature::Array(array) => TypeSignature::Array(array),
            ReferenceTypeSignature::Variable(var) => TypeSignature::Variable(var),
            ReferenceTypeSignature::Unbound(var) => TypeSignature::Unbound(var),
        }
    }
}

impl From<ThrowsSignature> for TypeSignature {
    fn from(throws: ThrowsSignature) -> Self {
        ReferenceTypeSignature::from(throws).into()
    }
}

impl From<ThrowsSignature> for ReferenceTypeSignature {
    fn from(throws: ThrowsSignature) -> Self {
        match throws {
            ThrowsSignature::Class(class) => ReferenceTypeSignature::Class(class),
            ThrowsSignature::Variable(var) => ReferenceTypeSignature::Variable(var),
            ThrowsSignature::Unbound(var) => ReferenceTypeSignature::Unbound(var),
        }
    }
}

impl From<ClassTypeSignature> for ReferenceTypeSignature {
    fn from(class: ClassTypeSignature) -> Self {
        ReferenceTypeSignature::Class(class)
    }
}

impl From<ArrayTypeSignature> for ReferenceTypeSignature {
    fn from(array: ArrayTypeSignature) -> Self {
        ReferenceTypeSignature::Array(array)
    }
}

impl From<TypeVariable> for ReferenceTypeSignature {
    fn from(var: TypeVariable) -> Self {
        ReferenceTypeSignature::Variable(var)
    }
}

impl From<UnboundTypeVariable> for ReferenceTypeSignature {
    fn from(var: UnboundTypeVariable) -> Self {
        ReferenceTypeSignature::Unbound(var)
    }
}

impl From<ClassTypeSignature> for ThrowsSignature {
    fn from(class: ClassTypeSignature) -> Self {
        ThrowsSignature::Class(class)
    }
}

impl From<TypeVariable> for ThrowsSignature {
    fn from(var: TypeVariable) -> Self {
        ThrowsSignature::Variable(var)
    }
}

impl From<UnboundTypeVariable> for ThrowsSignature {
    fn from(var: UnboundTypeVariable) -> Self {
        ThrowsSignature::Unbound(var)
    }
}

impl TryFrom<TypeSignature> for ReferenceTypeSignature {
    type Error = TypeSignature;

    fn try_from(sig: TypeSignature) -> Result<Self, Self::Error> {
        match sig {
            TypeSignature::Class(class) => Ok(ReferenceTypeSignature::Class(class)),
            TypeSignature::Array(array) => Ok(ReferenceTypeSignature::Array(array)),
            TypeSignature::Variable(var) => Ok(ReferenceTypeSignature::Variable(var)),
            TypeSignature::Unbound(var) => Ok(ReferenceTypeSignature::Unbound(var)),
            other @ (TypeSignature::Primitive(_) | TypeSignature::Void) => Err(other),
        }
    }
}

impl TryFrom<TypeSignature> for ThrowsSignature {
    type Error = TypeSignature;

    fn try_from(sig: TypeSignature) -> Result<Self, Self::Error> {
        match sig {
            TypeSignature::Class(class) => Ok(ThrowsSignature::Class(class)),
            TypeSignature::Variable(var) => Ok(ThrowsSignature::Variable(var)),
            TypeSignature::Unbound(var) => Ok(ThrowsSignature::Unbound(var)),
            other => Err(other),
        }
    }
}

impl TryFrom<ReferenceTypeSignature> for ThrowsSignature {
    type Error = ReferenceTypeSignature;

    fn try_from(reference: ReferenceTypeSignature) -> Result<Self, Self::Error> {
        match reference {
            ReferenceTypeSignature::Class(class) => Ok(ThrowsSignature::Class(class)),
            ReferenceTypeSignature::Variable(var) => Ok(ThrowsSignature::Variable(var)),
            ReferenceTypeSignature::Unbound(var) => Ok(ThrowsSignature::Unbound(var)),
            other @ ReferenceTypeSignature::Array(_) => Err(other),
        }
    }
}

#[cfg(test)]
mod tests;
