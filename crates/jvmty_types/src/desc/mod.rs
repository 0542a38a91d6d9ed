//! Erased descriptors: the runtime shape of field and method types.

mod method;

use std::fmt;

use crate::canon::{intern, interned_handle};
use crate::error::{ConstructionError, TypeError};
use crate::name;
use crate::primitive::PrimitiveType;
use crate::repr::{representable, Encode, Encoding};
use crate::sig::{ArrayTypeSignature, ClassTypeSignature, TypeSignature};

pub use method::MethodDescriptor;
pub(crate) use method::MethodDescData;

/// Largest array dimension a class file can express.
pub const MAX_ARRAY_DIMENSION: usize = 255;

/// An erased field type: a primitive, `void`, a class or an array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(PrimitiveType),
    Void,
    Class(ClassTypeDescriptor),
    Array(ArrayTypeDescriptor),
}

impl TypeDescriptor {
    /// The same type as a signature. Total.
    pub fn as_signature(&self) -> TypeSignature {
        match self {
            TypeDescriptor::Primitive(kind) => TypeSignature::Primitive(*kind),
            TypeDescriptor::Void => TypeSignature::Void,
            TypeDescriptor::Class(class) => TypeSignature::Class(class.as_signature()),
            TypeDescriptor::Array(array) => TypeSignature::Array(array.as_signature()),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeDescriptor::Void)
    }

    /// Class or array.
    pub fn is_reference(&self) -> bool {
        matches!(self, TypeDescriptor::Class(_) | TypeDescriptor::Array(_))
    }

    /// Local-variable slots a value of this type occupies.
    pub fn slot_size(&self) -> usize {
        match self {
            TypeDescriptor::Void => 0,
            TypeDescriptor::Primitive(kind) if kind.is_wide() => 2,
            _ => 1,
        }
    }
}

impl Encode for TypeDescriptor {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        match self {
            TypeDescriptor::Primitive(kind) => kind.encode(out, encoding),
            TypeDescriptor::Void => out.push('V'),
            TypeDescriptor::Class(class) => class.encode(out, encoding),
            TypeDescriptor::Array(array) => array.encode(out, encoding),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(kind) => fmt::Display::fmt(kind, f),
            TypeDescriptor::Void => f.write_str("void"),
            TypeDescriptor::Class(class) => fmt::Display::fmt(class, f),
            TypeDescriptor::Array(array) => fmt::Display::fmt(array, f),
        }
    }
}

representable!(TypeDescriptor);

impl From<PrimitiveType> for TypeDescriptor {
    fn from(kind: PrimitiveType) -> Self {
        TypeDescriptor::Primitive(kind)
    }
}

impl From<ClassTypeDescriptor> for TypeDescriptor {
    fn from(class: ClassTypeDescriptor) -> Self {
        TypeDescriptor::Class(class)
    }
}

impl From<ArrayTypeDescriptor> for TypeDescriptor {
    fn from(array: ArrayTypeDescriptor) -> Self {
        TypeDescriptor::Array(array)
    }
}

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct ClassDescData {
    name: Box<str>,
}

impl Encode for ClassDescData {
    fn encode(&self, out: &mut String, _encoding: Encoding) {
        out.push('L');
        out.push_str(&self.name);
        out.push(';');
    }
}

interned_handle! {
    /// A class or interface type, by binary name (`java/lang/String`).
    pub struct ClassTypeDescriptor(ClassDescData);
}

impl ClassTypeDescriptor {
    /// Canonical descriptor for `name`. Dots are rewritten to slashes.
    pub fn try_new(name: &str) -> Result<Self, TypeError> {
        Ok(Self::from_valid_name(name::class_name(name)?))
    }

    pub fn new(name: &str) -> Self {
        Self::try_new(name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// `java/lang/Object`.
    pub fn object() -> Self {
        Self::new("java/lang/Object")
    }

    pub(crate) fn from_valid_name(name: Box<str>) -> Self {
        Self(intern(ClassDescData { name }))
    }

    pub(crate) fn lookup(text: &str) -> Option<Self> {
        crate::canon::find::<ClassDescData>(text).map(Self)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The name after the last package separator.
    pub fn simple_name(&self) -> &str {
        self.0.name.rsplit('/').next().unwrap_or(&self.0.name)
    }

    /// The package part of the name, empty for the default package.
    pub fn package(&self) -> &str {
        self.0.name.rsplit_once('/').map_or("", |(package, _)| package)
    }

    pub fn as_signature(&self) -> ClassTypeSignature {
        ClassTypeSignature::from_valid_parts(None, self.0.name.clone(), Vec::new())
    }
}

impl fmt::Display for ClassTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl fmt::Debug for ClassTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassTypeDescriptor")
            .field(&self.name())
            .finish()
    }
}

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct ArrayDescData {
    dimension: u8,
    /// Never an array and never void.
    base: TypeDescriptor,
}

impl Encode for ArrayDescData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        for _ in 0..self.dimension {
            out.push('[');
        }
        self.base.encode(out, encoding);
    }
}

interned_handle! {
    /// An array type: a non-array base and a dimension in `1..=255`.
    ///
    /// Nested arrays are flattened on construction, so `[[I` has exactly
    /// one representation.
    pub struct ArrayTypeDescriptor(ArrayDescData);
}

impl ArrayTypeDescriptor {
    pub fn try_new(dimension: usize, base: TypeDescriptor) -> Result<Self, TypeError> {
        let (dimension, base) = match base {
            TypeDescriptor::Void => {
                return Err(ConstructionError::VoidNotAllowed {
                    context: "an array element",
                }
                .into())
            }
            TypeDescriptor::Array(inner) if dimension > 0 => {
                let total = dimension
                    .checked_add(usize::from(inner.dimension()))
                    .ok_or(ConstructionError::InvalidDimension { dimension })?;
                (total, inner.base().clone())
            }
            base => (dimension, base),
        };
        let dimension = checked_dimension(dimension)?;
        Ok(Self(intern(ArrayDescData { dimension, base })))
    }

    pub fn new(dimension: usize, base: TypeDescriptor) -> Self {
        Self::try_new(dimension, base).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn dimension(&self) -> u8 {
        self.0.dimension
    }

    /// The innermost element type; never an array.
    pub fn base(&self) -> &TypeDescriptor {
        &self.0.base
    }

    /// The type of one element: one dimension fewer, or the base.
    pub fn component_type(&self) -> TypeDescriptor {
        match self.0.dimension {
            1 => self.0.base.clone(),
            dimension => TypeDescriptor::Array(Self(intern(ArrayDescData {
                dimension: dimension - 1,
                base: self.0.base.clone(),
            }))),
        }
    }

    pub fn as_signature(&self) -> ArrayTypeSignature {
        ArrayTypeSignature::from_valid_parts(self.0.dimension, self.0.base.as_signature())
    }
}

impl fmt::Display for ArrayTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.base)?;
        for _ in 0..self.0.dimension {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ArrayTypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayTypeDescriptor")
            .field("dimension", &self.0.dimension)
            .field("base", &self.0.base)
            .finish()
    }
}

/// Validate an array dimension, shared with array signatures.
pub(crate) fn checked_dimension(dimension: usize) -> Result<u8, ConstructionError> {
    if !(1..=MAX_ARRAY_DIMENSION).contains(&dimension) {
        return Err(ConstructionError::InvalidDimension { dimension });
    }
    u8::try_from(dimension).map_err(|_| ConstructionError::InvalidDimension { dimension })
}
