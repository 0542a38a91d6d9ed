use std::fmt;

use super::TypeSignature;
use crate::canon::{intern, interned_handle};
use crate::desc::{checked_dimension, ArrayTypeDescriptor};
use crate::error::{ConstructionError, TypeError};
use crate::repr::{Encode, Encoding};

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct ArraySigData {
    dimension: u8,
    /// Never an array and never void.
    base: TypeSignature,
}

impl Encode for ArraySigData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        for _ in 0..self.dimension {
            out.push('[');
        }
        self.base.encode(out, encoding);
    }
}

interned_handle! {
    /// An array of a generic type, flattened like [`ArrayTypeDescriptor`].
    pub struct ArrayTypeSignature(ArraySigData);
}

impl ArrayTypeSignature {
    pub fn try_new(dimension: usize, base: TypeSignature) -> Result<Self, TypeError> {
        let (dimension, base) = match base {
            TypeSignature::Void => {
                return Err(ConstructionError::VoidNotAllowed {
                    context: "an array element",
                }
                .into())
            }
            TypeSignature::Array(inner) if dimension > 0 => {
                let total = dimension
                    .checked_add(usize::from(inner.dimension()))
                    .ok_or(ConstructionError::InvalidDimension { dimension })?;
                (total, inner.base().clone())
            }
            base => (dimension, base),
        };
        Ok(Self::from_valid_parts(checked_dimension(dimension)?, base))
    }

    pub fn new(dimension: usize, base: TypeSignature) -> Self {
        Self::try_new(dimension, base).unwrap_or_else(|e| panic!("{e}"))
    }

    pub(crate) fn from_valid_parts(dimension: u8, base: TypeSignature) -> Self {
        Self(intern(ArraySigData { dimension, base }))
    }

    pub fn dimension(&self) -> u8 {
        self.0.dimension
    }

    pub fn base(&self) -> &TypeSignature {
        &self.0.base
    }

    pub fn component_type(&self) -> TypeSignature {
        match self.0.dimension {
            1 => self.0.base.clone(),
            dimension => {
                TypeSignature::Array(Self::from_valid_parts(dimension - 1, self.0.base.clone()))
            }
        }
    }

    pub fn try_as_descriptor(&self) -> Result<ArrayTypeDescriptor, TypeError> {
        ArrayTypeDescriptor::try_new(
            usize::from(self.0.dimension),
            self.0.base.try_as_descriptor()?,
        )
    }

    pub fn as_descriptor(&self) -> ArrayTypeDescriptor {
        self.try_as_descriptor().unwrap_or_else(|e| panic!("{e}"))
    }
}

impl fmt::Display for ArrayTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.base)?;
        for _ in 0..self.0.dimension {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ArrayTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayTypeSignature")
            .field("dimension", &self.0.dimension)
            .field("base", &self.0.base)
            .finish()
    }
}
