use std::fmt;

use super::variable::{encode_type_parameters, fmt_type_parameters};
use super::{ClassTypeSignature, TypeParameter};
use crate::canon::{intern, interned_handle};
use crate::repr::{encode_all, write_joined, Encode, Encoding};

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct ClassSignatureData {
    type_parameters: Box<[TypeParameter]>,
    superclass: ClassTypeSignature,
    superinterfaces: Box<[ClassTypeSignature]>,
}

impl Encode for ClassSignatureData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        encode_type_parameters(&self.type_parameters, out, encoding);
        self.superclass.encode(out, encoding);
        encode_all(&self.superinterfaces, out, encoding);
    }
}

interned_handle! {
    /// The generic header of a class declaration: type parameters, the
    /// superclass and the implemented interfaces.
    pub struct ClassSignature(ClassSignatureData);
}

impl ClassSignature {
    pub fn new(
        type_parameters: Vec<TypeParameter>,
        superclass: ClassTypeSignature,
        superinterfaces: Vec<ClassTypeSignature>,
    ) -> Self {
        Self(intern(ClassSignatureData {
            type_parameters: type_parameters.into_boxed_slice(),
            superclass,
            superinterfaces: superinterfaces.into_boxed_slice(),
        }))
    }

    pub fn type_parameters(&self) -> &[TypeParameter] {
        &self.0.type_parameters
    }

    pub fn superclass(&self) -> &ClassTypeSignature {
        &self.0.superclass
    }

    pub fn superinterfaces(&self) -> &[ClassTypeSignature] {
        &self.0.superinterfaces
    }
}

/// `<T extends A> extends S implements I1, I2`
impl fmt::Display for ClassSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_type_parameters(f, &self.0.type_parameters)?;
        write!(f, "extends {}", self.0.superclass)?;
        if !self.0.superinterfaces.is_empty() {
            f.write_str(" implements ")?;
            write_joined(f, &self.0.superinterfaces, ", ")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ClassSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassSignature")
            .field("type_parameters", &self.0.type_parameters)
            .field("superclass", &self.0.superclass)
            .field("superinterfaces", &self.0.superinterfaces)
            .finish()
    }
}
