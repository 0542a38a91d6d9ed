use std::fmt;

use super::{ClassTypeSignature, ReferenceTypeSignature};
use crate::canon::{intern, interned_handle};
use crate::desc::{ClassTypeDescriptor, TypeDescriptor};
use crate::error::{ConstructionError, TypeError};
use crate::name;
use crate::repr::{encode_all, Encode, Encoding};

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct TypeParamData {
    name: Box<str>,
    class_bound: Option<ReferenceTypeSignature>,
    interface_bounds: Box<[ReferenceTypeSignature]>,
}

impl Encode for TypeParamData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        out.push_str(&self.name);
        out.push(':');
        if let Some(bound) = &self.class_bound {
            bound.encode(out, encoding);
        }
        for bound in &self.interface_bounds {
            out.push(':');
            bound.encode(out, encoding);
        }
    }
}

interned_handle! {
    /// A declared type parameter: `T extends A & B`.
    ///
    /// At least one bound is always present.
    pub struct TypeParameter(TypeParamData);
}

impl TypeParameter {
    pub fn try_new(
        name: &str,
        class_bound: Option<ReferenceTypeSignature>,
        interface_bounds: Vec<ReferenceTypeSignature>,
    ) -> Result<Self, TypeError> {
        let name = name::simple_name(name)?;
        if class_bound.is_none() && interface_bounds.is_empty() {
            return Err(ConstructionError::EmptyBounds {
                parameter: name.into_string(),
            }
            .into());
        }
        Ok(Self(intern(TypeParamData {
            name,
            class_bound,
            interface_bounds: interface_bounds.into_boxed_slice(),
        })))
    }

    pub fn new(
        name: &str,
        class_bound: Option<ReferenceTypeSignature>,
        interface_bounds: Vec<ReferenceTypeSignature>,
    ) -> Self {
        Self::try_new(name, class_bound, interface_bounds).unwrap_or_else(|e| panic!("{e}"))
    }

    /// `name extends java/lang/Object`, the implicit bound.
    pub fn object_bounded(name: &str) -> Self {
        Self::new(
            name,
            Some(ReferenceTypeSignature::Class(ClassTypeSignature::object())),
            Vec::new(),
        )
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn class_bound(&self) -> Option<&ReferenceTypeSignature> {
        self.0.class_bound.as_ref()
    }

    pub fn interface_bounds(&self) -> &[ReferenceTypeSignature] {
        &self.0.interface_bounds
    }

    /// Class bound first, then interface bounds in declaration order.
    pub fn bounds(&self) -> impl Iterator<Item = &ReferenceTypeSignature> {
        self.0.class_bound.iter().chain(self.0.interface_bounds.iter())
    }

    /// The bound a variable of this parameter erases to.
    pub(crate) fn erasure_bound(&self) -> Option<&ReferenceTypeSignature> {
        self.bounds().next()
    }

    /// A variable bound to this parameter.
    pub fn variable(&self) -> TypeVariable {
        TypeVariable::new(self.clone())
    }
}

/// `T extends A & B`
impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} extends ", self.0.name)?;
        for (i, bound) in self.bounds().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{bound}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeParameter")
            .field("name", &self.name())
            .field("class_bound", &self.0.class_bound)
            .field("interface_bounds", &self.0.interface_bounds)
            .finish()
    }
}

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct TypeVarData {
    definition: TypeParameter,
}

impl Encode for TypeVarData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        match encoding {
            Encoding::Internal => {
                out.push('T');
                out.push_str(self.definition.name());
                out.push(';');
            }
            // The internal form only names the variable; the key must tell
            // apart variables bound to different definitions.
            Encoding::Key => {
                out.push('#');
                self.definition.encode(out, encoding);
                out.push(';');
            }
        }
    }
}

interned_handle! {
    /// A type variable resolved to its declaring [`TypeParameter`].
    pub struct TypeVariable(TypeVarData);
}

impl TypeVariable {
    pub fn new(definition: TypeParameter) -> Self {
        Self(intern(TypeVarData { definition }))
    }

    pub fn name(&self) -> &str {
        self.0.definition.name()
    }

    pub fn definition(&self) -> &TypeParameter {
        &self.0.definition
    }

    /// Erase to the class bound, else the first interface bound, else
    /// `java/lang/Object`.
    ///
    /// Fails if that bound is itself an unbound variable.
    pub fn try_as_descriptor(&self) -> Result<TypeDescriptor, TypeError> {
        match self.0.definition.erasure_bound() {
            Some(bound) => bound.try_as_descriptor(),
            None => Ok(TypeDescriptor::Class(ClassTypeDescriptor::object())),
        }
    }

    pub fn as_descriptor(&self) -> TypeDescriptor {
        self.try_as_descriptor().unwrap_or_else(|e| panic!("{e}"))
    }
}

impl fmt::Display for TypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for TypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeVariable")
            .field(&self.0.definition)
            .finish()
    }
}

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct UnboundVarData {
    name: Box<str>,
}

impl Encode for UnboundVarData {
    fn encode(&self, out: &mut String, _encoding: Encoding) {
        out.push('T');
        out.push_str(&self.name);
        out.push(';');
    }
}

interned_handle! {
    /// A type variable known only by name, as produced by the parser.
    ///
    /// It cannot be erased until bound to a [`TypeParameter`].
    pub struct UnboundTypeVariable(UnboundVarData);
}

impl UnboundTypeVariable {
    pub fn try_new(name: &str) -> Result<Self, TypeError> {
        Ok(Self(intern(UnboundVarData {
            name: name::simple_name(name)?,
        })))
    }

    pub fn new(name: &str) -> Self {
        Self::try_new(name).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }
}

impl fmt::Display for UnboundTypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.name)
    }
}

impl fmt::Debug for UnboundTypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnboundTypeVariable")
            .field(&self.name())
            .finish()
    }
}

/// Write `<P1P2...>` if `params` is non-empty.
pub(crate) fn encode_type_parameters(
    params: &[TypeParameter],
    out: &mut String,
    encoding: Encoding,
) {
    if params.is_empty() {
        return;
    }
    out.push('<');
    encode_all(params, out, encoding);
    out.push('>');
}

/// Write `<P1, P2> ` if `params` is non-empty.
pub(crate) fn fmt_type_parameters(
    f: &mut fmt::Formatter<'_>,
    params: &[TypeParameter],
) -> fmt::Result {
    if params.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    crate::repr::write_joined(f, params, ", ")?;
    f.write_str("> ")
}
