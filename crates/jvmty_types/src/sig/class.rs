use std::fmt;

use super::TypeArgument;
use crate::canon::{intern, interned_handle};
use crate::desc::ClassTypeDescriptor;
use crate::error::TypeError;
use crate::name;
use crate::repr::{encode_all, write_joined, Encode, Encoding};

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct ClassSigData {
    parent: Option<ClassTypeSignature>,
    name: Box<str>,
    type_arguments: Box<[TypeArgument]>,
}

impl Encode for ClassSigData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        match &self.parent {
            Some(parent) => {
                parent.encode(out, encoding);
                // Replace the parent's terminating `;` with the separator.
                out.pop();
                out.push('.');
            }
            None => out.push('L'),
        }
        out.push_str(&self.name);
        if !self.type_arguments.is_empty() {
            out.push('<');
            encode_all(&self.type_arguments, out, encoding);
            out.push('>');
        }
        out.push(';');
    }
}

interned_handle! {
    /// A class type with optional type arguments, possibly nested in a
    /// parent class type (`Lpkg/Outer<TT;>.Inner;`).
    pub struct ClassTypeSignature(ClassSigData);
}

impl ClassTypeSignature {
    /// A class type.
    ///
    /// Without a parent, `name` is a binary name (dots become slashes).
    /// With a parent, it is the simple name of the nested class.
    pub fn try_of(
        parent: Option<ClassTypeSignature>,
        name: &str,
        type_arguments: Vec<TypeArgument>,
    ) -> Result<Self, TypeError> {
        let name = match parent {
            Some(_) => name::simple_name(name)?,
            None => name::class_name(name)?,
        };
        Ok(Self::from_valid_parts(parent, name, type_arguments))
    }

    pub fn of(
        parent: Option<ClassTypeSignature>,
        name: &str,
        type_arguments: Vec<TypeArgument>,
    ) -> Self {
        Self::try_of(parent, name, type_arguments).unwrap_or_else(|e| panic!("{e}"))
    }

    /// A top-level class type without type arguments.
    pub fn try_new(name: &str) -> Result<Self, TypeError> {
        Self::try_of(None, name, Vec::new())
    }

    pub fn new(name: &str) -> Self {
        Self::of(None, name, Vec::new())
    }

    /// `java/lang/Object`.
    pub fn object() -> Self {
        Self::new("java/lang/Object")
    }

    /// A class type nested in `self`.
    pub fn nested(&self, name: &str, type_arguments: Vec<TypeArgument>) -> Self {
        Self::of(Some(self.clone()), name, type_arguments)
    }

    pub(crate) fn from_valid_parts(
        parent: Option<ClassTypeSignature>,
        name: Box<str>,
        type_arguments: Vec<TypeArgument>,
    ) -> Self {
        Self(intern(ClassSigData {
            parent,
            name,
            type_arguments: type_arguments.into_boxed_slice(),
        }))
    }

    pub(crate) fn lookup(text: &str) -> Option<Self> {
        crate::canon::find::<ClassSigData>(text).map(Self)
    }

    pub fn parent(&self) -> Option<&ClassTypeSignature> {
        self.0.parent.as_ref()
    }

    /// The binary name for a top-level class, the simple name for a nested
    /// one.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn type_arguments(&self) -> &[TypeArgument] {
        &self.0.type_arguments
    }

    /// Binary name of the erased class: nested segments are joined with `$`.
    pub fn erased_name(&self) -> String {
        let mut out = String::new();
        self.write_erased_name(&mut out);
        out
    }

    fn write_erased_name(&self, out: &mut String) {
        if let Some(parent) = &self.0.parent {
            parent.write_erased_name(out);
            out.push('$');
        }
        out.push_str(&self.0.name);
    }

    /// The erased descriptor. Total: type arguments are dropped.
    pub fn as_descriptor(&self) -> ClassTypeDescriptor {
        if self.0.parent.is_none() {
            return ClassTypeDescriptor::from_valid_name(self.0.name.clone());
        }
        ClassTypeDescriptor::from_valid_name(self.erased_name().into_boxed_str())
    }
}

/// `pkg/Outer<A>.Inner<B, C>`
impl fmt::Display for ClassTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = &self.0.parent {
            write!(f, "{parent}.")?;
        }
        f.write_str(&self.0.name)?;
        if !self.0.type_arguments.is_empty() {
            f.write_str("<")?;
            write_joined(f, &self.0.type_arguments, ", ")?;
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ClassTypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ClassTypeSignature");
        if let Some(parent) = &self.0.parent {
            s.field("parent", parent);
        }
        s.field("name", &self.name());
        if !self.0.type_arguments.is_empty() {
            s.field("type_arguments", &self.0.type_arguments);
        }
        s.finish()
    }
}
