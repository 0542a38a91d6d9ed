//! `Bindable` for every signature node.

use super::{bind_all, collect_all, resolve_parameters, Bindable, TypeVariableBinder};
use crate::error::TypeError;
use crate::sig::{
    ArrayTypeSignature, BoundedTypeArgument, ClassSignature, ClassTypeSignature, MethodSignature,
    ReferenceTypeSignature, ThrowsSignature, TypeArgument, TypeParameter, TypeSignature,
    TypeVariable, UnboundTypeVariable,
};

impl Bindable for UnboundTypeVariable {
    type Output = TypeVariable;

    fn bind<B: TypeVariableBinder + ?Sized>(&self, binder: &B) -> Result<TypeVariable, TypeError> {
        match binder.binding_for(self.name()) {
            Some(definition) => Ok(TypeVariable::new(definition)),
            None => {
                tracing::trace!(name = self.name(), "no binding for type variable");
                Err(TypeError::unresolved(self.name()))
            }
        }
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        names.push(self.name());
    }
}

/// Already bound; its definition is not revisited.
impl Bindable for TypeVariable {
    type Output = TypeVariable;

    fn bind<B: TypeVariableBinder + ?Sized>(&self, _binder: &B) -> Result<TypeVariable, TypeError> {
        Ok(self.clone())
    }

    fn collect_unbound<'a>(&'a self, _names: &mut Vec<&'a str>) {}
}

impl Bindable for TypeSignature {
    type Output = TypeSignature;

    fn bind<B: TypeVariableBinder + ?Sized>(&self, binder: &B) -> Result<TypeSignature, TypeError> {
        Ok(match self {
            TypeSignature::Primitive(_) | TypeSignature::Void | TypeSignature::Variable(_) => {
                self.clone()
            }
            TypeSignature::Class(class) => TypeSignature::Class(class.bind(binder)?),
            TypeSignature::Array(array) => TypeSignature::Array(array.bind(binder)?),
            TypeSignature::Unbound(var) => TypeSignature::Variable(var.bind(binder)?),
        })
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeSignature::Primitive(_) | TypeSignature::Void | TypeSignature::Variable(_) => {}
            TypeSignature::Class(class) => class.collect_unbound(names),
            TypeSignature::Array(array) => array.collect_unbound(names),
            TypeSignature::Unbound(var) => var.collect_unbound(names),
        }
    }
}

impl Bindable for ReferenceTypeSignature {
    type Output = ReferenceTypeSignature;

    fn bind<B: TypeVariableBinder + ?Sized>(
        &self,
        binder: &B,
    ) -> Result<ReferenceTypeSignature, TypeError> {
        Ok(match self {
            ReferenceTypeSignature::Class(class) => {
                ReferenceTypeSignature::Class(class.bind(binder)?)
            }
            ReferenceTypeSignature::Array(array) => {
                ReferenceTypeSignature::Array(array.bind(binder)?)
            }
            ReferenceTypeSignature::Variable(_) => self.clone(),
            ReferenceTypeSignature::Unbound(var) => {
                ReferenceTypeSignature::Variable(var.bind(binder)?)
            }
        })
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            ReferenceTypeSignature::Class(class) => class.collect_unbound(names),
            ReferenceTypeSignature::Array(array) => array.collect_unbound(names),
            ReferenceTypeSignature::Variable(_) => {}
            ReferenceTypeSignature::Unbound(var) => var.collect_unbound(names),
        }
    }
}

impl Bindable for ThrowsSignature {
    type Output = ThrowsSignature;

    fn bind<B: TypeVariableBinder + ?Sized>(&self, binder: &B) -> Result<ThrowsSignature, TypeError> {
        Ok(match self {
            ThrowsSignature::Class(class) => ThrowsSignature::Class(class.bind(binder)?),
            ThrowsSignature::Variable(_) => self.clone(),
            ThrowsSignature::Unbound(var) => ThrowsSignature::Variable(var.bind(binder)?),
        })
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            ThrowsSignature::Class(class) => class.collect_unbound(names),
            ThrowsSignature::Variable(_) => {}
            ThrowsSignature::Unbound(var) => var.collect_unbound(names),
        }
    }
}

impl Bindable for ClassTypeSignature {
    type Output = ClassTypeSignature;

    fn bind<B: TypeVariableBinder + ?Sized>(
        &self,
        binder: &B,
    ) -> Result<ClassTypeSignature, TypeError> {
        let parent = self.parent().map(|p| p.bind(binder)).transpose()?;
        let type_arguments = bind_all(self.type_arguments(), binder)?;
        Ok(ClassTypeSignature::from_valid_parts(
            parent,
            self.name().into(),
            type_arguments,
        ))
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        if let Some(parent) = self.parent() {
            parent.collect_unbound(names);
        }
        collect_all(self.type_arguments(), names);
    }
}

impl Bindable for ArrayTypeSignature {
    type Output = ArrayTypeSignature;

    fn bind<B: TypeVariableBinder + ?Sized>(
        &self,
        binder: &B,
    ) -> Result<ArrayTypeSignature, TypeError> {
        // A bound variable is never an array, so the base stays flat.
        Ok(ArrayTypeSignature::from_valid_parts(
            self.dimension(),
            self.base().bind(binder)?,
        ))
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        self.base().collect_unbound(names);
    }
}

impl Bindable for BoundedTypeArgument {
    type Output = BoundedTypeArgument;

    fn bind<B: TypeVariableBinder + ?Sized>(
        &self,
        binder: &B,
    ) -> Result<BoundedTypeArgument, TypeError> {
        Ok(BoundedTypeArgument::new(
            self.bound(),
            self.signature().bind(binder)?,
        ))
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        self.signature().collect_unbound(names);
    }
}

impl Bindable for TypeArgument {
    type Output = TypeArgument;

    fn bind<B: TypeVariableBinder + ?Sized>(&self, binder: &B) -> Result<TypeArgument, TypeError> {
        Ok(match self {
            TypeArgument::Reference(reference) => TypeArgument::Reference(reference.bind(binder)?),
            TypeArgument::Bounded(bounded) => TypeArgument::Bounded(bounded.bind(binder)?),
            TypeArgument::Wildcard => TypeArgument::Wildcard,
        })
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            TypeArgument::Reference(reference) => reference.collect_unbound(names),
            TypeArgument::Bounded(bounded) => bounded.collect_unbound(names),
            TypeArgument::Wildcard => {}
        }
    }
}

impl Bindable for TypeParameter {
    type Output = TypeParameter;

    fn bind<B: TypeVariableBinder + ?Sized>(&self, binder: &B) -> Result<TypeParameter, TypeError> {
        let class_bound = self.class_bound().map(|b| b.bind(binder)).transpose()?;
        let interface_bounds = bind_all(self.interface_bounds(), binder)?;
        TypeParameter::try_new(self.name(), class_bound, interface_bounds)
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        for bound in self.bounds() {
            bound.collect_unbound(names);
        }
    }
}

impl Bindable for MethodSignature {
    type Output = MethodSignature;

    #[tracing::instrument(level = "trace", skip_all)]
    fn bind<B: TypeVariableBinder + ?Sized>(&self, binder: &B) -> Result<MethodSignature, TypeError> {
        Ok(MethodSignature::from_valid_parts(
            bind_all(self.type_parameters(), binder)?,
            bind_all(self.params(), binder)?,
            self.return_type().bind(binder)?,
            bind_all(self.throws(), binder)?,
        ))
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        collect_all(self.type_parameters(), names);
        collect_all(self.params(), names);
        self.return_type().collect_unbound(names);
        collect_all(self.throws(), names);
    }
}

impl Bindable for ClassSignature {
    type Output = ClassSignature;

    #[tracing::instrument(level = "trace", skip_all)]
    fn bind<B: TypeVariableBinder + ?Sized>(&self, binder: &B) -> Result<ClassSignature, TypeError> {
        Ok(ClassSignature::new(
            bind_all(self.type_parameters(), binder)?,
            self.superclass().bind(binder)?,
            bind_all(self.superinterfaces(), binder)?,
        ))
    }

    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>) {
        collect_all(self.type_parameters(), names);
        self.superclass().collect_unbound(names);
        collect_all(self.superinterfaces(), names);
    }
}

impl MethodSignature {
    /// Bind against this method's own type parameters, then `outer`
    /// (typically the declaring class's type parameters).
    ///
    /// The declared type parameters are bound as well, so the result's
    /// variables erase through their bounds.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn bind_declared<B: TypeVariableBinder + ?Sized>(
        &self,
        outer: &B,
    ) -> Result<MethodSignature, TypeError> {
        let type_parameters = resolve_parameters(self.type_parameters(), outer)?;
        let scope = type_parameters.as_slice().chain(outer);
        Ok(MethodSignature::from_valid_parts(
            type_parameters.clone(),
            bind_all(self.params(), &scope)?,
            self.return_type().bind(&scope)?,
            bind_all(self.throws(), &scope)?,
        ))
    }
}

impl ClassSignature {
    /// Bind against this class's own type parameters, then `outer`
    /// (the enclosing class's scope for inner classes, else
    /// [`NoBindings`](super::NoBindings)).
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn bind_declared<B: TypeVariableBinder + ?Sized>(
        &self,
        outer: &B,
    ) -> Result<ClassSignature, TypeError> {
        let type_parameters = resolve_parameters(self.type_parameters(), outer)?;
        let scope = type_parameters.as_slice().chain(outer);
        Ok(ClassSignature::new(
            type_parameters.clone(),
            self.superclass().bind(&scope)?,
            bind_all(self.superinterfaces(), &scope)?,
        ))
    }

    /// The scope this class's members bind against: its own type parameters,
    /// resolved.
    pub fn scope(&self) -> Result<Vec<TypeParameter>, TypeError> {
        resolve_parameters(self.type_parameters(), &super::NoBindings)
    }
}
