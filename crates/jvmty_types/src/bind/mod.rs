//! Resolving type-variable placeholders.
//!
//! The parser produces [`UnboundTypeVariable`]s: it sees `TT;` long before
//! it knows which declaration `T` refers to. Binding walks a signature with a
//! [`TypeVariableBinder`] (a scope of type parameters) and rebuilds it with
//! every placeholder replaced by a [`TypeVariable`] carrying its definition.
//!
//! Binding never guesses. A name missing from the scope is an error, and
//! [`Bindable::unbound_names`] lets callers check a scope up front.
//!
//! [`UnboundTypeVariable`]: crate::UnboundTypeVariable
//! [`TypeVariable`]: crate::TypeVariable

mod nodes;

use std::collections::HashMap;
use std::hash::BuildHasher;

use rustc_hash::FxHashSet;

use crate::error::TypeError;
use crate::sig::TypeParameter;

/// A scope that resolves type-variable names to their declarations.
pub trait TypeVariableBinder {
    fn binding_for(&self, name: &str) -> Option<TypeParameter>;

    /// Look names up in `self` first, then in `outer`.
    ///
    /// Method type parameters shadow class type parameters this way.
    fn chain<O: TypeVariableBinder>(self, outer: O) -> ChainedBinder<Self, O>
    where
        Self: Sized,
    {
        ChainedBinder { inner: self, outer }
    }
}

impl<B: TypeVariableBinder + ?Sized> TypeVariableBinder for &B {
    fn binding_for(&self, name: &str) -> Option<TypeParameter> {
        (**self).binding_for(name)
    }
}

impl TypeVariableBinder for [TypeParameter] {
    fn binding_for(&self, name: &str) -> Option<TypeParameter> {
        self.iter().find(|param| param.name() == name).cloned()
    }
}

impl TypeVariableBinder for Vec<TypeParameter> {
    fn binding_for(&self, name: &str) -> Option<TypeParameter> {
        self.as_slice().binding_for(name)
    }
}

impl<S: BuildHasher> TypeVariableBinder for HashMap<String, TypeParameter, S> {
    fn binding_for(&self, name: &str) -> Option<TypeParameter> {
        self.get(name).cloned()
    }
}

/// The empty scope: every lookup fails.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoBindings;

impl TypeVariableBinder for NoBindings {
    fn binding_for(&self, _name: &str) -> Option<TypeParameter> {
        None
    }
}

/// Two scopes searched in order. Built by [`TypeVariableBinder::chain`].
#[derive(Clone, Debug)]
pub struct ChainedBinder<I, O> {
    inner: I,
    outer: O,
}

impl<I: TypeVariableBinder, O: TypeVariableBinder> TypeVariableBinder for ChainedBinder<I, O> {
    fn binding_for(&self, name: &str) -> Option<TypeParameter> {
        self.inner
            .binding_for(name)
            .or_else(|| self.outer.binding_for(name))
    }
}

/// A scope backed by a closure.
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Build a scope from a lookup function.
pub fn from_fn<F>(lookup: F) -> FromFn<F>
where
    F: Fn(&str) -> Option<TypeParameter>,
{
    FromFn(lookup)
}

impl<F> TypeVariableBinder for FromFn<F>
where
    F: Fn(&str) -> Option<TypeParameter>,
{
    fn binding_for(&self, name: &str) -> Option<TypeParameter> {
        (self.0)(name)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FromFn")
    }
}

/// A node that may contain type-variable placeholders.
pub trait Bindable {
    /// The node type binding produces. `Self`, except for
    /// [`UnboundTypeVariable`](crate::UnboundTypeVariable).
    type Output;

    /// Rebuild `self` with every placeholder resolved through `binder`.
    ///
    /// Nodes without placeholders come back unchanged (and still
    /// canonical). Fails on the first name `binder` cannot resolve.
    fn bind<B: TypeVariableBinder + ?Sized>(&self, binder: &B) -> Result<Self::Output, TypeError>;

    /// Append the name of every placeholder binding would resolve.
    fn collect_unbound<'a>(&'a self, names: &mut Vec<&'a str>);

    /// Distinct placeholder names, in order of first appearance.
    fn unbound_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_unbound(&mut names);
        let mut seen = FxHashSet::default();
        names.retain(|name| seen.insert(*name));
        names
    }

    fn is_fully_bound(&self) -> bool {
        let mut names = Vec::new();
        self.collect_unbound(&mut names);
        names.is_empty()
    }
}

pub(crate) fn bind_all<T, B>(items: &[T], binder: &B) -> Result<Vec<T>, TypeError>
where
    T: Bindable<Output = T>,
    B: TypeVariableBinder + ?Sized,
{
    items.iter().map(|item| item.bind(binder)).collect()
}

pub(crate) fn collect_all<'a, T: Bindable>(items: &'a [T], names: &mut Vec<&'a str>) {
    for item in items {
        item.collect_unbound(names);
    }
}

/// Bind declared type parameters against themselves and `outer`.
///
/// A bound may name a sibling parameter (`<T, U extends T>`), so every pass
/// binds the declarations against the previous pass's results. After one
/// pass per parameter, each bound variable's own bounds are resolved too,
/// which is what erasing through a chain of variables needs.
pub(crate) fn resolve_parameters<B>(
    declared: &[TypeParameter],
    outer: &B,
) -> Result<Vec<TypeParameter>, TypeError>
where
    B: TypeVariableBinder + ?Sized,
{
    let mut resolved = declared.to_vec();
    for _ in 0..declared.len() {
        let next = bind_all(declared, &resolved.as_slice().chain(outer))?;
        resolved = next;
    }
    Ok(resolved)
}
