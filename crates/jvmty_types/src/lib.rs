//! Canonical JVM type descriptors and signatures.
//!
//! Two families of immutable value types:
//!
//! - **Descriptors** ([`TypeDescriptor`], [`MethodDescriptor`]): erased,
//!   runtime-shape types, `Ljava/util/List;`.
//! - **Signatures** ([`TypeSignature`], [`MethodSignature`],
//!   [`ClassSignature`]): generics-aware types, `Ljava/util/List<TT;>;`.
//!
//! Every composite node is interned through
//! [`jvmty_intern::InternRegistry::global`]: structurally equal nodes built
//! anywhere in the process are one shared allocation while any of them is
//! alive, so `ptr_eq` is a valid identity test and memory stays proportional
//! to the number of distinct live types.
//!
//! ```
//! use jvmty_types::{Bindable, MethodSignature, Parse, TypeRepresentable};
//!
//! let sig = MethodSignature::parse("<T:Ljava/lang/Object;>(TT;I)TT;").unwrap();
//! assert_eq!(sig.to_string(), "<T extends java/lang/Object> T (T, int)");
//!
//! let bound = sig.bind_declared(&jvmty_types::NoBindings).unwrap();
//! assert_eq!(bound.as_descriptor().as_internal(), "(Ljava/lang/Object;I)Ljava/lang/Object;");
//! assert!(bound.is_fully_bound());
//! ```

mod bind;
mod canon;
mod desc;
mod error;
mod name;
mod parse;
mod primitive;
mod repr;
mod sig;
mod stack;

pub use bind::{from_fn, Bindable, ChainedBinder, FromFn, NoBindings, TypeVariableBinder};
pub use canon::{live_count, TypeKind};
pub use desc::{
    ArrayTypeDescriptor, ClassTypeDescriptor, MethodDescriptor, TypeDescriptor,
    MAX_ARRAY_DIMENSION,
};
pub use error::{ConstructionError, TypeError};
pub use parse::{Expected, Parse, ParseError, ParseErrorKind};
pub use primitive::PrimitiveType;
pub use repr::TypeRepresentable;
pub use sig::{
    ArrayTypeSignature, BoundedTypeArgument, ClassSignature, ClassTypeSignature, MethodSignature,
    ReferenceTypeSignature, ThrowsSignature, TypeArgument, TypeParameter, TypeSignature,
    TypeVariable, UnboundTypeVariable, WildcardBound,
};
