//! Canonical handles and the glue to the global intern registry.
//!
//! Every composite node is a thin handle around an `Arc` of its private
//! data. Handles are only created through [`intern`], so two structurally
//! equal handles share one allocation for as long as either is alive.

use std::sync::Arc;

use jvmty_intern::InternRegistry;

/// Declare a canonical handle type wrapping `Arc<$data>`.
///
/// Equality and hashing are structural; `ptr_eq` exposes identity. The
/// pointer comparison in `eq` is only a shortcut, never a substitute for
/// the structural check, so handles built while interning is disabled still
/// compare equal.
macro_rules! interned_handle {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($data:ty);) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name(std::sync::Arc<$data>);

        impl $name {
            /// Whether `self` and `other` are the same canonical instance.
            #[inline]
            pub fn ptr_eq(&self, other: &Self) -> bool {
                std::sync::Arc::ptr_eq(&self.0, &other.0)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ptr_eq(other) || *self.0 == *other.0
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&*self.0, state);
            }
        }

        impl crate::repr::Encode for $name {
            #[inline]
            fn encode(&self, out: &mut String, encoding: crate::repr::Encoding) {
                crate::repr::Encode::encode(&*self.0, out, encoding);
            }
        }

        impl crate::repr::TypeRepresentable for $name {
            fn write_internal(&self, out: &mut String) {
                crate::repr::Encode::encode(&*self.0, out, crate::repr::Encoding::Internal);
            }
        }
    };
}
pub(crate) use interned_handle;

/// Canonical `Arc` for `data`, keyed by its structural key.
pub(crate) fn intern<T>(data: T) -> Arc<T>
where
    T: crate::repr::Encode + Send + Sync + 'static,
{
    let key = crate::repr::key_of(&data);
    InternRegistry::global().acquire_with(&key, move || data)
}

/// Live canonical value for raw internal text, if one exists.
pub(crate) fn find<T: Send + Sync + 'static>(key: &str) -> Option<Arc<T>> {
    InternRegistry::global().try_find(key)
}

/// The canonical node kinds, one intern table each.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    ClassTypeDescriptor,
    ArrayTypeDescriptor,
    MethodDescriptor,
    ClassTypeSignature,
    ArrayTypeSignature,
    TypeVariable,
    UnboundTypeVariable,
    TypeParameter,
    BoundedTypeArgument,
    MethodSignature,
    ClassSignature,
}

impl TypeKind {
    pub const ALL: [TypeKind; 11] = [
        TypeKind::ClassTypeDescriptor,
        TypeKind::ArrayTypeDescriptor,
        TypeKind::MethodDescriptor,
        TypeKind::ClassTypeSignature,
        TypeKind::ArrayTypeSignature,
        TypeKind::TypeVariable,
        TypeKind::UnboundTypeVariable,
        TypeKind::TypeParameter,
        TypeKind::BoundedTypeArgument,
        TypeKind::MethodSignature,
        TypeKind::ClassSignature,
    ];
}

/// Approximate size of the global intern table for `kind`.
///
/// Includes entries whose values were dropped but not yet swept.
/// Diagnostic only.
pub fn live_count(kind: TypeKind) -> usize {
    use crate::desc::{ArrayDescData, ClassDescData, MethodDescData};
    use crate::sig::{
        ArraySigData, BoundedArgData, ClassSigData, ClassSignatureData, MethodSigData,
        TypeParamData, TypeVarData, UnboundVarData,
    };

    let registry = InternRegistry::global();
    match kind {
        TypeKind::ClassTypeDescriptor => registry.live_count::<ClassDescData>(),
        TypeKind::ArrayTypeDescriptor => registry.live_count::<ArrayDescData>(),
        TypeKind::MethodDescriptor => registry.live_count::<MethodDescData>(),
        TypeKind::ClassTypeSignature => registry.live_count::<ClassSigData>(),
        TypeKind::ArrayTypeSignature => registry.live_count::<ArraySigData>(),
        TypeKind::TypeVariable => registry.live_count::<TypeVarData>(),
        TypeKind::UnboundTypeVariable => registry.live_count::<UnboundVarData>(),
        TypeKind::TypeParameter => registry.live_count::<TypeParamData>(),
        TypeKind::BoundedTypeArgument => registry.live_count::<BoundedArgData>(),
        TypeKind::MethodSignature => registry.live_count::<MethodSigData>(),
        TypeKind::ClassSignature => registry.live_count::<ClassSignatureData>(),
    }
}
