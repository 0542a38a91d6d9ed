use std::fmt;

use super::{
    ArrayTypeSignature, ClassTypeSignature, ReferenceTypeSignature, TypeVariable, UnboundTypeVariable,
};
use crate::canon::{intern, interned_handle};
use crate::repr::{representable, Encode, Encoding};

/// The direction of a bounded wildcard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    /// `? extends X`, encoded `+`.
    Upper,
    /// `? super X`, encoded `-`.
    Lower,
}

impl WildcardBound {
    pub const fn symbol(self) -> char {
        match self {
            WildcardBound::Upper => '+',
            WildcardBound::Lower => '-',
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            WildcardBound::Upper => "extends",
            WildcardBound::Lower => "super",
        }
    }

    pub const fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            b'+' => Some(WildcardBound::Upper),
            b'-' => Some(WildcardBound::Lower),
            _ => None,
        }
    }
}

#[derive(PartialEq, Eq, Hash)]
pub(crate) struct BoundedArgData {
    bound: WildcardBound,
    signature: ReferenceTypeSignature,
}

impl Encode for BoundedArgData {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        out.push(self.bound.symbol());
        self.signature.encode(out, encoding);
    }
}

interned_handle! {
    /// `? extends X` or `? super X`.
    pub struct BoundedTypeArgument(BoundedArgData);
}

impl BoundedTypeArgument {
    pub fn new(bound: WildcardBound, signature: ReferenceTypeSignature) -> Self {
        Self(intern(BoundedArgData { bound, signature }))
    }

    pub fn bound(&self) -> WildcardBound {
        self.0.bound
    }

    pub fn signature(&self) -> &ReferenceTypeSignature {
        &self.0.signature
    }
}

impl fmt::Display for BoundedTypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "? {} {}", self.0.bound.keyword(), self.0.signature)
    }
}

impl fmt::Debug for BoundedTypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedTypeArgument")
            .field("bound", &self.0.bound)
            .field("signature", &self.0.signature)
            .finish()
    }
}

/// One entry of a class type's argument list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeArgument {
    Reference(ReferenceTypeSignature),
    Bounded(BoundedTypeArgument),
    /// The unbounded wildcard `*`.
    Wildcard,
}

impl TypeArgument {
    /// `? extends signature`
    pub fn extends(signature: impl Into<ReferenceTypeSignature>) -> Self {
        TypeArgument::Bounded(BoundedTypeArgument::new(
            WildcardBound::Upper,
            signature.into(),
        ))
    }

    /// `? super signature`
    pub fn super_of(signature: impl Into<ReferenceTypeSignature>) -> Self {
        TypeArgument::Bounded(BoundedTypeArgument::new(
            WildcardBound::Lower,
            signature.into(),
        ))
    }
}

impl Encode for TypeArgument {
    fn encode(&self, out: &mut String, encoding: Encoding) {
        match self {
            TypeArgument::Reference(reference) => reference.encode(out, encoding),
            TypeArgument::Bounded(bounded) => bounded.encode(out, encoding),
            TypeArgument::Wildcard => out.push('*'),
        }
    }
}

impl fmt::Display for TypeArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeArgument::Reference(reference) => fmt::Display::fmt(reference, f),
            TypeArgument::Bounded(bounded) => fmt::Display::fmt(bounded, f),
            TypeArgument::Wildcard => f.write_str("*"),
        }
    }
}

representable!(TypeArgument);

macro_rules! reference_argument {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TypeArgument {
                fn from(reference: $ty) -> Self {
                    TypeArgument::Reference(reference.into())
                }
            }
        )*
    };
}

reference_argument!(
    ReferenceTypeSignature,
    ClassTypeSignature,
    ArrayTypeSignature,
    TypeVariable,
    UnboundTypeVariable
);

impl From<BoundedTypeArgument> for TypeArgument {
    fn from(bounded: BoundedTypeArgument) -> Self {
        TypeArgument::Bounded(bounded)
    }
}
