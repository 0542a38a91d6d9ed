//! The two renderings every node has: the compact internal encoding used by
//! class files, and the readable form (`Display`).

use std::fmt;

/// A node that can render its internal encoding and its readable form.
///
/// Both renderings are built by structural composition: a node writes its
/// own punctuation and delegates to its children.
pub trait TypeRepresentable: fmt::Display {
    /// Append the internal encoding to `out`.
    fn write_internal(&self, out: &mut String);

    /// The internal encoding, e.g. `Ljava/util/List<TT;>;`.
    fn as_internal(&self) -> String {
        let mut out = String::new();
        self.write_internal(&mut out);
        out
    }

    /// The readable form, e.g. `java/util/List<T>`.
    fn as_readable(&self) -> String {
        self.to_string()
    }
}

/// Which text a node writes through [`Encode`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Encoding {
    /// The class-file encoding.
    Internal,
    /// The intern key. Identical to `Internal` except for bound type
    /// variables, which spell out their definition.
    Key,
}

pub(crate) trait Encode {
    fn encode(&self, out: &mut String, encoding: Encoding);
}

pub(crate) fn key_of<T: Encode + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    value.encode(&mut out, Encoding::Key);
    out
}

pub(crate) fn encode_all<T: Encode>(items: &[T], out: &mut String, encoding: Encoding) {
    for item in items {
        item.encode(out, encoding);
    }
}

/// Write `items` separated by `sep`.
pub(crate) fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// `TypeRepresentable` for sum types that already implement `Encode`.
macro_rules! representable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl crate::repr::TypeRepresentable for $ty {
                fn write_internal(&self, out: &mut String) {
                    crate::repr::Encode::encode(self, out, crate::repr::Encoding::Internal);
                }
            }
        )*
    };
}
pub(crate) use representable;
