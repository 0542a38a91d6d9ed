//! The eight primitive kinds.

use std::fmt;

use crate::desc::ClassTypeDescriptor;
use crate::sig::ClassTypeSignature;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Char,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Char,
        PrimitiveType::Byte,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Long,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Boolean,
    ];

    /// The one-character encoding (`I` for `int`, `J` for `long`, ...).
    pub const fn code(self) -> char {
        match self {
            PrimitiveType::Char => 'C',
            PrimitiveType::Byte => 'B',
            PrimitiveType::Short => 'S',
            PrimitiveType::Int => 'I',
            PrimitiveType::Long => 'J',
            PrimitiveType::Float => 'F',
            PrimitiveType::Double => 'D',
            PrimitiveType::Boolean => 'Z',
        }
    }

    /// The source-language keyword.
    pub const fn readable_name(self) -> &'static str {
        match self {
            PrimitiveType::Char => "char",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Boolean => "boolean",
        }
    }

    /// Binary name of the boxed wrapper class.
    pub const fn wrapper_name(self) -> &'static str {
        match self {
            PrimitiveType::Char => "java/lang/Character",
            PrimitiveType::Byte => "java/lang/Byte",
            PrimitiveType::Short => "java/lang/Short",
            PrimitiveType::Int => "java/lang/Integer",
            PrimitiveType::Long => "java/lang/Long",
            PrimitiveType::Float => "java/lang/Float",
            PrimitiveType::Double => "java/lang/Double",
            PrimitiveType::Boolean => "java/lang/Boolean",
        }
    }

    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            b'C' => PrimitiveType::Char,
            b'B' => PrimitiveType::Byte,
            b'S' => PrimitiveType::Short,
            b'I' => PrimitiveType::Int,
            b'J' => PrimitiveType::Long,
            b'F' => PrimitiveType::Float,
            b'D' => PrimitiveType::Double,
            b'Z' => PrimitiveType::Boolean,
            _ => return None,
        })
    }

    /// Takes two local-variable slots (`long`, `double`).
    pub const fn is_wide(self) -> bool {
        matches!(self, PrimitiveType::Long | PrimitiveType::Double)
    }

    pub fn wrapper_descriptor(self) -> ClassTypeDescriptor {
        ClassTypeDescriptor::new(self.wrapper_name())
    }

    pub fn wrapper_signature(self) -> ClassTypeSignature {
        ClassTypeSignature::new(self.wrapper_name())
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.readable_name())
    }
}

impl crate::repr::Encode for PrimitiveType {
    fn encode(&self, out: &mut String, _encoding: crate::repr::Encoding) {
        out.push(self.code());
    }
}

crate::repr::representable!(PrimitiveType);
