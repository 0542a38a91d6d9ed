use std::fmt;

use crate::error::TypeError;

/// A construct the parser was looking for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// A specific character, such as `;` or `(`.
    Char(char),
    TypeDescriptor,
    /// Any type but `void`.
    NonVoidType,
    TypeSignature,
    /// A class type, array or type variable.
    ReferenceType,
    ClassType,
    /// A class type or type variable.
    ThrowsType,
    TypeArgument,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Char(c) => write!(f, "`{c}`"),
            Expected::TypeDescriptor => f.write_str("a type descriptor"),
            Expected::NonVoidType => f.write_str("a non-void type"),
            Expected::TypeSignature => f.write_str("a type signature"),
            Expected::ReferenceType => f.write_str("a class, array or type variable"),
            Expected::ClassType => f.write_str("a class type"),
            Expected::ThrowsType => f.write_str("a class type or type variable"),
            Expected::TypeArgument => f.write_str("a type argument"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended or a different character was found.
    Expected(Expected),
    /// `<>` with nothing inside.
    EmptyList,
    /// The text is well formed, but the node it describes is invalid: a bad
    /// name, too many array dimensions, a type parameter without bounds.
    Invalid(TypeError),
    /// The start offset is past the end or not on a char boundary.
    InvalidOffset,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Expected(expected) => write!(f, "expected {expected}"),
            ParseErrorKind::EmptyList => f.write_str("empty `<>` list"),
            ParseErrorKind::Invalid(err) => fmt::Display::fmt(err, f),
            ParseErrorKind::InvalidOffset => f.write_str("start offset is not inside the text"),
        }
    }
}

/// Malformed or truncated encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset of `found` in `text`.
    pub offset: usize,
    /// The offending text, empty at end of input.
    pub found: String,
    /// The full input.
    pub text: String,
}

/// How much of the remaining input an error quotes.
const FOUND_LIMIT: usize = 32;

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, text: &str, offset: usize, end: usize) -> Self {
        let found = text
            .as_bytes()
            .get(offset..end.min(text.len()))
            .map(String::from_utf8_lossy)
            .unwrap_or_default()
            .into_owned();
        Self {
            kind,
            offset,
            found,
            text: text.to_owned(),
        }
    }

    /// An error quoting the input from `offset` on, up to a short limit.
    pub(crate) fn at(kind: ParseErrorKind, text: &str, offset: usize) -> Self {
        Self::new(kind, text, offset, offset.saturating_add(FOUND_LIMIT))
    }

    pub(crate) fn invalid(err: TypeError, text: &str, offset: usize, end: usize) -> Self {
        Self::new(ParseErrorKind::Invalid(err), text, offset, end)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {} in `{}`", self.kind, self.offset, self.text)?;
        if !self.found.is_empty() {
            write!(f, " (found `{}`)", self.found)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
