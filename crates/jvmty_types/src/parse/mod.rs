//! Parsing the internal encoding.
//!
//! Single-pass recursive descent over bytes; see [`grammar`] for the rules.
//! Class-type and method inputs first try the intern pool with the raw text:
//! for those kinds the intern key of an unbound node is exactly its
//! encoding, so a live canonical node is returned without parsing at all.

mod cursor;
mod error;
mod grammar;

use crate::desc::{ClassTypeDescriptor, MethodDescriptor, TypeDescriptor};
use crate::sig::{
    ClassSignature, ClassTypeSignature, MethodSignature, ReferenceTypeSignature, TypeArgument,
    TypeParameter, TypeSignature,
};

pub use error::{Expected, ParseError, ParseErrorKind};
use grammar::Parser;

/// A node that can be read from its internal encoding.
pub trait Parse: Sized {
    /// Parse one value starting at byte offset `from`.
    ///
    /// Returns the value and the offset just past it, so a type can be read
    /// out of a larger string. Text after the value is not examined.
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError>;

    /// Parse all of `text`. Trailing input is an error.
    fn parse(text: &str) -> Result<Self, ParseError> {
        let (value, end) = Self::parse_at(text, 0)?;
        if end != text.len() {
            return Err(ParseError::at(
                ParseErrorKind::Expected(Expected::EndOfInput),
                text,
                end,
            ));
        }
        Ok(value)
    }

    /// [`parse`](Self::parse), discarding the error.
    fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }
}

/// Run `rule` at `from`, after trying `lookup` on the whole text.
fn parse_with<'a, T>(
    text: &'a str,
    from: usize,
    lookup: impl FnOnce(&str) -> Option<T>,
    rule: impl FnOnce(&mut Parser<'a>) -> Result<T, ParseError>,
) -> Result<(T, usize), ParseError> {
    // Keys of bound variables contain `#`, which no parse produces.
    if from == 0 && text.len() > 1 && !text.contains('#') {
        if let Some(canonical) = lookup(text) {
            tracing::trace!(text, "parse served from intern pool");
            return Ok((canonical, text.len()));
        }
    }
    let mut parser = Parser::new(text, from)?;
    let value = rule(&mut parser)?;
    Ok((value, parser.pos()))
}

fn no_lookup<T>(_text: &str) -> Option<T> {
    None
}

fn class_lookup(text: &str) -> Option<ClassTypeSignature> {
    if text.starts_with('L') {
        ClassTypeSignature::lookup(text)
    } else {
        None
    }
}

impl Parse for TypeDescriptor {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(
            text,
            from,
            |text| {
                text.starts_with('L')
                    .then(|| ClassTypeDescriptor::lookup(text))
                    .flatten()
                    .map(TypeDescriptor::Class)
            },
            Parser::type_descriptor,
        )
    }
}

impl Parse for ClassTypeDescriptor {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(
            text,
            from,
            ClassTypeDescriptor::lookup,
            Parser::class_descriptor,
        )
    }
}

impl Parse for MethodDescriptor {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(text, from, MethodDescriptor::lookup, Parser::method_descriptor)
    }
}

impl Parse for TypeSignature {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(
            text,
            from,
            |text| class_lookup(text).map(TypeSignature::Class),
            Parser::type_signature,
        )
    }
}

impl Parse for ReferenceTypeSignature {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(
            text,
            from,
            |text| class_lookup(text).map(ReferenceTypeSignature::Class),
            Parser::reference_type_signature,
        )
    }
}

impl Parse for ClassTypeSignature {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(text, from, class_lookup, Parser::class_type_signature)
    }
}

impl Parse for MethodSignature {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(text, from, MethodSignature::lookup, Parser::method_signature)
    }
}

impl Parse for ClassSignature {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(text, from, no_lookup, Parser::class_signature)
    }
}

impl Parse for TypeParameter {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(text, from, no_lookup, Parser::type_parameter)
    }
}

impl Parse for TypeArgument {
    fn parse_at(text: &str, from: usize) -> Result<(Self, usize), ParseError> {
        parse_with(text, from, no_lookup, Parser::type_argument)
    }
}
