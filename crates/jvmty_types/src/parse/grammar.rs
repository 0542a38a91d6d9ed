//! Recursive-descent rules, one method per grammar production.
//!
//! Dispatch is on the current byte only. A rule either consumes its whole
//! production or fails; an optional element is tried with an
//! advance-if-successful helper that leaves the cursor untouched on a miss.

use super::cursor::Cursor;
use super::error::{Expected, ParseError, ParseErrorKind};
use crate::desc::{ArrayTypeDescriptor, ClassTypeDescriptor, MethodDescriptor, TypeDescriptor};
use crate::error::TypeError;
use crate::primitive::PrimitiveType;
use crate::sig::{
    ArrayTypeSignature, BoundedTypeArgument, ClassSignature, ClassTypeSignature, MethodSignature,
    ReferenceTypeSignature, ThrowsSignature, TypeArgument, TypeParameter, TypeSignature,
    UnboundTypeVariable, WildcardBound,
};
use crate::stack::ensure_sufficient_stack;

type PResult<T> = Result<T, ParseError>;

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str, from: usize) -> PResult<Self> {
        if from > text.len() || !text.is_char_boundary(from) {
            return Err(ParseError::at(
                ParseErrorKind::InvalidOffset,
                text,
                from.min(text.len()),
            ));
        }
        Ok(Self {
            cursor: Cursor::new(text, from),
        })
    }

    pub(crate) fn pos(&self) -> usize {
        self.cursor.pos()
    }

    fn expected(&self, expected: Expected) -> ParseError {
        ParseError::at(
            ParseErrorKind::Expected(expected),
            self.cursor.text(),
            self.cursor.pos(),
        )
    }

    fn expect(&mut self, byte: u8) -> PResult<()> {
        if self.cursor.eat(byte) {
            Ok(())
        } else {
            Err(self.expected(Expected::Char(char::from(byte))))
        }
    }

    /// Map a factory rejection onto the text span `start..end`.
    fn check<T>(&self, built: Result<T, TypeError>, start: usize, end: usize) -> PResult<T> {
        built.map_err(|err| ParseError::invalid(err, self.cursor.text(), start, end))
    }

    fn empty_list(&self) -> ParseError {
        // Point at the `<` of the `<>` just consumed.
        let start = self.cursor.pos().saturating_sub(2);
        ParseError::new(ParseErrorKind::EmptyList, self.cursor.text(), start, start + 2)
    }

    /// Consume a primitive code if one is next.
    fn primitive(&mut self) -> Option<PrimitiveType> {
        if self.cursor.is_eof() {
            return None;
        }
        let kind = PrimitiveType::from_code(self.cursor.current())?;
        self.cursor.advance();
        Some(kind)
    }

    /// Count and consume leading `[`s.
    fn dimensions(&mut self) -> usize {
        let mut dimension = 0;
        while self.cursor.eat(b'[') {
            dimension += 1;
        }
        dimension
    }

    // Descriptors

    pub(crate) fn type_descriptor(&mut self) -> PResult<TypeDescriptor> {
        if self.cursor.eat(b'V') {
            return Ok(TypeDescriptor::Void);
        }
        self.value_descriptor(Expected::TypeDescriptor)
    }

    /// Any descriptor but `void`: a field type, parameter or array element.
    fn value_descriptor(&mut self, expected: Expected) -> PResult<TypeDescriptor> {
        if let Some(kind) = self.primitive() {
            return Ok(TypeDescriptor::Primitive(kind));
        }
        match self.cursor.current() {
            b'L' => Ok(TypeDescriptor::Class(self.class_descriptor()?)),
            b'[' => Ok(TypeDescriptor::Array(self.array_descriptor()?)),
            _ => Err(self.expected(expected)),
        }
    }

    pub(crate) fn class_descriptor(&mut self) -> PResult<ClassTypeDescriptor> {
        if !self.cursor.eat(b'L') {
            return Err(self.expected(Expected::ClassType));
        }
        let name = self.cursor.take_until(b";");
        let start = self.cursor.mark_pos();
        self.expect(b';')?;
        self.check(ClassTypeDescriptor::try_new(name), start, start + name.len())
    }

    fn array_descriptor(&mut self) -> PResult<ArrayTypeDescriptor> {
        let start = self.cursor.pos();
        let dimension = self.dimensions();
        let base = self.value_descriptor(Expected::NonVoidType)?;
        self.check(
            ArrayTypeDescriptor::try_new(dimension, base),
            start,
            start + dimension,
        )
    }

    pub(crate) fn method_descriptor(&mut self) -> PResult<MethodDescriptor> {
        let start = self.cursor.pos();
        self.expect(b'(')?;
        let mut params = Vec::new();
        while !self.cursor.eat(b')') {
            if self.cursor.is_eof() {
                return Err(self.expected(Expected::Char(')')));
            }
            params.push(self.value_descriptor(Expected::NonVoidType)?);
        }
        let return_type = self.type_descriptor()?;
        let end = self.cursor.pos();
        self.check(MethodDescriptor::try_new(params, return_type), start, end)
    }

    // Signatures

    pub(crate) fn type_signature(&mut self) -> PResult<TypeSignature> {
        if self.cursor.eat(b'V') {
            return Ok(TypeSignature::Void);
        }
        self.value_signature(Expected::TypeSignature)
    }

    /// Any signature but `void`.
    fn value_signature(&mut self, expected: Expected) -> PResult<TypeSignature> {
        if let Some(kind) = self.primitive() {
            return Ok(TypeSignature::Primitive(kind));
        }
        match self.cursor.current() {
            b'L' | b'[' | b'T' => Ok(self.reference_type_signature()?.into()),
            _ => Err(self.expected(expected)),
        }
    }

    pub(crate) fn reference_type_signature(&mut self) -> PResult<ReferenceTypeSignature> {
        match self.cursor.current() {
            b'L' => Ok(ReferenceTypeSignature::Class(self.class_type_signature()?)),
            b'[' => Ok(ReferenceTypeSignature::Array(self.array_signature()?)),
            b'T' => Ok(ReferenceTypeSignature::Unbound(self.type_variable()?)),
            _ => Err(self.expected(Expected::ReferenceType)),
        }
    }

    /// `Lpkg/Outer<args>.Inner<args>;`
    pub(crate) fn class_type_signature(&mut self) -> PResult<ClassTypeSignature> {
        if !self.cursor.eat(b'L') {
            return Err(self.expected(Expected::ClassType));
        }
        let mut parent = None;
        loop {
            let name = self.cursor.take_until(b"<.;");
            let start = self.cursor.mark_pos();
            if self.cursor.is_eof() {
                return Err(self.expected(Expected::Char(';')));
            }
            let type_arguments = if self.cursor.current() == b'<' {
                ensure_sufficient_stack(|| self.type_arguments())?
            } else {
                Vec::new()
            };
            let class = self.check(
                ClassTypeSignature::try_of(parent.take(), name, type_arguments),
                start,
                start + name.len(),
            )?;
            if !self.cursor.eat(b'.') {
                self.expect(b';')?;
                return Ok(class);
            }
            parent = Some(class);
        }
    }

    fn type_arguments(&mut self) -> PResult<Vec<TypeArgument>> {
        self.expect(b'<')?;
        if self.cursor.eat(b'>') {
            return Err(self.empty_list());
        }
        let mut arguments = Vec::new();
        loop {
            arguments.push(self.type_argument()?);
            if self.cursor.eat(b'>') {
                return Ok(arguments);
            }
            if self.cursor.is_eof() {
                return Err(self.expected(Expected::Char('>')));
            }
        }
    }

    pub(crate) fn type_argument(&mut self) -> PResult<TypeArgument> {
        let current = self.cursor.current();
        if current == b'*' {
            self.cursor.advance();
            return Ok(TypeArgument::Wildcard);
        }
        if let Some(bound) = WildcardBound::from_symbol(current) {
            self.cursor.advance();
            let signature = self.reference_type_signature()?;
            return Ok(TypeArgument::Bounded(BoundedTypeArgument::new(
                bound, signature,
            )));
        }
        match current {
            b'L' | b'[' | b'T' => Ok(TypeArgument::Reference(self.reference_type_signature()?)),
            _ => Err(self.expected(Expected::TypeArgument)),
        }
    }

    fn array_signature(&mut self) -> PResult<ArrayTypeSignature> {
        let start = self.cursor.pos();
        let dimension = self.dimensions();
        let base = self.value_signature(Expected::NonVoidType)?;
        self.check(
            ArrayTypeSignature::try_new(dimension, base),
            start,
            start + dimension,
        )
    }

    /// `TName;`
    fn type_variable(&mut self) -> PResult<UnboundTypeVariable> {
        self.expect(b'T')?;
        let name = self.cursor.take_until(b";");
        let start = self.cursor.mark_pos();
        self.expect(b';')?;
        self.check(UnboundTypeVariable::try_new(name), start, start + name.len())
    }

    fn type_parameters(&mut self) -> PResult<Vec<TypeParameter>> {
        self.expect(b'<')?;
        if self.cursor.eat(b'>') {
            return Err(self.empty_list());
        }
        let mut params = Vec::new();
        loop {
            params.push(self.type_parameter()?);
            if self.cursor.eat(b'>') {
                return Ok(params);
            }
            if self.cursor.is_eof() {
                return Err(self.expected(Expected::Char('>')));
            }
        }
    }

    /// `Name:ClassBound:Interface1:Interface2`, class bound optional.
    pub(crate) fn type_parameter(&mut self) -> PResult<TypeParameter> {
        let name = self.cursor.take_until(b":>");
        let start = self.cursor.mark_pos();
        if !self.cursor.eat(b':') {
            return Err(self.expected(Expected::Char(':')));
        }
        let class_bound = match self.cursor.current() {
            b'L' | b'[' | b'T' => Some(ensure_sufficient_stack(|| {
                self.reference_type_signature()
            })?),
            _ => None,
        };
        let mut interface_bounds = Vec::new();
        while self.cursor.eat(b':') {
            interface_bounds.push(ensure_sufficient_stack(|| self.reference_type_signature())?);
        }
        self.check(
            TypeParameter::try_new(name, class_bound, interface_bounds),
            start,
            start + name.len(),
        )
    }

    fn throws_signature(&mut self) -> PResult<ThrowsSignature> {
        match self.cursor.current() {
            b'L' => Ok(ThrowsSignature::Class(self.class_type_signature()?)),
            b'T' => Ok(ThrowsSignature::Unbound(self.type_variable()?)),
            _ => Err(self.expected(Expected::ThrowsType)),
        }
    }

    /// `<params>(args)ret^throws`, type parameters and throws optional.
    pub(crate) fn method_signature(&mut self) -> PResult<MethodSignature> {
        let start = self.cursor.pos();
        let type_parameters = if self.cursor.current() == b'<' {
            self.type_parameters()?
        } else {
            Vec::new()
        };
        self.expect(b'(')?;
        let mut params = Vec::new();
        while !self.cursor.eat(b')') {
            if self.cursor.is_eof() {
                return Err(self.expected(Expected::Char(')')));
            }
            params.push(self.value_signature(Expected::NonVoidType)?);
        }
        let return_type = self.type_signature()?;
        let mut throws = Vec::new();
        while self.cursor.eat(b'^') {
            throws.push(self.throws_signature()?);
        }
        let end = self.cursor.pos();
        self.check(
            MethodSignature::try_new(type_parameters, params, return_type, throws),
            start,
            end,
        )
    }

    /// `<params>Superclass;Interface1;...`, type parameters optional.
    pub(crate) fn class_signature(&mut self) -> PResult<ClassSignature> {
        let type_parameters = if self.cursor.current() == b'<' {
            self.type_parameters()?
        } else {
            Vec::new()
        };
        let superclass = self.class_type_signature()?;
        let mut superinterfaces = Vec::new();
        while self.cursor.current() == b'L' {
            superinterfaces.push(self.class_type_signature()?);
        }
        Ok(ClassSignature::new(
            type_parameters,
            superclass,
            superinterfaces,
        ))
    }
}
