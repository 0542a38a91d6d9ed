#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::desc::ClassTypeDescriptor;
use crate::error::ConstructionError;
use crate::repr::{key_of, TypeRepresentable};
use pretty_assertions::assert_eq;

fn class(name: &str) -> ClassTypeSignature {
    ClassTypeSignature::new(name)
}

fn list_of(argument: TypeArgument) -> ClassTypeSignature {
    ClassTypeSignature::of(None, "java/util/List", vec![argument])
}

#[test]
fn class_type_with_arguments() {
    let sig = list_of(UnboundTypeVariable::new("T").into());
    assert_eq!(sig.as_internal(), "Ljava/util/List<TT;>;");
    assert_eq!(sig.as_readable(), "java/util/List<T>");
}

#[test]
fn nested_class_drops_parent_terminator() {
    let outer = class("outer");
    let inner = outer.nested("inner", vec![]);
    assert_eq!(inner.as_internal(), "Louter.inner;");
    assert_eq!(inner.as_readable(), "outer.inner");
    assert_eq!(inner.parent(), Some(&outer));
}

#[test]
fn nested_class_with_arguments_on_both_levels() {
    let outer = ClassTypeSignature::of(
        None,
        "pkg/Outer",
        vec![UnboundTypeVariable::new("A").into()],
    );
    let inner = outer.nested("Inner", vec![TypeArgument::Wildcard]);
    assert_eq!(inner.as_internal(), "Lpkg/Outer<TA;>.Inner<*>;");
    assert_eq!(inner.as_readable(), "pkg/Outer<A>.Inner<*>");
}

#[test]
fn nested_class_erases_to_binary_name() {
    let inner = class("pkg/Outer").nested("Inner", vec![]).nested("Deep", vec![]);
    assert_eq!(inner.erased_name(), "pkg/Outer$Inner$Deep");
    assert_eq!(
        inner.as_descriptor(),
        ClassTypeDescriptor::new("pkg/Outer$Inner$Deep")
    );
}

#[test]
fn nested_segment_must_be_simple_name() {
    let outer = class("pkg/Outer");
    assert!(matches!(
        ClassTypeSignature::try_of(Some(outer), "a/b", vec![]),
        Err(TypeError::InvalidConstruction(
            ConstructionError::InvalidName { .. }
        ))
    ));
}

#[test]
fn bounded_arguments_render_with_keywords() {
    let upper = TypeArgument::extends(class("java/lang/Number"));
    let lower = TypeArgument::super_of(UnboundTypeVariable::new("T"));
    assert_eq!(upper.as_internal(), "+Ljava/lang/Number;");
    assert_eq!(upper.as_readable(), "? extends java/lang/Number");
    assert_eq!(lower.as_internal(), "-TT;");
    assert_eq!(lower.as_readable(), "? super T");
    assert_eq!(TypeArgument::Wildcard.as_internal(), "*");
}

#[test]
fn array_signature_flattens_and_renders() {
    let inner = ArrayTypeSignature::new(1, UnboundTypeVariable::new("T").into());
    let outer = ArrayTypeSignature::new(2, inner.into());
    assert_eq!(outer.dimension(), 3);
    assert_eq!(outer.as_internal(), "[[[TT;");
    assert_eq!(outer.as_readable(), "T[][][]");
    assert!(ArrayTypeSignature::try_new(1, TypeSignature::Void).is_err());
}

#[test]
fn array_signature_dimension_overflow_is_an_error() {
    let inner = ArrayTypeSignature::new(2, UnboundTypeVariable::new("T").into());
    assert_eq!(
        ArrayTypeSignature::try_new(usize::MAX, inner.clone().into()).unwrap_err(),
        TypeError::InvalidConstruction(ConstructionError::InvalidDimension {
            dimension: usize::MAX
        })
    );
    assert!(ArrayTypeSignature::try_new(253, inner.into()).is_ok());
}

#[test]
fn type_parameter_requires_a_bound() {
    assert_eq!(
        TypeParameter::try_new("T", None, vec![]).unwrap_err(),
        TypeError::InvalidConstruction(ConstructionError::EmptyBounds {
            parameter: "T".to_owned()
        })
    );
}

#[test]
fn type_parameter_encodings() {
    let comparable = ReferenceTypeSignature::Class(ClassTypeSignature::of(
        None,
        "java/lang/Comparable",
        vec![UnboundTypeVariable::new("T").into()],
    ));

    let interface_only = TypeParameter::new("T", None, vec![comparable.clone()]);
    assert_eq!(interface_only.as_internal(), "T::Ljava/lang/Comparable<TT;>;");
    assert_eq!(
        interface_only.as_readable(),
        "T extends java/lang/Comparable<T>"
    );

    let both = TypeParameter::new(
        "T",
        Some(class("java/lang/Number").into()),
        vec![comparable],
    );
    assert_eq!(
        both.as_internal(),
        "T:Ljava/lang/Number;:Ljava/lang/Comparable<TT;>;"
    );
    assert_eq!(
        both.as_readable(),
        "T extends java/lang/Number & java/lang/Comparable<T>"
    );

    let plain = TypeParameter::object_bounded("E");
    assert_eq!(plain.as_internal(), "E:Ljava/lang/Object;");
}

#[test]
fn bound_and_unbound_variables_share_encoding_but_not_identity() {
    let unbound = UnboundTypeVariable::new("T");
    let bound = TypeParameter::object_bounded("T").variable();

    assert_eq!(unbound.as_internal(), "TT;");
    assert_eq!(bound.as_internal(), "TT;");
    assert_eq!(bound.to_string(), "T");

    let unbound_sig = TypeSignature::from(unbound);
    let bound_sig = TypeSignature::from(bound);
    assert_ne!(unbound_sig, bound_sig);
    assert_ne!(key_of(&unbound_sig), key_of(&bound_sig));
}

#[test]
fn variables_bound_to_different_definitions_differ() {
    let a = TypeParameter::object_bounded("T").variable();
    let b = TypeParameter::new("T", None, vec![class("java/lang/Runnable").into()]).variable();
    assert_ne!(a, b);
    assert!(!a.ptr_eq(&b));
    assert!(a.ptr_eq(&TypeParameter::object_bounded("T").variable()));
}

#[test]
fn type_variable_erases_through_bounds() {
    let class_bound = TypeParameter::new(
        "T",
        Some(class("java/lang/Number").into()),
        vec![class("java/lang/Runnable").into()],
    );
    assert_eq!(
        class_bound.variable().as_descriptor().as_internal(),
        "Ljava/lang/Number;"
    );

    let interface_bound = TypeParameter::new(
        "T",
        None,
        vec![
            class("java/lang/Runnable").into(),
            class("java/io/Closeable").into(),
        ],
    );
    assert_eq!(
        interface_bound.variable().as_descriptor().as_internal(),
        "Ljava/lang/Runnable;"
    );
}

#[test]
fn unbound_variable_cannot_erase() {
    let sig = TypeSignature::from(UnboundTypeVariable::new("T"));
    assert_eq!(
        sig.try_as_descriptor().unwrap_err(),
        TypeError::UnresolvedPlaceholder {
            name: "T".to_owned()
        }
    );

    let array = ArrayTypeSignature::new(1, UnboundTypeVariable::new("E").into());
    assert!(array.try_as_descriptor().is_err());
}

#[test]
#[should_panic(expected = "unresolved type variable `T`")]
fn as_descriptor_panics_on_unbound_variable() {
    let _ = TypeSignature::from(UnboundTypeVariable::new("T")).as_descriptor();
}

#[test]
fn method_signature_encodings() {
    let t = TypeParameter::object_bounded("T");
    let sig = MethodSignature::new(
        vec![t.clone()],
        vec![
            UnboundTypeVariable::new("T").into(),
            PrimitiveType::Int.into(),
        ],
        list_of(UnboundTypeVariable::new("T").into()).into(),
        vec![
            class("java/io/IOException").into(),
            UnboundTypeVariable::new("X").into(),
        ],
    );
    assert_eq!(
        sig.as_internal(),
        "<T:Ljava/lang/Object;>(TT;I)Ljava/util/List<TT;>;^Ljava/io/IOException;^TX;"
    );
    assert_eq!(
        sig.as_readable(),
        "<T extends java/lang/Object> java/util/List<T> (T, int) throws java/io/IOException, X"
    );
}

#[test]
fn method_signature_erases_to_descriptor() {
    let sig = MethodSignature::new(
        vec![],
        vec![list_of(TypeArgument::Wildcard).into()],
        TypeSignature::Void,
        vec![class("java/io/IOException").into()],
    );
    assert_eq!(sig.as_descriptor().as_internal(), "(Ljava/util/List;)V");
    assert!(MethodSignature::try_new(vec![], vec![TypeSignature::Void], TypeSignature::Void, vec![])
        .is_err());
}

#[test]
fn class_signature_encodings() {
    let sig = ClassSignature::new(
        vec![TypeParameter::object_bounded("E")],
        class("java/util/AbstractList").nested("Base", vec![]),
        vec![
            list_of(UnboundTypeVariable::new("E").into()),
            class("java/util/RandomAccess"),
        ],
    );
    assert_eq!(
        sig.as_internal(),
        "<E:Ljava/lang/Object;>Ljava/util/AbstractList.Base;Ljava/util/List<TE;>;Ljava/util/RandomAccess;"
    );
    assert_eq!(
        sig.as_readable(),
        "<E extends java/lang/Object> extends java/util/AbstractList.Base implements java/util/List<E>, java/util/RandomAccess"
    );

    let plain = ClassSignature::new(vec![], ClassTypeSignature::object(), vec![]);
    assert_eq!(plain.as_readable(), "extends java/lang/Object");
}

#[test]
fn sum_type_conversions() {
    let reference = ReferenceTypeSignature::from(class("a/B"));
    let sig = TypeSignature::from(reference.clone());
    assert_eq!(ReferenceTypeSignature::try_from(sig.clone()).unwrap(), reference);
    assert_eq!(ThrowsSignature::try_from(sig).unwrap().as_internal(), "La/B;");

    let array = TypeSignature::from(ArrayTypeSignature::new(1, PrimitiveType::Int.into()));
    assert!(ThrowsSignature::try_from(array.clone()).is_err());
    assert!(ReferenceTypeSignature::try_from(array).is_ok());

    let primitive = TypeSignature::from(PrimitiveType::Int);
    assert_eq!(
        ReferenceTypeSignature::try_from(primitive.clone()),
        Err(primitive)
    );
}

#[test]
fn wrapper_signatures() {
    assert_eq!(
        PrimitiveType::Int.wrapper_signature(),
        class("java/lang/Integer")
    );
    assert_eq!(
        PrimitiveType::Int.wrapper_signature().as_descriptor(),
        PrimitiveType::Int.wrapper_descriptor()
    );
}
