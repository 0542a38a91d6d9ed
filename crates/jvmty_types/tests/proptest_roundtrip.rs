//! Property-based tests for parsing, rendering and erasure.
//!
//! Generated texts are well-formed encodings, including nested class
//! segments, type-parameter lists, throws clauses and class signatures.
//! The properties are that they survive a parse unchanged and that erasure
//! of a bound value always yields a parsable descriptor.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use jvmty_types::{
    from_fn, Bindable, ClassSignature, ClassTypeDescriptor, MethodDescriptor, MethodSignature,
    Parse, TypeDescriptor, TypeParameter, TypeRepresentable, TypeSignature,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_class_name() -> impl Strategy<Value = String> {
    "[a-z]{1,6}(/[A-Z][a-zA-Z0-9]{0,6}){0,2}"
}

fn arb_var_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]?"
}

fn arb_primitive() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("B"),
        Just("C"),
        Just("D"),
        Just("F"),
        Just("I"),
        Just("J"),
        Just("S"),
        Just("Z"),
    ]
    .prop_map(str::to_owned)
}

fn arb_simple_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,6}"
}

/// `<a..>` or nothing.
fn arb_type_arguments(argument: BoxedStrategy<String>) -> BoxedStrategy<String> {
    prop::option::of(prop::collection::vec(argument, 1..4))
        .prop_map(|args| args.map_or_else(String::new, |args| format!("<{}>", args.concat())))
        .boxed()
}

/// `Lpkg/Outer<..>.Inner<..>;`, with zero to two nested segments.
fn arb_class_type_with(argument: BoxedStrategy<String>) -> BoxedStrategy<String> {
    let arguments = arb_type_arguments(argument);
    (
        arb_class_name(),
        arguments.clone(),
        prop::collection::vec((arb_simple_name(), arguments), 0..3),
    )
        .prop_map(|(name, args, nested)| {
            let mut text = format!("L{name}{args}");
            for (segment, args) in nested {
                text.push('.');
                text.push_str(&segment);
                text.push_str(&args);
            }
            text.push(';');
            text
        })
        .boxed()
}

fn arb_argument(reference: BoxedStrategy<String>) -> BoxedStrategy<String> {
    prop_oneof![
        Just("*".to_owned()),
        reference.clone(),
        reference.clone().prop_map(|s| format!("+{s}")),
        reference.prop_map(|s| format!("-{s}")),
    ]
    .boxed()
}

/// Class types, arrays and type variables, nested a few levels deep.
fn arb_reference() -> BoxedStrategy<String> {
    let leaf = prop_oneof![
        arb_class_name().prop_map(|name| format!("L{name};")),
        (arb_class_name(), arb_simple_name()).prop_map(|(outer, inner)| format!("L{outer}.{inner};")),
        arb_var_name().prop_map(|name| format!("T{name};")),
        (1usize..4, arb_primitive()).prop_map(|(dims, p)| format!("{}{p}", "[".repeat(dims))),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            arb_class_type_with(arb_argument(inner.clone().boxed())),
            inner.prop_map(|s| format!("[{s}")),
        ]
    })
    .boxed()
}

fn arb_class_type() -> BoxedStrategy<String> {
    arb_class_type_with(arb_argument(arb_reference()))
}

fn arb_type_signature() -> impl Strategy<Value = String> {
    prop_oneof![arb_primitive(), arb_reference()]
}

fn prefixed(prefix: char, items: Vec<String>) -> String {
    items.iter().map(|item| format!("{prefix}{item}")).collect()
}

/// A type parameter with class bound, interface bounds, or both. Bounds
/// are class types so that erasure never has to chase a variable.
fn arb_type_parameter() -> impl Strategy<Value = String> {
    prop_oneof![
        (
            arb_var_name(),
            arb_class_type(),
            prop::collection::vec(arb_class_type(), 0..3),
        )
            .prop_map(|(name, class, interfaces)| format!(
                "{name}:{class}{}",
                prefixed(':', interfaces)
            )),
        (arb_var_name(), prop::collection::vec(arb_class_type(), 1..3))
            .prop_map(|(name, interfaces)| format!("{name}:{}", prefixed(':', interfaces))),
    ]
}

/// `<T:..U:..>` or nothing.
fn arb_type_parameters() -> impl Strategy<Value = String> {
    prop::option::of(prop::collection::vec(arb_type_parameter(), 1..4))
        .prop_map(|params| params.map_or_else(String::new, |params| format!("<{}>", params.concat())))
}

fn arb_throws() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            arb_class_type(),
            arb_var_name().prop_map(|name| format!("T{name};")),
        ],
        0..3,
    )
    .prop_map(|throws| prefixed('^', throws))
}

fn arb_method_signature() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_type_signature(), 0..4),
        prop_oneof![Just("V".to_owned()), arb_type_signature()],
    )
        .prop_map(|(params, ret)| format!("({}){ret}", params.concat()))
}

fn arb_generic_method_signature() -> impl Strategy<Value = String> {
    (
        arb_type_parameters(),
        prop::collection::vec(arb_type_signature(), 0..4),
        prop_oneof![Just("V".to_owned()), arb_type_signature()],
        arb_throws(),
    )
        .prop_map(|(type_params, params, ret, throws)| {
            format!("{type_params}({}){ret}{throws}", params.concat())
        })
}

fn arb_class_signature() -> impl Strategy<Value = String> {
    (
        arb_type_parameters(),
        arb_class_type(),
        prop::collection::vec(arb_class_type(), 0..3),
    )
        .prop_map(|(type_params, superclass, interfaces)| {
            format!("{type_params}{superclass}{}", interfaces.concat())
        })
}

/// A scope where every name is bound to `Object`.
fn object_scope() -> impl jvmty_types::TypeVariableBinder {
    from_fn(|name| Some(TypeParameter::object_bounded(name)))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn type_signature_round_trips(text in arb_type_signature()) {
        let parsed = TypeSignature::parse(&text).unwrap();
        prop_assert_eq!(parsed.as_internal(), text);
    }

    #[test]
    fn parsing_is_canonical(text in arb_type_signature()) {
        let a = TypeSignature::parse(&text).unwrap();
        let b = TypeSignature::parse(&text).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn erasure_after_binding_is_a_descriptor(text in arb_type_signature()) {
        let bound = TypeSignature::parse(&text).unwrap().bind(&object_scope()).unwrap();
        prop_assert!(bound.is_fully_bound());

        let erased = bound.as_descriptor();
        let encoded = erased.as_internal();
        prop_assert!(!encoded.contains('<'));
        prop_assert_eq!(TypeDescriptor::parse(&encoded).unwrap(), erased);
    }

    #[test]
    fn erasure_is_a_fixpoint(text in arb_type_signature()) {
        let erased = TypeSignature::parse(&text)
            .unwrap()
            .bind(&object_scope())
            .unwrap()
            .as_descriptor();
        prop_assert_eq!(erased.as_signature().as_descriptor(), erased);
    }

    #[test]
    fn method_signature_round_trips(text in arb_method_signature()) {
        let parsed = MethodSignature::parse(&text).unwrap();
        prop_assert_eq!(parsed.as_internal(), text);

        let erased = parsed.bind(&object_scope()).unwrap().as_descriptor();
        let reparsed = MethodDescriptor::parse(&erased.as_internal()).unwrap();
        prop_assert!(reparsed.ptr_eq(&erased));
        prop_assert_eq!(reparsed.params().len(), parsed.params().len());
    }

    #[test]
    fn generic_method_signature_round_trips(text in arb_generic_method_signature()) {
        let parsed = MethodSignature::parse(&text).unwrap();
        prop_assert_eq!(parsed.as_internal(), text.as_str());
        prop_assert!(MethodSignature::parse(&text).unwrap().ptr_eq(&parsed));
    }

    #[test]
    fn generic_method_erases_after_declared_binding(text in arb_generic_method_signature()) {
        let parsed = MethodSignature::parse(&text).unwrap();
        let bound = parsed.bind_declared(&object_scope()).unwrap();
        prop_assert!(bound.is_fully_bound());

        let erased = bound.as_descriptor();
        prop_assert_eq!(MethodDescriptor::parse(&erased.as_internal()).unwrap(), erased);
    }

    #[test]
    fn class_signature_round_trips(text in arb_class_signature()) {
        let parsed = ClassSignature::parse(&text).unwrap();
        prop_assert_eq!(parsed.as_internal(), text.as_str());
        prop_assert!(ClassSignature::parse(&text).unwrap().ptr_eq(&parsed));

        let bound = parsed.bind_declared(&object_scope()).unwrap();
        let superclass = bound.superclass().as_descriptor();
        prop_assert_eq!(
            ClassTypeDescriptor::parse(&superclass.as_internal()).unwrap(),
            superclass
        );
    }

    #[test]
    fn parser_never_panics(text in "[BCDFIJSZVLT\\[<>;:*+\\-./()^a-z]{0,24}") {
        let _ = TypeSignature::parse(&text);
        let _ = MethodSignature::parse(&text);
        let _ = TypeParameter::parse(&text);
        let _ = ClassSignature::parse(&text);
    }
}
