//! With interning switched off, values are still equal but never shared.
//!
//! Kept alone in its own binary: it flips the process-wide switch.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use jvmty_intern::InternRegistry;
use jvmty_types::{ClassTypeDescriptor, MethodSignature, Parse, TypeRepresentable};

#[test]
fn disabled_registry_builds_fresh_values() {
    InternRegistry::global().set_enabled(false);

    let a = ClassTypeDescriptor::new("a/B");
    let b = ClassTypeDescriptor::new("a/B");
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));

    let text = "<T:Ljava/lang/Object;>(TT;)V";
    let first = MethodSignature::parse(text).unwrap();
    let second = MethodSignature::parse(text).unwrap();
    assert_eq!(first, second);
    assert!(!first.ptr_eq(&second));
    assert_eq!(second.as_internal(), text);

    InternRegistry::global().set_enabled(true);
    let c = ClassTypeDescriptor::new("a/B");
    let d = ClassTypeDescriptor::new("a/B");
    assert!(c.ptr_eq(&d));
}
