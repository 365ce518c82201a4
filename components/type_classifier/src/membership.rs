//! Membership tests against a [`TypeSpec`].

use core_types::Value;

use crate::classify::classify;
use crate::spec::{TypeSpec, TypeSpecEntry};

/// Whether `value` satisfies any alternative of `spec`.
///
/// An alternative matches when it is the canonical tag of the value, a
/// category whose predicate holds, or a class the value is an instance of.
/// A class entry that cannot take part in `instanceof` (an arrow function,
/// say) simply does not match. This never fails.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_classifier::{matches, TypeSpec};
///
/// assert!(matches(&Value::string("123"), &TypeSpec::from("LikeNumber")));
/// assert!(matches(&Value::null(), &TypeSpec::from(["String", "Nil"])));
/// assert!(!matches(&Value::nan(), &TypeSpec::from("Number")));
/// assert!(!matches(&Value::number(1.0), &TypeSpec::from("NoSuchType")));
/// ```
pub fn matches(value: &Value, spec: &TypeSpec) -> bool {
    let tag = classify(value);
    spec.entries().iter().any(|entry| match entry {
        TypeSpecEntry::Tag(expected) => *expected == tag,
        TypeSpecEntry::Category(category) => category.test(value),
        TypeSpecEntry::Class(ctor) => value.instance_of(ctor).unwrap_or(false),
        TypeSpecEntry::Unknown(_) => false,
    })
}

/// Negation of [`matches`]
pub fn not_matches(value: &Value, spec: &TypeSpec) -> bool {
    !matches(value, spec)
}

/// Whether `value` satisfies any extended-category alternative of `spec`.
///
/// Tags and classes in `spec` are ignored.
pub fn matches_extended(value: &Value, spec: &TypeSpec) -> bool {
    spec.entries().iter().any(|entry| match entry {
        TypeSpecEntry::Category(category) => category.test(value),
        _ => false,
    })
}
