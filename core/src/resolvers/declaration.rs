//! Conditional values and declarations

use crate::resolver::{Resolvable, Resolver};
use crate::value::Value;

/// Pick `a` when `test` is truthy and `b` otherwise.
///
/// A known `test` returns the chosen branch untouched, resolver or not. A
/// deferred `test` yields a resolver which resolves the chosen branch with
/// the same props used for the test.
pub fn tern(
    a: impl Into<Resolvable>,
    b: impl Into<Resolvable>,
    test: impl Into<Resolvable>,
) -> Resolvable {
    let (a, b) = (a.into(), b.into());

    match test.into() {
        Resolvable::Concrete(test) => {
            if test.coerce_to_boolean() {
                a
            } else {
                b
            }
        }
        Resolvable::Deferred(test) => Resolver::new(move |props| {
            if test.resolve(props).coerce_to_boolean() {
                a.resolve(props)
            } else {
                b.resolve(props)
            }
        })
        .into(),
    }
}

/// Produce the declaration `property: value;` when `test` holds.
///
/// `test` defaults to `true` when `None`. A falsy test, or an `Undefined`
/// value, produces an empty string instead. Only the operands that are
/// actually deferred are left for props to decide.
pub fn declare(
    property: &str,
    value: impl Into<Resolvable>,
    test: Option<Resolvable>,
) -> Resolvable {
    let property = property.to_string();

    match (value.into(), test.unwrap_or_else(|| true.into())) {
        (_, Resolvable::Concrete(test)) if !test.coerce_to_boolean() => String::new().into(),
        (Resolvable::Concrete(value), Resolvable::Concrete(_)) => {
            declaration(&property, &value).into()
        }
        (Resolvable::Deferred(value), Resolvable::Concrete(_)) => {
            Resolver::new(move |props| declaration(&property, &value.resolve(props)).into())
                .into()
        }
        (Resolvable::Concrete(value), Resolvable::Deferred(_)) if value.is_undefined() => {
            String::new().into()
        }
        (Resolvable::Concrete(value), Resolvable::Deferred(test)) => Resolver::new(move |props| {
            if test.resolve(props).coerce_to_boolean() {
                declaration(&property, &value).into()
            } else {
                String::new().into()
            }
        })
        .into(),
        (Resolvable::Deferred(value), Resolvable::Deferred(test)) => Resolver::new(move |props| {
            if test.resolve(props).coerce_to_boolean() {
                declaration(&property, &value.resolve(props)).into()
            } else {
                String::new().into()
            }
        })
        .into(),
    }
}

fn declaration(property: &str, value: &Value) -> String {
    if value.is_undefined() {
        return String::new();
    }

    format!("{}: {};", property, value)
}
