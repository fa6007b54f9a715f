//! Boolean logic and equality

use crate::resolver::{Resolvable, Resolver};

/// Logical "and" of two values.
///
/// If either side is known to be falsy, this is `false` right away even when
/// the other side is deferred.
pub fn and(a: impl Into<Resolvable>, b: impl Into<Resolvable>) -> Resolvable {
    match (a.into(), b.into()) {
        (Resolvable::Concrete(a), Resolvable::Concrete(b)) => {
            (a.coerce_to_boolean() && b.coerce_to_boolean()).into()
        }
        (Resolvable::Deferred(pending), Resolvable::Concrete(known))
        | (Resolvable::Concrete(known), Resolvable::Deferred(pending)) => {
            if !known.coerce_to_boolean() {
                return false.into();
            }

            Resolver::new(move |props| pending.resolve(props).coerce_to_boolean().into()).into()
        }
        (Resolvable::Deferred(a), Resolvable::Deferred(b)) => Resolver::new(move |props| {
            (a.resolve(props).coerce_to_boolean() && b.resolve(props).coerce_to_boolean()).into()
        })
        .into(),
    }
}

/// Logical "or" of two values.
///
/// If either side is known to be truthy, this is `true` right away even when
/// the other side is deferred.
pub fn or(a: impl Into<Resolvable>, b: impl Into<Resolvable>) -> Resolvable {
    match (a.into(), b.into()) {
        (Resolvable::Concrete(a), Resolvable::Concrete(b)) => {
            (a.coerce_to_boolean() || b.coerce_to_boolean()).into()
        }
        (Resolvable::Deferred(pending), Resolvable::Concrete(known))
        | (Resolvable::Concrete(known), Resolvable::Deferred(pending)) => {
            if known.coerce_to_boolean() {
                return true.into();
            }

            Resolver::new(move |props| pending.resolve(props).coerce_to_boolean().into()).into()
        }
        (Resolvable::Deferred(a), Resolvable::Deferred(b)) => Resolver::new(move |props| {
            (a.resolve(props).coerce_to_boolean() || b.resolve(props).coerce_to_boolean()).into()
        })
        .into(),
    }
}

/// Logical negation of a single value.
pub fn not(value: impl Into<Resolvable>) -> Resolvable {
    match value.into() {
        Resolvable::Concrete(value) => (!value.coerce_to_boolean()).into(),
        Resolvable::Deferred(value) => {
            Resolver::new(move |props| (!value.resolve(props).coerce_to_boolean()).into()).into()
        }
    }
}

/// Strict equality of two values.
///
/// Arrays and objects are only equal to themselves; there is no structural
/// comparison.
pub fn is(a: impl Into<Resolvable>, b: impl Into<Resolvable>) -> Resolvable {
    match (a.into(), b.into()) {
        (Resolvable::Concrete(a), Resolvable::Concrete(b)) => (a == b).into(),
        (a, b) => Resolver::new(move |props| (a.resolve(props) == b.resolve(props)).into()).into(),
    }
}
