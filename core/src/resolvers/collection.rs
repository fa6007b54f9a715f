//! Membership, joining, and key lookup

use crate::resolver::{Resolvable, Resolver};
use crate::value::Value;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::sync::Arc;

/// A table of values (or resolvers) selected by key with `map`.
pub type Mapping = IndexMap<String, Resolvable, FnvBuildHasher>;

/// Determine whether `test` is a member of `collection`.
///
/// Array members are compared with strict equality. A string collection
/// checks for `test` as a substring.
pub fn includes(collection: impl Into<Resolvable>, test: impl Into<Resolvable>) -> Resolvable {
    match (collection.into(), test.into()) {
        (Resolvable::Concrete(collection), Resolvable::Concrete(test)) => {
            contains(&collection, &test).into()
        }
        (collection, test) => Resolver::new(move |props| {
            contains(&collection.resolve(props), &test.resolve(props)).into()
        })
        .into(),
    }
}

fn contains(collection: &Value, test: &Value) -> bool {
    match collection {
        Value::Array(items) => items.iter().any(|item| item == test),
        Value::String(haystack) => haystack.contains(test.coerce_to_string().as_str()),
        _ => {
            log::warn!(
                "Cannot look for {:?} in non-collection value {:?}",
                test,
                collection
            );
            false
        }
    }
}

/// Join values together with `joiner`, leaving out any falsy ones.
///
/// The result is a string if every value is known, or a resolver otherwise.
pub fn join<I>(joiner: &str, values: I) -> Resolvable
where
    I: IntoIterator,
    I::Item: Into<Resolvable>,
{
    let values: Vec<Resolvable> = values.into_iter().map(Into::into).collect();

    if values.iter().any(Resolvable::is_deferred) {
        let joiner = joiner.to_string();

        return Resolver::new(move |props| {
            join_truthy(&joiner, values.iter().map(|value| value.resolve(props))).into()
        })
        .into();
    }

    join_truthy(
        joiner,
        values.into_iter().filter_map(Resolvable::into_concrete),
    )
    .into()
}

fn join_truthy(joiner: &str, values: impl Iterator<Item = Value>) -> String {
    values
        .filter(Value::coerce_to_boolean)
        .map(|value| value.coerce_to_string())
        .collect::<Vec<_>>()
        .join(joiner)
}

/// Select an entry of `mapping` by key.
///
/// With a known key the selected entry is returned as it is stored, which may
/// itself be a resolver. With a deferred key, the returned resolver resolves
/// the key and then the selected entry against the same props.
pub fn map(mapping: &Mapping, key: impl Into<Resolvable>) -> Resolvable {
    match key.into() {
        Resolvable::Concrete(key) => mapping
            .get(&*key.to_property_key())
            .cloned()
            .unwrap_or_default(),
        Resolvable::Deferred(key) => {
            let mapping = Arc::new(mapping.clone());

            Resolver::new(move |props| {
                let key = key.resolve(props);

                mapping
                    .get(&*key.to_property_key())
                    .map(|entry| entry.resolve(props))
                    .unwrap_or_default()
            })
            .into()
        }
    }
}
