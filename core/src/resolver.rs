//! Deferred resolution

use crate::value::{ObjectMap, Value};
use std::fmt;
use std::sync::Arc;

/// A value that can only be known once props are available.
///
/// Resolvers are cheap to clone and may be shared between threads. Calling
/// one never mutates it, so resolving the same props twice gives the same
/// result.
#[derive(Clone)]
pub struct Resolver(Arc<dyn Fn(&Value) -> Value + Send + Sync>);

impl Resolver {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Produce the concrete value for a given set of props.
    pub fn resolve(&self, props: &Value) -> Value {
        (self.0)(props)
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Resolver({:p})", Arc::as_ptr(&self.0))
    }
}

/// Either a value that is already known, or one that must wait for props.
///
/// Every resolver operand and result is one of these. A `Deferred` always
/// resolves straight to a concrete `Value`; resolvers are never nested at
/// rest.
#[derive(Clone, Debug)]
pub enum Resolvable {
    Concrete(Value),
    Deferred(Resolver),
}

impl Default for Resolvable {
    fn default() -> Self {
        Resolvable::Concrete(Value::Undefined)
    }
}

impl Resolvable {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Resolvable::Deferred(_))
    }

    /// Resolve against a set of props.
    ///
    /// Concrete values are returned unchanged and never look at `props`.
    pub fn resolve(&self, props: &Value) -> Value {
        match self {
            Resolvable::Concrete(value) => value.clone(),
            Resolvable::Deferred(resolver) => resolver.resolve(props),
        }
    }

    pub fn as_concrete(&self) -> Option<&Value> {
        match self {
            Resolvable::Concrete(value) => Some(value),
            Resolvable::Deferred(_) => None,
        }
    }

    pub fn into_concrete(self) -> Option<Value> {
        match self {
            Resolvable::Concrete(value) => Some(value),
            Resolvable::Deferred(_) => None,
        }
    }
}

/// Determine if a value must wait for props.
pub fn is_deferred(value: &Resolvable) -> bool {
    value.is_deferred()
}

/// Resolve a value against props, calling it if it is deferred.
pub fn resolve(value: &Resolvable, props: &Value) -> Value {
    value.resolve(props)
}

impl From<Resolver> for Resolvable {
    fn from(resolver: Resolver) -> Self {
        Resolvable::Deferred(resolver)
    }
}

macro_rules! concrete_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Resolvable {
                fn from(value: $ty) -> Self {
                    Resolvable::Concrete(value.into())
                }
            }
        )*
    };
}

concrete_from!(Value, bool, f64, i32, u32, &str, String, Vec<Value>, ObjectMap);
