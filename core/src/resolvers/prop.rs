//! Props lookup

use crate::path::navigate;
use crate::resolver::Resolver;

/// Build a resolver that looks up `path` in its props.
///
/// See `navigate` for the path syntax.
pub fn prop(path: impl Into<String>) -> Resolver {
    let path = path.into();

    Resolver::new(move |props| navigate(props, &path))
}
