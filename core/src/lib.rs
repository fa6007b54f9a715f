//! Resolvers for conditionally assembling CSS declarations.
//!
//! Values handled here are either known up front or deferred until a set of
//! props is available. Every resolver returns a plain value when its operands
//! allow it, and a `Resolver` to be called with props otherwise:
//!
//! ```
//! use css_resolvers::{declare, prop, Value};
//!
//! let color = declare("color", prop("theme.color"), None);
//! let props = Value::from_json(r#"{"theme": {"color": "white"}}"#).unwrap();
//!
//! assert_eq!(color.resolve(&props), Value::from("color: white;"));
//! ```

pub mod error;
mod path;
mod resolver;
mod resolvers;
mod value;

pub use crate::error::Error;
pub use crate::path::navigate;
pub use crate::resolver::{is_deferred, resolve, Resolvable, Resolver};
pub use crate::resolvers::{
    and, declare, includes, is, join, map, not, or, prop, tern, Mapping,
};
pub use crate::value::{ObjectMap, Value};
