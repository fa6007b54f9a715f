//! Value resolvers
//!
//! Each resolver combines its operands immediately when it can, and otherwise
//! returns a `Resolver` that repeats the same logic once props are supplied.
//! Concrete operands are captured as-is; deferred operands are resolved
//! against whatever props the returned resolver is eventually called with.

mod collection;
mod declaration;
mod logic;
mod prop;


pub use collection::{includes, join, map, Mapping};
pub use declaration::{declare, tern};
pub use logic::{and, is, not, or};
pub use prop::prop;
