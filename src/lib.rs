//! # objutils
//!
//! Generic object-traversal utilities over string-keyed mappings.
//!
//! ## Overview
//!
//! This library works on a single data shape: an insertion-ordered mapping
//! from string keys to values, possibly nested. It includes:
//!
//! - **Binding**: fix the receiver of a callback with `bind` / `bind!`
//! - **Flat helpers**: map, reduce, forEach, sorted forEach, filter, length
//!   and values over the own enumerable entries of a mapping
//! - **Traversal**: read-only and mutating depth-first walks of nested
//!   objects and arrays with path tracking
//!
//! ## Feature Flags
//!
//! - `compose`: Receiver binding (`bind`, `bind!`)
//! - `object`: The data model (`Object`, `Value`, `object!`)
//! - `iterate`: Flat iteration helpers
//! - `traversal`: Depth-first traversal engines
//! - `serde`: `Serialize` / `Deserialize` for `Object` and `Value`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use objutils::prelude::*;
//!
//! let mut tree = object! {
//!     "a" => object! { "value" => 1 },
//!     "b" => object! { "value" => 2 },
//! };
//!
//! dfs_mod(&mut tree, |key, parent, _path, _is_leaf| {
//!     if key == "value" {
//!         if let Some(Value::Number(number)) = parent.get_own_mut(key) {
//!             *number *= 2.0;
//!         }
//!     }
//! });
//!
//! let total = obj_reduce(&tree, |sum, child, _key, _object| {
//!     sum + child.as_object().and_then(|inner| inner.get_own("value")).and_then(Value::as_f64).unwrap_or(0.0)
//! }, 0.0);
//! assert_eq!(total, 6.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use objutils::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "object")]
    pub use crate::object::{Object, RenameError, Value};

    #[cfg(feature = "object")]
    pub use crate::object;

    #[cfg(feature = "iterate")]
    pub use crate::iterate::*;

    #[cfg(feature = "traversal")]
    pub use crate::traversal::*;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "iterate")]
pub mod iterate;

#[cfg(feature = "traversal")]
pub mod traversal;
