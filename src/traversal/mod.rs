//! Depth-first traversal of nested objects and arrays.
//!
//! Two engines walk a tree of objects and arrays, recursing into every value
//! that is itself an object or an array. Array elements are keyed by their
//! decimal index:
//!
//! - [`dfs`]: read-only; each entry is reported after everything inside it
//! - [`dfs_mod`]: mutating; each level is handed to the callback entry by
//!   entry, then its children are walked
//!
//! [`try_dfs`] and [`try_dfs_mod`] accept fallible callbacks and stop at the
//! first error.
//!
//! Both engines keep a single [`Path`] for the whole traversal and lend it to
//! each callback. Only own enumerable properties of objects are visited. The
//! root itself is never reported, and a root that is neither an object nor an
//! array yields no calls.
//!
//! # Examples
//!
//! ```rust
//! use objutils::object;
//! use objutils::traversal::dfs;
//!
//! let tree = object! {
//!     "a" => object! { "1" => object! { "A" => "I" }, "2" => object! { "B" => "II" } },
//!     "b" => object! { "4" => object! { "C" => "III" }, "3" => object! { "D" => "IV" } },
//! };
//!
//! let mut leaves = Vec::new();
//! dfs(&tree, |_value, _key, path, is_leaf| {
//!     if is_leaf {
//!         leaves.push(path.to_string());
//!     }
//! });
//!
//! assert_eq!(leaves, vec!["a.1.A", "a.2.B", "b.4.C", "b.3.D"]);
//! ```

mod container;
mod dfs;
mod dfs_mod;
mod path;

pub use dfs::{dfs, try_dfs};
pub use dfs_mod::{dfs_mod, try_dfs_mod};
pub use container::{Container, ContainerMut, Traversable};
pub use path::Path;
