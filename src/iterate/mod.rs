//! One-pass helpers over the own enumerable entries of a mapping.
//!
//! # Overview
//!
//! | Helper | Result |
//! |---|---|
//! | [`obj_map`] | new mapping, same keys, mapped values |
//! | [`obj_reduce`] | left fold in iteration order |
//! | [`obj_for_each`] | side effects only |
//! | [`obj_for_each_sorted`] | side effects, keys sorted by [`KeyOrder`] |
//! | [`obj_filter`] | new mapping with the entries the predicate accepts |
//! | [`obj_length`] | number of own enumerable entries |
//! | [`obj_values`] | own values in iteration order |
//!
//! Every helper takes its subject as `impl Into<Option<&Object<V>>>`. An
//! absent subject is not an error: the helper returns an empty mapping, the
//! initial accumulator, zero, or does nothing.
//!
//! Callbacks receive `(value, key, object)`. The `_with` variants take a
//! receiver `&mut C` and pass it to the callback as a leading argument,
//! through [`bind`](crate::compose::bind).
//!
//! # Laws
//!
//! - `obj_length(&obj_filter(m, f)) <= obj_length(m)`
//! - `obj_map(m, f)` has exactly the keys of `m`
//! - `obj_reduce(&Object::new(), f, z) == z`
//!
//! # Examples
//!
//! ```rust
//! use objutils::iterate::{obj_filter, obj_length, obj_map};
//! use objutils::object::Object;
//!
//! let stock: Object<u32> = [("apples", 0), ("pears", 4)].into_iter().collect();
//! let available = obj_filter(&stock, |count, _key, _object| *count > 0);
//! let labels = obj_map(&available, |count, key, _object| format!("{count} {key}"));
//!
//! assert_eq!(obj_length(&labels), 1);
//! assert_eq!(labels.get_own("pears").map(String::as_str), Some("4 pears"));
//! ```

mod fold;
mod transform;
mod visit;

pub use fold::{obj_length, obj_reduce, obj_reduce_with, obj_values};
pub use transform::{obj_filter, obj_filter_with, obj_map, obj_map_with};
pub use visit::{KeyOrder, obj_for_each, obj_for_each_sorted, obj_for_each_sorted_with, obj_for_each_with};
