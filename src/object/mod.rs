//! The shared data model: string-keyed mappings and dynamic values.
//!
//! # Overview
//!
//! - [`Object`]: insertion-ordered mapping with own, hidden and inherited
//!   properties
//! - [`Value`]: dynamic value; [`Value::Object`] and [`Value::Array`] are
//!   the traversable variants
//! - [`object!`](crate::object!): literal syntax for `Object<Value>`
//! - [`RenameError`]: failure of [`Object::rename_key`]
//!
//! Every helper in this crate reads own enumerable properties only. Inherited
//! properties (reachable through [`Object::prototype`]) and hidden ones
//! (defined with [`Object::define_hidden`]) are skipped.
//!
//! # Examples
//!
//! ```rust
//! use objutils::object;
//! use objutils::object::Value;
//!
//! let mut config = object! { "retries" => 3, "mode" => "fast" };
//! config.define_hidden("internal", true);
//!
//! assert_eq!(config.len(), 2);
//! assert_eq!(config.get("internal"), Some(&Value::Bool(true)));
//! ```

mod error;
mod mapping;
mod object_macro;
#[cfg(feature = "serde")]
mod serialization;
mod value;

pub use error::RenameError;
pub use mapping::Object;
pub use value::Value;
pub(crate) use value::array_index;

