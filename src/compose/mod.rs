//! Receiver binding.
//!
//! Callbacks in this crate never see an implicit `this`. When a caller wants
//! a callback to share mutable state through a receiver rather than a
//! closure capture, the state is bound as an explicit leading argument.
//!
//! # Overview
//!
//! - [`bind`]: Fix the receiver of a function, producing a [`Bound`]
//! - [`bind!`]: Fix the receiver and spread up to six arguments
//!
//! # Examples
//!
//! ```
//! use objutils::compose::bind;
//!
//! let mut greeter = bind(|greeting: &mut String, name: &str| format!("{greeting}, {name}"), String::from("Hello"));
//! assert_eq!(greeter.call("world"), "Hello, world");
//! ```
//!
//! # Laws
//!
//! - **Receiver**: `bind(f, s).call(a) == f(&mut s, a)`
//! - **Transparency**: the result of `f` is returned unchanged

mod bound;
mod bind_macro;

pub use bound::{Bound, bind};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::bind;
