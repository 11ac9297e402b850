//! Error types for mapping edits.

/// Represents an error when a key of an [`Object`](super::Object) cannot be
/// renamed.
///
/// # Examples
///
/// ```rust
/// use objutils::object::{Object, RenameError, Value};
///
/// let mut object: Object<Value> = Object::new();
/// let error = object.rename_key("missing", "other").unwrap_err();
/// assert_eq!(error, RenameError::MissingKey("missing".to_owned()));
/// assert_eq!(format!("{error}"), "cannot rename `missing`: no such own property");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameError {
    /// The source key is not an own property.
    MissingKey(String),
    /// The target key is already an own property.
    KeyExists(String),
}

impl std::fmt::Display for RenameError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey(key) => {
                write!(formatter, "cannot rename `{key}`: no such own property")
            }
            Self::KeyExists(key) => {
                write!(formatter, "cannot rename to `{key}`: property already exists")
            }
        }
    }
}

impl std::error::Error for RenameError {}
