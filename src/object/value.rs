//! The dynamic value stored in nested mappings.

use super::mapping::Object;

/// A dynamically typed value.
///
/// [`Value::Object`] and [`Value::Array`] are containers: traversal walks
/// into them, keying array elements by their decimal index. Every other
/// variant, including [`Value::Null`], is a leaf.
///
/// # Examples
///
/// ```rust
/// use objutils::object::Value;
///
/// assert!(Value::from("text").as_str().is_some());
/// assert_eq!(Value::from(2).as_f64(), Some(2.0));
/// assert!(Value::default().is_null());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The null value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Self>),
    /// A nested mapping.
    Object(Object<Self>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is an object.
    #[inline]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns `true` for the variants traversal walks into: objects and
    /// arrays.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_))
    }

    /// Returns the nested mapping, if this value is one.
    #[inline]
    pub const fn as_object(&self) -> Option<&Object<Self>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the nested mapping mutably, if this value is one.
    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Object<Self>> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the elements, if this value is an array.
    #[inline]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entry under `key`: an own property of an object, or the
    /// element of an array at the decimal index `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objutils::object::Value;
    ///
    /// let list = Value::from(vec![Value::from("first")]);
    /// assert_eq!(list.get_own("0"), Some(&Value::from("first")));
    /// assert_eq!(list.get_own("00"), None);
    /// ```
    pub fn get_own(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(object) => object.get_own(key),
            Self::Array(items) => array_index(key).and_then(|index| items.get(index)),
            _ => None,
        }
    }

    /// Returns the number, if this value is one.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string, if this value is one.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

impl Object<Value> {
    /// Follows `path` through nested objects and arrays, reading own
    /// properties only. Array steps are decimal indices.
    ///
    /// Returns `None` for an empty path or when a step is missing or is not
    /// a container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objutils::object;
    /// use objutils::object::Value;
    ///
    /// let tree = object! { "a" => object! { "b" => 1 } };
    /// assert_eq!(tree.get_path(&["a", "b"]), Some(&Value::from(1)));
    /// assert_eq!(tree.get_path(&["a", "b", "c"]), None);
    /// ```
    pub fn get_path<K: AsRef<str>>(&self, path: &[K]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.get_own(first.as_ref())?, |value, key| value.get_own(key.as_ref()))
    }
}

/// Parses `key` as an array index written in canonical decimal form.
pub(crate) fn array_index(key: &str) -> Option<usize> {
    let index: usize = key.parse().ok()?;
    (index.to_string() == key).then_some(index)
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(value)
    }
}

impl From<Object<Self>> for Value {
    fn from(value: Object<Self>) -> Self {
        Self::Object(value)
    }
}
