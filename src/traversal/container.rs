//! Container views handed out by the traversal engines.
//!
//! Objects and arrays are both containers. The entries of an object are its
//! own enumerable properties; the entries of an array are its elements, keyed
//! by their decimal index (`"0"`, `"1"`, ...).

use crate::object::{Object, Value, array_index};

/// A shared view of an object or an array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Container<'a> {
    /// An object; its own enumerable properties are the entries.
    Object(&'a Object<Value>),
    /// An array; its elements are the entries.
    Array(&'a [Value]),
}

impl<'a> Container<'a> {
    /// Views `value` as a container, if it is an object or an array.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(Self::Object(object)),
            Value::Array(items) => Some(Self::Array(items.as_slice())),
            _ => None,
        }
    }

    /// Returns the entry under `key`.
    pub fn get_own(self, key: &str) -> Option<&'a Value> {
        match self {
            Self::Object(object) => object.get_own(key),
            Self::Array(items) => array_index(key).and_then(|index| items.get(index)),
        }
    }

    /// Returns the number of entries.
    pub fn len(self) -> usize {
        match self {
            Self::Object(object) => object.len(),
            Self::Array(items) => items.len(),
        }
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// A mutable view of the object or array holding the entry being visited.
///
/// [`dfs_mod`](super::dfs_mod) passes this to its callback. Values can be
/// read and replaced through [`get_own_mut`](Self::get_own_mut) whatever the
/// container kind; structural edits such as renaming keys go through
/// [`as_object_mut`](Self::as_object_mut) or
/// [`as_array_mut`](Self::as_array_mut).
///
/// # Examples
///
/// ```rust
/// use objutils::object;
/// use objutils::object::Value;
/// use objutils::traversal::ContainerMut;
///
/// let mut items = vec![Value::from(1), Value::from(2)];
/// let mut view = ContainerMut::Array(&mut items);
/// if let Some(slot) = view.get_own_mut("1") {
///     *slot = Value::from("two");
/// }
/// assert_eq!(items[1], Value::from("two"));
///
/// let mut record = object! { "a" => 1 };
/// let view = ContainerMut::Object(&mut record);
/// assert!(view.contains_key("a"));
/// assert!(!view.contains_key("0"));
/// ```
#[derive(Debug, PartialEq)]
pub enum ContainerMut<'a> {
    /// An object; its own enumerable properties are the entries.
    Object(&'a mut Object<Value>),
    /// An array; its elements are the entries.
    Array(&'a mut Vec<Value>),
}

impl<'a> ContainerMut<'a> {
    /// Views `value` mutably as a container, if it is an object or an array.
    pub fn from_value(value: &'a mut Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(Self::Object(object)),
            Value::Array(items) => Some(Self::Array(items)),
            _ => None,
        }
    }

    /// Returns the entry under `key`. For objects this includes hidden own
    /// properties.
    pub fn get_own(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(object) => object.get_own(key),
            Self::Array(items) => array_index(key).and_then(|index| items.get(index)),
        }
    }

    /// Returns the entry under `key` mutably.
    pub fn get_own_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Self::Object(object) => object.get_own_mut(key),
            Self::Array(items) => array_index(key).and_then(|index| items.get_mut(index)),
        }
    }

    /// Returns `true` if `key` names an entry: an own enumerable property of
    /// an object, or an in-range index of an array.
    pub fn contains_key(&self, key: &str) -> bool {
        match self {
            Self::Object(object) => object.is_enumerable(key),
            Self::Array(items) => array_index(key).is_some_and(|index| index < items.len()),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Object(object) => object.len(),
            Self::Array(items) => items.len(),
        }
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the object, if this container is one.
    pub fn as_object_mut(&mut self) -> Option<&mut Object<Value>> {
        match self {
            Self::Object(object) => Some(&mut **object),
            Self::Array(_) => None,
        }
    }

    /// Returns the array, if this container is one.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Array(items) => Some(&mut **items),
            Self::Object(_) => None,
        }
    }

    pub(crate) fn snapshot_keys(&self) -> Vec<String> {
        match self {
            Self::Object(object) => object.keys().map(str::to_owned).collect(),
            Self::Array(items) => (0..items.len()).map(|index| index.to_string()).collect(),
        }
    }
}

/// A root the traversal engines accept.
///
/// Traversal starts only when the root is an object or an array; any other
/// root yields no visits.
pub trait Traversable {
    /// Returns the root as a container, if it is one.
    fn as_container(&self) -> Option<Container<'_>>;

    /// Returns the root as a mutable container, if it is one.
    fn as_container_mut(&mut self) -> Option<ContainerMut<'_>>;
}

impl Traversable for Object<Value> {
    #[inline]
    fn as_container(&self) -> Option<Container<'_>> {
        Some(Container::Object(self))
    }

    #[inline]
    fn as_container_mut(&mut self) -> Option<ContainerMut<'_>> {
        Some(ContainerMut::Object(self))
    }
}

impl Traversable for Vec<Value> {
    #[inline]
    fn as_container(&self) -> Option<Container<'_>> {
        Some(Container::Array(self))
    }

    #[inline]
    fn as_container_mut(&mut self) -> Option<ContainerMut<'_>> {
        Some(ContainerMut::Array(self))
    }
}

impl Traversable for Value {
    #[inline]
    fn as_container(&self) -> Option<Container<'_>> {
        Container::from_value(self)
    }

    #[inline]
    fn as_container_mut(&mut self) -> Option<ContainerMut<'_>> {
        ContainerMut::from_value(self)
    }
}

pub(crate) const fn is_leaf(value: &Value) -> bool {
    !value.is_container()
}
