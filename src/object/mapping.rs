//! The string-keyed mapping shared by every helper in this crate.
//!
//! An [`Object`] keeps its own properties in insertion order and may delegate
//! lookups to a shared prototype. Each property carries an `enumerable` flag;
//! hidden properties are still own properties, but iteration skips them.
//!
//! # Own vs. inherited
//!
//! ```rust
//! use std::rc::Rc;
//! use objutils::object::{Object, Value};
//!
//! let mut base: Object<Value> = Object::new();
//! base.insert("inherited", 1);
//!
//! let mut child = Object::with_prototype(Rc::new(base));
//! child.insert("own", 2);
//!
//! assert_eq!(child.get("inherited"), Some(&Value::from(1)));
//! assert!(!child.has_own("inherited"));
//! assert_eq!(child.len(), 1);
//! assert_eq!(child.for_in_keys(), vec!["own", "inherited"]);
//! ```

use std::rc::Rc;

use super::error::RenameError;

#[derive(Clone, Debug, PartialEq)]
struct Property<V> {
    key: String,
    value: V,
    enumerable: bool,
}

/// An insertion-ordered mapping from string keys to values, with an optional
/// prototype.
///
/// Equality compares own properties (including order and enumerability) and
/// the prototype chain.
///
/// # Complexity
///
/// Properties live in a single vector. Lookups by key (`get_own`, `insert`,
/// `remove`, `rename_key`) scan it, so they are O(n) and building an object
/// of n keys one by one is O(n²). Iteration is O(n) and allocation free.
///
/// # Type Parameters
///
/// * `V` - The value type
#[derive(Clone, Debug, PartialEq)]
pub struct Object<V> {
    properties: Vec<Property<V>>,
    prototype: Option<Rc<Self>>,
}

impl<V> Default for Object<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Object<V> {
    /// Creates an empty object without a prototype.
    #[inline]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
            prototype: None,
        }
    }

    /// Creates an empty object that delegates lookups to `prototype`.
    #[inline]
    pub fn with_prototype(prototype: Rc<Self>) -> Self {
        Self {
            properties: Vec::new(),
            prototype: Some(prototype),
        }
    }

    /// Returns the prototype, if any.
    #[inline]
    pub const fn prototype(&self) -> Option<&Rc<Self>> {
        self.prototype.as_ref()
    }

    /// Replaces the prototype.
    #[inline]
    pub fn set_prototype(&mut self, prototype: Option<Rc<Self>>) {
        self.prototype = prototype;
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.properties
            .iter()
            .position(|property| property.key == key)
    }

    /// Sets an own property and returns the previous own value.
    ///
    /// An existing key keeps its position and enumerability. A new key is
    /// appended as an enumerable property.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objutils::object::{Object, Value};
    ///
    /// let mut object: Object<Value> = Object::new();
    /// assert_eq!(object.insert("a", 1), None);
    /// assert_eq!(object.insert("a", 2), Some(Value::from(1)));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) -> Option<V> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => Some(std::mem::replace(&mut self.properties[index].value, value)),
            None => {
                self.properties.push(Property {
                    key,
                    value,
                    enumerable: true,
                });
                None
            }
        }
    }

    /// Sets an own, non-enumerable property and returns the previous own
    /// value.
    ///
    /// Hidden properties answer to [`get`](Self::get) and
    /// [`has_own`](Self::has_own) but never appear in iteration.
    pub fn define_hidden(&mut self, key: impl Into<String>, value: impl Into<V>) -> Option<V> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => {
                let property = &mut self.properties[index];
                property.enumerable = false;
                Some(std::mem::replace(&mut property.value, value))
            }
            None => {
                self.properties.push(Property {
                    key,
                    value,
                    enumerable: false,
                });
                None
            }
        }
    }

    /// Looks `key` up on the object, then along its prototype chain.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut current = self;
        loop {
            if let Some(value) = current.get_own(key) {
                return Some(value);
            }
            current = current.prototype.as_deref()?;
        }
    }

    /// Returns an own property, enumerable or not.
    pub fn get_own(&self, key: &str) -> Option<&V> {
        self.position(key).map(|index| &self.properties[index].value)
    }

    /// Returns a mutable reference to an own property.
    pub fn get_own_mut(&mut self, key: &str) -> Option<&mut V> {
        self.position(key)
            .map(|index| &mut self.properties[index].value)
    }

    /// Returns `true` if `key` is an own property, enumerable or not.
    #[inline]
    pub fn has_own(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns `true` if `key` is an own enumerable property.
    pub fn is_enumerable(&self, key: &str) -> bool {
        self.position(key)
            .is_some_and(|index| self.properties[index].enumerable)
    }

    /// Removes an own property, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.position(key)
            .map(|index| self.properties.remove(index).value)
    }

    /// Renames an own property.
    ///
    /// The property moves to the end of the iteration order and keeps its
    /// value and enumerability. Renaming a key to itself does nothing.
    ///
    /// # Errors
    ///
    /// - [`RenameError::MissingKey`] if `from` is not an own property
    /// - [`RenameError::KeyExists`] if `to` is already an own property
    ///
    /// # Examples
    ///
    /// ```rust
    /// use objutils::object;
    ///
    /// let mut record = object! { "a" => 1, "b" => 2 };
    /// record.rename_key("a", "c").unwrap();
    /// assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    /// ```
    pub fn rename_key(&mut self, from: &str, to: impl Into<String>) -> Result<(), RenameError> {
        let to = to.into();
        let index = self
            .position(from)
            .ok_or_else(|| RenameError::MissingKey(from.to_owned()))?;
        if from == to {
            return Ok(());
        }
        if self.has_own(&to) {
            return Err(RenameError::KeyExists(to));
        }
        let mut property = self.properties.remove(index);
        property.key = to;
        self.properties.push(property);
        Ok(())
    }

    /// Returns the number of own enumerable properties.
    pub fn len(&self) -> usize {
        self.properties
            .iter()
            .filter(|property| property.enumerable)
            .count()
    }

    /// Returns `true` if there are no own enumerable properties.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lists every enumerable key reachable from this object, own keys first,
    /// then each prototype in turn.
    ///
    /// A key is reported once, at the nearest object defining it. A hidden
    /// own property shadows an enumerable inherited one.
    pub fn for_in_keys(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut keys = Vec::new();
        let mut current = Some(self);
        while let Some(object) = current {
            for property in &object.properties {
                if seen.contains(&property.key.as_str()) {
                    continue;
                }
                seen.push(&property.key);
                if property.enumerable {
                    keys.push(property.key.as_str());
                }
            }
            current = object.prototype.as_deref();
        }
        keys
    }

    /// Iterates over own enumerable `(key, value)` pairs in insertion order.
    pub fn own_entries(&self) -> impl Iterator<Item = (&str, &V)> {
        self.properties
            .iter()
            .filter(|property| property.enumerable)
            .map(|property| (property.key.as_str(), &property.value))
    }

    /// Iterates mutably over own enumerable `(key, value)` pairs.
    pub fn own_entries_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> {
        self.properties
            .iter_mut()
            .filter(|property| property.enumerable)
            .map(|property| (property.key.as_str(), &mut property.value))
    }

    /// Alias of [`own_entries`](Self::own_entries).
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.own_entries()
    }

    /// Iterates over own enumerable keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.own_entries().map(|(key, _)| key)
    }

    /// Iterates over own enumerable values.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.own_entries().map(|(_, value)| value)
    }
}

impl<'a, V> IntoIterator for &'a Object<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.own_entries())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Object<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Self::new();
        object.extend(iter);
        object
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Object<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Object<i32> {
        [("a", 1), ("b", 2), ("c", 3)].into_iter().collect()
    }

    #[rstest]
    fn test_insert_keeps_position_of_existing_key() {
        let mut object = sample();
        assert_eq!(object.insert("a", 10), Some(1));
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(object.get_own("a"), Some(&10));
    }

    #[rstest]
    fn test_hidden_property_is_own_but_not_counted() {
        let mut object = sample();
        object.define_hidden("secret", 99);
        assert!(object.has_own("secret"));
        assert!(!object.is_enumerable("secret"));
        assert_eq!(object.get("secret"), Some(&99));
        assert_eq!(object.len(), 3);
        assert!(object.keys().all(|key| key != "secret"));
    }

    #[rstest]
    fn test_define_hidden_over_enumerable_hides_it() {
        let mut object = sample();
        assert_eq!(object.define_hidden("b", 20), Some(2));
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[rstest]
    fn test_get_walks_prototype_chain() {
        let mut grandparent: Object<i32> = Object::new();
        grandparent.insert("deep", 1);
        let mut parent = Object::with_prototype(Rc::new(grandparent));
        parent.insert("middle", 2);
        let child: Object<i32> = Object::with_prototype(Rc::new(parent));

        assert_eq!(child.get("deep"), Some(&1));
        assert_eq!(child.get("middle"), Some(&2));
        assert_eq!(child.get("absent"), None);
        assert_eq!(child.get_own("deep"), None);
        assert!(child.is_empty());
    }

    #[rstest]
    fn test_for_in_keys_reports_shadowed_key_once() {
        let mut parent: Object<i32> = Object::new();
        parent.insert("shared", 1);
        parent.insert("inherited", 2);
        let mut child = Object::with_prototype(Rc::new(parent));
        child.insert("shared", 3);
        child.insert("own", 4);

        assert_eq!(child.for_in_keys(), vec!["shared", "own", "inherited"]);
    }

    #[rstest]
    fn test_hidden_own_property_shadows_inherited_key() {
        let mut parent: Object<i32> = Object::new();
        parent.insert("masked", 1);
        let mut child = Object::with_prototype(Rc::new(parent));
        child.define_hidden("masked", 2);

        assert!(child.for_in_keys().is_empty());
        assert_eq!(child.get("masked"), Some(&2));
    }

    #[rstest]
    fn test_remove_preserves_order() {
        let mut object = sample();
        assert_eq!(object.remove("b"), Some(2));
        assert_eq!(object.remove("b"), None);
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[rstest]
    fn test_rename_key_moves_property_to_end() {
        let mut object = sample();
        object.rename_key("a", "z").unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["b", "c", "z"]);
        assert_eq!(object.get_own("z"), Some(&1));
    }

    #[rstest]
    fn test_rename_key_to_itself_is_noop() {
        let mut object = sample();
        object.rename_key("b", "b").unwrap();
        assert_eq!(object, sample());
    }

    #[rstest]
    #[case("missing", "x", RenameError::MissingKey("missing".to_owned()))]
    #[case("a", "b", RenameError::KeyExists("b".to_owned()))]
    fn test_rename_key_errors(#[case] from: &str, #[case] to: &str, #[case] expected: RenameError) {
        let mut object = sample();
        assert_eq!(object.rename_key(from, to), Err(expected));
        assert_eq!(object, sample());
    }

    #[rstest]
    fn test_own_entries_mut_updates_values() {
        let mut object = sample();
        for (_, value) in object.own_entries_mut() {
            *value *= 10;
        }
        assert_eq!(object.values().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[rstest]
    fn test_borrowed_into_iterator_matches_own_entries() {
        let object = sample();
        let collected: Vec<(&str, &i32)> = (&object).into_iter().collect();
        assert_eq!(collected, object.own_entries().collect::<Vec<_>>());
    }
}
