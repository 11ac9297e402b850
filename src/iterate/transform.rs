//! Helpers that build a new mapping: [`obj_map`] and [`obj_filter`].

use crate::compose::bind;
use crate::object::Object;

/// Maps every own enumerable value of `object`, keeping its key.
///
/// The result has exactly the keys of `object`, in the same order, and no
/// prototype. `object` is never modified. An absent object yields an empty
/// mapping.
///
/// # Arguments
///
/// * `object` - The mapping to read, or `None`
/// * `function` - Called as `function(value, key, object)` once per entry
///
/// # Examples
///
/// ```rust
/// use objutils::iterate::obj_map;
/// use objutils::object::Object;
///
/// let prices: Object<u32> = [("tea", 3), ("cake", 5)].into_iter().collect();
/// let doubled = obj_map(&prices, |price, _key, _object| price * 2);
///
/// assert_eq!(doubled.get_own("cake"), Some(&10));
/// assert_eq!(prices.get_own("cake"), Some(&5));
/// ```
pub fn obj_map<'a, V, U, F>(object: impl Into<Option<&'a Object<V>>>, mut function: F) -> Object<U>
where
    V: 'a,
    F: FnMut(&'a V, &'a str, &'a Object<V>) -> U,
{
    let mut mapped = Object::new();
    if let Some(object) = object.into() {
        for (key, value) in object.own_entries() {
            mapped.insert(key, function(value, key, object));
        }
    }
    mapped
}

/// [`obj_map`] with an explicit receiver passed to `function` as its first
/// argument.
///
/// # Examples
///
/// ```rust
/// use objutils::iterate::obj_map_with;
/// use objutils::object::Object;
///
/// let scores: Object<u32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let mut calls = 0;
/// let bumped = obj_map_with(&scores, |calls: &mut usize, score, _key, _object| {
///     *calls += 1;
///     score + 100
/// }, &mut calls);
///
/// assert_eq!(calls, 2);
/// assert_eq!(bumped.get_own("b"), Some(&102));
/// ```
pub fn obj_map_with<'a, V, U, C, F>(
    object: impl Into<Option<&'a Object<V>>>,
    mut function: F,
    context: &mut C,
) -> Object<U>
where
    V: 'a,
    F: FnMut(&mut C, &'a V, &'a str, &'a Object<V>) -> U,
{
    let mut bound = bind(
        |scope: &mut &mut C, (value, key, object): (&'a V, &'a str, &'a Object<V>)| {
            function(&mut **scope, value, key, object)
        },
        context,
    );
    obj_map(object, |value, key, object| bound.call((value, key, object)))
}

/// Keeps the own enumerable entries for which `function` returns `true`.
///
/// Kept values are cloned unchanged; the result has no prototype. An absent
/// object yields an empty mapping.
///
/// # Examples
///
/// ```rust
/// use objutils::iterate::obj_filter;
/// use objutils::object::Object;
///
/// let numbers: Object<i32> = [("a", 1), ("b", 2), ("c", 3), ("d", 4)].into_iter().collect();
/// let even = obj_filter(&numbers, |value, _key, _object| value % 2 == 0);
///
/// assert_eq!(even.keys().collect::<Vec<_>>(), vec!["b", "d"]);
/// ```
pub fn obj_filter<'a, V, F>(object: impl Into<Option<&'a Object<V>>>, mut function: F) -> Object<V>
where
    V: Clone + 'a,
    F: FnMut(&'a V, &'a str, &'a Object<V>) -> bool,
{
    let mut filtered = Object::new();
    if let Some(object) = object.into() {
        for (key, value) in object.own_entries() {
            if function(value, key, object) {
                filtered.insert(key, value.clone());
            }
        }
    }
    filtered
}

/// [`obj_filter`] with an explicit receiver passed to `function` as its
/// first argument.
pub fn obj_filter_with<'a, V, C, F>(
    object: impl Into<Option<&'a Object<V>>>,
    mut function: F,
    context: &mut C,
) -> Object<V>
where
    V: Clone + 'a,
    F: FnMut(&mut C, &'a V, &'a str, &'a Object<V>) -> bool,
{
    let mut bound = bind(
        |scope: &mut &mut C, (value, key, object): (&'a V, &'a str, &'a Object<V>)| {
            function(&mut **scope, value, key, object)
        },
        context,
    );
    obj_filter(object, |value, key, object| bound.call((value, key, object)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object;
    use crate::object::Value;
    use std::rc::Rc;
    use rstest::rstest;

    #[rstest]
    fn test_obj_map_doubles_without_touching_input() {
        let input: Object<i32> = [("a", 1), ("b", 2)].into_iter().collect();
        let result = obj_map(&input, |item, _key, _object| item * 2);

        assert_eq!(input.get_own("a"), Some(&1));
        assert_eq!(input.get_own("b"), Some(&2));
        assert_eq!(result.get_own("a"), Some(&2));
        assert_eq!(result.get_own("b"), Some(&4));
    }

    #[rstest]
    fn test_obj_map_absent_object_is_empty() {
        let result = obj_map(None::<&Object<i32>>, |item, _key, _object| *item);
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_obj_map_passes_key_and_whole_object() {
        let input: Object<i32> = [("x", 1), ("y", 2)].into_iter().collect();
        let result = obj_map(&input, |_item, key, object| format!("{key}/{}", object.len()));
        assert_eq!(result.get_own("y"), Some(&"y/2".to_owned()));
    }

    #[rstest]
    fn test_obj_map_skips_inherited_and_hidden_entries() {
        let mut parent: Object<i32> = Object::new();
        parent.insert("inherited", 1);
        let mut child = Object::with_prototype(Rc::new(parent));
        child.insert("own", 2);
        child.define_hidden("hidden", 3);

        let result = obj_map(&child, |item, _key, _object| *item);
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["own"]);
    }

    #[rstest]
    fn test_obj_map_with_receives_context() {
        let input = object! { "a" => 1, "b" => 2 };
        let mut seen: Vec<String> = Vec::new();
        let result = obj_map_with(
            &input,
            |seen: &mut Vec<String>, item, key, _object| {
                seen.push(key.to_owned());
                item.as_f64().unwrap_or_default()
            },
            &mut seen,
        );
        assert_eq!(seen, vec!["a", "b"]);
        assert_eq!(result.get_own("b"), Some(&2.0));
    }

    #[rstest]
    fn test_obj_filter_keeps_even_values() {
        let input: Object<i32> = [("a", 1), ("b", 2), ("c", 3), ("d", 4)].into_iter().collect();
        let result = obj_filter(&input, |value, _key, _object| value % 2 == 0);

        assert_eq!(result.get_own("a"), None);
        assert_eq!(result.get_own("b"), Some(&2));
        assert_eq!(result.get_own("c"), None);
        assert_eq!(result.get_own("d"), Some(&4));
        assert_eq!(result.len(), 2);
    }

    #[rstest]
    fn test_obj_filter_keeps_nested_values_unmodified() {
        let input = object! { "keep" => object! { "inner" => 1 }, "drop" => Value::Null };
        let result = obj_filter(&input, |value, _key, _object| value.is_mapping());
        assert_eq!(result.get_own("keep"), input.get_own("keep"));
    }

    #[rstest]
    fn test_obj_filter_with_threshold_from_context() {
        let input: Object<i32> = [("a", 5), ("b", 15), ("c", 25)].into_iter().collect();
        let mut threshold = 10;
        let result = obj_filter_with(
            &input,
            |threshold: &mut i32, value, _key, _object| *value > *threshold,
            &mut threshold,
        );
        assert_eq!(result.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }
}
