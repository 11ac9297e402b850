//! Helpers that summarise a mapping: [`obj_reduce`], [`obj_length`] and
//! [`obj_values`].

use crate::compose::bind;
use crate::object::Object;

/// Folds the own enumerable entries of `object` from left to right.
///
/// Each step computes `accumulator = function(accumulator, value, key,
/// object)`, starting from `initial`. An absent or empty object returns
/// `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use objutils::iterate::obj_reduce;
/// use objutils::object::Object;
///
/// let input: Object<i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// let total = obj_reduce(&input, |buffer, item, _key, _object| buffer + item, 1);
/// assert_eq!(total, 4);
/// ```
pub fn obj_reduce<'a, V, A, F>(
    object: impl Into<Option<&'a Object<V>>>,
    mut function: F,
    initial: A,
) -> A
where
    V: 'a,
    F: FnMut(A, &'a V, &'a str, &'a Object<V>) -> A,
{
    let Some(object) = object.into() else {
        return initial;
    };
    object
        .own_entries()
        .fold(initial, |accumulator, (key, value)| {
            function(accumulator, value, key, object)
        })
}

/// [`obj_reduce`] with an explicit receiver passed to `function` as its
/// first argument.
pub fn obj_reduce_with<'a, V, A, C, F>(
    object: impl Into<Option<&'a Object<V>>>,
    mut function: F,
    initial: A,
    context: &mut C,
) -> A
where
    V: 'a,
    F: FnMut(&mut C, A, &'a V, &'a str, &'a Object<V>) -> A,
{
    let mut bound = bind(
        |scope: &mut &mut C, (accumulator, value, key, object): (A, &'a V, &'a str, &'a Object<V>)| {
            function(&mut **scope, accumulator, value, key, object)
        },
        context,
    );
    obj_reduce(
        object,
        |accumulator, value, key, object| bound.call((accumulator, value, key, object)),
        initial,
    )
}

/// Counts the own enumerable entries of `object`; 0 when absent.
///
/// # Examples
///
/// ```rust
/// use objutils::iterate::obj_length;
/// use objutils::object::Object;
///
/// let input: Object<i32> = [("a", 1), ("b", 2)].into_iter().collect();
/// assert_eq!(obj_length(&input), 2);
/// assert_eq!(obj_length(None::<&Object<i32>>), 0);
/// ```
pub fn obj_length<'a, V: 'a>(object: impl Into<Option<&'a Object<V>>>) -> usize {
    object.into().map_or(0, Object::len)
}

/// Collects the own enumerable values of `object` in iteration order.
pub fn obj_values<'a, V: 'a>(object: impl Into<Option<&'a Object<V>>>) -> Vec<&'a V> {
    object
        .into()
        .map_or_else(Vec::new, |object| object.values().collect())
}
