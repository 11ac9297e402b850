//! Side-effecting iteration: [`obj_for_each`] and [`obj_for_each_sorted`].

use std::cmp::Ordering;

use crate::compose::bind;
use crate::object::Object;

/// The key order used by [`obj_for_each_sorted`].
///
/// # Examples
///
/// ```rust
/// use objutils::iterate::KeyOrder;
///
/// let descending = |left: &str, right: &str| right.cmp(left);
/// let reversed = KeyOrder::By(&descending);
///
/// assert!(matches!(reversed, KeyOrder::By(_)));
/// assert!(matches!(KeyOrder::default(), KeyOrder::Natural));
/// ```
#[derive(Clone, Copy, Default)]
pub enum KeyOrder<'s> {
    /// Ascending lexicographic order of the keys.
    #[default]
    Natural,
    /// Order given by a comparator over two keys.
    By(&'s dyn Fn(&str, &str) -> Ordering),
}

impl std::fmt::Debug for KeyOrder<'_> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Natural => formatter.write_str("KeyOrder::Natural"),
            Self::By(_) => formatter.write_str("KeyOrder::By(<comparator>)"),
        }
    }
}

/// Calls `function(value, key, object)` once per own enumerable entry.
///
/// Does nothing for an absent object.
pub fn obj_for_each<'a, V, F>(object: impl Into<Option<&'a Object<V>>>, mut function: F)
where
    V: 'a,
    F: FnMut(&'a V, &'a str, &'a Object<V>),
{
    if let Some(object) = object.into() {
        for (key, value) in object.own_entries() {
            function(value, key, object);
        }
    }
}

/// [`obj_for_each`] with an explicit receiver passed to `function` as its
/// first argument.
pub fn obj_for_each_with<'a, V, C, F>(
    object: impl Into<Option<&'a Object<V>>>,
    mut function: F,
    context: &mut C,
) where
    V: 'a,
    F: FnMut(&mut C, &'a V, &'a str, &'a Object<V>),
{
    let mut bound = bind(
        |scope: &mut &mut C, (value, key, object): (&'a V, &'a str, &'a Object<V>)| {
            function(&mut **scope, value, key, object);
        },
        context,
    );
    obj_for_each(object, |value, key, object| bound.call((value, key, object)));
}

/// Calls `function(value, key, object)` once per own enumerable entry, with
/// the keys fully sorted by `order` first.
///
/// A [`KeyOrder::By`] comparator is used as given and need not be a total
/// order. Entries it ranks equal keep their iteration order, and an
/// inconsistent comparator still visits every entry exactly once.
///
/// # Examples
///
/// ```rust
/// use objutils::iterate::{KeyOrder, obj_for_each_sorted};
/// use objutils::object;
///
/// let input = object! { "c" => 3, "a" => 1, "b" => 2 };
///
/// let mut visited = Vec::new();
/// obj_for_each_sorted(&input, |_value, key, _object| visited.push(key), KeyOrder::Natural);
/// assert_eq!(visited, vec!["a", "b", "c"]);
///
/// let mut reversed = Vec::new();
/// obj_for_each_sorted(
///     &input,
///     |_value, key, _object| reversed.push(key),
///     KeyOrder::By(&|left: &str, right: &str| right.cmp(left)),
/// );
/// assert_eq!(reversed, vec!["c", "b", "a"]);
/// ```
pub fn obj_for_each_sorted<'a, V, F>(
    object: impl Into<Option<&'a Object<V>>>,
    mut function: F,
    order: KeyOrder<'_>,
) where
    V: 'a,
    F: FnMut(&'a V, &'a str, &'a Object<V>),
{
    let Some(object) = object.into() else {
        return;
    };
    let mut entries: Vec<(&'a str, &'a V)> = object.own_entries().collect();
    match order {
        KeyOrder::Natural => entries.sort_unstable_by(|(left, _), (right, _)| left.cmp(right)),
        KeyOrder::By(compare) => merge_sort_by(&mut entries, |(left, _), (right, _)| compare(*left, *right)),
    }
    for (key, value) in entries {
        function(value, key, object);
    }
}

/// Stable bottom-up merge sort that accepts any comparator.
///
/// Unlike `slice::sort_by`, an inconsistent comparator only yields some
/// permutation of `items`; it never panics.
///
/// # Complexity
///
/// O(n log n) comparisons, one buffer of `items.len()` elements.
fn merge_sort_by<T: Copy>(items: &mut Vec<T>, mut compare: impl FnMut(&T, &T) -> Ordering) {
    let length = items.len();
    let mut buffer = Vec::with_capacity(length);
    let mut width = 1;
    while width < length {
        buffer.clear();
        for start in (0..length).step_by(2 * width) {
            let middle = (start + width).min(length);
            let end = (start + 2 * width).min(length);
            let mut left_index = start;
            let mut right_index = middle;

            while left_index < middle && right_index < end {
                if compare(&items[left_index], &items[right_index]) == Ordering::Greater {
                    buffer.push(items[right_index]);
                    right_index += 1;
                } else {
                    buffer.push(items[left_index]);
                    left_index += 1;
                }
            }
            buffer.extend_from_slice(&items[left_index..middle]);
            buffer.extend_from_slice(&items[right_index..end]);
        }
        std::mem::swap(items, &mut buffer);
        width *= 2;
    }
}

/// [`obj_for_each_sorted`] with an explicit receiver passed to `function` as
/// its first argument.
pub fn obj_for_each_sorted_with<'a, V, C, F>(
    object: impl Into<Option<&'a Object<V>>>,
    mut function: F,
    order: KeyOrder<'_>,
    context: &mut C,
) where
    V: 'a,
    F: FnMut(&mut C, &'a V, &'a str, &'a Object<V>),
{
    let mut bound = bind(
        |scope: &mut &mut C, (value, key, object): (&'a V, &'a str, &'a Object<V>)| {
            function(&mut **scope, value, key, object);
        },
        context,
    );
    obj_for_each_sorted(
        object,
        |value, key, object| bound.call((value, key, object)),
        order,
    );
}
