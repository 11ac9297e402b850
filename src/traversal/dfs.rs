//! Read-only depth-first traversal.

use std::convert::Infallible;

use super::container::{Container, Traversable, is_leaf};
use super::path::Path;
use crate::object::Value;

/// Walks every entry below `root`, children before their parent entry.
///
/// For each entry `(key, value)` of a container, in order: the key is pushed
/// onto the path, every entry inside `value` is visited, then
/// `functor(value, key, path, is_leaf)` fires and the key is popped. The
/// entries of an object are its own enumerable properties; the entries of an
/// array are its elements under their decimal index. The root itself is never
/// reported. A root that is neither an object nor an array produces no calls.
///
/// `is_leaf` is `false` for objects and arrays and `true` otherwise; `Null`
/// is a leaf.
///
/// # Examples
///
/// ```rust
/// use objutils::object;
/// use objutils::object::Value;
/// use objutils::traversal::dfs;
///
/// let tree = object! {
///     "a" => object! { "1" => object! { "A" => "I" } },
///     "b" => vec![Value::from(2)],
/// };
///
/// let mut visits = Vec::new();
/// dfs(&tree, |_value, _key, path, is_leaf| visits.push((path.to_string(), is_leaf)));
///
/// assert_eq!(visits, vec![
///     ("a.1.A".to_owned(), true),
///     ("a.1".to_owned(), false),
///     ("a".to_owned(), false),
///     ("b.0".to_owned(), true),
///     ("b".to_owned(), false),
/// ]);
/// ```
pub fn dfs<T, F>(root: &T, mut functor: F)
where
    T: Traversable + ?Sized,
    F: FnMut(&Value, &str, &Path, bool),
{
    let outcome = try_dfs(root, |value, key, path, is_leaf| {
        functor(value, key, path, is_leaf);
        Ok::<(), Infallible>(())
    });
    match outcome {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// [`dfs`] with a fallible callback.
///
/// The first `Err` returned by `functor` stops the traversal; no further
/// entries are visited and the error is returned unchanged.
///
/// # Errors
///
/// Returns the first error produced by `functor`.
///
/// # Examples
///
/// ```rust
/// use objutils::object;
/// use objutils::traversal::try_dfs;
///
/// let tree = object! { "ok" => 1, "bad" => "x", "later" => 2 };
/// let mut seen = Vec::new();
/// let result = try_dfs(&tree, |value, key, _path, _is_leaf| {
///     seen.push(key.to_owned());
///     value.as_f64().map(|_| ()).ok_or_else(|| format!("{key} is not a number"))
/// });
///
/// assert_eq!(result, Err("bad is not a number".to_owned()));
/// assert_eq!(seen, vec!["ok", "bad"]);
/// ```
pub fn try_dfs<T, E, F>(root: &T, mut functor: F) -> Result<(), E>
where
    T: Traversable + ?Sized,
    F: FnMut(&Value, &str, &Path, bool) -> Result<(), E>,
{
    let Some(container) = root.as_container() else {
        tracing::trace!("depth-first traversal skipped: root is not a container");
        return Ok(());
    };
    tracing::trace!(entries = container.len(), "starting depth-first traversal");

    let mut path = Path::new();
    let outcome = visit(container, &mut functor, &mut path);
    if outcome.is_err() {
        tracing::debug!(path = %path, "depth-first traversal aborted by callback");
    }
    outcome
}

fn visit<E, F>(container: Container<'_>, functor: &mut F, path: &mut Path) -> Result<(), E>
where
    F: FnMut(&Value, &str, &Path, bool) -> Result<(), E>,
{
    match container {
        Container::Object(object) => {
            for (key, value) in object.own_entries() {
                visit_entry(key, value, functor, path)?;
            }
        }
        Container::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                visit_entry(&index.to_string(), value, functor, path)?;
            }
        }
    }
    Ok(())
}

fn visit_entry<E, F>(key: &str, value: &Value, functor: &mut F, path: &mut Path) -> Result<(), E>
where
    F: FnMut(&Value, &str, &Path, bool) -> Result<(), E>,
{
    path.push(key);
    if let Some(child) = Container::from_value(value) {
        visit(child, functor, path)?;
    }
    functor(value, key, path, is_leaf(value))?;
    path.pop();
    Ok(())
}
