//! Depth-first traversal that lets the callback edit each level in place.

use std::convert::Infallible;

use super::container::{ContainerMut, Traversable, is_leaf};
use super::path::Path;
use crate::object::Value;

/// Walks every entry below `root`, handing the callback the container that
/// holds each entry so it can edit it.
///
/// Objects and arrays are containers; array elements are keyed by their
/// decimal index. Each container is processed in two phases:
///
/// 1. For every entry key, `functor(key, parent, path, is_leaf)` fires with
///    `parent` the [`ContainerMut`] holding the entry. The entry's value is
///    `parent.get_own(key)`. The callback may replace the value and, through
///    [`ContainerMut::as_object_mut`] or [`ContainerMut::as_array_mut`],
///    rename the key or add and remove siblings. Keys come from a snapshot
///    made before the phase. A key that an earlier call removed or hid is
///    skipped, and keys added during the phase are not visited in it.
/// 2. The container is read again and every entry whose value is an object
///    or an array is walked the same way, with its key pushed onto the path.
///
/// A level is therefore fully edited before any of its children is visited.
/// A root that is neither an object nor an array produces no calls.
///
/// # Examples
///
/// ```rust
/// use objutils::object;
/// use objutils::object::Value;
/// use objutils::traversal::dfs_mod;
///
/// let mut tree = object! {
///     "a" => object! { "value" => 1 },
///     "b" => object! { "value" => 2 },
/// };
///
/// dfs_mod(&mut tree, |key, parent, _path, _is_leaf| {
///     if key == "value" {
///         if let Some(Value::Number(number)) = parent.get_own_mut(key) {
///             *number *= 2.0;
///         }
///     }
/// });
///
/// assert_eq!(tree, object! {
///     "a" => object! { "value" => 2 },
///     "b" => object! { "value" => 4 },
/// });
/// ```
pub fn dfs_mod<T, F>(root: &mut T, mut functor: F)
where
    T: Traversable + ?Sized,
    F: FnMut(&str, &mut ContainerMut<'_>, &Path, bool),
{
    let outcome = try_dfs_mod(root, |key, parent, path, is_leaf| {
        functor(key, parent, path, is_leaf);
        Ok::<(), Infallible>(())
    });
    match outcome {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// [`dfs_mod`] with a fallible callback.
///
/// The first `Err` returned by `functor` stops the traversal and is returned
/// unchanged. Edits made before the error stay in place.
///
/// # Errors
///
/// Returns the first error produced by `functor`.
///
/// # Examples
///
/// ```rust
/// use objutils::object;
/// use objutils::object::RenameError;
/// use objutils::traversal::try_dfs_mod;
///
/// let mut tree = object! { "old" => 1, "new" => 2 };
/// let result = try_dfs_mod(&mut tree, |key, parent, _path, _is_leaf| {
///     match parent.as_object_mut() {
///         Some(object) if key == "old" => object.rename_key(key, "new"),
///         _ => Ok(()),
///     }
/// });
///
/// assert_eq!(result, Err(RenameError::KeyExists("new".to_owned())));
/// ```
pub fn try_dfs_mod<T, E, F>(root: &mut T, mut functor: F) -> Result<(), E>
where
    T: Traversable + ?Sized,
    F: FnMut(&str, &mut ContainerMut<'_>, &Path, bool) -> Result<(), E>,
{
    let Some(container) = root.as_container_mut() else {
        tracing::trace!("mutating traversal skipped: root is not a container");
        return Ok(());
    };
    tracing::trace!(entries = container.len(), "starting mutating depth-first traversal");

    let mut path = Path::new();
    let outcome = visit_mut(container, &mut functor, &mut path);
    if outcome.is_err() {
        tracing::debug!(path = %path, "mutating traversal aborted by callback");
    }
    outcome
}

fn visit_mut<E, F>(mut parent: ContainerMut<'_>, functor: &mut F, path: &mut Path) -> Result<(), E>
where
    F: FnMut(&str, &mut ContainerMut<'_>, &Path, bool) -> Result<(), E>,
{
    for key in &parent.snapshot_keys() {
        // Earlier calls may have removed, hidden or truncated it away.
        if !parent.contains_key(key) {
            continue;
        }
        let leaf = parent.get_own(key).is_none_or(is_leaf);
        path.push(key);
        functor(key, &mut parent, path, leaf)?;
        path.pop();
    }

    match parent {
        ContainerMut::Object(object) => {
            for (key, value) in object.own_entries_mut() {
                descend(key, value, functor, path)?;
            }
        }
        ContainerMut::Array(items) => {
            for (index, value) in items.iter_mut().enumerate() {
                descend(&index.to_string(), value, functor, path)?;
            }
        }
    }
    Ok(())
}

fn descend<E, F>(key: &str, value: &mut Value, functor: &mut F, path: &mut Path) -> Result<(), E>
where
    F: FnMut(&str, &mut ContainerMut<'_>, &Path, bool) -> Result<(), E>,
{
    if let Some(child) = ContainerMut::from_value(value) {
        path.push(key);
        visit_mut(child, functor, path)?;
        path.pop();
    }
    Ok(())
}
