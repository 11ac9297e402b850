//! The key sequence from the traversal root to the entry being visited.

use std::fmt;

use smallvec::SmallVec;

/// Keys from the traversal root down to the current entry, current key last.
///
/// A traversal owns one `Path` and pushes or pops a key as it moves between
/// levels. Callbacks only ever borrow it for the duration of one call; use
/// [`to_vec`](Self::to_vec) to keep a copy.
///
/// Displays as the keys joined with `.`.
///
/// # Examples
///
/// ```rust
/// use objutils::object;
/// use objutils::traversal::dfs;
///
/// let tree = object! { "a" => object! { "b" => 1 } };
/// let mut paths = Vec::new();
/// dfs(&tree, |_value, _key, path, _is_leaf| paths.push(path.to_string()));
///
/// assert_eq!(paths, vec!["a.b", "a"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    keys: SmallVec<[String; 8]>,
}

impl Path {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, key: &str) {
        self.keys.push(key.to_owned());
    }

    pub(crate) fn pop(&mut self) {
        self.keys.pop();
    }

    /// Returns the number of keys, i.e. the depth of the current entry.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` outside of any entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the key of the current entry.
    pub fn last(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// Returns the keys as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }

    /// Iterates over the keys from the root down.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Copies the keys out of the traversal.
    pub fn to_vec(&self) -> Vec<String> {
        self.keys.to_vec()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.keys.iter().enumerate() {
            if index > 0 {
                formatter.write_str(".")?;
            }
            formatter.write_str(key)?;
        }
        Ok(())
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Path {
    fn eq(&self, other: &[&str; N]) -> bool {
        self.iter().eq(other.iter().copied())
    }
}
