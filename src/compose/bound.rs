//! Receiver binding for callbacks.
//!
//! Rust closures have no implicit `this`. A bound function instead receives
//! its receiver as an explicit leading `&mut S` argument, and [`Bound`] owns
//! that receiver for as long as the bound function lives.
//!
//! - [`bind`]: Fixes the receiver of a function taking `(&mut S, A)`
//! - [`Bound`]: The resulting adapter; `A` may be a tuple to carry several
//!   arguments
//!
//! See also the [`bind!`](crate::bind) macro, which spreads up to six
//! arguments instead of taking a tuple.

/// A function with a fixed receiver.
///
/// Created by [`bind`]. Every [`call`](Self::call) forwards its arguments
/// unchanged to the wrapped function, together with a mutable borrow of the
/// receiver, and returns the function's result as is.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `S` - The receiver type
///
/// # Examples
///
/// ```
/// use objutils::compose::bind;
///
/// let mut counter = bind(|count: &mut usize, step: usize| {
///     *count += step;
///     *count
/// }, 0);
///
/// assert_eq!(counter.call(2), 2);
/// assert_eq!(counter.call(3), 5);
/// assert_eq!(counter.into_scope(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Bound<F, S> {
    function: F,
    scope: S,
}

impl<F, S> Bound<F, S> {
    /// Invokes the wrapped function with the bound receiver.
    ///
    /// # Arguments
    ///
    /// * `arguments` - Forwarded unchanged as the second argument
    ///
    /// # Examples
    ///
    /// ```
    /// use objutils::compose::bind;
    ///
    /// let mut join = bind(|prefix: &mut String, (left, right): (&str, &str)| {
    ///     format!("{prefix}{left}{right}")
    /// }, String::from(">"));
    ///
    /// assert_eq!(join.call(("a", "b")), ">ab");
    /// ```
    #[inline]
    pub fn call<A, R>(&mut self, arguments: A) -> R
    where
        F: FnMut(&mut S, A) -> R,
    {
        (self.function)(&mut self.scope, arguments)
    }

    /// Returns the receiver.
    #[inline]
    pub const fn scope(&self) -> &S {
        &self.scope
    }

    /// Consumes the bound function and returns its receiver.
    #[inline]
    pub fn into_scope(self) -> S {
        self.scope
    }
}

/// Binds `function` to the receiver `scope`.
///
/// The returned [`Bound`] calls `function(&mut scope, arguments)` for every
/// invocation. The receiver can be any type, including a mutable borrow of
/// state owned elsewhere.
///
/// # Arguments
///
/// * `function` - A function taking the receiver followed by its arguments
/// * `scope` - The receiver to fix
///
/// # Examples
///
/// ```
/// use objutils::compose::bind;
///
/// let mut seen = Vec::new();
/// {
///     let mut record = bind(|log: &mut &mut Vec<String>, key: &str| log.push(key.to_owned()), &mut seen);
///     record.call("a");
///     record.call("b");
/// }
/// assert_eq!(seen, vec!["a", "b"]);
/// ```
#[inline]
pub const fn bind<F, S>(function: F, scope: S) -> Bound<F, S> {
    Bound { function, scope }
}
