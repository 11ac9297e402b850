//! The `bind!` macro for receiver binding with spread arguments.
//!
//! This module provides the [`bind!`] macro, the variadic counterpart of
//! [`bind`](crate::compose::bind).

/// Binds a function to a receiver, leaving `__` placeholders as parameters.
///
/// **Important**: Do NOT import a `__` item. The placeholder is matched as a
/// literal token by the macro.
///
/// # Syntax
///
/// For a function `f(scope, a, b)`:
/// - `bind!(f, scope, __, __)` creates `move |a, b| f(&mut scope, a, b)`
/// - `bind!(f, scope)` creates `move || f(&mut scope)`
///
/// The receiver is moved into the closure, so the closure is [`FnMut`].
/// Bind a `&mut T` to keep using the receiver after the closure is dropped.
///
/// # Supported Argument Counts
///
/// This macro supports zero to six forwarded arguments.
///
/// # Examples
///
/// ```
/// use objutils::bind;
///
/// fn scale(factor: &mut i32, first: i32, second: i32) -> i32 {
///     (first + second) * *factor
/// }
///
/// let mut scaled_sum = bind!(scale, 3, __, __);
/// assert_eq!(scaled_sum(1, 2), 9);
/// ```
///
/// ## Borrowed receiver
///
/// ```
/// use objutils::bind;
///
/// let mut names: Vec<String> = Vec::new();
/// {
///     let mut push = bind!(|names: &mut &mut Vec<String>, name: &str| names.push(name.to_owned()), &mut names, __);
///     push("left");
///     push("right");
/// }
/// assert_eq!(names, vec!["left", "right"]);
/// ```
#[macro_export]
macro_rules! bind {
    ($function:expr, $scope:expr, __, __, __, __, __, __ $(,)?) => {{
        let mut function = $function;
        let mut scope = $scope;
        move |arg1, arg2, arg3, arg4, arg5, arg6| {
            function(&mut scope, arg1, arg2, arg3, arg4, arg5, arg6)
        }
    }};

    ($function:expr, $scope:expr, __, __, __, __, __ $(,)?) => {{
        let mut function = $function;
        let mut scope = $scope;
        move |arg1, arg2, arg3, arg4, arg5| function(&mut scope, arg1, arg2, arg3, arg4, arg5)
    }};

    ($function:expr, $scope:expr, __, __, __, __ $(,)?) => {{
        let mut function = $function;
        let mut scope = $scope;
        move |arg1, arg2, arg3, arg4| function(&mut scope, arg1, arg2, arg3, arg4)
    }};

    ($function:expr, $scope:expr, __, __, __ $(,)?) => {{
        let mut function = $function;
        let mut scope = $scope;
        move |arg1, arg2, arg3| function(&mut scope, arg1, arg2, arg3)
    }};

    ($function:expr, $scope:expr, __, __ $(,)?) => {{
        let mut function = $function;
        let mut scope = $scope;
        move |arg1, arg2| function(&mut scope, arg1, arg2)
    }};

    ($function:expr, $scope:expr, __ $(,)?) => {{
        let mut function = $function;
        let mut scope = $scope;
        move |arg1| function(&mut scope, arg1)
    }};

    ($function:expr, $scope:expr $(,)?) => {{
        let mut function = $function;
        let mut scope = $scope;
        move || function(&mut scope)
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    fn sum_into(total: &mut i64, first: i64, second: i64, third: i64) -> i64 {
        *total += first + second + third;
        *total
    }

    #[rstest]
    fn test_bind_macro_without_arguments() {
        let mut next = bind!(
            |counter: &mut u32| {
                *counter += 1;
                *counter
            },
            0_u32
        );
        assert_eq!(next(), 1);
        assert_eq!(next(), 2);
    }

    #[rstest]
    fn test_bind_macro_three_arguments_keeps_state() {
        let mut accumulate = bind!(sum_into, 0_i64, __, __, __);
        assert_eq!(accumulate(1, 2, 3), 6);
        assert_eq!(accumulate(4, 5, 6), 21);
    }

    #[rstest]
    fn test_bind_macro_six_arguments_forwarded_in_order() {
        let mut collect = bind!(
            |seen: &mut Vec<u8>, a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| {
                seen.extend([a, b, c, d, e, f]);
                seen.len()
            },
            Vec::new(),
            __,
            __,
            __,
            __,
            __,
            __,
        );
        assert_eq!(collect(1, 2, 3, 4, 5, 6), 6);
        assert_eq!(collect(7, 8, 9, 10, 11, 12), 12);
    }
}
