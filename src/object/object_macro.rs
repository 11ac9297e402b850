//! The `object!` macro for mapping literals.

/// Builds an [`Object<Value>`](crate::object::Object) from `key => value`
/// pairs, in order.
///
/// Keys are anything convertible into `String`; values anything convertible
/// into [`Value`](crate::object::Value), including nested `object!` calls.
///
/// # Examples
///
/// ```
/// use objutils::object;
/// use objutils::object::Value;
///
/// let tree = object! {
///     "name" => "root",
///     "child" => object! { "depth" => 1 },
///     "empty" => object! {},
/// };
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.get_path(&["child", "depth"]), Some(&Value::from(1)));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::object::Object::<$crate::object::Value>::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut object = $crate::object::Object::<$crate::object::Value>::new();
        $(
            object.insert($key, $crate::object::Value::from($value));
        )+
        object
    }};
}
