//! Integration tests for the flat iteration helpers.

use std::cmp::Ordering;
use std::rc::Rc;

use objutils::iterate::{
    KeyOrder, obj_filter, obj_filter_with, obj_for_each, obj_for_each_sorted,
    obj_for_each_sorted_with, obj_for_each_with, obj_length, obj_map, obj_map_with, obj_reduce,
    obj_reduce_with, obj_values,
};
use objutils::object;
use objutils::object::{Object, Value};
use rstest::{fixture, rstest};

#[fixture]
fn numbers() -> Object<Value> {
    object! { "a" => 1, "b" => 2, "c" => 3, "d" => 4 }
}

fn number(value: &Value) -> f64 {
    value.as_f64().unwrap_or_default()
}

fn descending(left: &str, right: &str) -> Ordering {
    right.cmp(left)
}

fn indifferent(_left: &str, _right: &str) -> Ordering {
    Ordering::Equal
}

// =============================================================================
// Absent subject
// =============================================================================

#[rstest]
fn test_absent_subject_defaults() {
    let absent: Option<&Object<Value>> = None;

    assert!(obj_map(absent, |value, _key, _object| value.clone()).is_empty());
    assert!(obj_filter(absent, |_value, _key, _object| true).is_empty());
    assert_eq!(
        obj_reduce(absent, |sum, _value, _key, _object| sum + 1, 7),
        7
    );
    assert_eq!(obj_length(absent), 0);
    assert!(obj_values(absent).is_empty());

    let mut calls = 0;
    obj_for_each(absent, |_value, _key, _object| calls += 1);
    obj_for_each_sorted(absent, |_value, _key, _object| calls += 1, KeyOrder::Natural);
    assert_eq!(calls, 0);
}

#[rstest]
fn test_absent_subject_defaults_with_context() {
    let absent: Option<&Object<Value>> = None;
    let mut calls = 0_u32;

    let mapped = obj_map_with(
        absent,
        |calls: &mut u32, _value, _key, _object| *calls += 1,
        &mut calls,
    );
    let filtered = obj_filter_with(
        absent,
        |calls: &mut u32, _value, _key, _object| {
            *calls += 1;
            true
        },
        &mut calls,
    );
    let reduced = obj_reduce_with(
        absent,
        |calls: &mut u32, sum: i32, _value, _key, _object| {
            *calls += 1;
            sum
        },
        3,
        &mut calls,
    );
    obj_for_each_with(
        absent,
        |calls: &mut u32, _value, _key, _object| *calls += 1,
        &mut calls,
    );
    obj_for_each_sorted_with(
        absent,
        |calls: &mut u32, _value, _key, _object| *calls += 1,
        KeyOrder::Natural,
        &mut calls,
    );

    assert!(mapped.is_empty());
    assert!(filtered.is_empty());
    assert_eq!(reduced, 3);
    assert_eq!(calls, 0);
}

// =============================================================================
// Map / Reduce / Filter
// =============================================================================

#[rstest]
fn test_map_then_reduce(numbers: Object<Value>) {
    let doubled = obj_map(&numbers, |value, _key, _object| number(value) * 2.0);
    let total = obj_reduce(&doubled, |sum, value, _key, _object| sum + value, 0.0);
    assert!((total - 20.0).abs() < f64::EPSILON);
    assert_eq!(numbers.get_own("a"), Some(&Value::from(1)));
}

#[rstest]
fn test_filter_then_length(numbers: Object<Value>) {
    let even = obj_filter(&numbers, |value, _key, _object| number(value) % 2.0 == 0.0);
    assert_eq!(obj_length(&even), 2);
    assert_eq!(even.keys().collect::<Vec<_>>(), vec!["b", "d"]);
}

#[rstest]
fn test_filter_by_key(numbers: Object<Value>) {
    let result = obj_filter(&numbers, |_value, key, _object| key > "b");
    assert_eq!(result.keys().collect::<Vec<_>>(), vec!["c", "d"]);
}

#[rstest]
fn test_callbacks_see_the_whole_subject(numbers: Object<Value>) {
    obj_for_each(&numbers, |value, key, object| {
        assert!(std::ptr::eq(object, &numbers));
        assert_eq!(object.get_own(key), Some(value));
    });
}

#[rstest]
fn test_values_in_iteration_order(numbers: Object<Value>) {
    let values: Vec<f64> = obj_values(&numbers).into_iter().map(number).collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
}

#[rstest]
fn test_context_is_shared_across_helpers(numbers: Object<Value>) {
    let mut visited: Vec<String> = Vec::new();
    let record = |visited: &mut Vec<String>, _value: &Value, key: &str, _object: &Object<Value>| {
        visited.push(key.to_owned());
    };
    obj_for_each_with(&numbers, record, &mut visited);
    obj_for_each_sorted_with(&numbers, record, KeyOrder::By(&descending), &mut visited);
    assert_eq!(visited, vec!["a", "b", "c", "d", "d", "c", "b", "a"]);
}

// =============================================================================
// Own enumerable entries only
// =============================================================================

#[rstest]
fn test_helpers_ignore_inherited_entries() {
    let prototype = Rc::new(object! { "inherited" => 100 });
    let mut subject = Object::with_prototype(prototype);
    subject.insert("own", 1);

    assert_eq!(subject.get("inherited"), Some(&Value::from(100)));
    assert_eq!(obj_length(&subject), 1);
    assert_eq!(obj_values(&subject), vec![&Value::from(1)]);
    assert_eq!(obj_map(&subject, |value, _key, _object| number(value)).len(), 1);
    assert_eq!(obj_filter(&subject, |_value, _key, _object| true).len(), 1);

    let mut keys = Vec::new();
    obj_for_each_sorted(&subject, |_value, key, _object| keys.push(key), KeyOrder::Natural);
    assert_eq!(keys, vec!["own"]);
}

#[rstest]
fn test_helpers_ignore_hidden_entries(mut numbers: Object<Value>) {
    numbers.define_hidden("secret", 1000);
    let total = obj_reduce(&numbers, |sum, value, _key, _object| sum + number(value), 0.0);
    assert!((total - 10.0).abs() < f64::EPSILON);
}

// =============================================================================
// Sorted iteration
// =============================================================================

#[rstest]
#[case(KeyOrder::Natural, vec!["a", "b", "c"])]
#[case(KeyOrder::By(&descending), vec!["c", "b", "a"])]
#[case(KeyOrder::By(&indifferent), vec!["c", "a", "b"])]
fn test_for_each_sorted_orders(#[case] order: KeyOrder<'static>, #[case] expected: Vec<&str>) {
    let input = object! { "c" => 3, "a" => 1, "b" => 2 };
    let mut visited = Vec::new();
    obj_for_each_sorted(&input, |_value, key, _object| visited.push(key), order);
    assert_eq!(visited, expected);
}

#[rstest]
fn test_for_each_sorted_natural_is_bytewise() {
    let input = object! { "b" => 1, "B" => 2, "a" => 3, "10" => 4, "9" => 5 };
    let mut visited = Vec::new();
    obj_for_each_sorted(&input, |_value, key, _object| visited.push(key), KeyOrder::default());
    assert_eq!(visited, vec!["10", "9", "B", "a", "b"]);
}

#[rstest]
fn test_for_each_sorted_with_context_accumulates() {
    let input = object! { "c" => 3, "a" => 1, "b" => 2 };
    let mut joined = String::new();
    obj_for_each_sorted_with(
        &input,
        |joined: &mut String, _value, key, _object| joined.push_str(key),
        KeyOrder::By(&|left: &str, right: &str| right.cmp(left)),
        &mut joined,
    );
    assert_eq!(joined, "cba");
}
