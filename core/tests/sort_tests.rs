use std::cmp::Ordering;

use holey::array::default_compare;
use holey::{JsArray, Slot, Value};

fn nums(values: &[f64]) -> JsArray {
    JsArray::from_values(values.iter().map(|n| Value::from(*n)))
}

fn by_number(a: &Value, b: &Value) -> Ordering {
    a.to_number().total_cmp(&b.to_number())
}

#[test]
fn default_sort_compares_strings() {
    let mut arr = nums(&[10.0, 9.0, 1.0, 100.0]);
    arr.sort();
    assert_eq!(arr.to_string(), "[1, 10, 100, 9]");
}

#[test]
fn numeric_comparator() {
    let mut arr = nums(&[10.0, 9.0, 1.0, 100.0, -3.5]);
    arr.sort_by(by_number);
    assert_eq!(arr.to_string(), "[-3.5, 1, 9, 10, 100]");
}

#[test]
fn holes_move_to_the_end() {
    let mut arr = JsArray::from_slots([
        Slot::Absent,
        Slot::Present(Value::from(3)),
        Slot::Absent,
        Slot::Present(Value::from(1)),
        Slot::Present(Value::from(2)),
    ]);
    arr.sort_by(by_number);
    assert_eq!(arr.len(), 5);
    assert_eq!(arr.to_string(), "[1, 2, 3, <2 empty items>]");
}

#[test]
fn undefined_sorts_after_values_but_before_holes() {
    let mut arr = JsArray::from_slots([
        Slot::Present(Value::Undefined),
        Slot::Absent,
        Slot::Present(Value::from("b")),
        Slot::Present(Value::from("a")),
    ]);
    arr.sort();
    assert_eq!(arr.to_string(), "[a, b, undefined, <1 empty item>]");
    assert!(arr.has(2));
    assert!(!arr.has(3));
}

#[test]
fn sort_is_stable() {
    let pairs = [("b", 1), ("a", 2), ("b", 3), ("a", 4), ("b", 5)];
    let mut arr = JsArray::from_values(pairs.iter().map(|(key, tag)| {
        Value::from(JsArray::from_values([Value::from(*key), Value::from(*tag)]))
    }));
    arr.sort_by(|a, b| {
        let key = |v: &Value| {
            v.as_array()
                .map(|arr| arr.borrow().get_index(0).into_value().to_js_string())
                .unwrap_or_default()
        };
        key(a).cmp(&key(b))
    });
    assert_eq!(arr.join(";"), "a,2;a,4;b,1;b,3;b,5");
}

#[test]
fn long_inputs_are_stable_too() {
    let mut arr = JsArray::from_values((0..200).map(|i| Value::from(i % 7)));
    arr.sort_by(by_number);
    let values: Vec<f64> = arr.value_scan().map(|(_, v)| v.to_number()).collect();
    assert!(values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(values.len(), 200);
}

#[test]
fn inconsistent_comparator_still_terminates() {
    let mut arr = JsArray::from_slots(
        (0..100).map(|i| if i % 3 == 0 { Slot::Absent } else { Slot::Present(Value::from(i)) }),
    );
    let holes = arr.len() as usize - arr.populated();
    let mut flip = false;
    arr.sort_by(|_, _| {
        flip = !flip;
        if flip { Ordering::Less } else { Ordering::Greater }
    });
    assert_eq!(arr.len(), 100);
    assert_eq!(arr.populated(), 100 - holes);
    assert!(arr.value_scan().all(|(index, _)| (index as usize) < 100 - holes));
}

#[test]
fn default_compare_orders_undefined_last() {
    assert_eq!(default_compare(&Value::Undefined, &Value::from(1)), Ordering::Greater);
    assert_eq!(default_compare(&Value::from(1), &Value::Undefined), Ordering::Less);
    assert_eq!(default_compare(&Value::from("a"), &Value::from("b")), Ordering::Less);
    assert_eq!(default_compare(&Value::Null, &Value::from("nul")), Ordering::Greater);
}

#[test]
fn sorting_a_sparse_array_compacts_it() {
    let mut arr = JsArray::new();
    arr.set_index(1_000_000, Value::from(2));
    arr.set_index(10, Value::from(1));
    assert!(arr.is_sparse());
    arr.sort_by(by_number);
    assert_eq!(arr.len(), 1_000_001);
    assert_eq!(arr.get_index(0).into_value(), Value::from(1));
    assert_eq!(arr.get_index(1).into_value(), Value::from(2));
    assert!(!arr.has_index(1_000_000));
    assert!(!arr.is_sparse());
}
