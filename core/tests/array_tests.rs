use holey::{JsArray, Slot, Value};

fn nums(values: &[i32]) -> JsArray {
    JsArray::from_values(values.iter().map(|n| Value::from(*n)))
}

fn strs(values: &[&str]) -> Vec<Value> {
    values.iter().map(|s| Value::from(*s)).collect()
}

fn with_hole_at_one() -> JsArray {
    JsArray::from_slots([
        Slot::Present(Value::from(1)),
        Slot::Absent,
        Slot::Present(Value::from(3)),
    ])
}

#[test]
fn array_display() {
    assert_eq!(nums(&[1, 2, 3]).to_string(), "[1, 2, 3]");
    assert_eq!(JsArray::new().to_string(), "[]");
    assert_eq!(with_hole_at_one().to_string(), "[1, <1 empty item>, 3]");
}

#[test]
fn push_returns_new_length() {
    let mut arr = nums(&[1, 2]);
    assert_eq!(arr.push(strs(&["a", "b"])).unwrap(), 4);
    assert_eq!(arr.to_string(), "[1, 2, a, b]");
}

#[test]
fn push_and_pop_round_trip() {
    let mut arr = JsArray::new();
    arr.push(strs(&["a", "b", "c"])).unwrap();
    let seen: Vec<Value> = arr.value_scan().map(|(_, v)| v.clone()).collect();
    assert_eq!(seen, strs(&["a", "b", "c"]));
    assert_eq!(arr.pop(), Slot::Present(Value::from("c")));
    assert_eq!(arr.pop(), Slot::Present(Value::from("b")));
    assert_eq!(arr.pop(), Slot::Present(Value::from("a")));
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.pop(), Slot::Absent);
}

#[test]
fn pop_of_a_trailing_hole_still_shrinks() {
    let mut arr = nums(&[1]);
    arr.set_length(3);
    assert_eq!(arr.pop(), Slot::Absent);
    assert_eq!(arr.len(), 2);
}

#[test]
fn shift_moves_holes_down() {
    let mut arr = JsArray::from_slots([
        Slot::Present(Value::from(0)),
        Slot::Present(Value::from(1)),
        Slot::Absent,
        Slot::Present(Value::from(3)),
    ]);
    assert_eq!(arr.shift(), Slot::Present(Value::from(0)));
    assert_eq!(arr.to_string(), "[1, <1 empty item>, 3]");
    assert!(!arr.has(1));
}

#[test]
fn shift_drains_in_order() {
    let mut arr = nums(&[1, 2, 3]);
    assert_eq!(arr.shift().into_value(), Value::from(1));
    assert_eq!(arr.shift().into_value(), Value::from(2));
    assert_eq!(arr.shift().into_value(), Value::from(3));
    assert_eq!(arr.len(), 0);
    assert_eq!(arr.shift(), Slot::Absent);
}

#[test]
fn unshift_moves_holes_up() {
    let mut arr = with_hole_at_one();
    assert_eq!(arr.unshift(strs(&["x", "y"])).unwrap(), 5);
    assert_eq!(arr.to_string(), "[x, y, 1, <1 empty item>, 3]");
    assert!(!arr.has(3));
    assert_eq!(arr.unshift([]).unwrap(), 5);
}

#[test]
fn splice_replaces_a_region() {
    let mut arr = nums(&[1, 2, 3, 4, 5]);
    let removed = arr.splice(2, Some(2), strs(&["a", "b", "c"])).unwrap();
    assert_eq!(arr.to_string(), "[1, 2, a, b, c, 5]");
    assert_eq!(removed.to_string(), "[3, 4]");
}

#[test]
fn splice_with_nothing_to_do_is_identity() {
    let mut arr = with_hole_at_one();
    let before = arr.to_slots();
    let removed = arr.splice(1, Some(0), []).unwrap();
    assert_eq!(arr.to_slots(), before);
    assert_eq!(removed.len(), 0);
}

#[test]
fn splice_captures_holes() {
    let mut arr = with_hole_at_one();
    let removed = arr.splice(0, Some(2), []).unwrap();
    assert_eq!(removed.to_slots(), vec![Slot::Present(Value::from(1)), Slot::Absent]);
    assert_eq!(arr.to_string(), "[3]");
}

#[test]
fn splice_normalizes_bounds() {
    let mut arr = nums(&[1, 2, 3, 4, 5]);
    let removed = arr.splice(-2, None, []).unwrap();
    assert_eq!(removed.to_string(), "[4, 5]");
    assert_eq!(arr.to_string(), "[1, 2, 3]");

    let removed = arr.splice(10, Some(99), strs(&["end"])).unwrap();
    assert_eq!(removed.len(), 0);
    assert_eq!(arr.to_string(), "[1, 2, 3, end]");

    let removed = arr.splice(-100, Some(-5), strs(&["start"])).unwrap();
    assert_eq!(removed.len(), 0);
    assert_eq!(arr.to_string(), "[start, 1, 2, 3, end]");
}

#[test]
fn splice_shifts_holes_with_their_neighbours() {
    let mut arr = JsArray::from_slots([
        Slot::Present(Value::from(0)),
        Slot::Present(Value::from(1)),
        Slot::Absent,
        Slot::Present(Value::from(3)),
    ]);
    arr.splice(1, Some(1), strs(&["a", "b"])).unwrap();
    assert_eq!(arr.to_string(), "[0, a, b, <1 empty item>, 3]");
}

#[test]
fn fill_closes_holes_in_range() {
    let mut arr = JsArray::new();
    arr.set_length(5);
    arr.fill(&Value::from(0), 1, Some(-1));
    assert_eq!(arr.to_string(), "[<1 empty item>, 0, 0, 0, <1 empty item>]");
    arr.fill(&Value::from(7), 0, None);
    assert_eq!(arr.to_string(), "[7, 7, 7, 7, 7]");
    assert_eq!(arr.populated(), 5);
}

#[test]
fn copy_within_forward_overlap() {
    let mut arr = nums(&[1, 2, 3, 4, 5]);
    arr.copy_within(1, 0, Some(3));
    assert_eq!(arr.to_string(), "[1, 1, 2, 3, 5]");
}

#[test]
fn copy_within_backward_overlap() {
    let mut arr = nums(&[1, 2, 3, 4, 5]);
    arr.copy_within(0, 3, None);
    assert_eq!(arr.to_string(), "[4, 5, 3, 4, 5]");
}

#[test]
fn copy_within_carries_holes() {
    let mut arr = JsArray::from_slots([
        Slot::Present(Value::from(1)),
        Slot::Absent,
        Slot::Present(Value::from(3)),
        Slot::Present(Value::from(4)),
    ]);
    arr.copy_within(2, 0, Some(2));
    assert_eq!(arr.to_string(), "[1, <1 empty item>, 1, <1 empty item>]");
    assert_eq!(arr.len(), 4);
}

#[test]
fn concat_spreads_arrays_and_keeps_holes() {
    let mut other = with_hole_at_one();
    other.set("label", Value::from("skip")).unwrap();
    let arr = nums(&[0]);
    let joined = arr
        .concat(&[Value::from(other), Value::from("x"), Value::Null])
        .unwrap();
    assert_eq!(joined.to_string(), "[0, 1, <1 empty item>, 3, x, null]");
    assert_eq!(joined.property("label"), None);
    assert_eq!(arr.len(), 1);
}

#[test]
fn concat_keeps_trailing_holes_of_the_receiver() {
    let mut arr = nums(&[1]);
    arr.set_length(3);
    let joined = arr.concat(&[Value::from(2)]).unwrap();
    assert_eq!(joined.to_string(), "[1, <2 empty items>, 2]");
}

#[test]
fn reverse_swaps_slot_states() {
    let mut arr = JsArray::from_slots([
        Slot::Present(Value::from(1)),
        Slot::Absent,
        Slot::Present(Value::from(3)),
        Slot::Present(Value::from(4)),
    ]);
    arr.reverse();
    assert_eq!(arr.to_string(), "[4, 3, <1 empty item>, 1]");
    assert!(!arr.has(2));
}

#[test]
fn reverse_keeps_trailing_holes_as_leading_holes() {
    let mut arr = nums(&[1, 2]);
    arr.set_length(4);
    arr.reverse();
    assert_eq!(arr.to_string(), "[<2 empty items>, 2, 1]");
}

#[test]
fn slice_copies_a_window() {
    let arr = nums(&[1, 2, 3, 4, 5]);
    assert_eq!(arr.slice(1, Some(3)).to_string(), "[2, 3]");
    assert_eq!(arr.slice(-2, None).to_string(), "[4, 5]");
    assert_eq!(arr.slice(3, Some(1)).to_string(), "[]");
    assert_eq!(with_hole_at_one().slice(1, None).to_string(), "[<1 empty item>, 3]");
}

#[test]
fn join_renders_holes_as_empty() {
    let mut arr = with_hole_at_one();
    arr.push([Value::Null, Value::Undefined, Value::from(1.5)]).unwrap();
    assert_eq!(arr.join(","), "1,,3,,,1.5");
    assert_eq!(nums(&[1, 2, 3]).join("-"), "1-2-3");
}

#[test]
fn join_of_a_self_referencing_array() {
    let arr = nums(&[1, 2]).wrapped();
    arr.borrow_mut().push_one(Value::Array(arr.clone())).unwrap();
    assert_eq!(arr.borrow().join(","), "1,2,");
    assert_eq!(arr.borrow().to_string(), "[1, 2, [Circular]]");
}

#[test]
fn index_of_skips_holes() {
    let mut arr = with_hole_at_one();
    arr.push([Value::from(1)]).unwrap();
    assert_eq!(arr.index_of(&Value::from(1), 0), Some(0));
    assert_eq!(arr.index_of(&Value::from(1), 1), Some(3));
    assert_eq!(arr.index_of(&Value::Undefined, 0), None);
    assert_eq!(arr.last_index_of(&Value::from(1), None), Some(3));
    assert_eq!(arr.last_index_of(&Value::from(1), Some(-2)), Some(0));
    assert_eq!(arr.last_index_of(&Value::from(1), Some(-10)), None);
}

#[test]
fn includes_treats_holes_as_undefined() {
    let arr = with_hole_at_one();
    assert!(arr.includes(&Value::Undefined, 0));
    assert!(!arr.includes(&Value::Undefined, 2));
    assert!(arr.includes(&Value::from(3), -1));
    let nan = JsArray::from_values([Value::Number(f64::NAN)]);
    assert!(nan.includes(&Value::Number(f64::NAN), 0));
    assert_eq!(nan.index_of(&Value::Number(f64::NAN), 0), None);
}

#[test]
fn find_visits_holes() {
    let arr = with_hole_at_one();
    assert_eq!(arr.find_index(|v, _| v.is_undefined()), Some(1));
    assert_eq!(
        arr.find(|v, _| v.to_number() > 2.0),
        Some(Value::from(3))
    );
    assert_eq!(arr.find(|_, i| i > 10), None);
}

#[test]
fn at_counts_from_either_end() {
    let arr = nums(&[10, 20, 30]);
    assert_eq!(arr.at(0).into_value(), Value::from(10));
    assert_eq!(arr.at(-1).into_value(), Value::from(30));
    assert_eq!(arr.at(3), Slot::Absent);
    assert_eq!(arr.at(-4), Slot::Absent);
}
