use holey::{ArrayCursor, IterStep, JsArray, Slot, Value};

fn holey() -> JsArray {
    JsArray::from_slots([
        Slot::Present(Value::from("a")),
        Slot::Absent,
        Slot::Present(Value::Undefined),
        Slot::Absent,
        Slot::Present(Value::from("e")),
    ])
}

#[test]
fn index_scan_visits_holes() {
    let arr = holey();
    let seen: Vec<Option<Value>> = arr.index_scan().map(|slot| slot.cloned()).collect();
    assert_eq!(
        seen,
        vec![
            Some(Value::from("a")),
            None,
            Some(Value::Undefined),
            None,
            Some(Value::from("e")),
        ]
    );
    assert_eq!(arr.index_scan().len(), 5);
}

#[test]
fn index_scan_runs_backwards() {
    let arr = holey();
    let present: Vec<bool> = arr.index_scan().rev().map(|slot| slot.is_some()).collect();
    assert_eq!(present, vec![true, false, true, false, true]);
}

#[test]
fn value_scan_skips_holes() {
    let arr = holey();
    let seen: Vec<(u32, Value)> = arr.value_scan().map(|(i, v)| (i, v.clone())).collect();
    assert_eq!(
        seen,
        vec![
            (0, Value::from("a")),
            (2, Value::Undefined),
            (4, Value::from("e")),
        ]
    );
}

#[test]
fn scans_respect_trailing_holes() {
    let mut arr = JsArray::from_values([Value::from(1)]);
    arr.set_length(3);
    assert_eq!(arr.index_scan().count(), 3);
    assert_eq!(arr.value_scan().count(), 1);
}

#[test]
fn sparse_value_scan_only_touches_populated_slots() {
    let mut arr = JsArray::new();
    arr.set_index(3_000_000_000, Value::from("far"));
    arr.set_index(7, Value::from("near"));
    assert!(arr.is_sparse());
    let seen: Vec<u32> = arr.value_scan().map(|(i, _)| i).collect();
    assert_eq!(seen, vec![7, 3_000_000_000]);
}

#[test]
fn cursor_reads_holes_as_undefined() {
    let arr = holey().wrapped();
    let values: Vec<Value> = ArrayCursor::values(arr).collect();
    assert_eq!(
        values,
        vec![
            Value::from("a"),
            Value::Undefined,
            Value::Undefined,
            Value::Undefined,
            Value::from("e"),
        ]
    );
}

#[test]
fn cursor_resumes_in_a_second_consumer() {
    let arr = JsArray::from_values((1..=6).map(Value::from)).wrapped();
    let mut cursor = ArrayCursor::values(arr);
    let first: Vec<Value> = cursor.by_ref().take(2).collect();
    assert_eq!(cursor.position(), 2);
    let rest: Vec<Value> = cursor.by_ref().collect();
    assert_eq!(first, vec![Value::from(1), Value::from(2)]);
    assert_eq!(
        rest,
        vec![Value::from(3), Value::from(4), Value::from(5), Value::from(6)]
    );
}

#[test]
fn cursor_observes_growth() {
    let arr = JsArray::from_values([Value::from(1)]).wrapped();
    let mut cursor = ArrayCursor::values(arr.clone());
    assert_eq!(
        cursor.advance(),
        IterStep {
            value: Value::from(1),
            done: false
        }
    );
    arr.borrow_mut().push_one(Value::from(2)).unwrap();
    assert_eq!(cursor.advance().value, Value::from(2));
    assert!(cursor.advance().done);
}

#[test]
fn cursor_stops_early_when_the_array_shrinks() {
    let arr = JsArray::from_values((0..5).map(Value::from)).wrapped();
    let mut cursor = ArrayCursor::values(arr.clone());
    cursor.advance();
    cursor.advance();
    arr.borrow_mut().set_length(1);
    assert!(cursor.advance().done);
    assert!(cursor.is_done());
}

#[test]
fn finished_cursor_stays_finished() {
    let arr = JsArray::new().wrapped();
    let mut cursor = ArrayCursor::values(arr.clone());
    assert!(cursor.advance().done);
    arr.borrow_mut().push_one(Value::from(1)).unwrap();
    assert!(cursor.advance().done);
    assert_eq!(cursor.next(), None);
}

#[test]
fn key_and_entry_cursors() {
    let arr = holey().wrapped();
    let keys: Vec<Value> = ArrayCursor::keys(arr.clone()).collect();
    assert_eq!(keys, (0..5).map(Value::from).collect::<Vec<_>>());

    let entries: Vec<String> = ArrayCursor::entries(arr)
        .map(|entry| entry.to_string())
        .collect();
    assert_eq!(
        entries,
        vec!["[0, a]", "[1, undefined]", "[2, undefined]", "[3, undefined]", "[4, e]"]
    );
}
