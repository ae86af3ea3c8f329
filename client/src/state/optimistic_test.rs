use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    id: u32,
    value: i32,
}

fn row(id: u32, value: i32) -> Row {
    Row { id, value }
}

fn id_of(r: &Row) -> u32 {
    r.id
}

#[test]
fn rollback_restores_only_the_touched_entry() {
    let mut rows = vec![row(1, 1), row(2, 2)];
    let snap = Snapshot::apply(&mut rows, 1, id_of, |r| r.value = 10).unwrap();
    rows[1].value = 20;
    snap.rollback(&mut rows);
    assert_eq!(rows, vec![row(1, 1), row(2, 20)]);
}

#[test]
fn apply_with_unknown_key_is_none() {
    let mut rows = vec![row(1, 1)];
    assert!(Snapshot::apply(&mut rows, 9, id_of, |r| r.value = 0).is_none());
    assert_eq!(rows, vec![row(1, 1)]);
}

#[test]
fn settle_keeps_mutation_on_success() {
    let mut rows = vec![row(1, 1)];
    let snap = Snapshot::apply(&mut rows, 1, id_of, |r| r.value = 5).unwrap();
    snap.settle(&mut rows, &Ok::<(), ()>(()));
    assert_eq!(rows, vec![row(1, 5)]);
}

#[test]
fn settle_on_failure_keeps_a_list_replaced_in_flight() {
    let mut rows = vec![row(1, 1)];
    let snap = Snapshot::apply(&mut rows, 1, id_of, |r| r.value = 5).unwrap();
    rows = vec![row(1, 5), row(2, 2)];
    snap.settle(&mut rows, &Err::<(), _>("nope"));
    assert_eq!(rows, vec![row(1, 1), row(2, 2)]);
}

#[test]
fn rollback_after_entry_removed_is_a_no_op() {
    let mut rows = vec![row(1, 1), row(2, 2)];
    let snap = Snapshot::apply(&mut rows, 1, id_of, |r| r.value = 5).unwrap();
    rows.retain(|r| r.id != 1);
    snap.rollback(&mut rows);
    assert_eq!(rows, vec![row(2, 2)]);
}
