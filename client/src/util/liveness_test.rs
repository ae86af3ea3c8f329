use super::*;

#[test]
fn clones_share_the_flag() {
    let alive = Liveness::new();
    let task = alive.clone();
    assert!(task.is_alive());
    alive.end();
    assert!(!task.is_alive());
}
