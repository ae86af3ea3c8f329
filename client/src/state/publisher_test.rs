use super::*;

fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl Fn(bool) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |v| sink.lock().unwrap().push(v))
}

#[test]
fn subscriber_receives_current_value_immediately() {
    let publisher = SessionPublisher::new(true);
    let (seen, listener) = recorder();
    publisher.subscribe(listener);
    assert_eq!(*seen.lock().unwrap(), vec![true]);
}

#[test]
fn subscriber_receives_changes_in_order() {
    let publisher = SessionPublisher::new(false);
    let (seen, listener) = recorder();
    publisher.subscribe(listener);
    publisher.set(true);
    publisher.set(false);
    publisher.set(true);
    assert_eq!(*seen.lock().unwrap(), vec![false, true, false, true]);
}

#[test]
fn setting_same_value_does_not_notify() {
    let publisher = SessionPublisher::new(false);
    let (seen, listener) = recorder();
    publisher.subscribe(listener);
    publisher.set(false);
    publisher.set(false);
    assert_eq!(*seen.lock().unwrap(), vec![false]);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let publisher = SessionPublisher::new(false);
    let (seen, listener) = recorder();
    let sub = publisher.subscribe(listener);
    publisher.unsubscribe(sub);
    publisher.set(true);
    assert_eq!(*seen.lock().unwrap(), vec![false]);
    assert_eq!(publisher.subscriber_count(), 0);
}

#[test]
fn listener_may_read_publisher_during_notification() {
    let publisher = SessionPublisher::new(false);
    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);
    let reader = publisher.clone();
    publisher.subscribe(move |_| sink.lock().unwrap().push(reader.get()));
    publisher.set(true);
    assert_eq!(*observed.lock().unwrap(), vec![false, true]);
}

#[test]
fn clones_share_state() {
    let a = SessionPublisher::new(false);
    let b = a.clone();
    b.set(true);
    assert!(a.get());
}
