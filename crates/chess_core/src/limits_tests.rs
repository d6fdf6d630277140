use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    assert!(!limits.should_stop());
}

#[test]
fn test_search_limits_with_time() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn test_deadline_expiry() {
    let stop = StopSignal::new(Some(Duration::from_millis(10)));
    stop.start();
    assert!(!stop.is_stopped());

    thread::sleep(Duration::from_millis(20));
    stop.check_time();
    assert!(stop.is_stopped());
}

#[test]
fn test_no_deadline() {
    let stop = StopSignal::new(None);
    stop.start();
    thread::sleep(Duration::from_millis(10));
    stop.check_time();
    assert!(!stop.is_stopped());
}

#[test]
fn stop_is_shared_between_clones() {
    let limits = SearchLimits::depth(3);
    let handle = limits.stop.clone();
    limits.start();
    handle.stop();
    assert!(limits.should_stop());
}

#[test]
fn stop_raised_before_start_survives_start() {
    let stop = StopSignal::new(None);
    stop.stop();
    stop.start();
    assert!(stop.check_time());
}

#[test]
fn cancellation_from_another_thread_reaches_the_search() {
    let limits = SearchLimits::depth(8);
    let owner = limits.stop.clone();
    let search = thread::spawn(move || {
        limits.start();
        while !limits.should_stop() {
            thread::sleep(Duration::from_millis(1));
        }
    });
    owner.stop();
    search.join().unwrap();
    assert!(owner.is_stopped());
}

#[test]
fn node_checks_come_every_1024_nodes() {
    let stop = StopSignal::default();
    assert!(stop.should_check(1024));
    assert!(stop.should_check(4096));
    assert!(!stop.should_check(1023));
    assert_eq!(stop.elapsed(), Duration::ZERO);
}
