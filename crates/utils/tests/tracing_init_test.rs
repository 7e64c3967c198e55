//! Global subscriber installation

use promkit_registry::{MetricsCache, Registry};
use serial_test::serial;
use tracing_subscriber::filter::ParseError;

#[test]
#[serial]
fn test_init_once() {
    promkit_utils::tracing::init_with_filter("promkit_registry=debug")
        .expect("first init succeeds");
    assert!(tracing::dispatcher::has_been_set());

    // Cache hits and registrations log through the installed subscriber
    let cache = MetricsCache::new(Registry::new());
    cache.get_or_create("blackbox", "http", "traced").unwrap();
    cache.get_or_create("blackbox", "http", "traced").unwrap();

    let err = promkit_utils::tracing::init().unwrap_err();
    assert!(
        !err.is::<ParseError>(),
        "second init fails on the existing subscriber, not on the filter"
    );
}

#[test]
#[serial]
fn test_invalid_directives_are_rejected() {
    let err = promkit_utils::tracing::init_with_filter("promkit=notalevel").unwrap_err();
    assert!(err.is::<ParseError>(), "unexpected error: {err}");
}
