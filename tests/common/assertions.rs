//! Custom assertion macros

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert that the controller has settled every request
#[macro_export]
macro_rules! assert_idle {
    ($controller:expr) => {
        assert!(
            !$controller.is_busy(),
            "Expected no requests in flight, {} remaining",
            $controller.feedback().in_flight()
        );
    };
}
