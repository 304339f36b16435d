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
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a duration lies within `[min, max]`
#[macro_export]
macro_rules! assert_duration_between {
    ($elapsed:expr, $min:expr, $max:expr) => {{
        let elapsed = $elapsed;
        assert!(
            elapsed >= $min && elapsed <= $max,
            "Expected duration between {:?} and {:?}, got {:?}",
            $min,
            $max,
            elapsed
        );
    }};
}
