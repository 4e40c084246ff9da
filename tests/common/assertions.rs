//! Custom assertion macros for HTTP responses

/// Assert a response status, printing the body on mismatch
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        let response = &$response;
        assert_eq!(
            response.status,
            $status,
            "unexpected status, body: {}",
            response.body
        );
    };
}

/// Assert the `{"error", "status"}` body produced by `BackendError`
#[macro_export]
macro_rules! assert_error_body {
    ($response:expr, $status:expr, $message:expr) => {
        let response = &$response;
        $crate::assert_status!(*response, $status);
        assert_eq!(response.body["error"], $message);
        assert_eq!(response.body["status"], $status.as_u16());
    };
}
