pub mod api;

pub use api::{log_and_return_error_response, send_request, Response};
