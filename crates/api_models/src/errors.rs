//! Public error response types.

mod actix;
mod types;

pub use types::{ApiError, ApiErrorResponse, Extra};
