#![forbid(unsafe_code)]

//! Request and response types exposed by the gateway API.

pub mod errors;
pub mod payments;
pub mod tokenization;
