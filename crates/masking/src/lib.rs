#![forbid(unsafe_code)]
#![warn(missing_docs)]

//!
//! Wrapper types and traits for secret management which help ensure
//! secrets aren't accidentally copied, logged, or otherwise exposed,
//! and that they are securely wiped from memory when dropped.
//!

#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", "README.md"))]

pub use zeroize::{self, DefaultIsZeroes, Zeroize as ZeroizableSecret};

mod strategy;
pub use strategy::{ApiKey, CardNumber, Strategy, WithType, WithoutType};

mod abs;
pub use abs::{ExposeInterface, ExposeOptionInterface, PeekInterface};

mod secret;
mod strong_secret;
pub use secret::Secret;
pub use strong_secret::StrongSecret;

mod serde;
pub use crate::serde::{Deserialize, SerializableSecret, Serialize};

mod string;

pub mod maskable;
pub use maskable::{Mask, Maskable};

/// This module should be included with asterisk.
///
/// `use masking::prelude::*;`
///
pub mod prelude {
    pub use super::{ExposeInterface, ExposeOptionInterface, PeekInterface};
}
