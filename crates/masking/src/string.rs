//!
//! Secret strings
//!
//! There is no alias type by design.

use std::str::FromStr;

use crate::{Secret, Strategy, StrongSecret};

impl<I> FromStr for Secret<String, I>
where
    I: Strategy<String>,
{
    type Err = std::convert::Infallible;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(src.to_string()))
    }
}

impl<I> FromStr for StrongSecret<String, I>
where
    I: Strategy<String>,
{
    type Err = std::convert::Infallible;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(src.to_string()))
    }
}
