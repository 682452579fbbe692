//! Extension traits for foreign types

use error_stack::{IntoReport, ResultExt};
use serde::{Deserialize, Serialize};

use crate::errors::{self, CustomResult};

/// Extension trait for encoding `serde::Serialize` types
pub trait Encode {
    /// Serialize `self` to a JSON string
    fn encode_to_string_of_json(&self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize;

    /// Serialize `self` to a `serde_json::Value`
    fn encode_to_value(&self) -> CustomResult<serde_json::Value, errors::ParsingError>
    where
        Self: Serialize;
}

impl<A> Encode for A
where
    A: Serialize,
{
    fn encode_to_string_of_json(&self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize,
    {
        serde_json::to_string(self)
            .into_report()
            .change_context(errors::ParsingError)
            .attach_printable_lazy(|| {
                format!("Unable to convert {} to a JSON string", std::any::type_name::<Self>())
            })
    }

    fn encode_to_value(&self) -> CustomResult<serde_json::Value, errors::ParsingError>
    where
        Self: Serialize,
    {
        serde_json::to_value(self)
            .into_report()
            .change_context(errors::ParsingError)
            .attach_printable_lazy(|| {
                format!("Unable to convert {} to a value", std::any::type_name::<Self>())
            })
    }
}

///
/// Extending functionalities of `bytes::Bytes`
///
pub trait BytesExt<T> {
    ///
    /// Convert `bytes::Bytes` into type `<T>` using `serde::Deserialize`
    ///
    fn parse_struct<'de>(&'de self, type_name: &str) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl<T> BytesExt<T> for bytes::Bytes {
    fn parse_struct<'de>(&'de self, type_name: &str) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        use bytes::Buf;

        serde_json::from_slice::<T>(self.chunk())
            .into_report()
            .change_context(errors::ParsingError)
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from bytes"))
    }
}
