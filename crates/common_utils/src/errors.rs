//! Errors and error specific types for universal use

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
///
/// Effectively, equivalent to `Result<T, error_stack::Report<E>>`
pub type CustomResult<T, E> = error_stack::Result<T, E>;

macro_rules! impl_error_display {
    ($st: ident, $arg: tt) => {
        impl std::fmt::Display for $st {
            fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                fmt.write_str(&format!(
                    "{{ error_type: {:?}, error_description: {} }}",
                    self, $arg
                ))
            }
        }
    };
}

macro_rules! impl_error_type {
    ($name: ident, $arg: tt) => {
        #[doc = ""]
        #[doc = stringify!(Error variant $name)]
        #[doc = stringify!(Custom error variant for $arg)]
        #[doc = ""]
        #[derive(Debug)]
        pub struct $name;

        impl_error_display!($name, $arg);

        impl std::error::Error for $name {}
    };
}

impl_error_type!(ParsingError, "Parsing error");

/// Cryptographic algorithm errors
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// The cryptographic algorithm was unable to encode the message
    #[error("Failed to encode given message")]
    EncodingFailed,
    /// The cryptographic algorithm was unable to sign the message
    #[error("Failed to sign message")]
    MessageSigningFailed,
}

/// Allow [error_stack::Report] to change between error contexts using a
/// dedicated conversion trait
pub trait ErrorSwitch<T> {
    /// Get the next error type that the source error can be switched to
    fn switch(&self) -> T;
}

/// Extension trait to switch the context of a [`CustomResult`] using an
/// [`ErrorSwitch`] implementation on the current context
pub trait ReportSwitchExt<T, U> {
    /// Switch to the intended report by calling `switch` on the current
    /// context
    fn switch(self) -> CustomResult<T, U>;
}

impl<T, U, V> ReportSwitchExt<T, U> for CustomResult<T, V>
where
    V: ErrorSwitch<U> + error_stack::Context,
    U: error_stack::Context,
{
    #[track_caller]
    fn switch(self) -> CustomResult<T, U> {
        match self {
            Ok(i) => Ok(i),
            Err(er) => {
                let new_context = er.current_context().switch();
                Err(er.change_context(new_context))
            }
        }
    }
}
