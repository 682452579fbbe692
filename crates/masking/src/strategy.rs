use core::fmt;

/// Debugging trait which is specialized for handling secret values
pub trait Strategy<T> {
    /// Format information about the secret's type.
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Debug with type
pub struct WithType;

impl<T> Strategy<T> for WithType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("*** ")?;
        fmt.write_str(std::any::type_name::<T>())?;
        fmt.write_str(" ***")
    }
}

/// Debug without type
pub struct WithoutType;

impl<T> Strategy<T> for WithoutType {
    fn fmt(_: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("*** ***")
    }
}

/// Strategy for masking API keys and merchant secrets
#[derive(Debug)]
pub struct ApiKey;

impl<T> Strategy<T> for ApiKey
where
    T: AsRef<str>,
{
    fn fmt(_value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, " *** api-key *** ")
    }
}

/// Strategy for masking card numbers, showing at most the first six
/// and last four digits
#[derive(Debug)]
pub struct CardNumber;

impl<T> Strategy<T> for CardNumber
where
    T: AsRef<str>,
{
    fn fmt(value: &T, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = value.as_ref();
        if value.len() < 15 || value.len() > 19 {
            return WithoutType::fmt(&value, fmt);
        }
        write!(
            fmt,
            "{}{}{}",
            value.get(..6).unwrap_or_default(),
            "*".repeat(value.len().saturating_sub(10)),
            value.get(value.len().saturating_sub(4)..).unwrap_or_default()
        )
    }
}
