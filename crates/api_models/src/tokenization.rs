use masking::{CardNumber, Secret, StrongSecret};
use serde::{Deserialize, Serialize};

/// Raw card fields accepted by the tokenization endpoint. Field names
/// mirror the vendor token API contract. Card data is used once to
/// build the outbound request and dropped afterwards; the card number
/// and security code are zeroized on drop.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenizeRequest {
    /// Card number; required, validated in the core flow
    pub card_number: Option<StrongSecret<String, CardNumber>>,
    /// Card expiry in `MM/YY` format; required, validated in the core flow
    pub card_expire: Option<Secret<String>>,
    /// Card security code
    pub security_code: Option<StrongSecret<String>>,
    /// Cardholder name
    pub cardholder_name: Option<Secret<String>>,
    /// Language for vendor messages, defaults to `en`
    pub lang: Option<String>,
}

/// The filtered vendor response returned to the caller. Carries the
/// issued token and vendor status fields only; card data is never
/// echoed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub status: String,
    pub code: String,
    pub message: String,
}
