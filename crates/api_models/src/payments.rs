use masking::Secret;
use serde::{Deserialize, Serialize};

/// An MPI authorize request. `token` and `amount` are required and
/// validated in the core flow before any outbound call; everything
/// else is optional and overrides a fixed default or is forwarded only
/// when present.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeRequest {
    /// Token previously issued by the tokenization endpoint
    pub token: Option<Secret<String>>,
    /// Amount in minor units
    pub amount: Option<u64>,
    /// Client-supplied order identifier; generated when absent
    pub order_id: Option<String>,
    /// Vendor service option, defaults to `mpi-complete`
    pub service_option_type: Option<String>,
    /// Payment-splitting code, defaults to single payment (`10`)
    pub jpo: Option<String>,
    /// Capture on authorization, defaults to false
    pub with_capture: Option<bool>,
    /// 3-D Secure device channel, defaults to browser (`02`)
    pub device_channel: Option<String>,
    /// Redirect target once issuer authentication completes
    pub redirection_uri: Option<String>,
    /// Server-to-server result notification URL
    pub push_url: Option<String>,
    /// Cardholder browser user agent, forwarded for 3-D Secure 2
    pub http_user_agent: Option<String>,
    /// Cardholder browser accept header, forwarded for 3-D Secure 2
    pub http_accept: Option<String>,
    /// Cardholder e-mail address
    pub cardholder_email: Option<Secret<String>>,
    /// Billing address details
    pub billing_address: Option<AddressDetails>,
    /// Shipping address details
    pub shipping_address: Option<AddressDetails>,
}

/// Optional billing/shipping address fields forwarded to the issuer
/// for 3-D Secure 2 risk assessment. Absent fields are omitted from
/// the vendor payload entirely.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    pub city: Option<Secret<String>>,
    pub country: Option<Secret<String>>,
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub line3: Option<Secret<String>>,
    pub postal_code: Option<Secret<String>>,
}

/// The filtered vendor result relayed to the caller on a successful
/// (or challenge-pending) authorization. The token and merchant
/// secrets are never part of this shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeResponse {
    pub order_id: String,
    pub mstatus: String,
    pub v_result_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Issuer challenge redirect URL, present when 3-D Secure
    /// authentication requires cardholder interaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_start_url: Option<String>,
    /// Embedded HTML for challenge display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_response_contents: Option<String>,
    #[serde(rename = "res3dMessageVersion", skip_serializing_if = "Option::is_none")]
    pub res_three_d_message_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_corporation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub res_brand_id: Option<String>,
    /// Vendor-side transaction identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub march_txn: Option<String>,
    /// Customer-side transaction identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cust_txn: Option<String>,
}
