use api_models::errors::{ApiError, ApiErrorResponse, Extra};
use common_utils::errors::ErrorSwitch;
pub use common_utils::errors::CustomResult;
use reqwest::StatusCode;

/// Result type of the core flows.
pub type RouterResult<T> = CustomResult<T, GatewayError>;

/// Failures a flow can run into between receiving a request and
/// producing a response. The [`ErrorSwitch`] impl below decides the
/// client-facing status code and body for each variant.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Merchant credentials are not configured")]
    MerchantConfigurationMissing,
    #[error("Tokenization API key is not configured")]
    TokenApiKeyMissing,
    #[error("Failed to encode the vendor request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize the vendor response")]
    ResponseDeserializationFailed,
    #[error("Failed to reach the vendor endpoint")]
    VendorUnreachable,
    /// The vendor answered but the request did not go through, either
    /// a transport-level non-2xx or a 2xx carrying a failed result.
    #[error("{message}")]
    VendorDeclined {
        status_code: u16,
        message: String,
        order_id: Option<String>,
        code: Option<String>,
        raw_response: Option<serde_json::Value>,
    },
    #[error("Something went wrong")]
    InternalServerError,
}

impl ErrorSwitch<ApiErrorResponse> for GatewayError {
    fn switch(&self) -> ApiErrorResponse {
        match self {
            Self::MissingRequiredField { .. } => {
                ApiErrorResponse::BadRequest(ApiError::new(self, None))
            }
            Self::MerchantConfigurationMissing
            | Self::TokenApiKeyMissing
            | Self::RequestEncodingFailed
            | Self::ResponseDeserializationFailed
            | Self::VendorUnreachable
            | Self::InternalServerError => {
                ApiErrorResponse::InternalServerError(ApiError::new(self, None))
            }
            Self::VendorDeclined {
                status_code,
                message,
                order_id,
                code,
                raw_response,
            } => ApiErrorResponse::ConnectorError(
                ApiError::new(
                    message,
                    Some(Extra {
                        order_id: order_id.clone(),
                        code: code.clone(),
                        raw_response: raw_response.clone(),
                    }),
                ),
                StatusCode::from_u16(*status_code).unwrap_or(StatusCode::BAD_GATEWAY),
            ),
        }
    }
}

/// Failures of the outbound HTTP client itself.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("Invalid proxy configuration")]
    InvalidProxyConfiguration,
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Failed to send the request to the vendor")]
    RequestNotSent,
    #[error("Failed to read the vendor response body")]
    ResponseDecodingFailed,
}

impl ErrorSwitch<GatewayError> for ApiClientError {
    fn switch(&self) -> GatewayError {
        match self {
            Self::InvalidProxyConfiguration | Self::ClientConstructionFailed => {
                GatewayError::InternalServerError
            }
            Self::RequestNotSent | Self::ResponseDecodingFailed => GatewayError::VendorUnreachable,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn missing_field_switches_to_bad_request() {
        let response = GatewayError::MissingRequiredField { field_name: "token" }.switch();
        assert!(matches!(response, ApiErrorResponse::BadRequest(_)));
        assert_eq!(
            response.to_string(),
            r#"{"message":"Missing required field: token"}"#
        );
    }

    #[test]
    fn vendor_decline_keeps_status_and_diagnostics() {
        let response = GatewayError::VendorDeclined {
            status_code: 503,
            message: "Service unavailable".to_string(),
            order_id: Some("1700000000000-Ab3dEf".to_string()),
            code: None,
            raw_response: None,
        }
        .switch();
        match &response {
            ApiErrorResponse::ConnectorError(_, code) => {
                assert_eq!(*code, StatusCode::SERVICE_UNAVAILABLE)
            }
            other => panic!("unexpected response: {other:?}"),
        }
        let body: serde_json::Value = serde_json::from_str(&response.to_string()).unwrap();
        assert_eq!(body["message"], "Service unavailable");
        assert_eq!(body["order_id"], "1700000000000-Ab3dEf");
    }

    #[test]
    fn configuration_errors_switch_to_internal_server_error() {
        for error in [
            GatewayError::MerchantConfigurationMissing,
            GatewayError::TokenApiKeyMissing,
        ] {
            assert!(matches!(
                error.switch(),
                ApiErrorResponse::InternalServerError(_)
            ));
        }
    }
}
