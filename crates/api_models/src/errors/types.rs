use reqwest::StatusCode;

/// Optional diagnostic fields attached to an error response. Only
/// non-sensitive vendor diagnostics are ever carried here; card data
/// and secrets never are.
#[derive(Debug, serde::Serialize, Default, Clone)]
pub struct Extra {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<serde_json::Value>,
}

#[derive(Debug, serde::Serialize, Clone)]
pub struct ApiError {
    pub message: String,
    pub extra: Option<Extra>,
}

impl ApiError {
    pub fn new(message: impl ToString, extra: Option<Extra>) -> Self {
        Self {
            message: message.to_string(),
            extra,
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(flatten)]
    extra: Extra,
}

impl From<&ApiErrorResponse> for ErrorResponse {
    fn from(value: &ApiErrorResponse) -> Self {
        let error_info = value.get_internal_error();
        Self {
            message: error_info.message.clone(),
            extra: error_info.extra.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug)]
pub enum ApiErrorResponse {
    BadRequest(ApiError),
    InternalServerError(ApiError),
    ConnectorError(ApiError, StatusCode),
    NotFound(ApiError),
}

impl ::core::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let error_response: ErrorResponse = self.into();
        write!(
            f,
            "{}",
            serde_json::to_string(&error_response)
                .unwrap_or_else(|_| r#"{"message":"API error response"}"#.to_string())
        )
    }
}

impl ApiErrorResponse {
    pub(crate) fn get_internal_error(&self) -> &ApiError {
        match self {
            Self::BadRequest(i)
            | Self::InternalServerError(i)
            | Self::NotFound(i)
            | Self::ConnectorError(i, _) => i,
        }
    }
}

impl std::error::Error for ApiErrorResponse {}
