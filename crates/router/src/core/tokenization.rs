use api_models::tokenization::{TokenResponse, TokenizeRequest};
use common_utils::errors::ReportSwitchExt;
use error_stack::report;

use crate::{
    connector::veritrans::{self, transformers},
    core::errors::{GatewayError, RouterResult},
    routes::AppState,
    services,
};

/// Exchange raw card details for a vendor-issued token. The card data
/// lives only for the duration of the outbound call and is never
/// logged or echoed back.
pub async fn get_token(state: &AppState, request: TokenizeRequest) -> RouterResult<TokenResponse> {
    if request.card_number.is_none() {
        return Err(report!(GatewayError::MissingRequiredField {
            field_name: "card_number"
        }));
    }
    if request.card_expire.is_none() {
        return Err(report!(GatewayError::MissingRequiredField {
            field_name: "card_expire"
        }));
    }

    let conf = &state.conf.veritrans;
    let token_api_key = conf
        .token_api_key
        .clone()
        .ok_or(report!(GatewayError::TokenApiKeyMissing))?;

    let vendor_request = transformers::VeritransTokenRequest::try_from((request, token_api_key))?;
    let outbound = veritrans::build_token_request(conf, &vendor_request)?;

    tracing::info!(url = %conf.token_url, "forwarding tokenization request");
    let response = services::send_request(&state.conf, outbound).await.switch()?;
    tracing::info!(status_code = response.status_code, "vendor token response received");

    transformers::handle_token_response(response.status_code, &response.response)
}
