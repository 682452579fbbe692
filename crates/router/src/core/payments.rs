use api_models::payments::{AuthorizeRequest, AuthorizeResponse};
use common_utils::errors::ReportSwitchExt;
use error_stack::report;

use crate::{
    connector::veritrans::{self, transformers},
    core::errors::{GatewayError, RouterResult},
    routes::AppState,
    services, utils,
};

/// Run an MPI authorize flow: validate the caller's input, resolve the
/// merchant credentials, assemble and sign the vendor payload, forward
/// it and interpret the result.
pub async fn authorize(
    state: &AppState,
    request: AuthorizeRequest,
) -> RouterResult<AuthorizeResponse> {
    // Input validation first so a missing field is reported as the
    // caller's error even when the deployment is also misconfigured.
    if request.token.is_none() {
        return Err(report!(GatewayError::MissingRequiredField {
            field_name: "token"
        }));
    }
    let amount = request
        .amount
        .ok_or(report!(GatewayError::MissingRequiredField {
            field_name: "amount"
        }))?;

    let conf = &state.conf.veritrans;
    let auth = transformers::VeritransAuthType::try_from(conf)?;

    let order_id = request
        .order_id
        .clone()
        .unwrap_or_else(utils::generate_order_id);
    let params = transformers::MpiAuthorizeParams::try_from((request, conf, order_id.clone()))?;
    let outbound = veritrans::build_authorize_request(conf, &params, &auth)?;

    tracing::info!(order_id = %order_id, amount, "forwarding MPI authorize request");
    let response = services::send_request(&state.conf, outbound).await.switch()?;
    tracing::info!(
        order_id = %order_id,
        status_code = response.status_code,
        "vendor MPI response received"
    );

    transformers::handle_mpi_response(response.status_code, &response.response, &order_id)
}
