//! Outbound request assembly for the Veritrans APIs.

pub mod transformers;

use common_utils::{
    ext_traits::Encode,
    request::{Method, Request, RequestBody, RequestBuilder},
};
use error_stack::ResultExt;
use masking::Maskable;

use self::transformers as veritrans;
use crate::{
    configs::settings,
    core::errors::{GatewayError, RouterResult},
};

fn common_headers() -> Vec<(String, Maskable<String>)> {
    vec![
        (
            "Content-Type".to_string(),
            mime::APPLICATION_JSON.to_string().into(),
        ),
        ("Accept".to_string(), mime::APPLICATION_JSON.to_string().into()),
    ]
}

/// Build the outbound token API request.
pub fn build_token_request(
    conf: &settings::Veritrans,
    vendor_request: &veritrans::VeritransTokenRequest,
) -> RouterResult<Request> {
    let body = vendor_request
        .encode_to_string_of_json()
        .change_context(GatewayError::RequestEncodingFailed)?;
    Ok(RequestBuilder::new()
        .method(Method::Post)
        .url(&conf.token_url)
        .headers(common_headers())
        .set_body(RequestBody::from_encoded_string(body))
        .build())
}

/// Build the outbound MPI authorize request, signed with the merchant
/// credentials.
pub fn build_authorize_request(
    conf: &settings::Veritrans,
    params: &veritrans::MpiAuthorizeParams,
    auth: &veritrans::VeritransAuthType,
) -> RouterResult<Request> {
    let body = veritrans::build_mpi_request_body(params, auth)?;
    Ok(RequestBuilder::new()
        .method(Method::Post)
        .url(&conf.mpi_authorize_url)
        .headers(common_headers())
        .set_body(RequestBody::from_encoded_string(body))
        .build())
}
