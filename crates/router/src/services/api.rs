use actix_web::ResponseError;
use api_models::errors::ApiErrorResponse;
use common_utils::{
    errors::{CustomResult, ErrorSwitch},
    request::{Method, Request},
};
use error_stack::{IntoReport, ResultExt};
use masking::ExposeInterface;
use once_cell::sync::OnceCell;

use crate::{
    configs::settings::{Proxy, Settings},
    core::errors::ApiClientError,
};

static NON_PROXIED_CLIENT: OnceCell<reqwest::Client> = OnceCell::new();
static PROXIED_CLIENT: OnceCell<reqwest::Client> = OnceCell::new();

/// A vendor response, body kept as raw bytes so the caller decides how
/// to interpret it per status code.
#[derive(Debug)]
pub struct Response {
    pub status_code: u16,
    pub response: bytes::Bytes,
}

fn construct_client(proxy: &Proxy) -> CustomResult<reqwest::Client, ApiClientError> {
    let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
    if let Some(url) = proxy.http_url.as_deref() {
        builder = builder.proxy(
            reqwest::Proxy::http(url)
                .into_report()
                .change_context(ApiClientError::InvalidProxyConfiguration)?,
        );
    }
    if let Some(url) = proxy.https_url.as_deref() {
        builder = builder.proxy(
            reqwest::Proxy::https(url)
                .into_report()
                .change_context(ApiClientError::InvalidProxyConfiguration)?,
        );
    }
    builder
        .build()
        .into_report()
        .change_context(ApiClientError::ClientConstructionFailed)
}

fn get_client(proxy: &Proxy) -> CustomResult<reqwest::Client, ApiClientError> {
    let cell = if proxy.http_url.is_some() || proxy.https_url.is_some() {
        &PROXIED_CLIENT
    } else {
        &NON_PROXIED_CLIENT
    };
    cell.get_or_try_init(|| construct_client(proxy)).cloned()
}

/// Send an outbound [`Request`] and collect the full response body.
pub async fn send_request(
    conf: &Settings,
    request: Request,
) -> CustomResult<Response, ApiClientError> {
    let client = get_client(&conf.proxy)?;

    let mut request_builder = match request.method {
        Method::Get => client.get(&request.url),
        Method::Post => client.post(&request.url),
    };
    for (name, value) in request.headers {
        request_builder = request_builder.header(name, value.into_inner());
    }
    if let Some(body) = request.body {
        request_builder = request_builder.body(body.get_inner_value().expose());
    }

    let response = request_builder
        .send()
        .await
        .into_report()
        .change_context(ApiClientError::RequestNotSent)?;
    let status_code = response.status().as_u16();
    let response = response
        .bytes()
        .await
        .into_report()
        .change_context(ApiClientError::ResponseDecodingFailed)?;

    Ok(Response {
        status_code,
        response,
    })
}

/// Log the error report and convert it into the client-facing HTTP
/// response. Reports never carry card data or merchant secrets, so the
/// debug rendering is safe to log.
pub fn log_and_return_error_response<T>(error: error_stack::Report<T>) -> actix_web::HttpResponse
where
    T: error_stack::Context + ErrorSwitch<ApiErrorResponse>,
{
    tracing::error!(?error);
    error.current_context().switch().error_response()
}
