use api_models::{
    payments::{AuthorizeRequest, AuthorizeResponse},
    tokenization::{TokenResponse, TokenizeRequest},
};
use common_utils::{
    crypto::{self, GenerateDigest},
    ext_traits::{BytesExt, Encode},
};
use error_stack::{report, IntoReport, ResultExt};
use masking::{CardNumber, PeekInterface, Secret, StrongSecret};
use serde::{Deserialize, Serialize};

use crate::{
    configs::settings,
    consts,
    core::errors::{GatewayError, RouterResult},
};

/// Merchant credentials resolved from the configuration. Flows resolve
/// these before touching the request payload so that a deployment
/// problem surfaces as a configuration error, not a vendor decline.
#[derive(Debug)]
pub struct VeritransAuthType {
    pub merchant_ccid: Secret<String>,
    pub merchant_secret_key: Secret<String>,
}

impl TryFrom<&settings::Veritrans> for VeritransAuthType {
    type Error = error_stack::Report<GatewayError>;

    fn try_from(conf: &settings::Veritrans) -> Result<Self, Self::Error> {
        match (conf.merchant_ccid.clone(), conf.merchant_secret_key.clone()) {
            (Some(merchant_ccid), Some(merchant_secret_key)) => Ok(Self {
                merchant_ccid,
                merchant_secret_key,
            }),
            _ => Err(report!(GatewayError::MerchantConfigurationMissing)),
        }
    }
}

// ---------- tokenization ----------

/// Outbound body for the vendor token API. Field names follow the
/// vendor contract.
#[derive(Debug, Serialize)]
pub struct VeritransTokenRequest {
    pub token_api_key: Secret<String>,
    pub card_number: StrongSecret<String, CardNumber>,
    pub card_expire: Secret<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<StrongSecret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<Secret<String>>,
    pub lang: String,
}

impl TryFrom<(TokenizeRequest, Secret<String>)> for VeritransTokenRequest {
    type Error = error_stack::Report<GatewayError>;

    fn try_from(
        (item, token_api_key): (TokenizeRequest, Secret<String>),
    ) -> Result<Self, Self::Error> {
        let card_number = item.card_number.ok_or(report!(
            GatewayError::MissingRequiredField {
                field_name: "card_number"
            }
        ))?;
        let card_expire = item.card_expire.ok_or(report!(
            GatewayError::MissingRequiredField {
                field_name: "card_expire"
            }
        ))?;
        Ok(Self {
            token_api_key,
            card_number,
            card_expire,
            security_code: item.security_code,
            cardholder_name: item.cardholder_name,
            lang: item
                .lang
                .unwrap_or_else(|| consts::DEFAULT_TOKEN_LANG.to_string()),
        })
    }
}

/// Vendor token API response. `req_card_number` comes back masked by
/// the vendor and is dropped rather than relayed.
#[derive(Debug, Deserialize)]
pub struct VeritransTokenResponse {
    pub token: Option<String>,
    pub status: String,
    pub code: String,
    pub message: String,
}

/// Interpret a vendor token API response. A transport-level non-2xx
/// relays the vendor status code; a 2xx whose `status` is not
/// `success` is the vendor declining the card and maps to 400.
pub fn handle_token_response(
    status_code: u16,
    body: &bytes::Bytes,
) -> RouterResult<TokenResponse> {
    if !(200..300).contains(&status_code) {
        let raw_response: Option<serde_json::Value> = serde_json::from_slice(body).ok();
        let message = raw_response
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Tokenization request failed")
            .to_string();
        let code = raw_response
            .as_ref()
            .and_then(|value| value.get("code"))
            .and_then(serde_json::Value::as_str)
            .map(String::from);
        return Err(report!(GatewayError::VendorDeclined {
            status_code,
            message,
            order_id: None,
            code,
            raw_response,
        }));
    }

    let response: VeritransTokenResponse = body
        .parse_struct("VeritransTokenResponse")
        .change_context(GatewayError::ResponseDeserializationFailed)?;
    if response.status != "success" {
        // The vendor's failure body never carries raw card data, at
        // most its own masked echo, so it is safe to relay.
        let raw_response: Option<serde_json::Value> = serde_json::from_slice(body).ok();
        return Err(report!(GatewayError::VendorDeclined {
            status_code: 400,
            message: response.message,
            order_id: None,
            code: Some(response.code),
            raw_response,
        }));
    }
    let token = response
        .token
        .ok_or(report!(GatewayError::ResponseDeserializationFailed))
        .attach_printable("Vendor reported success without a token")?;
    Ok(TokenResponse {
        token,
        status: response.status,
        code: response.code,
        message: response.message,
    })
}

// ---------- MPI authorize ----------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayNowIdParam {
    pub token: Secret<String>,
}

/// The `params` object of an MPI authorize call. Serialization follows
/// field declaration order, and the serialized string is hashed as-is,
/// so the order here is part of the request signature.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MpiAuthorizeParams {
    pub order_id: String,
    pub service_option_type: String,
    pub amount: String,
    pub jpo: String,
    pub with_capture: String,
    pub pay_now_id_param: PayNowIdParam,
    pub device_channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirection_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_accept: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_email: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_city: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_country: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_line1: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_line2: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_line3: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address_postal_code: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_city: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_country: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_line1: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_line2: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_line3: Option<Secret<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address_postal_code: Option<Secret<String>>,
    pub txn_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dummy_request: Option<String>,
}

impl TryFrom<(AuthorizeRequest, &settings::Veritrans, String)> for MpiAuthorizeParams {
    type Error = error_stack::Report<GatewayError>;

    fn try_from(
        (item, conf, order_id): (AuthorizeRequest, &settings::Veritrans, String),
    ) -> Result<Self, Self::Error> {
        let token = item
            .token
            .ok_or(report!(GatewayError::MissingRequiredField {
                field_name: "token"
            }))?;
        let amount = item
            .amount
            .ok_or(report!(GatewayError::MissingRequiredField {
                field_name: "amount"
            }))?;
        let billing = item.billing_address.unwrap_or_default();
        let shipping = item.shipping_address.unwrap_or_default();
        Ok(Self {
            order_id,
            service_option_type: item
                .service_option_type
                .unwrap_or_else(|| consts::DEFAULT_SERVICE_OPTION_TYPE.to_string()),
            amount: amount.to_string(),
            jpo: item
                .jpo
                .unwrap_or_else(|| consts::DEFAULT_PAYMENT_SPLITTING_CODE.to_string()),
            with_capture: item.with_capture.unwrap_or(false).to_string(),
            pay_now_id_param: PayNowIdParam { token },
            device_channel: item
                .device_channel
                .unwrap_or_else(|| consts::DEFAULT_DEVICE_CHANNEL.to_string()),
            redirection_uri: item.redirection_uri.or_else(|| conf.redirection_uri.clone()),
            push_url: item.push_url.or_else(|| conf.push_url.clone()),
            http_user_agent: item.http_user_agent,
            http_accept: item.http_accept,
            cardholder_email: item.cardholder_email,
            billing_address_city: billing.city,
            billing_address_country: billing.country,
            billing_address_line1: billing.line1,
            billing_address_line2: billing.line2,
            billing_address_line3: billing.line3,
            billing_address_postal_code: billing.postal_code,
            shipping_address_city: shipping.city,
            shipping_address_country: shipping.country,
            shipping_address_line1: shipping.line1,
            shipping_address_line2: shipping.line2,
            shipping_address_line3: shipping.line3,
            shipping_address_postal_code: shipping.postal_code,
            txn_version: consts::MPI_TXN_VERSION.to_string(),
            dummy_request: conf
                .dummy_request
                .then(|| consts::DUMMY_REQUEST_FLAG.to_string()),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MpiAuthorizeBody<'a> {
    params: &'a serde_json::value::RawValue,
    auth_hash: String,
}

/// SHA-256 over the concatenation of the merchant CCID, the serialized
/// params and the merchant secret key, hex encoded.
pub fn compute_auth_hash(
    merchant_ccid: &str,
    serialized_params: &str,
    merchant_secret_key: &str,
) -> RouterResult<String> {
    let payload = [merchant_ccid, serialized_params, merchant_secret_key].concat();
    let digest = crypto::Sha256
        .generate_digest(payload.as_bytes())
        .change_context(GatewayError::RequestEncodingFailed)?;
    Ok(hex::encode(digest))
}

/// Serialize the params once, hash that exact string, and embed the
/// same string verbatim as the `params` member of the outbound body so
/// the hash always covers the bytes that reach the wire.
pub fn build_mpi_request_body(
    params: &MpiAuthorizeParams,
    auth: &VeritransAuthType,
) -> RouterResult<String> {
    let serialized_params = params
        .encode_to_string_of_json()
        .change_context(GatewayError::RequestEncodingFailed)?;
    let auth_hash = compute_auth_hash(
        auth.merchant_ccid.peek(),
        &serialized_params,
        auth.merchant_secret_key.peek(),
    )?;
    let raw_params = serde_json::value::RawValue::from_string(serialized_params)
        .into_report()
        .change_context(GatewayError::RequestEncodingFailed)?;
    MpiAuthorizeBody {
        params: &raw_params,
        auth_hash,
    }
    .encode_to_string_of_json()
    .change_context(GatewayError::RequestEncodingFailed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VeritransMstatus {
    Success,
    Pending,
    Failure,
}

impl VeritransMstatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Failure => "failure",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VeritransMpiResponse {
    pub result: VeritransMpiResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeritransMpiResult {
    pub mstatus: Option<VeritransMstatus>,
    pub v_result_code: Option<String>,
    pub merr_msg: Option<String>,
    pub order_id: Option<String>,
    pub auth_start_url: Option<String>,
    pub res_response_contents: Option<String>,
    #[serde(rename = "res3dMessageVersion")]
    pub res_three_d_message_version: Option<String>,
    pub res_corporation_id: Option<String>,
    pub res_brand_id: Option<String>,
    pub march_txn: Option<String>,
    pub cust_txn: Option<String>,
}

/// Interpret the MPI authorize response. Transport-level failures
/// relay the vendor status code with whatever diagnostics the body
/// carries; a 2xx is parsed strictly and a failed `mstatus` maps to a
/// 400-class decline.
pub fn handle_mpi_response(
    status_code: u16,
    body: &bytes::Bytes,
    order_id: &str,
) -> RouterResult<AuthorizeResponse> {
    if !(200..300).contains(&status_code) {
        // The body of a transport failure is not guaranteed to be the
        // vendor result shape, so parse leniently.
        let raw_response: Option<serde_json::Value> = serde_json::from_slice(body).ok();
        let message = raw_response
            .as_ref()
            .and_then(|value| value.pointer("/result/merrMsg"))
            .and_then(serde_json::Value::as_str)
            .unwrap_or("Authorization request failed")
            .to_string();
        let code = raw_response
            .as_ref()
            .and_then(|value| value.pointer("/result/vResultCode"))
            .and_then(serde_json::Value::as_str)
            .map(String::from);
        return Err(report!(GatewayError::VendorDeclined {
            status_code,
            message,
            order_id: Some(order_id.to_string()),
            code,
            raw_response,
        }));
    }

    let response: VeritransMpiResponse = body
        .parse_struct("VeritransMpiResponse")
        .change_context(GatewayError::ResponseDeserializationFailed)?;
    let result = response.result;
    let order_id = result.order_id.unwrap_or_else(|| order_id.to_string());

    match result.mstatus {
        Some(mstatus @ (VeritransMstatus::Success | VeritransMstatus::Pending)) => {
            Ok(AuthorizeResponse {
                order_id,
                mstatus: mstatus.as_str().to_string(),
                v_result_code: result.v_result_code,
                message: result.merr_msg,
                auth_start_url: result.auth_start_url,
                res_response_contents: result.res_response_contents,
                res_three_d_message_version: result.res_three_d_message_version,
                res_corporation_id: result.res_corporation_id,
                res_brand_id: result.res_brand_id,
                march_txn: result.march_txn,
                cust_txn: result.cust_txn,
            })
        }
        Some(VeritransMstatus::Failure) | None => Err(report!(GatewayError::VendorDeclined {
            status_code: 400,
            message: result
                .merr_msg
                .unwrap_or_else(|| "Authorization declined".to_string()),
            order_id: Some(order_id),
            code: result.v_result_code,
            raw_response: None,
        })),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn test_conf() -> settings::Veritrans {
        settings::Veritrans {
            token_url: "https://vendor.test/4gtoken".to_string(),
            mpi_authorize_url: "https://vendor.test/paynow/Authorize".to_string(),
            token_api_key: Some(Secret::new("token-api-key".to_string())),
            merchant_ccid: Some(Secret::new("A100000000000000000000cc".to_string())),
            merchant_secret_key: Some(Secret::new("super-secret-merchant-key".to_string())),
            push_url: None,
            redirection_uri: None,
            dummy_request: true,
        }
    }

    fn minimal_request() -> AuthorizeRequest {
        AuthorizeRequest {
            token: Some(Secret::new("tok_411111".to_string())),
            amount: Some(1000),
            ..AuthorizeRequest::default()
        }
    }

    #[test]
    fn params_apply_defaults_and_omit_absent_fields() {
        let conf = test_conf();
        let params = MpiAuthorizeParams::try_from((
            minimal_request(),
            &conf,
            "1700000000000-Ab3dEf".to_string(),
        ))
        .unwrap();
        let value = params.encode_to_value().unwrap();

        assert_eq!(value["orderId"], "1700000000000-Ab3dEf");
        assert_eq!(value["serviceOptionType"], "mpi-complete");
        assert_eq!(value["amount"], "1000");
        assert_eq!(value["jpo"], "10");
        assert_eq!(value["withCapture"], "false");
        assert_eq!(value["deviceChannel"], "02");
        assert_eq!(value["payNowIdParam"]["token"], "tok_411111");
        assert_eq!(value["txnVersion"], "2.0.0");
        assert_eq!(value["dummyRequest"], "1");
        assert!(value.get("pushUrl").is_none());
        assert!(value.get("billingAddressCity").is_none());
        assert!(value.get("httpUserAgent").is_none());
    }

    #[test]
    fn caller_overrides_replace_defaults() {
        let conf = settings::Veritrans {
            dummy_request: false,
            push_url: Some("https://merchant.test/push".to_string()),
            ..test_conf()
        };
        let request = AuthorizeRequest {
            with_capture: Some(true),
            jpo: Some("61C03".to_string()),
            order_id: Some("custom-42".to_string()),
            ..minimal_request()
        };
        let params =
            MpiAuthorizeParams::try_from((request, &conf, "custom-42".to_string())).unwrap();
        let value = params.encode_to_value().unwrap();

        assert_eq!(value["withCapture"], "true");
        assert_eq!(value["jpo"], "61C03");
        assert_eq!(value["orderId"], "custom-42");
        assert_eq!(value["pushUrl"], "https://merchant.test/push");
        assert!(value.get("dummyRequest").is_none());
    }

    #[test]
    fn missing_token_and_amount_are_rejected() {
        let conf = test_conf();
        let result = MpiAuthorizeParams::try_from((
            AuthorizeRequest::default(),
            &conf,
            "id".to_string(),
        ));
        assert!(matches!(
            result.unwrap_err().current_context(),
            GatewayError::MissingRequiredField { field_name: "token" }
        ));

        let request = AuthorizeRequest {
            token: Some(Secret::new("tok".to_string())),
            ..AuthorizeRequest::default()
        };
        let result = MpiAuthorizeParams::try_from((request, &conf, "id".to_string()));
        assert!(matches!(
            result.unwrap_err().current_context(),
            GatewayError::MissingRequiredField {
                field_name: "amount"
            }
        ));
    }

    #[test]
    fn auth_hash_covers_exact_params_bytes() {
        let conf = test_conf();
        let auth = VeritransAuthType::try_from(&conf).unwrap();
        let params = MpiAuthorizeParams::try_from((
            minimal_request(),
            &conf,
            "1700000000000-Ab3dEf".to_string(),
        ))
        .unwrap();

        let body = build_mpi_request_body(&params, &auth).unwrap();
        let body_value: serde_json::Value = serde_json::from_str(&body).unwrap();

        let serialized_params = params.encode_to_string_of_json().unwrap();
        let expected = compute_auth_hash(
            "A100000000000000000000cc",
            &serialized_params,
            "super-secret-merchant-key",
        )
        .unwrap();
        assert_eq!(body_value["authHash"], expected);
        assert_eq!(
            serde_json::to_string(&body_value["params"]).unwrap(),
            serialized_params
        );
    }

    #[test]
    fn auth_hash_is_deterministic_and_input_sensitive() {
        let first = compute_auth_hash("ccid", r#"{"amount":"1000"}"#, "key").unwrap();
        let second = compute_auth_hash("ccid", r#"{"amount":"1000"}"#, "key").unwrap();
        let changed = compute_auth_hash("ccid", r#"{"amount":"1001"}"#, "key").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert_ne!(first, changed);
    }

    #[test]
    fn missing_credentials_fail_as_configuration_error() {
        let conf = settings::Veritrans {
            merchant_secret_key: None,
            ..test_conf()
        };
        let result = VeritransAuthType::try_from(&conf);
        assert!(matches!(
            result.unwrap_err().current_context(),
            GatewayError::MerchantConfigurationMissing
        ));
    }

    #[test]
    fn successful_mpi_response_is_relayed() {
        let body = bytes::Bytes::from_static(
            br#"{"result":{"mstatus":"success","vResultCode":"A001000000000000",
                "merrMsg":"Processing succeeded.","orderId":"1700000000000-Ab3dEf",
                "marchTxn":"mtx-1","custTxn":"ctx-1"}}"#,
        );
        let response = handle_mpi_response(200, &body, "1700000000000-Ab3dEf").unwrap();
        assert_eq!(response.mstatus, "success");
        assert_eq!(response.order_id, "1700000000000-Ab3dEf");
        assert_eq!(response.v_result_code.as_deref(), Some("A001000000000000"));
        assert_eq!(response.march_txn.as_deref(), Some("mtx-1"));
    }

    #[test]
    fn pending_challenge_keeps_redirect_url() {
        let body = bytes::Bytes::from_static(
            br#"{"result":{"mstatus":"pending","vResultCode":"A005000000000000",
                "orderId":"oid-1","authStartUrl":"https://vendor.test/challenge",
                "res3dMessageVersion":"2.2.0"}}"#,
        );
        let response = handle_mpi_response(200, &body, "oid-1").unwrap();
        assert_eq!(response.mstatus, "pending");
        assert_eq!(
            response.auth_start_url.as_deref(),
            Some("https://vendor.test/challenge")
        );
        assert_eq!(response.res_three_d_message_version.as_deref(), Some("2.2.0"));
    }

    #[test]
    fn vendor_logical_failure_maps_to_bad_request() {
        let body = bytes::Bytes::from_static(
            br#"{"result":{"mstatus":"failure","vResultCode":"G030000000000000",
                "merrMsg":"Card declined.","orderId":"oid-2"}}"#,
        );
        let error = handle_mpi_response(200, &body, "oid-2").unwrap_err();
        match error.current_context() {
            GatewayError::VendorDeclined {
                status_code,
                message,
                order_id,
                code,
                ..
            } => {
                assert_eq!(*status_code, 400);
                assert_eq!(message, "Card declined.");
                assert_eq!(order_id.as_deref(), Some("oid-2"));
                assert_eq!(code.as_deref(), Some("G030000000000000"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn vendor_transport_failure_relays_status_code() {
        let body = bytes::Bytes::from_static(b"Service Unavailable");
        let error = handle_mpi_response(503, &body, "oid-3").unwrap_err();
        match error.current_context() {
            GatewayError::VendorDeclined {
                status_code,
                order_id,
                ..
            } => {
                assert_eq!(*status_code, 503);
                assert_eq!(order_id.as_deref(), Some("oid-3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_success_body_is_a_server_error() {
        let body = bytes::Bytes::from_static(b"{\"unexpected\":true}");
        let error = handle_mpi_response(200, &body, "oid-4").unwrap_err();
        assert!(matches!(
            error.current_context(),
            GatewayError::ResponseDeserializationFailed
        ));
    }

    #[test]
    fn token_request_never_serializes_raw_card_beyond_vendor_fields() {
        let request = TokenizeRequest {
            card_number: Some(StrongSecret::new("4111111111111111".to_string())),
            card_expire: Some(Secret::new("12/30".to_string())),
            security_code: Some(StrongSecret::new("123".to_string())),
            cardholder_name: None,
            lang: None,
        };
        let vendor_request = VeritransTokenRequest::try_from((
            request,
            Secret::new("token-api-key".to_string()),
        ))
        .unwrap();
        let value = vendor_request.encode_to_value().unwrap();
        assert_eq!(value["card_number"], "4111111111111111");
        assert_eq!(value["lang"], "en");
        assert!(value.get("cardholder_name").is_none());

        // Debug output stays masked even though serialization exposes.
        let debug = format!("{vendor_request:?}");
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123"));
    }

    #[test]
    fn token_decline_carries_vendor_diagnostics() {
        let body = bytes::Bytes::from_static(
            br#"{"token":null,"status":"failure","code":"invalid_card","message":"Invalid card number."}"#,
        );
        let error = handle_token_response(200, &body).unwrap_err();
        match error.current_context() {
            GatewayError::VendorDeclined {
                status_code,
                message,
                code,
                ..
            } => {
                assert_eq!(*status_code, 400);
                assert_eq!(message, "Invalid card number.");
                assert_eq!(code.as_deref(), Some("invalid_card"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn token_success_is_filtered_to_public_fields() {
        let body = bytes::Bytes::from_static(
            br#"{"token":"tok_9f3b","req_card_number":"411111********11",
                "token_expire_date":"203012","status":"success","code":"success",
                "message":"Token issued."}"#,
        );
        let response = handle_token_response(200, &body).unwrap();
        assert_eq!(response.token, "tok_9f3b");
        assert_eq!(response.status, "success");
        let serialized = serde_json::to_string(&response).unwrap();
        assert!(!serialized.contains("req_card_number"));
    }
}
