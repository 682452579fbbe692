//! GraphQL adapter over the tokenization flow.

use async_graphql::{Context, EmptySubscription, InputObject, Object, Schema, SimpleObject};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use masking::{Secret, StrongSecret};

use super::app::AppState;
use crate::core::tokenization;

pub type GatewaySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Liveness probe.
    async fn health(&self) -> &'static str {
        "ok"
    }
}

/// Card details accepted by the `getToken` mutation. Mirrors the REST
/// tokenization request.
#[derive(InputObject)]
pub struct CardInput {
    pub card_number: String,
    pub card_expire: String,
    pub security_code: Option<String>,
    pub cardholder_name: Option<String>,
    pub lang: Option<String>,
}

#[derive(SimpleObject)]
pub struct TokenPayload {
    pub token: String,
    pub status: String,
    pub code: String,
    pub message: String,
}

impl From<api_models::tokenization::TokenResponse> for TokenPayload {
    fn from(response: api_models::tokenization::TokenResponse) -> Self {
        Self {
            token: response.token,
            status: response.status,
            code: response.code,
            message: response.message,
        }
    }
}

impl From<CardInput> for api_models::tokenization::TokenizeRequest {
    fn from(input: CardInput) -> Self {
        Self {
            card_number: Some(StrongSecret::new(input.card_number)),
            card_expire: Some(Secret::new(input.card_expire)),
            security_code: input.security_code.map(StrongSecret::new),
            cardholder_name: input.cardholder_name.map(Secret::new),
            lang: input.lang,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Exchange card details for a vendor-issued token.
    async fn get_token(
        &self,
        ctx: &Context<'_>,
        input: CardInput,
    ) -> async_graphql::Result<TokenPayload> {
        let state = ctx.data::<AppState>()?;
        match tokenization::get_token(state, input.into()).await {
            Ok(response) => Ok(response.into()),
            Err(error) => {
                tracing::error!(?error, "graphql tokenization failed");
                Err(async_graphql::Error::new(
                    error.current_context().to_string(),
                ))
            }
        }
    }
}

pub fn schema(state: AppState) -> GatewaySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql_handler(
    schema: actix_web::web::Data<GatewaySchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}
