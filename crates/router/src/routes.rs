pub mod app;
pub mod graphql;
pub mod health;
pub mod payments;
pub mod tokenization;

pub use app::{AppState, GraphQL, Health, Payments, Tokens};
