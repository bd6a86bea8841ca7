//! HTTP serving layer for BrewQL

mod graphql_routes;
mod http;

pub use graphql_routes::{create_graphql_router, GraphQLState};
pub use http::{create_router, run};
