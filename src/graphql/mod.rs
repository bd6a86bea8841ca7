//! GraphQL API module for BrewQL
//!
//! Exposes the upstream beer catalog through a typed GraphQL schema. The
//! schema is mounted on the HTTP server at `/graphql`, with a playground at
//! `/graphql` (GET).
//!
//! # Example Queries
//!
//! ```graphql
//! # Look up a beer by id
//! query {
//!   beers(id: "192") {
//!     name
//!     tagline
//!     abv
//!   }
//! }
//!
//! # Search by name and yeast
//! query {
//!   beers(name: "Punk IPA", yeast: "Wyeast") {
//!     name
//!     ingredients {
//!       yeast
//!       hops { name add }
//!     }
//!   }
//! }
//! ```

pub mod query;
pub mod types;

use async_graphql::{EmptyMutation, EmptySubscription, Schema};
use std::sync::Arc;

use crate::upstream::CatalogClient;

use self::query::QueryRoot;

/// The full GraphQL schema type for BrewQL
pub type BrewSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema, injected with the shared upstream client.
///
/// The schema is immutable once built; construct it once at startup and
/// share it across requests.
pub fn build_schema(client: Arc<CatalogClient>) -> BrewSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(client)
        .finish()
}
