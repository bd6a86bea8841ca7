//! GraphQL query resolvers
//!
//! The single entry point is `beers`, which forwards its filter arguments to
//! the upstream catalog and returns the parsed response as-is.

use async_graphql::{Context, Object, Result, ID};
use std::sync::Arc;
use tracing::debug;

use crate::graphql::types::Beer;
use crate::upstream::{CatalogClient, ParamValue, QueryParams};

/// GraphQL Query root
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Look up beers by id or by free-text filters.
    ///
    /// When `id` is given it takes precedence and all other arguments are
    /// ignored; by-id lookups are normalized to a one-element list. Otherwise
    /// the provided filters are forwarded to the upstream catalog search.
    async fn beers(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Catalog id; takes precedence over all filters")] id: Option<ID>,
        #[graphql(desc = "Beer name filter")] name: Option<String>,
        #[graphql(desc = "Yeast strain filter")] yeast: Option<String>,
        #[graphql(desc = "Hop variety filter")] hops: Option<String>,
        #[graphql(desc = "Malt variety filter")] malt: Option<String>,
    ) -> Result<Vec<Beer>> {
        let client = ctx.data::<Arc<CatalogClient>>()?;

        debug!(?id, ?name, ?yeast, ?hops, ?malt, "resolving beers query");

        if let Some(id) = id {
            return client
                .beer_by_id(&id.0)
                .await
                .map_err(|e| async_graphql::Error::new(e.to_string()));
        }

        let mut params = QueryParams::new();
        if let Some(name) = name {
            params.push("name", ParamValue::text(name));
        }
        if let Some(yeast) = yeast {
            params.push("yeast", ParamValue::text(yeast));
        }
        if let Some(hops) = hops {
            params.push("hops", ParamValue::text(hops));
        }
        if let Some(malt) = malt {
            params.push("malt", ParamValue::text(malt));
        }

        client
            .search(&params)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
