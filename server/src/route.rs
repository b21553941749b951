mod book;

pub use self::book::*;

use crate::handler::AppModule;
use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, Schema};
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};

pub type CatalogSchema = Schema<BookQueryRoot, BookMutationRoot, EmptySubscription>;

pub fn build_schema(module: AppModule) -> CatalogSchema {
    Schema::build(BookQueryRoot, BookMutationRoot, EmptySubscription)
        .data(module)
        .finish()
}

pub trait GraphQLRouter {
    fn route_graphql(self) -> Self;
}

impl GraphQLRouter for Router<CatalogSchema> {
    fn route_graphql(self) -> Self {
        self.route(
            "/",
            get(|| async { Html(GraphiQLSource::build().endpoint("/").finish()) }).post(
                |State(schema): State<CatalogSchema>,
                 Json(req): Json<async_graphql::Request>| async move {
                    Json(schema.execute(req).await)
                },
            ),
        )
    }
}
