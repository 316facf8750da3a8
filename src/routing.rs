//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, endpoints,
    logging::logging_middleware,
    transaction::{
        add_entry_endpoint, delete_entry_endpoint, edit_entry_endpoint, list_entries_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Cross-origin requests are allowed from any origin on every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index))
        .route(endpoints::READ_CSV, get(list_entries_endpoint))
        .route(endpoints::ADD_ENTRY, post(add_entry_endpoint))
        .route(endpoints::EDIT_ENTRY, put(edit_entry_endpoint))
        .route(endpoints::DELETE_ENTRY, delete(delete_entry_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// A route handler that reports the service is up.
async fn get_index() -> &'static str {
    "CSV Data API"
}

#[cfg(test)]
mod routing_tests {
    use axum_test::TestServer;
    use tempfile::TempDir;

    use crate::{AppState, CsvStore, build_router, endpoints};

    fn test_server() -> (TempDir, TestServer) {
        let directory = TempDir::new().expect("Could not create temp directory.");
        let store = CsvStore::new(directory.path().join("transactions.csv"));
        store.write_all(&[]).expect("Could not seed CSV file.");

        let server = TestServer::new(build_router(AppState::new(store)));

        (directory, server)
    }

    #[tokio::test]
    async fn root_returns_the_liveness_string() {
        let (_directory, server) = test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status_ok();
        response.assert_text("CSV Data API");
    }

    #[tokio::test]
    async fn responses_allow_any_origin() {
        let (_directory, server) = test_server();

        let response = server
            .get(endpoints::READ_CSV)
            .add_header("origin", "http://example.com")
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("access-control-allow-origin"), "*");
    }

    #[tokio::test]
    async fn unknown_routes_return_404() {
        let (_directory, server) = test_server();

        server.get("/no-such-route").await.assert_status_not_found();
    }
}
