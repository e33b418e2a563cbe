use axum::http::HeaderMap;
use axum::response::Response;
use axum::routing::{any, get};
use axum::{Router, middleware};
use tracing::error;

use crate::error::ErrorInfo;
use crate::run::AppState;

use super::{
    handle_error, health_live_handler, health_ready_handler, index_handler, not_found_handler,
    orgs_page_change_handler, orgs_page_handler, orgs_page_pending_handler, orgs_resource_handler,
};

pub fn all_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .merge(org_routes(state.clone()))
        .merge(resource_routes(state.clone()))
        .route("/health/liveness", get(health_live_handler))
        .route("/health/readiness", get(health_ready_handler))
        .fallback(any(not_found_handler))
        .layer(middleware::map_response(response_mapper))
        .with_state(state)
}

fn org_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/organizations", get(orgs_page_handler))
        .route(
            "/organizations/page",
            get(orgs_page_pending_handler).post(orgs_page_change_handler),
        )
        .with_state(state)
}

fn resource_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/resources/organizations", any(orgs_resource_handler))
        .with_state(state)
}

async fn response_mapper(headers: HeaderMap, res: Response) -> Response {
    let error = res.extensions().get::<ErrorInfo>();
    if let Some(e) = error {
        if e.status_code.is_server_error() {
            error!("{}", e.message);
            if let Some(bt) = &e.backtrace {
                error!("{}", bt);
            }
        }

        let full_page = headers.get("HX-Request").is_none();
        return handle_error(e.clone(), full_page);
    }
    res
}
