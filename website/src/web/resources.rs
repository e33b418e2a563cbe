use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use core::result::Result as CoreResult;
use tracing::error;

use crate::error::ErrorResponse;
use crate::models::PaginationFormData;
use crate::run::AppState;
use crate::services::orgs::fetch_organizations;

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch organizations";

/// Follow-up page requests from the organizations table.
///
/// Query level errors are passed through as they are, with their `isError` flag.
pub async fn orgs_resource_handler(
    method: Method,
    State(state): State<AppState>,
    payload: CoreResult<Form<PaginationFormData>, FormRejection>,
) -> Response {
    if method != Method::POST {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(ErrorResponse {
                error: "Method not allowed".to_string(),
            }),
        )
            .into_response();
    }

    let form = payload.map(|Form(data)| data).unwrap_or_default();
    let req = form.to_page_request();

    match fetch_organizations(&state.db, &req).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            error!("Unable to fetch organizations: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: FETCH_ERROR_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}
