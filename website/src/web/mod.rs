mod health;
mod orgs;
mod resources;
mod routes;

use askama::Template;
use axum::{
    body::Body,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Redirect, Response},
};
use snafu::ResultExt;

use crate::Result;
use crate::error::{ErrorInfo, NotFoundSnafu, ResponseBuilderSnafu};
use crate::models::TemplateData;

pub use health::{health_live_handler, health_ready_handler};
pub use orgs::{
    orgs_page_change_handler, orgs_page_handler, orgs_page_pending_handler, render_orgs_table,
};
pub use resources::orgs_resource_handler;
pub use routes::all_routes;

pub async fn index_handler() -> impl IntoResponse {
    Redirect::to("/organizations")
}

pub async fn not_found_handler() -> Result<Response<Body>> {
    NotFoundSnafu {
        msg: "The page you are looking for does not exist.",
    }
    .fail()
}

#[derive(Template)]
#[template(path = "pages/error.html")]
struct ErrorPageTemplate {
    t: TemplateData,
    error: ErrorInfo,
}

#[derive(Template)]
#[template(path = "widgets/error_message.html")]
struct ErrorMessageTemplate {
    message: String,
}

/// Renders an error as a full page or as a swappable widget
pub fn handle_error(error: ErrorInfo, full_page: bool) -> Response<Body> {
    let status = error.status_code;
    let rendered = if full_page {
        let tpl = ErrorPageTemplate {
            t: TemplateData::new(&error.title),
            error: error.clone(),
        };
        tpl.render()
    } else {
        let tpl = ErrorMessageTemplate {
            message: error.message.clone(),
        };
        tpl.render()
    };

    match rendered {
        Ok(html) => html_response(status.as_u16(), html)
            .unwrap_or_else(|_| (status, error.message).into_response()),
        Err(_) => (status, error.message).into_response(),
    }
}

pub fn html_response(status: u16, html: String) -> Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/html; charset=utf-8")
        .body(Body::from(html))
        .context(ResponseBuilderSnafu)?)
}

