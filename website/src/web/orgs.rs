use askama::Template;
use axum::{
    Form,
    body::Body,
    extract::{
        Query, State,
        rejection::{FormRejection, QueryRejection},
    },
    response::Response,
};
use chrono::DateTime;
use core::result::Result as CoreResult;
use snafu::ResultExt;
use tracing::error;

use crate::{
    Result,
    error::{FormRejectionSnafu, QueryRejectionSnafu, TemplateSnafu},
    models::{LoadState, OrgsPageState, PageChangeFormData, TemplateData},
    run::AppState,
    services::orgs::{fetch_organizations, load_organizations},
    web::html_response,
};
use dto::org::OrgDto;

use super::resources::FETCH_ERROR_MESSAGE;

/// Table row with display ready values
struct OrgRow {
    id: i32,
    name: String,
    industry: String,
    address: String,
    phone: String,
    email: String,
    subscription_tier: String,
    created_date: String,
}

impl From<&OrgDto> for OrgRow {
    fn from(org: &OrgDto) -> Self {
        Self {
            id: org.id,
            name: org.name.clone(),
            industry: org.industry.clone(),
            address: org.address.clone(),
            phone: org.phone.clone(),
            email: org.email.clone(),
            subscription_tier: org.subscription_tier.clone(),
            created_date: format_date(org.created_at),
        }
    }
}

/// Month/day/year without padding, e.g. 5/1/2024
fn format_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

#[derive(Template)]
#[template(path = "widgets/orgs_table.html")]
struct OrgsTableTemplate {
    rows: Vec<OrgRow>,
    loading: bool,
    error_message: Option<String>,
    page: i64,
    prev_page: i64,
    next_page: i64,
    total_pages: i64,
    total_records: i64,
    prev_disabled: bool,
    next_disabled: bool,
}

#[derive(Template)]
#[template(path = "pages/orgs.html")]
struct OrgsPageTemplate {
    t: TemplateData,
    table: String,
}

/// Renders the organizations table for the given state
pub fn render_orgs_table(state: &OrgsPageState) -> Result<String> {
    let mut tpl = OrgsTableTemplate {
        rows: Vec::new(),
        loading: false,
        error_message: None,
        page: state.page,
        prev_page: state.page.saturating_sub(1),
        next_page: state.page.saturating_add(1),
        total_pages: state.total_pages(),
        total_records: state.total_records,
        prev_disabled: state.prev_disabled(),
        next_disabled: state.next_disabled(),
    };

    match &state.load {
        LoadState::Pending => tpl.loading = true,
        LoadState::Resolved(orgs) => tpl.rows = orgs.iter().map(OrgRow::from).collect(),
        LoadState::Failed(msg) => tpl.error_message = Some(msg.clone()),
    }

    tpl.render().context(TemplateSnafu)
}

pub async fn orgs_page_handler(State(state): State<AppState>) -> Result<Response<Body>> {
    let data = load_organizations(&state.db).await;
    let page_state = OrgsPageState::from_loader(data);

    let tpl = OrgsPageTemplate {
        t: TemplateData::new("Organizations"),
        table: render_orgs_table(&page_state)?,
    };

    html_response(200, tpl.render().context(TemplateSnafu)?)
}

/// Shows the requested page number right away with the loading placeholder.
///
/// The pending table fetches its own rows once it lands in the page.
pub async fn orgs_page_pending_handler(
    payload: CoreResult<Query<PageChangeFormData>, QueryRejection>,
) -> Result<Response<Body>> {
    let Query(data) = payload.context(QueryRejectionSnafu {
        msg: "Invalid page request",
    })?;

    let mut page_state = OrgsPageState::new(data.page, data.total);
    page_state.change_page(data.page);

    html_response(200, render_orgs_table(&page_state)?)
}

/// Swaps in another page of the table, keeping the total the client already has
pub async fn orgs_page_change_handler(
    State(state): State<AppState>,
    payload: CoreResult<Form<PageChangeFormData>, FormRejection>,
) -> Result<Response<Body>> {
    let Form(data) = payload.context(FormRejectionSnafu {
        msg: "Invalid page request",
    })?;

    let mut page_state = OrgsPageState::new(data.page, data.total);
    let req = page_state.change_page(data.page);

    match fetch_organizations(&state.db, &req).await {
        Ok(result) => page_state.resolve(result),
        Err(e) => {
            error!("Unable to fetch organizations: {}", e);
            page_state.fail(FETCH_ERROR_MESSAGE);
        }
    }

    html_response(200, render_orgs_table(&page_state)?)
}
