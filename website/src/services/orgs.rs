use serde::Serialize;
use snafu::ResultExt;
use tracing::error;

use crate::Result;
use crate::error::DbSnafu;
use db::db::DbMapper;
use dto::org::{OrgCountDto, OrgDto};
use dto::pagination::{PAGE_SIZE, PageRequestDto};
use dto::query::QueryResultDto;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load organizations";

/// Data for the first render of the organizations page
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum LoaderData {
    Success {
        organizations: QueryResultDto<OrgDto>,

        #[serde(rename = "organizationsCount")]
        organizations_count: QueryResultDto<OrgCountDto>,
    },
    Failure {
        error: String,
    },
}

/// Loads the first page and the total count concurrently.
///
/// If either query fails to run, the whole load fails with a single message.
pub async fn load_organizations(db: &DbMapper) -> LoaderData {
    let first_page = PageRequestDto::for_page(1, PAGE_SIZE);

    let result = tokio::try_join!(
        db.orgs.list(first_page.limit, first_page.offset),
        db.orgs.count()
    );

    match result {
        Ok((organizations, organizations_count)) => LoaderData::Success {
            organizations,
            organizations_count,
        },
        Err(e) => {
            error!("Unable to load organizations: {}", e);
            LoaderData::Failure {
                error: LOAD_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

/// Runs the paginated organizations query with the given bounds
pub async fn fetch_organizations(
    db: &DbMapper,
    req: &PageRequestDto,
) -> Result<QueryResultDto<OrgDto>> {
    db.orgs.list(req.limit, req.offset).await.context(DbSnafu)
}
