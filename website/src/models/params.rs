use serde::Deserialize;

use dto::pagination::{PAGE_SIZE, PageRequestDto};

/// Form fields accepted by the organizations resource endpoint.
///
/// Values are kept as raw strings so that bad input falls back to defaults
/// instead of rejecting the request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PaginationFormData {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PaginationFormData {
    pub fn to_page_request(&self) -> PageRequestDto {
        PageRequestDto {
            limit: parse_or(self.limit.as_deref(), PAGE_SIZE),
            offset: parse_or(self.offset.as_deref(), 0),
        }
    }
}

/// Non-negative integer or the default
fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 0)
        .unwrap_or(default)
}

/// Page change submitted by the pagination controls
#[derive(Clone, Debug, Deserialize)]
pub struct PageChangeFormData {
    pub page: i64,

    /// Total count known to the page since the initial load
    pub total: i64,
}
