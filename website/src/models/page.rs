use dto::org::{OrgCountDto, OrgDto};
use dto::pagination::{PAGE_SIZE, PageRequestDto, total_pages};
use dto::query::QueryResultDto;

use crate::services::orgs::LoaderData;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Pending,
    Resolved(Vec<OrgDto>),
    Failed(String),
}

/// State behind the organizations table.
///
/// The total count comes from the initial load only. Page changes never
/// refresh it, so it can go stale if organizations change in the meantime.
#[derive(Clone, Debug)]
pub struct OrgsPageState {
    pub page: i64,
    pub per_page: i64,
    pub total_records: i64,
    pub load: LoadState,
}

impl OrgsPageState {
    pub fn new(page: i64, total_records: i64) -> Self {
        Self {
            page,
            per_page: PAGE_SIZE,
            total_records,
            load: LoadState::Pending,
        }
    }

    pub fn from_loader(data: LoaderData) -> Self {
        match data {
            LoaderData::Success {
                organizations,
                organizations_count,
            } => {
                let mut state = Self::new(1, count_of(&organizations_count));
                if let Some(msg) = organizations_count.error_message() {
                    state.load = LoadState::Failed(msg.to_string());
                } else {
                    state.resolve(organizations);
                }
                state
            }
            LoaderData::Failure { error } => {
                let mut state = Self::new(1, 0);
                state.load = LoadState::Failed(error);
                state
            }
        }
    }

    /// Moves to `page` right away and returns the request that fetches it
    pub fn change_page(&mut self, page: i64) -> PageRequestDto {
        self.page = page;
        self.load = LoadState::Pending;
        PageRequestDto::for_page(page, self.per_page)
    }

    pub fn resolve(&mut self, result: QueryResultDto<OrgDto>) {
        self.load = match result.error_message() {
            Some(msg) => LoadState::Failed(msg.to_string()),
            None => LoadState::Resolved(result.data),
        };
    }

    pub fn fail(&mut self, message: &str) {
        self.load = LoadState::Failed(message.to_string());
    }

    pub fn total_pages(&self) -> i64 {
        total_pages(self.total_records, self.per_page)
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Pending
    }

    pub fn prev_disabled(&self) -> bool {
        self.is_loading() || self.page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.is_loading() || self.page >= self.total_pages()
    }
}

fn count_of(result: &QueryResultDto<OrgCountDto>) -> i64 {
    result.data.first().map(|c| c.count).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: i32) -> OrgDto {
        OrgDto {
            id,
            name: format!("Org {}", id),
            industry: "Energy".to_string(),
            address: "1 Main St".to_string(),
            phone: "555-0100".to_string(),
            email: "org@example.com".to_string(),
            subscription_tier: "enterprise".to_string(),
            created_at: 0,
        }
    }

    fn loaded(rows: Vec<OrgDto>, total: i64) -> OrgsPageState {
        OrgsPageState::from_loader(LoaderData::Success {
            organizations: QueryResultDto::ok(rows),
            organizations_count: QueryResultDto::ok(vec![OrgCountDto { count: total }]),
        })
    }

    #[test]
    fn test_from_loader_success() {
        let state = loaded(vec![org(1), org(2)], 25);
        assert_eq!(state.page, 1);
        assert_eq!(state.total_records, 25);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.load, LoadState::Resolved(vec![org(1), org(2)]));
    }

    #[test]
    fn test_from_loader_failure() {
        let state = OrgsPageState::from_loader(LoaderData::Failure {
            error: "Failed to load organizations".to_string(),
        });
        assert_eq!(
            state.load,
            LoadState::Failed("Failed to load organizations".to_string())
        );
        assert_eq!(state.total_records, 0);
    }

    #[test]
    fn test_from_loader_query_error() {
        let state = OrgsPageState::from_loader(LoaderData::Success {
            organizations: QueryResultDto::error("no such table"),
            organizations_count: QueryResultDto::ok(vec![OrgCountDto { count: 3 }]),
        });
        assert_eq!(state.load, LoadState::Failed("no such table".to_string()));
    }

    #[test]
    fn test_from_loader_count_error() {
        let state = OrgsPageState::from_loader(LoaderData::Success {
            organizations: QueryResultDto::ok(vec![org(1)]),
            organizations_count: QueryResultDto::error("count failed"),
        });
        assert_eq!(state.load, LoadState::Failed("count failed".to_string()));
    }

    #[test]
    fn test_change_page_is_optimistic() {
        let mut state = loaded(vec![org(1)], 25);
        let req = state.change_page(3);

        assert_eq!(req, PageRequestDto::new(10, 20));
        assert_eq!(state.page, 3);
        assert!(state.is_loading());
        assert!(state.prev_disabled());
        assert!(state.next_disabled());
    }

    #[test]
    fn test_resolve_keeps_total() {
        let mut state = loaded(vec![org(1)], 25);
        state.change_page(2);
        state.resolve(QueryResultDto::ok(vec![org(11)]));

        assert_eq!(state.total_records, 25);
        assert_eq!(state.load, LoadState::Resolved(vec![org(11)]));
    }

    #[test]
    fn test_resolve_query_error() {
        let mut state = loaded(vec![org(1)], 25);
        state.change_page(2);
        state.resolve(QueryResultDto::error("database is locked"));

        assert_eq!(state.load, LoadState::Failed("database is locked".to_string()));
    }

    #[test]
    fn test_out_of_range_page_is_not_validated() {
        let mut state = loaded(vec![org(1)], 25);
        let req = state.change_page(7);
        assert_eq!(req.offset, 60);
        assert_eq!(state.page, 7);
    }

    #[test]
    fn test_navigation_disabled_states() {
        let mut state = loaded(vec![org(1)], 25);
        assert!(state.prev_disabled());
        assert!(!state.next_disabled());

        state.change_page(2);
        state.resolve(QueryResultDto::ok(vec![org(11)]));
        assert!(!state.prev_disabled());
        assert!(!state.next_disabled());

        state.change_page(3);
        state.resolve(QueryResultDto::ok(vec![org(21)]));
        assert!(!state.prev_disabled());
        assert!(state.next_disabled());
    }

    #[test]
    fn test_empty_total_disables_both() {
        let state = loaded(Vec::new(), 0);
        assert_eq!(state.total_pages(), 0);
        assert!(state.prev_disabled());
        assert!(state.next_disabled());
    }
}
