use serde::{Deserialize, Serialize};

/// Number of organizations shown per page
pub const PAGE_SIZE: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequestDto {
    pub limit: i64,
    pub offset: i64,
}

impl PageRequestDto {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }

    /// Request for a 1-based page number. The page is not range checked,
    /// offsets past the end saturate and yield an empty page.
    pub fn for_page(page: i64, per_page: i64) -> Self {
        Self {
            limit: per_page,
            offset: page.saturating_sub(1).saturating_mul(per_page).max(0),
        }
    }
}

impl Default for PageRequestDto {
    fn default() -> Self {
        Self {
            limit: PAGE_SIZE,
            offset: 0,
        }
    }
}

pub fn total_pages(total_records: i64, per_page: i64) -> i64 {
    if total_records <= 0 || per_page <= 0 {
        return 0;
    }
    let pages = total_records / per_page;
    if total_records % per_page > 0 {
        pages + 1
    } else {
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(25, PAGE_SIZE), 3);
        assert_eq!(total_pages(100, PAGE_SIZE), 10);
    }

    #[test]
    fn test_total_pages_matches_ceiling() {
        for total in 0..250 {
            let expected = (total as f64 / PAGE_SIZE as f64).ceil() as i64;
            assert_eq!(total_pages(total, PAGE_SIZE), expected);
        }
    }

    #[test]
    fn test_page_request_for_page() {
        assert_eq!(PageRequestDto::for_page(1, PAGE_SIZE), PageRequestDto::new(10, 0));
        assert_eq!(PageRequestDto::for_page(3, PAGE_SIZE), PageRequestDto::new(10, 20));
    }

    #[test]
    fn test_page_request_far_out_of_range() {
        let req = PageRequestDto::for_page(i64::MAX, PAGE_SIZE);
        assert_eq!(req.limit, 10);
        assert_eq!(req.offset, i64::MAX);

        let req = PageRequestDto::for_page(i64::MIN, PAGE_SIZE);
        assert_eq!(req.offset, 0);
        assert_eq!(PageRequestDto::for_page(0, PAGE_SIZE).offset, 0);
    }

    #[test]
    fn test_total_pages_huge_total() {
        assert_eq!(total_pages(i64::MAX, PAGE_SIZE), i64::MAX / 10 + 1);
        assert_eq!(total_pages(i64::MAX, 1), i64::MAX);
    }

    #[test]
    fn test_page_request_default() {
        let req = PageRequestDto::default();
        assert_eq!(req.limit, 10);
        assert_eq!(req.offset, 0);
    }
}
