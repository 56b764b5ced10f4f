use serde::Serialize;
use utoipa::ToSchema;

/// Normalized page/pageSize pair taken from a list query.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(20).clamp(1, 100),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    #[serde(rename = "pageSize")]
    pub page_size: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, params: &PageRequest, total: u64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(params.page_size)
        };
        Self {
            items,
            total,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_defaults() {
        let params = PageRequest::new(None, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
        assert_eq!(params.offset(), 0);
        assert_eq!(params.limit(), 20);
    }

    #[test]
    fn page_request_offset() {
        let params = PageRequest::new(Some(3), Some(10));
        assert_eq!(params.offset(), 20);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn page_request_clamps_bad_input() {
        let params = PageRequest::new(Some(0), Some(10_000));
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 100);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PageRequest::new(Some(1), Some(20));
        let page = PaginatedResponse::new(vec![0u8; 20], &params, 41);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let params = PageRequest::new(None, None);
        let page = PaginatedResponse::<u8>::new(vec![], &params, 0);
        assert_eq!(page.total_pages, 1);
    }
}
