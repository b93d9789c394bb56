//! Offset/limit paging shared by every list endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Default page size.
pub const DEFAULT_LIMIT: usize = 20;
/// Largest page size accepted.
pub const MAX_LIMIT: usize = 100;

/// Requested window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Number of items to skip.
    pub offset: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Limit must be within `1..=MAX_LIMIT`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(ValidationError::out_of_range(
                "limit",
                1,
                MAX_LIMIT as i64,
                self.limit as i64,
            ));
        }
        Ok(())
    }

    /// 1-based page containing `offset`.
    pub fn page(&self) -> usize {
        self.offset / self.limit + 1
    }

    /// Cuts one page out of the full, already ordered listing.
    pub fn paginate<T>(&self, all: Vec<T>) -> Page<T> {
        let total = all.len();
        let items = all.into_iter().skip(self.offset).take(self.limit).collect();
        Page {
            items,
            total,
            page: self.page(),
            limit: self.limit,
            total_pages: (total + self.limit - 1) / self.limit,
        }
    }
}

/// One page of a listing plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matching items before pagination.
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_reports_metadata() {
        let page = PageRequest::new(2, 2).paginate(vec![1, 2, 3, 4, 5]);
        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_listing_has_no_pages() {
        let page = PageRequest::default().paginate(Vec::<u8>::new());
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let page = PageRequest::new(0, 3).paginate(vec!['a'; 6]);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn validate_bounds_limit() {
        assert!(PageRequest::new(0, 1).validate().is_ok());
        assert!(PageRequest::new(0, MAX_LIMIT).validate().is_ok());
        assert!(PageRequest::new(0, 0).validate().is_err());
        assert!(PageRequest::new(0, MAX_LIMIT + 1).validate().is_err());
    }
}
