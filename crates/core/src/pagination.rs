//! Page-number pagination envelope shared by every list endpoint.
//!
//! Pages are 1-based. A request for a page past the end of the data is not an
//! error: it yields an empty `data` sequence while `total` still reports the
//! true count. Zero or negative page numbers and page sizes are caller errors
//! and are rejected, never clamped.

use serde::Serialize;
use thiserror::Error;

/// Caller misuse of the pagination contract.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be a positive integer (got {0})")]
    InvalidPage(i64),

    #[error("limit must be a positive integer (got {0})")]
    InvalidLimit(i64),
}

/// A validated `(page, limit)` pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl PageRequest {
    /// Validate raw query values. The page is checked before the limit.
    pub fn new(page: i64, limit: i64) -> Result<Self, PaginationError> {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p > 0)
            .ok_or(PaginationError::InvalidPage(page))?;
        let limit = u64::try_from(limit)
            .ok()
            .filter(|l| *l > 0)
            .ok_or(PaginationError::InvalidLimit(limit))?;
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Zero-based index of the first item on this page (saturating).
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// A data source capable of windowed retrieval.
///
/// Implement this for anything that can report a total count and return a
/// slice of its items without materializing the whole set.
pub trait PageSource {
    type Item;

    /// Total number of items available.
    fn total(&self) -> u64;

    /// Up to `limit` items starting at `offset`. Offsets past the end return
    /// an empty vector.
    fn fetch(&self, offset: u64, limit: u64) -> Vec<Self::Item>;
}

impl<T: Clone> PageSource for [T] {
    type Item = T;

    fn total(&self) -> u64 {
        self.len() as u64
    }

    fn fetch(&self, offset: u64, limit: u64) -> Vec<T> {
        let start = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        self.iter().skip(start).take(take).cloned().collect()
    }
}

impl<T: Clone> PageSource for Vec<T> {
    type Item = T;

    fn total(&self) -> u64 {
        self.as_slice().total()
    }

    fn fetch(&self, offset: u64, limit: u64) -> Vec<T> {
        self.as_slice().fetch(offset, limit)
    }
}

/// One page of results plus paging metadata.
///
/// Built fresh per request and never mutated; `map` produces a new envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResponse<T> {
    data: Vec<T>,
    total: u64,
    page: u64,
    limit: u64,
}

impl<T> PaginatedResponse<T> {
    /// Page through a fully materialized result set (no cloning).
    pub fn from_items(items: Vec<T>, request: PageRequest) -> Self {
        let total = items.len() as u64;
        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        let data = items.into_iter().skip(start).take(take).collect();
        Self::assemble(data, total, request)
    }

    /// Page through a windowed source, fetching only the requested window.
    pub fn from_source<S>(source: &S, request: PageRequest) -> Self
    where
        S: PageSource<Item = T> + ?Sized,
    {
        let total = source.total();
        let data = if request.offset() >= total {
            Vec::new()
        } else {
            source.fetch(request.offset(), request.limit())
        };
        Self::assemble(data, total, request)
    }

    fn assemble(mut data: Vec<T>, total: u64, request: PageRequest) -> Self {
        // A misbehaving source must not break `|data| <= limit`.
        let cap = usize::try_from(request.limit()).unwrap_or(usize::MAX);
        data.truncate(cap);
        let total = total.max(data.len() as u64);
        Self {
            data,
            total,
            page: request.page(),
            limit: request.limit(),
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Whether items exist beyond this page.
    ///
    /// A non-empty page does not by itself imply more pages; use this instead.
    pub fn has_next(&self) -> bool {
        self.page.saturating_mul(self.limit) < self.total
    }

    /// Transform every item, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn req(page: i64, limit: i64) -> PageRequest {
        PageRequest::new(page, limit).unwrap()
    }

    #[test]
    fn empty_result_set_first_page() {
        let res = PaginatedResponse::<u32>::from_items(Vec::new(), req(1, 10));
        assert!(res.data().is_empty());
        assert_eq!(res.total(), 0);
        assert_eq!(res.page(), 1);
        assert_eq!(res.limit(), 10);
        assert!(!res.has_next());

        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json, serde_json::json!({"data": [], "total": 0, "page": 1, "limit": 10}));
    }

    #[test]
    fn last_partial_page() {
        let items: Vec<u32> = (1..=12).collect();
        let res = PaginatedResponse::from_items(items, req(3, 5));
        assert_eq!(res.data(), &[11, 12]);
        assert_eq!(res.total(), 12);
        assert!(!res.has_next());
    }

    #[test]
    fn page_beyond_data_keeps_true_total() {
        let items: Vec<u32> = (1..=12).collect();
        let res = PaginatedResponse::from_items(items, req(9, 5));
        assert!(res.data().is_empty());
        assert_eq!(res.total(), 12);
    }

    #[test]
    fn full_page_with_more_to_come() {
        let items: Vec<u32> = (1..=12).collect();
        let res = PaginatedResponse::from_items(items, req(1, 5));
        assert_eq!(res.data(), &[1, 2, 3, 4, 5]);
        assert!(res.has_next());
    }

    #[test]
    fn non_positive_page_or_limit_is_rejected() {
        assert_eq!(PageRequest::new(0, 10), Err(PaginationError::InvalidPage(0)));
        assert_eq!(PageRequest::new(-2, 10), Err(PaginationError::InvalidPage(-2)));
        assert_eq!(PageRequest::new(1, 0), Err(PaginationError::InvalidLimit(0)));
        assert_eq!(PageRequest::new(1, -1), Err(PaginationError::InvalidLimit(-1)));
        // Page is reported first when both are wrong.
        assert_eq!(PageRequest::new(0, 0), Err(PaginationError::InvalidPage(0)));
    }

    #[test]
    fn huge_page_saturates_instead_of_overflowing() {
        let items: Vec<u32> = (1..=3).collect();
        let res = PaginatedResponse::from_source(items.as_slice(), req(i64::MAX, i64::MAX));
        assert!(res.data().is_empty());
        assert_eq!(res.total(), 3);
        assert!(!res.has_next());
    }

    #[test]
    fn map_keeps_metadata() {
        let items: Vec<u32> = (1..=7).collect();
        let res = PaginatedResponse::from_items(items, req(2, 3)).map(|n| n.to_string());
        assert_eq!(res.data(), &["4".to_string(), "5".to_string(), "6".to_string()]);
        assert_eq!((res.total(), res.page(), res.limit()), (7, 2, 3));
    }

    struct Oversharing;

    impl PageSource for Oversharing {
        type Item = u8;

        fn total(&self) -> u64 {
            1
        }

        fn fetch(&self, _offset: u64, _limit: u64) -> Vec<u8> {
            vec![0; 8]
        }
    }

    #[test]
    fn source_returning_too_much_is_truncated() {
        let res = PaginatedResponse::from_source(&Oversharing, req(1, 4));
        assert_eq!(res.data().len(), 4);
        assert!(res.total() >= res.data().len() as u64);
    }

    proptest! {
        /// Property: |data| = min(limit, max(0, total - (page-1)*limit)).
        #[test]
        fn page_length_law(total in 0usize..200, page in 1i64..40, limit in 1i64..25) {
            let items: Vec<usize> = (0..total).collect();
            let request = req(page, limit);
            let from_items = PaginatedResponse::from_items(items.clone(), request);
            let from_source = PaginatedResponse::from_source(items.as_slice(), request);

            let before = (page as u64 - 1) * limit as u64;
            let expected = (total as u64).saturating_sub(before).min(limit as u64);

            prop_assert_eq!(from_items.data().len() as u64, expected);
            prop_assert_eq!(&from_items, &from_source);
            prop_assert_eq!(from_items.total(), total as u64);
            prop_assert!(from_items.data().len() as u64 <= from_items.limit());
        }
    }
}
