//! Pagination types for list operations.

use crate::{PageSampleError, PageSampleResult, PageSource};
use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;
use tracing::debug;

/// A validated request for one page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page_index: i64,
    page_size: usize,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;

    /// Creates a new page request.
    ///
    /// The page index is 1-based and is not checked against any bound;
    /// indexes of 1 or less all address the first window. The page size
    /// must be positive.
    pub fn new(page_index: i64, page_size: i64) -> PageSampleResult<Self> {
        let size = usize::try_from(page_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or(PageSampleError::InvalidPageSize(page_size))?;

        Ok(Self {
            page_index,
            page_size: size,
        })
    }

    /// Creates a request for the first page.
    pub fn first(page_size: i64) -> PageSampleResult<Self> {
        Self::new(1, page_size)
    }

    /// Returns the requested 1-based page index.
    #[must_use]
    pub const fn page_index(&self) -> i64 {
        self.page_index
    }

    /// Returns the maximum number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of leading elements to discard.
    ///
    /// Negative offsets (page index 0 or below) are clamped to zero.
    #[must_use]
    pub fn skip(&self) -> usize {
        if self.page_index <= 1 {
            return 0;
        }
        usize::try_from(self.page_index - 1)
            .map_or(usize::MAX, |preceding| preceding.saturating_mul(self.page_size))
    }

    /// Returns the maximum number of elements to keep after [`skip`](Self::skip).
    #[must_use]
    pub const fn take(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages needed to hold `total_count` elements.
    #[must_use]
    pub fn total_pages(&self, total_count: usize) -> usize {
        total_count.div_ceil(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_index: 1,
            page_size: Self::DEFAULT_SIZE,
        }
    }
}

/// One page of a larger ordered collection.
///
/// The list owns a copy of the page's items and never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedList<T> {
    items: Vec<T>,
    page_index: i64,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

impl<T> PaginatedList<T> {
    /// Builds a page from any ordered sequence.
    ///
    /// The source is traversed exactly once: every element is counted and
    /// only the elements inside the requested window are kept.
    pub fn new<I>(source: I, page_index: i64, page_size: i64) -> PageSampleResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let request = PageRequest::new(page_index, page_size)?;
        Ok(Self::from_request(source, request))
    }

    /// Builds a page from any ordered sequence and an already validated request.
    pub fn from_request<I>(source: I, request: PageRequest) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let skip = request.skip();
        let take = request.take();

        let mut total_count = 0usize;
        let mut items = Vec::new();
        for (position, item) in source.into_iter().enumerate() {
            total_count += 1;
            if position >= skip && items.len() < take {
                items.push(item);
            }
        }

        Self::from_parts(items, request, total_count)
    }

    /// Builds a page from a countable source.
    ///
    /// The source is evaluated twice, once for the total count and once for
    /// the window. Query-backed sources should be materialized first when
    /// evaluation is expensive. Errors from either evaluation are returned
    /// unchanged.
    pub fn from_source<S>(source: &S, page_index: i64, page_size: i64) -> PageSampleResult<Self>
    where
        S: PageSource<T> + ?Sized,
    {
        let request = PageRequest::new(page_index, page_size)?;
        let total_count = source.count()?;
        let mut items = source.window(request.skip(), request.take())?;
        items.truncate(request.take());

        Ok(Self::from_parts(items, request, total_count))
    }

    fn from_parts(items: Vec<T>, request: PageRequest, total_count: usize) -> Self {
        let total_pages = request.total_pages(total_count);

        debug!(
            page_index = request.page_index(),
            page_size = request.page_size(),
            total_count,
            total_pages,
            items = items.len(),
            "Built paginated list"
        );

        Self {
            items,
            page_index: request.page_index(),
            page_size: request.page_size(),
            total_count,
            total_pages,
        }
    }

    /// Returns the items on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns the requested 1-based page index.
    #[must_use]
    pub const fn page_index(&self) -> i64 {
        self.page_index
    }

    /// Returns the maximum number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of elements in the whole source.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns true when the page index is greater than zero.
    ///
    /// This holds for every 1-based page, including the first one.
    #[must_use]
    pub const fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Returns true when `page_index + 1 < total_pages`.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        i64::try_from(self.total_pages)
            .map_or(true, |pages| self.page_index.saturating_add(1) < pages)
    }

    /// Maps the page items to a different type, keeping the page metadata.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedList<U> {
        PaginatedList {
            items: self.items.into_iter().map(f).collect(),
            page_index: self.page_index,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

impl<T> Deref for PaginatedList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> AsRef<[T]> for PaginatedList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for PaginatedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PaginatedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for PaginatedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PaginatedList", 7)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("page_index", &self.page_index)?;
        state.serialize_field("page_size", &self.page_size)?;
        state.serialize_field("total_count", &self.total_count)?;
        state.serialize_field("total_pages", &self.total_pages)?;
        state.serialize_field("has_previous_page", &self.has_previous_page())?;
        state.serialize_field("has_next_page", &self.has_next_page())?;
        state.end()
    }
}

/// Wire form of a page. The navigation flags are derived, so they are
/// accepted and ignored.
#[derive(Deserialize)]
struct RawPaginatedList<T> {
    items: Vec<T>,
    page_index: i64,
    page_size: usize,
    total_count: usize,
    total_pages: usize,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PaginatedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawPaginatedList::<T>::deserialize(deserializer)?;

        if raw.page_size == 0 {
            return Err(de::Error::invalid_value(
                de::Unexpected::Unsigned(0),
                &"a page size greater than zero",
            ));
        }
        if raw.items.len() > raw.page_size {
            return Err(de::Error::invalid_length(
                raw.items.len(),
                &"at most page_size items",
            ));
        }

        Ok(Self {
            items: raw.items,
            page_index: raw.page_index,
            page_size: raw.page_size,
            total_count: raw.total_count,
            total_pages: raw.total_pages,
        })
    }
}

/// Extension trait turning any ordered sequence into a page.
pub trait ToPagedList: IntoIterator + Sized {
    /// Builds the page `page_number` of size `page_size` from this sequence.
    fn to_paged_list(self, page_number: i64, page_size: i64) -> PageSampleResult<PaginatedList<Self::Item>> {
        PaginatedList::new(self, page_number, page_size)
    }
}

impl<I: IntoIterator> ToPagedList for I {}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl PageSource<u32> for FailingSource {
        fn count(&self) -> PageSampleResult<usize> {
            Err(PageSampleError::page_source("connection reset"))
        }

        fn window(&self, _skip: usize, _take: usize) -> PageSampleResult<Vec<u32>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_page_request() {
        let req = PageRequest::new(3, 10).unwrap();
        assert_eq!(req.skip(), 20);
        assert_eq!(req.take(), 10);
    }

    #[test]
    fn test_page_request_rejects_non_positive_size() {
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(PageSampleError::InvalidPageSize(0))
        ));
        assert!(matches!(
            PageRequest::new(1, -5),
            Err(PageSampleError::InvalidPageSize(-5))
        ));
    }

    #[test]
    fn test_page_request_clamps_low_indexes() {
        for index in [1, 0, -1, -100, i64::MIN] {
            let req = PageRequest::new(index, 7).unwrap();
            assert_eq!(req.skip(), 0, "page index {index}");
        }
    }

    #[test]
    fn test_page_request_huge_index_saturates() {
        let req = PageRequest::new(i64::MAX, 1000).unwrap();
        assert_eq!(req.skip(), usize::MAX);
    }

    #[test]
    fn test_page_request_first() {
        let req = PageRequest::first(5).unwrap();
        assert_eq!(req.page_index(), 1);
        assert_eq!(req.skip(), 0);
    }

    #[test]
    fn test_page_request_default() {
        let req = PageRequest::default();
        assert_eq!(req.page_index(), 1);
        assert_eq!(req.page_size(), PageRequest::DEFAULT_SIZE);
    }

    #[test]
    fn test_total_pages_exact_multiple() {
        let req = PageRequest::new(1, 5).unwrap();
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.total_pages(5), 1);
        assert_eq!(req.total_pages(10), 2);
        assert_eq!(req.total_pages(11), 3);
    }

    #[test]
    fn test_second_page_of_duplicates() {
        let ids = vec![1, 2, 3, 3];
        let page = PaginatedList::new(ids, 2, 2).unwrap();
        assert_eq!(page.total_count(), 4);
        assert_eq!(page.total_pages(), 2);
        assert_eq!(page.items(), &[3, 3]);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_first_page_of_five() {
        let page = PaginatedList::new(1..=5, 1, 2).unwrap();
        assert_eq!(page.total_count(), 5);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.items(), &[1, 2]);
        assert!(page.has_next_page());
    }

    #[test]
    fn test_empty_source() {
        for index in [-1, 0, 1, 2, 50] {
            let page = PaginatedList::new(Vec::<u8>::new(), index, 10).unwrap();
            assert_eq!(page.total_count(), 0);
            assert_eq!(page.total_pages(), 0);
            assert!(page.is_empty());
            assert!(!page.has_next_page());
        }
    }

    #[test]
    fn test_page_beyond_last_is_empty() {
        let page = PaginatedList::new(1..=5, 4, 2).unwrap();
        assert_eq!(page.total_count(), 5);
        assert_eq!(page.total_pages(), 3);
        assert!(page.is_empty());
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_low_indexes_share_first_window() {
        let first = PaginatedList::new(1..=9, 1, 4).unwrap();
        for index in [0, -1, -7] {
            let page = PaginatedList::new(1..=9, index, 4).unwrap();
            assert_eq!(page.items(), first.items());
            assert_eq!(page.page_index(), index);
        }
    }

    #[test]
    fn test_pages_partition_source() {
        let source: Vec<u32> = (0..23).collect();
        for size in 1..=25 {
            let pages = PageRequest::new(1, size).unwrap().total_pages(source.len());
            let mut seen = Vec::new();
            for index in 1..=pages {
                let page = PaginatedList::new(source.iter().copied(), i64::try_from(index).unwrap(), size).unwrap();
                assert!(page.len() <= page.page_size());
                seen.extend(page.into_items());
            }
            assert_eq!(seen, source, "page size {size}");
        }
    }

    #[test]
    fn test_items_length_invariant() {
        for total in 0..12usize {
            for size in 1..5i64 {
                for index in -1..6i64 {
                    let page = PaginatedList::new(0..total, index, size).unwrap();
                    let skip = PageRequest::new(index, size).unwrap().skip();
                    let expected = total.saturating_sub(skip).min(page.page_size());
                    assert_eq!(page.len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_has_next_page_rule() {
        // 10 items in pages of 2 -> 5 pages
        for index in 1..=6i64 {
            let page = PaginatedList::new(0..10, index, 2).unwrap();
            assert_eq!(page.has_next_page(), index + 1 < 5, "page {index}");
        }
    }

    #[test]
    fn test_has_previous_page_is_true_from_first_page() {
        assert!(PaginatedList::new(0..10, 1, 2).unwrap().has_previous_page());
        assert!(PaginatedList::new(0..10, 3, 2).unwrap().has_previous_page());
        assert!(!PaginatedList::new(0..10, 0, 2).unwrap().has_previous_page());
        assert!(!PaginatedList::new(0..10, -2, 2).unwrap().has_previous_page());
    }

    #[test]
    fn test_invalid_page_size() {
        let err = PaginatedList::new(0..10, 1, 0).unwrap_err();
        assert!(matches!(err, PageSampleError::InvalidPageSize(0)));
    }

    #[test]
    fn test_from_source_matches_single_pass() {
        let source: Vec<u32> = (0..17).collect();
        for size in 1..6 {
            for index in -1..8 {
                let counted = PaginatedList::from_source(&source, index, size).unwrap();
                let streamed = PaginatedList::new(source.iter().copied(), index, size).unwrap();
                assert_eq!(counted, streamed);
            }
        }
    }

    #[test]
    fn test_from_source_on_slice() {
        let source = [10, 20, 30];
        let page = PaginatedList::from_source(&source[..], 2, 2).unwrap();
        assert_eq!(page.items(), &[30]);
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn test_from_source_propagates_errors() {
        let err = PaginatedList::from_source(&FailingSource, 1, 2).unwrap_err();
        assert!(matches!(err, PageSampleError::Source(ref msg) if msg == "connection reset"));
    }

    #[test]
    fn test_from_source_validates_size_first() {
        let err = PaginatedList::from_source(&FailingSource, 1, 0).unwrap_err();
        assert!(matches!(err, PageSampleError::InvalidPageSize(0)));
    }

    #[test]
    fn test_page_map() {
        let page = PaginatedList::new(1..=5, 2, 2).unwrap();
        let mapped = page.map(|x| x * 10);
        assert_eq!(mapped.items(), &[30, 40]);
        assert_eq!(mapped.total_count(), 5);
        assert_eq!(mapped.total_pages(), 3);
        assert_eq!(mapped.page_index(), 2);
    }

    #[test]
    fn test_to_paged_list_extension() {
        let page = vec!["a", "b", "c"].to_paged_list(2, 2).unwrap();
        assert_eq!(page.items(), &["c"]);
    }

    #[test]
    fn test_iteration() {
        let page = PaginatedList::new(1..=4, 1, 3).unwrap();
        let borrowed: Vec<_> = (&page).into_iter().copied().collect();
        assert_eq!(borrowed, vec![1, 2, 3]);
        assert_eq!(page.iter().sum::<i32>(), 6);
        let owned: Vec<_> = page.into_iter().collect();
        assert_eq!(owned, vec![1, 2, 3]);
    }

    #[test]
    fn test_serialize_includes_navigation_flags() {
        let page = PaginatedList::new(1..=5, 1, 2).unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["items"], serde_json::json!([1, 2]));
        assert_eq!(json["total_count"], 5);
        assert_eq!(json["total_pages"], 3);
        assert_eq!(json["has_previous_page"], true);
        assert_eq!(json["has_next_page"], true);
    }

    #[test]
    fn test_deserialize_restores_page() {
        let page = PaginatedList::new(1..=5, 2, 2).unwrap();
        let json = serde_json::to_string(&page).unwrap();

        let restored: PaginatedList<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, page);
        assert!(restored.has_next_page());
    }

    #[test]
    fn test_deserialize_without_navigation_flags() {
        let json = r#"{"items":[3],"page_index":2,"page_size":2,"total_count":3,"total_pages":2}"#;
        let page: PaginatedList<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items(), &[3]);
        assert_eq!(page.total_pages(), 2);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_deserialize_rejects_zero_page_size() {
        let json = r#"{"items":[],"page_index":1,"page_size":0,"total_count":0,"total_pages":0}"#;
        assert!(serde_json::from_str::<PaginatedList<u8>>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_overfull_page() {
        let json = r#"{"items":[1,2,3],"page_index":1,"page_size":2,"total_count":3,"total_pages":2}"#;
        assert!(serde_json::from_str::<PaginatedList<u8>>(json).is_err());
    }
}
