use std::future::Future;

use super::config::PaginationConfig;
use super::error::PaginationError;
use super::page::{Fetched, Page};
use super::range::OffsetRange;
use super::sort::Sort;

/// Validated page number, size and the sorts to append
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    number: u64,
    size: u64,
    sorts: Vec<Sort>,
}

impl PageRequest {
    pub fn new(number: i64, size: i64, sorts: Vec<Sort>) -> Result<Self, PaginationError> {
        if number < 1 {
            return Err(PaginationError::InvalidPageNumber(number));
        }
        if size < 1 {
            return Err(PaginationError::InvalidPageSize(size));
        }

        Ok(Self {
            number: number as u64,
            size: size as u64,
            sorts,
        })
    }

    /// Fills the missing size and sorts from the model defaults
    pub fn with_defaults(
        config: &PaginationConfig,
        number: i64,
        size: Option<i64>,
        sorts: Option<Vec<Sort>>,
    ) -> Result<Self, PaginationError> {
        let size = size.unwrap_or_else(|| i64::try_from(config.default_page_size).unwrap_or(i64::MAX));
        let sorts = sorts.unwrap_or_else(|| config.default_sorts.clone());
        Self::new(number, size, sorts)
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sorts(&self) -> &[Sort] {
        &self.sorts
    }

    pub fn range(&self) -> Result<OffsetRange, PaginationError> {
        OffsetRange::for_page(self.number, self.size)
    }

    pub fn into_page<T>(self, fetched: Fetched<T>) -> Page<T> {
        Page {
            number: self.number,
            size: self.size,
            total: fetched.total,
            items: fetched.items,
        }
    }
}

/// A query that can run one bounded, sorted fetch
pub trait PageSource {
    type Item;
    type Error: From<PaginationError>;

    /// Sorts already attached to the query, in application order
    fn sorts_mut(&mut self) -> &mut Vec<Sort>;

    /// Rows inside `range` plus the total count of matching rows
    fn fetch(&mut self, range: OffsetRange) -> Result<Fetched<Self::Item>, Self::Error>;
}

pub fn paginate<S>(source: &mut S, request: PageRequest) -> Result<Page<S::Item>, S::Error>
where
    S: PageSource + ?Sized,
{
    let range = request.range()?;
    source.sorts_mut().extend(request.sorts.iter().cloned());

    log::debug!(
        "Fetching page {} (rows {}..{})",
        request.number,
        range.lower,
        range.upper
    );
    let fetched = source.fetch(range)?;

    Ok(request.into_page(fetched))
}

/// Asynchronous form: `fetch` receives the range and the sorts to apply
pub async fn paginate_with<T, E, F, Fut>(request: PageRequest, fetch: F) -> Result<Page<T>, E>
where
    E: From<PaginationError>,
    F: FnOnce(OffsetRange, Vec<Sort>) -> Fut,
    Fut: Future<Output = Result<Fetched<T>, E>>,
{
    let range = request.range()?;
    let fetched = fetch(range, request.sorts.clone()).await?;
    Ok(request.into_page(fetched))
}

pub trait PaginateExt: PageSource {
    fn paginate(
        &mut self,
        config: &PaginationConfig,
        number: i64,
        size: Option<i64>,
        sorts: Option<Vec<Sort>>,
    ) -> Result<Page<Self::Item>, Self::Error> {
        let request = PageRequest::with_defaults(config, number, size, sorts)?;
        paginate(self, request)
    }
}

impl<S: PageSource + ?Sized> PaginateExt for S {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Serves `rows` and records every range it was asked for
    pub(crate) struct RecordingSource {
        pub rows: Vec<u32>,
        pub sorts: Vec<Sort>,
        pub requested: Vec<OffsetRange>,
    }

    impl RecordingSource {
        pub fn new(count: u32) -> Self {
            Self {
                rows: (1..=count).collect(),
                sorts: Vec::new(),
                requested: Vec::new(),
            }
        }
    }

    impl PageSource for RecordingSource {
        type Item = u32;
        type Error = PaginationError;

        fn sorts_mut(&mut self) -> &mut Vec<Sort> {
            &mut self.sorts
        }

        fn fetch(&mut self, range: OffsetRange) -> Result<Fetched<u32>, PaginationError> {
            self.requested.push(range);
            let items = self
                .rows
                .iter()
                .skip(range.lower as usize)
                .take(range.len() as usize)
                .copied()
                .collect();
            Ok(Fetched::new(items, self.rows.len() as u64))
        }
    }

    #[derive(Debug, PartialEq)]
    enum StoreError {
        Pagination(PaginationError),
        Offline,
    }

    impl From<PaginationError> for StoreError {
        fn from(err: PaginationError) -> Self {
            StoreError::Pagination(err)
        }
    }

    struct OfflineSource {
        sorts: Vec<Sort>,
    }

    impl PageSource for OfflineSource {
        type Item = u32;
        type Error = StoreError;

        fn sorts_mut(&mut self) -> &mut Vec<Sort> {
            &mut self.sorts
        }

        fn fetch(&mut self, _range: OffsetRange) -> Result<Fetched<u32>, StoreError> {
            Err(StoreError::Offline)
        }
    }

    #[test]
    fn test_first_page_of_25() {
        let mut source = RecordingSource::new(25);
        let request = PageRequest::new(1, 10, Vec::new()).unwrap();

        let page = paginate(&mut source, request).unwrap();

        assert_eq!(source.requested, vec![OffsetRange { lower: 0, upper: 10 }]);
        assert_eq!(page.number, 1);
        assert_eq!(page.size, 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.items, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_last_page() {
        let mut source = RecordingSource::new(25);
        let request = PageRequest::new(3, 10, Vec::new()).unwrap();

        let page = paginate(&mut source, request).unwrap();

        assert_eq!(source.requested, vec![OffsetRange { lower: 20, upper: 30 }]);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        assert_eq!(
            PageRequest::new(0, 10, Vec::new()),
            Err(PaginationError::InvalidPageNumber(0))
        );
        assert_eq!(
            PageRequest::new(-4, 10, Vec::new()),
            Err(PaginationError::InvalidPageNumber(-4))
        );
    }

    #[test]
    fn test_invalid_page_issues_no_fetch() {
        let mut source = RecordingSource::new(25);
        let config = PaginationConfig::default();

        let result = source.paginate(&config, 0, Some(10), None);

        assert_eq!(result, Err(PaginationError::InvalidPageNumber(0)));
        assert!(source.requested.is_empty());
        assert!(source.sorts.is_empty());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(
            PageRequest::new(1, 0, Vec::new()),
            Err(PaginationError::InvalidPageSize(0))
        );
    }

    #[test]
    fn test_sorts_are_appended_after_existing() {
        let mut source = RecordingSource::new(5);
        source.sorts.push(Sort::asc("name"));
        let request = PageRequest::new(1, 2, vec![Sort::desc("created_at"), Sort::asc("name")]).unwrap();

        paginate(&mut source, request).unwrap();

        assert_eq!(
            source.sorts,
            vec![Sort::asc("name"), Sort::desc("created_at"), Sort::asc("name")]
        );
    }

    #[test]
    fn test_same_request_yields_same_page() {
        let request = PageRequest::new(2, 7, Vec::new()).unwrap();

        let first = paginate(&mut RecordingSource::new(40), request.clone()).unwrap();
        let second = paginate(&mut RecordingSource::new(40), request).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_defaults_come_from_config() {
        let mut source = RecordingSource::new(50);
        let config = PaginationConfig::new()
            .with_page_size(20)
            .with_sort(Sort::desc("id"));

        let page = source.paginate(&config, 2, None, None).unwrap();

        assert_eq!(page.size, 20);
        assert_eq!(page.items.first(), Some(&21));
        assert_eq!(source.sorts, vec![Sort::desc("id")]);
    }

    #[test]
    fn test_huge_default_size_does_not_wrap() {
        let config = PaginationConfig::new().with_page_size(u64::MAX);

        let request = PageRequest::with_defaults(&config, 1, None, None).unwrap();

        assert_eq!(request.size(), i64::MAX as u64);
    }

    #[test]
    fn test_explicit_sorts_replace_config_defaults() {
        let mut source = RecordingSource::new(5);
        let config = PaginationConfig::new().with_sort(Sort::desc("id"));

        source
            .paginate(&config, 1, None, Some(vec![Sort::asc("title")]))
            .unwrap();

        assert_eq!(source.sorts, vec![Sort::asc("title")]);
    }

    #[test]
    fn test_source_errors_pass_through() {
        let mut source = OfflineSource { sorts: Vec::new() };
        let request = PageRequest::new(1, 10, Vec::new()).unwrap();

        assert_eq!(paginate(&mut source, request), Err(StoreError::Offline));
    }

    #[tokio::test]
    async fn test_async_fetch_builds_page() {
        let rows: Vec<u32> = (1..=25).collect();
        let request = PageRequest::new(3, 10, vec![Sort::asc("id")]).unwrap();

        let page = paginate_with(request, |range, sorts| async move {
            assert_eq!(sorts, vec![Sort::asc("id")]);
            let items = rows[range.lower as usize..(range.upper as usize).min(rows.len())].to_vec();
            Ok::<_, PaginationError>(Fetched::new(items, rows.len() as u64))
        })
        .await
        .unwrap();

        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
    }

    #[tokio::test]
    async fn test_async_fetch_error_is_unchanged() {
        let request = PageRequest::new(1, 10, Vec::new()).unwrap();

        let result: Result<Page<u32>, StoreError> =
            paginate_with(request, |_, _| async { Err(StoreError::Offline) }).await;

        assert_eq!(result, Err(StoreError::Offline));
    }
}
