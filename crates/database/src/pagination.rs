use sea_orm::{ColumnTrait, QueryFilter, QueryOrder, QuerySelect};

pub const DEFAULT_PAGE_SIZE: u64 = 50;
pub const MAX_PAGE_SIZE: u64 = 500;

pub fn page_size(count: Option<u64>) -> u64 {
    count.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Keyset pagination over a monotonic key, newest first.
///
/// `key` is the last key of the previous page. `Some(0)` marks the end of
/// pagination, even though `0` is a valid key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingOptions {
    pub key: Option<i64>,
    pub page_size: u64,
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self {
            key: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PagingOptions {
    pub fn new(key: Option<i64>, count: Option<u64>) -> Self {
        Self {
            key,
            page_size: page_size(count),
        }
    }

    pub fn first_page(count: Option<u64>) -> Self {
        Self::new(None, count)
    }

    pub fn is_exhausted(&self) -> bool {
        self.key == Some(0)
    }

    pub fn limit(&self) -> u64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }

    /// Cursor for the page after `items`, `None` once a short page was returned.
    pub fn next_page<T>(&self, items: &[T], key: impl Fn(&T) -> i64) -> Option<PagingOptions> {
        if items.is_empty() || (items.len() as u64) < self.limit() {
            return None;
        }
        items.last().map(|last| PagingOptions {
            key: Some(key(last)),
            page_size: self.page_size,
        })
    }
}

/// Applies `key < cursor`, descending order on `key_column` and the page limit.
pub(crate) fn paginate_desc<Q, C>(query: Q, key_column: C, paging: &PagingOptions) -> Q
where
    Q: QueryFilter + QueryOrder + QuerySelect,
    C: ColumnTrait,
{
    let query = match paging.key {
        Some(key) => query.filter(key_column.lt(key)),
        None => query,
    };

    query.order_by_desc(key_column).limit(paging.limit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(page_size(Some(0)), 1);
        assert_eq!(page_size(Some(10_000)), MAX_PAGE_SIZE);
        assert_eq!(page_size(Some(2)), 2);
    }

    #[test]
    fn zero_key_marks_the_last_page() {
        assert!(PagingOptions::new(Some(0), None).is_exhausted());
        assert!(!PagingOptions::new(Some(1), None).is_exhausted());
        assert!(!PagingOptions::first_page(None).is_exhausted());
    }

    #[test]
    fn next_page_only_after_a_full_page() {
        let paging = PagingOptions::first_page(Some(2));
        let next = paging.next_page(&[10i64, 9], |index| *index);
        assert_eq!(next, Some(PagingOptions::new(Some(9), Some(2))));

        assert_eq!(paging.next_page(&[8i64], |index| *index), None);
        assert_eq!(paging.next_page::<i64>(&[], |index| *index), None);
    }
}
