//! Page window over a server-side collection.

use contracts::shared::pagination::{Collection, ListQuery};

pub const DEFAULT_PAGE_LIMIT: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct PageState<E> {
    /// 1-based
    pub current_page: u64,
    pub limit: u64,
    pub total_count: u64,
    /// Offset the server reports for `items`.
    pub offset: u64,
    pub items: Vec<E>,
}

impl<E> Default for PageState<E> {
    fn default() -> Self {
        Self {
            current_page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total_count: 0,
            offset: 0,
            items: Vec::new(),
        }
    }
}

impl<E> PageState<E> {
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.limit)
    }

    /// Query for the current page.
    pub fn query(&self) -> ListQuery {
        self.query_for(self.current_page)
    }

    /// Query for 1-based `page` at the current limit.
    pub fn query_for(&self, page: u64) -> ListQuery {
        ListQuery {
            offset: page.saturating_sub(1) * self.limit,
            limit: self.limit,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Take a fetched page. The server's limit wins unless it is zero.
    pub fn apply(&mut self, page: Collection<E>) {
        self.items = page.items;
        if page.metadata.limit > 0 {
            self.limit = page.metadata.limit;
        }
        self.offset = page.metadata.offset;
        self.total_count = page.metadata.total_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::PageMetadata;

    fn page(items: Vec<u32>, limit: u64, offset: u64, total_count: u64) -> Collection<u32> {
        Collection {
            items,
            metadata: PageMetadata {
                limit,
                offset,
                total_count,
            },
        }
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for limit in 1..=12u64 {
            for total_count in 0..=60u64 {
                let state = PageState::<u32> {
                    limit,
                    total_count,
                    ..Default::default()
                };
                let expected = (total_count as f64 / limit as f64).ceil() as u64;
                assert_eq!(state.total_pages(), expected, "{}/{}", total_count, limit);
            }
        }
    }

    #[test]
    fn test_no_next_on_last_page() {
        for total_count in 1..=40u64 {
            let mut state = PageState::<u32> {
                limit: 7,
                total_count,
                ..Default::default()
            };
            state.current_page = state.total_pages();
            assert!(!state.has_next());
        }
    }

    #[test]
    fn test_empty_collection_has_no_pages() {
        let state = PageState::<u32>::default();
        assert_eq!(state.total_pages(), 0);
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn test_query_offsets() {
        let mut state = PageState::<u32> {
            total_count: 25,
            ..Default::default()
        };
        assert_eq!(state.query(), ListQuery { offset: 0, limit: 10 });
        state.current_page = 3;
        assert_eq!(state.query(), ListQuery { offset: 20, limit: 10 });
        assert_eq!(state.query_for(2), ListQuery { offset: 10, limit: 10 });
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_apply_replaces_page() {
        let mut state = PageState::<u32>::default();
        state.apply(page(vec![1, 2, 3], 10, 0, 3));
        assert_eq!(state.items, vec![1, 2, 3]);
        assert_eq!(state.total_pages(), 1);

        state.apply(page(vec![4], 25, 0, 26));
        assert_eq!(state.items, vec![4]);
        assert_eq!(state.limit, 25);
        assert_eq!(state.total_pages(), 2);
    }

    #[test]
    fn test_apply_ignores_zero_limit() {
        let mut state = PageState::<u32>::default();
        state.apply(page(vec![], 0, 0, 12));
        assert_eq!(state.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(state.total_pages(), 2);
    }
}
