use std::cmp::Ordering;

use async_trait::async_trait;
use tracing::debug;

use ridelink_core::paging::{Page, PageRequest};
use ridelink_core::ApiResult;

/// One server fetch for a given filter and page.
#[async_trait]
pub trait PageFetcher<T, F>: Send + Sync {
    async fn fetch_page(&self, filter: &F, request: PageRequest) -> ApiResult<Page<T>>;
}

/// Rows that can be matched by the local text search.
pub trait Searchable {
    fn search_text(&self) -> String;
}

impl Searchable for String {
    fn search_text(&self) -> String {
        self.clone()
    }
}

/// Local sort over the visible rows of the fetched page.
pub struct SortSpec<T> {
    pub cmp: fn(&T, &T) -> Ordering,
    pub descending: bool,
}

impl<T> Clone for SortSpec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortSpec<T> {}

/// Handle for one in-flight fetch. A ticket whose generation has been
/// superseded is discarded at apply time instead of clobbering state.
#[derive(Debug)]
pub struct FetchTicket<F> {
    generation: u64,
    pub filter: F,
    pub request: PageRequest,
}

/// What apply() did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Fresh page adopted.
    Replaced,
    /// Response belonged to a superseded fetch; state untouched.
    Discarded,
    /// The server's result set shrank below the requested page; the page
    /// index was clamped and the caller should refetch.
    PageOutOfRange,
}

/// Reusable list controller composing one server page fetch with optional
/// client-side text search and sort. The search and sort never substitute
/// for server-side filtering: they see only the fetched page.
pub struct PagedQuery<T, F> {
    filter: F,
    page: u32,
    size: u32,
    search_text: String,
    sort: Option<SortSpec<T>>,
    current: Option<Page<T>>,
    generation: u64,
    loading: bool,
}

impl<T, F: Clone + PartialEq> PagedQuery<T, F> {
    pub fn new(filter: F, size: u32) -> Self {
        Self {
            filter,
            page: 0,
            size,
            search_text: String::new(),
            sort: None,
            current: None,
            generation: 0,
            loading: false,
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current(&self) -> Option<&Page<T>> {
        self.current.as_ref()
    }

    /// Always the server's total for the active filter, never recomputed
    /// from locally filtered counts.
    pub fn total_pages(&self) -> u32 {
        self.current.as_ref().map(|p| p.total_pages).unwrap_or(0)
    }

    /// True while a text search narrows the view to the loaded page only;
    /// callers use this to warn that the search does not span all pages.
    pub fn is_partial_view(&self) -> bool {
        !self.search_text.is_empty()
    }

    /// Switch the server-side filter. Resets to page 0 before the next
    /// fetch and invalidates whatever is still in flight.
    pub fn set_filter(&mut self, filter: F) {
        if filter == self.filter {
            return;
        }
        self.filter = filter;
        self.page = 0;
        self.current = None;
        self.invalidate();
    }

    /// Move to a page of the already-fetched filter. Page 0 must have been
    /// fetched first; out-of-range indices clamp to the last known page.
    pub fn set_page(&mut self, page: u32) {
        let bounded = match &self.current {
            None => 0,
            Some(current) if current.total_pages == 0 => 0,
            Some(current) => page.min(current.total_pages - 1),
        };
        if bounded == self.page {
            return;
        }
        self.page = bounded;
        self.invalidate();
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.set_page(self.page.saturating_sub(1));
    }

    /// Local-only: narrows the visible rows, triggers no fetch.
    pub fn set_search(&mut self, text: &str) {
        self.search_text = text.trim().to_string();
    }

    /// Local-only: orders the visible rows, triggers no fetch.
    pub fn set_sort(&mut self, sort: Option<SortSpec<T>>) {
        self.sort = sort;
    }

    /// Drop any in-flight fetch, e.g. when the owning screen unmounts. Its
    /// response will be discarded at apply time.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.loading = false;
    }

    /// Start a fetch for the current filter/page. Supersedes every earlier
    /// ticket.
    pub fn begin_fetch(&mut self) -> FetchTicket<F> {
        self.generation = self.generation.wrapping_add(1);
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            filter: self.filter.clone(),
            request: PageRequest::new(self.page, self.size),
        }
    }

    /// Apply a fetch outcome. Stale tickets are discarded whether they
    /// carry a page or an error; a fresh error propagates with state
    /// unchanged.
    pub fn apply(&mut self, ticket: FetchTicket<F>, result: ApiResult<Page<T>>) -> ApiResult<Applied> {
        if ticket.generation != self.generation {
            debug!("discarding response for superseded fetch (page {})", ticket.request.page);
            return Ok(Applied::Discarded);
        }
        self.loading = false;

        let page = result?;
        if page.total_pages > 0 && page.page >= page.total_pages && page.page > 0 {
            // The result set shrank while we were away; snap back
            self.page = page.total_pages - 1;
            return Ok(Applied::PageOutOfRange);
        }
        self.current = Some(page);
        Ok(Applied::Replaced)
    }

    /// One network fetch per invocation.
    pub async fn refresh<P>(&mut self, api: &P) -> ApiResult<Applied>
    where
        P: PageFetcher<T, F> + ?Sized,
    {
        let ticket = self.begin_fetch();
        let result = api.fetch_page(&ticket.filter, ticket.request).await;
        self.apply(ticket, result)
    }

    /// The fetched page narrowed by the local search and ordered by the
    /// local sort.
    pub fn visible_rows(&self) -> Vec<&T>
    where
        T: Searchable,
    {
        let mut rows: Vec<&T> = match &self.current {
            None => Vec::new(),
            Some(page) => {
                if self.search_text.is_empty() {
                    page.content.iter().collect()
                } else {
                    let needle = self.search_text.to_lowercase();
                    page.content
                        .iter()
                        .filter(|row| row.search_text().to_lowercase().contains(&needle))
                        .collect()
                }
            }
        };

        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = (sort.cmp)(a, b);
                if sort.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        rows
    }
}
