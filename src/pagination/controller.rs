use std::future::Future;

use tracing::{debug, info, warn};

use crate::error::{FetchError, NavigationError};
use crate::models::PageData;
use crate::pagination::window::{render_pagination, PageClick, PageWindowEntry};

/// Paged collection of records, queried by 1-based page number.
///
/// Implementations must be idempotent per page number.
pub trait DataSource {
    type Record;

    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<PageData<Self::Record>, FetchError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    Loading { target_page: u32 },
}

/// Owns the current page, its records and the rendered navigation entries.
///
/// At most one page load is in flight. `begin_*` moves to `Loading` and hands
/// back the page to fetch; `complete` feeds the result back and returns to
/// `Idle`. A failed load leaves the displayed page untouched.
pub struct NavigationController<T> {
    current_page: u32,
    total_pages: u32,
    inner_circle_size: u32,
    state: NavState,
    items: Vec<T>,
    entries: Vec<PageWindowEntry>,
}

impl<T> NavigationController<T> {
    pub fn new(inner_circle_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            inner_circle_size,
            state: NavState::Idle,
            items: Vec::new(),
            entries: render_pagination(1, 1, inner_circle_size),
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, NavState::Loading { .. })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn entries(&self) -> &[PageWindowEntry] {
        &self.entries
    }

    /// Start loading the page a navigation entry points at.
    pub fn begin_navigation(&mut self, click: PageClick) -> Result<u32, NavigationError> {
        if self.is_loading() {
            return Err(NavigationError::Busy);
        }
        let target = match click.target_page {
            Some(page) if !click.disabled && (1..=self.total_pages).contains(&page) => page,
            _ => return Err(NavigationError::InvalidPageRequest(click.target_page)),
        };
        self.state = NavState::Loading { target_page: target };
        Ok(target)
    }

    /// Start loading the current page again.
    pub fn begin_reload(&mut self) -> Result<u32, NavigationError> {
        if self.is_loading() {
            return Err(NavigationError::Busy);
        }
        self.state = NavState::Loading {
            target_page: self.current_page,
        };
        Ok(self.current_page)
    }

    /// Feed back the outcome of the in-flight load.
    pub fn complete(&mut self, result: Result<PageData<T>, FetchError>) -> Result<(), NavigationError> {
        let target = match self.state {
            NavState::Loading { target_page } => target_page,
            NavState::Idle => {
                debug!("Ignoring page result with no load in flight");
                return Ok(());
            }
        };
        self.state = NavState::Idle;

        match result {
            Ok(data) if target > data.total_pages.max(1) => {
                // The records belong to a page that no longer exists. Adopt the
                // new total and keep the displayed page if it is still in range.
                self.total_pages = data.total_pages.max(1);
                if self.current_page > self.total_pages {
                    self.current_page = self.total_pages;
                    self.items.clear();
                }
                self.entries = render_pagination(self.current_page, self.total_pages, self.inner_circle_size);
                warn!(
                    page = target,
                    total_pages = self.total_pages,
                    "Requested page is out of range, keeping page {}",
                    self.current_page
                );
                Err(NavigationError::PageOutOfRange {
                    requested: target,
                    total_pages: self.total_pages,
                })
            }
            Ok(data) => {
                self.total_pages = data.total_pages.max(1);
                self.current_page = target;
                self.items = data.items;
                self.entries = render_pagination(self.current_page, self.total_pages, self.inner_circle_size);
                info!(
                    page = self.current_page,
                    total_pages = self.total_pages,
                    records = self.items.len(),
                    "Page loaded"
                );
                Ok(())
            }
            Err(e) => {
                warn!(page = target, error = %e, "Page load failed, keeping page {}", self.current_page);
                Err(NavigationError::FetchFailure(e))
            }
        }
    }
}
