use thiserror::Error;

/// Network or decoding failure while loading a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Error)]
pub enum NavigationError {
    /// Null, disabled or out-of-range target. Never surfaced to the user.
    #[error("invalid page request: {0:?}")]
    InvalidPageRequest(Option<u32>),
    /// The source now reports fewer pages than the one requested.
    #[error("page {requested} is past the last page ({total_pages})")]
    PageOutOfRange { requested: u32, total_pages: u32 },
    #[error("a page is already loading")]
    Busy,
    #[error("failed to load page: {0}")]
    FetchFailure(#[from] FetchError),
}
