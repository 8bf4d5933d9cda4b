use poll_promise::Promise;
use std::sync::Arc;
use tokio::runtime::Runtime;

use crate::error::FetchError;
use crate::models::{PageData, Pokemon};
use crate::pagination::DataSource;

pub type PageResult<T> = Result<PageData<T>, FetchError>;

pub enum AsyncOperation {
    LoadPage(Promise<PageResult<Pokemon>>),
}

/// Run `source.fetch_page(page)` on a worker thread that drives the shared runtime.
pub fn spawn_page_fetch<S>(runtime: Arc<Runtime>, source: Arc<S>, page: u32) -> Promise<PageResult<S::Record>>
where
    S: DataSource + Send + Sync + 'static,
    S::Record: Send + 'static,
{
    Promise::spawn_thread("load_page", move || {
        runtime.block_on(async move {
            source.fetch_page(page).await
        })
    })
}
