mod client;
mod models;
mod operations;

pub use client::PokeApi;
pub use operations::{spawn_page_fetch, AsyncOperation, PageResult};
