/// One page of records plus the page count the source reported alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageData<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}
