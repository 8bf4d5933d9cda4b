use serde::{Deserialize, Serialize};

/// `GET /pokemon?limit=&offset=` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    pub count: u64,
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}
