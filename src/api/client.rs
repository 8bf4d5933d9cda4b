use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::api::models::ListResponse;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::{PageData, Pokemon};
use crate::pagination::{total_pages, DataSource};

/// PokeAPI-backed page source.
pub struct PokeApi {
    client: reqwest::Client,
    base_url: String,
    page_size: u32,
    max_records: Option<u32>,
}

impl PokeApi {
    pub fn new(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size.max(1),
            max_records: config.max_records,
        }
    }

    /// `(offset, limit)` for a 1-based page, with the limit cut at `max_records`.
    fn page_bounds(&self, page: u32) -> (u64, u64) {
        let page_size = u64::from(self.page_size);
        let offset = u64::from(page.saturating_sub(1)) * page_size;
        let limit = match self.max_records {
            Some(max) => u64::from(max).saturating_sub(offset).min(page_size),
            None => page_size,
        };
        (offset, limit)
    }

    pub async fn load_page(&self, page: u32) -> Result<PageData<Pokemon>, FetchError> {
        let (offset, limit) = self.page_bounds(page);
        // limit=0 makes the API fall back to its own default, so ask for one and drop it.
        let url = format!("{}/pokemon?limit={}&offset={}", self.base_url, limit.max(1), offset);
        let mut list: ListResponse = self.get_json(&url).await?;
        list.results.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        debug!(
            count = list.count,
            first = list.results.first().map(|r| r.name.as_str()),
            "Listed page {}",
            page
        );

        let details: Vec<serde_json::Value> =
            try_join_all(list.results.iter().map(|r| self.get_json(&r.url))).await?;

        let total_items = match self.max_records {
            Some(max) => list.count.min(u64::from(max)),
            None => list.count,
        };

        Ok(PageData {
            items: details.iter().map(Pokemon::from_json).collect(),
            total_pages: total_pages(total_items, self.page_size),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(FetchError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| FetchError::Malformed(format!("{}: {}", url, e)))
    }
}

impl DataSource for PokeApi {
    type Record = Pokemon;

    fn fetch_page(&self, page: u32) -> impl Future<Output = Result<PageData<Pokemon>, FetchError>> + Send {
        self.load_page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer, page_size: u32, max_records: Option<u32>) -> PokeApi {
        PokeApi::new(&Config {
            api_base_url: server.uri(),
            page_size,
            max_records,
            ..Config::default()
        })
    }

    async fn mount_detail(server: &MockServer, id: u32, name: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/pokemon/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "name": name,
                "height": 7,
                "weight": 69,
                "types": [{"slot": 1, "type": {"name": "grass"}}],
                "sprites": {"front_default": null, "back_default": null},
                "stats": [{"base_stat": 45, "stat": {"name": "hp"}}],
                "abilities": [],
                "moves": []
            })))
            .mount(server)
            .await;
    }

    fn list_body(server: &MockServer, count: u64, ids: &[(u32, &str)]) -> serde_json::Value {
        let results: Vec<_> = ids
            .iter()
            .map(|(id, name)| json!({"name": name, "url": format!("{}/pokemon/{}", server.uri(), id)}))
            .collect();
        json!({"count": count, "next": null, "previous": null, "results": results})
    }

    #[tokio::test]
    async fn test_load_page_happy_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .and(query_param("limit", "2"))
            .and(query_param("offset", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(list_body(&server, 1302, &[(3, "venusaur"), (4, "charmander")])),
            )
            .mount(&server)
            .await;
        mount_detail(&server, 3, "venusaur").await;
        mount_detail(&server, 4, "charmander").await;

        let api = api_for(&server, 2, None);
        let page = api.fetch_page(2).await.expect("page loads");

        let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["venusaur", "charmander"]);
        assert_eq!(page.total_pages, 651);
        assert_eq!(page.items[0].id, Some(3));
    }

    #[tokio::test]
    async fn test_max_records_caps_total_and_last_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .and(query_param("limit", "5"))
            .and(query_param("offset", "1020"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(list_body(
                    &server,
                    1302,
                    &[(1021, "a"), (1022, "b"), (1023, "c"), (1024, "d"), (1025, "e")],
                )),
            )
            .mount(&server)
            .await;
        for (id, name) in [(1021, "a"), (1022, "b"), (1023, "c"), (1024, "d"), (1025, "e")] {
            mount_detail(&server, id, name).await;
        }

        let api = api_for(&server, 20, Some(1025));
        let page = api.fetch_page(52).await.expect("last page loads");
        assert_eq!(page.total_pages, 52);
        assert_eq!(page.items.len(), 5);
    }

    #[tokio::test]
    async fn test_failed_detail_fails_whole_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(list_body(&server, 40, &[(1, "bulbasaur"), (2, "ivysaur")])),
            )
            .mount(&server)
            .await;
        mount_detail(&server, 1, "bulbasaur").await;
        Mock::given(method("GET"))
            .and(path("/pokemon/2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let api = api_for(&server, 2, None);
        let err = api.fetch_page(1).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_list_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pokemon"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let api = api_for(&server, 20, None);
        let err = api.fetch_page(1).await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn test_page_bounds() {
        let api = PokeApi::new(&Config::default());
        assert_eq!(api.page_bounds(1), (0, 20));
        assert_eq!(api.page_bounds(52), (1020, 5));
        assert_eq!(api.page_bounds(53), (1040, 0));
    }
}
