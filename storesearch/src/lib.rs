//! Client for the Steam storefront `storesearch` endpoint.
//!
//! Prices on the storefront are reported in minor currency units (cents) and are
//! not always well formed, so the price types here decode leniently: a value that
//! can't be read as a number becomes `None` instead of failing the whole response.

use log::info;
use reqwest::{Client, Method, Request, Url};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst};
use thiserror::Error;

#[derive(Hash, Copy, Clone, Debug, Deserialize, Serialize, Eq, PartialEq, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Price block of a search result, in cents.
#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPrice {
    pub currency: Option<String>,
    #[serde(rename = "initial", default)]
    #[serde_as(deserialize_as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub initial_cents: Option<i64>,
    #[serde(rename = "final", default)]
    #[serde_as(deserialize_as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    pub final_cents: Option<i64>,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    pub id: ItemId,
    pub name: String,
    pub tiny_image: String,
    /// `None` when the storefront sent no price (or `null`). A price that is
    /// present but not an object decodes as an empty [`ItemPrice`].
    #[serde(default)]
    #[serde_as(deserialize_as = "Option<DefaultOnError>")]
    pub price: Option<ItemPrice>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StoreSearchView {
    pub total: Option<u32>,
    pub items: Vec<SearchResultItem>,
}

pub struct StoreSearchClient {
    client: Client,
    base_url: String,
}

impl StoreSearchClient {
    pub const STORE_API_BASE_URL: &'static str = "https://store.steampowered.com/api";
    /// Prices are requested in the Brazilian store so they come back in BRL.
    pub const COUNTRY_CODE: &'static str = "BR";

    pub fn new(user_agent: impl ToString) -> Result<Self, Error> {
        Self::with_base_url(user_agent, Self::STORE_API_BASE_URL)
    }

    /// Points the client at another host serving the same API, a local stand-in for example.
    pub fn with_base_url(
        user_agent: impl ToString,
        base_url: impl Into<String>,
    ) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(user_agent.to_string())
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        // fail early rather than on the first search
        Url::parse(&base_url)?;
        Ok(StoreSearchClient { client, base_url })
    }

    pub fn search_url(&self, term: &str) -> Result<Url, Error> {
        Ok(Url::parse_with_params(
            &format!("{}/storesearch", self.base_url),
            &[("term", term), ("cc", Self::COUNTRY_CODE)],
        )?)
    }

    pub async fn search(&self, term: &str) -> Result<StoreSearchView, Error> {
        let request = Request::new(Method::GET, self.search_url(term)?);
        info!("Searching the storefront: {}", request.url());
        let response = self.client.execute(request).await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod test {
    use crate::{ItemId, ItemPrice, StoreSearchClient, StoreSearchView};

    const SEARCH_BODY: &str = r#"{
        "total": 4,
        "items": [
            {
                "type": "app",
                "name": "Counter-Strike 2",
                "id": 730,
                "tiny_image": "https://cdn.example/730/capsule.jpg",
                "metascore": "",
                "platforms": {"windows": true, "mac": false, "linux": true},
                "streamingvideo": false
            },
            {
                "type": "app",
                "name": "Counter-Strike: Source",
                "id": 240,
                "price": {"currency": "BRL", "initial": 3699, "final": 924},
                "tiny_image": "https://cdn.example/240/capsule.jpg"
            },
            {
                "type": "app",
                "name": "Broken Price",
                "id": 1,
                "price": {"currency": "BRL", "initial": "lots", "final": "2000"},
                "tiny_image": "https://cdn.example/1/capsule.jpg"
            },
            {
                "type": "app",
                "name": "Odd Price",
                "id": 2,
                "price": "free",
                "tiny_image": "https://cdn.example/2/capsule.jpg"
            }
        ]
    }"#;

    #[test]
    fn test_search_body_parse() {
        let view: StoreSearchView = serde_json::from_str(SEARCH_BODY).unwrap();
        assert_eq!(view.total, Some(4));
        assert_eq!(view.items.len(), 4);

        let cs2 = &view.items[0];
        assert_eq!(cs2.id, ItemId(730));
        assert!(cs2.price.is_none());

        let source = &view.items[1];
        assert_eq!(
            source.price,
            Some(ItemPrice {
                currency: Some("BRL".to_string()),
                initial_cents: Some(3699),
                final_cents: Some(924),
            })
        );

        let broken = view.items[2].price.as_ref().unwrap();
        assert_eq!(broken.initial_cents, None);
        assert_eq!(broken.final_cents, Some(2000));

        assert_eq!(view.items[3].price, Some(ItemPrice::default()));
    }

    #[test]
    fn test_null_price_is_absent() {
        let view: StoreSearchView = serde_json::from_str(
            r#"{"items": [{"id": 5, "name": "x", "tiny_image": "y", "price": null}]}"#,
        )
        .unwrap();
        assert!(view.items[0].price.is_none());
        assert_eq!(view.total, None);
    }

    #[test]
    fn test_search_url() {
        let client = StoreSearchClient::new("storesearch-tests").unwrap();
        let url = client.search_url("Counter Strike").unwrap();
        assert_eq!(
            url.as_str(),
            "https://store.steampowered.com/api/storesearch?term=Counter+Strike&cc=BR"
        );

        let local = StoreSearchClient::with_base_url("storesearch-tests", "http://127.0.0.1:9/api/")
            .unwrap();
        assert_eq!(
            local.search_url("a&b").unwrap().as_str(),
            "http://127.0.0.1:9/api/storesearch?term=a%26b&cc=BR"
        );
    }

    #[test]
    fn test_bad_base_url() {
        assert!(StoreSearchClient::with_base_url("storesearch-tests", "not a url").is_err());
    }

    #[tokio::test]
    #[ignore = "hits the live storefront"]
    async fn test_live_search() {
        let client = StoreSearchClient::new("storesearch-tests").unwrap();
        let view = client.search("Counter Strike").await.unwrap();
        assert!(!view.items.is_empty());
    }
}
