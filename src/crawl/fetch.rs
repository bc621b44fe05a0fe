// src/crawl/fetch.rs
// =============================================================================
// Fetching listing pages.
//
// The crawl engine never talks to reqwest directly; it goes through the
// `Fetch` trait so tests can hand it an in-memory site instead of a server.
//
// Any failure here is fatal for the crawl: a connection error, a timeout,
// or a non-2xx status all mean we can no longer claim the listing is
// complete.
// =============================================================================

use crate::error::Error;
use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use std::time::Duration;

pub trait Fetch {
    /// GET `url` and return the decoded body
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, Error>>;
}

// reqwest-backed fetcher; one Client reused for every page (connection pooling)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // `timeout: None` keeps reqwest's default, which never times out
    pub fn new(timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HttpFetcher {
            client: builder.build()?,
        })
    }

    async fn get(&self, url: &str) -> Result<String, Error> {
        let transport = |e: reqwest::Error| Error::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        if !response.status().is_success() {
            return Err(Error::Transport {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        response.text().await.map_err(transport)
    }
}

impl Fetch for HttpFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<String, Error>> {
        self.get(url).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/pub/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<!DOCTYPE html><title>Index of /pub</title>")
            .expect(1)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).unwrap();
        let url = format!("{}/pub/", server.url());
        let body = fetcher.fetch(&url).await.unwrap();

        assert_eq!(body, "<!DOCTYPE html><title>Index of /pub</title>");
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/secret/")
            .with_status(403)
            .with_body("Forbidden")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new(None).unwrap();
        let url = format!("{}/secret/", server.url());
        let err = fetcher.fetch(&url).await.unwrap_err();

        match err {
            Error::Transport { url: failed, message } => {
                assert_eq!(failed, url);
                assert!(message.contains("403"));
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        let fetcher = HttpFetcher::new(Some(Duration::from_secs(2))).unwrap();
        // port 9 (discard) on localhost is not expected to be listening
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(err.is_transport());
    }
}
