use crate::app_config::AppConfig;
use crate::feed::client::new_client;
use crate::feed::FeedResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{info, instrument};

/// Source of the raw hotel feed.
#[async_trait]
pub trait HotelFeed: Debug + Send + Sync {
    async fn fetch(&self) -> Result<FeedResponse, FeedError>;
}

/// Retrieves the feed with a single GET request, without retries.
#[derive(Debug)]
pub struct HttpHotelFeed {
    client: Client,
    url: String,
}

impl HttpHotelFeed {
    pub fn new(config: &AppConfig) -> Result<Self, FeedError> {
        Ok(HttpHotelFeed {
            client: new_client(config)?,
            url: config.feed().url().to_string(),
        })
    }
}

#[async_trait]
impl HotelFeed for HttpHotelFeed {
    #[instrument(skip_all)]
    async fn fetch(&self) -> Result<FeedResponse, FeedError> {
        info!(url = %self.url, "🏨 Retrieving hotel feed...");

        let body = self.client.get(&self.url).send().await?.error_for_status()?.text().await?;
        let feed_response = serde_json::from_str::<FeedResponse>(&body)?;

        info!("🏨 Retrieving hotel feed... OK, {} entries found", feed_response.message.len());
        Ok(feed_response)
    }
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid feed document: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use std::time::Duration;
    use test_log::test;

    #[test(tokio::test)]
    async fn fetch_returns_all_feed_entries() -> Result<(), FeedError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/hotels.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("../../tests/resources/hotels_feed.json"))
            .create_async()
            .await;

        let config = AppConfigBuilder::new().feed_url(format!("{}/hotels.json", server.url())).build();
        let feed = HttpHotelFeed::new(&config)?;

        let response = feed.fetch().await?;

        mock.assert_async().await;
        assert_eq!(response.message.len(), 9);

        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_fails_on_error_status() -> Result<(), FeedError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server.mock("GET", "/hotels.json").with_status(503).expect(1).create_async().await;

        let config = AppConfigBuilder::new().feed_url(format!("{}/hotels.json", server.url())).build();
        let feed = HttpHotelFeed::new(&config)?;

        let result = feed.fetch().await;

        mock.assert_async().await;
        match result {
            Err(FeedError::Request(err)) => assert_eq!(err.status().map(|s| s.as_u16()), Some(503)),
            other => panic!("Expected a request error, found {:?}", other),
        }

        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_fails_on_malformed_json() -> Result<(), FeedError> {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/hotels.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{ \"message\": [")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().feed_url(format!("{}/hotels.json", server.url())).build();
        let feed = HttpHotelFeed::new(&config)?;

        assert!(matches!(feed.fetch().await, Err(FeedError::Decode(_))));

        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_fails_without_message_field() -> Result<(), FeedError> {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/hotels.json")
            .with_status(200)
            .with_body(r#"{ "hotels": [] }"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().feed_url(format!("{}/hotels.json", server.url())).build();
        let feed = HttpHotelFeed::new(&config)?;

        assert!(matches!(feed.fetch().await, Err(FeedError::Decode(_))));

        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_fails_when_the_feed_is_unreachable() -> Result<(), FeedError> {
        let config = AppConfigBuilder::new()
            .feed_url("http://127.0.0.1:9/hotels.json".to_string())
            .feed_timeout(Duration::from_secs(2))
            .build();
        let feed = HttpHotelFeed::new(&config)?;

        assert!(matches!(feed.fetch().await, Err(FeedError::Request(_))));

        Ok(())
    }
}
