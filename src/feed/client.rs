use crate::app_config::AppConfig;
use crate::feed::FeedError;
use reqwest::Client;

pub fn new_client(config: &AppConfig) -> Result<Client, FeedError> {
    let client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(config.feed().timeout())
        .build()?;
    Ok(client)
}
