//! Site API Client
//!
//! A thin JSON client for the voting and subscription endpoints.

use crate::api::Api;
use crate::api::error::ApiError;
use crate::api::types::{
    Direction, SubscribeRequest, SubscribeResult, Subscriber, VoteRequest, VoteState,
};
use crate::consts::client_consts;
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with the client version
const USER_AGENT: &str = concat!("laz-widgets/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    /// POST whose outcome is carried in the body rather than the status
    /// line, so the body is decoded without a status check.
    async fn post_request_any_status<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .json(body)
            .send()
            .await?;

        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl Api for ApiClient {
    /// Read a slug's vote state, including this caller's own vote.
    async fn get_votes(&self, slug: &str) -> Result<VoteState, ApiError> {
        let slug_path = urlencoding::encode(slug).into_owned();
        let endpoint = format!("{}/{}", client_consts::VOTES_ENDPOINT, slug_path);

        self.get_request(&endpoint).await
    }

    /// Cast a vote and return the slug's updated state.
    async fn cast_vote(&self, slug: &str, direction: Direction) -> Result<VoteState, ApiError> {
        let request = VoteRequest {
            slug: slug.to_string(),
            direction,
        };

        self.post_request(client_consts::VOTE_ENDPOINT, &request)
            .await
    }

    /// Submit an email to the subscription list.
    async fn subscribe(&self, email: &str) -> Result<SubscribeResult, ApiError> {
        let request = SubscribeRequest {
            email: email.to_string(),
        };

        self.post_request_any_status(client_consts::SUBSCRIBE_ENDPOINT, &request)
            .await
    }

    /// List the subscription roster. Only answered for localhost callers.
    async fn list_subscribers(&self) -> Result<Vec<Subscriber>, ApiError> {
        self.get_request(client_consts::SUBSCRIBERS_ENDPOINT).await
    }
}


#[cfg(test)]
/// These are ignored by default since they require a live API server to run.
mod live_api_tests {
    use super::*;
    use crate::api::Api;

    #[tokio::test]
    #[ignore] // This test requires a live API server instance.
    /// Should read the vote state of a known slug.
    async fn test_get_votes() {
        let client = ApiClient::new(Environment::Local);
        match client.get_votes("first-post").await {
            Ok(state) => println!("Vote state: {:?}", state),
            Err(e) => panic!("Failed to read votes: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live API server instance.
    /// Should cast a vote and return the updated tally.
    async fn test_cast_vote() {
        let client = ApiClient::new(Environment::Local);
        match client.cast_vote("first-post", Direction::Up).await {
            Ok(state) => println!("Updated state: {:?}", state),
            Err(e) => panic!("Failed to cast vote: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live API server instance.
    /// Should accept a subscription or reject it in the body.
    async fn test_subscribe() {
        let client = ApiClient::new(Environment::Local);
        match client.subscribe("user@example.com").await {
            Ok(result) => println!("Subscribe result: {:?}", result),
            Err(e) => panic!("Failed to subscribe: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live API server instance, and only
    // answers when called from localhost.
    async fn test_list_subscribers() {
        let client = ApiClient::new(Environment::Local);
        match client.list_subscribers().await {
            Ok(subscribers) => println!("Got {} subscribers", subscribers.len()),
            Err(e) => panic!("Failed to list subscribers: {}", e),
        }
    }
}
