pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub use error::ApiError;
pub mod types;
pub use types::{Direction, Subscriber, SubscribeResult, VoteState};

#[cfg(test)]
use mockall::{automock, predicate::*};

/// The site API as consumed by the page layer and the admin CLI.
///
/// Implementations do not retry and do not time out beyond the transport
/// default; callers own the fail-quiet policy per operation.
#[cfg_attr(test, automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait Api {
    /// Read a slug's vote state, including this caller's own vote.
    async fn get_votes(&self, slug: &str) -> Result<VoteState, ApiError>;

    /// Cast a vote and return the slug's updated state.
    async fn cast_vote(&self, slug: &str, direction: Direction) -> Result<VoteState, ApiError>;

    /// Submit an email to the subscription list. The result's `ok` field
    /// decides the outcome; a non-2xx status alone is not a failure here.
    async fn subscribe(&self, email: &str) -> Result<SubscribeResult, ApiError>;

    /// List the subscription roster. Operator surface, localhost only.
    async fn list_subscribers(&self) -> Result<Vec<Subscriber>, ApiError>;
}
