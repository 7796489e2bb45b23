//! Comic endpoints.
//!
//! This module provides the ComicsClient for listing and fetching comics
//! and the characters, creators, events and stories that appear in them.

use crate::client::Client;
use crate::entities::{
    CharactersResponse, ComicsResponse, CreatorsResponse, EventsResponse, StoriesResponse,
};
use crate::error::Result;
use crate::params::{CharactersParams, ComicsParams, CreatorsParams, EventsParams, StoriesParams};
use crate::resource::{ResourceKind, ResourcePath};

/// Client for comic endpoints.
///
/// Access via `client.comics()`.
pub struct ComicsClient {
    client: Client,
}

impl ComicsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List comics matching `params`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use marvel::{Client, ComicsParams, params::DateDescriptor};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("public_key", "private_key");
    ///
    ///     let this_week = client.comics().list(&ComicsParams {
    ///         date_descriptor: Some(DateDescriptor::ThisWeek),
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     for comic in &this_week.data.results {
    ///         println!("{:?}", comic.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self, params: &ComicsParams) -> Result<ComicsResponse> {
        self.client
            .request(&ResourcePath::collection(ResourceKind::Comics), params)
            .await
    }

    /// Get a single comic by ID.
    pub async fn get(&self, id: u64) -> Result<ComicsResponse> {
        self.client
            .request(
                &ResourcePath::single(ResourceKind::Comics, id),
                &ComicsParams::default(),
            )
            .await
    }

    /// Characters appearing in a comic.
    pub async fn characters(&self, id: u64, params: &CharactersParams) -> Result<CharactersResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Characters), params)
            .await
    }

    /// Creators who worked on a comic.
    pub async fn creators(&self, id: u64, params: &CreatorsParams) -> Result<CreatorsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Creators), params)
            .await
    }

    /// Events a comic is part of.
    pub async fn events(&self, id: u64, params: &EventsParams) -> Result<EventsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Events), params)
            .await
    }

    /// Stories contained in a comic.
    pub async fn stories(&self, id: u64, params: &StoriesParams) -> Result<StoriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Stories), params)
            .await
    }

    fn related(&self, id: u64, relation: ResourceKind) -> ResourcePath {
        ResourcePath::related(ResourceKind::Comics, id, relation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comics_client_creation() {
        let client = Client::new("public", "private");
        let comics = client.comics();
        assert_eq!(
            comics.related(17701, ResourceKind::Characters).to_string(),
            "/comics/17701/characters"
        );
    }
}
