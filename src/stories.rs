//! Story endpoints.

use crate::client::Client;
use crate::entities::{
    CharactersResponse, ComicsResponse, CreatorsResponse, EventsResponse, SeriesResponse,
    StoriesResponse,
};
use crate::error::Result;
use crate::params::{
    CharactersParams, ComicsParams, CreatorsParams, EventsParams, SeriesParams, StoriesParams,
};
use crate::resource::{ResourceKind, ResourcePath};

/// Client for story endpoints.
///
/// Access via `client.stories()`.
pub struct StoriesClient {
    client: Client,
}

impl StoriesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List stories matching `params`.
    pub async fn list(&self, params: &StoriesParams) -> Result<StoriesResponse> {
        self.client
            .request(&ResourcePath::collection(ResourceKind::Stories), params)
            .await
    }

    /// Get a single story by ID.
    pub async fn get(&self, id: u64) -> Result<StoriesResponse> {
        self.client
            .request(
                &ResourcePath::single(ResourceKind::Stories, id),
                &StoriesParams::default(),
            )
            .await
    }

    pub async fn characters(&self, id: u64, params: &CharactersParams) -> Result<CharactersResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Characters), params)
            .await
    }

    pub async fn comics(&self, id: u64, params: &ComicsParams) -> Result<ComicsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Comics), params)
            .await
    }

    pub async fn creators(&self, id: u64, params: &CreatorsParams) -> Result<CreatorsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Creators), params)
            .await
    }

    pub async fn events(&self, id: u64, params: &EventsParams) -> Result<EventsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Events), params)
            .await
    }

    pub async fn series(&self, id: u64, params: &SeriesParams) -> Result<SeriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Series), params)
            .await
    }

    fn related(&self, id: u64, relation: ResourceKind) -> ResourcePath {
        ResourcePath::related(ResourceKind::Stories, id, relation)
    }
}
