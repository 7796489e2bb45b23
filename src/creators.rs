//! Creator endpoints.

use crate::client::Client;
use crate::entities::{ComicsResponse, CreatorsResponse, EventsResponse, SeriesResponse, StoriesResponse};
use crate::error::Result;
use crate::params::{ComicsParams, CreatorsParams, EventsParams, SeriesParams, StoriesParams};
use crate::resource::{ResourceKind, ResourcePath};

/// Client for creator endpoints.
///
/// Access via `client.creators()`.
pub struct CreatorsClient {
    client: Client,
}

impl CreatorsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List creators matching `params`.
    pub async fn list(&self, params: &CreatorsParams) -> Result<CreatorsResponse> {
        self.client
            .request(&ResourcePath::collection(ResourceKind::Creators), params)
            .await
    }

    /// Get a single creator by ID.
    pub async fn get(&self, id: u64) -> Result<CreatorsResponse> {
        self.client
            .request(
                &ResourcePath::single(ResourceKind::Creators, id),
                &CreatorsParams::default(),
            )
            .await
    }

    /// Comics a creator worked on.
    pub async fn comics(&self, id: u64, params: &ComicsParams) -> Result<ComicsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Comics), params)
            .await
    }

    /// Events a creator worked on.
    pub async fn events(&self, id: u64, params: &EventsParams) -> Result<EventsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Events), params)
            .await
    }

    /// Series a creator worked on.
    pub async fn series(&self, id: u64, params: &SeriesParams) -> Result<SeriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Series), params)
            .await
    }

    /// Stories a creator worked on.
    pub async fn stories(&self, id: u64, params: &StoriesParams) -> Result<StoriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Stories), params)
            .await
    }

    fn related(&self, id: u64, relation: ResourceKind) -> ResourcePath {
        ResourcePath::related(ResourceKind::Creators, id, relation)
    }
}
