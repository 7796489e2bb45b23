//! Event endpoints.

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

/// Client for event endpoints.
///
/// Access via `client.events()`.
pub struct EventsClient {
    client: Client,
}

impl EventsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List events matching `params`.
    pub async fn list(&self, params: &EventsParams) -> Result<EventsResponse> {
        self.client
            .request(&ResourcePath::collection(ResourceKind::Events), params)
            .await
    }

    /// Get a single event by ID.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use marvel::Client;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("public_key", "private_key");
    ///
    ///     let event = client.events().get(116).await?;
    ///     if let Some(next) = event.data.results.first().and_then(|e| e.next.as_ref()) {
    ///         let next = next.fetch(&client).await?;
    ///         println!("followed by {:?}", next.data.results[0].title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get(&self, id: u64) -> Result<EventsResponse> {
        self.client
            .request(
                &ResourcePath::single(ResourceKind::Events, id),
                &EventsParams::default(),
            )
            .await
    }

    /// Characters involved in an event.
    pub async fn characters(&self, id: u64, params: &CharactersParams) -> Result<CharactersResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Characters), params)
            .await
    }

    /// Comics that are part of an event.
    pub async fn comics(&self, id: u64, params: &ComicsParams) -> Result<ComicsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Comics), params)
            .await
    }

    /// Creators who worked on an event.
    pub async fn creators(&self, id: u64, params: &CreatorsParams) -> Result<CreatorsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Creators), params)
            .await
    }

    /// Series that are part of an event.
    pub async fn series(&self, id: u64, params: &SeriesParams) -> Result<SeriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Series), params)
            .await
    }

    /// Stories that are part of an event.
    pub async fn stories(&self, id: u64, params: &StoriesParams) -> Result<StoriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Stories), params)
            .await
    }

    fn related(&self, id: u64, relation: ResourceKind) -> ResourcePath {
        ResourcePath::related(ResourceKind::Events, id, relation)
    }
}
