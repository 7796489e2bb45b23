//! Series endpoints.
//!
//! `client.series().comics(id, params)` is the usual way to walk every issue
//! of a title; see [`crate::pagination::PageCursor`] for stepping through the
//! pages.

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

/// Client for series endpoints.
///
/// Access via `client.series()`.
pub struct SeriesClient {
    client: Client,
}

impl SeriesClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List series matching `params`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use marvel::{Client, SeriesParams};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("public_key", "private_key");
    ///
    ///     let found = client.series().list(&SeriesParams {
    ///         title_starts_with: Some("Uncanny".to_string()),
    ///         start_year: Some(1963),
    ///         ..Default::default()
    ///     }).await?;
    ///
    ///     for series in &found.data.results {
    ///         println!("{:?} ({:?})", series.title, series.id);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self, params: &SeriesParams) -> Result<SeriesResponse> {
        self.client
            .request(&ResourcePath::collection(ResourceKind::Series), params)
            .await
    }

    /// Get a single series by ID.
    pub async fn get(&self, id: u64) -> Result<SeriesResponse> {
        self.client
            .request(
                &ResourcePath::single(ResourceKind::Series, id),
                &SeriesParams::default(),
            )
            .await
    }

    /// Characters appearing in a series.
    pub async fn characters(&self, id: u64, params: &CharactersParams) -> Result<CharactersResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Characters), params)
            .await
    }

    /// Issues and collections published in a series.
    pub async fn comics(&self, id: u64, params: &ComicsParams) -> Result<ComicsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Comics), params)
            .await
    }

    /// Creators who worked on a series.
    pub async fn creators(&self, id: u64, params: &CreatorsParams) -> Result<CreatorsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Creators), params)
            .await
    }

    /// Events a series took part in.
    pub async fn events(&self, id: u64, params: &EventsParams) -> Result<EventsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Events), params)
            .await
    }

    /// Stories in a series.
    pub async fn stories(&self, id: u64, params: &StoriesParams) -> Result<StoriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Stories), params)
            .await
    }

    fn related(&self, id: u64, relation: ResourceKind) -> ResourcePath {
        ResourcePath::related(ResourceKind::Series, id, relation)
    }
}
