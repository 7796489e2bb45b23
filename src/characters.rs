//! Character endpoints.

use crate::client::Client;
use crate::entities::{CharactersResponse, ComicsResponse, EventsResponse, SeriesResponse, StoriesResponse};
use crate::error::Result;
use crate::params::{CharactersParams, ComicsParams, EventsParams, SeriesParams, StoriesParams};
use crate::resource::{ResourceKind, ResourcePath};

/// Client for character endpoints.
///
/// Access via `client.characters()`.
pub struct CharactersClient {
    client: Client,
}

impl CharactersClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List characters matching `params`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use marvel::{Client, CharactersParams};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("public_key", "private_key");
    ///
    ///     let spiders = client.characters().list(&CharactersParams {
    ///         name_starts_with: Some("Spider".to_string()),
    ///         ..Default::default()
    ///     }).await?;
    ///     println!("{} matches", spiders.data.total.unwrap_or(0));
    ///     Ok(())
    /// }
    /// ```
    pub async fn list(&self, params: &CharactersParams) -> Result<CharactersResponse> {
        self.client
            .request(&ResourcePath::collection(ResourceKind::Characters), params)
            .await
    }

    /// Get a single character by ID.
    pub async fn get(&self, id: u64) -> Result<CharactersResponse> {
        self.client
            .request(
                &ResourcePath::single(ResourceKind::Characters, id),
                &CharactersParams::default(),
            )
            .await
    }

    /// Comics featuring a character.
    pub async fn comics(&self, id: u64, params: &ComicsParams) -> Result<ComicsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Comics), params)
            .await
    }

    /// Events a character took part in.
    pub async fn events(&self, id: u64, params: &EventsParams) -> Result<EventsResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Events), params)
            .await
    }

    /// Series a character appears in.
    pub async fn series(&self, id: u64, params: &SeriesParams) -> Result<SeriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Series), params)
            .await
    }

    /// Stories featuring a character.
    pub async fn stories(&self, id: u64, params: &StoriesParams) -> Result<StoriesResponse> {
        self.client
            .request(&self.related(id, ResourceKind::Stories), params)
            .await
    }

    fn related(&self, id: u64, relation: ResourceKind) -> ResourcePath {
        ResourcePath::related(ResourceKind::Characters, id, relation)
    }
}
