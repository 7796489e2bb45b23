//! Marvel API client.
//!
//! The main entry point. Builds signed request URLs, issues them, and decodes
//! the response envelope.

use crate::auth::{Clock, Credentials, SystemClock};
use crate::characters::CharactersClient;
use crate::comics::ComicsClient;
use crate::creators::CreatorsClient;
use crate::entities::Entity;
use crate::error::{MarvelError, Result};
use crate::events::EventsClient;
use crate::params::CommonParams;
use crate::resource::{BASE_PATH, ResourcePath};
use crate::series::SeriesClient;
use crate::stories::StoriesClient;
use crate::types::Envelope;
use reqwest::Client as HttpClient;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com";

/// Environment variable holding the public key for [`Client::from_env`].
pub const PUBLIC_KEY_ENV: &str = "MARVEL_PUBLIC_KEY";
/// Environment variable holding the private key for [`Client::from_env`].
pub const PRIVATE_KEY_ENV: &str = "MARVEL_PRIVATE_KEY";

/// Marvel API client.
///
/// Cheap to clone; clones share the connection pool and credentials.
///
/// # Example
///
/// ```rust,no_run
/// use marvel::{Client, CommonParams, ComicsParams};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::new("public_key", "private_key");
///
///     // Issues of Uncanny X-Men, oldest first
///     let page = client
///         .series()
///         .comics(2258, &ComicsParams {
///             common: CommonParams {
///                 limit: Some(100),
///                 order_by: Some("onsaleDate".to_string()),
///                 ..Default::default()
///             },
///             ..Default::default()
///         })
///         .await?;
///
///     for comic in &page.data.results {
///         println!("{:?}", comic.title);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: String,
    credentials: Arc<Credentials>,
    clock: Arc<dyn Clock>,
}

/// Configuration options for the client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Scheme and host of the API (default: https://gateway.marvel.com).
    pub base_url: Option<String>,
    /// Per-request timeout. None leaves requests unbounded.
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

impl Client {
    /// Create a client with the default transport.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use marvel::Client;
    ///
    /// let client = Client::new("public_key", "private_key");
    /// ```
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self::with_http(Credentials::new(public_key, private_key), HttpClient::new())
    }

    /// Create a client with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use marvel::{Client, ClientConfig};
    /// use std::time::Duration;
    ///
    /// let client = Client::with_config("public_key", "private_key", ClientConfig {
    ///     timeout: Some(Duration::from_secs(30)),
    ///     user_agent: Some("cover-wall/1.0".to_string()),
    ///     ..Default::default()
    /// }).unwrap();
    /// ```
    pub fn with_config(
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("marvel-rust/{}", env!("CARGO_PKG_VERSION")));

        let mut builder = HttpClient::builder().user_agent(user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let mut client = Self::with_http(Credentials::new(public_key, private_key), http);
        if let Some(base_url) = config.base_url {
            client.base_url = base_url.trim_end_matches('/').to_string();
        }
        Ok(client)
    }

    /// Create a client around an existing transport.
    pub fn with_http(credentials: Credentials, http: HttpClient) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Arc::new(credentials),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create a client from `MARVEL_PUBLIC_KEY` and `MARVEL_PRIVATE_KEY`.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .filter(|v| !v.is_empty())
                .ok_or_else(|| MarvelError::Config(format!("{name} is not set")))
        };
        let public_key = read(PUBLIC_KEY_ENV)?;
        let private_key = read(PRIVATE_KEY_ENV)?;
        Self::with_config(public_key, private_key, ClientConfig::default())
    }

    /// Replace the time source used for request signatures.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The public key requests are signed with.
    pub fn public_key(&self) -> &str {
        self.credentials.public_key()
    }

    /// Character endpoints.
    pub fn characters(&self) -> CharactersClient {
        CharactersClient::new(self.clone())
    }

    /// Comic endpoints.
    pub fn comics(&self) -> ComicsClient {
        ComicsClient::new(self.clone())
    }

    /// Creator endpoints.
    pub fn creators(&self) -> CreatorsClient {
        CreatorsClient::new(self.clone())
    }

    /// Event endpoints.
    pub fn events(&self) -> EventsClient {
        EventsClient::new(self.clone())
    }

    /// Series endpoints.
    pub fn series(&self) -> SeriesClient {
        SeriesClient::new(self.clone())
    }

    /// Story endpoints.
    pub fn stories(&self) -> StoriesClient {
        StoriesClient::new(self.clone())
    }

    /// Build the signed GET request for `path` without sending it.
    ///
    /// Caller filters come first in the query string, followed by `ts`,
    /// `apikey` and `hash`. A new signature is computed on every call.
    pub fn build_request<P>(&self, path: &ResourcePath, params: &P) -> Result<reqwest::Request>
    where
        P: Serialize + ?Sized,
    {
        let url = format!("{}{}{}", self.base_url, BASE_PATH, path);
        let auth = self.credentials.sign_now(self.clock.as_ref());

        let request = self.http.get(&url).query(params).query(&auth).build()?;
        Ok(request)
    }

    /// Issue a signed GET for `path` and decode the envelope.
    ///
    /// `T` must match the kind of entity `path` returns (its relation if it
    /// has one, otherwise its kind).
    #[instrument(skip_all, fields(path = %path))]
    pub async fn request<T, P>(&self, path: &ResourcePath, params: &P) -> Result<Envelope<T>>
    where
        T: Entity,
        P: Serialize + ?Sized,
    {
        let request = self.build_request(path, params)?;
        debug!("sending request");
        let response = self.http.execute(request).await?;
        self.handle_response(response).await
    }

    /// Follow a `resourceURI` to the full entity it names.
    pub(crate) async fn resolve<T: Entity>(&self, uri: &str) -> Result<Envelope<T>> {
        let path = ResourcePath::from_uri(uri)?;
        if path.kind() != T::KIND || path.id().is_none() || path.relation().is_some() {
            return Err(MarvelError::InvalidUri(format!(
                "{uri} does not name a single entry of {}",
                T::KIND
            )));
        }
        self.request(&path, &CommonParams::default()).await
    }

    /// Follow a `collectionURI` to the collection it names.
    pub(crate) async fn resolve_collection<T, P>(&self, uri: &str, params: &P) -> Result<Envelope<T>>
    where
        T: Entity,
        P: Serialize + ?Sized,
    {
        let path = ResourcePath::from_uri(uri)?;
        if path.result_kind() != T::KIND || (path.id().is_some() && path.relation().is_none()) {
            return Err(MarvelError::InvalidUri(format!(
                "{uri} does not name a collection of {}",
                T::KIND
            )));
        }
        self.request(&path, params).await
    }

    async fn handle_response<T: Entity>(&self, response: reqwest::Response) -> Result<Envelope<T>> {
        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() >= 400 {
            warn!(status = status.as_u16(), "API returned an error");
            return Err(MarvelError::Api {
                status_code: status.as_u16(),
                body,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        debug!(
            count = envelope.data.results.len(),
            total = ?envelope.data.total,
            "decoded response"
        );
        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedClock;
    use crate::params::ComicsParams;
    use crate::resource::ResourceKind;
    use std::collections::HashMap;

    fn query_map(request: &reqwest::Request) -> HashMap<String, String> {
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_client_new() {
        let client = Client::new("public", "private");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.public_key(), "public");
    }

    #[test]
    fn test_client_with_config() {
        let client = Client::with_config(
            "public",
            "private",
            ClientConfig {
                base_url: Some("http://localhost:8080/".to_string()),
                timeout: Some(Duration::from_secs(60)),
                user_agent: None,
            },
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_build_request_url() {
        let client = Client::new("1234", "abcd").with_clock(FixedClock(1));
        let path = ResourcePath::related(ResourceKind::Series, 2258, ResourceKind::Comics);
        let request = client
            .build_request(&path, &CommonParams::page(0, 100))
            .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().scheme(), "https");
        assert_eq!(request.url().host_str(), Some("gateway.marvel.com"));
        assert_eq!(request.url().path(), "/v1/public/series/2258/comics");
        assert_eq!(
            request.url().query(),
            Some("offset=0&limit=100&ts=1&apikey=1234&hash=ffd275c5130566a2916217b101f26150")
        );
    }

    #[test]
    fn test_query_round_trip() {
        let client = Client::new("1234", "abcd").with_clock(FixedClock(1));
        let params = ComicsParams {
            common: CommonParams {
                order_by: Some("-onsaleDate".to_string()),
                ..Default::default()
            },
            title_starts_with: Some("Uncanny X-Men".to_string()),
            characters: vec![1009610, 1009718],
            no_variants: Some(true),
            ..Default::default()
        };
        let path = ResourcePath::collection(ResourceKind::Comics);
        let request = client.build_request(&path, &params).unwrap();

        let mut query = query_map(&request);
        for auth in ["ts", "apikey", "hash"] {
            assert!(query.remove(auth).is_some(), "missing {auth}");
        }

        let expected: HashMap<String, String> = [
            ("orderBy", "-onsaleDate"),
            ("titleStartsWith", "Uncanny X-Men"),
            ("characters", "1009610,1009718"),
            ("noVariants", "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(query, expected);
    }

    #[test]
    fn test_every_request_is_signed_fresh() {
        let path = ResourcePath::single(ResourceKind::Characters, 1009610);
        let first = Client::new("pub", "priv")
            .with_clock(FixedClock(1_700_000_000))
            .build_request(&path, &CommonParams::default())
            .unwrap();
        let second = Client::new("pub", "priv")
            .with_clock(FixedClock(1_700_000_001))
            .build_request(&path, &CommonParams::default())
            .unwrap();

        let first = query_map(&first);
        let second = query_map(&second);
        assert_eq!(first["hash"], "5b0da072c907298052957477e463aaf6");
        assert_ne!(first["hash"], second["hash"]);
        assert_eq!(first.len(), 3);
    }
}
