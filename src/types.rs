//! Response envelopes and the value types shared by every entity.

use crate::client::Client;
use crate::entities::Entity;
use crate::error::{MarvelError, Result};
use crate::params::CommonParams;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Layout of every date the API returns, e.g. `2013-11-20T17:40:18-0500`.
pub const DATE_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Uniform wrapper around every successful response.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// HTTP status code echoed in the body.
    pub code: Option<i64>,
    /// Status text, e.g. `"Ok"`.
    pub status: Option<String>,
    /// Digest of the response content.
    pub etag: Option<String>,
    pub copyright: Option<String>,
    pub attribution_text: Option<String>,
    #[serde(rename = "attributionHTML")]
    pub attribution_html: Option<String>,
    /// The requested page of results.
    pub data: DataContainer<T>,
}

/// Pagination metadata plus one page of results.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataContainer<T> {
    /// Offset the page starts at.
    pub offset: Option<u32>,
    /// Page size the server applied.
    pub limit: Option<u32>,
    /// Total number of matches across all pages.
    pub total: Option<u32>,
    /// Number of results in this page.
    pub count: Option<u32>,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> DataContainer<T> {
    /// Short-page rule: fewer results than were asked for means there is
    /// nothing after this page.
    ///
    /// A last page that exactly fills `limit` is reported as not last, which
    /// costs one further request that comes back empty.
    pub fn is_last_page(&self, limit: u32) -> bool {
        self.results.len() < limit as usize
    }

    /// Whether results remain beyond this page, judged by `total`.
    ///
    /// `None` when the server omitted the fields needed to tell.
    pub fn has_more(&self) -> Option<bool> {
        let offset = self.offset?;
        let total = self.total?;
        let count = self.count.unwrap_or(self.results.len() as u32);
        Some(offset.saturating_add(count) < total)
    }

    /// Offset of the page following this one.
    pub fn next_offset(&self) -> u32 {
        let count = self.count.unwrap_or(self.results.len() as u32);
        self.offset.unwrap_or(0).saturating_add(count)
    }
}

/// A partial, embedded view of a related collection.
///
/// `items` holds at most a short preview; `collection_uri` points at the
/// complete collection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct ResourceList<T> {
    /// Total number of related entities.
    pub available: Option<u32>,
    /// Number of entries in `items`.
    pub returned: Option<u32>,
    #[serde(rename = "collectionURI")]
    pub collection_uri: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<Summary<T>>,
}

impl<T: Entity> ResourceList<T> {
    /// Fetch the complete related collection.
    pub async fn list(&self, client: &Client) -> Result<Envelope<T>> {
        self.list_with(client, &CommonParams::default()).await
    }

    /// Fetch one page of the related collection.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use marvel::{Client, CommonParams};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::new("public", "private");
    ///     let comic = client.comics().get(42882).await?;
    ///     if let Some(characters) = comic.data.results[0].characters.as_ref() {
    ///         let page = characters.list_with(&client, &CommonParams::page(20, 20)).await?;
    ///         println!("{} more characters", page.data.results.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn list_with(&self, client: &Client, params: &CommonParams) -> Result<Envelope<T>> {
        match self.collection_uri.as_deref() {
            Some(uri) if !uri.is_empty() => client.resolve_collection(uri, params).await,
            _ => Err(MarvelError::MissingUri(T::KIND)),
        }
    }
}

/// Reference to another entity: its URI and a display name.
///
/// Used for resource-list items and for cross-references such as an event's
/// `next`, which are resolved on demand with [`Summary::fetch`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Summary<T> {
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: Option<String>,
    /// Creator's role on a work (creator summaries only).
    pub role: Option<String>,
    /// Story type, e.g. `"cover"` (story summaries only).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(skip)]
    target: PhantomData<fn() -> T>,
}

impl<T: Entity> Summary<T> {
    /// Fetch the full representation of the referenced entity.
    pub async fn fetch(&self, client: &Client) -> Result<Envelope<T>> {
        match self.resource_uri.as_deref() {
            Some(uri) if !uri.is_empty() => client.resolve(uri).await,
            _ => Err(MarvelError::MissingUri(T::KIND)),
        }
    }
}

/// Link to a public web page about an entity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExternalUrl {
    /// Page type, e.g. `"detail"`, `"wiki"`, `"purchase"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

/// Descriptive text attached to a comic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub language: String,
    pub text: String,
}

/// A key date for a comic, e.g. `onsaleDate` or `focDate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComicDate {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: Date,
}

/// A price for a comic, e.g. `printPrice`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ComicPrice {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: f64,
}

/// A date string as returned by the API, parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Date(pub String);

impl Date {
    /// Parse against [`DATE_LAYOUT`].
    pub fn parse(&self) -> Result<DateTime<FixedOffset>> {
        DateTime::parse_from_str(&self.0, DATE_LAYOUT).map_err(|source| MarvelError::InvalidDate {
            value: self.0.clone(),
            source,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Image location split into a path and an extension.
///
/// The full URL is assembled with a size/aspect variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub extension: String,
}

impl Image {
    /// URL of this image rendered at `variant`.
    pub fn url(&self, variant: ImageVariant) -> String {
        match variant {
            ImageVariant::FullSize => format!("{}.{}", self.path, self.extension),
            v => format!("{}/{}.{}", self.path, v.as_str(), self.extension),
        }
    }

    /// True for the stock "image not available" artwork.
    pub fn is_placeholder(&self) -> bool {
        self.path.contains("image_not_available")
    }
}

/// Renditions the image service offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageVariant {
    PortraitSmall,
    PortraitMedium,
    PortraitXLarge,
    PortraitFantastic,
    PortraitUncanny,
    PortraitIncredible,
    StandardSmall,
    StandardMedium,
    StandardLarge,
    StandardXLarge,
    StandardFantastic,
    StandardAmazing,
    LandscapeSmall,
    LandscapeMedium,
    LandscapeLarge,
    LandscapeXLarge,
    LandscapeAmazing,
    LandscapeIncredible,
    Detail,
    FullSize,
}

impl ImageVariant {
    /// Path segment naming the rendition. Empty for [`ImageVariant::FullSize`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageVariant::PortraitSmall => "portrait_small",
            ImageVariant::PortraitMedium => "portrait_medium",
            ImageVariant::PortraitXLarge => "portrait_xlarge",
            ImageVariant::PortraitFantastic => "portrait_fantastic",
            ImageVariant::PortraitUncanny => "portrait_uncanny",
            ImageVariant::PortraitIncredible => "portrait_incredible",
            ImageVariant::StandardSmall => "standard_small",
            ImageVariant::StandardMedium => "standard_medium",
            ImageVariant::StandardLarge => "standard_large",
            ImageVariant::StandardXLarge => "standard_xlarge",
            ImageVariant::StandardFantastic => "standard_fantastic",
            ImageVariant::StandardAmazing => "standard_amazing",
            ImageVariant::LandscapeSmall => "landscape_small",
            ImageVariant::LandscapeMedium => "landscape_medium",
            ImageVariant::LandscapeLarge => "landscape_large",
            ImageVariant::LandscapeXLarge => "landscape_xlarge",
            ImageVariant::LandscapeAmazing => "landscape_amazing",
            ImageVariant::LandscapeIncredible => "landscape_incredible",
            ImageVariant::Detail => "detail",
            ImageVariant::FullSize => "",
        }
    }
}
