//! The six entity types and their response envelopes.
//!
//! Every field is optional. The API leaves fields out depending on the
//! endpoint and detail level, and an absent `pageCount` means something
//! different from a `pageCount` of zero.

use crate::client::Client;
use crate::error::{MarvelError, Result};
use crate::resource::ResourceKind;
use crate::types::{
    ComicDate, ComicPrice, Date, Envelope, ExternalUrl, Image, ResourceList, Summary, TextObject,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// An entity that can be requested from the API and re-fetched through its
/// own `resourceURI`.
#[async_trait]
pub trait Entity: DeserializeOwned + Send + Sync + 'static {
    /// The resource kind this entity is served under.
    const KIND: ResourceKind;

    /// Absolute link to the entity's full representation.
    fn resource_uri(&self) -> Option<&str>;

    /// Fetch the full representation of this entity.
    ///
    /// Useful when the value came from a listing that returned partial data.
    async fn fetch(&self, client: &Client) -> Result<Envelope<Self>> {
        match self.resource_uri() {
            Some(uri) if !uri.is_empty() => client.resolve(uri).await,
            _ => Err(MarvelError::MissingUri(Self::KIND)),
        }
    }
}

pub type CharactersResponse = Envelope<Character>;
pub type ComicsResponse = Envelope<Comic>;
pub type CreatorsResponse = Envelope<Creator>;
pub type EventsResponse = Envelope<Event>;
pub type SeriesResponse = Envelope<Series>;
pub type StoriesResponse = Envelope<Story>;

/// A character, e.g. Spider-Man.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub modified: Option<Date>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub urls: Option<Vec<ExternalUrl>>,
    pub thumbnail: Option<Image>,
    pub comics: Option<ResourceList<Comic>>,
    pub stories: Option<ResourceList<Story>>,
    pub events: Option<ResourceList<Event>>,
    pub series: Option<ResourceList<Series>>,
}

/// A single issue, collection or other publication.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comic {
    pub id: Option<u64>,
    pub digital_id: Option<u64>,
    pub title: Option<String>,
    /// Issue number; fractional for point issues such as `#19.1`.
    pub issue_number: Option<f64>,
    pub variant_description: Option<String>,
    pub description: Option<String>,
    pub modified: Option<Date>,
    pub isbn: Option<String>,
    pub upc: Option<String>,
    pub diamond_code: Option<String>,
    pub ean: Option<String>,
    pub issn: Option<String>,
    pub format: Option<String>,
    pub page_count: Option<u32>,
    pub text_objects: Option<Vec<TextObject>>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub urls: Option<Vec<ExternalUrl>>,
    pub series: Option<Summary<Series>>,
    pub variants: Option<Vec<Summary<Comic>>>,
    pub collections: Option<Vec<Summary<Comic>>>,
    pub collected_issues: Option<Vec<Summary<Comic>>>,
    pub dates: Option<Vec<ComicDate>>,
    pub prices: Option<Vec<ComicPrice>>,
    pub thumbnail: Option<Image>,
    pub images: Option<Vec<Image>>,
    pub creators: Option<ResourceList<Creator>>,
    pub characters: Option<ResourceList<Character>>,
    pub stories: Option<ResourceList<Story>>,
    pub events: Option<ResourceList<Event>>,
}

impl Comic {
    /// The date of the given type (e.g. `"onsaleDate"`), if listed.
    pub fn date(&self, kind: &str) -> Option<&Date> {
        self.dates
            .as_ref()?
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| &d.date)
    }
}

/// A writer, artist, editor or other contributor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub id: Option<u64>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub full_name: Option<String>,
    pub modified: Option<Date>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub urls: Option<Vec<ExternalUrl>>,
    pub thumbnail: Option<Image>,
    pub series: Option<ResourceList<Series>>,
    pub stories: Option<ResourceList<Story>>,
    pub comics: Option<ResourceList<Comic>>,
    pub events: Option<ResourceList<Event>>,
}

/// A crossover storyline spanning several series.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub urls: Option<Vec<ExternalUrl>>,
    pub modified: Option<Date>,
    pub start: Option<Date>,
    pub end: Option<Date>,
    pub thumbnail: Option<Image>,
    pub comics: Option<ResourceList<Comic>>,
    pub stories: Option<ResourceList<Story>>,
    pub series: Option<ResourceList<Series>>,
    pub characters: Option<ResourceList<Character>>,
    pub creators: Option<ResourceList<Creator>>,
    /// The event that follows this one.
    pub next: Option<Summary<Event>>,
    /// The event that precedes this one.
    pub previous: Option<Summary<Event>>,
}

/// A run of comics published under one title.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub urls: Option<Vec<ExternalUrl>>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub rating: Option<String>,
    /// Publication type, e.g. `"ongoing"`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub modified: Option<Date>,
    pub thumbnail: Option<Image>,
    pub comics: Option<ResourceList<Comic>>,
    pub stories: Option<ResourceList<Story>>,
    pub events: Option<ResourceList<Event>>,
    pub characters: Option<ResourceList<Character>>,
    pub creators: Option<ResourceList<Creator>>,
    pub next: Option<Summary<Series>>,
    pub previous: Option<Summary<Series>>,
}

/// An indivisible piece of content within a comic: a cover, an interior
/// story, a letters page.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub modified: Option<Date>,
    pub thumbnail: Option<Image>,
    pub comics: Option<ResourceList<Comic>>,
    pub series: Option<ResourceList<Series>>,
    pub events: Option<ResourceList<Event>>,
    pub characters: Option<ResourceList<Character>>,
    pub creators: Option<ResourceList<Creator>>,
    pub original_issue: Option<Summary<Comic>>,
}

impl Entity for Character {
    const KIND: ResourceKind = ResourceKind::Characters;

    fn resource_uri(&self) -> Option<&str> {
        self.resource_uri.as_deref()
    }
}

impl Entity for Comic {
    const KIND: ResourceKind = ResourceKind::Comics;

    fn resource_uri(&self) -> Option<&str> {
        self.resource_uri.as_deref()
    }
}

impl Entity for Creator {
    const KIND: ResourceKind = ResourceKind::Creators;

    fn resource_uri(&self) -> Option<&str> {
        self.resource_uri.as_deref()
    }
}

impl Entity for Event {
    const KIND: ResourceKind = ResourceKind::Events;

    fn resource_uri(&self) -> Option<&str> {
        self.resource_uri.as_deref()
    }
}

impl Entity for Series {
    const KIND: ResourceKind = ResourceKind::Series;

    fn resource_uri(&self) -> Option<&str> {
        self.resource_uri.as_deref()
    }
}

impl Entity for Story {
    const KIND: ResourceKind = ResourceKind::Stories;

    fn resource_uri(&self) -> Option<&str> {
        self.resource_uri.as_deref()
    }
}
