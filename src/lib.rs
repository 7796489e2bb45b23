//! # Marvel Rust SDK
//!
//! Client for the Marvel Comics public catalog API
//! (`https://gateway.marvel.com/v1/public`).
//!
//! Every request is signed with your public and private key: the client adds
//! `ts`, `apikey` and `hash` (MD5 of timestamp, private key and public key)
//! to the query string of each call.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marvel::{Client, ComicsParams, Entity};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("public_key", "private_key");
//!
//!     // Issues of Uncanny X-Men (1963)
//!     let issues = client.series().comics(2258, &ComicsParams::default()).await?;
//!
//!     let first = &issues.data.results[0];
//!     println!("{:?}", first.title);
//!
//!     // Walk from the issue to everyone in it
//!     if let Some(characters) = &first.characters {
//!         let everyone = characters.list(&client).await?;
//!         for character in &everyone.data.results {
//!             println!("  {:?}", character.name);
//!         }
//!     }
//!
//!     // Re-fetch the issue itself in full
//!     let full = first.fetch(&client).await?;
//!     println!("{:?} pages", full.data.results[0].page_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination
//!
//! Listings return at most `limit` results (100 at most). The client does not
//! page on its own; use [`PageCursor`] or the helpers on [`DataContainer`] to
//! work out the next `offset`.
//!
//! ## Error Handling
//!
//! All operations return `Result<T, MarvelError>`:
//!
//! ```rust,no_run
//! use marvel::{Client, MarvelError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("public_key", "private_key");
//!
//!     match client.characters().get(1009610).await {
//!         Ok(found) => println!("{:?}", found.data.results[0].name),
//!         Err(e) if e.is_auth_error() => println!("Check your keys"),
//!         Err(MarvelError::Api { status_code, body }) => println!("{status_code}: {body}"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

pub mod auth;
pub mod characters;
pub mod client;
pub mod comics;
pub mod creators;
pub mod entities;
pub mod error;
pub mod events;
pub mod pagination;
pub mod params;
pub mod resource;
pub mod series;
pub mod stories;
pub mod types;

// Re-export main types at the crate root
pub use auth::{Clock, Credentials, FixedClock, SystemClock};
pub use client::{Client, ClientConfig};
pub use entities::{
    Character, CharactersResponse, Comic, ComicsResponse, Creator, CreatorsResponse, Entity,
    Event, EventsResponse, Series, SeriesResponse, StoriesResponse, Story,
};
pub use error::{MarvelError, Result};
pub use pagination::PageCursor;
pub use params::{
    CharactersParams, ComicsParams, CommonParams, CreatorsParams, EventsParams, SeriesParams,
    StoriesParams,
};
pub use resource::{ResourceKind, ResourcePath};
pub use types::{DataContainer, Date, Envelope, Image, ImageVariant, ResourceList, Summary};
