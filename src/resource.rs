//! Resource kinds and the paths that address them.

use crate::error::{MarvelError, Result};
use reqwest::Url;
use std::fmt;
use std::str::FromStr;

/// Path prefix shared by every public API endpoint.
pub const BASE_PATH: &str = "/v1/public";

/// One of the six entity types the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Characters,
    Comics,
    Creators,
    Events,
    Series,
    Stories,
}

impl ResourceKind {
    /// All kinds, in API documentation order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Characters,
        ResourceKind::Comics,
        ResourceKind::Creators,
        ResourceKind::Events,
        ResourceKind::Series,
        ResourceKind::Stories,
    ];

    /// The plural path segment for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Characters => "characters",
            ResourceKind::Comics => "comics",
            ResourceKind::Creators => "creators",
            ResourceKind::Events => "events",
            ResourceKind::Series => "series",
            ResourceKind::Stories => "stories",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = MarvelError;

    fn from_str(s: &str) -> Result<Self> {
        ResourceKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| MarvelError::InvalidUri(format!("unknown resource kind {s:?}")))
    }
}

/// A path below [`BASE_PATH`]: `/{kind}[/{id}][/{relation}]`.
///
/// A relation is only meaningful together with an id; the constructors
/// enforce that shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    kind: ResourceKind,
    id: Option<u64>,
    relation: Option<ResourceKind>,
}

impl ResourcePath {
    /// Collection path, e.g. `/comics`.
    pub fn collection(kind: ResourceKind) -> Self {
        Self {
            kind,
            id: None,
            relation: None,
        }
    }

    /// Singleton path, e.g. `/comics/123`.
    pub fn single(kind: ResourceKind, id: u64) -> Self {
        Self {
            kind,
            id: Some(id),
            relation: None,
        }
    }

    /// Related collection path, e.g. `/comics/123/characters`.
    pub fn related(kind: ResourceKind, id: u64, relation: ResourceKind) -> Self {
        Self {
            kind,
            id: Some(id),
            relation: Some(relation),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn relation(&self) -> Option<ResourceKind> {
        self.relation
    }

    /// The kind of entity a request to this path returns.
    pub fn result_kind(&self) -> ResourceKind {
        self.relation.unwrap_or(self.kind)
    }

    /// Maps an absolute link embedded in a response (a `resourceURI` or
    /// `collectionURI`) back onto a path.
    ///
    /// Scheme and host are ignored; the API hands out `http://` links to
    /// resources it only serves over HTTPS.
    pub fn from_uri(uri: &str) -> Result<Self> {
        let url = Url::parse(uri).map_err(|e| MarvelError::InvalidUri(format!("{uri}: {e}")))?;
        let rest = url
            .path()
            .strip_prefix(BASE_PATH)
            .filter(|rest| rest.starts_with('/'))
            .ok_or_else(|| MarvelError::InvalidUri(format!("{uri}: not under {BASE_PATH}")))?;
        rest.parse::<ResourcePath>()
            .map_err(|e| MarvelError::InvalidUri(format!("{uri}: {e}")))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.kind)?;
        if let Some(id) = self.id {
            write!(f, "/{id}")?;
        }
        if let Some(relation) = self.relation {
            write!(f, "/{relation}")?;
        }
        Ok(())
    }
}

impl FromStr for ResourcePath {
    type Err = MarvelError;

    /// Parses `/{kind}[/{id}][/{relation}]`. A single trailing slash is
    /// tolerated; empty segments elsewhere are not.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.strip_prefix('/').unwrap_or(s);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let segments: Vec<&str> = trimmed.split('/').collect();

        let parse_id = |seg: &str| {
            seg.parse::<u64>()
                .map_err(|_| MarvelError::InvalidUri(format!("bad id {seg:?} in {s:?}")))
        };

        match segments.as_slice() {
            [kind] => Ok(Self::collection(kind.parse()?)),
            [kind, id] => Ok(Self::single(kind.parse()?, parse_id(*id)?)),
            [kind, id, relation] => Ok(Self::related(
                kind.parse()?,
                parse_id(*id)?,
                relation.parse()?,
            )),
            _ => Err(MarvelError::InvalidUri(format!("unrecognised path {s:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_paths() {
        for kind in ResourceKind::ALL {
            let path = ResourcePath::single(kind, 2258).to_string();
            assert_eq!(path, format!("/{}/2258", kind.as_str()));
            assert!(!path.contains("//"));
            assert!(!path.ends_with('/'));
        }
    }

    #[test]
    fn test_collection_and_related_paths() {
        assert_eq!(
            ResourcePath::collection(ResourceKind::Comics).to_string(),
            "/comics"
        );
        assert_eq!(
            ResourcePath::related(ResourceKind::Comics, 123, ResourceKind::Characters).to_string(),
            "/comics/123/characters"
        );
    }

    #[test]
    fn test_result_kind() {
        let path = ResourcePath::related(ResourceKind::Series, 2258, ResourceKind::Comics);
        assert_eq!(path.result_kind(), ResourceKind::Comics);
        assert_eq!(
            ResourcePath::single(ResourceKind::Events, 1).result_kind(),
            ResourceKind::Events
        );
    }

    #[test]
    fn test_parse_round_trip() {
        for text in ["/stories", "/stories/7", "/stories/7/creators"] {
            let path: ResourcePath = text.parse().unwrap();
            assert_eq!(path.to_string(), text);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("/villains/1".parse::<ResourcePath>().is_err());
        assert!("/comics/abc".parse::<ResourcePath>().is_err());
        assert!("/comics//characters".parse::<ResourcePath>().is_err());
        assert!("/comics/1/characters/2".parse::<ResourcePath>().is_err());
    }

    #[test]
    fn test_from_uri_strips_base_path() {
        let path =
            ResourcePath::from_uri("http://gateway.marvel.com/v1/public/comics/42/characters")
                .unwrap();
        assert_eq!(
            path,
            ResourcePath::related(ResourceKind::Comics, 42, ResourceKind::Characters)
        );
    }

    #[test]
    fn test_from_uri_rejects_foreign_paths() {
        assert!(ResourcePath::from_uri("http://gateway.marvel.com/v2/comics/42").is_err());
        assert!(ResourcePath::from_uri("http://gateway.marvel.com/v1/publicity/1").is_err());
        assert!(ResourcePath::from_uri("not a url").is_err());
    }
}
