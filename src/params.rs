//! Query parameters for listing endpoints.
//!
//! Each resource kind has its own filter struct. Unset fields are left out of
//! the query string entirely, and list-valued filters are sent comma-joined as
//! the API expects (`characters=1009610,1009718`).

use serde::{Serialize, Serializer};
use std::fmt::Display;

/// Filters accepted by every listing call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonParams {
    /// Number of results to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Page size (the API caps this at 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Sort field, prefixed with `-` for descending (e.g. `-onsaleDate`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Only entities modified since this date (`YYYY-MM-DD` or full timestamp).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_since: Option<String>,
}

impl CommonParams {
    /// A single page at `offset` of at most `limit` results.
    pub fn page(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
            ..Default::default()
        }
    }
}

/// Serialize a list as one comma-joined value.
#[allow(clippy::ptr_arg)]
pub(crate) fn comma_joined<T, S>(values: &Vec<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

/// Publication format of a comic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComicFormat {
    #[serde(rename = "comic")]
    Comic,
    #[serde(rename = "magazine")]
    Magazine,
    #[serde(rename = "trade paperback")]
    TradePaperback,
    #[serde(rename = "hardcover")]
    Hardcover,
    #[serde(rename = "digest")]
    Digest,
    #[serde(rename = "graphic novel")]
    GraphicNovel,
    #[serde(rename = "digital comic")]
    DigitalComic,
    #[serde(rename = "infinite comic")]
    InfiniteComic,
}

/// Whether a comic is a single issue or a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Comic,
    Collection,
}

/// Relative on-sale window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DateDescriptor {
    LastWeek,
    ThisWeek,
    NextWeek,
    ThisMonth,
}

/// Publication type of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SeriesType {
    #[serde(rename = "collection")]
    Collection,
    #[serde(rename = "one shot")]
    OneShot,
    #[serde(rename = "limited")]
    Limited,
    #[serde(rename = "ongoing")]
    Ongoing,
}

impl Display for ComicFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ComicFormat::Comic => "comic",
            ComicFormat::Magazine => "magazine",
            ComicFormat::TradePaperback => "trade paperback",
            ComicFormat::Hardcover => "hardcover",
            ComicFormat::Digest => "digest",
            ComicFormat::GraphicNovel => "graphic novel",
            ComicFormat::DigitalComic => "digital comic",
            ComicFormat::InfiniteComic => "infinite comic",
        })
    }
}

/// Filters for `/characters` and `/{kind}/{id}/characters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharactersParams {
    #[serde(flatten)]
    pub common: CommonParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub comics: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub series: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub events: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub stories: Vec<u64>,
}

/// Filters for `/comics` and `/{kind}/{id}/comics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComicsParams {
    #[serde(flatten)]
    pub common: CommonParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ComicFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_type: Option<FormatType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_variants: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_descriptor: Option<DateDescriptor>,
    /// On-sale window as two dates, sent as `dateRange=start,end`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_date_range"
    )]
    pub date_range: Option<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diamond_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_digital_issue: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub creators: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub characters: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub series: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub events: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub stories: Vec<u64>,
    /// Comics in which all of these characters appear together.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub shared_appearances: Vec<u64>,
    /// Comics on which all of these creators worked together.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub collaborators: Vec<u64>,
}

fn serialize_date_range<S: Serializer>(
    range: &Option<(String, String)>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match range {
        Some((start, end)) => serializer.serialize_str(&format!("{start},{end}")),
        None => serializer.serialize_none(),
    }
}

/// Filters for `/creators` and `/{kind}/{id}/creators`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorsParams {
    #[serde(flatten)]
    pub common: CommonParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub comics: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub series: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub events: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub stories: Vec<u64>,
}

/// Filters for `/events` and `/{kind}/{id}/events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsParams {
    #[serde(flatten)]
    pub common: CommonParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub creators: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub characters: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub series: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub comics: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub stories: Vec<u64>,
}

/// Filters for `/series` and `/{kind}/{id}/series`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesParams {
    #[serde(flatten)]
    pub common: CommonParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_starts_with: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_type: Option<SeriesType>,
    /// Only series containing at least one comic of these formats.
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub contains: Vec<ComicFormat>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub comics: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub stories: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub events: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub creators: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub characters: Vec<u64>,
}

/// Filters for `/stories` and `/{kind}/{id}/stories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoriesParams {
    #[serde(flatten)]
    pub common: CommonParams,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub comics: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub series: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub events: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub creators: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty", serialize_with = "comma_joined")]
    pub characters: Vec<u64>,
}

/// Every per-kind filter struct can be built from just the common filters.
macro_rules! from_common {
    ($($params:ty),* $(,)?) => {
        $(
            impl From<CommonParams> for $params {
                fn from(common: CommonParams) -> Self {
                    Self {
                        common,
                        ..Default::default()
                    }
                }
            }
        )*
    };
}

from_common!(
    CharactersParams,
    ComicsParams,
    CreatorsParams,
    EventsParams,
    SeriesParams,
    StoriesParams,
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_are_skipped() {
        let params = ComicsParams::default();
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_common_fields_are_flattened() {
        let params = ComicsParams {
            common: CommonParams {
                offset: Some(0),
                limit: Some(100),
                order_by: Some("onsaleDate".to_string()),
                modified_since: None,
            },
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({"offset": 0, "limit": 100, "orderBy": "onsaleDate"})
        );
    }

    #[test]
    fn test_lists_are_comma_joined() {
        let params = ComicsParams {
            characters: vec![1009610, 1009718],
            format: Some(ComicFormat::TradePaperback),
            date_range: Some(("2013-01-01".to_string(), "2013-01-31".to_string())),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "format": "trade paperback",
                "dateRange": "2013-01-01,2013-01-31",
                "characters": "1009610,1009718",
            })
        );
    }

    #[test]
    fn test_series_contains_formats() {
        let params = SeriesParams {
            contains: vec![ComicFormat::Comic, ComicFormat::GraphicNovel],
            series_type: Some(SeriesType::OneShot),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({"seriesType": "one shot", "contains": "comic,graphic novel"})
        );
    }

    #[test]
    fn test_zero_offset_is_sent() {
        let value = serde_json::to_value(CommonParams::page(0, 20)).unwrap();
        assert_eq!(value, json!({"offset": 0, "limit": 20}));
    }

    #[test]
    fn test_from_common() {
        let params: StoriesParams = CommonParams::page(40, 20).into();
        assert_eq!(params.common.offset, Some(40));
        assert!(params.characters.is_empty());
    }
}
