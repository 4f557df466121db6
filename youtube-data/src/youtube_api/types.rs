//! Typed views over the raw JSON that operations return.
//!
//! Operations hand back the API response as a [`serde_json::Value`] so that nothing the API
//! sends is lost. When only the common fields are of interest, convert the value with
//! [`ListResponse::from_value`].

use jiff::Timestamp;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response structure shared by every `*.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list#response>
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T = Resource> {
    /// Identifies the API resource's type, e.g. `youtube#searchListResponse`.
    pub kind: String,
    /// The resources that match the request criteria.
    // plain `default` would add a `T: Default` bound
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
    /// Token for the `pageToken` parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
    /// Token for the `pageToken` parameter to retrieve the previous page in the result set.
    #[serde(rename = "prevPageToken")]
    pub prev_page_token: Option<String>,
}

impl<T: DeserializeOwned> ListResponse<T> {
    /// Interprets an operation's result as a list response.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}

/// The fields every list item shares, whatever its kind.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resource {
    /// The resource ID.
    ///
    /// A plain string for videos, playlists and channels. Search results use an object such
    /// as `{"kind": "youtube#video", "videoId": "..."}` instead.
    pub id: Value,
    /// Basic details, present when the `snippet` part was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<Snippet>,
}

impl Resource {
    /// The resource's ID as a string, looking inside search-result ID objects.
    pub fn id_str(&self) -> Option<&str> {
        match &self.id {
            Value::String(id) => Some(id),
            Value::Object(id) => ["videoId", "channelId", "playlistId"]
                .iter()
                .find_map(|k| id.get(*k)?.as_str()),
            _ => None,
        }
    }
}

/// The `snippet` part of a video, playlist, playlist item, channel or search result.
///
/// Only the fields that all of those share are included.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Title of the channel the resource belongs to. Absent on channel snippets.
    #[serde(rename = "channelTitle", skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    /// When the resource was published or created, in ISO 8601 format.
    #[serde(rename = "publishedAt", skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn search_results() {
        let value = json!({
            "kind": "youtube#searchListResponse",
            "nextPageToken": "CAUQAA",
            "pageInfo": { "totalResults": 1000000, "resultsPerPage": 1 },
            "items": [{
                "kind": "youtube#searchResult",
                "id": { "kind": "youtube#video", "videoId": "dQw4w9WgXcQ" },
                "snippet": {
                    "publishedAt": "2009-10-25T06:57:33Z",
                    "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw",
                    "title": "Never Gonna Give You Up",
                    "description": "The official video",
                    "channelTitle": "Rick Astley"
                }
            }]
        });
        let list = ListResponse::<Resource>::from_value(value).unwrap();
        assert_eq!(list.kind, "youtube#searchListResponse");
        assert_eq!(list.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(list.page_info.unwrap().total_results, 1000000);
        let item = &list.items[0];
        assert_eq!(item.id_str(), Some("dQw4w9WgXcQ"));
        let snippet = item.snippet.as_ref().unwrap();
        assert_eq!(snippet.title, "Never Gonna Give You Up");
        assert_eq!(snippet.channel_title.as_deref(), Some("Rick Astley"));
        assert_eq!(
            snippet.published_at,
            Some("2009-10-25T06:57:33Z".parse().unwrap())
        );
    }

    #[test]
    fn items_without_snippet() {
        let value = json!({
            "kind": "youtube#videoListResponse",
            "items": [{ "kind": "youtube#video", "id": "abc", "statistics": { "viewCount": "1" } }]
        });
        let list = ListResponse::<Resource>::from_value(value).unwrap();
        assert!(list.page_info.is_none());
        assert_eq!(list.items[0].id_str(), Some("abc"));
        assert!(list.items[0].snippet.is_none());
    }

    #[test]
    fn missing_items_is_empty() {
        let list =
            ListResponse::<Resource>::from_value(json!({ "kind": "youtube#channelListResponse" }))
                .unwrap();
        assert!(list.items.is_empty());
    }
}
