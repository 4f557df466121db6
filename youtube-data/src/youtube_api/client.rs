//! The API-key authenticated YouTube Data API client.

use crate::youtube_api::{
    error::Error,
    params::Params,
    request::ApiRequest,
    transport::{ReqwestTransport, Transport},
};
use serde_json::Value;
use tracing::instrument;

/// Root of the YouTube Data API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Client for the read-only, key-authenticated parts of the YouTube Data API v3.
///
/// Every operation validates that an API key is present, builds its own set of query
/// parameters (always starting with `key` and `part`), performs exactly one GET request and
/// returns the decoded JSON body. No state is shared between calls apart from the key, so
/// operations may run concurrently on the same client.
///
/// Operations resolve to:
///
/// * `Ok(body)` if the API answered `200 OK`. A body that isn't valid JSON is returned as an
///   empty object rather than an error.
/// * `Err(Error::Api { .. })` for any other status, carrying the `error` member of the body.
/// * `Err(Error::Transport { .. })` if the request could not be performed.
/// * `Err(Error::MissingKey)` without touching the network if no key was configured.
#[derive(Debug, Clone)]
pub struct YouTubeClient<T = ReqwestTransport> {
    /// API key sent as the `key` parameter of every request.
    key: Option<String>,
    /// Base URL that resource names are appended to.
    base_url: String,
    /// HTTP layer used for requests.
    transport: T,
}

impl YouTubeClient {
    /// Creates a client without an API key that talks to [`DEFAULT_BASE_URL`] using a default
    /// [`reqwest::Client`].
    pub fn new() -> Self {
        Self::with_transport(ReqwestTransport::default())
    }
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> YouTubeClient<T> {
    /// Creates a client without an API key that sends its requests through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self {
            key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Sets the API key, consuming and returning the client.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.set_key(key);
        self
    }

    /// Points the client at a different API root.
    ///
    /// A trailing `/` is added if missing, since resource names are appended directly.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Sets the API key used for all subsequent requests.
    ///
    /// Get one from <https://console.developers.google.com>.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    /// The configured API key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The API root that resource names are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Starts a request for `resource`, or fails if there is no usable API key.
    fn start(&self, resource: &'static str) -> Result<ApiRequest, Error> {
        match self.key.as_deref() {
            Some(key) if !key.is_empty() => Ok(ApiRequest::new(resource, key)),
            _ => {
                tracing::warn!(resource, "no YouTube API key set, not sending request");
                Err(Error::MissingKey)
            }
        }
    }

    /// Gets content details, statistics and live streaming details for a video.
    ///
    /// `id` may also be a comma-separated list of video IDs.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Value, Error> {
        let request = self
            .start("videos")?
            .parts(["contentDetails", "statistics", "liveStreamingDetails"])
            .param("id", id);
        self.send(request).await
    }

    /// Gets snippet, content details, status, player and ID of a playlist.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/playlists/list>
    #[instrument(skip(self))]
    pub async fn get_playlist_by_id(&self, id: &str) -> Result<Value, Error> {
        let request = self
            .start("playlists")?
            .parts(["snippet", "contentDetails", "status", "player", "id"])
            .param("id", id);
        self.send(request).await
    }

    /// Lists the items of a playlist.
    ///
    /// Any supplied entry in `params` is added to the request, overriding the defaults.
    /// Pass a `pageToken` there to fetch a later page.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self, params))]
    pub async fn get_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        params: Option<&Params>,
    ) -> Result<Value, Error> {
        let request = self
            .start("playlistItems")?
            .parts(["id", "snippet"])
            .param("playlistId", playlist_id)
            .param("maxResults", max_results)
            .overrides(params);
        self.send(request).await
    }

    /// Searches for videos, channels and playlists matching `query`.
    ///
    /// Any supplied entry in `params` is added to the request, overriding the defaults, for
    /// example `type`, `order`, `channelId` or `publishedAfter`.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self, params))]
    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        params: Option<&Params>,
    ) -> Result<Value, Error> {
        let request = self
            .start("search")?
            .parts(["snippet"])
            .param("q", query)
            .param("maxResults", max_results)
            .overrides(params);
        self.send(request).await
    }

    /// Searches for videos related to `video_id`, most relevant first.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    pub async fn related(&self, video_id: &str, max_results: u32) -> Result<Value, Error> {
        let request = self
            .start("search")?
            .parts(["snippet"])
            .param("relatedToVideoId", video_id)
            .param("maxResults", max_results)
            .param("type", "video")
            .param("order", "relevance");
        self.send(request).await
    }

    /// Lists the currently most popular videos.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    pub async fn most_popular(&self, max_results: u32) -> Result<Value, Error> {
        let request = self
            .start("videos")?
            .parts(["snippet"])
            .param("maxResults", max_results)
            .param("chart", "mostPopular");
        self.send(request).await
    }

    /// Lists the currently most popular videos in one video category.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/videoCategories>
    #[instrument(skip(self))]
    pub async fn most_popular_by_category(
        &self,
        max_results: u32,
        video_category_id: &str,
    ) -> Result<Value, Error> {
        let request = self
            .start("videos")?
            .parts(["snippet"])
            .param("maxResults", max_results)
            .param("chart", "mostPopular")
            .param("videoCategoryId", video_category_id);
        self.send(request).await
    }

    /// Lists channels matching `filters`, including the requested `parts`.
    ///
    /// `filters` selects the channels (e.g. `id` with a comma-separated list of channel IDs,
    /// `forHandle` or `categoryId`). `params` holds any other optional parameters. The two
    /// are merged, with `params` taking precedence, before being added to the request.
    ///
    /// See: <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self, filters, parts, params))]
    pub async fn list_channels<I, S>(
        &self,
        filters: &Params,
        parts: I,
        params: Option<&Params>,
    ) -> Result<Value, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let all = match params {
            Some(params) => filters.merged(params),
            None => filters.clone(),
        };
        let request = self.start("channels")?.parts(parts).overrides(Some(&all));
        self.send(request).await
    }

    /// Performs `request` and turns the response into the operation's result.
    async fn send(&self, request: ApiRequest) -> Result<Value, Error> {
        let redacted = request.redacted_url(&self.base_url);
        tracing::debug!(url = %redacted, "sending GET request to YouTube API");

        let response = match self.transport.get(&request.url(&self.base_url)).await {
            Ok(response) => response,
            Err(source) => {
                tracing::debug!(url = %redacted, error = %source, "YouTube API request failed");
                return Err(Error::Transport {
                    url: redacted,
                    source,
                });
            }
        };

        let mut body = match serde_json::from_str::<Value>(&response.body) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    resource = request.resource(),
                    status = response.status,
                    error = %e,
                    "YouTube API response is not valid JSON, treating it as empty"
                );
                Value::Object(Default::default())
            }
        };

        if response.status == 200 {
            tracing::debug!(resource = request.resource(), "YouTube API request succeeded");
            Ok(body)
        } else {
            let error = body.get_mut("error").map(Value::take);
            tracing::debug!(
                resource = request.resource(),
                status = response.status,
                ?error,
                "YouTube API returned an error"
            );
            Err(Error::Api {
                status: response.status,
                error,
            })
        }
    }
}
