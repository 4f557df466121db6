//! Per-call request state: the resource, its parts and its query parameters.

use crate::youtube_api::params::Params;
use indexmap::IndexMap;

/// One API request under construction.
///
/// Every operation starts a fresh `ApiRequest`, so concurrent operations on the same
/// client never see each other's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiRequest {
    resource: &'static str,
    parts: Vec<String>,
    params: IndexMap<String, String>,
}

impl ApiRequest {
    /// Starts a request for `resource` whose only parameter is the API key.
    pub(crate) fn new(resource: &'static str, key: &str) -> Self {
        let mut params = IndexMap::new();
        params.insert("key".to_string(), key.to_string());
        Self {
            resource,
            parts: Vec::new(),
            params,
        }
    }

    /// Appends `parts` and (re)writes the comma-joined `part` parameter.
    pub(crate) fn parts<I, S>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parts.extend(parts.into_iter().map(Into::into));
        let joined = self.parts.join(",");
        self.param("part", joined)
    }

    pub(crate) fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.insert(name.to_string(), value.to_string());
        self
    }

    /// Applies every supplied entry of `overrides`, in order.
    ///
    /// Entries that are not supplied leave existing parameters alone.
    pub(crate) fn overrides(mut self, overrides: Option<&Params>) -> Self {
        for (name, value) in overrides.into_iter().flat_map(Params::supplied) {
            self = self.param(name, value);
        }
        self
    }

    pub(crate) fn resource(&self) -> &'static str {
        self.resource
    }

    /// The urlencoded query string, in parameter insertion order.
    pub(crate) fn query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish()
    }

    /// The full request URL below `base`.
    pub(crate) fn url(&self, base: &str) -> String {
        format!("{}{}?{}", base, self.resource, self.query())
    }

    /// Like [`Self::url`], but with the API key hidden, for logs and errors.
    pub(crate) fn redacted_url(&self, base: &str) -> String {
        let mut redacted = self.clone();
        if let Some(key) = redacted.params.get_mut("key") {
            *key = "REDACTED".to_string();
        }
        redacted.url(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    const BASE: &str = "https://www.googleapis.com/youtube/v3/";

    #[test]
    fn key_comes_first_then_part() {
        let req = ApiRequest::new("videos", "k")
            .parts(["contentDetails", "statistics", "liveStreamingDetails"])
            .param("id", "dQw4w9WgXcQ");
        assert_snapshot!(
            req.url(BASE),
            @"https://www.googleapis.com/youtube/v3/videos?key=k&part=contentDetails%2Cstatistics%2CliveStreamingDetails&id=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn values_are_encoded() {
        let req = ApiRequest::new("search", "k")
            .parts(["snippet"])
            .param("q", "cats & dogs")
            .param("maxResults", 5);
        assert_snapshot!(req.query(), @"key=k&part=snippet&q=cats+%26+dogs&maxResults=5");
    }

    #[test]
    fn overrides_replace_in_place_and_skip_unsupplied() {
        let overrides = Params::new()
            .set("maxResults", 50)
            .unset("q")
            .set("order", "date");
        let req = ApiRequest::new("search", "k")
            .parts(["snippet"])
            .param("q", "cats")
            .param("maxResults", 5)
            .overrides(Some(&overrides));
        assert_snapshot!(req.query(), @"key=k&part=snippet&q=cats&maxResults=50&order=date");
    }

    #[test]
    fn overrides_may_replace_part_and_key() {
        let overrides = Params::new().set("part", "id").set("key", "other");
        let req = ApiRequest::new("search", "k")
            .parts(["snippet"])
            .overrides(Some(&overrides));
        assert_eq!(req.query(), "key=other&part=id");
    }

    #[test]
    fn no_overrides() {
        let req = ApiRequest::new("videos", "k").parts(["snippet"]).overrides(None);
        assert_eq!(req.query(), "key=k&part=snippet");
        assert_eq!(req.resource(), "videos");
    }

    #[test]
    fn redaction_hides_only_the_key() {
        let req = ApiRequest::new("videos", "secret").param("id", "abc");
        assert_eq!(
            req.redacted_url(BASE),
            "https://www.googleapis.com/youtube/v3/videos?key=REDACTED&id=abc"
        );
    }
}
