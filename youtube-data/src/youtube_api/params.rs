//! Caller-supplied query parameters.

use indexmap::IndexMap;
use std::fmt::Display;

/// An ordered set of optional query parameters.
///
/// Used both for the extra parameters some operations accept and for the filters of
/// [`YouTubeClient::list_channels`](crate::YouTubeClient::list_channels). Entries keep the
/// order in which they were first inserted. An entry whose value is `None` is "not supplied":
/// it is skipped when the request is built and never overwrites a parameter the operation
/// already set.
///
/// ```
/// use youtube_data::Params;
///
/// let params = Params::new()
///     .set("order", "date")
///     .set("safeSearch", "strict")
///     .set_opt("pageToken", None::<&str>);
/// assert_eq!(params.get("order"), Some("date"));
/// assert_eq!(params.get("pageToken"), None);
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(IndexMap<String, Option<String>>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name` to `value`, replacing any earlier value but keeping its position.
    pub fn set(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, Some(value.to_string()));
        self
    }

    /// Sets `name` to `value` if there is one, and marks it as not supplied otherwise.
    pub fn set_opt(mut self, name: impl Into<String>, value: Option<impl Display>) -> Self {
        self.insert(name, value.map(|v| v.to_string()));
        self
    }

    /// Marks `name` as not supplied.
    pub fn unset(mut self, name: impl Into<String>) -> Self {
        self.insert(name, None);
        self
    }

    /// In-place variant of [`Self::set_opt`].
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.0.insert(name.into(), value);
    }

    /// The value of `name`, if it is present and supplied.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.as_deref()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all entries, supplied or not, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Iterates over the supplied entries only, in insertion order.
    pub fn supplied(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter_map(|(k, v)| Some((k, v?)))
    }

    /// `self` overlaid with `other`.
    ///
    /// Every entry of `other` replaces the entry of the same name in `self`, including entries
    /// that are not supplied. So a `None` in `other` hides a value from `self`.
    pub fn merged(&self, other: &Params) -> Params {
        let mut merged = self.clone();
        merged.0.extend(other.0.clone());
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, Some(v.to_string()));
        }
    }
}
