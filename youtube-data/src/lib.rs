//! Client for the key-authenticated metadata endpoints of the YouTube Data API v3.
//!
//! See [`youtube_api`] for an overview.

pub mod youtube_api;

pub use youtube_api::{
    BoxError, DEFAULT_BASE_URL, Error, HttpResponse, ListResponse, PageInfo, Params,
    ReqwestTransport, Resource, Snippet, Transport, YouTubeClient,
};
