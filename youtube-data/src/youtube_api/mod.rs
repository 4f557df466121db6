//! YouTube Data API v3 client library.
//!
//! This module provides a client for the read-only metadata endpoints of the YouTube Data
//! API v3 that only need an API key: looking up videos and playlists by ID, listing playlist
//! items and channels, searching, and the "most popular" charts.
//!
//! # Requests
//!
//! Every operation follows the same pipeline:
//!
//! 1. Check that an API key is configured. If not, fail with [`Error::MissingKey`] without
//!    any network access.
//! 2. Start from just the `key` parameter and add the comma-joined `part` parameter.
//! 3. Add the operation's fixed parameters, then any supplied caller [`Params`].
//! 4. Send one GET request to `<base url><resource>?<query>`.
//! 5. Return the decoded body for `200 OK`, or the body's `error` member otherwise.
//!
//! Each call owns its parameters, so a single [`YouTubeClient`] can serve concurrent calls.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_data::{ListResponse, Params, YouTubeClient};
//!
//! # async fn example() -> eyre::Result<()> {
//! let yt = YouTubeClient::new().with_key("my-api-key");
//!
//! let params = Params::new().set("type", "video").set("order", "viewCount");
//! let results = yt.search("rust programming", 10, Some(&params)).await?;
//!
//! let results: ListResponse = ListResponse::from_value(results)?;
//! for item in results.items {
//!     if let Some(snippet) = &item.snippet {
//!         println!("{}: {}", item.id_str().unwrap_or("?"), snippet.title);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod params;
mod request;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{DEFAULT_BASE_URL, YouTubeClient};
pub use error::Error;
pub use params::Params;
pub use transport::{BoxError, HttpResponse, ReqwestTransport, Transport};
pub use types::{ListResponse, PageInfo, Resource, Snippet};
