//! YouTube Data API client
//!
//! Wraps the three read-only endpoints a scrape run needs:
//! - `channels` to find a channel's uploads playlist
//! - `playlistItems` to list the most recent uploads (one page)
//! - `videos` to fetch snippet and statistics of a single video
//!
//! A 429 from any endpoint aborts the run with [`ApiError::RateLimited`].
//! Any other failed status is logged and treated as an empty result.

pub mod models;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, ErrorInfo, Result};

pub use models::{VideoResource, VideoSnippet, VideoStatistics};
pub use transport::{ApiResponse, HttpTransport, Transport};

pub const CHANNELS_ENDPOINT: &str = "channels";
pub const PLAYLIST_ITEMS_ENDPOINT: &str = "playlistItems";
pub const VIDEOS_ENDPOINT: &str = "videos";

/// HTTP status the API uses when a key is temporarily banned
pub const TOO_MANY_REQUESTS: u16 = 429;

/// Client for the YouTube Data API
pub struct YouTubeClient {
    transport: Box<dyn Transport>,
    api_key: String,
    max_results: String,
}

impl YouTubeClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `transport` - Transport used for every request
    /// * `api_key` - Static API key appended to each request
    /// * `max_results` - Page size for the uploads listing
    pub fn new(transport: Box<dyn Transport>, api_key: impl Into<String>, max_results: u32) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            max_results: max_results.to_string(),
        }
    }

    /// Resolve the uploads playlist of a channel
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Playlist ID, or `None` if the channel has none
    pub async fn uploads_playlist_id(&self, channel_id: &str) -> Result<Option<String>> {
        let resp: models::ChannelListResponse = self
            .fetch(
                CHANNELS_ENDPOINT,
                &[("part", "contentDetails"), ("id", channel_id)],
            )
            .await?;

        let uploads = resp.uploads_playlist_id().map(str::to_string);
        if uploads.is_none() {
            debug!("Channel {} has no uploads playlist", channel_id);
        }
        Ok(uploads)
    }

    /// List the video IDs on the first page of a playlist
    pub async fn playlist_video_ids(&self, playlist_id: &str) -> Result<Vec<String>> {
        let resp: models::PlaylistItemListResponse = self
            .fetch(
                PLAYLIST_ITEMS_ENDPOINT,
                &[
                    ("part", "snippet"),
                    ("maxResults", self.max_results.as_str()),
                    ("playlistId", playlist_id),
                ],
            )
            .await?;

        Ok(resp.video_ids())
    }

    /// Fetch id, snippet and statistics of a video
    pub async fn videos(&self, video_id: &str) -> Result<Vec<VideoResource>> {
        let resp: models::VideoListResponse = self
            .fetch(
                VIDEOS_ENDPOINT,
                &[("part", "id,statistics,snippet"), ("id", video_id)],
            )
            .await?;

        Ok(resp.items)
    }

    async fn fetch<R>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<R>
    where
        R: DeserializeOwned + Default,
    {
        let mut query: Vec<(&str, &str)> = params.to_vec();
        query.push(("key", self.api_key.as_str()));

        let resp = self.transport.get(endpoint, &query).await?;

        if resp.status == TOO_MANY_REQUESTS {
            return Err(ApiError::RateLimited.into());
        }

        if !resp.is_success() {
            match ErrorInfo::from_body(&resp.body) {
                Some(info) => warn!("{} request failed: {}", endpoint, info),
                None => warn!("{} request failed with status {}", endpoint, resp.status),
            }
            return Ok(R::default());
        }

        Ok(serde_json::from_value(resp.body)?)
    }
}
