//! YouTube Data API v3 response models
//!
//! Every field is optional: the API omits fields freely (deleted videos have
//! no statistics, disabled ratings drop the like counts) and a missing field
//! must never fail the whole response.

use std::fmt;

use serde::Deserialize;

/// A JSON scalar rendered the way it appears in the output file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::Bool(true) => f.write_str("True"),
            Scalar::Bool(false) => f.write_str("False"),
        }
    }
}

// Channels

#[derive(Debug, Default, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelResource>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelResource {
    #[serde(rename = "contentDetails")]
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: Option<RelatedPlaylists>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

impl ChannelListResponse {
    /// Uploads playlist of the first channel, if it has a non-empty one
    pub fn uploads_playlist_id(&self) -> Option<&str> {
        self.items
            .first()?
            .content_details
            .as_ref()?
            .related_playlists
            .as_ref()?
            .uploads
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

// Playlist items

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItemResource>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemResource {
    pub snippet: Option<PlaylistItemSnippet>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItemSnippet {
    #[serde(rename = "resourceId")]
    pub resource_id: Option<ResourceId>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

impl PlaylistItemListResponse {
    /// Video IDs of the page, skipping items without one
    pub fn video_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.snippet.as_ref()?.resource_id.as_ref()?.video_id.clone())
            .filter(|id| !id.is_empty())
            .collect()
    }
}

// Videos

#[derive(Debug, Default, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoResource>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct VideoResource {
    pub id: Option<String>,
    pub snippet: Option<VideoSnippet>,
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct VideoSnippet {
    pub title: Option<Scalar>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<Scalar>,
    #[serde(rename = "channelId")]
    pub channel_id: Option<Scalar>,
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<Scalar>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<Scalar>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct VideoStatistics {
    #[serde(rename = "viewCount")]
    pub view_count: Option<Scalar>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<Scalar>,
    #[serde(rename = "dislikeCount")]
    pub dislike_count: Option<Scalar>,
    #[serde(rename = "commentCount")]
    pub comment_count: Option<Scalar>,
}

impl VideoSnippet {
    /// URL of the default-size thumbnail, empty when absent
    pub fn default_thumbnail_url(&self) -> &str {
        self.thumbnails
            .as_ref()
            .and_then(|t| t.default.as_ref())
            .and_then(|t| t.url.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_uploads_playlist_id() {
        let resp: ChannelListResponse = serde_json::from_value(json!({
            "items": [{ "contentDetails": { "relatedPlaylists": { "uploads": "UUabc", "likes": "" } } }]
        }))
        .unwrap();
        assert_eq!(resp.uploads_playlist_id(), Some("UUabc"));
    }

    #[test]
    fn test_uploads_playlist_id_missing() {
        let empty: ChannelListResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.uploads_playlist_id(), None);

        let no_details: ChannelListResponse =
            serde_json::from_value(json!({ "items": [{ "id": "UC1" }] })).unwrap();
        assert_eq!(no_details.uploads_playlist_id(), None);

        let blank: ChannelListResponse = serde_json::from_value(json!({
            "items": [{ "contentDetails": { "relatedPlaylists": { "uploads": "" } } }]
        }))
        .unwrap();
        assert_eq!(blank.uploads_playlist_id(), None);
    }

    #[test]
    fn test_playlist_video_ids() {
        let resp: PlaylistItemListResponse = serde_json::from_value(json!({
            "items": [
                { "snippet": { "resourceId": { "kind": "youtube#video", "videoId": "v1" } } },
                { "snippet": { "title": "no resource" } },
                { "snippet": { "resourceId": { "videoId": "v2" } } }
            ]
        }))
        .unwrap();
        assert_eq!(resp.video_ids(), vec!["v1", "v2"]);
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::Text("12".into()).to_string(), "12");
        assert_eq!(Scalar::Number(42.into()).to_string(), "42");
        assert_eq!(Scalar::Bool(false).to_string(), "False");
    }

    #[test]
    fn test_video_without_statistics() {
        let resp: VideoListResponse = serde_json::from_value(json!({
            "items": [{ "id": "v1", "snippet": { "title": "t" } }]
        }))
        .unwrap();
        assert!(resp.items[0].statistics.is_none());
        assert_eq!(resp.items[0].snippet.as_ref().unwrap().default_thumbnail_url(), "");
    }
}
