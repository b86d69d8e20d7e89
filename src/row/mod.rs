//! CSV row formatting
//!
//! Turns a `videos` resource into one line of the output file. Every data
//! field is stripped of newlines and double quotes and then wrapped in double
//! quotes, so a row never needs further escaping. The header is written
//! unquoted.

use crate::api::models::Scalar;
use crate::api::{VideoResource, VideoSnippet};

/// Snippet fields copied as-is, in column order
pub const SNIPPET_FEATURES: [&str; 5] = [
    "title",
    "publishedAt",
    "channelId",
    "channelTitle",
    "categoryId",
];

/// Characters removed from every field
pub const UNSAFE_CHARACTERS: [char; 2] = ['\n', '"'];

/// Placeholder for videos without tags
pub const NO_TAGS: &str = "[none]";

/// Column names in output order
pub fn header_columns() -> Vec<&'static str> {
    let mut columns = vec!["video_id"];
    columns.extend(SNIPPET_FEATURES);
    columns.extend([
        "trending",
        "tags",
        "view_count",
        "likes",
        "dislikes",
        "comment_count",
        "thumbnail_link",
        "comments_disabled",
        "ratings_disabled",
        "description",
    ]);
    columns
}

/// The header line
pub fn header() -> String {
    header_columns().join(",")
}

/// Remove unsafe characters and surround the value with double quotes
pub fn prepare_feature(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| !UNSAFE_CHARACTERS.contains(c))
        .collect();
    format!("\"{cleaned}\"")
}

/// Join tags with `|`, or the placeholder when the video has none
pub fn join_tags(tags: Option<&[String]>) -> String {
    match tags {
        Some(tags) => tags.join("|"),
        None => NO_TAGS.to_string(),
    }
}

fn python_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

fn scalar_or(value: Option<&Scalar>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), Scalar::to_string)
}

fn snippet_features(snippet: &VideoSnippet) -> [String; 5] {
    [
        &snippet.title,
        &snippet.published_at,
        &snippet.channel_id,
        &snippet.channel_title,
        &snippet.category_id,
    ]
    .map(|field| scalar_or(field.as_ref(), ""))
}

/// Format a video as a row
///
/// Returns `None` for videos without statistics, which usually means the
/// video was deleted or made private.
pub fn format_video(video: &VideoResource) -> Option<String> {
    let statistics = video.statistics.as_ref()?;
    let empty = VideoSnippet::default();
    let snippet = video.snippet.as_ref().unwrap_or(&empty);

    // Ratings and comments that are turned off are simply absent.
    let (likes, dislikes, ratings_disabled) =
        match (&statistics.like_count, &statistics.dislike_count) {
            (Some(likes), Some(dislikes)) => (likes.to_string(), dislikes.to_string(), false),
            _ => ("0".to_string(), "0".to_string(), true),
        };

    let (comment_count, comments_disabled) = match &statistics.comment_count {
        Some(count) => (count.to_string(), false),
        None => ("0".to_string(), true),
    };

    let mut fields: Vec<String> = Vec::with_capacity(16);
    fields.push(video.id.clone().unwrap_or_default());
    fields.extend(snippet_features(snippet));
    fields.extend([
        "0".to_string(),
        join_tags(snippet.tags.as_deref()),
        scalar_or(statistics.view_count.as_ref(), "0"),
        likes,
        dislikes,
        comment_count,
        snippet.default_thumbnail_url().to_string(),
        python_bool(comments_disabled).to_string(),
        python_bool(ratings_disabled).to_string(),
        snippet.description.clone().unwrap_or_default(),
    ]);

    let row: Vec<String> = fields.iter().map(|f| prepare_feature(f)).collect();
    Some(row.join(","))
}

/// Format every video that has statistics
///
/// # Returns
/// * `(Vec<String>, usize)` - Rows and the number of skipped videos
pub fn format_videos(videos: &[VideoResource]) -> (Vec<String>, usize) {
    let rows: Vec<String> = videos.iter().filter_map(format_video).collect();
    let skipped = videos.len() - rows.len();
    (rows, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn video(value: serde_json::Value) -> VideoResource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_header() {
        assert_eq!(
            header(),
            "video_id,title,publishedAt,channelId,channelTitle,categoryId,trending,tags,\
             view_count,likes,dislikes,comment_count,thumbnail_link,comments_disabled,\
             ratings_disabled,description"
        );
        assert_eq!(header_columns().len(), 16);
    }

    #[test]
    fn test_prepare_feature() {
        assert_eq!(prepare_feature("plain"), "\"plain\"");
        assert_eq!(prepare_feature("say \"hi\"\nbye, now"), "\"say hibye, now\"");
        assert_eq!(prepare_feature(""), "\"\"");
    }

    #[test]
    fn test_join_tags() {
        let tags = vec!["music".to_string(), "live".to_string()];
        assert_eq!(join_tags(Some(&tags)), "music|live");
        assert_eq!(join_tags(None), "[none]");
    }

    #[test]
    fn test_full_video_row() {
        let v = video(json!({
            "id": "abc123",
            "snippet": {
                "title": "A \"great\" video",
                "publishedAt": "2024-01-02T03:04:05Z",
                "channelId": "UC1",
                "channelTitle": "Chan",
                "categoryId": "10",
                "tags": ["a", "b"],
                "description": "line one\nline two",
                "thumbnails": { "default": { "url": "https://i.ytimg.com/vi/abc123/default.jpg" } }
            },
            "statistics": {
                "viewCount": "100",
                "likeCount": "7",
                "dislikeCount": "1",
                "commentCount": "3"
            }
        }));

        assert_eq!(
            format_video(&v).unwrap(),
            "\"abc123\",\"A great video\",\"2024-01-02T03:04:05Z\",\"UC1\",\"Chan\",\"10\",\
             \"0\",\"a|b\",\"100\",\"7\",\"1\",\"3\",\
             \"https://i.ytimg.com/vi/abc123/default.jpg\",\"False\",\"False\",\
             \"line oneline two\""
        );
    }

    #[test]
    fn test_disabled_ratings_and_comments() {
        // Current API responses no longer carry dislikeCount.
        let v = video(json!({
            "id": "v1",
            "snippet": { "title": "t" },
            "statistics": { "viewCount": "5", "likeCount": "2" }
        }));

        let row = format_video(&v).unwrap();
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 16);
        assert_eq!(fields[7], "\"[none]\"");
        assert_eq!(fields[8], "\"5\"");
        assert_eq!(fields[9], "\"0\"");
        assert_eq!(fields[10], "\"0\"");
        assert_eq!(fields[11], "\"0\"");
        assert_eq!(fields[12], "\"\"");
        assert_eq!(fields[13], "\"True\"");
        assert_eq!(fields[14], "\"True\"");
    }

    #[test]
    fn test_missing_view_count_defaults_to_zero() {
        let v = video(json!({ "id": "v1", "statistics": {} }));
        let row = format_video(&v).unwrap();
        assert!(row.starts_with("\"v1\",\"\",\"\",\"\",\"\",\"\",\"0\",\"[none]\",\"0\","));
    }

    #[test]
    fn test_numeric_statistics() {
        let v = video(json!({
            "id": "v1",
            "statistics": { "viewCount": 12, "likeCount": 3, "dislikeCount": 0, "commentCount": 4 }
        }));
        let row = format_video(&v).unwrap();
        assert!(row.contains("\"12\",\"3\",\"0\",\"4\""));
    }

    #[test]
    fn test_format_videos_skips_missing_statistics() {
        let videos = vec![
            video(json!({ "id": "gone", "snippet": { "title": "deleted" } })),
            video(json!({ "id": "ok", "statistics": { "viewCount": "1" } })),
        ];

        let (rows, skipped) = format_videos(&videos);
        assert_eq!(rows.len(), 1);
        assert_eq!(skipped, 1);
        assert!(rows[0].starts_with("\"ok\""));
    }
}
