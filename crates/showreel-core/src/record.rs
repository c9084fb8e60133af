//! The pass-through video metadata model.
//!
//! [`VideoRecord`] is the provider's representation of one video. Showreel
//! forwards records exactly as received: the named fields below are the ones
//! the clients render, and every unrecognized provider field is captured via
//! serde flatten so it survives the round trip untouched (`kind`, `etag`,
//! `contentDetails`, and whatever the provider adds next).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::VideoId;

/// A single thumbnail reference: a URL plus optional pixel dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Thumbnail image URL.
    pub url: String,
    /// Width in pixels, when the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels, when the provider reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// The descriptive portion of a video record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    /// Video title.
    #[serde(default)]
    pub title: String,
    /// Name of the channel (owning entity) that published the video.
    #[serde(default)]
    pub channel_title: String,
    /// Free-text description; possibly empty.
    #[serde(default)]
    pub description: String,
    /// Thumbnails keyed by resolution tag (`default`, `medium`, `high`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub thumbnails: BTreeMap<String, Thumbnail>,
    /// Unrecognized snippet fields, forwarded as received.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One video as the external metadata provider returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// The provider-namespace identifier.
    #[serde(default)]
    pub id: VideoId,
    /// Descriptive metadata; absent when the provider omitted the part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoSnippet>,
    /// Unrecognized top-level fields (`kind`, `etag`, `contentDetails`, ...),
    /// forwarded as received.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider_item() -> Value {
        json!({
            "kind": "youtube#video",
            "etag": "abc123",
            "id": "dQw4w9WgXcQ",
            "snippet": {
                "title": "Never Gonna Give You Up",
                "channelTitle": "Rick Astley",
                "description": "Official video",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/vi/dQw4w9WgXcQ/default.jpg", "width": 120, "height": 90 }
                },
                "publishedAt": "2009-10-25T06:57:33Z"
            },
            "contentDetails": { "duration": "PT3M33S" }
        })
    }

    #[test]
    fn record_round_trips_unrecognized_fields() {
        let item = provider_item();
        let record: VideoRecord = serde_json::from_value(item.clone()).unwrap();

        assert_eq!(record.id.as_str(), "dQw4w9WgXcQ");
        let snippet = record.snippet.as_ref().unwrap();
        assert_eq!(snippet.channel_title, "Rick Astley");
        assert_eq!(
            snippet.thumbnails.get("default").unwrap().width,
            Some(120)
        );

        // Pass-through contract: kind/etag/contentDetails/publishedAt survive.
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn record_tolerates_missing_parts() {
        let record: VideoRecord = serde_json::from_value(json!({ "id": "a1" })).unwrap();
        assert_eq!(record.id.as_str(), "a1");
        assert!(record.snippet.is_none());
    }

    #[test]
    fn snippet_defaults_missing_fields() {
        let snippet: VideoSnippet =
            serde_json::from_value(json!({ "title": "only a title" })).unwrap();
        assert_eq!(snippet.title, "only a title");
        assert!(snippet.channel_title.is_empty());
        assert!(snippet.thumbnails.is_empty());
    }
}
