use ::anyhow::Context as _;
use ::async_trait::async_trait;
use ::domain::Video;
use ::domain::VideoId;
use ::domain::VideoMetadata;
use ::use_cases::gateways::VideoMetadataFetcher;
use ::use_cases::models::descriptors::MetadataLookup;

use crate::utils::aliases::Fallible;
use crate::utils::aliases::MaybeOwnedString;

const YOUTUBE_DATA_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const VIDEO_PARTS: &str = "snippet,contentDetails,statistics";

/// Looks videos up through the YouTube Data API v3 `videos.list` endpoint.
#[derive(::bon::Builder)]
#[builder(on(_, into))]
pub struct YoutubeDataApiFetcher {
    api_key: MaybeOwnedString,

    #[builder(default = MaybeOwnedString::Borrowed(YOUTUBE_DATA_API_BASE_URL))]
    base_url: MaybeOwnedString,

    #[builder(default)]
    client: ::reqwest::Client,
}

#[async_trait]
impl VideoMetadataFetcher for YoutubeDataApiFetcher {
    async fn fetch(self: ::std::sync::Arc<Self>, id: &VideoId) -> Fallible<MetadataLookup> {
        ::tracing::debug!(id = &**id, base_url = &*self.base_url, "requesting video metadata");

        // Errors carry the request URL, which includes the API key
        let response = self
            .client
            .get(format!("{}/videos", self.base_url.trim_end_matches('/')))
            .query(&[("part", VIDEO_PARTS), ("id", &**id), ("key", &*self.api_key)])
            .send()
            .await
            .map_err(::reqwest::Error::without_url)
            .context("failed to reach the YouTube Data API")?
            .error_for_status()
            .map_err(::reqwest::Error::without_url)
            .context("the YouTube Data API rejected the request")?
            .json::<VideoListResponse>()
            .await
            .map_err(::reqwest::Error::without_url)
            .context("failed to decode the YouTube Data API response")?;

        Ok(response.into_lookup(id))
    }
}

#[derive(::serde::Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoResource>,
}

#[derive(::serde::Deserialize)]
struct VideoResource {
    snippet: VideoSnippet,
}

#[derive(::serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    title: String,
    #[serde(default)]
    description: String,
    channel_title: Option<String>,
    published_at: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl VideoListResponse {
    fn into_lookup(self, id: &VideoId) -> MetadataLookup {
        let Some(VideoResource { snippet }) = self.items.into_iter().next() else {
            return MetadataLookup::NotFound;
        };

        let metadata = VideoMetadata {
            title: snippet.title.into(),
            description: snippet.description.into(),
            channel: snippet.channel_title.map(Into::into),
            published_at: snippet.published_at.map(Into::into),
            tags: snippet.tags.into_iter().map(Into::into).collect::<Vec<_>>().into(),
        };

        MetadataLookup::Found(Video::new(id.clone(), metadata))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(json: &str) -> MetadataLookup {
        ::serde_json::from_str::<VideoListResponse>(json)
            .unwrap()
            .into_lookup(&VideoId::from("ABC123"))
    }

    #[test]
    fn reshapes_the_first_item_snippet() {
        let json = r#"{
            "kind": "youtube#videoListResponse",
            "items": [{
                "id": "ABC123",
                "snippet": {
                    "publishedAt": "2024-01-01T12:00:00Z",
                    "title": "Test Video",
                    "description": "desc",
                    "channelTitle": "Chan",
                    "tags": ["Foo Bar", "Baz"]
                },
                "contentDetails": { "duration": "PT4M13S" },
                "statistics": { "viewCount": "42" }
            }]
        }"#;

        let MetadataLookup::Found(video) = lookup(json) else {
            panic!("expected a video");
        };

        assert_eq!(&*video.id, "ABC123");
        assert_eq!(video.metadata.title, "Test Video");
        assert_eq!(video.metadata.description, "desc");
        assert_eq!(video.metadata.channel.as_deref(), Some("Chan"));
        assert_eq!(video.metadata.published_at.as_deref(), Some("2024-01-01T12:00:00Z"));
        assert_eq!(&*video.metadata.tags, ["Foo Bar", "Baz"]);
    }

    #[test]
    fn defaults_missing_tags_to_empty() {
        let json = r#"{ "items": [{ "snippet": { "title": "t", "description": "d", "channelTitle": "c" } }] }"#;

        let MetadataLookup::Found(video) = lookup(json) else {
            panic!("expected a video");
        };

        assert!(video.metadata.tags.is_empty());
        assert_eq!(video.metadata.published_at, None);
    }

    #[test]
    fn reports_empty_result_sets_as_not_found() {
        assert!(matches!(lookup(r#"{ "items": [] }"#), MetadataLookup::NotFound));
        assert!(matches!(lookup(r#"{ "kind": "youtube#videoListResponse" }"#), MetadataLookup::NotFound));
    }
}
