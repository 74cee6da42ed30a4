pub(crate) mod utils;

pub mod embeds;
pub mod resolutions;
pub mod sanitizers;

use ::derive_new::new;

use crate::utils::aliases::MaybeOwnedString;
use crate::utils::aliases::MaybeOwnedVec;

pub use crate::embeds::EmbedCode;
pub use crate::resolutions::Resolution;
pub use crate::resolutions::RESOLUTIONS;

#[derive(Debug, Clone, new)]
pub struct Video {
    pub id: VideoId,
    pub metadata: VideoMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: MaybeOwnedString,
    pub description: MaybeOwnedString,
    pub channel: Option<MaybeOwnedString>,
    pub published_at: Option<MaybeOwnedString>,

    /// Raw tags, in the order the upstream service lists them.
    pub tags: MaybeOwnedVec<MaybeOwnedString>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoUrl(MaybeOwnedString);

impl VideoUrl {
    /// Recognizes `youtu.be/<id>`, `youtube.com/watch?v=<id>`, `youtube.com/embed/<id>`
    /// and `youtube.com/v/<id>`.
    pub fn id(&self) -> Option<VideoId> {
        static PATTERN: ::once_cell::sync::Lazy<::regex::Regex> = ::once_cell::sync::Lazy::new(|| {
            ::regex::Regex::new(r#"(youtu\.be/|youtube\.com/(watch\?(.*&)?v=|(embed|v)/))([^?&">]+)"#).unwrap()
        });

        PATTERN
            .captures(&self.0)
            .and_then(|captures| captures.get(5))
            .map(|id| VideoId(id.as_str().to_owned().into()))
    }
}

impl From<MaybeOwnedString> for VideoUrl {
    fn from(url: MaybeOwnedString) -> Self {
        Self(url)
    }
}

impl From<String> for VideoUrl {
    fn from(url: String) -> Self {
        Self(url.into())
    }
}

impl From<&'static str> for VideoUrl {
    fn from(url: &'static str) -> Self {
        Self(url.into())
    }
}

impl ::std::ops::Deref for VideoUrl {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(MaybeOwnedString);

impl VideoId {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }

    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.0)
    }
}

impl From<MaybeOwnedString> for VideoId {
    fn from(id: MaybeOwnedString) -> Self {
        Self(id)
    }
}

impl From<String> for VideoId {
    fn from(id: String) -> Self {
        Self(id.into())
    }
}

impl From<&'static str> for VideoId {
    fn from(id: &'static str) -> Self {
        Self(id.into())
    }
}

impl ::std::ops::Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ::std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(&self.0)
    }
}
