use ::async_trait::async_trait;
use ::domain::VideoId;

use crate::models::descriptors::MetadataLookup;
use crate::models::descriptors::Timestamp;
use crate::models::notes::Note;
use crate::utils::aliases::Fallible;
use crate::utils::aliases::MaybeOwnedPath;

#[async_trait]
pub trait VideoMetadataFetcher: ::core::marker::Send + ::core::marker::Sync {
    async fn fetch(self: ::std::sync::Arc<Self>, id: &VideoId) -> Fallible<MetadataLookup>;
}

#[async_trait]
pub trait NoteRepository: ::core::marker::Send + ::core::marker::Sync {
    /// Overwrites any existing note with the same file name. Returns where the note landed.
    async fn save(self: ::std::sync::Arc<Self>, note: &Note) -> Fallible<MaybeOwnedPath>;
}

pub trait Clock: ::core::marker::Send + ::core::marker::Sync {
    fn now(&self) -> Timestamp;
}
