use ::async_trait::async_trait;
use ::domain::EmbedCode;
use ::domain::Resolution;
use ::domain::Video;
use ::domain::VideoId;
use ::domain::VideoUrl;

use crate::boundaries::Accept;
use crate::boundaries::CreateNoteOutputBoundary;
use crate::boundaries::CreateNoteRequestModel;
use crate::gateways::Clock;
use crate::gateways::NoteRepository;
use crate::gateways::VideoMetadataFetcher;
use crate::models::descriptors::MetadataLookup;
use crate::models::errors::CreateNoteError;
use crate::models::events::CreateNoteEvent;
use crate::models::events::MetadataFetchedEvent;
use crate::models::events::NoteWrittenEvent;
use crate::models::events::VideoIdentifiedEvent;
use crate::models::notes::Frontmatter;
use crate::models::notes::Note;
use crate::utils::aliases::Fallible;

#[derive(::bon::Builder)]
pub struct CreateNoteInteractor {
    output_boundary: ::std::sync::Arc<dyn CreateNoteOutputBoundary>,

    fetcher: ::std::sync::Arc<dyn VideoMetadataFetcher>,
    notes: ::std::sync::Arc<dyn NoteRepository>,
    clock: ::std::sync::Arc<dyn Clock>,

    /// User-supplied keys every note starts from.
    #[builder(default)]
    frontmatter: Frontmatter,
}

#[async_trait]
impl Accept<CreateNoteRequestModel> for CreateNoteInteractor {
    async fn accept(self: ::std::sync::Arc<Self>, request: CreateNoteRequestModel) -> Fallible<()> {
        let resolution = Resolution::from_name(&request.resolution)
            .ok_or_else(|| CreateNoteError::InvalidResolution(request.resolution.to_string()))?;

        let url: VideoUrl = request.url.into();
        let id = url.id().ok_or_else(|| CreateNoteError::InvalidUrl(url.to_string()))?;

        ::tracing::debug!(url = &*url, id = &*id, "extracted video id");

        ::std::sync::Arc::clone(&self.output_boundary).activate().await?;
        let outcome = ::std::sync::Arc::clone(&self).create(id, resolution).await;
        ::std::sync::Arc::clone(&self.output_boundary).deactivate().await?;

        outcome
    }
}

impl CreateNoteInteractor {
    async fn create(self: ::std::sync::Arc<Self>, id: VideoId, resolution: Resolution) -> Fallible<()> {
        let event = VideoIdentifiedEvent { id: id.clone(), resolution };
        ::std::sync::Arc::clone(&self.output_boundary)
            .update(&CreateNoteEvent::VideoIdentified(event))
            .await?;

        let video = match ::std::sync::Arc::clone(&self.fetcher).fetch(&id).await? {
            MetadataLookup::Found(video) => video,
            MetadataLookup::NotFound => return Err(CreateNoteError::NotFound(id).into()),
        };

        ::tracing::info!(id = &*video.id, title = &*video.metadata.title, "fetched video metadata");

        let event = MetadataFetchedEvent { video: video.clone() };
        ::std::sync::Arc::clone(&self.output_boundary)
            .update(&CreateNoteEvent::MetadataFetched(event))
            .await?;

        let note = self.compose(&video, resolution);
        let path = ::std::sync::Arc::clone(&self.notes).save(&note).await?;

        ::tracing::info!(path = %path.display(), "wrote note");

        let event = NoteWrittenEvent { embed_code: note.embed_code, path };
        ::std::sync::Arc::clone(&self.output_boundary)
            .update(&CreateNoteEvent::NoteWritten(event))
            .await?;

        Ok(())
    }

    fn compose(&self, video: &Video, resolution: Resolution) -> Note {
        let Video { id, metadata } = video;
        let now = self.clock.now();

        let mut frontmatter = self.frontmatter.clone();
        frontmatter.insert("date", now.date);
        frontmatter.insert("day", now.day);
        frontmatter.insert("time", now.time);
        frontmatter.insert("tags", ::domain::sanitizers::sanitize_tags(metadata.tags.iter()));
        frontmatter.insert("url", id.watch_url());
        frontmatter.insert("author", metadata.channel.clone().unwrap_or_default());

        Note::builder()
            .title(metadata.title.clone())
            .frontmatter(frontmatter)
            .embed_code(EmbedCode::new(id, resolution).to_string())
            .description(metadata.description.clone())
            .build()
    }
}
