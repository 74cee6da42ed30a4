use ::async_trait::async_trait;
use ::use_cases::boundaries::Activate;
use ::use_cases::boundaries::Update;
use ::use_cases::models::events::CreateNoteEvent;
use ::use_cases::models::events::MetadataFetchedEvent;
use ::use_cases::models::events::NoteWrittenEvent;
use ::use_cases::models::events::VideoIdentifiedEvent;

use crate::utils::aliases::Fallible;

macro_rules! lazy_progress_style {
    ($template:expr) => {
        ::once_cell::sync::Lazy::new(|| ::indicatif::ProgressStyle::with_template($template).unwrap())
    };
}

macro_rules! lazy_color {
    ($color:expr) => {
        ::once_cell::sync::Lazy::new(|| {
            use ::colored::Colorize as _;

            $color
        })
    };
}

static NULL: ::once_cell::sync::Lazy<::colored::ColoredString> = lazy_color!("N/A".dimmed());

/// Terminal view: a spinner on stderr while the note is being made, results on stdout.
pub struct CreateNoteView {
    spinner: ::indicatif::ProgressBar,
}

impl CreateNoteView {
    pub fn new() -> Fallible<Self> {
        static SPINNER_STYLE: ::once_cell::sync::Lazy<::indicatif::ProgressStyle> =
            lazy_progress_style!("{spinner} {msg}");

        let spinner = ::indicatif::ProgressBar::new_spinner().with_style(SPINNER_STYLE.clone());
        spinner.set_draw_target(::indicatif::ProgressDrawTarget::hidden());

        Ok(Self { spinner })
    }
}

#[async_trait]
impl Activate for CreateNoteView {
    async fn activate(self: ::std::sync::Arc<Self>) -> Fallible<()> {
        self.spinner.set_draw_target(::indicatif::ProgressDrawTarget::stderr());
        self.spinner.enable_steady_tick(::std::time::Duration::from_millis(100));

        Ok(())
    }

    async fn deactivate(self: ::std::sync::Arc<Self>) -> Fallible<()> {
        self.spinner.finish_and_clear();
        self.spinner.set_draw_target(::indicatif::ProgressDrawTarget::hidden());

        Ok(())
    }
}

#[async_trait]
impl Update<CreateNoteEvent> for CreateNoteView {
    async fn update(self: ::std::sync::Arc<Self>, event: &CreateNoteEvent) -> Fallible<()> {
        match event {
            CreateNoteEvent::VideoIdentified(event) => self.update(event).await,
            CreateNoteEvent::MetadataFetched(event) => self.update(event).await,
            CreateNoteEvent::NoteWritten(event) => self.update(event).await,
        }
    }
}

#[async_trait]
impl Update<VideoIdentifiedEvent> for CreateNoteView {
    async fn update(self: ::std::sync::Arc<Self>, event: &VideoIdentifiedEvent) -> Fallible<()> {
        use ::colored::Colorize as _;

        let VideoIdentifiedEvent { id, resolution } = event;

        self.spinner.set_message(format!(
            "Fetching metadata for {} ({} {})",
            id.to_string().bold(),
            resolution.name,
            resolution,
        ));

        Ok(())
    }
}

#[async_trait]
impl Update<MetadataFetchedEvent> for CreateNoteView {
    async fn update(self: ::std::sync::Arc<Self>, event: &MetadataFetchedEvent) -> Fallible<()> {
        use ::colored::Colorize as _;

        let metadata = &event.video.metadata;

        let channel = metadata
            .channel
            .as_deref()
            .map_or_else(|| NULL.clone(), |channel| channel.normal());
        let published_at = metadata
            .published_at
            .as_deref()
            .map_or_else(|| NULL.clone(), |published_at| published_at.normal());
        let tags = if metadata.tags.is_empty() {
            NULL.clone()
        } else {
            ::domain::sanitizers::inline_tags(metadata.tags.iter()).join(" ").normal()
        };

        self.spinner.suspend(|| {
            println!("{:<10} {}", "Title:".dimmed(), metadata.title.white().bold());
            println!("{:<10} {}", "Channel:".dimmed(), channel);
            println!("{:<10} {}", "Published:".dimmed(), published_at);
            println!("{:<10} {}", "Tags:".dimmed(), tags);
        });

        self.spinner.set_message("Writing note");

        Ok(())
    }
}

#[async_trait]
impl Update<NoteWrittenEvent> for CreateNoteView {
    async fn update(self: ::std::sync::Arc<Self>, event: &NoteWrittenEvent) -> Fallible<()> {
        use ::colored::Colorize as _;

        let NoteWrittenEvent { embed_code, path } = event;

        self.spinner.suspend(|| {
            println!();
            println!("{}", "Embed Code:".dimmed());
            println!("{}", embed_code);
            println!();
            println!("{} {}", "Wrote note:".green().bold(), path.display());
        });

        Ok(())
    }
}
