use ::anyhow::Context as _;
use ::async_trait::async_trait;
use ::use_cases::gateways::NoteRepository;
use ::use_cases::models::notes::Note;

use crate::utils::aliases::Fallible;
use crate::utils::aliases::MaybeOwnedPath;

const NOTES_DIRECTORY: &str = "youtube";

/// Stores notes as markdown files under `<vault>/youtube/`.
#[derive(::bon::Builder)]
#[builder(on(_, into))]
pub struct VaultNoteRepository {
    vault: MaybeOwnedPath,
}

#[async_trait]
impl NoteRepository for VaultNoteRepository {
    async fn save(self: ::std::sync::Arc<Self>, note: &Note) -> Fallible<MaybeOwnedPath> {
        let directory = self.vault.join(NOTES_DIRECTORY);

        ::tokio::fs::create_dir_all(&directory)
            .await
            .with_context(|| format!("failed to create {}", directory.display()))?;

        let path = directory.join(note.file_name());

        ::tokio::fs::write(&path, note.to_string())
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;

        Ok(path.into())
    }
}
