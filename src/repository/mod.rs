mod embedded;
mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use crate::{error::NoteError, models::Note};

/// Note storage backend, chosen once at startup.
pub enum Storage {
    Postgres(PgRepository),
    Memory(MemoryRepository),
}

impl Storage {
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    pub async fn create_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Note, NoteError> {
        match self {
            Self::Postgres(repo) => Ok(repo.create_note(id, title, content).await?),
            Self::Memory(repo) => Ok(repo.create_note(id, title, content).await),
        }
    }

    pub async fn update_note(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Option<Note>, NoteError> {
        match self {
            Self::Postgres(repo) => Ok(repo.update_note(id, title, content).await?),
            Self::Memory(repo) => Ok(repo.update_note(id, title, content).await),
        }
    }

    pub async fn delete_note(&self, id: &str) -> Result<bool, NoteError> {
        match self {
            Self::Postgres(repo) => Ok(repo.delete_note(id).await?),
            Self::Memory(repo) => Ok(repo.delete_note(id).await),
        }
    }

    pub async fn get_one_note(&self, id: &str) -> Result<Option<Note>, NoteError> {
        match self {
            Self::Postgres(repo) => Ok(repo.get_one_note(id).await?),
            Self::Memory(repo) => Ok(repo.get_one_note(id).await),
        }
    }

    pub async fn get_all_notes(&self) -> Result<Vec<Note>, NoteError> {
        match self {
            Self::Postgres(repo) => Ok(repo.get_all_notes().await?),
            Self::Memory(repo) => Ok(repo.get_all_notes().await),
        }
    }
}
