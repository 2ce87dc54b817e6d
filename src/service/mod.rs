use uuid::Uuid;

use crate::{
    dto::{NoteRequest, NoteResponse},
    error::NoteError,
    models::Note,
    repository::Storage,
};

pub struct NoteService {
    storage: Storage,
    share_base_url: Option<String>,
}

impl NoteService {
    pub fn new(storage: Storage, public_base_url: Option<String>) -> Self {
        Self {
            storage,
            share_base_url: public_base_url.map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    pub const fn sharing_enabled(&self) -> bool {
        self.share_base_url.is_some()
    }

    pub fn share_url(&self, id: &str) -> Option<String> {
        self.share_base_url
            .as_ref()
            .map(|base| format!("{base}/share/{id}"))
    }

    fn to_response(&self, note: Note) -> NoteResponse {
        NoteResponse {
            share_url: self.share_url(&note.id),
            id: note.id,
            title: note.title,
            content: note.content,
        }
    }

    fn validate(request: &NoteRequest) -> Result<(), NoteError> {
        if request.title.trim().is_empty() {
            return Err(NoteError::InvalidInput(
                "Title must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create_note(&self, request: NoteRequest) -> Result<NoteResponse, NoteError> {
        Self::validate(&request)?;

        let id = Uuid::new_v4().to_string();
        let note = self
            .storage
            .create_note(&id, &request.title, &request.content)
            .await?;

        tracing::debug!("created note {}", note.id);
        Ok(self.to_response(note))
    }

    pub async fn update_note(
        &self,
        id: &str,
        request: NoteRequest,
    ) -> Result<NoteResponse, NoteError> {
        // a missing note takes precedence over an invalid body
        if let Err(e) = Self::validate(&request) {
            return match self.storage.get_one_note(id).await? {
                Some(_) => Err(e),
                None => Err(NoteError::NotFound),
            };
        }

        self.storage
            .update_note(id, &request.title, &request.content)
            .await?
            .map(|note| self.to_response(note))
            .ok_or(NoteError::NotFound)
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), NoteError> {
        if self.storage.delete_note(id).await? {
            tracing::debug!("deleted note {id}");
            Ok(())
        } else {
            Err(NoteError::NotFound)
        }
    }

    pub async fn get_one_note(&self, id: &str) -> Result<NoteResponse, NoteError> {
        self.storage
            .get_one_note(id)
            .await?
            .map(|note| self.to_response(note))
            .ok_or(NoteError::NotFound)
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, NoteError> {
        let notes = self.storage.get_all_notes().await?;
        Ok(notes.into_iter().map(|note| self.to_response(note)).collect())
    }
}
