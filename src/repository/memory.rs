use chrono::Utc;
use tokio::sync::RwLock;

use std::collections::HashMap;

use crate::models::Note;

#[derive(Default)]
struct Notes {
    by_id: HashMap<String, Note>,
    // insertion order of the ids in `by_id`
    order: Vec<String>,
}

/// Transient note storage. Everything is lost when the process exits.
#[derive(Default)]
pub struct MemoryRepository {
    notes: RwLock<Notes>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_note(&self, id: &str, title: &str, content: &str) -> Note {
        let now = Utc::now();
        let note = Note {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };

        let mut notes = self.notes.write().await;
        if notes.by_id.insert(note.id.clone(), note.clone()).is_none() {
            notes.order.push(note.id.clone());
        }

        note
    }

    pub async fn update_note(&self, id: &str, title: &str, content: &str) -> Option<Note> {
        let mut notes = self.notes.write().await;
        let note = notes.by_id.get_mut(id)?;

        title.clone_into(&mut note.title);
        content.clone_into(&mut note.content);
        note.updated_at = Utc::now();

        Some(note.clone())
    }

    pub async fn delete_note(&self, id: &str) -> bool {
        let mut notes = self.notes.write().await;
        if notes.by_id.remove(id).is_none() {
            return false;
        }

        notes.order.retain(|existing| existing != id);
        true
    }

    pub async fn get_one_note(&self, id: &str) -> Option<Note> {
        self.notes.read().await.by_id.get(id).cloned()
    }

    pub async fn get_all_notes(&self) -> Vec<Note> {
        let notes = self.notes.read().await;
        notes
            .order
            .iter()
            .filter_map(|id| notes.by_id.get(id).cloned())
            .collect()
    }
}
