//! In-memory note store used by the HTTP tests.

use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::StoreResult;

use super::{
    model::{NewNote, Note, NotePatch},
    repo::NoteStore,
};

#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    notes: RwLock<Notes>,
}

/// Notes keyed by id, each tagged with its insertion sequence number.
#[derive(Debug, Default)]
struct Notes {
    next_seq: u64,
    by_id: HashMap<Uuid, (u64, Note)>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn insert(&self, note: NewNote) -> StoreResult<Note> {
        let now = OffsetDateTime::now_utc();
        let stored = Note {
            id: Uuid::new_v4(),
            owner: note.owner,
            title: note.title,
            content: note.content,
            priority: note.priority,
            tags: note.tags,
            created_at: now,
            updated_at: now,
        };
        let mut notes = self.notes.write().await;
        let seq = notes.next_seq;
        notes.next_seq += 1;
        notes.by_id.insert(stored.id, (seq, stored.clone()));
        Ok(stored)
    }

    async fn find_by_owner(&self, owner: Uuid) -> StoreResult<Vec<Note>> {
        let notes = self.notes.read().await;
        let mut owned: Vec<&(u64, Note)> = notes
            .by_id
            .values()
            .filter(|(_, n)| n.owner == owner)
            .collect();
        owned.sort_by_key(|(seq, _)| *seq);
        Ok(owned.into_iter().map(|(_, n)| n.clone()).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Note>> {
        let notes = self.notes.read().await;
        Ok(notes.by_id.get(&id).map(|(_, n)| n.clone()))
    }

    async fn find_by_id_and_replace(
        &self,
        id: Uuid,
        patch: NotePatch,
    ) -> StoreResult<Option<Note>> {
        let mut notes = self.notes.write().await;
        let Some((_, note)) = notes.by_id.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply(note, OffsetDateTime::now_utc());
        Ok(Some(note.clone()))
    }

    async fn find_by_id_and_remove(&self, id: Uuid) -> StoreResult<Option<Note>> {
        let mut notes = self.notes.write().await;
        Ok(notes.by_id.remove(&id).map(|(_, n)| n))
    }
}
