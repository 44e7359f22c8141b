use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::store::StoreResult;

use super::model::{NewNote, Note, NotePatch};

/// Persistence for notes.
///
/// Every operation is atomic on its own; nothing spans more than one record.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Assigns `id`, `created_at` and `updated_at`, stores the note and
    /// returns it.
    async fn insert(&self, note: NewNote) -> StoreResult<Note>;

    /// All notes of `owner`, oldest first. Empty when the owner has none.
    async fn find_by_owner(&self, owner: Uuid) -> StoreResult<Vec<Note>>;

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Note>>;

    /// Merges `patch` into the note and returns the updated record, or
    /// `None` if no note has this id.
    async fn find_by_id_and_replace(&self, id: Uuid, patch: NotePatch)
        -> StoreResult<Option<Note>>;

    /// Removes the note and returns what was removed, or `None` if no note
    /// has this id.
    async fn find_by_id_and_remove(&self, id: Uuid) -> StoreResult<Option<Note>>;
}

#[derive(Debug, Clone)]
pub struct PgNoteStore {
    db: PgPool,
}

impl PgNoteStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn insert(&self, note: NewNote) -> StoreResult<Note> {
        let now = OffsetDateTime::now_utc();
        let row = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (id, owner, title, content, priority, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, owner, title, content, priority, tags, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(note.owner)
        .bind(note.title)
        .bind(note.content)
        .bind(note.priority)
        .bind(note.tags)
        .bind(now)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn find_by_owner(&self, owner: Uuid) -> StoreResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, owner, title, content, priority, tags, created_at, updated_at
            FROM notes
            WHERE owner = $1
            ORDER BY created_at ASC, seq ASC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Note>> {
        let row = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, owner, title, content, priority, tags, created_at, updated_at
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn find_by_id_and_replace(
        &self,
        id: Uuid,
        patch: NotePatch,
    ) -> StoreResult<Option<Note>> {
        let row = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                priority = COALESCE($4, priority),
                tags = COALESCE($5, tags),
                updated_at = $6
            WHERE id = $1
            RETURNING id, owner, title, content, priority, tags, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.priority)
        .bind(patch.tags)
        .bind(OffsetDateTime::now_utc())
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn find_by_id_and_remove(&self, id: Uuid) -> StoreResult<Option<Note>> {
        let row = sqlx::query_as::<_, Note>(
            r#"
            DELETE FROM notes
            WHERE id = $1
            RETURNING id, owner, title, content, priority, tags, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }
}
