use axum::{Json, extract::State, http::StatusCode};
use uuid::Uuid;

use crate::{
    AppState,
    error::{ApiError, ApiResult},
    extractors::{auth_user::AuthUser, json::ApiJson, path::ApiPath, query::ApiQuery},
    notes::model::{NewNote, NotePatch},
};

use super::dto::{CreateNoteRequest, NoteDto, NotesQuery, UpdateNoteRequest};

fn validate_title(title: String) -> ApiResult<String> {
    if title.trim().is_empty() {
        return Err(ApiError::BadRequest("title is required".to_string()));
    }
    Ok(title)
}

/// Trims every tag, keeping the order. Blank tags are rejected.
fn validate_tags(tags: Vec<String>) -> ApiResult<Vec<String>> {
    tags.into_iter()
        .map(|tag| {
            let tag = tag.trim();
            if tag.is_empty() {
                Err(ApiError::BadRequest("tags must not be blank".to_string()))
            } else {
                Ok(tag.to_string())
            }
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 200, description = "Note created", body = NoteDto),
        (status = 400, description = "Invalid note payload", body = crate::error::ErrorBody),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn create_note(
    user: AuthUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let new_note = NewNote {
        owner: user.id,
        title: validate_title(request.title)?,
        content: request.content,
        priority: request.priority,
        tags: validate_tags(request.tags)?,
    };

    let note = state.notes.insert(new_note).await?;
    tracing::debug!(note_id = %note.id, owner = %note.owner, "note created");

    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    get,
    path = "/notes",
    params(NotesQuery),
    responses(
        (status = 200, description = "Notes of the owner, oldest first", body = [NoteDto]),
        (status = 400, description = "Malformed owner id", body = crate::error::ErrorBody),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn list_notes(
    user: AuthUser,
    State(state): State<AppState>,
    ApiQuery(q): ApiQuery<NotesQuery>,
) -> ApiResult<(StatusCode, Json<Vec<NoteDto>>)> {
    let owner = q.owner.unwrap_or(user.id);

    let rows = state.notes.find_by_owner(owner).await?;
    let notes = rows.into_iter().map(NoteDto::from).collect();

    // an owner without notes is an empty list, not a 404
    Ok((StatusCode::OK, Json(notes)))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note", body = NoteDto),
        (status = 400, description = "Malformed note id", body = crate::error::ErrorBody),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn get_note(
    _user: AuthUser,
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<Uuid>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let note = state
        .notes
        .find_by_id(note_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteDto),
        (status = 400, description = "Malformed note id, invalid or empty patch", body = crate::error::ErrorBody),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn update_note(
    _user: AuthUser,
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<Uuid>,
    ApiJson(request): ApiJson<UpdateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let patch = NotePatch {
        title: request.title.map(validate_title).transpose()?,
        content: request.content,
        priority: request.priority,
        tags: request.tags.map(validate_tags).transpose()?,
    };
    if patch.is_empty() {
        return Err(ApiError::BadRequest("no fields to update".to_string()));
    }

    let note = state
        .notes
        .find_by_id_and_replace(note_id, patch)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok((StatusCode::OK, Json(note.into())))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Deleted note", body = NoteDto),
        (status = 400, description = "Malformed note id", body = crate::error::ErrorBody),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    _user: AuthUser,
    State(state): State<AppState>,
    ApiPath(note_id): ApiPath<Uuid>,
) -> ApiResult<(StatusCode, Json<NoteDto>)> {
    let deleted = state
        .notes
        .find_by_id_and_remove(note_id)
        .await?
        .ok_or(ApiError::NotFound)?;
    tracing::debug!(note_id = %deleted.id, "note deleted");

    Ok((StatusCode::OK, Json(deleted.into())))
}
