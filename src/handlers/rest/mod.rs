use axum::{
    Json,
    extract::{Path, State},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{ErrorResponse, MessageResponse, NoteRequest, NoteResponse},
    error::NoteError,
    service::NoteService,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Notes App API", version = "1.0.0"),
    paths(
        root,
        create_note,
        get_all_notes,
        get_one_note,
        update_note,
        delete_note
    ),
    components(schemas(NoteResponse, NoteRequest, MessageResponse, ErrorResponse)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

/// Share link docs, merged into [`ApiDoc`] only when sharing is enabled.
#[derive(OpenApi)]
#[openapi(paths(share_note))]
pub struct ShareApiDoc;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Notes API is live 🚀".to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Blank title", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Json(payload): Json<NoteRequest>,
) -> Result<Json<NoteResponse>, NoteError> {
    Ok(Json(service.create_note(payload).await?))
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "List of all notes", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(
    State(service): State<Arc<NoteService>>,
) -> Result<Json<Vec<NoteResponse>>, NoteError> {
    Ok(Json(service.get_all_notes().await?))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, NoteError> {
    Ok(Json(service.get_one_note(&id).await?))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteResponse),
        (status = 400, description = "Blank title", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
    Json(payload): Json<NoteRequest>,
) -> Result<Json<NoteResponse>, NoteError> {
    Ok(Json(service.update_note(&id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted successfully", body = MessageResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, NoteError> {
    service.delete_note(&id).await?;
    Ok(Json(MessageResponse {
        message: format!("Note {id} deleted successfully"),
    }))
}

/// Public read-only view of a single note. Only routed when a public base URL is configured.
#[utoipa::path(
    get,
    path = "/share/{id}",
    params(
        ("id" = String, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Shared note", body = NoteResponse),
        (status = 404, description = "Note not found", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn share_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Result<Json<NoteResponse>, NoteError> {
    Ok(Json(service.get_one_note(&id).await?))
}
