//! Routes and handlers for the `/videos` resource.
//!
//! ```text
//! GET    /videos        list_videos
//! POST   /videos        create_video
//! PUT    /videos/{id}   update_video
//! DELETE /videos/{id}   delete_video
//! ```
//!
//! Request bodies are inspected as raw JSON: the contract demands
//! field-specific messages in a fixed check order, and on update an
//! absent key behaves differently from a present key of the wrong type.
//! Success messages and response keys (`videoDB`, `newVideo`) are part
//! of the wire contract and must not change.

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use videoteca_core::error::CoreError;
use videoteca_core::validation;
use videoteca_db::models::video::Video;

use crate::error::ApiResult;
use crate::state::AppState;

/// Missing-row message for update and delete.
const ID_NOT_FOUND: &str = "'id' não existe";

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct CreateVideoResponse {
    pub message: &'static str,
    #[serde(rename = "videoDB")]
    pub video_db: Video,
}

#[derive(Serialize)]
pub struct UpdateVideoResponse {
    pub message: &'static str,
    #[serde(rename = "newVideo")]
    pub new_video: Video,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /videos -- every row in the store's natural order, unbounded.
async fn list_videos(State(state): State<AppState>) -> ApiResult<Json<Vec<Video>>> {
    let videos = state.store.list().await?;
    tracing::debug!(count = videos.len(), "Listed videos");
    Ok(Json(videos))
}

/// POST /videos -- create a video.
///
/// Type checks run in contract order (`id`, `titulo`, `duracao`) and
/// short-circuit on the first failure. The upload timestamp is assigned
/// here. Uniqueness is enforced by the store's primary key; a duplicate
/// surfaces as a 400 conflict, with no separate existence check.
///
/// Success is 200, not 201 (preserved as-is from the original contract).
async fn create_video(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<CreateVideoResponse>> {
    let id = validation::required_string(&body, "id")?;
    let titulo = validation::required_string(&body, "titulo")?;
    let duracao = validation::required_number(&body, "duracao")?;

    let video = Video {
        id,
        titulo,
        duracao,
        data_upload: Utc::now(),
    };

    let video_db = state.store.insert(&video).await?;
    tracing::info!(id = %video_db.id, "Video created");

    Ok(Json(CreateVideoResponse {
        message: "Video cadastrado com sucesso",
        video_db,
    }))
}

/// PUT /videos/{id} -- partially update a video.
///
/// Loads the current row (missing id is a 400), type-checks each `new*`
/// field only when its key is present, then merges. Falsy values (empty
/// string, zero) pass validation but are NOT applied; existing clients
/// rely on this, so it is preserved. The merged row is written back
/// under the original id; renaming onto a taken id is a 400 conflict.
async fn update_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<UpdateVideoResponse>> {
    let mut video = state
        .store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| CoreError::NotFound(ID_NOT_FOUND.into()))?;

    let new_id = validation::optional_string(&body, "newId")?;
    let new_titulo = validation::optional_string(&body, "newTitulo")?;
    let new_duracao = validation::optional_number(&body, "newDuracao")?;

    if let Some(new_id) = new_id.filter(|v| !v.is_empty()) {
        video.id = new_id;
    }
    if let Some(new_titulo) = new_titulo.filter(|v| !v.is_empty()) {
        video.titulo = new_titulo;
    }
    if let Some(new_duracao) = new_duracao.filter(|v| *v != 0.0) {
        video.duracao = new_duracao;
    }

    state.store.update(&id, &video).await?;
    tracing::info!(id = %id, new_id = %video.id, "Video updated");

    Ok(Json(UpdateVideoResponse {
        message: "Video atualizado com sucesso",
        new_video: video,
    }))
}

/// DELETE /videos/{id} -- remove a video.
///
/// A single delete statement; zero rows affected means the id did not
/// exist (400), with no separate pre-read.
async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = state.store.delete(&id).await?;
    if deleted == 0 {
        return Err(CoreError::NotFound(ID_NOT_FOUND.into()).into());
    }
    tracing::info!(id = %id, "Video deleted");

    Ok(Json(MessageResponse {
        message: "Video deletado com sucesso",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos", get(list_videos).post(create_video))
        .route("/videos/{id}", put(update_video).delete(delete_video))
}
