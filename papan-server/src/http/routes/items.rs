//! Item endpoints

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    response::Redirect,
    routing::post,
    Router,
};

use crate::db::repos::{BoardRepo, ItemRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{BoardIdParam, ItemForm, UploadedFile};
use crate::http::server::AppState;
use crate::models::upload::{is_allowed, secure_filename, stored_name, upload_url};
use crate::models::NewItem;

/// POST /board/{id}/add_item - add an item, optionally with an image
async fn add_item(
    State(state): State<Arc<AppState>>,
    BoardIdParam(id): BoardIdParam,
    form: ItemForm,
) -> Result<Redirect, ApiError> {
    // Unknown board aborts before anything is written
    let board = BoardRepo::new(&state.pool).get(id).await?;
    let new_item = NewItem::from_form(form.title, form.content)?;

    let stored = match form.image {
        Some(upload) => store_image(&state, board.id, upload).await?,
        None => None,
    };
    let (image_url, saved_path) = match stored {
        Some(StoredImage { url, path }) => (Some(url), Some(path)),
        None => (None, None),
    };

    let item = match ItemRepo::new(&state.pool)
        .create(board.id, new_item, image_url)
        .await
    {
        Ok(item) => item,
        Err(e) => {
            // No item points at the file, drop it
            if let Some(path) = saved_path {
                state.uploads.remove(&path).await;
            }
            return Err(e.into());
        }
    };

    tracing::info!(
        board_id = board.id,
        item_id = item.id,
        has_image = item.image_url.is_some(),
        "Item added"
    );
    Ok(Redirect::to(&format!("/board/{}", board.id)))
}

/// An upload written to the upload directory
struct StoredImage {
    url: String,
    path: PathBuf,
}

/// Save an accepted upload. Rejected uploads are dropped without error.
async fn store_image(
    state: &AppState,
    board_id: i64,
    upload: UploadedFile,
) -> Result<Option<StoredImage>, ApiError> {
    if upload.file_name.is_empty() || !is_allowed(&upload.file_name) {
        tracing::debug!(filename = %upload.file_name, "Discarding upload");
        return Ok(None);
    }

    let sanitized = secure_filename(&upload.file_name);
    if !is_allowed(&sanitized) {
        tracing::debug!(filename = %upload.file_name, "Discarding upload, nothing usable after sanitizing");
        return Ok(None);
    }

    let stored = stored_name(board_id, &sanitized);
    let path = state.uploads.save(&stored, &upload.bytes).await?;

    tracing::info!(board_id, filename = %stored, size = upload.bytes.len(), "Image stored");
    Ok(Some(StoredImage {
        url: upload_url(&stored),
        path,
    }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/board/{id}/add_item", post(add_item))
}
