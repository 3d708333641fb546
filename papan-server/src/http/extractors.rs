//! Custom Axum extractors

use std::collections::HashMap;

use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::Form;

use super::error::ApiError;

/// Extract a board id from the path.
///
/// Anything but a plain run of digits naming a positive id is treated as
/// an unknown board, so `+1` or ` 1` do not alias board 1.
pub struct BoardIdParam(pub i64);

impl<S> FromRequestParts<S> for BoardIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "board",
                id: String::new(),
            })?;

        let digits_only = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
        match raw.parse::<i64>() {
            Ok(id) if digits_only && id > 0 => Ok(Self(id)),
            _ => Err(ApiError::NotFound {
                resource: "board",
                id: raw,
            }),
        }
    }
}

/// A file part of a submitted form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Filename as sent by the client, possibly empty
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Submitted add-item form.
///
/// Accepts `multipart/form-data` (needed for the image) as well as plain
/// urlencoded forms. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct ItemForm {
    pub title: Option<String>,
    pub content: Option<String>,
    /// `None` when the request carried no `image` field at all
    pub image: Option<UploadedFile>,
}

impl<S> FromRequest<S> for ItemForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::from_body_rejection(e.status(), e.body_text()))?;
            read_multipart(multipart).await
        } else {
            let Form(mut fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::from_body_rejection(e.status(), e.body_text()))?;

            Ok(Self {
                title: fields.remove("title"),
                content: fields.remove("content"),
                image: None,
            })
        }
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<ItemForm, ApiError> {
    let mut form = ItemForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::from_body_rejection(e.status(), format!("Failed to parse multipart data: {}", e))
    })? {
        let name = field.name().unwrap_or_default().to_owned();

        match name.as_str() {
            "image" => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::from_body_rejection(e.status(), format!("Failed to read upload: {}", e))
                })?;
                form.image = Some(UploadedFile {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            "title" | "content" => {
                let text = field.text().await.map_err(|e| {
                    ApiError::from_body_rejection(
                        e.status(),
                        format!("Failed to read field '{}': {}", name, e),
                    )
                })?;
                if name == "title" {
                    form.title = Some(text);
                } else {
                    form.content = Some(text);
                }
            }
            _ => {
                tracing::debug!(field = %name, "Ignoring unknown form field");
            }
        }
    }

    Ok(form)
}
