//! Catalog and product ingestion route handlers.

use std::str::FromStr;

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::error::Result as AppResult;
use crate::middleware::RequireAdmin;
use crate::models::{Product, ProductWithStock};
use crate::services::{CatalogService, IngestError, IngestService};
use crate::services::ingest::{ProductSubmission, UploadedImage};
use crate::state::AppState;

/// List all products with live unused-key counts, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProductWithStock>>> {
    let catalog = CatalogService::new(state.pool());
    let products = catalog.list_with_stock().await?;
    Ok(Json(products))
}

/// List up to six products for the featured view.
pub async fn featured(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let catalog = CatalogService::new(state.pool());
    let products = catalog.featured().await?;
    Ok(Json(products))
}

/// Multipart form fields as they arrive, before validation.
#[derive(Debug, Default)]
struct RawSubmission {
    title: Option<String>,
    price: Option<String>,
    original_price: Option<String>,
    description: Option<String>,
    category: Option<String>,
    is_new: Option<String>,
    keys: Option<String>,
    image: Option<UploadedImage>,
}

type ErrorResponse = (StatusCode, Json<Value>);

fn bad_request(message: &str) -> ErrorResponse {
    (StatusCode::BAD_REQUEST, Json(json!({ "message": message })))
}

fn server_error() -> ErrorResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal Server Error" })),
    )
}

/// Drain the multipart stream into a [`RawSubmission`].
async fn read_submission(mut multipart: Multipart) -> Result<RawSubmission, ErrorResponse> {
    let mut raw = RawSubmission::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| bad_request("Malformed multipart form"))?
    {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };

        if name == "image" {
            let file_name = field.file_name().unwrap_or("upload").to_owned();
            let data = field
                .bytes()
                .await
                .map_err(|_| bad_request("Malformed multipart form"))?;
            raw.image = Some(UploadedImage {
                file_name,
                data: data.to_vec(),
            });
            continue;
        }

        let text = field
            .text()
            .await
            .map_err(|_| bad_request("Malformed multipart form"))?;

        match name.as_str() {
            "title" => raw.title = Some(text),
            "price" => raw.price = Some(text),
            "originalPrice" => raw.original_price = Some(text),
            "description" => raw.description = Some(text),
            "category" => raw.category = Some(text),
            "isNew" => raw.is_new = Some(text),
            "keys" => raw.keys = Some(text),
            _ => {}
        }
    }

    Ok(raw)
}

/// Validate raw fields into a [`ProductSubmission`].
fn build_submission(raw: RawSubmission) -> Result<ProductSubmission, ErrorResponse> {
    let title = raw.title.unwrap_or_default();

    let price = raw
        .price
        .as_deref()
        .and_then(|p| Decimal::from_str(p).ok())
        .ok_or_else(|| bad_request("invalid price"))?;

    let original_price = match raw.original_price.as_deref() {
        None | Some("") => None,
        Some(p) => Some(Decimal::from_str(p).map_err(|_| bad_request("invalid price"))?),
    };

    let description = raw.description.filter(|d| !d.is_empty());

    Ok(ProductSubmission {
        title,
        description,
        price,
        original_price,
        category: raw.category.unwrap_or_default(),
        is_new: raw.is_new.as_deref() == Some("true"),
        keys: raw.keys.unwrap_or_default(),
        image: raw.image,
    })
}

/// Ingest a product with its redemption keys and optional image.
///
/// Admin only. Responds with the created product including its key rows.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<Value>, ErrorResponse> {
    let raw = read_submission(multipart).await?;
    let submission = build_submission(raw)?;

    let ingest = IngestService::new(state.pool(), &state.config().upload_dir);
    match ingest.ingest(submission).await {
        Ok(created) => {
            tracing::info!(
                product_id = %created.product.id,
                keys = created.keys.len(),
                admin = %admin.username,
                "product ingested"
            );
            Ok(Json(json!({ "message": "Success", "product": created })))
        }
        Err(e @ (IngestError::MissingTitle
        | IngestError::InvalidPrice
        | IngestError::InvalidKeysFormat)) => Err(bad_request(&e.to_string())),
        Err(e) => {
            tracing::error!("product ingestion failed: {e}");
            sentry::capture_error(&e);
            Err(server_error())
        }
    }
}
