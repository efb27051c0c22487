use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json,
};
use bead_quant::{BeadCount, FilterStyle, Grid, GridCell, GridEdit, ScalePolicy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::{GridQuery, GridRequest};
use crate::server::AppState;

/// A generated bead grid with its shopping list
#[derive(Debug, Serialize, ToSchema)]
pub struct GridResponse {
    /// Grid side length
    pub size: usize,
    /// Palette style used for matching
    #[schema(value_type = String, example = "none")]
    pub style: FilterStyle,
    /// Scale policy used for sampling
    #[schema(value_type = String, example = "contain")]
    pub scale: ScalePolicy,
    /// Row-major cells, each `{hex, codes}`
    #[schema(value_type = Object)]
    pub rows: Vec<Vec<GridCell>>,
    /// Beads needed per color, most used first
    #[schema(value_type = Object)]
    pub legend: Vec<BeadCount>,
}

/// Request body for a single-cell edit
#[derive(Debug, Deserialize, ToSchema)]
pub struct EditRequest {
    /// The grid to edit, as returned by /api/grid
    #[schema(value_type = Object)]
    pub grid: Grid,
    /// `{"op": "paint", "row", "col", "hex"}` or `{"op": "erase", "row", "col"}`
    #[schema(value_type = Object)]
    pub edit: GridEdit,
}

/// The edited grid
#[derive(Debug, Serialize, ToSchema)]
pub struct EditResponse {
    pub size: usize,
    #[schema(value_type = Object)]
    pub rows: Vec<Vec<GridCell>>,
    #[schema(value_type = Object)]
    pub legend: Vec<BeadCount>,
}

fn into_parts(grid: Grid) -> (usize, Vec<Vec<GridCell>>, Vec<BeadCount>) {
    let legend = grid.bead_counts();
    (grid.size(), grid.into_rows(), legend)
}

/// Convert an image into a bead grid
///
/// The request body is the raw image file (PNG, JPEG, GIF or WebP).
#[utoipa::path(
    post,
    path = "/api/grid",
    params(GridQuery),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Grid generated", body = GridResponse),
        (status = 400, description = "Invalid size, style or scale, or empty body"),
        (status = 413, description = "Image larger than max_upload_bytes"),
        (status = 422, description = "Body is not a decodable image"),
    ),
    tag = "Grid"
)]
pub async fn handle_generate(
    State(state): State<AppState>,
    query: Result<Query<GridQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<GridResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidParameter(e.body_text()))?;
    let body = body.map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(state.config.max_upload_bytes),
        _ => ApiError::InvalidParameter(e.body_text()),
    })?;

    let request = GridRequest::resolve(&query, &state.config.grid)?;
    if body.is_empty() {
        return Err(ApiError::InvalidParameter("request body is empty".to_string()));
    }

    tracing::info!(
        bytes = body.len(),
        size = request.size,
        style = %request.style,
        scale = %request.scale,
        "Grid request received"
    );

    let grid = state.grid_service.generate(body.to_vec(), request).await?;
    let (size, rows, legend) = into_parts(grid);

    Ok(Json(GridResponse {
        size,
        style: request.style,
        scale: request.scale,
        rows,
        legend,
    }))
}

/// Paint or erase a single cell
///
/// Painting only accepts colors from the palette. The submitted grid is not
/// regenerated; the edit is applied to it as-is.
#[utoipa::path(
    post,
    path = "/api/grid/edit",
    request_body = EditRequest,
    responses(
        (status = 200, description = "Edited grid", body = EditResponse),
        (status = 400, description = "Malformed grid, position out of bounds or color not in palette"),
        (status = 413, description = "Body larger than max_upload_bytes"),
    ),
    tag = "Grid"
)]
pub async fn handle_edit(
    State(state): State<AppState>,
    payload: Result<Json<EditRequest>, JsonRejection>,
) -> Result<Json<EditResponse>, ApiError> {
    let Json(EditRequest { grid, edit }) = payload.map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(state.config.max_upload_bytes),
        _ => ApiError::InvalidParameter(e.body_text()),
    })?;

    let edited = state.grid_service.edit(&grid, &edit)?;
    let (size, rows, legend) = into_parts(edited);

    Ok(Json(EditResponse { size, rows, legend }))
}
