use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use bead_quant::{FilterStyle, PaletteEntry, Vendor};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::server::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaletteQuery {
    /// Style filter to apply: none, candy or grayscale
    pub style: Option<String>,
}

/// Palette listing
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    #[schema(value_type = String, example = "none")]
    pub style: FilterStyle,
    /// Number of entries returned
    pub count: usize,
    /// Vendor names in display order
    pub vendors: Vec<String>,
    /// `{hex, r, g, b, codes}` records in palette order
    #[schema(value_type = Object)]
    pub entries: Vec<PaletteEntry>,
}

/// List the bead palette
///
/// With a style, only the entries the style keeps are listed (or the whole
/// palette, if the style keeps nothing).
#[utoipa::path(
    get,
    path = "/api/palette",
    params(PaletteQuery),
    responses(
        (status = 200, description = "Palette entries", body = PaletteResponse),
        (status = 400, description = "Unknown style"),
    ),
    tag = "Palette"
)]
pub async fn handle_palette(
    State(state): State<AppState>,
    query: Result<Query<PaletteQuery>, QueryRejection>,
) -> Result<Json<PaletteResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::InvalidParameter(e.body_text()))?;
    let style = match query.style.as_deref() {
        Some(s) => s.parse().map_err(ApiError::InvalidParameter)?,
        None => FilterStyle::None,
    };

    let entries = state.palette.filtered(style).into_owned();

    Ok(Json(PaletteResponse {
        style,
        count: entries.len(),
        vendors: Vendor::ALL.iter().map(|v| v.to_string()).collect(),
        entries,
    }))
}
