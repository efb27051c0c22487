use bead_quant::{FilterStyle, ScalePolicy};
use serde::Deserialize;
use utoipa::IntoParams;

use super::GridConfig;
use crate::error::ApiError;

/// Raw grid parameters as they arrive from a query string or the command line
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GridQuery {
    /// Grid side length (defaults to the configured size)
    pub size: Option<u32>,
    /// Palette style filter: none, candy or grayscale
    pub style: Option<String>,
    /// Scale policy: contain or stretch
    pub scale: Option<String>,
}

/// Fully resolved grid parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRequest {
    pub size: u32,
    pub style: FilterStyle,
    pub scale: ScalePolicy,
}

impl GridRequest {
    /// Fill in defaults from `config` and validate the result
    pub fn resolve(query: &GridQuery, config: &GridConfig) -> Result<Self, ApiError> {
        let size = query.size.unwrap_or(config.default_size);
        if !(config.min_size..=config.max_size).contains(&size) {
            return Err(ApiError::InvalidParameter(format!(
                "size {size} is outside {}..={}",
                config.min_size, config.max_size
            )));
        }

        let style = match query.style.as_deref() {
            Some(s) => s.parse().map_err(ApiError::InvalidParameter)?,
            None => config.default_style,
        };
        let scale = match query.scale.as_deref() {
            Some(s) => s.parse().map_err(ApiError::InvalidParameter)?,
            None => config.default_scale,
        };

        Ok(Self { size, style, scale })
    }
}
