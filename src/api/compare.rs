use axum::{extract::State, response::Json, Json as JsonExtractor};
use outfit_color::{verdict_message, ColorReading};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::images::decode_image_field;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::AnalysisService;

/// Request body for histogram comparison
#[derive(Debug, Deserialize, ToSchema)]
pub struct CompareRequest {
    /// First garment image (base64 JPEG or PNG)
    pub first: String,
    /// Second garment image (base64 JPEG or PNG)
    pub second: String,
    /// Similarity percentage to exceed; server default if omitted
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Result of a histogram comparison
#[derive(Debug, Serialize, ToSchema)]
pub struct CompareResponse {
    /// Histogram correlation as a percentage (-100 to 100)
    pub similarity: f64,
    /// Threshold that was applied
    pub threshold: f64,
    /// Whether similarity exceeded the threshold
    pub matches: bool,
    /// Human-readable verdict
    pub message: String,
}

/// Request body for dominant color extraction
#[derive(Debug, Deserialize, ToSchema)]
pub struct ColorRequest {
    /// Garment image (base64 JPEG or PNG)
    pub image: String,
}

/// A dominant color and its name
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ColorInfo {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Hex notation, e.g. "#FF0000"
    pub hex: String,
    /// Color name, "unknown" if no naming rule applies
    pub name: String,
}

impl From<ColorReading> for ColorInfo {
    fn from(reading: ColorReading) -> Self {
        Self {
            r: reading.rgb.r,
            g: reading.rgb.g,
            b: reading.rgb.b,
            hex: reading.rgb.to_hex(),
            name: reading.name.to_string(),
        }
    }
}

/// Compare two garments by hue/saturation histogram
///
/// Both images are resampled to a fixed grid, binned by hue and saturation,
/// and correlated. The pair matches when the similarity strictly exceeds the
/// threshold.
#[utoipa::path(
    post,
    path = "/api/compare",
    request_body = CompareRequest,
    responses(
        (status = 200, description = "Comparison finished", body = CompareResponse),
        (status = 400, description = "Invalid base64 or image data"),
        (status = 413, description = "Image exceeds the size limit"),
    ),
    tag = "Matching"
)]
pub async fn handle_compare(
    State(config): State<Arc<AppConfig>>,
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<CompareRequest>,
) -> Result<Json<CompareResponse>, ApiError> {
    let threshold = request
        .threshold
        .unwrap_or_else(|| analysis.default_similarity_threshold());
    if !threshold.is_finite() {
        return Err(ApiError::InvalidRequest(
            "threshold must be a finite number".to_string(),
        ));
    }

    let first = decode_image_field("first", &request.first, config.max_image_bytes)?;
    let second = decode_image_field("second", &request.second, config.max_image_bytes)?;

    let result = analysis.compare(first, second, threshold).await?;

    tracing::info!(
        similarity = result.similarity,
        threshold = result.threshold,
        matches = result.matches,
        "Compare request served"
    );

    Ok(Json(CompareResponse {
        similarity: result.similarity,
        threshold: result.threshold,
        matches: result.matches,
        message: verdict_message(result.matches).to_string(),
    }))
}

/// Extract the dominant color of a garment
///
/// The image is resampled to a small grid and the mean color is named by
/// the fixed naming rules.
#[utoipa::path(
    post,
    path = "/api/colors",
    request_body = ColorRequest,
    responses(
        (status = 200, description = "Dominant color", body = ColorInfo),
        (status = 400, description = "Invalid base64 or image data"),
        (status = 413, description = "Image exceeds the size limit"),
    ),
    tag = "Matching"
)]
pub async fn handle_colors(
    State(config): State<Arc<AppConfig>>,
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<ColorRequest>,
) -> Result<Json<ColorInfo>, ApiError> {
    let bytes = decode_image_field("image", &request.image, config.max_image_bytes)?;
    let reading = analysis.read_color("image".to_string(), bytes).await?;

    tracing::info!(rgb = %reading.rgb, name = %reading.name, "Color request served");

    Ok(Json(reading.into()))
}
