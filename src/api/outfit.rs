use axum::{extract::State, response::Json, Json as JsonExtractor};
use outfit_color::{verdict_message, AccessoryMatch, OutfitReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::compare::ColorInfo;
use super::images::decode_image_field;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::AnalysisService;

/// Request body for a full outfit check
#[derive(Debug, Deserialize, ToSchema)]
pub struct OutfitRequest {
    /// First base piece, e.g. the top (base64 JPEG or PNG)
    pub first: String,
    /// Second base piece, e.g. the bottom (base64 JPEG or PNG)
    pub second: String,
    /// Optional accessory images (base64 JPEG or PNG)
    #[serde(default)]
    pub accessories: Vec<String>,
}

/// Rule-table verdict for the two base pieces
#[derive(Debug, Serialize, ToSchema)]
pub struct PairVerdict {
    /// Table score, absent if no rule covers the pair
    pub compatibility: Option<u8>,
    /// Score with a missing rule counted as 0
    pub score: u8,
    pub matches: bool,
    /// Human-readable verdict
    pub message: String,
}

/// One accessory scored against both base pieces
#[derive(Debug, Serialize, ToSchema)]
pub struct AccessoryVerdict {
    pub color: ColorInfo,
    /// Compatibility with the first base piece
    pub vs_first: Option<u8>,
    /// Compatibility with the second base piece
    pub vs_second: Option<u8>,
    /// Floor average of both sides, 0-100
    pub score: u8,
}

/// Result of a full outfit check
#[derive(Debug, Serialize, ToSchema)]
pub struct OutfitResponse {
    pub first: ColorInfo,
    pub second: ColorInfo,
    pub pair: PairVerdict,
    pub accessories: Vec<AccessoryVerdict>,
}

impl From<AccessoryMatch> for AccessoryVerdict {
    fn from(accessory: AccessoryMatch) -> Self {
        Self {
            color: accessory.reading.into(),
            vs_first: accessory.vs_first,
            vs_second: accessory.vs_second,
            score: accessory.score,
        }
    }
}

impl From<OutfitReport> for OutfitResponse {
    fn from(report: OutfitReport) -> Self {
        Self {
            first: report.first.into(),
            second: report.second.into(),
            pair: PairVerdict {
                compatibility: report.pair.compatibility,
                score: report.pair.score,
                matches: report.pair.matches,
                message: verdict_message(report.pair.matches).to_string(),
            },
            accessories: report.accessories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Check an outfit by named colors
///
/// Names the dominant color of both base pieces, looks the pair up in the
/// compatibility table, and scores each accessory against both pieces.
#[utoipa::path(
    post,
    path = "/api/outfit",
    request_body = OutfitRequest,
    responses(
        (status = 200, description = "Outfit scored", body = OutfitResponse),
        (status = 400, description = "Invalid base64, image data, or too many accessories"),
        (status = 413, description = "Image exceeds the size limit"),
    ),
    tag = "Matching"
)]
pub async fn handle_outfit(
    State(config): State<Arc<AppConfig>>,
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<OutfitRequest>,
) -> Result<Json<OutfitResponse>, ApiError> {
    if request.accessories.len() > config.max_accessories {
        return Err(ApiError::InvalidRequest(format!(
            "too many accessories: {} (max {})",
            request.accessories.len(),
            config.max_accessories
        )));
    }

    let first = decode_image_field("first", &request.first, config.max_image_bytes)?;
    let second = decode_image_field("second", &request.second, config.max_image_bytes)?;
    let accessories = request
        .accessories
        .iter()
        .enumerate()
        .map(|(i, data)| {
            decode_image_field(&format!("accessories[{i}]"), data, config.max_image_bytes)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let report = analysis.evaluate_outfit(first, second, accessories).await?;

    tracing::info!(
        first = %report.first.name,
        second = %report.second.name,
        score = report.pair.score,
        matches = report.pair.matches,
        accessories = report.accessories.len(),
        "Outfit request served"
    );

    Ok(Json(report.into()))
}
