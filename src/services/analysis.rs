use crate::error::ApiError;
use image::RgbImage;
use outfit_color::{decode_rgb, ColorError, ColorReading, HistogramMatch, OutfitChecker, OutfitReport};
use std::sync::Arc;

/// Async front end for the color pipeline
///
/// Decoding and extraction are CPU-bound, so every call runs on the blocking
/// thread pool. Decode failures are reported against the request field that
/// carried the bad image.
pub struct AnalysisService {
    checker: Arc<OutfitChecker>,
}

impl AnalysisService {
    pub fn new(checker: OutfitChecker) -> Self {
        Self {
            checker: Arc::new(checker),
        }
    }

    /// Threshold used when a comparison does not supply one
    pub fn default_similarity_threshold(&self) -> f64 {
        self.checker.default_similarity_threshold()
    }

    /// Histogram similarity of two encoded images
    pub async fn compare(
        &self,
        first: Vec<u8>,
        second: Vec<u8>,
        threshold: f64,
    ) -> Result<HistogramMatch, ApiError> {
        let checker = self.checker.clone();
        let result = run_blocking(move || {
            let first = decode_field("first", &first)?;
            let second = decode_field("second", &second)?;
            Ok(checker.compare_decoded(&first, &second, threshold)?)
        })
        .await?;

        tracing::debug!(
            similarity = result.similarity,
            threshold = result.threshold,
            "Histogram comparison done"
        );
        Ok(result)
    }

    /// Dominant color and name of one encoded image
    pub async fn read_color(&self, field: String, bytes: Vec<u8>) -> Result<ColorReading, ApiError> {
        let checker = self.checker.clone();
        let reading = run_blocking(move || {
            let image = decode_field(&field, &bytes)?;
            checker
                .read_decoded(&image)
                .map_err(|e| ApiError::for_field(&field, e))
        })
        .await?;

        tracing::debug!(rgb = %reading.rgb, name = %reading.name, "Dominant color extracted");
        Ok(reading)
    }

    /// Confirm that bytes decode to a non-empty image
    pub async fn validate_image(&self, field: String, bytes: Vec<u8>) -> Result<(), ApiError> {
        run_blocking(move || decode_field(&field, &bytes).map(|_| ())).await
    }

    /// Name two base images and any accessories, then score them
    pub async fn evaluate_outfit(
        &self,
        first: Vec<u8>,
        second: Vec<u8>,
        accessories: Vec<Vec<u8>>,
    ) -> Result<OutfitReport, ApiError> {
        let checker = self.checker.clone();
        run_blocking(move || {
            let first = read_field(&checker, "first", &first)?;
            let second = read_field(&checker, "second", &second)?;
            let accessory_colors = accessories
                .iter()
                .enumerate()
                .map(|(i, bytes)| {
                    read_field(&checker, &format!("accessories[{i}]"), bytes).map(|r| r.rgb)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(checker.score_outfit(first.rgb, second.rgb, &accessory_colors))
        })
        .await
    }
}

fn decode_field(field: &str, bytes: &[u8]) -> Result<RgbImage, ApiError> {
    decode_rgb(bytes).map_err(|e| ApiError::for_field(field, ColorError::from(e)))
}

fn read_field(checker: &OutfitChecker, field: &str, bytes: &[u8]) -> Result<ColorReading, ApiError> {
    let image = decode_field(field, bytes)?;
    checker
        .read_decoded(&image)
        .map_err(|e| ApiError::for_field(field, e))
}

/// Execute CPU-intensive work in a blocking context
async fn run_blocking<T, F>(work: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| ApiError::Internal(format!("Analysis task failed: {e}")))?
}
