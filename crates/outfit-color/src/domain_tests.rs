//! Domain-critical regression tests for outfit-color.
//!
//! These tests run the public pipeline end to end on synthetic images. Each
//! test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::OutfitChecker;
    use crate::color::Rgb;
    use crate::extract::{dominant_color, mean_color, HueSatHistogram};
    use crate::matcher::{accessory_score, histogram_match, DEFAULT_SIMILARITY_THRESHOLD};
    use crate::naming::{color_name, ColorName};
    use crate::preprocess::{downsample, pixels};
    use crate::rules::MatchTable;
    use image::{ImageFormat, RgbImage};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb(color))
    }

    fn encode_png(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    // ========================================================================
    // Histogram path
    // ========================================================================

    /// If this breaks, it means: two identical red uploads are no longer
    /// reported as matching, so the histogram, its normalization, or the
    /// correlation scaling has drifted.
    #[test]
    fn test_red_vs_red_histogram_matches() {
        let red = encode_png(&solid(100, 100, [255, 0, 0]));
        let result = OutfitChecker::new().compare_images(&red, &red).unwrap();

        assert!(
            (result.similarity - 100.0).abs() < 1e-6,
            "REGRESSION: identical red images scored {:.3}, expected 100",
            result.similarity
        );
        assert_eq!(result.threshold, DEFAULT_SIMILARITY_THRESHOLD);
        assert!(result.matches);
    }

    /// If this breaks, it means: an image is not maximally similar to itself.
    /// Uses a multi-hue image so more than one bin is populated.
    #[test]
    fn test_self_similarity_is_100_for_textured_image() {
        let image = RgbImage::from_fn(240, 160, |x, y| {
            image::Rgb([(x % 256) as u8, (y * 3 % 256) as u8, ((x ^ y) % 256) as u8])
        });
        let hist = HueSatHistogram::from_image(&image).unwrap();
        let result = histogram_match(&hist, &hist, DEFAULT_SIMILARITY_THRESHOLD);
        assert!((result.similarity - 100.0).abs() < 1e-6);
    }

    /// If this breaks, it means: the histogram is sensitive to brightness.
    /// Hue/saturation binning ignores value, so a darker shade of the same
    /// fully saturated hue lands in the same bin.
    #[test]
    fn test_histogram_ignores_brightness() {
        let bright = HueSatHistogram::from_image(&solid(100, 100, [0, 0, 255])).unwrap();
        let dark = HueSatHistogram::from_image(&solid(100, 100, [0, 0, 90])).unwrap();
        let result = histogram_match(&bright, &dark, DEFAULT_SIMILARITY_THRESHOLD);
        assert!(result.matches, "similarity was {:.2}", result.similarity);
    }

    /// If this breaks, it means: the resolution of the upload leaks into the
    /// histogram. Every image is resampled to the same grid first.
    #[test]
    fn test_histogram_independent_of_resolution() {
        let small = HueSatHistogram::from_image(&solid(37, 211, [10, 200, 30])).unwrap();
        let large = HueSatHistogram::from_image(&solid(800, 600, [10, 200, 30])).unwrap();
        assert_eq!(small, large);
    }

    // ========================================================================
    // Named-color path
    // ========================================================================

    /// If this breaks, it means: the symmetric fallback no longer fires.
    /// Black top + white bottom: white is named gray, and the table only
    /// lists the pair as (gray, black).
    #[test]
    fn test_black_and_white_via_symmetric_lookup() {
        let checker = OutfitChecker::new();
        let black = checker
            .read_color(&encode_png(&solid(100, 100, [0, 0, 0])))
            .unwrap();
        let white = checker
            .read_color(&encode_png(&solid(100, 100, [255, 255, 255])))
            .unwrap();

        assert_eq!(black.rgb, Rgb::new(0, 0, 0));
        assert_eq!(black.name, ColorName::Black);
        assert_eq!(white.name, ColorName::Gray);

        let report = checker.score_outfit(black.rgb, white.rgb, &[]);
        assert_eq!(report.pair.first, ColorName::Black);
        assert_eq!(report.pair.second, ColorName::Gray);
        assert_eq!(report.pair.compatibility, Some(70));
        assert!(report.pair.matches);
    }

    /// If this breaks, it means: the dominant color is no longer the exact
    /// mean of the downsampled grid (e.g. random clustering crept back in).
    #[test]
    fn test_dominant_is_mean_of_downsampled_grid() {
        let image = RgbImage::from_fn(311, 157, |x, y| {
            image::Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + 2 * y) % 256) as u8])
        });
        let grid = downsample(&image, 50, 50);
        let expected = mean_color(&pixels(&grid)).unwrap();
        for _ in 0..3 {
            assert_eq!(dominant_color(&image).unwrap(), expected);
        }
    }

    /// If this breaks, it means: half-and-half images no longer average.
    /// Left half red, right half black gives a dark red mean.
    #[test]
    fn test_dominant_blends_regions() {
        let image = RgbImage::from_fn(100, 100, |x, _| {
            if x < 50 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 0])
            }
        });
        let rgb = dominant_color(&image).unwrap();
        assert_eq!((rgb.g, rgb.b), (0, 0));
        assert!((rgb.r as i32 - 128).abs() <= 2, "mean red was {}", rgb.r);
        assert_eq!(color_name(rgb), ColorName::Unknown);
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// If this breaks, it means: accessory aggregation regressed to mixing
    /// booleans with scores, or rounds up.
    #[test]
    fn test_accessory_aggregate_scores() {
        assert_eq!(accessory_score(Some(70), Some(80)), 75);
        assert_eq!(accessory_score(Some(70), Some(81)), 75);
        assert_eq!(accessory_score(Some(71), Some(80)), 75);
    }

    /// If this breaks, it means: accessory scoring stopped consulting the
    /// table in both orders.
    #[test]
    fn test_accessory_scored_against_both_pieces() {
        let checker = OutfitChecker::new();
        // Yellow accessory over a blue top and black bottom:
        // (blue, yellow) = 80 and (yellow, black) = 75 -> 77
        let report = checker.score_outfit(
            Rgb::new(0, 0, 255),
            Rgb::new(0, 0, 0),
            &[Rgb::new(255, 255, 0)],
        );
        let accessory = report.accessories[0];
        assert_eq!(accessory.reading.name, ColorName::Yellow);
        assert_eq!(accessory.vs_first, Some(80));
        assert_eq!(accessory.vs_second, Some(75));
        assert_eq!(accessory.score, 77);
    }

    /// If this breaks, it means: some name pair became asymmetric.
    #[test]
    fn test_every_pair_symmetric() {
        let table = MatchTable::builtin();
        for a in ColorName::ALL {
            for b in ColorName::ALL {
                assert_eq!(table.score(a, b), table.score(b, a));
            }
        }
    }
}
