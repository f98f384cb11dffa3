//! Crop-and-remap engine.
//!
//! Given a sampled crop rectangle, this module rescales the cropped image
//! content to the configured target size (padding, never stretching, so
//! content aspect ratio is preserved) and remaps every polygon and bounding
//! box annotation into the new coordinate frame, dropping annotations that
//! end up fully outside the crop.

use image::imageops::{self, FilterType};
use image::RgbImage;
use rand::Rng;

use crate::core::config::RandomCropConfig;
use crate::core::errors::AugmentError;
use crate::processors::geometry::{is_outside_rect, BoundingBox, Polygon};
use crate::processors::sampler::{CropRegion, CropSampler};

/// Per-image annotations consumed by the crop.
///
/// `boxes` is a parallel detection-box view of the same instances;
/// `labels` is parallel to `polygons` and may be empty when the dataset
/// carries no per-instance labels.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    /// One polygon per text instance.
    pub polygons: Vec<Polygon>,
    /// Detection boxes, stored as two diagonal corners each.
    pub boxes: Vec<BoundingBox>,
    /// Per-instance labels, parallel to `polygons` (or empty).
    pub labels: Vec<u32>,
}

impl Annotations {
    /// Creates a new annotation set.
    pub fn new(polygons: Vec<Polygon>, boxes: Vec<BoundingBox>, labels: Vec<u32>) -> Self {
        Self {
            polygons,
            boxes,
            labels,
        }
    }
}

/// The result of one crop augmentation.
#[derive(Debug, Clone)]
pub struct CropOutput {
    /// The padded output raster, exactly `target_size` large. The rescaled
    /// crop content fills the top-left `(scaled_w, scaled_h)` corner; the
    /// remaining pixels are background (zero).
    pub image: RgbImage,
    /// Remapped polygons that survived the drop test.
    pub polygons: Vec<Polygon>,
    /// Remapped boxes that survived the drop test.
    pub boxes: Vec<BoundingBox>,
    /// Labels of the surviving polygons, filtered in lockstep so indices
    /// stay aligned. Empty if the input carried no labels.
    pub labels: Vec<u32>,
    /// The crop rectangle chosen in the source image.
    pub region: CropRegion,
    /// The uniform scale factor applied after cropping.
    pub scale: f32,
    /// Size (width, height) of the rescaled content inside the output.
    pub scaled_size: (u32, u32),
}

/// Random text-aware crop processor.
///
/// Picks a crop rectangle whose edges avoid every text region, rescales the
/// crop to the configured target size, and remaps all annotations into the
/// output frame. Each call is a pure function of its inputs and the
/// supplied random source; the processor itself holds only configuration.
#[derive(Debug, Clone)]
pub struct RandomCrop {
    config: RandomCropConfig,
    sampler: CropSampler,
}

impl RandomCrop {
    /// Creates a new crop processor from a validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The crop configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(RandomCrop)` - A new processor.
    /// * `Err(AugmentError::ConfigError)` - If the configuration is invalid.
    pub fn new(config: RandomCropConfig) -> Result<Self, AugmentError> {
        config.validate()?;
        let sampler = CropSampler::new(config.max_tries, config.min_crop_side_ratio);
        Ok(Self { config, sampler })
    }

    /// Gets the configuration.
    pub fn config(&self) -> &RandomCropConfig {
        &self.config
    }

    /// Applies the crop augmentation to one image and its annotations.
    ///
    /// # Arguments
    ///
    /// * `img` - The source image.
    /// * `annotations` - Polygons, boxes, and optional labels per instance.
    /// * `rng` - Random source for crop sampling.
    ///
    /// # Returns
    ///
    /// * `Ok(CropOutput)` - The padded target-size raster and the remapped,
    ///   filtered annotations.
    /// * `Err(AugmentError::InvalidInput)` - If the image has a zero side or
    ///   the label list length does not match the polygon list.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        img: &RgbImage,
        annotations: &Annotations,
        rng: &mut R,
    ) -> Result<CropOutput, AugmentError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(AugmentError::invalid_input(format!(
                "image must have nonzero dimensions, got {}x{}",
                width, height
            )));
        }
        if !annotations.labels.is_empty() && annotations.labels.len() != annotations.polygons.len()
        {
            return Err(AugmentError::invalid_input(format!(
                "label list length {} does not match polygon list length {}",
                annotations.labels.len(),
                annotations.polygons.len()
            )));
        }

        let region = self
            .sampler
            .sample(width, height, &annotations.polygons, rng);

        let (target_w, target_h) = self.config.target_size;
        let scale = (target_w as f32 / region.width as f32)
            .min(target_h as f32 / region.height as f32);
        let scaled_w = ((region.width as f32 * scale).round() as u32).clamp(1, target_w);
        let scaled_h = ((region.height as f32 * scale).round() as u32).clamp(1, target_h);

        let cropped =
            imageops::crop_imm(img, region.x, region.y, region.width, region.height).to_image();
        let resized = imageops::resize(&cropped, scaled_w, scaled_h, FilterType::Lanczos3);
        let mut padded = RgbImage::new(target_w, target_h);
        imageops::replace(&mut padded, &resized, 0, 0);

        let dx = -(region.x as f32);
        let dy = -(region.y as f32);
        let out_w = scaled_w as f32;
        let out_h = scaled_h as f32;

        let has_labels = !annotations.labels.is_empty();
        let mut polygons = Vec::with_capacity(annotations.polygons.len());
        let mut labels = Vec::new();
        for (i, poly) in annotations.polygons.iter().enumerate() {
            let moved = poly.translate_scale(dx, dy, scale);
            if is_outside_rect(&moved.extent(), 0.0, 0.0, out_w, out_h) {
                continue;
            }
            polygons.push(moved);
            if has_labels {
                labels.push(annotations.labels[i]);
            }
        }

        let boxes = annotations
            .boxes
            .iter()
            .map(|bbox| bbox.translate_scale(dx, dy, scale))
            .filter(|moved| !is_outside_rect(&moved.extent(), 0.0, 0.0, out_w, out_h))
            .collect();

        Ok(CropOutput {
            image: padded,
            polygons,
            boxes,
            labels,
            region,
            scale,
            scaled_size: (scaled_w, scaled_h),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::geometry::is_inside_rect;
    use image::{ImageBuffer, Rgb};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn white_image(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_pixel(width, height, Rgb([255, 255, 255]))
    }

    fn square(x0: f32, y0: f32, x1: f32, y1: f32) -> Polygon {
        Polygon::from_flat(&[x0, y0, x1, y0, x1, y1, x0, y1])
    }

    fn processor(target: (u32, u32)) -> RandomCrop {
        RandomCrop::new(RandomCropConfig {
            target_size: target,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_output_is_exactly_target_size() {
        let crop = processor((64, 48));
        let annotations = Annotations::new(vec![square(10.0, 10.0, 30.0, 30.0)], vec![], vec![]);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = crop.apply(&white_image(100, 80), &annotations, &mut rng).unwrap();
            assert_eq!(out.image.dimensions(), (64, 48));
        }
    }

    #[test]
    fn test_padding_outside_scaled_content_is_zero() {
        // 100x50 image with no polygons falls back to the identity crop;
        // target 50x50 scales it to 50x25, leaving the bottom half padded.
        let crop = processor((50, 50));
        let mut rng = StdRng::seed_from_u64(0);
        let out = crop
            .apply(&white_image(100, 50), &Annotations::default(), &mut rng)
            .unwrap();
        assert_eq!(out.scaled_size, (50, 25));
        assert_eq!(out.image.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(out.image.get_pixel(49, 24), &Rgb([255, 255, 255]));
        for y in 25..50 {
            for x in 0..50 {
                assert_eq!(out.image.get_pixel(x, y), &Rgb([0, 0, 0]), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_empty_polygon_list_yields_identity_crop() {
        let crop = processor((50, 50));
        let mut rng = StdRng::seed_from_u64(3);
        let out = crop
            .apply(&white_image(100, 100), &Annotations::default(), &mut rng)
            .unwrap();
        assert!(out.region.is_full(100, 100));
        assert!(out.polygons.is_empty());
        assert!(out.boxes.is_empty());
        assert!(out.labels.is_empty());
    }

    #[test]
    fn test_concrete_scenario_100x100_single_polygon() {
        // 100x100 image, one 10..20 square, target 50x50, ratio 0.1,
        // 10 tries: the crop must be at least 10 pixels per side and the
        // remapped polygon must land inside the 50x50 output.
        let crop = processor((50, 50));
        let annotations = Annotations::new(
            vec![square(10.0, 10.0, 20.0, 20.0)],
            vec![BoundingBox::from_coords(10.0, 10.0, 20.0, 20.0)],
            vec![7],
        );

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = crop.apply(&white_image(100, 100), &annotations, &mut rng).unwrap();
            assert!(out.region.width >= 10, "seed {}: {:?}", seed, out.region);
            assert!(out.region.height >= 10, "seed {}: {:?}", seed, out.region);
            // Every crop intersects the sole polygon, so it is always kept.
            assert_eq!(out.polygons.len(), 1, "seed {}", seed);
            assert_eq!(out.labels, vec![7], "seed {}", seed);
            let ext = out.polygons[0].extent();
            assert!(!is_outside_rect(&ext, 0.0, 0.0, 50.0, 50.0), "seed {}: {:?}", seed, ext);
            // When the crop fully contains the polygon, the remapped shape
            // must land fully inside the 50x50 output frame.
            let contained = is_inside_rect(
                &annotations.polygons[0].extent(),
                out.region.x as f32,
                out.region.y as f32,
                out.region.width as f32,
                out.region.height as f32,
            );
            if contained {
                assert!(is_inside_rect(&ext, 0.0, 0.0, 50.0, 50.0), "seed {}: {:?}", seed, ext);
            }
        }
    }

    #[test]
    fn test_retained_shapes_are_never_fully_outside_output() {
        let crop = processor((64, 64));
        let annotations = Annotations::new(
            vec![square(5.0, 5.0, 25.0, 25.0), square(60.0, 60.0, 90.0, 90.0)],
            vec![
                BoundingBox::from_coords(5.0, 5.0, 25.0, 25.0),
                BoundingBox::from_coords(60.0, 60.0, 90.0, 90.0),
            ],
            vec![],
        );

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = crop.apply(&white_image(100, 100), &annotations, &mut rng).unwrap();
            let (out_w, out_h) = out.scaled_size;
            for poly in &out.polygons {
                assert!(!is_outside_rect(&poly.extent(), 0.0, 0.0, out_w as f32, out_h as f32));
            }
            for bbox in &out.boxes {
                assert!(!is_outside_rect(&bbox.extent(), 0.0, 0.0, out_w as f32, out_h as f32));
            }
        }
    }

    #[test]
    fn test_labels_filtered_in_lockstep_with_polygons() {
        // The second instance lies entirely beyond the image, so every crop
        // drops it; its label must be dropped with it.
        let crop = processor((50, 50));
        let annotations = Annotations::new(
            vec![square(10.0, 10.0, 20.0, 20.0), square(150.0, 150.0, 160.0, 160.0)],
            vec![],
            vec![1, 2],
        );

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = crop.apply(&white_image(100, 100), &annotations, &mut rng).unwrap();
            assert_eq!(out.polygons.len(), 1, "seed {}", seed);
            assert_eq!(out.labels, vec![1], "seed {}", seed);
        }
    }

    #[test]
    fn test_remap_is_consistent_with_crop_corners() {
        // Transforming the crop rectangle's own corners must span exactly
        // the scaled content rectangle, and any point inside the crop must
        // map inside it.
        let crop = processor((50, 50));
        let annotations = Annotations::new(vec![square(10.0, 10.0, 20.0, 20.0)], vec![], vec![]);
        let mut rng = StdRng::seed_from_u64(5);
        let out = crop.apply(&white_image(100, 100), &annotations, &mut rng).unwrap();

        let region = out.region;
        let corners = Polygon::from_flat(&[
            region.x as f32,
            region.y as f32,
            (region.x + region.width) as f32,
            (region.y + region.height) as f32,
        ]);
        let mapped = corners.translate_scale(-(region.x as f32), -(region.y as f32), out.scale);
        let ext = mapped.extent();
        assert_eq!(ext.min_x, 0.0);
        assert_eq!(ext.min_y, 0.0);
        assert!((ext.max_x - region.width as f32 * out.scale).abs() < 1e-3);
        assert!((ext.max_y - region.height as f32 * out.scale).abs() < 1e-3);

        let mid = Polygon::from_flat(&[
            region.x as f32 + region.width as f32 / 2.0,
            region.y as f32 + region.height as f32 / 2.0,
        ]);
        let mapped_mid = mid.translate_scale(-(region.x as f32), -(region.y as f32), out.scale);
        assert!(is_inside_rect(&mapped_mid.extent(), 0.0, 0.0, ext.max_x, ext.max_y));
    }

    #[test]
    fn test_partial_overlap_is_kept_without_clipping() {
        // Identity crop of a 100x100 image to 50x50 scales by 0.5; a
        // polygon reaching past the image edge keeps its full remapped
        // extent, only fully-outside shapes are dropped.
        let crop = processor((50, 50));
        let annotations = Annotations::new(vec![square(80.0, 80.0, 120.0, 120.0)], vec![], vec![]);
        let mut rng = StdRng::seed_from_u64(2);
        let out = crop.apply(&white_image(100, 100), &annotations, &mut rng).unwrap();

        if out.region.is_full(100, 100) {
            assert_eq!(out.polygons.len(), 1);
            let ext = out.polygons[0].extent();
            assert_eq!(ext.max_x, 60.0);
            assert_eq!(ext.max_y, 60.0);
        }
    }

    #[test]
    fn test_zero_sized_image_is_rejected() {
        let crop = processor((50, 50));
        let mut rng = StdRng::seed_from_u64(0);
        let err = crop
            .apply(&RgbImage::new(0, 10), &Annotations::default(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, AugmentError::InvalidInput { .. }));
    }

    #[test]
    fn test_label_length_mismatch_is_rejected() {
        let crop = processor((50, 50));
        let annotations = Annotations::new(vec![square(10.0, 10.0, 20.0, 20.0)], vec![], vec![1, 2]);
        let mut rng = StdRng::seed_from_u64(0);
        let err = crop
            .apply(&white_image(100, 100), &annotations, &mut rng)
            .unwrap_err();
        assert!(matches!(err, AugmentError::InvalidInput { .. }));
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let err = RandomCrop::new(RandomCropConfig {
            target_size: (0, 50),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, AugmentError::ConfigError { .. }));
    }
}
