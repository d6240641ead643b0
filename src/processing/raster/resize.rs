// src/processing/raster/resize.rs

//! Width-driven resize that preserves the aspect ratio exactly.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Output dimensions for scaling a `width`×`height` surface to `target_width`.
///
/// Height is `round(height * target_width / width)`, never less than one.
pub fn scaled_dimensions(width: u32, height: u32, target_width: u32) -> (u32, u32) {
    let scale = target_width as f64 / width as f64;
    let target_height = (height as f64 * scale).round().max(1.0) as u32;
    (target_width, target_height)
}

/// Draws `surface` scaled into a new surface `target_width` wide. No cropping.
pub fn resize_to_width(surface: &RgbaImage, target_width: u32) -> RgbaImage {
    let (w, h) = scaled_dimensions(surface.width(), surface.height(), target_width);
    if (w, h) == surface.dimensions() {
        return surface.clone();
    }
    imageops::resize(surface, w, h, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn preserves_aspect_ratio() {
        assert_eq!(scaled_dimensions(4000, 3000, 1200), (1200, 900));
        assert_eq!(scaled_dimensions(500, 300, 256), (256, 154));
        assert_eq!(scaled_dimensions(3, 1, 1), (1, 1));
    }

    #[test]
    fn extreme_panorama_keeps_one_row() {
        assert_eq!(scaled_dimensions(10_000, 10, 100), (100, 1));
    }

    #[test]
    fn upscales_when_target_is_larger() {
        let surface = RgbaImage::from_pixel(10, 5, Rgba([9, 9, 9, 255]));
        let out = resize_to_width(&surface, 40);
        assert_eq!(out.dimensions(), (40, 20));
        assert_eq!(out.get_pixel(20, 10), &Rgba([9, 9, 9, 255]));
    }
}
