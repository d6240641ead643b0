// src/processing/raster/watermark.rs

//! Text overlay anchored to the bottom-right corner of a surface.
//!
//! Glyphs come from the 8×8 bitmap font, sampled nearest-neighbour up to a
//! cell of roughly 5% of the surface width.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgba, RgbaImage};

/// Distance from the right and bottom edges, in pixels.
pub const EDGE_INSET: i64 = 20;
/// Font size as a fraction of surface width.
pub const FONT_SIZE_RATIO: f64 = 0.05;
/// Opacity of the white fill (≈ 0.5).
pub const FILL_ALPHA: u8 = 128;

const GLYPH_SIZE: u32 = 8;
const FILL: [u8; 3] = [255, 255, 255];

/// Placement of the rendered text block on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLayout {
    /// Side of one character cell in pixels; never below the native 8
    pub glyph_size: u32,
    /// Horizontal offset of the extra bold stroke
    pub bold_offset: u32,
    pub left: i64,
    pub top: i64,
    pub width: u32,
    pub height: u32,
}

/// Computes where `text` lands on a `width`×`height` surface: right-aligned
/// and bottom-aligned, inset [`EDGE_INSET`] from both edges.
pub fn layout_text(text: &str, width: u32, height: u32) -> TextLayout {
    let font_size = (width as f64 * FONT_SIZE_RATIO).floor() as u32;
    let glyph_size = font_size.max(GLYPH_SIZE);
    let bold_offset = (glyph_size / (4 * GLYPH_SIZE)).max(1);
    let chars = text.chars().filter(|c| *c != '\n').count() as u32;

    let block_width = chars * glyph_size + bold_offset;
    let block_height = glyph_size;

    TextLayout {
        glyph_size,
        bold_offset,
        left: width as i64 - EDGE_INSET - block_width as i64,
        top: height as i64 - EDGE_INSET - block_height as i64,
        width: block_width,
        height: block_height,
    }
}

fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS
        .get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .unwrap_or([0; 8])
}

/// Rasterises `text` into a coverage mask of `layout.width × layout.height`.
fn coverage_mask(text: &str, layout: &TextLayout) -> Vec<bool> {
    let mut mask = vec![false; (layout.width * layout.height) as usize];
    let size = layout.glyph_size;

    for (index, ch) in text.chars().filter(|c| *c != '\n').enumerate() {
        let bits = glyph(ch);
        let origin_x = index as u32 * size;
        for y in 0..size {
            let row = bits[(y * GLYPH_SIZE / size) as usize];
            for gx in 0..size {
                let col = gx * GLYPH_SIZE / size;
                if (row >> col) & 1 == 0 {
                    continue;
                }
                // Stroked twice, `bold_offset` apart.
                for dx in 0..=layout.bold_offset {
                    let x = origin_x + gx + dx;
                    if x < layout.width {
                        mask[(y * layout.width + x) as usize] = true;
                    }
                }
            }
        }
    }

    mask
}

/// Source-over compositing of `src` at `src_alpha` onto `dst`.
fn composite_over(dst: Rgba<u8>, src: [u8; 3], src_alpha: u8) -> Rgba<u8> {
    let a_s = src_alpha as f32 / 255.0;
    let a_d = dst[3] as f32 / 255.0;
    let out_a = a_s + a_d * (1.0 - a_s);
    if out_a <= 0.0 {
        return dst;
    }

    let channel = |s: u8, d: u8| {
        let c = (s as f32 * a_s + d as f32 * a_d * (1.0 - a_s)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// Overlays `text` in semi-transparent white. Empty text leaves the surface
/// untouched; parts that fall off the surface are clipped.
pub fn apply_watermark(surface: &mut RgbaImage, text: &str) {
    if text.trim().is_empty() {
        return;
    }

    let (width, height) = surface.dimensions();
    let layout = layout_text(text, width, height);
    let mask = coverage_mask(text, &layout);

    for my in 0..layout.height {
        let y = layout.top + my as i64;
        if y < 0 || y >= height as i64 {
            continue;
        }
        for mx in 0..layout.width {
            let x = layout.left + mx as i64;
            if x < 0 || x >= width as i64 || !mask[(my * layout.width + mx) as usize] {
                continue;
            }
            let pixel = surface.get_pixel_mut(x as u32, y as u32);
            *pixel = composite_over(*pixel, FILL, FILL_ALPHA);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_scales_with_width() {
        let small = layout_text("X", 100, 100);
        let mid = layout_text("X", 200, 100);
        let large = layout_text("X", 1000, 800);
        assert_eq!(small.glyph_size, 8);
        assert_eq!(mid.glyph_size, 10);
        assert_eq!(large.glyph_size, 50);
        assert_eq!(large.left + large.width as i64, 1000 - EDGE_INSET);
        assert_eq!(large.top + large.height as i64, 800 - EDGE_INSET);
    }

    #[test]
    fn overlay_lightens_dark_pixels() {
        let mut surface = RgbaImage::from_pixel(400, 300, Rgba([0, 0, 0, 255]));
        apply_watermark(&mut surface, "X");
        let touched: Vec<_> = surface.pixels().filter(|p| p.0 != [0, 0, 0, 255]).collect();
        assert!(!touched.is_empty());
        assert!(touched.iter().all(|p| p.0 == [128, 128, 128, 255]));
    }

    #[test]
    fn fill_stays_white_on_transparent_pixels() {
        let mut surface = RgbaImage::from_pixel(400, 300, Rgba([0, 0, 0, 0]));
        apply_watermark(&mut surface, "X");
        let touched: Vec<_> = surface.pixels().filter(|p| p.0 != [0, 0, 0, 0]).collect();
        assert!(!touched.is_empty());
        assert!(touched.iter().all(|p| p.0 == [255, 255, 255, FILL_ALPHA]));
    }

    #[test]
    fn half_transparent_background_gains_opacity() {
        let out = composite_over(Rgba([0, 0, 0, 128]), FILL, FILL_ALPHA);
        assert!(out[3] > 128);
        assert!(out[0] > 128);
        assert_eq!(out[0], out[1]);
    }

    #[test]
    fn mid_width_text_reaches_five_percent() {
        let mut surface = RgbaImage::from_pixel(300, 200, Rgba([0, 0, 0, 255]));
        apply_watermark(&mut surface, "I");
        let rows: Vec<u32> = surface
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 != [0, 0, 0, 255])
            .map(|(_, y, _)| y)
            .collect();
        let span = rows.iter().max().unwrap() - rows.iter().min().unwrap() + 1;
        assert!(span > 8, "glyph only {span}px tall");
    }

    #[test]
    fn blank_text_is_a_no_op() {
        let mut surface = RgbaImage::from_pixel(50, 50, Rgba([3, 4, 5, 255]));
        let before = surface.clone();
        apply_watermark(&mut surface, "  ");
        assert_eq!(surface, before);
    }

    #[test]
    fn long_text_is_clipped_not_panicking() {
        let mut surface = RgbaImage::from_pixel(30, 30, Rgba([0, 0, 0, 255]));
        apply_watermark(&mut surface, "THIS TEXT IS FAR WIDER THAN THE SURFACE");
    }
}
