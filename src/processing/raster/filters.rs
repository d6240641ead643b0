// src/processing/raster/filters.rs

use image::RgbaImage;

/// Channel-average desaturation: `R = G = B = floor((R + G + B) / 3)`.
///
/// Not luminance weighted. Alpha is left untouched, so applying it twice
/// yields the same pixels.
pub fn grayscale_in_place(surface: &mut RgbaImage) {
    for pixel in surface.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        let avg = ((r as u16 + g as u16 + b as u16) / 3) as u8;
        pixel.0[0] = avg;
        pixel.0[1] = avg;
        pixel.0[2] = avg;
    }
}
