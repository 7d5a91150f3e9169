use std::ops::Deref;

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};

use crate::color_pipeline::source::types::{WIDE_CHANNEL_MAX, WideRgba};

/// Random-access RGB samples; `x` is the column, `y` the row.
pub trait PixelSource {
    fn grid_size(&self) -> (usize, usize);

    fn rgba_at(&self, x: usize, y: usize) -> WideRgba;
}

pub trait WideChannel: Copy {
    fn to_wide(self) -> u16;
}

impl WideChannel for u8 {
    // 0xAB -> 0xABAB, so 255 maps to 65535
    fn to_wide(self) -> u16 {
        u16::from(self) * 257
    }
}

impl WideChannel for u16 {
    fn to_wide(self) -> u16 {
        self
    }
}

impl WideChannel for f32 {
    fn to_wide(self) -> u16 {
        (self.clamp(0.0, 1.0) * f32::from(WIDE_CHANNEL_MAX)).round() as u16
    }
}

impl<P, C> PixelSource for ImageBuffer<P, C>
where
    P: Pixel,
    P::Subpixel: WideChannel,
    C: Deref<Target = [P::Subpixel]>,
{
    fn grid_size(&self) -> (usize, usize) {
        let (width, height) = self.dimensions();
        (width as usize, height as usize)
    }

    fn rgba_at(&self, x: usize, y: usize) -> WideRgba {
        let [r, g, b, a] = self.get_pixel(x as u32, y as u32).to_rgba().0;
        WideRgba::new(r.to_wide(), g.to_wide(), b.to_wide(), a.to_wide())
    }
}

// Dispatch on the variant; GenericImageView would narrow every variant to 8 bits.
impl PixelSource for DynamicImage {
    fn grid_size(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn rgba_at(&self, x: usize, y: usize) -> WideRgba {
        match self {
            DynamicImage::ImageLuma8(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageLumaA8(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageRgb8(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageRgba8(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageLuma16(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageLumaA16(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageRgb16(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageRgba16(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageRgb32F(buf) => buf.rgba_at(x, y),
            DynamicImage::ImageRgba32F(buf) => buf.rgba_at(x, y),
            other => {
                let [r, g, b, a] = other.get_pixel(x as u32, y as u32).0;
                WideRgba::new(r.to_wide(), g.to_wide(), b.to_wide(), a.to_wide())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_pipeline::source::types::Rgb16Image;
    use image::{Rgb, Rgb32FImage, Rgba, RgbImage, RgbaImage};

    #[test]
    fn test_u8_samples_widen_to_full_scale() {
        assert_eq!(0u8.to_wide(), 0);
        assert_eq!(255u8.to_wide(), 65535);
        assert_eq!(0x12u8.to_wide(), 0x1212);
    }

    #[test]
    fn test_f32_samples_are_clamped() {
        assert_eq!((-0.5f32).to_wide(), 0);
        assert_eq!(1.0f32.to_wide(), 65535);
        assert_eq!(2.0f32.to_wide(), 65535);
    }

    #[test]
    fn test_rgb16_buffer_as_source() {
        let mut img = Rgb16Image::new(3, 2);
        img.put_pixel(2, 1, Rgb([0x1234, 0x5678, 0x9012]));

        assert_eq!(img.grid_size(), (3, 2));
        assert_eq!(img.rgba_at(2, 1), WideRgba::rgb(0x1234, 0x5678, 0x9012));
        assert_eq!(img.rgba_at(0, 0), WideRgba::rgb(0, 0, 0));
    }

    #[test]
    fn test_dynamic_rgb16_keeps_full_depth() {
        let mut img = Rgb16Image::new(1, 1);
        img.put_pixel(0, 0, Rgb([0x1234, 0x5678, 0x9012]));
        let dynamic = DynamicImage::ImageRgb16(img);

        assert_eq!(dynamic.grid_size(), (1, 1));
        assert_eq!(dynamic.rgba_at(0, 0), WideRgba::rgb(0x1234, 0x5678, 0x9012));
    }

    #[test]
    fn test_dynamic_float_and_eight_bit_variants() {
        let float = DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(1, 1, Rgb([1.0, 0.5, 0.0])));
        assert_eq!(float.rgba_at(0, 0), WideRgba::rgb(65535, 32768, 0));

        let eight = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([0x12, 0x56, 0x90])));
        assert_eq!(eight.rgba_at(0, 0), WideRgba::rgb(0x1212, 0x5656, 0x9090));
    }

    #[test]
    fn test_rgba8_buffer_keeps_alpha() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 0]));
        let sample = img.rgba_at(0, 0);

        assert_eq!(sample, WideRgba::new(65535, 0, 0, 0));
        assert_eq!(sample.normalized(), [1.0, 0.0, 0.0]);
    }
}
