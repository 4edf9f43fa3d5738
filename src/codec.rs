//! Decoding and encoding through the `image` crate.
//!
//! Any format `image` can decode is accepted; exports are JPEG, histogram
//! charts are PNG.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageFormat, RgbaImage};
use ndarray::{Array3, ArrayView3};
use rayon::prelude::*;

use crate::error::ToneError;
use crate::filters::core::{check_rgba, rgba_from_slice, rgba_into_vec, CHANNELS};

/// Decode an encoded raster into a `(height, width, 4)` RGBA image.
pub fn decode_rgba(bytes: &[u8]) -> Result<Array3<u8>, ToneError> {
    let decoded = image::load_from_memory(bytes).map_err(ToneError::ImageDecodeError)?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("decoded {}x{} image", width, height);
    rgba_from_slice(rgba.as_raw(), width as usize, height as usize)
}

/// Decode each file on its own; one result per path, in input order.
///
/// A file that fails to read or decode does not affect the others.
pub fn decode_files(paths: &[PathBuf]) -> Vec<Result<Array3<u8>, ToneError>> {
    paths
        .par_iter()
        .map(|path| {
            let result = decode_file(path);
            if let Err(e) = &result {
                log::warn!("skipping {}: {}", path.display(), e);
            }
            result
        })
        .collect()
}

/// Read and decode one file.
pub fn decode_file(path: &Path) -> Result<Array3<u8>, ToneError> {
    let bytes = std::fs::read(path)?;
    decode_rgba(&bytes)
}

fn to_rgba_image(input: ArrayView3<u8>) -> Result<RgbaImage, ToneError> {
    check_rgba(&input)?;
    let (height, width, _) = input.dim();
    let data = rgba_into_vec(input.as_standard_layout().into_owned());
    let actual = data.len();
    RgbaImage::from_raw(width as u32, height as u32, data)
        .ok_or(ToneError::InvalidBufferLength(actual, width * height * CHANNELS))
}

/// Encode an RGBA image as JPEG. Alpha is dropped.
///
/// # Arguments
/// * `input` - Image of shape (height, width, 4)
/// * `quality` - JPEG quality, 1-100
pub fn encode_jpeg(input: ArrayView3<u8>, quality: u8) -> Result<Vec<u8>, ToneError> {
    if !(1..=100).contains(&quality) {
        return Err(ToneError::InvalidParameter {
            name: "quality",
            value: quality as i64,
            min: 1,
            max: 100,
        });
    }
    let rgb = image::DynamicImage::ImageRgba8(to_rgba_image(input)?).into_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        encoder
            .encode(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
            .map_err(ToneError::ImageEncodeError)?;
    }
    Ok(buffer.into_inner())
}

/// Encode an RGBA image as PNG.
pub fn encode_png(input: ArrayView3<u8>) -> Result<Vec<u8>, ToneError> {
    let rgba = to_rgba_image(input)?;
    let mut buffer = Cursor::new(Vec::new());
    rgba.write_to(&mut buffer, ImageFormat::Png)
        .map_err(ToneError::ImageEncodeError)?;
    Ok(buffer.into_inner())
}

/// Scale an RGBA image to the given size with a triangle filter.
pub fn resize_rgba(
    input: ArrayView3<u8>,
    width: u32,
    height: u32,
) -> Result<Array3<u8>, ToneError> {
    let (src_height, src_width, _) = input.dim();
    if src_width as u32 == width && src_height as u32 == height {
        check_rgba(&input)?;
        return Ok(input.as_standard_layout().into_owned());
    }
    let rgba = to_rgba_image(input)?;
    let resized = image::imageops::resize(&rgba, width, height, FilterType::Triangle);
    rgba_from_slice(resized.as_raw(), width as usize, height as usize)
}
