//! Shared buffer utilities for the RGBA filters.
//!
//! Images are `(height, width, 4)` arrays of `u8`. Flat canvas-style buffers
//! are converted with [`rgba_from_slice`] and back with [`rgba_into_vec`].

use ndarray::{Array3, ArrayView3};

use crate::error::ToneError;

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Build a `(height, width, 4)` image from a flat row-major RGBA buffer.
pub fn rgba_from_slice(data: &[u8], width: usize, height: usize) -> Result<Array3<u8>, ToneError> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(ToneError::InvalidBufferLength(data.len(), usize::MAX))?;
    if data.len() != expected {
        return Err(ToneError::InvalidBufferLength(data.len(), expected));
    }
    Ok(Array3::from_shape_vec((height, width, CHANNELS), data.to_vec())?)
}

/// Flatten an image back into a row-major RGBA buffer.
pub fn rgba_into_vec(image: Array3<u8>) -> Vec<u8> {
    if image.is_standard_layout() {
        image.into_raw_vec_and_offset().0
    } else {
        image.iter().copied().collect()
    }
}

/// Reject images that are not RGBA.
pub fn check_rgba(input: &ArrayView3<u8>) -> Result<(), ToneError> {
    let (_, _, channels) = input.dim();
    if channels != CHANNELS {
        return Err(ToneError::InvalidChannels(channels));
    }
    Ok(())
}

/// Store an adjusted channel value the way a canvas does: clamp to 0-255,
/// round half to even.
#[inline]
pub fn store_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_from_slice_oversized_dimensions() {
        let data = vec![0u8; 16];
        assert!(matches!(
            rgba_from_slice(&data, usize::MAX / 2, 3),
            Err(ToneError::InvalidBufferLength(16, _))
        ));
        assert!(matches!(
            rgba_from_slice(&data, usize::MAX, usize::MAX),
            Err(ToneError::InvalidBufferLength(16, _))
        ));
    }

    #[test]
    fn test_rgba_from_slice_shape() {
        let data = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
        let image = rgba_from_slice(&data, 2, 1).unwrap();
        assert_eq!(image.dim(), (1, 2, 4));
        assert_eq!(image[[0, 1, 0]], 5);
        assert_eq!(rgba_into_vec(image), data);
    }

    #[test]
    fn test_rgba_from_slice_length_mismatch() {
        let data = vec![0u8; 7];
        match rgba_from_slice(&data, 2, 1) {
            Err(ToneError::InvalidBufferLength(actual, expected)) => {
                assert_eq!(actual, 7);
                assert_eq!(expected, 8);
            }
            other => panic!("expected InvalidBufferLength, got {:?}", other),
        }
    }

    #[test]
    fn test_rgba_into_vec_non_standard_layout() {
        let data: Vec<u8> = (0..16).collect();
        let image = rgba_from_slice(&data, 2, 2).unwrap();
        let mut transposed = image.clone();
        transposed.swap_axes(0, 1);
        let flat = rgba_into_vec(transposed);
        // pixel (row 0, col 1) of the transposed image is pixel (1, 0) of the original
        assert_eq!(&flat[4..8], &data[8..12]);
    }

    #[test]
    fn test_check_rgba() {
        let rgb = Array3::<u8>::zeros((1, 1, 3));
        assert!(matches!(check_rgba(&rgb.view()), Err(ToneError::InvalidChannels(3))));
        let rgba = Array3::<u8>::zeros((1, 1, 4));
        assert!(check_rgba(&rgba.view()).is_ok());
    }

    #[test]
    fn test_store_channel_clamps_and_rounds() {
        assert_eq!(store_channel(-12.0), 0);
        assert_eq!(store_channel(300.0), 255);
        assert_eq!(store_channel(100.4), 100);
        assert_eq!(store_channel(100.6), 101);
        assert_eq!(store_channel(100.5), 100);
        assert_eq!(store_channel(101.5), 102);
    }
}
