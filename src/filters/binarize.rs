//! Binarize ("optimize") filter.
//!
//! Meant for snapshots of whiteboards and documents: every pixel brighter
//! than the white point becomes pure white, everything else is kept as is.
//! The operation is lossy, so re-adjusting always has to start again from
//! the untouched source.

use ndarray::{Array3, ArrayView3, Axis, Zip};

use crate::error::ToneError;
use crate::filters::core::check_rgba;
use crate::filters::luminance::luminance;

/// Force pixels above the white point to white.
///
/// # Arguments
/// * `input` - Image of shape (height, width, 4)
/// * `white_point` - Luminance threshold (0-255); pixels with luminance strictly above it turn white
///
/// # Returns
/// New image, alpha preserved
pub fn binarize_u8(input: ArrayView3<u8>, white_point: u8) -> Result<Array3<u8>, ToneError> {
    check_rgba(&input)?;
    let threshold = white_point as f64;
    let mut output = input.as_standard_layout().into_owned();

    Zip::from(output.lanes_mut(Axis(2))).par_for_each(|mut px| {
        if luminance(px[0], px[1], px[2]) > threshold {
            px[0] = 255;
            px[1] = 255;
            px[2] = 255;
        }
    });

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_pixel(v: u8) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = v;
        img[[0, 0, 1]] = v;
        img[[0, 0, 2]] = v;
        img[[0, 0, 3]] = 255;
        img
    }

    #[test]
    fn test_below_white_point_unchanged() {
        let img = gray_pixel(100);
        let result = binarize_u8(img.view(), 180).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_above_white_point_turns_white() {
        let img = gray_pixel(100);
        let result = binarize_u8(img.view(), 50).unwrap();
        assert_eq!(result.iter().copied().collect::<Vec<_>>(), vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_equal_to_white_point_unchanged() {
        let img = gray_pixel(100);
        let result = binarize_u8(img.view(), 100).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_alpha_preserved() {
        let mut img = gray_pixel(200);
        img[[0, 0, 3]] = 12;
        let result = binarize_u8(img.view(), 10).unwrap();
        assert_eq!(result[[0, 0, 0]], 255);
        assert_eq!(result[[0, 0, 3]], 12);
    }

    #[test]
    fn test_white_point_bounds() {
        let mut img = Array3::<u8>::zeros((1, 3, 4));
        for (x, v) in [1u8, 128, 255].iter().enumerate() {
            img[[0, x, 0]] = *v;
            img[[0, x, 1]] = *v;
            img[[0, x, 2]] = *v;
            img[[0, x, 3]] = 255;
        }

        // nothing exceeds 255
        let result = binarize_u8(img.view(), 255).unwrap();
        assert_eq!(result, img);

        // every non-black pixel exceeds 0
        let result = binarize_u8(img.view(), 0).unwrap();
        for x in 0..3 {
            assert_eq!(result[[0, x, 0]], 255);
            assert_eq!(result[[0, x, 2]], 255);
        }
    }

    #[test]
    fn test_idempotent() {
        let mut img = Array3::<u8>::zeros((4, 4, 4));
        for (i, v) in img.iter_mut().enumerate() {
            *v = (i * 53 % 256) as u8;
        }
        for white_point in [0u8, 64, 180, 255] {
            let once = binarize_u8(img.view(), white_point).unwrap();
            let twice = binarize_u8(once.view(), white_point).unwrap();
            assert_eq!(once, twice, "white point {}", white_point);
        }
    }
}
