//! One complete adjustment pass: flip, then binarize or curves.

use std::time::Instant;

use ndarray::{Array3, ArrayView3};

use crate::error::ToneError;
use crate::filters::binarize::binarize_u8;
use crate::filters::flip::flip_rgba;
use crate::filters::tone_curve::apply_curves;
use crate::params::AdjustmentParameters;

/// Produce the adjusted image for a parameter set.
///
/// The input is never modified, so calling this repeatedly on the same
/// pristine source with different parameters is order independent.
///
/// # Errors
/// `InvalidParameter` for a white point outside 0-255, `InvalidChannels`
/// for non-RGBA input.
pub fn adjust(
    input: ArrayView3<u8>,
    params: &AdjustmentParameters,
) -> Result<Array3<u8>, ToneError> {
    params.validate()?;
    let start = Instant::now();

    let flipped = flip_rgba(input, params.flip_vertical, params.flip_horizontal)?;
    let output = if params.binarize {
        // validate() guarantees 0..=255
        binarize_u8(flipped.view(), params.white_point as u8)?
    } else {
        apply_curves(flipped.view(), params)?
    };

    let (height, width, _) = output.dim();
    log::debug!(
        "adjusted {}x{} image (binarize={}) in {:?}",
        width,
        height,
        params.binarize,
        start.elapsed()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((2, 2, 4));
        let values = [[10u8, 100], [200, 250]];
        for y in 0..2 {
            for x in 0..2 {
                for c in 0..3 {
                    img[[y, x, c]] = values[y][x];
                }
                img[[y, x, 3]] = 255;
            }
        }
        img
    }

    #[test]
    fn test_defaults_are_noop() {
        let img = image();
        let result = adjust(img.view(), &AdjustmentParameters::default()).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_binarize_takes_precedence_over_curves() {
        let img = image();
        let params = AdjustmentParameters {
            binarize: true,
            white_point: 150,
            brightness: 100,
            ..Default::default()
        };
        let result = adjust(img.view(), &params).unwrap();
        assert_eq!(result[[0, 0, 0]], 10);
        assert_eq!(result[[0, 1, 0]], 100);
        assert_eq!(result[[1, 0, 0]], 255);
        assert_eq!(result[[1, 1, 0]], 255);
    }

    #[test]
    fn test_flip_happens_before_tone_mapping() {
        let img = image();
        let params = AdjustmentParameters {
            flip_vertical: true,
            brightness: 5,
            ..Default::default()
        };
        let result = adjust(img.view(), &params).unwrap();
        assert_eq!(result[[0, 0, 0]], 205);
        assert_eq!(result[[0, 1, 0]], 255);
        assert_eq!(result[[1, 0, 0]], 15);
        assert_eq!(result[[1, 1, 0]], 105);
    }

    #[test]
    fn test_rejects_invalid_white_point() {
        let img = image();
        let params = AdjustmentParameters { white_point: 400, ..Default::default() };
        assert!(matches!(
            adjust(img.view(), &params),
            Err(ToneError::InvalidParameter { name: "white_point", .. })
        ));
    }

    #[test]
    fn test_recompute_from_source_is_order_independent() {
        let img = image();
        let bright = AdjustmentParameters { brightness: 40, ..Default::default() };
        let dark = AdjustmentParameters { brightness: -40, ..Default::default() };

        let _ = adjust(img.view(), &bright).unwrap();
        let a = adjust(img.view(), &dark).unwrap();
        let b = adjust(img.view(), &dark).unwrap();
        assert_eq!(a, b);
    }
}
