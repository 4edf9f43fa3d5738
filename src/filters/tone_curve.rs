//! Luminance driven tone curves: brightness, shadows, highlights, blacks.
//!
//! Every pixel gets one additive offset computed from its luminance `L`:
//!
//! ```text
//! shadow    * (255 - L) / 255
//! highlight * L / 255
//! black     * L * W(L) / 255
//! brightness
//! ```
//!
//! `W(L)` is a stepped weight that fades the black-point slider out on
//! bright pixels. In color mode the offset is added to R, G and B; in
//! black-and-white mode all three channels become `L + offset`. Results are
//! clamped to 0-255.

use ndarray::{Array3, ArrayView3, Axis, Zip};

use crate::error::ToneError;
use crate::filters::core::{check_rgba, store_channel};
use crate::filters::luminance::luminance;
use crate::params::AdjustmentParameters;

/// Upper luminance bound (exclusive) and black-point weight of each step.
/// Luminance at or above the last bound gets no black-point offset.
const BLACK_WEIGHTS: [(f64, f64); 10] = [
    (25.0, 1.0),
    (50.0, 0.95),
    (75.0, 0.88),
    (100.0, 0.77),
    (125.0, 0.60),
    (150.0, 0.44),
    (175.0, 0.30),
    (200.0, 0.20),
    (225.0, 0.10),
    (250.0, 0.05),
];

/// Black-point weight for a luminance value.
pub fn black_weight(l: f64) -> f64 {
    BLACK_WEIGHTS
        .iter()
        .find(|(limit, _)| l < *limit)
        .map_or(0.0, |&(_, weight)| weight)
}

/// The slider values of one curve pass, converted once per pass.
#[derive(Clone, Copy, Debug)]
pub struct CurveFactors {
    brightness: f64,
    shadow: f64,
    highlight: f64,
    black: f64,
    black_and_white: bool,
}

impl CurveFactors {
    /// Extract the curve sliders from a parameter set.
    pub fn new(params: &AdjustmentParameters) -> Self {
        Self {
            brightness: params.brightness as f64,
            shadow: params.shadow as f64,
            highlight: params.highlight as f64,
            black: params.black as f64,
            black_and_white: params.black_and_white,
        }
    }

    /// Combined additive offset for a pixel of luminance `l`.
    #[inline]
    pub fn offset(&self, l: f64) -> f64 {
        let shadow = self.shadow * ((255.0 - l) / 255.0);
        let highlight = self.highlight * (l / 255.0);
        let black = self.black * ((l * black_weight(l)) / 255.0);
        shadow + highlight + black + self.brightness
    }

    /// Adjust one pixel in place. Alpha is left untouched.
    #[inline]
    pub fn apply_pixel(&self, px: &mut [u8]) {
        let l = luminance(px[0], px[1], px[2]);
        let offset = self.offset(l);

        if self.black_and_white {
            let v = store_channel(l + offset);
            px[0] = v;
            px[1] = v;
            px[2] = v;
        } else {
            for c in px.iter_mut().take(3) {
                *c = store_channel(*c as f64 + offset);
            }
        }
    }
}

/// Apply the tone curves to an RGBA image.
///
/// # Arguments
/// * `input` - Image of shape (height, width, 4)
/// * `params` - Slider values; `binarize`, `white_point` and the flip flags are ignored
///
/// # Returns
/// New adjusted image, alpha preserved
pub fn apply_curves(
    input: ArrayView3<u8>,
    params: &AdjustmentParameters,
) -> Result<Array3<u8>, ToneError> {
    check_rgba(&input)?;
    let factors = CurveFactors::new(params);
    let mut output = input.as_standard_layout().into_owned();

    Zip::from(output.lanes_mut(Axis(2))).par_for_each(|mut px| {
        let mut rgba = [px[0], px[1], px[2], px[3]];
        factors.apply_pixel(&mut rgba);
        px[0] = rgba[0];
        px[1] = rgba[1];
        px[2] = rgba[2];
    });

    Ok(output)
}
