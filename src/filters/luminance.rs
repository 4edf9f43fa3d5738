//! Luminance weighting shared by the tone curves and the histogram.
//!
//! The weights are not BT.601/709. They come from the editor's original
//! canvas code and must stay as they are so histograms and thresholds match
//! images adjusted there.

/// Red weight.
pub const LUMA_R: f64 = 0.34;
/// Green weight.
pub const LUMA_G: f64 = 0.5;
/// Blue weight.
pub const LUMA_B: f64 = 0.16;

/// Luminance of one pixel, nominally 0.0-255.0.
///
/// Pure white evaluates to exactly 255.0; callers that bucket the value
/// must account for that.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_sum_to_one() {
        assert_relative_eq!(LUMA_R + LUMA_G + LUMA_B, 1.0);
    }

    #[test]
    fn test_gray_pixels_are_exact() {
        assert_eq!(luminance(0, 0, 0), 0.0);
        assert_eq!(luminance(10, 10, 10), 10.0);
        assert_eq!(luminance(100, 100, 100), 100.0);
        assert_eq!(luminance(255, 255, 255), 255.0);
    }

    #[test]
    fn test_primaries() {
        assert_relative_eq!(luminance(255, 0, 0), 86.7, epsilon = 1e-9);
        assert_relative_eq!(luminance(0, 255, 0), 127.5, epsilon = 1e-9);
        assert_relative_eq!(luminance(0, 0, 255), 40.8, epsilon = 1e-9);
    }
}
