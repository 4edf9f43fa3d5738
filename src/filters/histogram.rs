//! Luminance histogram and its bar chart rendering.

use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayView3, Axis, Zip};
use serde::Serialize;

use crate::error::ToneError;
use crate::filters::core::{check_rgba, CHANNELS};
use crate::filters::luminance::luminance;

/// Number of luminance buckets (0-254).
pub const HISTOGRAM_BUCKETS: usize = 255;

/// Color of a filled histogram cell.
pub const BAR_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Color of an empty histogram cell.
pub const BACKGROUND_COLOR: [u8; 4] = [240, 240, 240, 255];

/// Pixel counts per truncated luminance value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: vec![0; HISTOGRAM_BUCKETS],
        }
    }
}

impl Histogram {
    /// Build a histogram from explicit counts, zero-filling missing buckets.
    pub fn from_counts(counts: &[u64]) -> Self {
        let mut hist = Self::default();
        for (dst, src) in hist.counts.iter_mut().zip(counts) {
            *dst = *src;
        }
        hist
    }

    /// Counts of all 255 buckets, darkest first.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Count of one bucket, zero when out of range.
    pub fn get(&self, bucket: usize) -> u64 {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    /// Sum of all buckets, equal to the number of pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Count of the tallest bucket.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// True when no pixel was counted.
    pub fn is_empty(&self) -> bool {
        self.max_count() == 0
    }

    /// One line of `.` per bucket, one dot per pixel. Debug output only.
    pub fn dot_lines(&self) -> Vec<String> {
        self.counts.iter().map(|&count| ".".repeat(count as usize)).collect()
    }
}

/// Bucket of a luminance value.
///
/// Luminance is truncated toward zero. Pure white evaluates to 255.0 and is
/// folded into the last bucket.
#[inline]
pub fn bucket_of(l: f64) -> usize {
    (l as usize).min(HISTOGRAM_BUCKETS - 1)
}

/// Count pixels per luminance bucket.
///
/// # Arguments
/// * `input` - Image of shape (height, width, 4)
///
/// # Returns
/// Histogram whose total equals width * height
pub fn compute_histogram(input: ArrayView3<u8>) -> Result<Histogram, ToneError> {
    check_rgba(&input)?;

    let counts = Zip::from(input.lanes(Axis(2)))
        .into_par_iter()
        .fold(
            || vec![0u64; HISTOGRAM_BUCKETS],
            |mut local, (px,)| {
                local[bucket_of(luminance(px[0], px[1], px[2]))] += 1;
                local
            },
        )
        .reduce(
            || vec![0u64; HISTOGRAM_BUCKETS],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        );

    Ok(Histogram { counts })
}

/// Render a histogram as a bottom-anchored bar chart.
///
/// The chart is one column per bucket and `height` rows. Cell (row, col) is
/// filled when `count / max_count * height > height - row`, so the tallest
/// bucket reaches the second row from the top. An empty histogram renders
/// as background only.
///
/// # Returns
/// Image of shape (height, 255, 4)
pub fn render_histogram(hist: &Histogram, height: usize) -> Array3<u8> {
    let mut output = Array3::<u8>::zeros((height, HISTOGRAM_BUCKETS, CHANNELS));
    let max = hist.max_count();

    let bars: Vec<f64> = hist
        .counts
        .iter()
        .map(|&count| {
            if max == 0 {
                0.0
            } else {
                count as f64 / max as f64 * height as f64
            }
        })
        .collect();

    Zip::indexed(output.lanes_mut(Axis(2))).par_for_each(|(row, col), mut px| {
        let color = if bars[col] > (height - row) as f64 {
            BAR_COLOR
        } else {
            BACKGROUND_COLOR
        };
        for (c, v) in color.iter().enumerate() {
            px[c] = *v;
        }
    });

    output
}
