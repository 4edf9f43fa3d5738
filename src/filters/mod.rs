//! Filter modules for tone adjustment.
//!
//! ## Supported Formats
//!
//! All filters take RGBA8 images as `(height, width, 4)` arrays of `u8` and
//! return a new array; the input is never modified. Alpha is always
//! preserved. Other channel counts are rejected with
//! [`ToneError::InvalidChannels`](crate::error::ToneError::InvalidChannels).
//!
//! ## Filters
//!
//! - **Curves**: brightness, shadows, highlights, blacks, black & white
//! - **Binarize**: white point threshold for documents and whiteboards
//! - **Flip**: vertical / horizontal mirroring
//! - **Histogram**: luminance histogram and bar chart rendering
//!
//! [`adjust::adjust`] chains them the way the editor does on each redraw.

pub mod core;
pub mod luminance;
pub mod tone_curve;
pub mod binarize;
pub mod flip;
pub mod histogram;
pub mod adjust;
