//! Axis flips applied when the source is drawn onto the working surface.
//!
//! A flip is described the way a 2D canvas context would draw it: a scale
//! of +1 or -1 per axis and the origin offset that keeps the image inside
//! the surface. Vertical mirrors rows, horizontal mirrors columns, both is a
//! 180 degree rotation.

use ndarray::{Array3, ArrayView3, Axis};

use crate::error::ToneError;
use crate::filters::core::check_rgba;

/// Draw transform for a flipped image of a given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipTransform {
    /// Horizontal scale, 1 or -1.
    pub scale_x: i64,
    /// Vertical scale, 1 or -1.
    pub scale_y: i64,
    /// Draw origin x in the scaled space.
    pub offset_x: i64,
    /// Draw origin y in the scaled space.
    pub offset_y: i64,
}

impl FlipTransform {
    /// Transform for the given flags and image size.
    pub fn new(vertical: bool, horizontal: bool, width: usize, height: usize) -> Self {
        let (scale_x, offset_x) = if horizontal { (-1, -(width as i64)) } else { (1, 0) };
        let (scale_y, offset_y) = if vertical { (-1, -(height as i64)) } else { (1, 0) };
        Self {
            scale_x,
            scale_y,
            offset_x,
            offset_y,
        }
    }

    /// True when neither axis is mirrored.
    pub fn is_identity(&self) -> bool {
        self.scale_x == 1 && self.scale_y == 1
    }

    /// Destination pixel of source pixel `(x, y)`.
    pub fn map_pixel(&self, x: usize, y: usize) -> (usize, usize) {
        (
            Self::map_axis(self.scale_x, self.offset_x, x),
            Self::map_axis(self.scale_y, self.offset_y, y),
        )
    }

    // a mirrored pixel covers [scale * (offset + p + 1), scale * (offset + p)]
    fn map_axis(scale: i64, offset: i64, p: usize) -> usize {
        let edge = scale * (offset + p as i64);
        if scale < 0 {
            (edge - 1) as usize
        } else {
            edge as usize
        }
    }

    /// Draw `input` through this transform into a new image.
    pub fn apply(&self, input: ArrayView3<u8>) -> Result<Array3<u8>, ToneError> {
        check_rgba(&input)?;
        let mut view = input;
        if self.scale_y < 0 {
            view.invert_axis(Axis(0));
        }
        if self.scale_x < 0 {
            view.invert_axis(Axis(1));
        }
        Ok(view.as_standard_layout().into_owned())
    }
}

/// Flip an RGBA image vertically and/or horizontally.
pub fn flip_rgba(
    input: ArrayView3<u8>,
    vertical: bool,
    horizontal: bool,
) -> Result<Array3<u8>, ToneError> {
    let (height, width, _) = input.dim();
    FlipTransform::new(vertical, horizontal, width, height).apply(input)
}
